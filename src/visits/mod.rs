/*
 * SPDX-FileCopyrightText: 2026 The digraph-scc contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Visits on graphs.
//!
//! Both passes of [Kosaraju's algorithm](crate::algo::sccs::kosaraju) are
//! [depth-first visits](depth_first): the first one runs on a
//! [`DirectedGraph`](crate::graphs::directed::DirectedGraph) to compute the
//! [exit order](crate::algo::top_sort), the second one runs on its
//! [`Transposed`](crate::graphs::transposed::Transposed) view and collects a
//! component for each visit tree. A visit works on dense node indices, so it
//! can be run on any [`RandomAccessGraph`](crate::traits::RandomAccessGraph).
//!
//! A [sequential visit](Sequential) reports what happens through a callback
//! receiving events of type `A`, where `A` implements [`Event`]. The callback
//! returns a `ControlFlow<E, ()>`: a [`Break`](ControlFlow::Break) stops the
//! visit, and its value is returned by the visit method. Visits that are never
//! stopped, such as those of Kosaraju's algorithm, can use
//! [`continue_value_no_break`](no_break::NoBreak::continue_value_no_break)
//! from the [`no-break`](https://crates.io/crates/no-break) crate to get rid
//! of the result. [`StoppedWhenDone`] is a break value for visits that
//! compute their result early, such as cycle detection.
//!
//! A visit can also be given a filter, called on [`Event::FilterArgs`] when a
//! new node is discovered: if the filter returns false, the node is ignored
//! and not marked as known, so a later visit tree might still reach it.

pub mod depth_first;

use std::ops::ControlFlow;
use thiserror::Error;

#[derive(Error, Debug)]
/// The result of the visit was computed without completing the visit; for
/// example, a single arc pointing at the visit path proves that a graph is
/// not acyclic.
#[error("Stopped when done")]
pub struct StoppedWhenDone;

/// Types usable as arguments for the callbacks in visits.
///
/// Variants represent visit events (previsits, postvisits, etc.) and carry the
/// related nodes. The associated type is the argument of the filter.
pub trait Event {
    /// The type passed as input to the filter.
    type FilterArgs;
}

/// A sequential visit.
///
/// The visit starts from the given roots, in order, skipping roots that have
/// already been reached by a previous visit tree. Known nodes are remembered
/// across calls until [`reset`](Sequential::reset) is called.
pub trait Sequential<A: Event> {
    /// Visits the graph from the specified nodes with a filter function.
    ///
    /// # Arguments
    ///
    /// * `roots`: The nodes to start the visit from.
    ///
    /// * `callback`: The callback function.
    ///
    /// * `filter`: The filter function.
    fn visit_filtered<
        R: IntoIterator<Item = usize>,
        E,
        C: FnMut(A) -> ControlFlow<E, ()>,
        F: FnMut(A::FilterArgs) -> bool,
    >(
        &mut self,
        roots: R,
        callback: C,
        filter: F,
    ) -> ControlFlow<E, ()>;

    /// Visits the graph from the specified nodes.
    ///
    /// # Arguments
    ///
    /// * `roots`: The nodes to start the visit from.
    ///
    /// * `callback`: The callback function.
    fn visit<R: IntoIterator<Item = usize>, E, C: FnMut(A) -> ControlFlow<E, ()>>(
        &mut self,
        roots: R,
        callback: C,
    ) -> ControlFlow<E, ()> {
        self.visit_filtered(roots, callback, |_| true)
    }

    /// Forgets all known nodes, making it possible to reuse the visit.
    fn reset(&mut self);
}
