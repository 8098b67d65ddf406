/*
 * SPDX-FileCopyrightText: 2026 The digraph-scc contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Strategies for enumerating the predecessors of a node.
//!
//! A [`DirectedGraph`](super::directed::DirectedGraph) always stores its
//! successor lists; how predecessors are found is decided at construction time
//! by a type parameter implementing [`ReverseAdjacency`]:
//!
//! * [`Materialized`] keeps a predecessor list for each node, updated on every
//!   arc insertion. Enumerating the predecessors of a node costs time
//!   proportional to its indegree. This is the default.
//! * [`OnDemand`] stores nothing and finds predecessors by scanning all
//!   successor lists. Enumerating the predecessors of a node costs time
//!   proportional to the size of the whole graph, so Kosaraju's algorithm
//!   becomes quadratic. It is provided only to measure the difference.
//!
//! Both strategies return the same multiset of predecessors, but not
//! necessarily in the same order: [`Materialized`] follows arc insertion
//! order, whereas [`OnDemand`] follows the order of the sources.

use sealed::sealed;
use std::iter::Copied;
use std::slice::Iter;

/// A strategy to enumerate predecessors.
///
/// This trait is sealed: the only implementations are [`Materialized`] and
/// [`OnDemand`].
#[sealed]
pub trait ReverseAdjacency: Default {
    /// A short name for the strategy, used in logs.
    const NAME: &'static str;

    /// The type of the iterator returned by
    /// [`predecessors`](ReverseAdjacency::predecessors).
    type Predecessors<'a>: Iterator<Item = usize>
    where
        Self: 'a;

    /// Reserves capacity for at least `additional` more nodes.
    fn reserve(&mut self, additional: usize);

    /// Called when a new node is added to the graph.
    fn add_node(&mut self);

    /// Called when the arc `(src, dst)` is added to the graph.
    fn add_arc(&mut self, src: usize, dst: usize);

    /// Returns the predecessors of `node`, given the successor lists of the
    /// graph.
    fn predecessors<'a>(&'a self, succ: &'a [Vec<usize>], node: usize) -> Self::Predecessors<'a>;
}

/// Explicit predecessor lists, kept in sync with the successor lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Materialized {
    pred: Vec<Vec<usize>>,
}

#[sealed]
impl ReverseAdjacency for Materialized {
    const NAME: &'static str = "materialized";

    type Predecessors<'a>
        = Copied<Iter<'a, usize>>
    where
        Self: 'a;

    fn reserve(&mut self, additional: usize) {
        self.pred.reserve(additional);
    }

    #[inline(always)]
    fn add_node(&mut self) {
        self.pred.push(Vec::new());
    }

    #[inline(always)]
    fn add_arc(&mut self, src: usize, dst: usize) {
        self.pred[dst].push(src);
    }

    #[inline(always)]
    fn predecessors<'a>(&'a self, _succ: &'a [Vec<usize>], node: usize) -> Self::Predecessors<'a> {
        self.pred[node].iter().copied()
    }
}

/// Predecessors computed by scanning all successor lists.
///
/// # Performance
///
/// Each call to [`predecessors`](ReverseAdjacency::predecessors) costs
/// *O*(*n* + *m*), where *n* is the number of nodes and *m* the number of
/// arcs, so a full Kosaraju visit costs *O*(*n*(*n* + *m*)). Use
/// [`Materialized`] unless you are measuring this very cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OnDemand;

#[sealed]
impl ReverseAdjacency for OnDemand {
    const NAME: &'static str = "on-demand";

    type Predecessors<'a>
        = ScanPredecessors<'a>
    where
        Self: 'a;

    #[inline(always)]
    fn reserve(&mut self, _additional: usize) {}

    #[inline(always)]
    fn add_node(&mut self) {}

    #[inline(always)]
    fn add_arc(&mut self, _src: usize, _dst: usize) {}

    fn predecessors<'a>(&'a self, succ: &'a [Vec<usize>], node: usize) -> Self::Predecessors<'a> {
        ScanPredecessors {
            succ,
            target: node,
            src: 0,
            pos: 0,
        }
    }
}

/// The iterator returned by [`OnDemand`].
///
/// A source is returned once for each arc pointing to the target, so parallel
/// arcs yield the same predecessor multiple times, exactly as in the case of
/// [`Materialized`].
#[derive(Debug, Clone)]
pub struct ScanPredecessors<'a> {
    succ: &'a [Vec<usize>],
    target: usize,
    src: usize,
    pos: usize,
}

impl Iterator for ScanPredecessors<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while let Some(succ) = self.succ.get(self.src) {
            while let Some(&dst) = succ.get(self.pos) {
                self.pos += 1;
                if dst == self.target {
                    return Some(self.src);
                }
            }
            self.src += 1;
            self.pos = 0;
        }
        None
    }
}
