/*
 * SPDX-FileCopyrightText: 2026 The digraph-scc contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Random-access traits for directed graphs on dense node indices.
//!
//! Graphs in this crate expose vertices with arbitrary integer identifiers,
//! but visits and algorithms work on *nodes*, that is, dense indices in
//! `0..num_nodes()` assigned in insertion order. The mapping between the two
//! is provided by the concrete graph type (see
//! [`DirectedGraph::node_of`](crate::graphs::directed::DirectedGraph::node_of)).

use impl_tools::autoimpl;

/// A directed graph providing random access to the successors of its nodes.
///
/// Successors are returned in the order in which the corresponding arcs were
/// added; parallel arcs yield the same successor multiple times.
#[autoimpl(for<S: trait + ?Sized> &S, &mut S)]
pub trait RandomAccessGraph {
    /// The type of the iterator over the successors of a node
    /// returned by [`successors`](RandomAccessGraph::successors).
    type Successors<'succ>: IntoIterator<Item = usize>
    where
        Self: 'succ;

    /// Returns the number of nodes in the graph.
    fn num_nodes(&self) -> usize;

    /// Returns the number of arcs in the graph.
    fn num_arcs(&self) -> u64;

    /// Returns the successors of a node.
    fn successors(&self, node: usize) -> Self::Successors<'_>;

    /// Returns the number of successors of a node.
    ///
    /// Note that the default implementation iterates over the successors.
    fn outdegree(&self, node: usize) -> usize {
        self.successors(node).into_iter().count()
    }
}

/// A [random-access graph](RandomAccessGraph) that can also enumerate the
/// predecessors of its nodes.
///
/// The cost of [`predecessors`](BidirectionalGraph::predecessors) depends on
/// the implementation: it might be proportional to the indegree of the node,
/// or to the size of the whole graph.
#[autoimpl(for<S: trait + ?Sized> &S, &mut S)]
pub trait BidirectionalGraph: RandomAccessGraph {
    /// The type of the iterator over the predecessors of a node
    /// returned by [`predecessors`](BidirectionalGraph::predecessors).
    type Predecessors<'pred>: IntoIterator<Item = usize>
    where
        Self: 'pred;

    /// Returns the predecessors of a node.
    fn predecessors(&self, node: usize) -> Self::Predecessors<'_>;
}
