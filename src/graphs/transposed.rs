/*
 * SPDX-FileCopyrightText: 2026 The digraph-scc contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::{BidirectionalGraph, RandomAccessGraph};

/// A view exchanging successors and predecessors of a [bidirectional
/// graph](BidirectionalGraph).
///
/// No data is copied: the successors of a node in the view are the
/// predecessors of the node in the underlying graph, so the cost of
/// enumerating them is that of
/// [`predecessors`](BidirectionalGraph::predecessors).
///
/// # Examples
///
/// ```
/// use digraph_scc::graphs::{directed::DirectedGraph, transposed::Transposed};
/// use digraph_scc::traits::RandomAccessGraph;
///
/// let graph: DirectedGraph = DirectedGraph::from_arcs(3, [(0, 1), (2, 1)])?;
/// let transpose = Transposed(&graph);
///
/// assert_eq!(transpose.successors(1).collect::<Vec<_>>(), vec![0, 2]);
/// assert_eq!(transpose.outdegree(0), 0);
/// # Ok::<(), digraph_scc::graphs::directed::GraphError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Transposed<G>(pub G);

impl<G: BidirectionalGraph> RandomAccessGraph for Transposed<G> {
    type Successors<'succ>
        = G::Predecessors<'succ>
    where
        Self: 'succ;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.0.num_nodes()
    }

    #[inline(always)]
    fn num_arcs(&self) -> u64 {
        self.0.num_arcs()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> Self::Successors<'_> {
        self.0.predecessors(node)
    }
}

impl<G: BidirectionalGraph> BidirectionalGraph for Transposed<G> {
    type Predecessors<'pred>
        = G::Successors<'pred>
    where
        Self: 'pred;

    #[inline(always)]
    fn predecessors(&self, node: usize) -> Self::Predecessors<'_> {
        self.0.successors(node)
    }
}
