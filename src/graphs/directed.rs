/*
 * SPDX-FileCopyrightText: 2026 The digraph-scc contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::reverse::{Materialized, ReverseAdjacency};
use crate::traits::{BidirectionalGraph, RandomAccessGraph};
use indexmap::IndexSet;
use std::iter::Copied;
use std::slice::Iter;
use thiserror::Error;

/// The type of vertex identifiers.
pub type VertexId = i64;

/// Errors raised while building or querying a [`DirectedGraph`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The vertex has never been added with
    /// [`add_vertex`](DirectedGraph::add_vertex).
    #[error("Vertex {0} is not registered in the graph")]
    UnknownVertex(VertexId),
}

/// A mutable directed graph with integer vertex identifiers based on a vector
/// of vectors.
///
/// Vertices must be added explicitly with [`add_vertex`](Self::add_vertex)
/// before they can be used as endpoints of an edge. Each vertex is assigned a
/// *node*, that is, a dense index in `0..num_vertices()`, in insertion order;
/// the [`RandomAccessGraph`] and [`BidirectionalGraph`] implementations work
/// on nodes, whereas the other methods of this structure work on vertex
/// identifiers.
///
/// Edges are never deduplicated: parallel edges and self-loops are stored as
/// they are added, and neighbors are returned in insertion order.
///
/// The type parameter `R` selects how in-neighbors are found (see the
/// [`reverse`](super::reverse) module). With the default, [`Materialized`],
/// adding an edge also updates a list of in-neighbors;
/// with [`OnDemand`](super::reverse::OnDemand) in-neighbors are found by
/// scanning the whole graph.
///
/// # Examples
///
/// ```
/// use digraph_scc::graphs::directed::DirectedGraph;
///
/// let mut graph: DirectedGraph = DirectedGraph::new();
/// graph.add_vertex(10);
/// graph.add_vertex(20);
/// graph.add_edge(10, 20)?;
/// graph.add_edge(10, 20)?;
///
/// assert_eq!(graph.num_edges(), 2);
/// assert_eq!(graph.out_neighbors(10)?.collect::<Vec<_>>(), vec![20, 20]);
/// assert_eq!(graph.in_neighbors(20)?.collect::<Vec<_>>(), vec![10, 10]);
/// assert!(graph.add_edge(10, 30).is_err());
/// # Ok::<(), digraph_scc::graphs::directed::GraphError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DirectedGraph<R: ReverseAdjacency = Materialized> {
    /// The vertex identifiers, in insertion order.
    ids: IndexSet<VertexId>,
    /// For each node, its list of successors.
    succ: Vec<Vec<usize>>,
    /// The strategy used to find predecessors.
    reverse: R,
    /// The number of edges in the graph.
    num_edges: u64,
}

impl<R: ReverseAdjacency> core::default::Default for DirectedGraph<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ReverseAdjacency> DirectedGraph<R> {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            ids: IndexSet::new(),
            succ: vec![],
            reverse: R::default(),
            num_edges: 0,
        }
    }

    /// Creates a new empty graph with room for `n` vertices.
    pub fn with_capacity(n: usize) -> Self {
        let mut reverse = R::default();
        reverse.reserve(n);
        Self {
            ids: IndexSet::with_capacity(n),
            succ: Vec::with_capacity(n),
            reverse,
            num_edges: 0,
        }
    }

    /// Creates a new graph with vertices `0..num_vertices` and the given
    /// edges, added in iteration order.
    pub fn from_arcs(
        num_vertices: usize,
        arcs: impl IntoIterator<Item = (VertexId, VertexId)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::with_capacity(num_vertices);
        for id in 0..num_vertices {
            graph.add_vertex(id as VertexId);
        }
        for (u, v) in arcs {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Adds an isolated vertex to the graph and returns true if it is a new
    /// vertex.
    ///
    /// Adding an existing vertex is a no-op.
    pub fn add_vertex(&mut self, id: VertexId) -> bool {
        let new = self.ids.insert(id);
        if new {
            self.succ.push(Vec::new());
            self.reverse.add_node();
        }
        new
    }

    /// Adds an edge from `u` to `v`.
    ///
    /// Parallel edges and self-loops are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownVertex`] if either endpoint has not been
    /// added to the graph; in that case, the graph is not modified.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<(), GraphError> {
        let src = self.node_of(u)?;
        let dst = self.node_of(v)?;
        self.succ[src].push(dst);
        self.reverse.add_arc(src, dst);
        self.num_edges += 1;
        Ok(())
    }

    /// Returns the number of vertices.
    #[inline(always)]
    pub fn num_vertices(&self) -> usize {
        self.ids.len()
    }

    /// Returns the number of edges, including parallel edges and self-loops.
    #[inline(always)]
    pub fn num_edges(&self) -> u64 {
        self.num_edges
    }

    /// Returns whether the vertex has been added to the graph.
    pub fn contains(&self, id: VertexId) -> bool {
        self.ids.contains(&id)
    }

    /// Returns an iterator over the vertices, in insertion order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        self.ids.iter().copied()
    }

    /// Returns the node associated with a vertex.
    pub fn node_of(&self, id: VertexId) -> Result<usize, GraphError> {
        self.ids
            .get_index_of(&id)
            .ok_or(GraphError::UnknownVertex(id))
    }

    /// Returns the vertex associated with a node.
    ///
    /// # Panics
    ///
    /// This method will panic if `node` is greater than or equal to the number
    /// of vertices.
    #[inline(always)]
    pub fn id_of(&self, node: usize) -> VertexId {
        self.ids[node]
    }

    /// Returns the out-neighbors of a vertex, in insertion order.
    pub fn out_neighbors(
        &self,
        id: VertexId,
    ) -> Result<impl Iterator<Item = VertexId> + '_, GraphError> {
        let node = self.node_of(id)?;
        Ok(self.succ[node].iter().map(move |&v| self.id_of(v)))
    }

    /// Returns the in-neighbors of a vertex.
    ///
    /// The cost of this method depends on the [reverse-adjacency
    /// strategy](super::reverse) of the graph.
    pub fn in_neighbors(
        &self,
        id: VertexId,
    ) -> Result<impl Iterator<Item = VertexId> + '_, GraphError> {
        let node = self.node_of(id)?;
        Ok(self
            .reverse
            .predecessors(&self.succ, node)
            .map(move |u| self.id_of(u)))
    }

    /// Returns an iterator over all edges, grouped by source in insertion
    /// order of the sources.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.succ.iter().enumerate().flat_map(move |(src, succ)| {
            let u = self.id_of(src);
            succ.iter().map(move |&dst| (u, self.id_of(dst)))
        })
    }
}

impl<R: ReverseAdjacency> RandomAccessGraph for DirectedGraph<R> {
    type Successors<'succ>
        = Copied<Iter<'succ, usize>>
    where
        Self: 'succ;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    #[inline(always)]
    fn num_arcs(&self) -> u64 {
        self.num_edges
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> Self::Successors<'_> {
        self.succ[node].iter().copied()
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        self.succ[node].len()
    }
}

impl<R: ReverseAdjacency> BidirectionalGraph for DirectedGraph<R> {
    type Predecessors<'pred>
        = R::Predecessors<'pred>
    where
        Self: 'pred;

    #[inline(always)]
    fn predecessors(&self, node: usize) -> Self::Predecessors<'_> {
        self.reverse.predecessors(&self.succ, node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::reverse::OnDemand;

    #[test]
    fn test_add_vertex_is_idempotent() {
        let mut g = DirectedGraph::<Materialized>::new();
        assert!(g.add_vertex(5));
        assert!(!g.add_vertex(5));
        assert!(g.add_vertex(-3));
        assert_eq!(g.num_vertices(), 2);
        assert_eq!(g.vertices().collect::<Vec<_>>(), vec![5, -3]);
        assert_eq!(g.node_of(-3), Ok(1));
        assert_eq!(g.id_of(0), 5);
    }

    #[test]
    fn test_unknown_vertex() {
        let mut g = DirectedGraph::<OnDemand>::new();
        g.add_vertex(0);
        assert_eq!(g.add_edge(0, 1), Err(GraphError::UnknownVertex(1)));
        assert_eq!(g.add_edge(2, 0), Err(GraphError::UnknownVertex(2)));
        assert_eq!(g.num_edges(), 0);
        assert!(g.out_neighbors(0).unwrap().next().is_none());
        assert!(g.in_neighbors(7).is_err());
    }

    #[test]
    fn test_edges() {
        let g = DirectedGraph::<Materialized>::from_arcs(3, [(2, 0), (0, 1), (2, 2), (0, 1)]).unwrap();
        assert_eq!(
            g.edges().collect::<Vec<_>>(),
            vec![(0, 1), (0, 1), (2, 0), (2, 2)]
        );
        assert_eq!(g.outdegree(0), 2);
        assert_eq!(g.num_arcs(), 4);
    }
}
