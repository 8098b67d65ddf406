/*
 * SPDX-FileCopyrightText: 2026 The digraph-scc contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Algorithms used to compute and work with strongly connected components.
//!
//! Components are computed by [Kosaraju's algorithm](kosaraju), which needs
//! the in-neighbors of each vertex: its running time thus depends on the
//! [reverse-adjacency strategy](crate::graphs::reverse) of the graph.
//!
//! # Examples
//! ```
//! use digraph_scc::algo::sccs::*;
//! use digraph_scc::graphs::directed::DirectedGraph;
//! use dsi_progress_logger::no_logging;
//!
//! let graph: DirectedGraph = DirectedGraph::from_arcs(4, [(0, 1), (1, 2), (2, 0), (1, 3)])?;
//!
//! let mut sccs = kosaraju(&graph, no_logging![]);
//!
//! assert_eq!(sccs.num_components(), 2);
//! assert_eq!(sccs.component_of(2), sccs.component_of(0));
//! assert_eq!(sccs.root_of(1), Some(0));
//!
//! // Let's sort the SCCs by size
//! let sizes = sccs.sort_by_size();
//! assert_eq!(sizes, vec![3, 1].into_boxed_slice());
//! # Ok::<(), digraph_scc::graphs::directed::GraphError>(())
//! ```

mod kosaraju;
pub use kosaraju::*;

use crate::graphs::directed::VertexId;
use indexmap::IndexMap;
use itertools::Itertools;
use std::fmt;

/// Strongly connected components.
///
/// An instance of this structure stores a partition of the vertices of a
/// graph. Each component is identified by its *root*, the vertex from which
/// it was discovered, and is associated with the list of its members.
/// Components are numbered from 0 to
/// [`num_components`](Sccs::num_components) in discovery order.
///
/// Moreover, this structure makes it possible to [sort the components by
/// size](Sccs::sort_by_size) and to [compare partitions](Sccs::same_partition)
/// computed by different algorithms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sccs {
    /// For each component, its root and its members.
    components: IndexMap<VertexId, Vec<VertexId>>,
    /// For each vertex, the index of its component.
    membership: IndexMap<VertexId, usize>,
}

impl Sccs {
    /// Creates a new partition from a map from roots to members.
    pub fn new(components: IndexMap<VertexId, Vec<VertexId>>) -> Self {
        let mut sccs = Sccs {
            components,
            membership: IndexMap::new(),
        };
        sccs.index_members();
        sccs
    }

    /// Creates a new partition from a list of components, using as root of
    /// each component its first member.
    ///
    /// Empty components are ignored.
    pub fn from_partition(partition: impl IntoIterator<Item = Vec<VertexId>>) -> Self {
        Self::new(
            partition
                .into_iter()
                .filter_map(|members| members.first().copied().map(|root| (root, members)))
                .collect(),
        )
    }

    fn index_members(&mut self) {
        self.membership.clear();
        for (index, members) in self.components.values().enumerate() {
            for &vertex in members {
                self.membership.insert(vertex, index);
            }
        }
    }

    /// Returns the number of strongly connected components.
    pub fn num_components(&self) -> usize {
        self.components.len()
    }

    /// Returns the number of vertices in the partition.
    pub fn num_vertices(&self) -> usize {
        self.membership.len()
    }

    /// Returns the map from roots to members.
    #[inline(always)]
    pub fn components(&self) -> &IndexMap<VertexId, Vec<VertexId>> {
        &self.components
    }

    /// Consumes this structure, returning the map from roots to members.
    pub fn into_components(self) -> IndexMap<VertexId, Vec<VertexId>> {
        self.components
    }

    /// Returns the members of the component with the given root.
    pub fn members(&self, root: VertexId) -> Option<&[VertexId]> {
        self.components.get(&root).map(Vec::as_slice)
    }

    /// Returns the index of the component of a vertex.
    #[inline(always)]
    pub fn component_of(&self, vertex: VertexId) -> Option<usize> {
        self.membership.get(&vertex).copied()
    }

    /// Returns the root of the component of a vertex.
    pub fn root_of(&self, vertex: VertexId) -> Option<VertexId> {
        self.component_of(vertex)
            .and_then(|index| self.components.get_index(index))
            .map(|(&root, _)| root)
    }

    /// Returns the sizes of all components.
    pub fn compute_sizes(&self) -> Box<[usize]> {
        self.components.values().map(Vec::len).collect()
    }

    /// Renumbers the components by decreasing size.
    ///
    /// After a call to this method, the sizes of strongly connected components
    /// will be decreasing in the component index; components of the same size
    /// keep their relative order. The method returns the sizes of the
    /// components after the renumbering.
    pub fn sort_by_size(&mut self) -> Box<[usize]> {
        self.components
            .sort_by(|_, x, _, y| y.len().cmp(&x.len()));
        self.index_members();
        self.compute_sizes()
    }

    /// Returns whether two partitions have the same components, irrespective
    /// of roots and of the order of components and members.
    pub fn same_partition(&self, other: &Sccs) -> bool {
        if self.num_components() != other.num_components()
            || self.num_vertices() != other.num_vertices()
        {
            return false;
        }
        self.components.values().all(|members| {
            let Some(index) = members.first().and_then(|&v| other.component_of(v)) else {
                return false;
            };
            other.components[index].len() == members.len()
                && members
                    .iter()
                    .all(|&v| other.component_of(v) == Some(index))
        })
    }
}

impl fmt::Display for Sccs {
    /// Writes one line per component, in the format `[root] -> [members]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (root, members) in &self.components {
            writeln!(f, "[{}] -> [{}]", root, members.iter().join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_sizes() {
        let sccs = Sccs::from_partition([vec![0, 1, 8, 9], vec![3, 6], vec![4, 5, 7], vec![2]]);
        assert_eq!(sccs.compute_sizes(), vec![4, 2, 3, 1].into_boxed_slice());
        assert_eq!(sccs.num_vertices(), 10);
    }

    #[test]
    fn test_sort_by_size() {
        let mut sccs = Sccs::from_partition([vec![0, 4], vec![1, 2, 3], vec![5]]);
        let sizes = sccs.sort_by_size();
        assert_eq!(sizes, vec![3, 2, 1].into_boxed_slice());
        assert_eq!(sccs.component_of(2), Some(0));
        assert_eq!(sccs.component_of(4), Some(1));
        assert_eq!(sccs.component_of(5), Some(2));
        assert_eq!(sccs.root_of(3), Some(1));
    }

    #[test]
    fn test_same_partition() {
        let a = Sccs::from_partition([vec![0, 1], vec![2], vec![3, 4]]);
        let b = Sccs::from_partition([vec![4, 3], vec![1, 0], vec![2], vec![]]);
        let c = Sccs::from_partition([vec![0, 1], vec![2, 3], vec![4]]);
        let d = Sccs::from_partition([vec![0, 1, 2], vec![3, 4]]);
        assert!(a.same_partition(&b));
        assert!(b.same_partition(&a));
        assert!(!a.same_partition(&c));
        assert!(!a.same_partition(&d));
    }

    #[test]
    fn test_display() {
        let sccs = Sccs::from_partition([vec![2, 0, 1], vec![3]]);
        assert_eq!(sccs.to_string(), "[2] -> [2, 0, 1]\n[3] -> [3]\n");
    }
}
