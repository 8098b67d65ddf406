/*
 * SPDX-FileCopyrightText: 2026 The digraph-scc contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Comparison with a reference implementation.
//!
//! The reference is [`petgraph::algo::kosaraju_scc`], run on a
//! [`petgraph::Graph`] with the same vertices and arcs as the
//! [`DirectedGraph`] processed by [`kosaraju`].

use crate::algo::sccs::{kosaraju, Sccs};
use crate::graphs::directed::{DirectedGraph, VertexId};
use crate::graphs::random::UniformArcs;
use crate::graphs::reverse::ReverseAdjacency;
use crate::traits::RandomAccessGraph;
use anyhow::{Context, Result};
use dsi_progress_logger::ProgressLog;
use petgraph::graph::{DiGraph, NodeIndex};
use std::time::{Duration, Instant};

/// Builds a [`petgraph`] graph with the same vertices and arcs as a
/// [`DirectedGraph`].
///
/// The weight of each node is the identifier of the corresponding vertex, and
/// petgraph node indices coincide with nodes of the [`DirectedGraph`].
pub fn reference_graph<R: ReverseAdjacency>(graph: &DirectedGraph<R>) -> DiGraph<VertexId, ()> {
    let mut reference =
        DiGraph::with_capacity(graph.num_vertices(), graph.num_edges() as usize);
    for id in graph.vertices() {
        reference.add_node(id);
    }
    // Arcs are added in the same order as in the source graph
    for node in 0..graph.num_nodes() {
        for succ in graph.successors(node) {
            reference.add_edge(NodeIndex::new(node), NodeIndex::new(succ), ());
        }
    }
    reference
}

/// Computes the strongly connected components of a petgraph graph using the
/// reference implementation of Kosaraju's algorithm.
pub fn reference_sccs(graph: &DiGraph<VertexId, ()>) -> Sccs {
    Sccs::from_partition(
        petgraph::algo::kosaraju_scc(graph)
            .into_iter()
            .map(|component| component.into_iter().map(|node| graph[node]).collect()),
    )
}

/// The outcome of a comparison.
#[derive(Debug, Clone)]
pub struct Comparison<R: ReverseAdjacency> {
    /// The graph on which the components were computed.
    pub graph: DirectedGraph<R>,
    /// The components computed by [`kosaraju`].
    pub sccs: Sccs,
    /// The time spent by [`kosaraju`].
    pub elapsed: Duration,
    /// The components computed by the reference implementation.
    pub reference: Sccs,
    /// The time spent by the reference implementation.
    pub reference_elapsed: Duration,
}

impl<R: ReverseAdjacency> Comparison<R> {
    /// Returns whether the two implementations computed the same partition.
    pub fn agree(&self) -> bool {
        self.sccs.same_partition(&self.reference)
    }
}

/// Computes the components of the same graph with [`kosaraju`] and with the
/// reference implementation, timing both.
///
/// Graph construction is not timed. The reference implementation is run
/// first.
///
/// # Arguments
///
/// * `graph`: the graph.
///
/// * `pl`: a progress logger for [`kosaraju`].
pub fn compare<R: ReverseAdjacency>(
    graph: DirectedGraph<R>,
    pl: &mut impl ProgressLog,
) -> Comparison<R> {
    let reference_graph = reference_graph(&graph);

    let start = Instant::now();
    let reference = reference_sccs(&reference_graph);
    let reference_elapsed = start.elapsed();
    log::debug!(
        "The reference implementation found {} components in {:?}",
        reference.num_components(),
        reference_elapsed
    );

    let start = Instant::now();
    let sccs = kosaraju(&graph, pl);
    let elapsed = start.elapsed();
    log::debug!(
        "Kosaraju's algorithm found {} components in {:?}",
        sccs.num_components(),
        elapsed
    );

    Comparison {
        graph,
        sccs,
        elapsed,
        reference,
        reference_elapsed,
    }
}

/// Generates a random graph and [compares](compare) the two implementations on
/// it.
pub fn compare_random<R: ReverseAdjacency>(
    arcs: &UniformArcs,
    pl: &mut impl ProgressLog,
) -> Result<Comparison<R>> {
    log::info!(
        "Generating a random graph with {} vertices and {} edges (seed {})",
        arcs.num_vertices(),
        arcs.num_arcs(),
        arcs.seed()
    );
    let graph = arcs
        .graph::<R>()
        .context("Could not build the random graph")?;
    Ok(compare(graph, pl))
}
