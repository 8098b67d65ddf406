/*
 * SPDX-FileCopyrightText: 2026 The digraph-scc contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Sccs;
use crate::algo::top_sort;
use crate::graphs::{
    directed::{DirectedGraph, VertexId},
    reverse::ReverseAdjacency,
    transposed::Transposed,
};
use crate::traits::RandomAccessGraph;
use crate::visits::{depth_first::*, Sequential};
use dsi_progress_logger::ProgressLog;
use indexmap::IndexMap;
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;

/// Computes the strongly connected components of a graph using Kosaraju's
/// algorithm.
///
/// The first pass is a depth-first visit of `graph` started from each vertex
/// in insertion order, which computes the nodes by [decreasing exit
/// time](top_sort). The second pass is a depth-first visit of the
/// [transpose](Transposed) of `graph` started from each node in that order:
/// each visit tree is a component, identified by the vertex at its root, and
/// its members are listed in visit order (so the root comes first).
///
/// Both passes are iterative, so the depth of the graph is not limited by the
/// size of the call stack. The result depends only on the insertion order of
/// vertices and edges.
///
/// The running time is linear in the size of the graph when in-neighbors are
/// [materialized](crate::graphs::reverse::Materialized), but it becomes
/// quadratic when they are [computed on demand](crate::graphs::reverse::OnDemand).
///
/// # Arguments
///
/// * `graph`: the graph.
///
/// * `pl`: a progress logger.
pub fn kosaraju<R: ReverseAdjacency>(graph: &DirectedGraph<R>, pl: &mut impl ProgressLog) -> Sccs {
    let num_nodes = graph.num_nodes();
    log::debug!(
        "Computing components of a graph with {} vertices and {} edges ({} in-neighbors)",
        num_nodes,
        graph.num_edges(),
        R::NAME
    );

    let top_sort = top_sort(graph, pl);

    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Assigning nodes to components...");

    let transpose = Transposed(graph);
    let mut visit = SeqPred::new(&transpose);
    let mut components = IndexMap::<VertexId, Vec<VertexId>>::new();

    visit
        .visit(top_sort.iter().copied(), |event| {
            match event {
                EventPred::Init { root } => {
                    components.insert(graph.id_of(root), Vec::new());
                }
                EventPred::Previsit { node, .. } => {
                    pl.light_update();
                    if let Some((_, members)) = components.last_mut() {
                        members.push(graph.id_of(node));
                    }
                }
                _ => (),
            }
            Continue(())
        })
        .continue_value_no_break();

    pl.done();

    Sccs::new(components)
}
