/*
 * SPDX-FileCopyrightText: 2026 The digraph-scc contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::RandomAccessGraph;
use crate::visits::{depth_first::*, Sequential};
use dsi_progress_logger::ProgressLog;
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;

/// Returns the nodes of the graph in topological-sort order, if the graph is
/// acyclic.
///
/// Otherwise, the order reflects the exit times from a depth-first visit of the
/// graph started from each node in increasing order: nodes are returned by
/// decreasing exit time. This is the order in which the second pass of
/// [Kosaraju's algorithm](crate::algo::sccs::kosaraju) processes nodes.
pub fn top_sort(graph: impl RandomAccessGraph, pl: &mut impl ProgressLog) -> Box<[usize]> {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing exit order...");

    let mut visit = SeqPred::new(&graph);
    let mut top_sort = vec![0; num_nodes].into_boxed_slice();
    let mut pos = num_nodes;

    visit
        .visit(0..num_nodes, |event| {
            match event {
                EventPred::Previsit { .. } => {
                    pl.light_update();
                }
                EventPred::Postvisit { node, .. } => {
                    pos -= 1;
                    top_sort[pos] = node;
                }
                _ => (),
            }
            Continue(())
        })
        .continue_value_no_break();

    pl.done();
    top_sort
}
