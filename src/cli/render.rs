/*
 * SPDX-FileCopyrightText: 2026 The digraph-scc contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Textual rendering of graphs, components and timings.

use super::pretty_print_elapsed;
use crate::algo::sccs::Sccs;
use crate::compare::Comparison;
use crate::graphs::directed::DirectedGraph;
use crate::graphs::reverse::ReverseAdjacency;
use crate::traits::RandomAccessGraph;
use itertools::Itertools;
use std::io::{Result, Write};
use std::time::Duration;

/// Writes a graph, one block per vertex in insertion order.
///
/// Each block contains a header line `Vertex (id):` followed by a line with
/// the vertex and its out-neighbors, separated by arrows.
pub fn write_graph<R: ReverseAdjacency>(
    mut out: impl Write,
    graph: &DirectedGraph<R>,
) -> Result<()> {
    for node in 0..graph.num_nodes() {
        let id = graph.id_of(node);
        writeln!(out, "Vertex ({}):", id)?;
        write!(out, "\t{}", id)?;
        for succ in graph.successors(node) {
            write!(out, " -> {}", graph.id_of(succ))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Writes the components computed by the reference implementation, one per
/// line, as a bracketed list of members.
pub fn write_reference(mut out: impl Write, reference: &Sccs) -> Result<()> {
    for members in reference.components().values() {
        writeln!(out, "[{}]", members.iter().join(", "))?;
    }
    Ok(())
}

/// Writes the running times of the two implementations.
pub fn write_timings(mut out: impl Write, elapsed: Duration, reference: Duration) -> Result<()> {
    writeln!(
        out,
        "My implementation: {}",
        pretty_print_elapsed(elapsed.as_secs_f64())
    )?;
    writeln!(
        out,
        "Reference library: {}",
        pretty_print_elapsed(reference.as_secs_f64())
    )
}

/// Writes the full report of a comparison: the graph (optionally), the
/// components computed by both implementations and the timings.
pub fn write_report<R: ReverseAdjacency>(
    mut out: impl Write,
    comparison: &Comparison<R>,
    show_graph: bool,
) -> Result<()> {
    if show_graph {
        writeln!(out, "Graph:")?;
        write_graph(&mut out, &comparison.graph)?;
        writeln!(out)?;
    }
    writeln!(out, "Strongly connected components:")?;
    write!(out, "{}", comparison.sccs)?;
    writeln!(out)?;
    writeln!(out, "Reference components:")?;
    write_reference(&mut out, &comparison.reference)?;
    writeln!(out)?;
    write_timings(&mut out, comparison.elapsed, comparison.reference_elapsed)
}
