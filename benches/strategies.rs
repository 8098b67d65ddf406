/*
 * SPDX-FileCopyrightText: 2026 The digraph-scc contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use digraph_scc::algo::sccs::kosaraju;
use digraph_scc::compare::reference_graph;
use digraph_scc::graphs::prelude::*;
use dsi_progress_logger::no_logging;
use std::hint::black_box;

// (vertices, edges); on-demand in-neighbors are quadratic, so sizes stay small
const SIZES: [(usize, usize); 3] = [(100, 200), (1_000, 2_000), (5_000, 10_000)];

fn bench_sccs(c: &mut Criterion) {
    let mut group = c.benchmark_group("sccs");
    group.sample_size(10);

    for (num_vertices, num_edges) in SIZES {
        let arcs = UniformArcs::new(num_vertices, num_edges, 0).expect("valid size");
        let id = format!("{num_vertices}x{num_edges}");

        let materialized = arcs.graph::<Materialized>().expect("valid arcs");
        group.bench_with_input(
            BenchmarkId::new("materialized", &id),
            &materialized,
            |b, graph| b.iter(|| black_box(kosaraju(graph, no_logging![]))),
        );

        let on_demand = arcs.graph::<OnDemand>().expect("valid arcs");
        group.bench_with_input(
            BenchmarkId::new("on-demand", &id),
            &on_demand,
            |b, graph| b.iter(|| black_box(kosaraju(graph, no_logging![]))),
        );

        let reference = reference_graph(&materialized);
        group.bench_with_input(
            BenchmarkId::new("petgraph", &id),
            &reference,
            |b, graph| b.iter(|| black_box(petgraph::algo::kosaraju_scc(graph))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_sccs);
criterion_main!(benches);
