/*
 * SPDX-FileCopyrightText: 2026 The digraph-scc contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use digraph_scc::graphs::prelude::*;
use digraph_scc::traits::RandomAccessGraph;
use digraph_scc::visits::{depth_first, Sequential, StoppedWhenDone};
use no_break::NoBreak;
use std::ops::ControlFlow::{Break, Continue};

#[test]
fn test_depth() -> Result<()> {
    let graph: DirectedGraph = DirectedGraph::from_arcs(6, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)])?;
    depth_first::SeqPred::new(&graph)
        .visit([0], |event| {
            if let depth_first::EventPred::Previsit { node, depth, .. } = event {
                assert_eq!(node, depth);
            }
            Continue(())
        })
        .continue_value_no_break();
    Ok(())
}

#[test]
fn test_events() -> Result<()> {
    let graph: DirectedGraph = DirectedGraph::from_arcs(3, [(0, 1), (1, 0), (0, 0)])?;
    let mut events = vec![];
    depth_first::SeqPred::new(&graph)
        .visit(0..graph.num_nodes(), |event| {
            events.push(event);
            Continue(())
        })
        .continue_value_no_break();

    use depth_first::EventPred::*;
    assert_eq!(
        events,
        vec![
            Init { root: 0 },
            Previsit { node: 0, parent: 0, root: 0, depth: 0 },
            Previsit { node: 1, parent: 0, root: 0, depth: 1 },
            Revisit { node: 0, pred: 1, root: 0, depth: 2 },
            Postvisit { node: 1, parent: 0, root: 0, depth: 1 },
            Revisit { node: 0, pred: 0, root: 0, depth: 1 },
            Postvisit { node: 0, parent: 0, root: 0, depth: 0 },
            Done { root: 0 },
            Init { root: 2 },
            Previsit { node: 2, parent: 2, root: 2, depth: 0 },
            Postvisit { node: 2, parent: 2, root: 2, depth: 0 },
            Done { root: 2 },
        ]
    );
    Ok(())
}

#[test]
fn test_filter() -> Result<()> {
    let graph: DirectedGraph = DirectedGraph::from_arcs(4, [(0, 1), (1, 2), (0, 3)])?;
    let mut visit = depth_first::SeqPred::new(&graph);
    let mut previsited = vec![];
    visit
        .visit_filtered(
            [0],
            |event| {
                if let depth_first::EventPred::Previsit { node, .. } = event {
                    previsited.push(node);
                }
                Continue(())
            },
            |depth_first::FilterArgsPred { node, .. }| node != 1,
        )
        .continue_value_no_break();

    assert_eq!(previsited, vec![0, 3]);
    // Filtered nodes are not marked as known
    assert!(!visit.known(1));
    assert!(!visit.known(2));

    visit.reset();
    assert!(!visit.known(0));
    Ok(())
}

#[test]
fn test_stop() -> Result<()> {
    // Stop as soon as a back arc is found
    let graph: DirectedGraph = DirectedGraph::from_arcs(4, [(0, 1), (1, 2), (2, 3), (3, 1)])?;
    let mut on_path = vec![false; graph.num_nodes()];
    let result = depth_first::SeqPred::new(&graph).visit([0], |event| match event {
        depth_first::EventPred::Previsit { node, .. } => {
            on_path[node] = true;
            Continue(())
        }
        depth_first::EventPred::Postvisit { node, .. } => {
            on_path[node] = false;
            Continue(())
        }
        depth_first::EventPred::Revisit { node, .. } if on_path[node] => Break(StoppedWhenDone),
        _ => Continue(()),
    });

    assert!(result.is_break());
    Ok(())
}

#[test]
fn test_deep() -> Result<()> {
    let n = 1_000_000;
    let graph: DirectedGraph =
        DirectedGraph::from_arcs(n, (1..n as VertexId).map(|id| (id - 1, id)))?;
    let mut max_depth = 0;
    depth_first::SeqPred::new(&graph)
        .visit([0], |event| {
            if let depth_first::EventPred::Previsit { depth, .. } = event {
                max_depth = max_depth.max(depth);
            }
            Continue(())
        })
        .continue_value_no_break();
    assert_eq!(max_depth, n - 1);
    Ok(())
}

#[test]
fn test_known_across_calls() -> Result<()> {
    let graph: DirectedGraph = DirectedGraph::from_arcs(3, [(0, 1), (2, 1)])?;
    let mut visit = depth_first::SeqPred::new(&graph);
    let mut events = vec![];

    visit
        .visit([0], |event| {
            events.push(event);
            Continue(())
        })
        .continue_value_no_break();
    assert!(visit.known(1));
    assert!(!visit.known(2));

    // Nodes reached by the first call are neither roots nor previsited again
    events.clear();
    visit
        .visit([1, 2], |event| {
            events.push(event);
            Continue(())
        })
        .continue_value_no_break();

    use depth_first::EventPred::*;
    assert_eq!(
        events,
        vec![
            Init { root: 2 },
            Previsit { node: 2, parent: 2, root: 2, depth: 0 },
            Revisit { node: 1, pred: 2, root: 2, depth: 1 },
            Postvisit { node: 2, parent: 2, root: 2, depth: 0 },
            Done { root: 2 },
        ]
    );

    visit.reset();
    let mut roots = vec![];
    visit
        .visit(0..graph.num_nodes(), |event| {
            if let Init { root } = event {
                roots.push(root);
            }
            Continue(())
        })
        .continue_value_no_break();
    assert_eq!(roots, vec![0, 2]);
    Ok(())
}
