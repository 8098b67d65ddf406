/*
 * SPDX-FileCopyrightText: 2026 The digraph-scc contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::RandomAccessGraph;
use crate::visits::{
    depth_first::{EventPred, FilterArgsPred},
    Sequential,
};
use std::ops::ControlFlow::{self, Continue};
use sux::bits::BitVec;

/// A sequential depth-first visit keeping track of predecessors.
///
/// This is an iterative implementation that does not need a large stack size:
/// the visit path is stored on the heap as a stack of pairs made of an
/// iterator on the successors of a node and the parent of the node, so a
/// visit along a path of millions of nodes is not a problem. Known nodes are
/// recorded using one bit per node.
///
/// Roots are processed in the order in which they are provided; roots that
/// have already been reached by a previous visit tree are skipped, and the
/// set of known nodes is shared by all the visit trees until the visit is
/// [reset](Sequential::reset).
///
/// # Examples
///
/// Let's compute the nodes of a graph in increasing order of exit time:
///
/// ```
/// use digraph_scc::graphs::directed::DirectedGraph;
/// use digraph_scc::traits::RandomAccessGraph;
/// use digraph_scc::visits::{depth_first::*, Sequential};
/// use no_break::NoBreak;
/// use std::ops::ControlFlow::Continue;
///
/// let graph: DirectedGraph = DirectedGraph::from_arcs(4, [(0, 1), (1, 2), (1, 3), (0, 3)])?;
/// let mut visit = SeqPred::new(&graph);
/// let mut exit_order = Vec::with_capacity(graph.num_nodes());
///
/// visit
///     .visit(0..graph.num_nodes(), |event| {
///         if let EventPred::Postvisit { node, .. } = event {
///             exit_order.push(node);
///         }
///         Continue(())
///     })
///     .continue_value_no_break();
///
/// assert_eq!(exit_order, vec![2, 3, 1, 0]);
/// # Ok::<(), digraph_scc::graphs::directed::GraphError>(())
/// ```
pub struct SeqPred<'a, G: RandomAccessGraph> {
    graph: &'a G,
    /// Entries on this stack represent the iterator on the successors of a node
    /// and the parent of the node. This approach makes it possible to avoid
    /// storing both the current and the parent node in the stack.
    stack: Vec<(<G::Successors<'a> as IntoIterator>::IntoIter, usize)>,
    known: BitVec,
}

impl<'a, G: RandomAccessGraph> SeqPred<'a, G> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: &'a G) -> SeqPred<'a, G> {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            stack: Vec::with_capacity(16),
            known: BitVec::new(num_nodes),
        }
    }

    /// Returns whether a node has been reached by the visit.
    #[inline(always)]
    pub fn known(&self, node: usize) -> bool {
        self.known.get(node)
    }
}

impl<G: RandomAccessGraph> Sequential<EventPred> for SeqPred<'_, G> {
    fn visit_filtered<
        R: IntoIterator<Item = usize>,
        E,
        C: FnMut(EventPred) -> ControlFlow<E, ()>,
        F: FnMut(FilterArgsPred) -> bool,
    >(
        &mut self,
        roots: R,
        mut callback: C,
        mut filter: F,
    ) -> ControlFlow<E, ()> {
        for root in roots {
            if self.known.get(root)
                || !filter(FilterArgsPred {
                    node: root,
                    pred: root,
                    root,
                    depth: 0,
                })
            {
                // We ignore the node: it might be visited later
                continue;
            }

            callback(EventPred::Init { root })?;

            self.known.set(root, true);
            callback(EventPred::Previsit {
                node: root,
                parent: root,
                root,
                depth: 0,
            })?;

            self.stack
                .push((self.graph.successors(root).into_iter(), root));

            // The node whose successors are enumerated by the iterator on top
            // of the stack; its parent is stored in the same stack entry.
            let mut curr = root;

            'recurse: loop {
                let depth = self.stack.len();
                let Some((iter, parent)) = self.stack.last_mut() else {
                    callback(EventPred::Done { root })?;
                    break;
                };

                for succ in iter {
                    if self.known.get(succ) {
                        callback(EventPred::Revisit {
                            node: succ,
                            pred: curr,
                            root,
                            depth,
                        })?;
                    } else if filter(FilterArgsPred {
                        node: succ,
                        pred: curr,
                        root,
                        depth,
                    }) {
                        self.known.set(succ, true);
                        callback(EventPred::Previsit {
                            node: succ,
                            parent: curr,
                            root,
                            depth,
                        })?;
                        self.stack
                            .push((self.graph.successors(succ).into_iter(), curr));

                        // At the next iteration, succ will be the current node
                        curr = succ;

                        continue 'recurse;
                    } // Else we ignore the node: it might be visited later
                }

                let parent = *parent;
                callback(EventPred::Postvisit {
                    node: curr,
                    parent,
                    root,
                    depth: depth - 1,
                })?;

                // Going up one level: the parent becomes the current node.
                curr = parent;
                self.stack.pop();
            }
        }

        Continue(())
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.known = BitVec::new(self.graph.num_nodes());
    }
}
