/*
 * SPDX-FileCopyrightText: 2026 The digraph-scc contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Depth-first visits.
//!
//! Implementations must accept a callback function with argument
//! [`EventPred`]; the associated filter argument type is [`FilterArgsPred`].
//!
//! Since [`EventPred`] contains the parent of the visited node, all
//! post-initialization visit events can be interpreted as arc events. The
//! only exception are the previsit and postvisit events of the root, in which
//! the parent is the root itself.

mod seq;
pub use seq::*;

/// Types of callback events generated during depth-first visits.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum EventPred {
    /// A new visit tree is about to start from `root`.
    ///
    /// Not generated for roots that are already known or filtered out.
    Init {
        /// The root of the visit tree about to start.
        root: usize,
    },
    /// The node has been encountered for the first time: we are traversing a
    /// new tree arc, unless all node fields are equal to the root.
    Previsit {
        /// The current node.
        node: usize,
        /// The parent of [`node`](`EventPred::Previsit::node`) in the visit
        /// tree, or [`root`](`EventPred::Previsit::root`) if
        /// [`node`](`EventPred::Previsit::node`) is the root.
        parent: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The length of the visit path from the root to the node.
        depth: usize,
    },
    /// The node has been encountered before: we are traversing a back arc, a
    /// forward arc, or a cross arc.
    Revisit {
        /// The current node.
        node: usize,
        /// The predecessor of [`node`](`EventPred::Revisit::node`) used to
        /// reach it.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The length of the visit path from the root to the predecessor,
        /// plus one.
        depth: usize,
    },
    /// All successors of the node have been enumerated: we are retreating from
    /// a tree arc, unless all node fields are equal to the root.
    ///
    /// Postvisits happen in increasing order of exit time.
    Postvisit {
        /// The current node.
        node: usize,
        /// The parent of [`node`](`EventPred::Postvisit::node`) in the visit
        /// tree, or [`root`](`EventPred::Postvisit::root`) if
        /// [`node`](`EventPred::Postvisit::node`) is the root.
        parent: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The length of the visit path from the root to the node.
        depth: usize,
    },
    /// The visit tree of `root` has been completed.
    ///
    /// Not generated if the visit is stopped by a callback.
    Done {
        /// The root of the completed visit tree.
        root: usize,
    },
}

/// Filter arguments for depth-first visits.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct FilterArgsPred {
    /// The current node.
    pub node: usize,
    /// The parent of [`node`](`Self::node`) in the visit tree, or
    /// [`root`](Self::root) if [`node`](`Self::node`) is the root.
    pub pred: usize,
    /// The root of the current visit tree.
    pub root: usize,
    /// The length of the visit path from the root to the node.
    pub depth: usize,
}

impl super::Event for EventPred {
    type FilterArgs = FilterArgsPred;
}
