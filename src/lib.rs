/*
 * SPDX-FileCopyrightText: 2026 The digraph-scc contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
// for now we don't need any new feature but we might remove this in the future
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]
#![allow(clippy::type_complexity)]

pub mod algo;
#[cfg(feature = "cli")]
pub mod cli;
pub mod compare;
pub mod graphs;
pub mod traits;
pub mod visits;

pub mod prelude {
    pub use crate::algo::sccs::{kosaraju, Sccs};
    pub use crate::algo::top_sort;
    pub use crate::compare::{compare, compare_random, Comparison};
    pub use crate::graphs::prelude::*;
    pub use crate::traits::*;
    pub use crate::visits::depth_first::*;
    pub use crate::visits::*;
}
