/*
 * SPDX-FileCopyrightText: 2026 The digraph-scc contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! # Traits
//! This module contains the traits that are used throughout the crate.
//! They are collected into a module so you can do `use digraph_scc::traits::*;`
//! for ease of use.

pub mod graph;
pub use graph::*;
