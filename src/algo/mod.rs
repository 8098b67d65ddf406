/*
 * SPDX-FileCopyrightText: 2026 The digraph-scc contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

mod top_sort;
pub use top_sort::*;

pub mod sccs;
