/*
 * SPDX-FileCopyrightText: 2026 The digraph-scc contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

pub mod directed;
pub mod random;
pub mod reverse;
pub mod transposed;

pub mod prelude {
    pub use super::directed::{DirectedGraph, GraphError, VertexId};
    pub use super::random::UniformArcs;
    pub use super::reverse::{Materialized, OnDemand, ReverseAdjacency};
    pub use super::transposed::Transposed;
}
