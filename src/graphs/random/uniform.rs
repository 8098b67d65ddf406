/*
 * SPDX-FileCopyrightText: 2026 The digraph-scc contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graphs::directed::{DirectedGraph, GraphError, VertexId};
use crate::graphs::reverse::ReverseAdjacency;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use thiserror::Error;

/// Errors raised when setting up a random graph.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomGraphError {
    /// Arcs without self-loops need at least two vertices.
    #[error("Cannot generate {num_arcs} arcs without self-loops on {num_vertices} vertices")]
    TooFewVertices {
        num_vertices: usize,
        num_arcs: usize,
    },
}

/// Provides random graphs with a fixed number of vertices and arcs.
///
/// The vertices are `0..num_vertices`; each arc is obtained by drawing
/// uniformly its source and its target, drawing again both endpoints until
/// they differ. Thus, self-loops are never generated, whereas parallel arcs
/// are.
///
/// The sequence of arcs depends only on the parameters and on the seed of the
/// [pseudorandom number generator](SmallRng), so two graphs built from the
/// same instance are identical.
///
/// # Examples
///
/// ```
/// use digraph_scc::graphs::random::UniformArcs;
///
/// let arcs = UniformArcs::new(10, 20, 0)?;
/// assert_eq!(arcs.iter().count(), 20);
/// assert!(arcs.iter().all(|(u, v)| u != v));
/// # Ok::<(), digraph_scc::graphs::random::RandomGraphError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformArcs {
    num_vertices: usize,
    num_arcs: usize,
    seed: u64,
}

impl UniformArcs {
    /// Creates a new random graph, given the number of vertices, the number of
    /// arcs, and a seed for the [pseudorandom number generator](SmallRng).
    ///
    /// # Errors
    ///
    /// Returns [`RandomGraphError::TooFewVertices`] if `num_arcs` is positive
    /// and there are less than two vertices.
    pub fn new(num_vertices: usize, num_arcs: usize, seed: u64) -> Result<Self, RandomGraphError> {
        if num_arcs > 0 && num_vertices < 2 {
            return Err(RandomGraphError::TooFewVertices {
                num_vertices,
                num_arcs,
            });
        }
        Ok(Self {
            num_vertices,
            num_arcs,
            seed,
        })
    }

    #[inline(always)]
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    #[inline(always)]
    pub fn num_arcs(&self) -> usize {
        self.num_arcs
    }

    #[inline(always)]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns an iterator over the arcs.
    pub fn iter(&self) -> Iter {
        Iter {
            n: self.num_vertices,
            remaining: self.num_arcs,
            rng: SmallRng::seed_from_u64(self.seed),
        }
    }

    /// Builds a [`DirectedGraph`] containing the vertices and the arcs of
    /// this random graph.
    pub fn graph<R: ReverseAdjacency>(&self) -> Result<DirectedGraph<R>, GraphError> {
        DirectedGraph::from_arcs(self.num_vertices, self.iter())
    }
}

impl IntoIterator for &UniformArcs {
    type Item = (VertexId, VertexId);
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// The iterator returned by [`UniformArcs::iter`].
#[derive(Debug, Clone)]
pub struct Iter {
    n: usize,
    remaining: usize,
    rng: SmallRng,
}

impl Iterator for Iter {
    type Item = (VertexId, VertexId);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let (mut u, mut v) = (0, 0);
        while u == v {
            u = self.rng.random_range(0..self.n);
            v = self.rng.random_range(0..self.n);
        }
        Some((u as VertexId, v as VertexId))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::reverse::Materialized;

    #[test]
    fn test_uniform() {
        let arcs = UniformArcs::new(5, 1000, 0).unwrap();
        let mut seen = [false; 5];
        for (u, v) in &arcs {
            assert_ne!(u, v);
            assert!((0..5).contains(&u));
            assert!((0..5).contains(&v));
            seen[u as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
        assert_eq!(arcs.iter().len(), 1000);
    }

    #[test]
    fn test_reproducible() {
        let a = UniformArcs::new(100, 300, 42).unwrap();
        let b = UniformArcs::new(100, 300, 42).unwrap();
        assert!(a.iter().eq(b.iter()));
        let c = UniformArcs::new(100, 300, 43).unwrap();
        assert!(!a.iter().eq(c.iter()));
    }

    #[test]
    fn test_too_few_vertices() {
        assert_eq!(
            UniformArcs::new(1, 1, 0),
            Err(RandomGraphError::TooFewVertices {
                num_vertices: 1,
                num_arcs: 1
            })
        );
        let empty = UniformArcs::new(1, 0, 0).unwrap();
        let g = empty.graph::<Materialized>().unwrap();
        assert_eq!(g.num_vertices(), 1);
        assert_eq!(g.num_edges(), 0);
    }
}
