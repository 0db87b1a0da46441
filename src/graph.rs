//! Complete Weighted Graph Generator
//!
//! Builds a complete, undirected graph over `n` vertices stored as a dense
//! adjacency matrix. Every unordered pair of distinct vertices gets one
//! uniform random weight in `[0, 1)`, written symmetrically; the diagonal is
//! zero.
//!
//! A weight of exactly `0.0` means "no edge" to [`Graph::is_adjacent`]. The
//! generator can draw such a weight, so the graph is connected with high
//! probability but not by construction.

use std::fmt;

use rand::Rng;

use crate::error::{Error, Result};

/// Dense symmetric adjacency matrix, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    vertices: usize,
    adjacency: Vec<f64>,
}

impl Graph {
    /// Generate a complete graph using the thread-local RNG.
    pub fn new(vertices: usize) -> Self {
        Self::with_rng(vertices, &mut rand::thread_rng())
    }

    /// Generate a complete graph drawing weights from `rng`.
    ///
    /// Seeding `rng` (e.g. `StdRng::seed_from_u64`) makes generation
    /// reproducible.
    pub fn with_rng<R: Rng>(vertices: usize, rng: &mut R) -> Self {
        let mut adjacency = vec![0.0; vertices * vertices];

        for i in 0..vertices {
            for j in (i + 1)..vertices {
                let weight: f64 = rng.gen();
                adjacency[i * vertices + j] = weight;
                adjacency[j * vertices + i] = weight;
            }
        }

        Graph {
            vertices,
            adjacency,
        }
    }

    /// Build a graph from an explicit weight matrix.
    ///
    /// The matrix must be square, symmetric, zero on the diagonal, and hold
    /// finite non-negative weights.
    pub fn from_matrix(rows: Vec<Vec<f64>>) -> Result<Self> {
        let vertices = rows.len();
        let mut adjacency = Vec::with_capacity(vertices * vertices);

        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != vertices) {
            return Err(Error::InvalidMatrix(format!(
                "row {} has {} entries, expected {}",
                i,
                row.len(),
                vertices
            )));
        }

        for (i, row) in rows.iter().enumerate() {
            for (j, &weight) in row.iter().enumerate() {
                if !weight.is_finite() || weight < 0.0 {
                    return Err(Error::InvalidMatrix(format!(
                        "weight ({}, {}) = {} is not a finite non-negative number",
                        i, j, weight
                    )));
                }
                if i == j && weight != 0.0 {
                    return Err(Error::InvalidMatrix(format!(
                        "diagonal entry ({}, {}) = {} must be zero",
                        i, j, weight
                    )));
                }
                if weight != rows[j][i] {
                    return Err(Error::InvalidMatrix(format!(
                        "weight ({}, {}) = {} differs from ({}, {}) = {}",
                        i, j, weight, j, i, rows[j][i]
                    )));
                }
                adjacency.push(weight);
            }
        }

        Ok(Graph {
            vertices,
            adjacency,
        })
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices
    }

    /// Weight of the edge `(u, v)`; `0.0` when there is no edge.
    ///
    /// # Panics
    ///
    /// Panics if `u` or `v` is not a vertex of this graph.
    #[inline]
    pub fn weight(&self, u: usize, v: usize) -> f64 {
        assert!(
            u < self.vertices && v < self.vertices,
            "vertex pair ({}, {}) out of range for {} vertices",
            u,
            v,
            self.vertices
        );
        self.adjacency[u * self.vertices + v]
    }

    /// True iff the edge `(u, v)` has a strictly positive weight.
    ///
    /// # Panics
    ///
    /// Panics if `u` or `v` is not a vertex of this graph.
    #[inline]
    pub fn is_adjacent(&self, u: usize, v: usize) -> bool {
        self.weight(u, v) > 0.0
    }

    /// Adjacent vertices of `u` with their edge weights, in vertex order.
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let row = &self.adjacency[u * self.vertices..(u + 1) * self.vertices];
        row.iter()
            .copied()
            .enumerate()
            .filter(|&(_, weight)| weight > 0.0)
    }

    /// Number of unordered vertex pairs joined by an edge.
    pub fn edge_count(&self) -> usize {
        (0..self.vertices)
            .map(|u| self.neighbors(u).filter(|&(v, _)| v > u).count())
            .sum()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for u in 0..self.vertices {
            let row = &self.adjacency[u * self.vertices..(u + 1) * self.vertices];
            let line = row
                .iter()
                .map(|w| format!("{:.4}", w))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_matrix_is_symmetric_with_zero_diagonal() {
        let mut rng = StdRng::seed_from_u64(7);
        let g = Graph::with_rng(32, &mut rng);

        for i in 0..32 {
            assert_eq!(g.weight(i, i), 0.0);
            for j in 0..32 {
                assert_eq!(g.weight(i, j), g.weight(j, i));
                assert!((0.0..1.0).contains(&g.weight(i, j)));
            }
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = Graph::with_rng(16, &mut StdRng::seed_from_u64(42));
        let b = Graph::with_rng(16, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_graph() {
        let g = Graph::new(0);
        assert_eq!(g.num_vertices(), 0);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.to_string(), "");
    }

    #[test]
    fn test_single_vertex_has_no_edges() {
        let g = Graph::new(1);
        assert!(!g.is_adjacent(0, 0));
        assert_eq!(g.neighbors(0).count(), 0);
    }

    #[test]
    fn test_complete_graph_edge_count() {
        let g = Graph::with_rng(10, &mut StdRng::seed_from_u64(1));
        // a zero draw is astronomically unlikely for a fixed small seed
        assert_eq!(g.edge_count(), 10 * 9 / 2);
    }

    #[test]
    fn test_zero_weight_is_not_an_edge() {
        let g = Graph::from_matrix(vec![
            vec![0.0, 0.0, 0.5],
            vec![0.0, 0.0, 0.25],
            vec![0.5, 0.25, 0.0],
        ])
        .unwrap();

        assert!(!g.is_adjacent(0, 1));
        assert!(g.is_adjacent(0, 2));
        assert_eq!(g.neighbors(2).collect::<Vec<_>>(), vec![(0, 0.5), (1, 0.25)]);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_from_matrix_rejects_bad_input() {
        assert!(matches!(
            Graph::from_matrix(vec![vec![0.0, 1.0], vec![0.5, 0.0]]),
            Err(Error::InvalidMatrix(_))
        ));
        assert!(matches!(
            Graph::from_matrix(vec![vec![1.0]]),
            Err(Error::InvalidMatrix(_))
        ));
        assert!(matches!(
            Graph::from_matrix(vec![vec![0.0, 1.0]]),
            Err(Error::InvalidMatrix(_))
        ));
        assert!(matches!(
            Graph::from_matrix(vec![vec![0.0, -1.0], vec![-1.0, 0.0]]),
            Err(Error::InvalidMatrix(_))
        ));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_weight_out_of_range_panics() {
        let g = Graph::new(3);
        g.weight(0, 3);
    }

    #[test]
    fn test_display_one_row_per_vertex() {
        let g = Graph::from_matrix(vec![vec![0.0, 0.5], vec![0.5, 0.0]]).unwrap();
        assert_eq!(g.to_string(), "0.0000 0.5000\n0.5000 0.0000\n");
    }
}
