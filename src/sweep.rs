//! Decrease-key complexity sweep over power-of-two graph sizes.
//!
//! For each exponent `k` in the configured range a complete graph on `2^k`
//! vertices is generated, Dijkstra runs from the configured source, and the
//! decrease-key count and wall time are recorded in a [`ComplexityReport`].

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::dijkstra::{SettlePolicy, ShortestPathRun, ShortestPaths};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::report::{ComplexityReport, SweepResult};

/// Largest dense adjacency matrix a sweep may allocate; 2^13 vertices is the largest size that fits.
pub const MAX_MATRIX_BYTES: usize = 1 << 30;

/// Bytes of the dense `f64` matrix for `vertices`, or `None` on overflow.
fn dense_matrix_bytes(vertices: usize) -> Option<usize> {
    vertices
        .checked_mul(vertices)?
        .checked_mul(std::mem::size_of::<f64>())
}

/// Parameters of one sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    /// First graph size is `2^start_exponent`
    pub start_exponent: u32,
    /// Sweep stops before `2^end_exponent`
    pub end_exponent: u32,
    pub source: usize,
    /// Seed for reproducible graphs; `None` draws from OS entropy
    pub seed: Option<u64>,
    pub policy: SettlePolicy,
}

impl Default for SweepConfig {
    /// Sizes 16 through 512, source 0.
    fn default() -> Self {
        SweepConfig {
            start_exponent: 4,
            end_exponent: 10,
            source: 0,
            seed: None,
            policy: SettlePolicy::default(),
        }
    }
}

impl SweepConfig {
    /// Check the range is non-empty, the largest graph fits in
    /// [`MAX_MATRIX_BYTES`] and the source exists in the smallest graph.
    pub fn validate(&self) -> Result<()> {
        if self.start_exponent >= self.end_exponent {
            return Err(Error::InvalidSweep(format!(
                "start exponent {} must be below end exponent {}",
                self.start_exponent, self.end_exponent
            )));
        }
        let largest_exponent = self.end_exponent - 1;
        let fits = 1usize
            .checked_shl(largest_exponent)
            .and_then(dense_matrix_bytes)
            .is_some_and(|bytes| bytes <= MAX_MATRIX_BYTES);
        if !fits {
            return Err(Error::InvalidSweep(format!(
                "a dense matrix for 2^{} vertices exceeds {} bytes",
                largest_exponent, MAX_MATRIX_BYTES
            )));
        }
        let smallest = 1usize << self.start_exponent;
        if self.source >= smallest {
            return Err(Error::InvalidSweep(format!(
                "source {} is not a vertex of the smallest graph ({} vertices)",
                self.source, smallest
            )));
        }
        Ok(())
    }

    /// Vertex counts visited by the sweep, ascending.
    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        (self.start_exponent..self.end_exponent).map(|k| 1usize << k)
    }
}

/// One measured run: the graph, its shortest-path result and timing.
#[derive(Debug)]
pub struct SweepRun {
    pub graph: Graph,
    pub run: ShortestPathRun,
    pub time_ms: f64,
}

impl SweepRun {
    /// Summarize the run as a report row.
    pub fn to_result(&self) -> SweepResult {
        SweepResult {
            vertices: self.graph.num_vertices(),
            edges: self.graph.edge_count(),
            decrease_keys: self.run.decrease_key_count(),
            time_ms: self.time_ms,
        }
    }
}

/// Run the sweep, calling `on_run` with each measured run as it completes.
pub fn run_sweep_with<F>(config: &SweepConfig, mut on_run: F) -> Result<ComplexityReport>
where
    F: FnMut(&SweepRun),
{
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut report = ComplexityReport::new(
        "Dijkstra decrease-key count on random complete graphs",
        config.source,
        config.seed,
    );

    for vertices in config.sizes() {
        debug!(vertices, "generating complete graph");
        let graph = Graph::with_rng(vertices, &mut rng);

        let engine = ShortestPaths::new(&graph, config.source)?.with_policy(config.policy);
        let start = Instant::now();
        let run = engine.run();
        let time_ms = start.elapsed().as_secs_f64() * 1000.0;

        let measured = SweepRun {
            graph,
            run,
            time_ms,
        };
        let result = measured.to_result();
        info!(
            vertices = result.vertices,
            edges = result.edges,
            decrease_keys = result.decrease_keys,
            time_ms = result.time_ms,
            "sweep step complete"
        );
        on_run(&measured);
        report.add_result(result);
    }

    Ok(report)
}

/// Run the sweep and collect every size into a report.
pub fn run_sweep(config: &SweepConfig) -> Result<ComplexityReport> {
    run_sweep_with(config, |_| {})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sizes() {
        let sizes: Vec<usize> = SweepConfig::default().sizes().collect();
        assert_eq!(sizes, vec![16, 32, 64, 128, 256, 512]);
    }

    #[test]
    fn test_seeded_sweep_is_reproducible() {
        let config = SweepConfig {
            start_exponent: 2,
            end_exponent: 6,
            seed: Some(1234),
            ..SweepConfig::default()
        };
        let a = run_sweep(&config).unwrap();
        let b = run_sweep(&config).unwrap();

        let counts = |r: &ComplexityReport| -> Vec<usize> {
            r.results.iter().map(|x| x.decrease_keys).collect()
        };
        assert_eq!(counts(&a), counts(&b));
        assert_eq!(a.results.len(), 4);
        assert_eq!(a.seed, Some(1234));
    }

    #[test]
    fn test_counts_are_at_least_vertices_minus_one() {
        let config = SweepConfig {
            start_exponent: 1,
            end_exponent: 7,
            seed: Some(3),
            ..SweepConfig::default()
        };
        let report = run_sweep(&config).unwrap();
        for result in &report.results {
            assert!(result.decrease_keys >= result.vertices - 1);
            assert_eq!(result.edges, result.vertices * (result.vertices - 1) / 2);
        }
    }

    #[test]
    fn test_on_run_sees_every_size() {
        let config = SweepConfig {
            start_exponent: 2,
            end_exponent: 5,
            seed: Some(8),
            ..SweepConfig::default()
        };
        let mut seen = Vec::new();
        run_sweep_with(&config, |measured| {
            seen.push(measured.graph.num_vertices());
            assert_eq!(measured.run.distance(0), 0.0);
        })
        .unwrap();
        assert_eq!(seen, vec![4, 8, 16]);
    }

    #[test]
    fn test_invalid_configs() {
        let empty = SweepConfig {
            start_exponent: 5,
            end_exponent: 5,
            ..SweepConfig::default()
        };
        assert!(matches!(run_sweep(&empty), Err(Error::InvalidSweep(_))));

        let huge = SweepConfig {
            end_exponent: 40,
            ..SweepConfig::default()
        };
        assert!(matches!(huge.validate(), Err(Error::InvalidSweep(_))));

        let bad_source = SweepConfig {
            source: 16,
            ..SweepConfig::default()
        };
        assert!(matches!(bad_source.validate(), Err(Error::InvalidSweep(_))));
    }

    #[test]
    fn test_oversized_matrices_are_rejected_before_allocation() {
        let capacity_overflow = SweepConfig {
            start_exponent: 30,
            end_exponent: 31,
            seed: Some(1),
            ..SweepConfig::default()
        };
        assert!(matches!(
            capacity_overflow.validate(),
            Err(Error::InvalidSweep(_))
        ));
        assert!(matches!(
            run_sweep(&capacity_overflow),
            Err(Error::InvalidSweep(_))
        ));

        let shift_overflow = SweepConfig {
            start_exponent: 1,
            end_exponent: 80,
            ..SweepConfig::default()
        };
        assert!(matches!(
            shift_overflow.validate(),
            Err(Error::InvalidSweep(_))
        ));

        let too_large = SweepConfig {
            end_exponent: 17,
            ..SweepConfig::default()
        };
        assert!(matches!(too_large.validate(), Err(Error::InvalidSweep(_))));
    }

    #[test]
    fn test_largest_allowed_matrix_validates() {
        let at_limit = SweepConfig {
            end_exponent: 14,
            ..SweepConfig::default()
        };
        assert!(at_limit.validate().is_ok());
        assert_eq!(dense_matrix_bytes(1 << 13), Some(MAX_MATRIX_BYTES / 2));

        let over_limit = SweepConfig {
            end_exponent: 15,
            ..SweepConfig::default()
        };
        assert!(over_limit.validate().is_err());
    }
}
