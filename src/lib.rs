//! Dijkstra decrease-key analysis and classic comparison sorts.
//!
//! Two independent pieces:
//!
//! - **Shortest paths**: [`graph::Graph`] generates random complete graphs,
//!   [`dijkstra::ShortestPaths`] runs Dijkstra's algorithm over them while
//!   counting decrease-key operations, and [`sweep`] repeats that over
//!   power-of-two graph sizes into a [`report::ComplexityReport`].
//! - **Sorting**: [`sorting::Sorter`] sorts any `Ord` sequence with bubble,
//!   selection, insertion, merge or quick sort.
//!
//! ```
//! use dijkstra_sorting::dijkstra::ShortestPaths;
//! use dijkstra_sorting::graph::Graph;
//! use dijkstra_sorting::sorting::Sorter;
//!
//! let graph = Graph::new(16);
//! let run = ShortestPaths::new(&graph, 0).unwrap().run();
//! assert!(run.decrease_key_count() >= 15);
//!
//! let mut sorter = Sorter::new(vec![4, 3, 2, 1]);
//! sorter.quick_sort();
//! assert_eq!(sorter.as_slice(), &[1, 2, 3, 4]);
//! ```

pub mod config;
pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod priority_queue;
pub mod report;
pub mod sorting;
pub mod sweep;

pub use error::{Error, Result};
