//! Single-source shortest paths with decrease-key instrumentation.
//!
//! Dijkstra's algorithm over a [`Graph`], with every vertex queued up front
//! at distance `+inf` (the source at `0`). Each successful relaxation lowers
//! the vertex's key in an [`IndexedMinQueue`] and bumps a per-run counter;
//! the counter is the quantity the complexity sweep reports for each graph
//! size.

use std::fmt;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::priority_queue::{IndexedMinQueue, QueueEntry};

/// Which vertices are excluded from relaxation.
///
/// With non-negative weights both policies produce the same distances and
/// the same decrease-key count: an extracted vertex already holds its final
/// distance, so relaxing it again never succeeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SettlePolicy {
    /// Only the source is marked visited; every other vertex stays eligible
    /// for relaxation for the whole run.
    #[default]
    SourceOnly,
    /// Vertices are marked visited as they are extracted (textbook form).
    OnExtract,
}

/// A single decrease-key event, reported to [`ShortestPaths::run_observed`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecreaseKey {
    pub vertex: usize,
    pub predecessor: usize,
    pub old_distance: f64,
    pub new_distance: f64,
    /// Running decrease-key count including this event.
    pub count: usize,
}

/// Shortest-path engine over a borrowed graph and a fixed source.
#[derive(Debug, Clone, Copy)]
pub struct ShortestPaths<'g> {
    graph: &'g Graph,
    source: usize,
    policy: SettlePolicy,
}

impl<'g> ShortestPaths<'g> {
    /// Prepare a run over `graph` from `source`.
    ///
    /// Fails with [`Error::VertexOutOfRange`] if `source` is not a vertex,
    /// which includes every source of an empty graph.
    pub fn new(graph: &'g Graph, source: usize) -> Result<Self> {
        let vertices = graph.num_vertices();
        if source >= vertices {
            return Err(Error::VertexOutOfRange {
                vertex: source,
                vertices,
            });
        }
        Ok(ShortestPaths {
            graph,
            source,
            policy: SettlePolicy::default(),
        })
    }

    /// Choose which vertices are excluded from relaxation.
    pub fn with_policy(mut self, policy: SettlePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Source vertex the run starts from.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Run the algorithm to completion and return distances, predecessors
    /// and the decrease-key count.
    pub fn run(&self) -> ShortestPathRun {
        self.run_observed(|_| {})
    }

    /// Run the algorithm, calling `observer` after every decrease-key.
    pub fn run_observed<F>(&self, mut observer: F) -> ShortestPathRun
    where
        F: FnMut(&DecreaseKey),
    {
        let n = self.graph.num_vertices();
        let mut distances = vec![f64::INFINITY; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut visited = vec![false; n];
        let mut queue = IndexedMinQueue::new(n);
        let mut decrease_keys = 0usize;

        distances[self.source] = 0.0;
        visited[self.source] = true;
        for (vertex, &distance) in distances.iter().enumerate() {
            queue.insert(vertex, distance);
        }

        while let Some(QueueEntry {
            vertex: u,
            distance: du,
        }) = queue.extract_min()
        {
            if self.policy == SettlePolicy::OnExtract {
                visited[u] = true;
            }

            for (v, weight) in self.graph.neighbors(u) {
                if visited[v] {
                    continue;
                }

                let candidate = du + weight;
                if candidate < distances[v] {
                    let old_distance = distances[v];
                    predecessors[v] = Some(u);
                    distances[v] = candidate;
                    // an improved vertex is always still queued: extracted
                    // vertices already hold their final distance
                    let queued = queue.decrease_key(v, candidate);
                    debug_assert!(queued, "vertex {} improved after extraction", v);
                    decrease_keys += 1;

                    let event = DecreaseKey {
                        vertex: v,
                        predecessor: u,
                        old_distance,
                        new_distance: candidate,
                        count: decrease_keys,
                    };
                    trace!(
                        vertex = v,
                        predecessor = u,
                        distance = candidate,
                        count = decrease_keys,
                        "decrease-key"
                    );
                    observer(&event);
                }
            }
        }

        debug!(
            vertices = n,
            source = self.source,
            decrease_keys,
            "shortest-path run complete"
        );

        ShortestPathRun {
            source: self.source,
            distances,
            predecessors,
            decrease_keys,
        }
    }
}

/// Final distances, predecessors and decrease-key count of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathRun {
    source: usize,
    distances: Vec<f64>,
    predecessors: Vec<Option<usize>>,
    decrease_keys: usize,
}

impl ShortestPathRun {
    /// Source vertex of the run.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Final distances indexed by vertex id; `+inf` marks unreachable.
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Final distance of `vertex`; `+inf` when unreachable.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range.
    pub fn distance(&self, vertex: usize) -> f64 {
        self.distances[vertex]
    }

    /// Last vertex whose edge improved `vertex`; `None` for the source and
    /// unreachable vertices.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range.
    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.predecessors[vertex]
    }

    /// Decrease-key operations performed during the run.
    pub fn decrease_key_count(&self) -> usize {
        self.decrease_keys
    }

    /// Whether `vertex` has a finite distance from the source.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range.
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distances[vertex].is_finite()
    }

    /// Walk predecessors back from `dest` towards the source.
    ///
    /// The per-vertex accessors above panic like slice indexing; this is the
    /// query entry point, so an out-of-range `dest` is an
    /// [`Error::VertexOutOfRange`] instead. An unreachable destination
    /// yields a partial path (just the vertices walked before the chain ran
    /// out) with `is_complete() == false`.
    pub fn path_to(&self, dest: usize) -> Result<Path> {
        let vertices = self.distances.len();
        if dest >= vertices {
            return Err(Error::VertexOutOfRange {
                vertex: dest,
                vertices,
            });
        }

        let mut path = vec![dest];
        let mut current = dest;
        while current != self.source {
            match self.predecessors[current] {
                Some(previous) => {
                    path.push(previous);
                    current = previous;
                }
                None => break,
            }
        }

        Ok(Path {
            complete: current == self.source,
            vertices: path,
            distance: self.distances[dest],
        })
    }
}

/// A reconstructed path, stored destination first.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    vertices: Vec<usize>,
    distance: f64,
    complete: bool,
}

impl Path {
    /// Vertex ids from the destination back to the source.
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Vertex ids from the source forward to the destination.
    pub fn from_source(&self) -> impl Iterator<Item = usize> + '_ {
        self.vertices.iter().rev().copied()
    }

    /// Final tentative distance of the destination.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Whether the walk reached the source.
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids = self
            .vertices
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "[{}] distance {:.6}", ids, self.distance)
    }
}
