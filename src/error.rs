//! Error types shared by the graph, shortest-path and report modules.

use thiserror::Error;

/// Errors returned at API seams where the caller supplies indices or data.
#[derive(Error, Debug)]
pub enum Error {
    #[error("vertex {vertex} out of range for graph with {vertices} vertices")]
    VertexOutOfRange { vertex: usize, vertices: usize },

    #[error("invalid weight matrix: {0}")]
    InvalidMatrix(String),

    #[error("invalid sweep range: {0}")]
    InvalidSweep(String),

    #[error("unknown sorting algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("could not parse report: {0}")]
    ReportParse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
