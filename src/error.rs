use std::path::PathBuf;

use thiserror::Error as ThisError;

use crate::{clustering::ClusteringError, solvers::SOLVERS};

/// Everything that can go wrong while reading an input file.
#[derive(Debug, ThisError)]
pub enum InputError {
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Can't read input file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Input file is empty")]
    Empty,
    #[error("Invalid number of commuters and cabs: `{0}`")]
    MalformedHeader(String),
    #[error("Expected {expected} commuter locations but found {found}")]
    InsufficientCommuterLocations { expected: usize, found: usize },
    #[error("Expected {expected} cab locations but found {found}")]
    InsufficientCabLocations { expected: usize, found: usize },
    #[error("Destination location is missing")]
    MissingDestination,
    #[error("Invalid coordinates: `{0}`")]
    InvalidCoordinateFormat(String),
}

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Clustering(#[from] ClusteringError),
    #[error("{solver} can't search {pairs} group-cab pairs (at most {max})")]
    SearchSpaceTooLarge {
        solver: String,
        pairs: usize,
        max: usize,
    },
    #[error("Unknown solver `{0}`, expected one of: {}", SOLVERS.join(", "))]
    UnknownSolver(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
