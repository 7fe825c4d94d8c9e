use std::path::PathBuf;
use thiserror::Error;


/// Failures while building the graph from declared nodes and edges
#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("edge references undeclared node ({0})")]
    UnknownNode(String),
    #[error("node declared twice ({0})")]
    DuplicateNode(String),
}

/// Failures while running a search
/// An unreachable destination is not an error, see `Route::Unreachable`
#[derive(Debug, Error, PartialEq)]
pub enum SearchError {
    #[error("No such city: ({0})")]
    UnknownNode(String),
    #[error("parent map has no entry at index {0}")]
    BrokenParentChain(usize),
    #[error("no edge between {0} and {1}")]
    MissingEdge(String, String),
}

/// Failures while reading the datasets or the endpoint input
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{path}:{line}: {reason}")]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },
    #[error("expected a start and a destination on two lines")]
    MissingEndpoints,
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoadError::Io { path: path.into(), source }
    }
}

/// Top level error returned to the binary
#[derive(Debug, Error)]
pub enum RouteError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Search(#[from] SearchError),
}
