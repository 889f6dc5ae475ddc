use std::{error, fmt::Display, io};

use graph_rs::GraphError;

use crate::input::InputError;

pub mod input;
pub mod query;
pub mod report;

#[derive(Debug)]
pub enum Error {
    Input(InputError),
    Graph(GraphError),
    Io(io::Error),
    Json(serde_json::Error),
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Input(e) => Some(e),
            Self::Graph(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input(e) => write!(f, "invalid input: {}", e),
            Self::Graph(e) => write!(f, "graph error: {}", e),
            Self::Io(e) => write!(f, "i/o error: {}", e),
            Self::Json(e) => write!(f, "cannot write json report: {}", e),
        }
    }
}

impl From<InputError> for Error {
    fn from(value: InputError) -> Self {
        Self::Input(value)
    }
}

impl From<GraphError> for Error {
    fn from(value: GraphError) -> Self {
        Self::Graph(value)
    }
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
