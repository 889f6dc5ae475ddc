use std::{error::Error, fmt::Display, str::FromStr, str::SplitWhitespace};

use graph_rs::{
    GraphError, UnweightedGraph, builder::GraphBuilder, graph::MatrixGraph,
    input::edgelist::EdgeList, types::Direction,
};
use log::{debug, warn};

use crate::query::Query;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The input ended while `expected` was still to be read.
    MissingToken { expected: String },
    /// `token` could not be read as the non-negative integer `expected`.
    InvalidNumber { expected: String, token: String },
    /// The input is not valid UTF-8.
    Encoding(std::str::Utf8Error),
}

impl Error for InputError {}

impl Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingToken { expected } => {
                write!(f, "unexpected end of input, expected {}", expected)
            }
            Self::InvalidNumber { expected, token } => {
                write!(f, "expected {} but found '{}'", expected, token)
            }
            Self::Encoding(e) => write!(f, "input is not valid utf-8: {}", e),
        }
    }
}

/// A parsed problem file: the port graph's edges followed by the queries to
/// answer against it.
///
/// The layout is a stream of whitespace separated tokens; line breaks carry
/// no meaning:
///
/// ```text
/// <edge_count>
/// <from> <to>        (edge_count times)
/// <query_count>
/// <port> <max_hops>  (query_count times)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub edges: EdgeList<String>,
    pub queries: Vec<Query>,
}

impl Problem {
    pub fn from_bytes(bytes: &[u8]) -> Result<Problem, InputError> {
        let text = std::str::from_utf8(bytes).map_err(InputError::Encoding)?;
        Problem::try_from(text)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Builds the undirected port graph.
    ///
    /// The graph gets one vertex slot per edge line, not per distinct port,
    /// so an input naming more distinct ports than it has edges fails with
    /// [`GraphError::CapacityExceeded`], and an input without edges fails
    /// with [`GraphError::ZeroCapacity`].
    pub fn build_graph(&self) -> Result<MatrixGraph<String>, GraphError> {
        let graph = GraphBuilder::new()
            .capacity(self.edge_count())
            .direction(Direction::Undirected)
            .edges(self.edges.edges().cloned())
            .build()?;

        debug!(
            "Built port graph with {} ports from {} edges",
            graph.vertex_count(),
            self.edge_count()
        );

        Ok(graph)
    }
}

impl TryFrom<&str> for Problem {
    type Error = InputError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut tokens = Tokens::new(value);

        let edge_count = tokens.number("edge count")?;
        let edges = (1..=edge_count)
            .map(|i| {
                let from = tokens.word(|| format!("source port of edge {}", i))?;
                let to = tokens.word(|| format!("target port of edge {}", i))?;
                Ok((from, to))
            })
            .collect::<Result<EdgeList<String>, InputError>>()?;

        let query_count = tokens.number("query count")?;
        let queries = (1..=query_count)
            .map(|i| {
                let port = tokens.word(|| format!("port of query {}", i))?;
                let max_hops = tokens.number(&format!("MNP of query {}", i))?;
                Ok(Query::new(port, max_hops))
            })
            .collect::<Result<Vec<Query>, InputError>>()?;

        let trailing = tokens.remaining();
        if trailing > 0 {
            warn!("Ignoring {} trailing tokens after the last query", trailing);
        }

        Ok(Problem { edges, queries })
    }
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    fn word<F>(&mut self, expected: F) -> Result<String, InputError>
    where
        F: FnOnce() -> String,
    {
        self.inner
            .next()
            .map(str::to_owned)
            .ok_or_else(|| InputError::MissingToken {
                expected: expected(),
            })
    }

    fn number(&mut self, expected: &str) -> Result<usize, InputError> {
        let token = self.word(|| expected.to_owned())?;

        usize::from_str(&token).map_err(|_| InputError::InvalidNumber {
            expected: expected.to_owned(),
            token,
        })
    }

    fn remaining(self) -> usize {
        self.inner.count()
    }
}
