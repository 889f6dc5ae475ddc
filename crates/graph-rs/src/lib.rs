use std::{error::Error, fmt::Display, hash::Hash};

use rustc_hash::FxHashSet;

pub mod algorithms;
pub mod builder;
pub mod graph;
pub mod input;
pub mod types;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A graph was requested with room for zero vertices.
    ZeroCapacity,
    /// Interning one more vertex would exceed the fixed capacity.
    CapacityExceeded { capacity: usize },
    /// A `capacity * capacity` matrix cannot be allocated.
    CapacityTooLarge { capacity: usize },
    /// The vertex label was never interned.
    VertexNotFound(String),
}

impl Error for GraphError {}

impl Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "graph capacity must be at least 1"),
            Self::CapacityExceeded { capacity } => {
                write!(f, "graph is full: all {} vertex slots are in use", capacity)
            }
            Self::CapacityTooLarge { capacity } => {
                write!(f, "cannot allocate a matrix for {} vertices", capacity)
            }
            Self::VertexNotFound(label) => write!(f, "vertex {} not found in graph", label),
        }
    }
}

/// Unweighted graph over interned vertex labels.
pub trait UnweightedGraph {
    type Label: Clone + Eq + Hash;

    /// Maximum number of distinct vertices the graph can hold.
    fn capacity(&self) -> usize;

    fn vertex_count(&self) -> usize;

    /// Interns both labels if needed and inserts the edge `from -> to`
    /// (and `to -> from` for undirected graphs).
    fn add_edge(&mut self, from: Self::Label, to: Self::Label) -> Result<(), GraphError>;

    /// Index assigned to `label` when it was interned.
    fn index_of(&self, label: &Self::Label) -> Option<usize>;

    fn contains_vertex(&self, label: &Self::Label) -> bool {
        self.index_of(label).is_some()
    }

    /// Returns all labels in the order they were interned.
    fn vertices(&self) -> Vec<Self::Label>;

    /// Returns every direct successor of `label`, excluding `label` itself.
    fn neighbors(&self, label: &Self::Label) -> Result<FxHashSet<Self::Label>, GraphError>;
}
