use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

use log::{debug, trace};
use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet};

use crate::{GraphError, UnweightedGraph, input::edgelist::EdgeList, types::Direction};

const WORD_BITS: usize = u64::BITS as usize;

/// Adjacency-matrix graph with a fixed number of vertex slots.
///
/// Labels are interned on first use and keep their index for the lifetime
/// of the graph. The matrix is allocated once as `capacity * capacity`
/// bits packed into `u64` words and never grows. Every slot starts out
/// adjacent to itself, which [`MatrixGraph::has_edge`] reports but
/// [`UnweightedGraph::neighbors`] leaves out.
#[derive(Debug, Clone)]
pub struct MatrixGraph<L> {
    capacity: usize,
    direction: Direction,
    labels: Vec<L>,
    indices: FxHashMap<L, usize>,
    adjacency: Vec<u64>,
}

impl<L> MatrixGraph<L>
where
    L: Clone + Eq + Hash + Debug,
{
    pub fn new(capacity: usize, direction: Direction) -> Result<MatrixGraph<L>, GraphError> {
        if capacity == 0 {
            return Err(GraphError::ZeroCapacity);
        }

        let words = capacity
            .checked_mul(capacity)
            .ok_or(GraphError::CapacityTooLarge { capacity })?
            .div_ceil(WORD_BITS);

        let mut adjacency = Vec::new();
        adjacency
            .try_reserve_exact(words)
            .map_err(|_| GraphError::CapacityTooLarge { capacity })?;
        adjacency.resize(words, 0);

        debug!(
            "Created matrix graph (capacity: {}, direction: {:?}, {} words)",
            capacity, direction, words
        );

        let mut graph = Self {
            capacity,
            direction,
            labels: Vec::with_capacity(capacity),
            indices: FxHashMap::with_capacity_and_hasher(capacity, FxBuildHasher),
            adjacency,
        };
        for i in 0..capacity {
            graph.set(i, i);
        }

        Ok(graph)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns whether `adjacency[from][to]` is set.
    pub fn has_edge(&self, from: &L, to: &L) -> Result<bool, GraphError> {
        let from = self.require(from)?;
        let to = self.require(to)?;

        Ok(self.get(from, to))
    }

    /// Inserts every edge in order and stops at the first failure. Edges
    /// inserted before the failure stay in the graph.
    pub fn extend_edges<I>(&mut self, edges: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = (L, L)>,
    {
        edges
            .into_iter()
            .try_for_each(|(from, to)| self.add_edge(from, to))
    }

    fn require(&self, label: &L) -> Result<usize, GraphError> {
        self.indices
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::VertexNotFound(format!("{:?}", label)))
    }

    fn intern(&mut self, label: L) -> Result<usize, GraphError> {
        if let Some(index) = self.indices.get(&label) {
            return Ok(*index);
        }

        if self.labels.len() == self.capacity {
            return Err(GraphError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let index = self.labels.len();
        trace!("interned {:?} as {}", label, index);
        self.indices.insert(label.clone(), index);
        self.labels.push(label);

        Ok(index)
    }
}

impl<L> MatrixGraph<L> {
    fn get(&self, from: usize, to: usize) -> bool {
        let cell = from * self.capacity + to;
        self.adjacency[cell / WORD_BITS] & (1 << (cell % WORD_BITS)) != 0
    }

    fn set(&mut self, from: usize, to: usize) {
        let cell = from * self.capacity + to;
        self.adjacency[cell / WORD_BITS] |= 1 << (cell % WORD_BITS);
    }
}

impl<L> UnweightedGraph for MatrixGraph<L>
where
    L: Clone + Eq + Hash + Debug,
{
    type Label = L;

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    fn add_edge(&mut self, from: L, to: L) -> Result<(), GraphError> {
        let from = self.intern(from)?;
        let to = self.intern(to)?;

        self.set(from, to);
        if !self.direction.is_directed() {
            self.set(to, from);
        }

        Ok(())
    }

    fn index_of(&self, label: &L) -> Option<usize> {
        self.indices.get(label).copied()
    }

    fn vertices(&self) -> Vec<L> {
        self.labels.clone()
    }

    fn neighbors(&self, label: &L) -> Result<FxHashSet<L>, GraphError> {
        let index = self.require(label)?;

        Ok((0..self.labels.len())
            .filter(|j| *j != index && self.get(index, *j))
            .map(|j| self.labels[j].clone())
            .collect())
    }
}

/// Renders one line per vertex: the label followed by its adjacency row
/// as `1`/`0` flags, all tab separated.
impl<L: Display> Display for MatrixGraph<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.labels.len();
        for (i, label) in self.labels.iter().enumerate() {
            write!(f, "{}\t", label)?;
            for j in 0..count {
                write!(f, "{}\t", u8::from(self.get(i, j)))?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}

/// Builds an undirected graph whose capacity is the number of edges in the
/// list, which is how edge-list inputs are sized throughout.
impl<L> TryFrom<EdgeList<L>> for MatrixGraph<L>
where
    L: Clone + Eq + Hash + Debug,
{
    type Error = GraphError;

    fn try_from(edge_list: EdgeList<L>) -> Result<Self, Self::Error> {
        let mut graph = MatrixGraph::new(edge_list.len(), Direction::Undirected)?;
        graph.extend_edges(edge_list)?;

        Ok(graph)
    }
}
