use std::{fmt::Debug, hash::Hash};

use crate::{GraphError, graph::MatrixGraph, input::edgelist::EdgeList, types::Direction};

pub struct Uninitialized {}

pub struct WithCapacity {
    capacity: usize,
    direction: Direction,
}

pub struct FromEdgeList<L> {
    capacity: usize,
    direction: Direction,
    edges: EdgeList<L>,
}

/// Type-state builder for [`MatrixGraph`]: capacity first, then edges.
#[derive(Debug)]
pub struct GraphBuilder<State> {
    state: State,
}

impl GraphBuilder<Uninitialized> {
    pub fn new() -> Self {
        Self {
            state: Uninitialized {},
        }
    }

    pub fn capacity(self, capacity: usize) -> GraphBuilder<WithCapacity> {
        GraphBuilder {
            state: WithCapacity {
                capacity,
                direction: Direction::default(),
            },
        }
    }
}

impl Default for GraphBuilder<Uninitialized> {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder<WithCapacity> {
    pub fn direction(mut self, direction: Direction) -> Self {
        self.state.direction = direction;
        self
    }

    pub fn edges<L, I>(self, edges: I) -> GraphBuilder<FromEdgeList<L>>
    where
        I: IntoIterator<Item = (L, L)>,
    {
        GraphBuilder {
            state: FromEdgeList {
                capacity: self.state.capacity,
                direction: self.state.direction,
                edges: edges.into_iter().collect(),
            },
        }
    }

    pub fn build<L>(self) -> Result<MatrixGraph<L>, GraphError>
    where
        L: Clone + Eq + Hash + Debug,
    {
        MatrixGraph::new(self.state.capacity, self.state.direction)
    }
}

impl<L> GraphBuilder<FromEdgeList<L>>
where
    L: Clone + Eq + Hash + Debug,
{
    pub fn build(self) -> Result<MatrixGraph<L>, GraphError> {
        let mut graph = MatrixGraph::new(self.state.capacity, self.state.direction)?;
        graph.extend_edges(self.state.edges)?;

        Ok(graph)
    }
}
