use std::{collections::VecDeque, fmt::Debug};

use log::{debug, trace};
use rustc_hash::FxHashSet;
use tracing::instrument;

use crate::{GraphError, UnweightedGraph};

use super::ordered_neighbors;

/// Unrestricted traversals from a single start vertex.
///
/// All three visit the same set of vertices: everything reachable from
/// `start` along stored edges. They fail with
/// [`GraphError::VertexNotFound`] if `start` was never interned.
pub trait Traversal: UnweightedGraph {
    /// Vertices in breadth-first visitation order.
    fn breadth_first(&self, start: &Self::Label) -> Result<Vec<Self::Label>, GraphError>;

    /// Vertices in depth-first visitation order.
    fn depth_first(&self, start: &Self::Label) -> Result<Vec<Self::Label>, GraphError>;

    fn reachable_set(&self, start: &Self::Label) -> Result<FxHashSet<Self::Label>, GraphError> {
        Ok(self.breadth_first(start)?.into_iter().collect())
    }
}

impl<G> Traversal for G
where
    G: UnweightedGraph,
    G::Label: Debug,
{
    #[instrument(level = "trace", skip(self))]
    fn breadth_first(&self, start: &G::Label) -> Result<Vec<G::Label>, GraphError> {
        let mut visited = FxHashSet::default();
        let mut order = Vec::new();
        let mut pending = VecDeque::from([start.clone()]);

        while let Some(vertex) = pending.pop_front() {
            if !visited.insert(vertex.clone()) {
                continue;
            }

            pending.extend(ordered_neighbors(self, &vertex)?);
            trace!("visited {:?}", vertex);
            order.push(vertex);
        }

        debug!(
            "breadth first from {:?} visited {} vertices",
            start,
            order.len()
        );

        Ok(order)
    }

    #[instrument(level = "trace", skip(self))]
    fn depth_first(&self, start: &G::Label) -> Result<Vec<G::Label>, GraphError> {
        let mut visited = FxHashSet::default();
        let mut order = Vec::new();
        let mut pending = vec![start.clone()];

        while let Some(vertex) = pending.pop() {
            if !visited.insert(vertex.clone()) {
                continue;
            }

            // Reversed so the lowest index is popped first.
            pending.extend(ordered_neighbors(self, &vertex)?.into_iter().rev());
            trace!("visited {:?}", vertex);
            order.push(vertex);
        }

        debug!(
            "depth first from {:?} visited {} vertices",
            start,
            order.len()
        );

        Ok(order)
    }
}

#[cfg(test)]
mod test {
    use rustc_hash::FxHashSet;

    use crate::{GraphError, UnweightedGraph, graph::MatrixGraph, types::Direction};

    use super::Traversal;

    fn setup(direction: Direction) -> MatrixGraph<&'static str> {
        let mut graph = MatrixGraph::new(8, direction).unwrap();
        graph
            .extend_edges([
                ("A", "B"),
                ("A", "C"),
                ("B", "D"),
                ("C", "D"),
                ("D", "E"),
                ("F", "G"),
            ])
            .unwrap();
        graph
    }

    #[test]
    fn breadth_first_order() {
        let graph = setup(Direction::Undirected);

        assert_eq!(
            graph.breadth_first(&"A").unwrap(),
            vec!["A", "B", "C", "D", "E"]
        );
    }

    #[test]
    fn depth_first_order() {
        let graph = setup(Direction::Undirected);

        assert_eq!(
            graph.depth_first(&"A").unwrap(),
            vec!["A", "B", "D", "C", "E"]
        );
    }

    #[test]
    fn depth_and_breadth_first_agree_on_set() {
        let graph = setup(Direction::Undirected);

        for vertex in graph.vertices() {
            let dfs: FxHashSet<_> = graph.depth_first(&vertex).unwrap().into_iter().collect();
            assert_eq!(dfs, graph.reachable_set(&vertex).unwrap(), "from {vertex}");
        }
    }

    #[test]
    fn reachable_set_stays_in_component() {
        let graph = setup(Direction::Undirected);

        assert_eq!(
            graph.reachable_set(&"G").unwrap(),
            FxHashSet::from_iter(["F", "G"])
        );
    }

    #[test]
    fn directed_reachability() {
        let graph = setup(Direction::Directed);

        assert_eq!(
            graph.reachable_set(&"D").unwrap(),
            FxHashSet::from_iter(["D", "E"])
        );
        assert_eq!(graph.reachable_set(&"A").unwrap().len(), 5);
    }

    #[test]
    fn unknown_start() {
        let graph = setup(Direction::Undirected);

        assert!(matches!(
            graph.reachable_set(&"Z"),
            Err(GraphError::VertexNotFound(_))
        ));
        assert!(graph.depth_first(&"Z").is_err());
    }
}
