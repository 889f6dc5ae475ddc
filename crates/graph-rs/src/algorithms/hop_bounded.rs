use std::{collections::VecDeque, fmt::Debug};

use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::instrument;

use crate::{GraphError, UnweightedGraph};

use super::ordered_neighbors;

/// Breadth-first traversal capped at a maximum number of edges from the
/// start vertex.
pub trait HopBounded: UnweightedGraph {
    /// Minimum hop count of every vertex reachable from `start` using at
    /// most `max_hops` edges. `start` itself is always present at 0.
    fn hop_distances(
        &self,
        start: &Self::Label,
        max_hops: usize,
    ) -> Result<FxHashMap<Self::Label, usize>, GraphError>;

    fn bounded_reach(
        &self,
        start: &Self::Label,
        max_hops: usize,
    ) -> Result<FxHashSet<Self::Label>, GraphError> {
        Ok(self.hop_distances(start, max_hops)?.into_keys().collect())
    }
}

impl<G> HopBounded for G
where
    G: UnweightedGraph,
    G::Label: Debug,
{
    #[instrument(level = "trace", skip(self))]
    fn hop_distances(
        &self,
        start: &G::Label,
        max_hops: usize,
    ) -> Result<FxHashMap<G::Label, usize>, GraphError> {
        if !self.contains_vertex(start) {
            return Err(GraphError::VertexNotFound(format!("{:?}", start)));
        }

        let mut visited = FxHashMap::default();
        let mut pending = VecDeque::from([(start.clone(), 0usize)]);

        // The first dequeue of a vertex carries its minimum hop count since
        // the queue is ordered by hops.
        while let Some((vertex, hops)) = pending.pop_front() {
            if visited.contains_key(&vertex) {
                continue;
            }

            if hops < max_hops {
                pending.extend(
                    ordered_neighbors(self, &vertex)?
                        .into_iter()
                        .map(|n| (n, hops + 1)),
                );
            }

            trace!("reached {:?} after {} hops", vertex, hops);
            visited.insert(vertex, hops);
        }

        debug!(
            "{} vertices within {} hops of {:?}",
            visited.len(),
            max_hops,
            start
        );

        Ok(visited)
    }
}

#[cfg(test)]
mod test {
    use rustc_hash::FxHashSet;

    use crate::{
        GraphError, UnweightedGraph, algorithms::traversal::Traversal, graph::MatrixGraph,
        types::Direction,
    };

    use super::HopBounded;

    fn setup() -> MatrixGraph<&'static str> {
        let mut graph = MatrixGraph::new(8, Direction::Undirected).unwrap();
        graph
            .extend_edges([
                ("A", "B"),
                ("B", "C"),
                ("C", "D"),
                ("A", "E"),
                ("E", "D"),
                ("D", "F"),
                ("X", "Y"),
            ])
            .unwrap();
        graph
    }

    #[test]
    fn zero_hops_is_start_only() {
        let graph = setup();

        for vertex in graph.vertices() {
            assert_eq!(
                graph.bounded_reach(&vertex, 0).unwrap(),
                FxHashSet::from_iter([vertex])
            );
        }
    }

    #[test]
    fn shortest_hop_counts() {
        let graph = setup();
        let distances = graph.hop_distances(&"A", 10).unwrap();

        assert_eq!(distances[&"A"], 0);
        assert_eq!(distances[&"B"], 1);
        assert_eq!(distances[&"E"], 1);
        assert_eq!(distances[&"C"], 2);
        // Via E rather than B -> C.
        assert_eq!(distances[&"D"], 2);
        assert_eq!(distances[&"F"], 3);
        assert!(!distances.contains_key(&"X"));
    }

    #[test]
    fn budget_cuts_off_frontier() {
        let graph = setup();

        assert_eq!(
            graph.bounded_reach(&"A", 2).unwrap(),
            FxHashSet::from_iter(["A", "B", "C", "D", "E"])
        );
    }

    #[test]
    fn monotone_and_bounded_by_reachable_set() {
        let graph = setup();

        for vertex in graph.vertices() {
            let reachable = graph.reachable_set(&vertex).unwrap();
            let mut previous = FxHashSet::default();

            for k in 0..graph.vertex_count() {
                let bounded = graph.bounded_reach(&vertex, k).unwrap();
                assert!(bounded.is_subset(&reachable), "{vertex} within {k}");
                assert!(previous.is_subset(&bounded), "{vertex} within {k}");
                previous = bounded;
            }

            // Converges once the budget covers the longest shortest path.
            assert_eq!(previous, reachable, "{vertex}");
        }
    }

    #[test]
    fn unknown_start() {
        let graph = setup();

        assert!(matches!(
            graph.bounded_reach(&"Z", 3),
            Err(GraphError::VertexNotFound(_))
        ));
    }

    #[test]
    fn unknown_start_with_zero_budget() {
        let graph = setup();

        assert_eq!(
            graph.bounded_reach(&"Z", 0),
            Err(GraphError::VertexNotFound("\"Z\"".to_string()))
        );
    }
}
