use crate::{GraphError, UnweightedGraph};

pub mod hop_bounded;
pub mod traversal;

/// Neighbors of `label` ordered by their interning index, so traversals
/// enqueue them in a reproducible order.
fn ordered_neighbors<G>(graph: &G, label: &G::Label) -> Result<Vec<G::Label>, GraphError>
where
    G: UnweightedGraph + ?Sized,
{
    let mut neighbors: Vec<G::Label> = graph.neighbors(label)?.into_iter().collect();
    neighbors.sort_by_key(|n| graph.index_of(n));

    Ok(neighbors)
}
