use graph_rs::{
    GraphError, UnweightedGraph,
    algorithms::{hop_bounded::HopBounded, traversal::Traversal},
};
use log::{debug, info, warn};
use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How many ports reachable from `port` lie farther than `max_hops` edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub port: String,
    pub max_hops: usize,
}

impl Query {
    pub fn new(port: String, max_hops: usize) -> Self {
        Self { port, max_hops }
    }
}

/// Answer to the query at 1-based position `case`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseResult {
    pub case: usize,
    pub port: String,
    pub max_hops: usize,
    pub unreachable: usize,
}

/// What to do with a query whose port is not in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingPortPolicy {
    /// Stop and return the lookup error of the first such query. No
    /// results are returned, including those of earlier queries.
    #[default]
    Abort,
    /// Log the query and leave it out of the results.
    Skip,
}

/// Number of vertices reachable from `start` by some path but not by any
/// path of at most `max_hops` edges.
///
/// Fails with [`GraphError::VertexNotFound`] if `start` is not in `graph`.
#[instrument(level = "debug", skip(graph))]
pub fn unreachable_within<G>(
    start: &G::Label,
    graph: &G,
    max_hops: usize,
) -> Result<usize, GraphError>
where
    G: Traversal + HopBounded,
    G::Label: std::fmt::Debug,
{
    let bounded = graph.bounded_reach(start, max_hops)?;
    let reachable = graph.reachable_set(start)?;
    debug_assert!(bounded.is_subset(&reachable));

    Ok(reachable.len() - bounded.len())
}

/// Answers every query in order.
pub fn evaluate<G>(
    graph: &G,
    queries: &[Query],
    policy: MissingPortPolicy,
) -> Result<Vec<CaseResult>, GraphError>
where
    G: UnweightedGraph<Label = String>,
{
    info!("Evaluating {} queries", queries.len());

    let results = queries
        .iter()
        .enumerate()
        .map(|(i, query)| evaluate_case(graph, i + 1, query, policy))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(results.into_iter().flatten().collect())
}

/// Same as [`evaluate`], but spreads the queries over the rayon thread pool.
/// Results keep the query order, and with [`MissingPortPolicy::Abort`] the
/// error is the one of the first failing query, as in [`evaluate`].
pub fn par_evaluate<G>(
    graph: &G,
    queries: &[Query],
    policy: MissingPortPolicy,
) -> Result<Vec<CaseResult>, GraphError>
where
    G: UnweightedGraph<Label = String> + Sync,
{
    info!(
        "Evaluating {} queries on {} threads",
        queries.len(),
        rayon::current_num_threads()
    );

    let results = queries
        .par_iter()
        .enumerate()
        .map(|(i, query)| evaluate_case(graph, i + 1, query, policy))
        .collect::<Vec<_>>()
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(results.into_iter().flatten().collect())
}

fn evaluate_case<G>(
    graph: &G,
    case: usize,
    query: &Query,
    policy: MissingPortPolicy,
) -> Result<Option<CaseResult>, GraphError>
where
    G: UnweightedGraph<Label = String>,
{
    match unreachable_within(&query.port, graph, query.max_hops) {
        Ok(unreachable) => {
            debug!("case {}: {} unreachable from {}", case, unreachable, query.port);
            Ok(Some(CaseResult {
                case,
                port: query.port.clone(),
                max_hops: query.max_hops,
                unreachable,
            }))
        }
        Err(GraphError::VertexNotFound(_)) if policy == MissingPortPolicy::Skip => {
            warn!("Skipping case {}: port {} is not in the graph", case, query.port);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
