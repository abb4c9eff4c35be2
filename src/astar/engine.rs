// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::{BinaryHeap, HashSet};

use crate::heuristic::Estimator;
use crate::{Graph, Metric, Node, NodeId, SearchError, Weights};

/// A route found by [find_route]: the visited nodes from start to goal
/// (inclusive, a single node if start equals goal) and the weights
/// accumulated along the way.
///
/// All three totals describe the same path, regardless of which [Metric]
/// ranked the candidates during the search.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub path: Vec<NodeId>,
    pub totals: Weights,
}

/// A candidate partial route awaiting expansion.
///
/// Candidates are compared by score first, then by insertion sequence, so
/// that of two equally-promising candidates the one discovered earlier is
/// expanded first. This makes the tie-break rule explicit: which of several
/// equal-cost routes gets returned depends only on edge insertion order.
#[derive(Debug, Clone)]
struct FrontierEntry<'g> {
    at: &'g str,
    path: Vec<&'g str>,
    totals: Weights,
    score: f64,
    seq: u64,
}

impl PartialEq for FrontierEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score && self.seq == other.seq
    }
}

impl Eq for FrontierEntry<'_> {}

impl Ord for FrontierEntry<'_> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // NOTE: We revert the order of comparison,
        // as lower scores are considered better ("higher"),
        // and Rust's BinaryHeap is a max-heap. Scores are always finite.
        other
            .score
            .partial_cmp(&self.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Uses the [A* algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm)
/// to find the best route between two nodes in the provided graph,
/// as judged by the provided [Metric].
///
/// The search is deterministic: the same graph, endpoints and metric always
/// produce the same route, with ties between equal-cost routes broken by
/// edge insertion order.
///
/// `step_limit` limits how many nodes may be expanded during the search
/// before returning [SearchError::StepLimitExceeded]. Concluding that no
/// route exists requires expanding all nodes accessible from the start,
/// which may be time-consuming on large networks. The recommended value is
/// [DEFAULT_STEP_LIMIT](crate::DEFAULT_STEP_LIMIT).
pub fn find_route(
    g: &Graph,
    from_id: &str,
    to_id: &str,
    metric: Metric,
    step_limit: usize,
) -> Result<Route, SearchError> {
    let from = g
        .get_node(from_id)
        .ok_or_else(|| SearchError::UnknownNode(from_id.to_string()))?;
    let to = g
        .get_node(to_id)
        .ok_or_else(|| SearchError::UnknownNode(to_id.to_string()))?;

    // The estimator is always built for the very metric that ranks the
    // frontier - a mismatched pair loses the optimality guarantee.
    let estimator = Estimator::new(g, to, metric);
    run(g, from, to, metric, &estimator, step_limit)
}

fn run<'g>(
    g: &'g Graph,
    from: &'g Node,
    to: &'g Node,
    metric: Metric,
    estimator: &Estimator<'_>,
    step_limit: usize,
) -> Result<Route, SearchError> {
    let mut frontier: BinaryHeap<FrontierEntry<'g>> = BinaryHeap::default();
    let mut visited: HashSet<&'g str> = HashSet::default();
    let mut seq: u64 = 0;
    let mut steps: usize = 0;

    frontier.push(FrontierEntry {
        at: from.id.as_str(),
        path: vec![from.id.as_str()],
        totals: Weights::ZERO,
        score: estimator.estimate(from),
        seq,
    });

    while let Some(entry) = frontier.pop() {
        if entry.at == to.id {
            return Ok(Route {
                path: entry.path.iter().map(|&id| id.to_string()).collect(),
                totals: entry.totals,
            });
        }

        // A node may sit in the frontier multiple times. Only its first
        // (best-scored) occurrence is expanded; later ones are stale and
        // get discarded here. Once expanded, a node is never reconsidered,
        // which is safe as long as the heuristic never overestimates.
        if !visited.insert(entry.at) {
            continue;
        }

        steps += 1;
        if steps > step_limit {
            return Err(SearchError::StepLimitExceeded);
        }

        for edge in g.get_edges(entry.at) {
            if visited.contains(edge.to.as_str()) {
                continue;
            }

            // Edges may reference nodes absent from the graph;
            // such branches are dead ends and get skipped.
            let Some(neighbor) = g.get_node(&edge.to) else {
                continue;
            };

            // All three totals accumulate in parallel; the active metric
            // only decides the score ranking the frontier.
            let totals = entry.totals + edge.weights;
            let mut path = entry.path.clone();
            path.push(neighbor.id.as_str());

            seq += 1;
            frontier.push(FrontierEntry {
                at: neighbor.id.as_str(),
                path,
                totals,
                score: metric.component(&totals) + estimator.estimate(neighbor),
                seq,
            });
        }
    }

    Err(SearchError::NoRoute {
        from: from.id.clone(),
        to: to.id.clone(),
    })
}
