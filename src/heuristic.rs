// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::{earth_distance, Graph, Metric, Node};

/// Lower-bound estimator of the remaining cost to a fixed goal under a
/// fixed [Metric].
///
/// The estimate is the great-circle distance to the goal, scaled per
/// metric: unscaled for [Metric::Distance], divided by the graph's maximum
/// speed for [Metric::Time], and multiplied by the graph's minimum fuel
/// rate for [Metric::Fuel]. As long as every edge respects the distance
/// invariant (see [Edge](crate::Edge)) and the graph's
/// [bounds](Graph::bounds), the estimate never exceeds the true remaining
/// cost under the matching metric.
///
/// Estimates under one metric must never rank costs accumulated under a
/// different one - that combination silently loses the optimality
/// guarantee of route finding.
#[derive(Debug, Clone, Copy)]
pub struct Estimator<'a> {
    goal: &'a Node,
    scale: f64,
}

impl<'a> Estimator<'a> {
    /// Creates an estimator towards `goal` under `metric`, with the scaling
    /// factor taken from the bounds tracked by the graph.
    pub fn new(g: &Graph, goal: &'a Node, metric: Metric) -> Self {
        let bounds = g.bounds();
        let scale = match metric {
            Metric::Distance => 1.0,
            Metric::Time => 1.0 / bounds.max_speed,
            Metric::Fuel => bounds.min_fuel_rate,
        };
        Self { goal, scale }
    }

    /// Lower bound on the cost of travelling from `node` to the goal.
    pub fn estimate(&self, node: &Node) -> f64 {
        earth_distance(node.lat, node.lon, self.goal.lat, self.goal.lon) * self.scale
    }
}

/// Lower bound on the cost of travelling between two nodes of a graph
/// under the given metric.
///
/// Returns [f64::INFINITY] when either node is absent from the graph,
/// pruning the corresponding branch instead of failing.
pub fn estimate(g: &Graph, node_id: &str, goal_id: &str, metric: Metric) -> f64 {
    match (g.get_node(node_id), g.get_node(goal_id)) {
        (Some(node), Some(goal)) => Estimator::new(g, goal, metric).estimate(node),
        _ => f64::INFINITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Edge, Weights};

    macro_rules! assert_almost_eq {
        ($a:expr, $b:expr) => {
            assert!(
                (($a - $b).abs() < 1e-4),
                "assertion failed: {} ≈ {}",
                $a,
                $b
            )
        };
    }

    fn two_node_graph() -> Graph {
        let mut g = Graph::new();
        g.set_node(Node {
            id: "a".to_string(),
            lat: 0.0,
            lon: 0.0,
        });
        g.set_node(Node {
            id: "b".to_string(),
            lat: 0.0,
            lon: 1.0,
        });
        g
    }

    #[test]
    fn scales_per_metric() {
        let g = two_node_graph();
        let crow_flies = earth_distance(0.0, 0.0, 0.0, 1.0);

        assert_almost_eq!(
            estimate(&g, "a", "b", Metric::Distance),
            crow_flies
        );
        assert_almost_eq!(
            estimate(&g, "a", "b", Metric::Time),
            crow_flies / 100.0
        );
        assert_almost_eq!(
            estimate(&g, "a", "b", Metric::Fuel),
            crow_flies * 0.05
        );
    }

    #[test]
    fn tracks_graph_bounds() {
        let mut g = two_node_graph();
        let crow_flies = earth_distance(0.0, 0.0, 0.0, 1.0);

        // A 200 km/h edge loosens the time bound for the whole graph.
        g.set_edge(
            "a",
            Edge {
                to: "b".to_string(),
                weights: Weights {
                    distance: 200.0,
                    time: 1.0,
                    fuel: 10.0,
                },
            },
        );
        assert_almost_eq!(
            estimate(&g, "a", "b", Metric::Time),
            crow_flies / 200.0
        );
    }

    #[test]
    fn unknown_nodes_estimate_to_infinity() {
        let g = two_node_graph();
        assert_eq!(estimate(&g, "a", "z", Metric::Distance), f64::INFINITY);
        assert_eq!(estimate(&g, "z", "a", Metric::Time), f64::INFINITY);
    }
}
