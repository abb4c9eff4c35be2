// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::btree_map::{BTreeMap, Entry};

use crate::{Edge, Node, NodeId, Weights, CAR_PROFILE};

/// Bounds on the edge weights of a [Graph], backing the per-metric
/// heuristics of route finding.
///
/// `max_speed` is an upper bound (km/h) on the speed implied by any edge
/// (`weights.distance / weights.time`), and `min_fuel_rate` a lower bound
/// (l/km) on the implied fuel consumption (`weights.fuel / weights.distance`).
/// Bounds start at the [CAR_PROFILE] table extremes and widen as edges are
/// inserted, so they hold for derived and precomputed weights alike. They
/// only ever widen - removing edges does not tighten them back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricBounds {
    pub max_speed: f64,
    pub min_fuel_rate: f64,
}

/// Represents a road network as a set of [Nodes](Node)
/// and [Edges](Edge) between them.
///
/// The graph is a plain value: route finding never mutates it, and shared
/// references may be used from multiple threads at once. To change the
/// network while searches are in flight, build a new Graph and swap it in.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    nodes: BTreeMap<NodeId, (Node, Vec<Edge>)>,
    bounds: MetricBounds,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            bounds: MetricBounds {
                max_speed: CAR_PROFILE.max_speed(),
                min_fuel_rate: CAR_PROFILE.min_fuel_rate(),
            },
        }
    }

    /// Returns the number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns an iterator over all [Nodes](Node) in the graph.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().map(|(_, (node, _))| node)
    }

    /// Retrieves a [Node] with the provided id.
    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id).map(|(node, _)| node)
    }

    /// Creates or updates a [Node] with `node.id`.
    ///
    /// All outgoing and incoming edges are preserved.
    /// Updating a [Node] position might result in violation of the
    /// [Edge] distance invariant (and thus break route finding) and
    /// is therefore disallowed.
    pub fn set_node(&mut self, node: Node) {
        match self.nodes.entry(node.id.clone()) {
            Entry::Vacant(e) => {
                e.insert((node, Vec::default()));
            }
            Entry::Occupied(mut e) => {
                debug_assert_eq!(e.get().0.id, node.id);
                e.get_mut().0 = node;
            }
        }
    }

    /// Deletes a [Node] with a given `id`.
    ///
    /// While all outgoing edges are removed, incoming edges are preserved
    /// (as this would require a walk over all nodes in the graph). Dangling
    /// incoming edges are skipped during route finding.
    pub fn delete_node(&mut self, id: &str) {
        self.nodes.remove(id);
    }

    /// Gets all outgoing [Edges](Edge) from a node with a given id.
    pub fn get_edges(&self, from_id: &str) -> &[Edge] {
        self.nodes
            .get(from_id)
            .map(|(_, e)| e.as_slice())
            .unwrap_or_default()
    }

    /// Gets the [Weights] of an [Edge] from one node to another,
    /// if such an edge exists.
    pub fn get_edge(&self, from_id: &str, to_id: &str) -> Option<&Weights> {
        self.nodes.get(from_id).and_then(|(_, edges)| {
            edges
                .iter()
                .find_map(|edge| (edge.to == to_id).then_some(&edge.weights))
        })
    }

    /// Creates or updates an [Edge] from a node with a given id.
    /// Ignored if no node with `from_id` exists.
    pub fn set_edge(&mut self, from_id: &str, edge: Edge) {
        if let Some((_, edges)) = self.nodes.get_mut(from_id) {
            self.bounds.observe(&edge.weights);
            if let Some(candidate) = edges.iter_mut().find(|e| e.to == edge.to) {
                *candidate = edge;
            } else {
                edges.push(edge);
            }
        }
    }

    /// Removes an edge from one node to another.
    pub fn delete_edge(&mut self, from_id: &str, to_id: &str) {
        if let Some((_, edges)) = self.nodes.get_mut(from_id) {
            if let Some(idx) = edges.iter().position(|edge| edge.to == to_id) {
                edges.remove(idx);
            }
        }
    }

    /// The current [MetricBounds] of this graph.
    pub fn bounds(&self) -> MetricBounds {
        self.bounds
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricBounds {
    fn observe(&mut self, weights: &Weights) {
        // 0/0 produces NaN and carries no speed or rate information.
        // A zero-time or zero-distance edge legitimately pushes a bound
        // to infinity, degrading the corresponding heuristic to zero.
        let speed = weights.distance / weights.time;
        if !speed.is_nan() {
            self.max_speed = self.max_speed.max(speed);
        }

        let rate = weights.fuel / weights.distance;
        if !rate.is_nan() {
            self.min_fuel_rate = self.min_fuel_rate.min(rate);
        }
    }
}
