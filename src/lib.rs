// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Multi-metric routing over small weighted road graphs.
//!
//! Wayfind represents a road network as a standard weighted directed graph
//! and runs A* to find the best route between two nodes. Every [Edge] carries
//! three weights at once - distance, travel time and fuel consumption - and
//! the [Metric] selected per query decides which of them ranks candidate
//! routes. The other two are still accumulated along the winning path, so a
//! [Route] always reports all three totals. Travel time and fuel weights can
//! be derived from a base distance and a road category via
//! [profiles](crate::Profile), or supplied directly.
//!
//! # Example
//!
//! ```no_run
//! let mut g = wayfind::Graph::new();
//! g.set_node(wayfind::Node { id: "warszawa".into(), lat: 52.2319, lon: 21.0067 });
//! g.set_node(wayfind::Node { id: "poznan".into(), lat: 52.4082, lon: 16.9335 });
//! g.set_edge("warszawa", wayfind::Edge {
//!     to: "poznan".into(),
//!     weights: wayfind::CAR_PROFILE.derive_weights(311.0, "highway"),
//! });
//!
//! let route = wayfind::find_route(
//!     &g,
//!     "warszawa",
//!     "poznan",
//!     wayfind::Metric::Time,
//!     wayfind::DEFAULT_STEP_LIMIT,
//! )
//! .expect("failed to find route");
//!
//! println!("{:?}: {:.1} h, {:.1} l", route.path, route.totals.time, route.totals.fuel);
//! ```

mod astar;
mod distance;
mod graph;
mod heuristic;
mod metric;
mod profile;
pub mod records;

pub use astar::{find_route, Route, SearchError, DEFAULT_STEP_LIMIT};
pub use distance::earth_distance;
pub use graph::{Graph, MetricBounds};
pub use heuristic::{estimate, Estimator};
pub use metric::{Metric, ParseMetricError};
pub use profile::{Profile, RoadClass, CAR_PROFILE};

/// Identifier of a [Node], unique within a [Graph].
///
/// Identifiers are opaque - any string provided by whoever builds the graph,
/// with no length or format constraints.
pub type NodeId = String;

/// Represents a junction of the network, an element of the [Graph].
///
/// The position is immutable once the node has been inserted into a graph,
/// as edge weights and heuristic estimates are derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub lat: f64,
    pub lon: f64,
}

/// Per-metric costs of a single [Edge], or accumulated along a [Route].
///
/// Units are kilometers, hours and litres. All values must be finite and
/// not less than zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Weights {
    pub distance: f64,
    pub time: f64,
    pub fuel: f64,
}

impl Weights {
    pub const ZERO: Self = Self {
        distance: 0.0,
        time: 0.0,
        fuel: 0.0,
    };
}

impl std::ops::Add for Weights {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            distance: self.distance + rhs.distance,
            time: self.time + rhs.time,
            fuel: self.fuel + rhs.fuel,
        }
    }
}

impl std::ops::AddAssign for Weights {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Represents an outgoing (one-way) connection from a specific [Node].
/// A bidirectional road is represented as two Edges.
///
/// `weights.distance` must not be less than the crow-flies distance between
/// the two nodes, otherwise route finding may return non-optimal routes.
///
/// `to` might not exist in the [Graph]. Such edges are silently skipped
/// during route finding.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub to: NodeId,
    pub weights: Weights,
}
