// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::NodeId;

/// Recommended number of allowed node expansions in
/// [find_route](crate::find_route) before
/// [SearchError::StepLimitExceeded] is returned.
pub const DEFAULT_STEP_LIMIT: usize = 1_000_000;

/// Failure outcomes of [find_route](crate::find_route).
///
/// Every failure is local to a single call and reported as a typed value -
/// never as a partially-filled route or an infinite-cost placeholder.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The start or goal node doesn't exist in the graph.
    #[error("unknown node: {0}")]
    UnknownNode(NodeId),

    /// Every node reachable from the start was expanded without
    /// reaching the goal.
    #[error("no route from {from} to {to}")]
    NoRoute { from: NodeId, to: NodeId },

    /// Route search has exceeded its limit of steps.
    /// Either the nodes are really far apart, or no route exists.
    ///
    /// Concluding that no route exists requires expanding every node
    /// accessible from the start, which can be very time-consuming on
    /// large networks. The step limit protects against resource
    /// exhaustion.
    #[error("step limit exceeded")]
    StepLimitExceeded,
}
