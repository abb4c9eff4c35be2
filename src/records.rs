// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Building [Graphs](Graph) from plain node and edge records.
//!
//! Records typically come from a JSON [GraphDocument], but the core does
//! not care whether they originate from a file, a database dump or
//! in-memory literals. Edge records come in two forms: with precomputed
//! per-metric weights, or with a base distance and a road category from
//! which the weights are derived via a [Profile]. A derived record may
//! omit the distance entirely, in which case the crow-flies distance
//! between its endpoints is used.
//!
//! Graph integrity is this module's responsibility: records it cannot
//! resolve are logged and skipped, rather than failing the whole load.

use std::fs::File;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::{earth_distance, Edge, Graph, Node, NodeId, Profile, Weights};

/// A [Node] to be added to a graph.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub latitude: f64,
    pub longitude: f64,
}

/// An [Edge] to be added to a graph, either with precomputed weights
/// (`Direct`) or with weights derived from a distance and a road category
/// (`Derived`).
///
/// In JSON, the form is recognized by the present fields: records carrying
/// `distance`, `time` and `fuel` are direct, records carrying `road_type`
/// are derived. `bidirectional: true` also inserts the mirrored edge with
/// the same weights.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EdgeRecord {
    Direct {
        from: NodeId,
        to: NodeId,
        distance: f64,
        time: f64,
        fuel: f64,
        #[serde(default)]
        bidirectional: bool,
    },
    Derived {
        from: NodeId,
        to: NodeId,
        road_type: String,
        #[serde(default)]
        distance: Option<f64>,
        #[serde(default)]
        bidirectional: bool,
    },
}

/// A full set of records describing a graph.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

/// Error conditions which may occur when loading a [GraphDocument].
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Adds all records from the provided document into a [Graph],
/// deriving edge weights through the provided [Profile] where needed.
///
/// Nodes are inserted before edges, so record order within the document
/// does not matter. Edge order does decide tie-breaks during route
/// finding and is preserved.
pub fn add_records(g: &mut Graph, profile: &Profile, document: GraphDocument) {
    let node_count = document.nodes.len();
    let edge_count = document.edges.len();

    for node in document.nodes {
        g.set_node(Node {
            id: node.id,
            lat: node.latitude,
            lon: node.longitude,
        });
    }
    for edge in document.edges {
        add_edge_record(g, profile, edge);
    }

    log::debug!(
        "loaded {} node and {} edge records ({} nodes total)",
        node_count,
        edge_count,
        g.len(),
    );
}

/// Parses a JSON [GraphDocument] from a static buffer and adds its records
/// into a [Graph] as per [add_records].
pub fn add_records_from_buffer(
    g: &mut Graph,
    profile: &Profile,
    data: &[u8],
) -> Result<(), LoadError> {
    let document = serde_json::from_slice(data)?;
    add_records(g, profile, document);
    Ok(())
}

/// Parses a JSON [GraphDocument] from a reader and adds its records
/// into a [Graph] as per [add_records].
pub fn add_records_from_io<R: io::Read>(
    g: &mut Graph,
    profile: &Profile,
    reader: R,
) -> Result<(), LoadError> {
    let document = serde_json::from_reader(io::BufReader::new(reader))?;
    add_records(g, profile, document);
    Ok(())
}

/// Parses a JSON [GraphDocument] from a file at the provided path and adds
/// its records into a [Graph] as per [add_records].
pub fn add_records_from_file<P: AsRef<Path>>(
    g: &mut Graph,
    profile: &Profile,
    path: P,
) -> Result<(), LoadError> {
    let f = File::open(path)?;
    add_records_from_io(g, profile, f)
}

fn add_edge_record(g: &mut Graph, profile: &Profile, record: EdgeRecord) {
    match record {
        EdgeRecord::Direct {
            from,
            to,
            distance,
            time,
            fuel,
            bidirectional,
        } => {
            let weights = Weights {
                distance,
                time,
                fuel,
            };
            insert(g, from, to, weights, bidirectional);
        }

        EdgeRecord::Derived {
            from,
            to,
            road_type,
            distance,
            bidirectional,
        } => {
            let distance = match distance.or_else(|| crow_flies(g, &from, &to)) {
                Some(d) => d,
                None => {
                    log::warn!(
                        "skipping edge {} -> {}: no distance and an unknown endpoint",
                        from,
                        to,
                    );
                    return;
                }
            };
            let weights = profile.derive_weights(distance, &road_type);
            insert(g, from, to, weights, bidirectional);
        }
    }
}

fn crow_flies(g: &Graph, from_id: &str, to_id: &str) -> Option<f64> {
    let from = g.get_node(from_id)?;
    let to = g.get_node(to_id)?;
    Some(earth_distance(from.lat, from.lon, to.lat, to.lon))
}

fn insert(g: &mut Graph, from: NodeId, to: NodeId, weights: Weights, bidirectional: bool) {
    if bidirectional {
        g.set_edge(
            &to,
            Edge {
                to: from.clone(),
                weights,
            },
        );
    }
    g.set_edge(&from, Edge { to, weights });
}
