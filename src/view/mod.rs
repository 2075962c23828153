// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ecomap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ecomap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! View derivation.
//!
//! `derive_view` is the only way diagram data reaches the layout: it takes a
//! catalog graph and an immutable options snapshot and produces the reduced
//! node/edge lists for one render pass. Derivation is non-destructive; the
//! catalogs are never mutated.

use std::collections::BTreeSet;

use crate::catalog::{architecture_graph, ecosystem_graph};
use crate::model::{EdgeId, MapGraph, MapNode, NodeId};

/// Immutable UI-state snapshot. Event handlers build a new snapshot and
/// re-derive; nothing holds a mutable reference across a render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    pub filter: String,
    pub show_examples: bool,
    pub show_economics: bool,
    pub roomy_layout: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            filter: String::new(),
            show_examples: true,
            show_economics: true,
            roomy_layout: true,
        }
    }
}

impl ViewOptions {
    /// The query actually matched against: trimmed and lowercased once.
    fn normalized_filter(&self) -> String {
        self.filter.trim().to_lowercase()
    }
}

/// An edge as it should be drawn: endpoints resolved against the visible
/// node set and the display label already chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEdge {
    edge_id: EdgeId,
    from_node_id: NodeId,
    to_node_id: NodeId,
    label: Option<String>,
    emphasized: bool,
}

impl ViewEdge {
    pub fn new(
        edge_id: EdgeId,
        from_node_id: NodeId,
        to_node_id: NodeId,
        label: Option<String>,
        emphasized: bool,
    ) -> Self {
        Self {
            edge_id,
            from_node_id,
            to_node_id,
            label,
            emphasized,
        }
    }

    pub fn edge_id(&self) -> &EdgeId {
        &self.edge_id
    }

    pub fn from_node_id(&self) -> &NodeId {
        &self.from_node_id
    }

    pub fn to_node_id(&self) -> &NodeId {
        &self.to_node_id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_emphasized(&self) -> bool {
        self.emphasized
    }
}

/// The derived view for one render pass. Replaced wholesale whenever any
/// input changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MapView {
    nodes: Vec<MapNode>,
    edges: Vec<ViewEdge>,
}

impl MapView {
    pub fn nodes(&self) -> &[MapNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[ViewEdge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn node_matches(node: &MapNode, query: &str) -> bool {
    node.filter_text().to_lowercase().contains(query)
}

fn display_label(
    label: Option<&str>,
    economics: Option<&str>,
    show_economics: bool,
) -> Option<String> {
    let chosen = if show_economics {
        economics.or(label)
    } else {
        label
    };
    chosen.map(str::to_owned)
}

/// Pure derivation: filter nodes by the query, keep only edges whose
/// endpoints both survive, and substitute economics labels when the overlay
/// is on. An edge referencing a node the graph never declared is dropped
/// here too, regardless of filter text.
pub fn derive_view(graph: &MapGraph, options: &ViewOptions) -> MapView {
    let query = options.normalized_filter();

    let nodes = graph
        .nodes()
        .iter()
        .filter(|node| query.is_empty() || node_matches(node, &query))
        .cloned()
        .collect::<Vec<_>>();

    let visible = nodes
        .iter()
        .map(|node| node.node_id().clone())
        .collect::<BTreeSet<_>>();

    let edges = graph
        .edges()
        .iter()
        .filter(|edge| {
            visible.contains(edge.from_node_id()) && visible.contains(edge.to_node_id())
        })
        .map(|edge| {
            ViewEdge::new(
                edge.edge_id().clone(),
                edge.from_node_id().clone(),
                edge.to_node_id().clone(),
                display_label(edge.label(), edge.economics(), options.show_economics),
                edge.is_emphasized(),
            )
        })
        .collect::<Vec<_>>();

    MapView { nodes, edges }
}

/// The ecosystem map view: example group included per the toggle, then
/// filtered.
pub fn ecosystem_view(options: &ViewOptions) -> MapView {
    derive_view(&ecosystem_graph(options.show_examples), options)
}

/// The reference-architecture view. The filter box belongs to the ecosystem
/// map; this diagram always shows its full catalog.
pub fn architecture_view(options: &ViewOptions) -> MapView {
    let unfiltered = ViewOptions {
        filter: String::new(),
        ..options.clone()
    };
    derive_view(&architecture_graph(), &unfiltered)
}
