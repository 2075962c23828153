// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ecomap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ecomap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::{EdgeId, NodeId};

/// Visual category of a node. Presentation only: the layout and the view
/// derivation never branch on it (the example group is selected by catalog
/// membership, not by inspecting this tag).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    Center,
    Pillar,
    Infrastructure,
    Enabler,
    Example,
    Generic,
}

impl NodeRole {
    /// Marker glyph drawn ahead of the first label line and echoed in the
    /// map legend.
    pub fn marker(self) -> char {
        match self {
            Self::Center => '◆',
            Self::Pillar => '■',
            Self::Infrastructure => '▒',
            Self::Enabler => '○',
            Self::Example => '·',
            Self::Generic => ' ',
        }
    }

    pub fn legend_label(self) -> &'static str {
        match self {
            Self::Center => "Center",
            Self::Pillar => "Pillar",
            Self::Infrastructure => "Platform & Infra",
            Self::Enabler => "Enabler",
            Self::Example => "Example",
            Self::Generic => "Other",
        }
    }
}

/// A diagram node. The label may contain embedded line breaks; those become
/// separate rows inside the rendered box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapNode {
    node_id: NodeId,
    label: String,
    role: NodeRole,
    width_hint: Option<usize>,
}

impl MapNode {
    pub fn new(node_id: NodeId, label: impl Into<String>, role: NodeRole) -> Self {
        Self {
            node_id,
            label: label.into(),
            role,
            width_hint: None,
        }
    }

    pub fn new_with_width(
        node_id: NodeId,
        label: impl Into<String>,
        role: NodeRole,
        width_hint: usize,
    ) -> Self {
        Self {
            node_id,
            label: label.into(),
            role,
            width_hint: Some(width_hint),
        }
    }

    pub fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn label_lines(&self) -> std::str::Lines<'_> {
        self.label.lines()
    }

    pub fn role(&self) -> NodeRole {
        self.role
    }

    /// Explicit layout width in cells, if the catalog assigned one.
    pub fn width_hint(&self) -> Option<usize> {
        self.width_hint
    }

    /// Text the filter matches against: the label, or the id when the label
    /// is empty.
    pub fn filter_text(&self) -> &str {
        if self.label.is_empty() {
            self.node_id.as_str()
        } else {
            &self.label
        }
    }
}

/// A directed edge. `label` is the generic action annotation; `economics`
/// is the monetary annotation substituted for it when the economics overlay
/// is on. The overlay only ever swaps label text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapEdge {
    edge_id: EdgeId,
    from_node_id: NodeId,
    to_node_id: NodeId,
    label: Option<String>,
    economics: Option<String>,
    emphasized: bool,
}

impl MapEdge {
    pub fn new(edge_id: EdgeId, from_node_id: NodeId, to_node_id: NodeId) -> Self {
        Self {
            edge_id,
            from_node_id,
            to_node_id,
            label: None,
            economics: None,
            emphasized: false,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_economics(mut self, economics: impl Into<String>) -> Self {
        self.economics = Some(economics.into());
        self
    }

    pub fn emphasized(mut self) -> Self {
        self.emphasized = true;
        self
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

    pub fn economics(&self) -> Option<&str> {
        self.economics.as_deref()
    }

    pub fn is_emphasized(&self) -> bool {
        self.emphasized
    }
}

/// One self-contained diagram input: ordered nodes and edges as declared by
/// the catalog. Catalog order is meaningful — it seeds the within-rank order
/// of the layout.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MapGraph {
    nodes: Vec<MapNode>,
    edges: Vec<MapEdge>,
}

impl MapGraph {
    pub fn new(nodes: Vec<MapNode>, edges: Vec<MapEdge>) -> Self {
        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[MapNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[MapEdge] {
        &self.edges
    }

    pub fn node(&self, node_id: &NodeId) -> Option<&MapNode> {
        self.nodes.iter().find(|node| node.node_id() == node_id)
    }

    pub fn contains_node(&self, node_id: &NodeId) -> bool {
        self.node(node_id).is_some()
    }
}
