// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ecomap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ecomap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The agentic-CRA reference architecture: order intake, orchestration,
//! adjudication with a human-in-the-loop escalation cycle, and delivery.

use crate::layout::LayoutConfig;
use crate::model::{EdgeId, MapEdge, MapGraph, MapNode, NodeId, NodeRole};

fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("catalog node id")
}

fn node(id: &str, label: &str) -> MapNode {
    MapNode::new(nid(id), label, NodeRole::Generic)
}

fn wide_node(id: &str, label: &str, width: usize) -> MapNode {
    MapNode::new_with_width(nid(id), label, NodeRole::Generic, width)
}

fn edge(id: &str, from: &str, to: &str, label: &str) -> MapEdge {
    MapEdge::new(EdgeId::new(id).expect("catalog edge id"), nid(from), nid(to)).with_label(label)
}

pub fn architecture_graph() -> MapGraph {
    let nodes = vec![
        node("client", "Client"),
        wide_node("portal", "Portal / UI (TazWorks-like)", 31),
        node("orch", "Agent Orchestrator"),
        node("providers", "Data Providers\n(APIs / crawlers)"),
        wide_node("rules", "Compliance / Rules Engine\n(Adjudication)", 29),
        node("hil", "Human-in-the-Loop\n(Analyst / QA)"),
        node("audit", "Audit & Logging"),
        node("report", "Report Delivery"),
    ];

    let edges = vec![
        edge("c1", "client", "portal", "Order"),
        edge("c2", "portal", "orch", "Job"),
        edge("c3", "orch", "providers", "Queries (parallel)"),
        edge("c4", "orch", "rules", "Normalize, adjudicate"),
        edge("c5", "rules", "hil", "Escalate edge cases"),
        edge("c6", "hil", "rules", "Decisions to rules"),
        edge("c7", "rules", "audit", "Logs"),
        edge("c8", "rules", "report", "Results"),
        edge("c9", "report", "client", "Deliver"),
    ];

    MapGraph::new(nodes, edges)
}

pub fn architecture_layout_config(roomy: bool) -> LayoutConfig {
    if roomy {
        LayoutConfig {
            node_spacing: 2,
            rank_spacing: 24,
            margin_x: 4,
            margin_y: 2,
            default_width: 24,
            default_height: 4,
        }
    } else {
        LayoutConfig {
            node_spacing: 1,
            rank_spacing: 12,
            margin_x: 2,
            margin_y: 1,
            default_width: 22,
            default_height: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::architecture_graph;

    #[test]
    fn catalog_has_expected_shape() {
        let graph = architecture_graph();
        assert_eq!(graph.nodes().len(), 8);
        assert_eq!(graph.edges().len(), 9);
    }

    #[test]
    fn endpoints_exist_and_ids_are_unique() {
        let graph = architecture_graph();

        let node_ids = graph
            .nodes()
            .iter()
            .map(|node| node.node_id().clone())
            .collect::<BTreeSet<_>>();
        assert_eq!(node_ids.len(), graph.nodes().len());

        for edge in graph.edges() {
            assert!(graph.contains_node(edge.from_node_id()));
            assert!(graph.contains_node(edge.to_node_id()));
        }
    }

    #[test]
    fn contains_the_adjudication_cycle() {
        // rules -> hil -> rules: the escalation loop the layout must survive.
        let graph = architecture_graph();
        let has_escalation = graph
            .edges()
            .iter()
            .any(|edge| edge.from_node_id().as_str() == "rules" && edge.to_node_id().as_str() == "hil");
        let has_feedback = graph
            .edges()
            .iter()
            .any(|edge| edge.from_node_id().as_str() == "hil" && edge.to_node_id().as_str() == "rules");
        assert!(has_escalation && has_feedback);
    }
}
