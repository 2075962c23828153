// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ecomap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ecomap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The ecosystem map catalog: how the company builder, its pillars, the
//! shared platform, the enablers, and the illustrative ventures connect.

use crate::layout::LayoutConfig;
use crate::model::{EdgeId, MapEdge, MapGraph, MapNode, NodeId, NodeRole};

const CENTER_WIDTH: usize = 30;
const PILLAR_WIDTH: usize = 28;
const INFRA_WIDTH: usize = 30;
const ENABLER_WIDTH: usize = 31;
const EXAMPLE_WIDTH: usize = 26;
// Wide enough for the historic double name; see the node label.
const VUPLICITY_WIDTH: usize = 36;

fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("catalog node id")
}

fn eid(value: &str) -> EdgeId {
    EdgeId::new(value).expect("catalog edge id")
}

fn node(id: &str, label: &str, role: NodeRole, width: usize) -> MapNode {
    MapNode::new_with_width(nid(id), label, role, width)
}

fn edge(id: &str, from: &str, to: &str, label: &str) -> MapEdge {
    MapEdge::new(eid(id), nid(from), nid(to)).with_label(label)
}

fn economics_edge(id: &str, from: &str, to: &str, economics: &str) -> MapEdge {
    MapEdge::new(eid(id), nid(from), nid(to))
        .with_economics(economics)
        .emphasized()
}

fn base_nodes() -> Vec<MapNode> {
    vec![
        node(
            "utilize",
            "Utilize\nAI-First Company Builder",
            NodeRole::Center,
            CENTER_WIDTH,
        ),
        node(
            "turnarounds",
            "AI-First Transformations\n(Existing Companies)",
            NodeRole::Pillar,
            PILLAR_WIDTH,
        ),
        node(
            "products",
            "Digital Employees\n(Productized AI)",
            NodeRole::Pillar,
            PILLAR_WIDTH,
        ),
        node(
            "ventures",
            "VC Gallery / Incubator\n(Pellion-style)",
            NodeRole::Pillar,
            PILLAR_WIDTH,
        ),
        node(
            "rnd",
            "R&D / Novel Experiments",
            NodeRole::Pillar,
            PILLAR_WIDTH,
        ),
        node(
            "orchestrator",
            "Orchestration Platform\n(Agents, Workflows, HIL)",
            NodeRole::Infrastructure,
            INFRA_WIDTH,
        ),
        node(
            "library",
            "Agent Library & Templates\n(Re-usable Lego Parts)",
            NodeRole::Infrastructure,
            INFRA_WIDTH,
        ),
        node(
            "compliance",
            "Compliance & Governance\n(Rules, Audit, Adjudication)",
            NodeRole::Infrastructure,
            INFRA_WIDTH,
        ),
        node(
            "opensrc",
            "Open-Source & Off-the-Shelf",
            NodeRole::Enabler,
            ENABLER_WIDTH,
        ),
        node(
            "operators",
            "Operator Talent Network",
            NodeRole::Enabler,
            ENABLER_WIDTH,
        ),
        node("capital", "Capital Partners", NodeRole::Enabler, ENABLER_WIDTH),
        node(
            "data",
            "Data Assets & Case Studies",
            NodeRole::Enabler,
            ENABLER_WIDTH,
        ),
    ]
}

fn example_nodes() -> Vec<MapNode> {
    vec![
        // The double name is preserved from the source material on purpose.
        node(
            "vuplicity",
            "Vuplicity / (a.k.a. Vooplicity?)\nAgentic CRA",
            NodeRole::Example,
            VUPLICITY_WIDTH,
        ),
        node(
            "veiled",
            "Veiled Resin\n(creator-led marketing)",
            NodeRole::Example,
            EXAMPLE_WIDTH,
        ),
        node(
            "creator",
            "Creator of One\n(Multi-cam Studio)",
            NodeRole::Example,
            EXAMPLE_WIDTH,
        ),
        node(
            "croone",
            "CRO of One\n(Lead Gen + Outreach)",
            NodeRole::Example,
            EXAMPLE_WIDTH,
        ),
        node(
            "cfoone",
            "CFO of One\n(FinOps)",
            NodeRole::Example,
            EXAMPLE_WIDTH,
        ),
        node(
            "institute",
            "Institute of One\n(Research Agents)",
            NodeRole::Example,
            EXAMPLE_WIDTH,
        ),
        node(
            "sidekick",
            "Sidekick\n(Deal Broker System)",
            NodeRole::Example,
            EXAMPLE_WIDTH,
        ),
        node(
            "researchsys",
            "Deep Research System\n(24/7 trusted research)",
            NodeRole::Example,
            EXAMPLE_WIDTH,
        ),
    ]
}

fn base_edges() -> Vec<MapEdge> {
    vec![
        economics_edge("e-utilize-turnarounds", "utilize", "turnarounds", "Rev-share / Equity"),
        economics_edge("e-utilize-products", "utilize", "products", "SaaS / License"),
        economics_edge("e-utilize-ventures", "utilize", "ventures", "Equity / Carry"),
        economics_edge("e-utilize-rnd", "utilize", "rnd", "IP / Options"),
        edge("e-orch-all", "orchestrator", "utilize", "Build & Deploy"),
        edge("e-utilize-lib", "utilize", "library", "Harvest & Reuse"),
        edge("e-lib-products", "library", "products", "Template to Product"),
        edge("e-lib-turn", "library", "turnarounds", "Template to Service"),
        edge("e-compliance-all", "compliance", "turnarounds", "Rules / Audit"),
        edge("e-compliance-prod", "compliance", "products", "Policy / Guardrails"),
        edge("e-opensrc-orch", "opensrc", "orchestrator", "Integrations"),
        edge("e-operators-ventures", "operators", "ventures", "Operators"),
        edge("e-capital-ventures", "capital", "ventures", "Funding"),
        edge("e-turn-data", "turnarounds", "data", "Proof / Cases"),
        edge("e-prod-data", "products", "data", "Usage / Metrics"),
        economics_edge("e-ventures-utilize", "ventures", "utilize", "Exits / Dividends"),
        edge("e-rnd-lib", "rnd", "library", "New Capabilities"),
        edge("e-rnd-products", "rnd", "products", "Spin-outs"),
    ]
}

fn example_edges() -> Vec<MapEdge> {
    vec![
        edge("e-turn-vuplicity", "turnarounds", "vuplicity", "Use case"),
        edge("e-products-creator", "products", "creator", "Module"),
        edge("e-products-croone", "products", "croone", "Module"),
        edge("e-products-cfoone", "products", "cfoone", "Module"),
        edge("e-products-institute", "products", "institute", "Module"),
        edge("e-veiled-creator", "veiled", "creator", "Marketing Engine"),
        edge("e-products-sidekick", "products", "sidekick", "Product"),
        edge("e-rnd-research", "rnd", "researchsys", "Prototype"),
        edge("e-research-lib", "researchsys", "library", "Harvest patterns"),
        edge("e-vuplicity-lib", "vuplicity", "library", "Reusable components"),
    ]
}

/// Assembles the ecosystem graph. The example group is a static
/// inclusion/exclusion ahead of any filtering; the base catalog is always
/// present.
pub fn ecosystem_graph(include_examples: bool) -> MapGraph {
    let mut nodes = base_nodes();
    let mut edges = base_edges();
    if include_examples {
        nodes.extend(example_nodes());
        edges.extend(example_edges());
    }
    MapGraph::new(nodes, edges)
}

/// Spacing preset for the ecosystem map. Roomy mirrors the generous default
/// the deck is presented with; compact is for small terminals.
pub fn ecosystem_layout_config(roomy: bool) -> LayoutConfig {
    if roomy {
        LayoutConfig {
            node_spacing: 3,
            rank_spacing: 24,
            margin_x: 6,
            margin_y: 2,
            default_width: 30,
            default_height: 4,
        }
    } else {
        LayoutConfig {
            node_spacing: 1,
            rank_spacing: 12,
            margin_x: 3,
            margin_y: 1,
            default_width: 26,
            default_height: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::ecosystem_graph;

    #[test]
    fn full_catalog_has_expected_shape() {
        let graph = ecosystem_graph(true);
        assert_eq!(graph.nodes().len(), 20);
        assert_eq!(graph.edges().len(), 28);

        let base = ecosystem_graph(false);
        assert_eq!(base.nodes().len(), 12);
        assert_eq!(base.edges().len(), 18);
    }

    #[test]
    fn node_and_edge_ids_are_unique() {
        let graph = ecosystem_graph(true);

        let node_ids = graph
            .nodes()
            .iter()
            .map(|node| node.node_id().clone())
            .collect::<BTreeSet<_>>();
        assert_eq!(node_ids.len(), graph.nodes().len());

        let edge_ids = graph
            .edges()
            .iter()
            .map(|edge| edge.edge_id().clone())
            .collect::<BTreeSet<_>>();
        assert_eq!(edge_ids.len(), graph.edges().len());
    }

    #[test]
    fn every_edge_endpoint_is_declared() {
        let graph = ecosystem_graph(true);
        for edge in graph.edges() {
            assert!(graph.contains_node(edge.from_node_id()), "missing {}", edge.from_node_id());
            assert!(graph.contains_node(edge.to_node_id()), "missing {}", edge.to_node_id());
        }
    }

    #[test]
    fn economics_edges_are_emphasized_and_unlabeled() {
        let graph = ecosystem_graph(false);
        let economics = graph
            .edges()
            .iter()
            .filter(|edge| edge.economics().is_some())
            .collect::<Vec<_>>();

        assert_eq!(economics.len(), 5);
        for edge in economics {
            assert!(edge.is_emphasized());
            assert_eq!(edge.label(), None);
        }
    }

    #[test]
    fn historic_double_name_is_preserved() {
        let graph = ecosystem_graph(true);
        let vuplicity = graph
            .nodes()
            .iter()
            .find(|node| node.node_id().as_str() == "vuplicity")
            .expect("vuplicity node");
        assert!(vuplicity.label().contains("Vooplicity?"));
    }
}
