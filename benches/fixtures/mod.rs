// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ecomap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ecomap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use ecomap::catalog::{architecture_layout_config, ecosystem_layout_config};
use ecomap::layout::LayoutConfig;
use ecomap::model::{EdgeId, MapNode, NodeId, NodeRole};
use ecomap::view::{architecture_view, ecosystem_view, MapView, ViewEdge, ViewOptions};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Architecture,
    EcosystemBase,
    EcosystemFull,
}

pub fn view(case: Case) -> MapView {
    match case {
        Case::Architecture => architecture_view(&ViewOptions::default()),
        Case::EcosystemBase => ecosystem_view(&ViewOptions {
            show_examples: false,
            ..ViewOptions::default()
        }),
        Case::EcosystemFull => ecosystem_view(&ViewOptions::default()),
    }
}

pub fn config(case: Case) -> LayoutConfig {
    match case {
        Case::Architecture => architecture_layout_config(true),
        Case::EcosystemBase | Case::EcosystemFull => ecosystem_layout_config(true),
    }
}

/// A synthetic layered graph: `ranks` columns of `per_rank` nodes, each node
/// wired to two nodes of the next column. Deterministic by construction.
pub fn synthetic_dag(ranks: usize, per_rank: usize) -> (Vec<MapNode>, Vec<ViewEdge>) {
    let node_id = |rank: usize, slot: usize| {
        NodeId::new(format!("n-{rank}-{slot}")).expect("fixture node id")
    };

    let mut nodes = Vec::with_capacity(ranks * per_rank);
    for rank in 0..ranks {
        for slot in 0..per_rank {
            nodes.push(MapNode::new(
                node_id(rank, slot),
                format!("Node {rank}/{slot}"),
                NodeRole::Generic,
            ));
        }
    }

    let mut edges = Vec::new();
    for rank in 0..ranks.saturating_sub(1) {
        for slot in 0..per_rank {
            for offset in 0..2usize {
                let to_slot = (slot + offset) % per_rank;
                let edge_id = EdgeId::new(format!("e-{rank}-{slot}-{offset}"))
                    .expect("fixture edge id");
                edges.push(ViewEdge::new(
                    edge_id,
                    node_id(rank, slot),
                    node_id(rank + 1, to_slot),
                    (offset == 0).then(|| "step".to_owned()),
                    false,
                ));
            }
        }
    }

    (nodes, edges)
}
