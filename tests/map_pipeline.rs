// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ecomap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ecomap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end pipeline checks through the public API: catalog → view →
//! layout → render.

use std::collections::BTreeSet;

use ecomap::catalog::{architecture_layout_config, ecosystem_layout_config};
use ecomap::layout::layout_graph;
use ecomap::render::render_map;
use ecomap::view::{architecture_view, ecosystem_view, ViewOptions};

fn options_with_filter(filter: &str) -> ViewOptions {
    ViewOptions {
        filter: filter.to_owned(),
        ..ViewOptions::default()
    }
}

#[test]
fn full_ecosystem_pipeline_is_deterministic() {
    let options = ViewOptions::default();
    let config = ecosystem_layout_config(true);

    let render = |_: ()| {
        let view = ecosystem_view(&options);
        let layout = layout_graph(view.nodes(), view.edges(), &config);
        render_map(&view, &layout).expect("render")
    };

    let first = render(());
    let second = render(());
    assert_eq!(first, second);
    assert!(first.contains("Utilize"));
    assert!(first.contains('▶'));
}

#[test]
fn layout_spacing_invariants_hold_for_both_presets() {
    for roomy in [true, false] {
        let config = ecosystem_layout_config(roomy);
        let view = ecosystem_view(&ViewOptions {
            roomy_layout: roomy,
            ..ViewOptions::default()
        });
        let layout = layout_graph(view.nodes(), view.edges(), &config);

        for rank in layout.ranks() {
            for pair in rank.windows(2) {
                let upper = layout.placement(&pair[0]).expect("placement");
                let lower = layout.placement(&pair[1]).expect("placement");
                assert!(
                    lower.y() >= upper.bottom() + 1 + config.node_spacing,
                    "node spacing violated (roomy={roomy})"
                );
            }
        }

        for pair in layout.ranks().windows(2) {
            let max_right = pair[0]
                .iter()
                .map(|id| layout.placement(id).expect("placement").right())
                .max()
                .expect("non-empty rank");
            let min_left = pair[1]
                .iter()
                .map(|id| layout.placement(id).expect("placement").x())
                .min()
                .expect("non-empty rank");
            assert!(
                min_left >= max_right + 1 + config.rank_spacing,
                "rank spacing violated (roomy={roomy})"
            );
        }
    }
}

#[test]
fn library_filter_scenario() {
    let view = ecosystem_view(&options_with_filter("library"));

    let visible = view
        .nodes()
        .iter()
        .map(|node| node.node_id().as_str().to_owned())
        .collect::<BTreeSet<_>>();

    // The agent-library/template catalog survives; nodes unrelated to the
    // term are gone.
    assert!(visible.contains("library"));
    assert!(!visible.contains("capital"));
    assert!(!visible.contains("veiled"));

    // Every node that remains connected does so through a surviving edge,
    // and every surviving edge stays inside the visible set.
    for edge in view.edges() {
        assert!(visible.contains(edge.from_node_id().as_str()));
        assert!(visible.contains(edge.to_node_id().as_str()));
    }

    // The reduced view still lays out and renders.
    let layout = layout_graph(view.nodes(), view.edges(), &ecosystem_layout_config(true));
    let text = render_map(&view, &layout).expect("render");
    assert!(text.contains("Agent Library"));
}

#[test]
fn zero_input_renders_nothing_without_error() {
    let view = ecosystem_view(&options_with_filter("matches-absolutely-nothing"));
    assert!(view.is_empty());

    let layout = layout_graph(view.nodes(), view.edges(), &ecosystem_layout_config(true));
    assert!(layout.is_empty());

    let text = render_map(&view, &layout).expect("render");
    assert!(text.is_empty());
}

#[test]
fn architecture_pipeline_renders_its_cycle() {
    let view = architecture_view(&ViewOptions::default());
    let layout = layout_graph(view.nodes(), view.edges(), &architecture_layout_config(true));

    assert_eq!(layout.placements().len(), 8);

    let text = render_map(&view, &layout).expect("render");
    assert!(text.contains("Agent Orchestrator"));
    assert!(text.contains("Human-in-the-Loop"));
}

#[test]
fn example_toggle_round_trip_preserves_the_catalog() {
    let before = ecosystem_view(&ViewOptions::default());
    let _hidden = ecosystem_view(&ViewOptions {
        show_examples: false,
        ..ViewOptions::default()
    });
    let after = ecosystem_view(&ViewOptions::default());

    assert_eq!(before.nodes().len(), after.nodes().len());
    assert_eq!(before.edges().len(), after.edges().len());
}
