// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ecomap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ecomap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use ecomap::layout::{layout_graph, LayoutConfig};
use ecomap::render::render_map;

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `map.layout`, `map.render`
// - Case IDs must remain stable across refactors so results stay comparable
//   over time (e.g. `architecture`, `ecosystem_full`, `synthetic_8x4`).
fn benches_layout(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("map.layout");

        for (case_id, view, config) in [
            (
                "architecture",
                fixtures::view(fixtures::Case::Architecture),
                fixtures::config(fixtures::Case::Architecture),
            ),
            (
                "ecosystem_base",
                fixtures::view(fixtures::Case::EcosystemBase),
                fixtures::config(fixtures::Case::EcosystemBase),
            ),
            (
                "ecosystem_full",
                fixtures::view(fixtures::Case::EcosystemFull),
                fixtures::config(fixtures::Case::EcosystemFull),
            ),
        ] {
            group.throughput(Throughput::Elements(view.nodes().len() as u64));
            group.bench_function(case_id, move |b| {
                b.iter(|| {
                    let layout =
                        layout_graph(black_box(view.nodes()), black_box(view.edges()), &config);
                    black_box(layout.ranks().len().wrapping_add(layout.placements().len()))
                })
            });
        }

        {
            let (nodes, edges) = fixtures::synthetic_dag(8, 4);
            let config = LayoutConfig {
                node_spacing: 2,
                rank_spacing: 12,
                margin_x: 4,
                margin_y: 2,
                default_width: 14,
                default_height: 4,
            };
            group.throughput(Throughput::Elements(nodes.len() as u64));
            group.bench_function("synthetic_8x4", move |b| {
                b.iter(|| {
                    let layout = layout_graph(black_box(&nodes), black_box(&edges), &config);
                    black_box(layout.placements().len())
                })
            });
        }

        group.finish();
    }

    {
        let mut group = c.benchmark_group("map.render");

        for (case_id, view, config) in [
            (
                "architecture",
                fixtures::view(fixtures::Case::Architecture),
                fixtures::config(fixtures::Case::Architecture),
            ),
            (
                "ecosystem_full",
                fixtures::view(fixtures::Case::EcosystemFull),
                fixtures::config(fixtures::Case::EcosystemFull),
            ),
        ] {
            let layout = layout_graph(view.nodes(), view.edges(), &config);
            group.throughput(Throughput::Elements(view.edges().len() as u64));
            group.bench_function(case_id, move |b| {
                b.iter(|| {
                    let text = render_map(black_box(&view), black_box(&layout)).expect("render");
                    black_box(text.len())
                })
            });
        }

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_layout
}
criterion_main!(benches);
