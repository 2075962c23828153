// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ecomap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ecomap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Draws a derived view onto a canvas using its layered placements.
//!
//! Edges between adjacent rank columns take a direct orthogonal route
//! through the shared gap. Everything else (multi-rank spans, same-rank and
//! backward edges) is routed through a numbered lane row below the diagram,
//! with all vertical travel confined to inter-column gaps so connectors
//! never cut through node boxes.

use std::collections::BTreeMap;
use std::fmt;

use super::text::{canvas_to_string_trimmed, text_len, truncate_with_ellipsis};
use super::{
    Canvas, CanvasError, ARROW_RIGHT, HEAVY_HORIZONTAL, HEAVY_VERTICAL, LINE_HORIZONTAL,
    LINE_VERTICAL,
};
use crate::layout::{LayeredLayout, Placement};
use crate::model::{NodeId, NodeRole};
use crate::view::{MapView, ViewEdge};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapRenderError {
    Canvas(CanvasError),
    MissingPlacement { node_id: NodeId },
}

impl fmt::Display for MapRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canvas(err) => write!(f, "canvas error: {err}"),
            Self::MissingPlacement { node_id } => {
                write!(f, "missing placement for node {node_id}")
            }
        }
    }
}

impl std::error::Error for MapRenderError {}

impl From<CanvasError> for MapRenderError {
    fn from(value: CanvasError) -> Self {
        Self::Canvas(value)
    }
}

/// Stroke and corner characters for one edge weight.
#[derive(Debug, Clone, Copy)]
struct Strokes {
    horizontal: char,
    vertical: char,
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
}

const PLAIN_STROKES: Strokes = Strokes {
    horizontal: LINE_HORIZONTAL,
    vertical: LINE_VERTICAL,
    top_left: '┌',
    top_right: '┐',
    bottom_left: '└',
    bottom_right: '┘',
};

const HEAVY_STROKES: Strokes = Strokes {
    horizontal: HEAVY_HORIZONTAL,
    vertical: HEAVY_VERTICAL,
    top_left: '╔',
    top_right: '╗',
    bottom_left: '╚',
    bottom_right: '╝',
};

fn strokes_for(edge: &ViewEdge) -> Strokes {
    if edge.is_emphasized() {
        HEAVY_STROKES
    } else {
        PLAIN_STROKES
    }
}

#[derive(Debug, Clone, Copy)]
enum Route {
    /// Orthogonal route through the single gap between adjacent columns.
    /// `gap_x0..=gap_x1` is the box-free column band the label may use.
    Direct {
        bend_x: usize,
        gap_x0: usize,
        gap_x1: usize,
    },
    /// Down into a numbered lane row below the diagram and back up.
    Lane {
        drop_x: usize,
        rise_x: usize,
        lane_y: usize,
    },
}

#[derive(Debug, Clone, Copy)]
struct EdgePlan {
    from: Placement,
    to: Placement,
    route: Route,
}

fn placement_of(
    layout: &LayeredLayout,
    node_id: &NodeId,
) -> Result<Placement, MapRenderError> {
    layout
        .placement(node_id)
        .copied()
        .ok_or_else(|| MapRenderError::MissingPlacement {
            node_id: node_id.clone(),
        })
}

fn plan_edges(
    view: &MapView,
    layout: &LayeredLayout,
) -> Result<(Vec<(usize, EdgePlan)>, usize), MapRenderError> {
    let mut rank_of: BTreeMap<&NodeId, usize> = BTreeMap::new();
    for (rank_idx, rank) in layout.ranks().iter().enumerate() {
        for node_id in rank {
            rank_of.insert(node_id, rank_idx);
        }
    }

    // Column extents per rank. Vertical connector segments must stay outside
    // [left, right] of every rank column, or they would cut through a wider
    // box sharing the column with the edge's endpoint.
    let rank_extents = layout
        .ranks()
        .iter()
        .map(|rank| {
            let mut left = usize::MAX;
            let mut right = 0usize;
            for node_id in rank {
                if let Some(placement) = layout.placement(node_id) {
                    left = left.min(placement.x());
                    right = right.max(placement.right());
                }
            }
            (left, right)
        })
        .collect::<Vec<_>>();

    let mut plans = Vec::with_capacity(view.edges().len());
    let mut lane_count = 0usize;

    for (edge_idx, edge) in view.edges().iter().enumerate() {
        if edge.from_node_id() == edge.to_node_id() {
            continue;
        }

        let from = placement_of(layout, edge.from_node_id())?;
        let to = placement_of(layout, edge.to_node_id())?;
        let from_rank = *rank_of
            .get(edge.from_node_id())
            .ok_or_else(|| MapRenderError::MissingPlacement {
                node_id: edge.from_node_id().clone(),
            })?;
        let to_rank = *rank_of
            .get(edge.to_node_id())
            .ok_or_else(|| MapRenderError::MissingPlacement {
                node_id: edge.to_node_id().clone(),
            })?;

        let route = if to_rank == from_rank + 1 {
            let gap_lo = rank_extents[from_rank].1 + 1;
            let gap_hi = rank_extents[to_rank].0.saturating_sub(1);
            let span = gap_hi.saturating_sub(gap_lo);
            let bend_x = if span <= 2 {
                gap_lo
            } else {
                gap_lo + 1 + (edge_idx % (span - 1))
            };
            Route::Direct {
                bend_x,
                gap_x0: gap_lo,
                gap_x1: gap_hi,
            }
        } else {
            let lane = lane_count;
            lane_count += 1;
            let drop_x =
                (rank_extents[from_rank].1 + 2 + (lane % 2)).min(layout.width().saturating_sub(1));
            let rise_x = rank_extents[to_rank].0.saturating_sub(2 + (lane % 2));
            Route::Lane {
                drop_x,
                rise_x,
                lane_y: layout.height() + lane,
            }
        };

        plans.push((edge_idx, EdgePlan { from, to, route }));
    }

    Ok((plans, lane_count))
}

fn draw_node_box(
    canvas: &mut Canvas,
    placement: &Placement,
    role: NodeRole,
    label: &str,
) -> Result<(), CanvasError> {
    canvas.draw_box(placement.x(), placement.y(), placement.right(), placement.bottom())?;

    let inner = placement.width().saturating_sub(2);
    let rows = placement.height().saturating_sub(2);
    for (row, line) in label.lines().take(rows).enumerate() {
        let text = if row == 0 && role != NodeRole::Generic {
            format!("{} {line}", role.marker())
        } else {
            line.to_owned()
        };
        let clipped = truncate_with_ellipsis(&text, inner);
        let left_pad = inner.saturating_sub(text_len(&clipped)) / 2;
        canvas.write_str(placement.x() + 1 + left_pad, placement.y() + 1 + row, &clipped)?;
    }

    Ok(())
}

fn draw_edge_strokes(
    canvas: &mut Canvas,
    plan: &EdgePlan,
    strokes: Strokes,
) -> Result<(), CanvasError> {
    let from_y = plan.from.center_y();
    let to_y = plan.to.center_y();
    let exit_x = plan.from.right() + 1;
    let entry_x = plan.to.x().saturating_sub(1);

    match plan.route {
        Route::Direct { bend_x, .. } => {
            if from_y == to_y {
                canvas.stroke_hline(exit_x, entry_x, from_y, strokes.horizontal)?;
                return Ok(());
            }

            canvas.stroke_hline(exit_x, bend_x, from_y, strokes.horizontal)?;
            canvas.stroke_vline(bend_x, from_y, to_y, strokes.vertical)?;
            canvas.stroke_hline(bend_x, entry_x, to_y, strokes.horizontal)?;

            if to_y > from_y {
                canvas.set(bend_x, from_y, strokes.top_right)?;
                canvas.set(bend_x, to_y, strokes.bottom_left)?;
            } else {
                canvas.set(bend_x, from_y, strokes.bottom_right)?;
                canvas.set(bend_x, to_y, strokes.top_left)?;
            }
        }
        Route::Lane {
            drop_x,
            rise_x,
            lane_y,
        } => {
            canvas.stroke_hline(exit_x, drop_x, from_y, strokes.horizontal)?;
            canvas.stroke_vline(drop_x, from_y, lane_y, strokes.vertical)?;
            canvas.stroke_hline(drop_x, rise_x, lane_y, strokes.horizontal)?;
            canvas.stroke_vline(rise_x, to_y, lane_y, strokes.vertical)?;
            canvas.stroke_hline(rise_x, entry_x, to_y, strokes.horizontal)?;

            canvas.set(drop_x, from_y, strokes.top_right)?;
            canvas.set(rise_x, to_y, strokes.top_left)?;
            if rise_x < drop_x {
                canvas.set(drop_x, lane_y, strokes.bottom_right)?;
                canvas.set(rise_x, lane_y, strokes.bottom_left)?;
            } else {
                canvas.set(drop_x, lane_y, strokes.bottom_left)?;
                canvas.set(rise_x, lane_y, strokes.bottom_right)?;
            }
        }
    }

    Ok(())
}

fn draw_edge_label(
    canvas: &mut Canvas,
    plan: &EdgePlan,
    label: &str,
) -> Result<(), CanvasError> {
    let (span_x0, span_x1, y) = match plan.route {
        // The label stays inside the box-free gap band, halfway down the
        // edge so fan-in/fan-out labels land on distinct rows.
        Route::Direct { gap_x0, gap_x1, .. } => {
            let mid_y = (plan.from.center_y() + plan.to.center_y()) / 2;
            (gap_x0, gap_x1, mid_y)
        }
        Route::Lane {
            drop_x,
            rise_x,
            lane_y,
        } => {
            let (lo, hi) = if drop_x <= rise_x { (drop_x, rise_x) } else { (rise_x, drop_x) };
            (lo, hi, lane_y)
        }
    };

    let span = span_x1.saturating_sub(span_x0);
    if span < 3 {
        return Ok(());
    }

    let clipped = truncate_with_ellipsis(label, span - 2);
    let text = format!(" {clipped} ");
    let x = span_x0 + (span.saturating_sub(text_len(&text))) / 2;
    canvas.write_str(x, y, &text)
}

/// Renders the view to text. An empty view renders to an empty string; the
/// shell decides what to show in that case.
pub fn render_map(view: &MapView, layout: &LayeredLayout) -> Result<String, MapRenderError> {
    if view.is_empty() || layout.is_empty() {
        return Ok(String::new());
    }

    let (plans, lane_count) = plan_edges(view, layout)?;
    let height = layout.height() + if lane_count > 0 { lane_count + 1 } else { 0 };
    let mut canvas = Canvas::new(layout.width(), height)?;

    for node in view.nodes() {
        let placement = placement_of(layout, node.node_id())?;
        draw_node_box(&mut canvas, &placement, node.role(), node.label())?;
    }

    for (edge_idx, plan) in &plans {
        let edge = &view.edges()[*edge_idx];
        draw_edge_strokes(&mut canvas, plan, strokes_for(edge))?;
    }

    for (edge_idx, plan) in &plans {
        let edge = &view.edges()[*edge_idx];
        if let Some(label) = edge.label() {
            draw_edge_label(&mut canvas, plan, label)?;
        }
    }

    for (_, plan) in &plans {
        let entry_x = plan.to.x().saturating_sub(1);
        canvas.set(entry_x, plan.to.center_y(), ARROW_RIGHT)?;
    }

    Ok(canvas_to_string_trimmed(&canvas))
}

#[cfg(test)]
mod tests {
    use super::{render_map, MapRenderError};
    use crate::layout::{layout_graph, LayoutConfig};
    use crate::model::{EdgeId, MapGraph, MapEdge, MapNode, NodeId, NodeRole};
    use crate::view::{architecture_view, derive_view, ViewOptions};

    fn config() -> LayoutConfig {
        LayoutConfig {
            node_spacing: 2,
            rank_spacing: 12,
            margin_x: 3,
            margin_y: 1,
            default_width: 14,
            default_height: 4,
        }
    }

    fn nid(value: &str) -> NodeId {
        NodeId::new(value).expect("node id")
    }

    fn two_node_graph(emphasized: bool) -> MapGraph {
        let mut edge = MapEdge::new(EdgeId::new("e").expect("edge id"), nid("src"), nid("dst"))
            .with_label("Handoff");
        if emphasized {
            edge = edge.emphasized();
        }
        MapGraph::new(
            vec![
                MapNode::new(nid("src"), "Source", NodeRole::Pillar),
                MapNode::new(nid("dst"), "Target", NodeRole::Generic),
            ],
            vec![edge],
        )
    }

    #[test]
    fn renders_boxes_edge_and_arrow() {
        let view = derive_view(&two_node_graph(false), &ViewOptions::default());
        let layout = layout_graph(view.nodes(), view.edges(), &config());
        let text = render_map(&view, &layout).expect("render");

        assert!(text.contains("Source"));
        assert!(text.contains("Target"));
        assert!(text.contains("Handoff"));
        assert!(text.contains('▶'));
        assert!(text.contains('┌'));
        // Pillar marker on the labeled node only.
        assert!(text.contains("■ Source"));
    }

    #[test]
    fn emphasized_edges_use_heavy_strokes() {
        let view = derive_view(&two_node_graph(true), &ViewOptions::default());
        let layout = layout_graph(view.nodes(), view.edges(), &config());
        let text = render_map(&view, &layout).expect("render");
        assert!(text.contains('═'));
    }

    #[test]
    fn empty_view_renders_empty_string() {
        let view = derive_view(&MapGraph::default(), &ViewOptions::default());
        let layout = layout_graph(view.nodes(), view.edges(), &config());
        assert_eq!(render_map(&view, &layout).expect("render"), "");
    }

    #[test]
    fn missing_placement_is_reported_not_panicked() {
        let view = derive_view(&two_node_graph(false), &ViewOptions::default());
        // A layout computed for a different node set.
        let layout = layout_graph(&[], &[], &config());

        let result = render_map(&view, &layout);
        assert!(matches!(result, Err(MapRenderError::MissingPlacement { .. })));
    }

    #[test]
    fn long_labels_are_clipped_with_an_ellipsis() {
        let graph = MapGraph::new(
            vec![MapNode::new_with_width(
                nid("tiny"),
                "An Unreasonably Long Node Label",
                NodeRole::Generic,
                10,
            )],
            Vec::new(),
        );
        let view = derive_view(&graph, &ViewOptions::default());
        let layout = layout_graph(view.nodes(), view.edges(), &config());
        let text = render_map(&view, &layout).expect("render");
        assert!(text.contains('…'));
    }

    #[test]
    fn connectors_never_cut_through_node_boxes() {
        let view = crate::view::ecosystem_view(&ViewOptions::default());
        let layout = layout_graph(
            view.nodes(),
            view.edges(),
            &crate::catalog::ecosystem_layout_config(true),
        );
        let text = render_map(&view, &layout).expect("render");

        let grid = text
            .split('\n')
            .map(|line| line.chars().collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let at = |x: usize, y: usize| {
            grid.get(y).and_then(|row| row.get(x)).copied().unwrap_or(' ')
        };

        // Every box corner survives edge routing intact.
        for placement in layout.placements().values() {
            assert_eq!(at(placement.x(), placement.y()), '┌');
            assert_eq!(at(placement.right(), placement.y()), '┐');
            assert_eq!(at(placement.x(), placement.bottom()), '└');
            assert_eq!(at(placement.right(), placement.bottom()), '┘');
        }
    }

    #[test]
    fn architecture_view_renders_deterministically_with_its_cycle() {
        let options = ViewOptions::default();
        let view = architecture_view(&options);
        let layout = layout_graph(
            view.nodes(),
            view.edges(),
            &crate::catalog::architecture_layout_config(true),
        );

        let first = render_map(&view, &layout).expect("render");
        let second = render_map(&view, &layout).expect("render");
        assert_eq!(first, second);
        assert!(first.contains("Agent Orchestrator"));
        assert!(first.contains('▶'));
    }
}
