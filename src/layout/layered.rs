// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ecomap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ecomap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layered placement.
//!
//! The pipeline is the classic one: break cycles, rank by longest path,
//! reduce crossings with a single downward barycenter sweep, then assign
//! cell coordinates under the spacing configuration. Every step iterates
//! ordered collections, so identical inputs always produce identical
//! placements. Nothing here can fail: unknown edge endpoints and cycles
//! degrade to "place everything anyway".

use std::collections::{BTreeMap, BTreeSet};

use super::LayoutConfig;
use crate::model::{MapNode, NodeId};
use crate::view::ViewEdge;

/// Final box geometry for one node. `x`/`y` is the top-left corner: the
/// rank/row anchor shifted so the box is centered on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    x: usize,
    y: usize,
    width: usize,
    height: usize,
}

impl Placement {
    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Rightmost column of the box, inclusive.
    pub fn right(&self) -> usize {
        self.x + self.width.saturating_sub(1)
    }

    /// Bottom row of the box, inclusive.
    pub fn bottom(&self) -> usize {
        self.y + self.height.saturating_sub(1)
    }

    pub fn center_x(&self) -> usize {
        self.x + self.width / 2
    }

    pub fn center_y(&self) -> usize {
        self.y + self.height / 2
    }
}

/// The computed layout: rank membership (left to right, top to bottom) and
/// per-node placements, plus the overall extent including margins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LayeredLayout {
    ranks: Vec<Vec<NodeId>>,
    placements: BTreeMap<NodeId, Placement>,
    width: usize,
    height: usize,
}

impl LayeredLayout {
    pub fn ranks(&self) -> &[Vec<NodeId>] {
        &self.ranks
    }

    pub fn placements(&self) -> &BTreeMap<NodeId, Placement> {
        &self.placements
    }

    pub fn placement(&self, node_id: &NodeId) -> Option<&Placement> {
        self.placements.get(node_id)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Directed adjacency restricted to endpoints that actually exist in the
/// node list. Self-loops contribute nothing to ranking.
fn known_outgoing(
    node_ids: &BTreeSet<NodeId>,
    edges: &[ViewEdge],
) -> BTreeMap<NodeId, Vec<NodeId>> {
    let mut outgoing: BTreeMap<NodeId, BTreeSet<NodeId>> = BTreeMap::new();
    for node_id in node_ids {
        outgoing.entry(node_id.clone()).or_default();
    }

    for edge in edges {
        let from = edge.from_node_id();
        let to = edge.to_node_id();
        if from == to || !node_ids.contains(from) || !node_ids.contains(to) {
            continue;
        }
        outgoing.entry(from.clone()).or_default().insert(to.clone());
    }

    outgoing
        .into_iter()
        .map(|(node_id, next)| (node_id, next.into_iter().collect()))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Active,
    Done,
}

/// Removes back edges found by a DFS over id-sorted roots and id-sorted
/// neighbors. The survivors form a DAG; which edge of a cycle is dropped is
/// arbitrary but stable for a given input.
fn drop_back_edges(outgoing: &BTreeMap<NodeId, Vec<NodeId>>) -> BTreeMap<NodeId, Vec<NodeId>> {
    fn visit(
        node_id: &NodeId,
        outgoing: &BTreeMap<NodeId, Vec<NodeId>>,
        state: &mut BTreeMap<NodeId, VisitState>,
        kept: &mut BTreeMap<NodeId, Vec<NodeId>>,
    ) {
        state.insert(node_id.clone(), VisitState::Active);
        for next_id in outgoing.get(node_id).into_iter().flatten() {
            match state.get(next_id) {
                Some(VisitState::Active) => continue,
                Some(VisitState::Done) => {
                    kept.entry(node_id.clone()).or_default().push(next_id.clone());
                }
                None => {
                    kept.entry(node_id.clone()).or_default().push(next_id.clone());
                    visit(next_id, outgoing, state, kept);
                }
            }
        }
        state.insert(node_id.clone(), VisitState::Done);
    }

    let mut state = BTreeMap::new();
    let mut kept: BTreeMap<NodeId, Vec<NodeId>> = BTreeMap::new();
    for node_id in outgoing.keys() {
        kept.entry(node_id.clone()).or_default();
    }
    for node_id in outgoing.keys() {
        if !state.contains_key(node_id) {
            visit(node_id, outgoing, &mut state, &mut kept);
        }
    }

    kept
}

/// Longest-path ranks over an acyclic adjacency, propagated along a
/// deterministic topological order.
fn rank_nodes(acyclic: &BTreeMap<NodeId, Vec<NodeId>>) -> BTreeMap<NodeId, usize> {
    let mut indegree: BTreeMap<&NodeId, usize> = acyclic.keys().map(|id| (id, 0)).collect();
    for next_ids in acyclic.values() {
        for next_id in next_ids {
            if let Some(degree) = indegree.get_mut(next_id) {
                *degree += 1;
            }
        }
    }

    let mut ready: BTreeSet<&NodeId> = indegree
        .iter()
        .filter_map(|(node_id, degree)| (*degree == 0).then_some(*node_id))
        .collect();

    let mut topo = Vec::with_capacity(acyclic.len());
    while let Some(&next) = ready.iter().next() {
        ready.remove(next);
        topo.push(next);
        for next_id in acyclic.get(next).into_iter().flatten() {
            let degree = indegree.get_mut(next_id).expect("known node");
            *degree = degree.saturating_sub(1);
            if *degree == 0 {
                ready.insert(next_id);
            }
        }
    }

    let mut ranks: BTreeMap<NodeId, usize> = acyclic.keys().map(|id| (id.clone(), 0)).collect();
    for from in topo {
        let from_rank = *ranks.get(from).expect("ranked node");
        for to in acyclic.get(from).into_iter().flatten() {
            let to_rank = ranks.get(to).copied().unwrap_or(0);
            ranks.insert(to.clone(), to_rank.max(from_rank + 1));
        }
    }

    ranks
}

/// One downward sweep: order each rank by the average position of its
/// predecessors in the rank to the left. A node with no placed predecessor
/// keeps its current index, so catalog order survives where the graph gives
/// no better signal. The sort is stable and compares averages without
/// floats.
fn barycenter_sweep(ranks: &mut [Vec<NodeId>], predecessors: &BTreeMap<NodeId, Vec<NodeId>>) {
    for rank_idx in 1..ranks.len() {
        let (left, right) = ranks.split_at_mut(rank_idx);
        let prev_positions = left[rank_idx - 1]
            .iter()
            .enumerate()
            .map(|(position, node_id)| (node_id.clone(), position))
            .collect::<BTreeMap<_, _>>();

        let current = &mut right[0];
        let keys = current
            .iter()
            .enumerate()
            .map(|(index, node_id)| {
                let (sum, count) = predecessors
                    .get(node_id)
                    .into_iter()
                    .flatten()
                    .filter_map(|pred| prev_positions.get(pred).copied())
                    .fold((0u128, 0u128), |(sum, count), position| {
                        (sum + position as u128, count + 1)
                    });
                let key = if count == 0 { (index as u128, 1) } else { (sum, count) };
                (node_id.clone(), key)
            })
            .collect::<BTreeMap<_, _>>();

        current.sort_by(|a, b| {
            let (sum_a, count_a) = keys.get(a).copied().expect("keyed node");
            let (sum_b, count_b) = keys.get(b).copied().expect("keyed node");
            (sum_a * count_b).cmp(&(sum_b * count_a))
        });
    }
}

fn node_width(node: &MapNode, config: &LayoutConfig) -> usize {
    node.width_hint().unwrap_or(config.default_width).max(3)
}

/// Computes the layered layout of `nodes` under `config`.
///
/// Pure and total: zero nodes produce an empty layout, edges referencing
/// unknown ids are ignored, and cyclic inputs still place every node.
pub fn layout_graph(nodes: &[MapNode], edges: &[ViewEdge], config: &LayoutConfig) -> LayeredLayout {
    if nodes.is_empty() {
        return LayeredLayout::default();
    }

    // First declaration wins on (out-of-contract) duplicate ids.
    let mut input_order: BTreeMap<NodeId, usize> = BTreeMap::new();
    let mut widths: BTreeMap<NodeId, usize> = BTreeMap::new();
    for (index, node) in nodes.iter().enumerate() {
        input_order.entry(node.node_id().clone()).or_insert(index);
        widths
            .entry(node.node_id().clone())
            .or_insert_with(|| node_width(node, config));
    }
    let node_ids = input_order.keys().cloned().collect::<BTreeSet<_>>();

    let outgoing = known_outgoing(&node_ids, edges);
    let acyclic = drop_back_edges(&outgoing);
    let node_ranks = rank_nodes(&acyclic);

    let mut predecessors: BTreeMap<NodeId, Vec<NodeId>> = BTreeMap::new();
    for (from, next_ids) in &acyclic {
        for to in next_ids {
            predecessors.entry(to.clone()).or_default().push(from.clone());
        }
    }

    let rank_count = node_ranks.values().copied().max().unwrap_or(0) + 1;
    let mut ranks = vec![Vec::<NodeId>::new(); rank_count];
    for (node_id, rank) in &node_ranks {
        ranks[*rank].push(node_id.clone());
    }
    for rank in ranks.iter_mut() {
        rank.sort_by_key(|node_id| *input_order.get(node_id).expect("declared node"));
    }
    barycenter_sweep(&mut ranks, &predecessors);

    let height = config.default_height;
    let rank_widths = ranks
        .iter()
        .map(|rank| {
            rank.iter()
                .map(|node_id| *widths.get(node_id).expect("sized node"))
                .max()
                .unwrap_or(config.default_width)
        })
        .collect::<Vec<_>>();
    let rank_heights = ranks
        .iter()
        .map(|rank| rank.len() * height + rank.len().saturating_sub(1) * config.node_spacing)
        .collect::<Vec<_>>();
    let max_rank_height = rank_heights.iter().copied().max().unwrap_or(0);

    let mut placements = BTreeMap::new();
    let mut column_x = config.margin_x;
    for (rank_idx, rank) in ranks.iter().enumerate() {
        let column_width = rank_widths[rank_idx];
        let mut y = config.margin_y + (max_rank_height - rank_heights[rank_idx]) / 2;
        for node_id in rank {
            let width = *widths.get(node_id).expect("sized node");
            let x = column_x + (column_width - width) / 2;
            placements.insert(node_id.clone(), Placement { x, y, width, height });
            y += height + config.node_spacing;
        }
        column_x += column_width + config.rank_spacing;
    }

    let total_width = column_x - config.rank_spacing + config.margin_x;
    let total_height = config.margin_y * 2 + max_rank_height;

    LayeredLayout {
        ranks,
        placements,
        width: total_width,
        height: total_height,
    }
}
