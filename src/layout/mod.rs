// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ecomap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ecomap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Deterministic layered layout for the diagrams.

pub mod layered;

pub use layered::{layout_graph, LayeredLayout, Placement};

/// Spacing configuration, in character cells.
///
/// `default_width`/`default_height` size nodes without an explicit hint;
/// `node_spacing` is the minimum vertical gap inside a rank, `rank_spacing`
/// the minimum horizontal gap between rank columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    pub node_spacing: usize,
    pub rank_spacing: usize,
    pub margin_x: usize,
    pub margin_y: usize,
    pub default_width: usize,
    pub default_height: usize,
}
