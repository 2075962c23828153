// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ecomap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ecomap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Built-in catalogs.
//!
//! Everything the application shows is constant data declared here: the two
//! diagram graphs with their spacing presets, and the textual content of the
//! canvas, flywheel, and sidebar panels. Nothing in this module is created
//! or destroyed at runtime; derived (filtered) copies live in `crate::view`.

pub mod architecture;
pub mod content;
pub mod ecosystem;

pub use architecture::{architecture_graph, architecture_layout_config};
pub use ecosystem::{ecosystem_graph, ecosystem_layout_config};
