// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ecomap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ecomap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core value types: typed identifiers, graph nodes/edges, and the closed
//! icon enumeration used by the static content blocks.

pub mod graph;
pub mod icons;
pub mod ids;

pub use graph::{MapEdge, MapGraph, MapNode, NodeRole};
pub use icons::BlockIcon;
pub use ids::{EdgeId, Id, IdError, NodeId};
