// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ecomap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ecomap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Closed enumeration of the icons used by canvas and section blocks.
///
/// Resolved to a glyph at render time through [`BlockIcon::glyph`]; content
/// declares the variant, never a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockIcon {
    Rocket,
    Layers,
    Refresh,
    Bot,
    Gavel,
    Database,
    Building,
    Factory,
    Megaphone,
    Shield,
    Users,
    Network,
    Wallet,
    Boxes,
    Handshake,
}

impl BlockIcon {
    pub fn glyph(self) -> char {
        match self {
            Self::Rocket => '🚀',
            Self::Layers => '▤',
            Self::Refresh => '↻',
            Self::Bot => '🤖',
            Self::Gavel => '⚖',
            Self::Database => '🗄',
            Self::Building => '🏢',
            Self::Factory => '🏭',
            Self::Megaphone => '📣',
            Self::Shield => '🛡',
            Self::Users => '👥',
            Self::Network => '🕸',
            Self::Wallet => '💰',
            Self::Boxes => '📦',
            Self::Handshake => '🤝',
        }
    }
}
