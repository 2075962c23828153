// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Ecomap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Ecomap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Static textual content for the non-diagram panels: the Canvas++ blocks,
//! the flywheel steps, and the sidebar copy. Pure data, no derivation.

use crate::model::BlockIcon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasBlock {
    pub title: &'static str,
    pub icon: BlockIcon,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlywheelStep {
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteSection {
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

pub const CANVAS_BLOCKS: &[CanvasBlock] = &[
    CanvasBlock {
        title: "Key Partners",
        icon: BlockIcon::Users,
        items: &[
            "Operator talent",
            "Capital partners",
            "Compliance advisors",
            "Open-source communities",
            "Channel partners",
        ],
    },
    CanvasBlock {
        title: "Key Activities",
        icon: BlockIcon::Factory,
        items: &[
            "Company building",
            "Agent orchestration",
            "Compliance automation",
            "Go-to-market (CRO of One)",
            "Content ops (Creator of One)",
            "R&D prototypes",
            "Incubation / coaching",
        ],
    },
    CanvasBlock {
        title: "Key Resources",
        icon: BlockIcon::Database,
        items: &[
            "Agent library",
            "Orchestration platform",
            "Compliance rulebase",
            "Case studies & playbooks",
            "Data assets",
            "Operator network",
        ],
    },
    CanvasBlock {
        title: "Value Propositions",
        icon: BlockIcon::Rocket,
        items: &[
            "AI-first retooling with rev-share alignment",
            "Composable digital employees (plug-and-play)",
            "Faster time-to-value via templates",
            "Audit-ready compliance & governance",
            "Marketing flywheel built-in",
        ],
    },
    CanvasBlock {
        title: "Customer Segments",
        icon: BlockIcon::Building,
        items: &[
            "Existing SMBs/enterprises needing retool",
            "Newco operators",
            "Studios/agencies",
            "Regulated industries (CRAs, finance, healthcare)",
        ],
    },
    CanvasBlock {
        title: "Channels",
        icon: BlockIcon::Megaphone,
        items: &[
            "Direct consultative sales",
            "VC Gallery",
            "Operator network",
            "Content distribution from Creator of One",
        ],
    },
    CanvasBlock {
        title: "Customer Relationships",
        icon: BlockIcon::Handshake,
        items: &[
            "Rev-share + equity",
            "Long-term product subscriptions",
            "Success-fee pilots",
            "Operator coaching",
        ],
    },
    CanvasBlock {
        title: "Cost Structure",
        icon: BlockIcon::Wallet,
        items: &[
            "Core team & operators",
            "Compute & infra",
            "Compliance & legal",
            "R&D / incubation",
            "Sales & marketing",
        ],
    },
    CanvasBlock {
        title: "Revenue Streams",
        icon: BlockIcon::Wallet,
        items: &[
            "Rev-share on turnarounds",
            "Equity/carry from incubations",
            "SaaS/licensing (digital employees)",
            "Implementation services",
            "Training & certification",
            "Data/benchmarking products",
        ],
    },
];

pub const CANVAS_EXTENSIONS: &[CanvasBlock] = &[
    CanvasBlock {
        title: "Agent Library & Templates",
        icon: BlockIcon::Boxes,
        items: &["Reusable workflows", "Verticalized kits", "Brand/skin quickly"],
    },
    CanvasBlock {
        title: "Orchestration Platform",
        icon: BlockIcon::Layers,
        items: &["Parallel agents", "HIL controls", "Observability"],
    },
    CanvasBlock {
        title: "Compliance & Governance",
        icon: BlockIcon::Gavel,
        items: &["Policy/Reg rules", "Adjudication", "Audit trails"],
    },
    CanvasBlock {
        title: "Venture Studio Engine",
        icon: BlockIcon::Rocket,
        items: &["Deal triage", "Operator matching", "Milestone gating"],
    },
    CanvasBlock {
        title: "Value Capture",
        icon: BlockIcon::Wallet,
        items: &["Rev-share", "Equity/carry", "Licensing", "Success fees"],
    },
];

pub const CANVAS_NARRATIVE: &[&str] = &[
    "Build with the orchestration platform using OSS and in-house templates.",
    "Deploy into turnarounds or newcos with compliance wired from day one.",
    "Prove value; capture rev-share/SaaS and produce public case studies.",
    "Harvest working patterns into the agent library to speed future builds.",
    "Compound via VC Gallery (operators + capital), new launches, equity.",
    "Amplify through Creator of One; CRO of One scales pipelines.",
];

pub const FLYWHEEL_STEPS: &[FlywheelStep] = &[
    FlywheelStep {
        title: "Acquire",
        text: "Deal flow (cos to retool) + operators + ideas",
    },
    FlywheelStep {
        title: "Assemble",
        text: "Compose agents from library; integrate OSS; wire compliance",
    },
    FlywheelStep {
        title: "Activate",
        text: "Launch pilots with success-fee milestones",
    },
    FlywheelStep {
        title: "Amplify",
        text: "Creator of One drives content, demand, case studies",
    },
    FlywheelStep {
        title: "Archive",
        text: "Harvest working patterns to library as templates",
    },
    FlywheelStep {
        title: "Accelerate",
        text: "Templates shorten next build; scale via CRO of One",
    },
];

pub const FLYWHEEL_ECONOMICS_NOTE: &str = "Economics overlay: Acquire (services), Activate \
(success fees), Amplify (SaaS + upsell), Archive (IP), Accelerate (velocity), more deal flow.";

pub const ECONOMIC_DRIVERS: &[&str] = &[
    "Rev-share",
    "Equity / Carry",
    "SaaS Licensing",
    "Implementation",
    "Success Fees",
    "Training",
    "Data Products",
];

pub const MAP_NOTES: &[NoteSection] = &[
    NoteSection {
        title: "How it works",
        lines: &[
            "The center coordinates four pillars (Transformations, Products,",
            "Ventures, R&D) on a shared platform (orchestration, library,",
            "compliance). Enablers add leverage (OSS, operators, capital,",
            "data). Edges show direction of work/value; enable economics to",
            "see capture points.",
        ],
    },
    NoteSection {
        title: "Value flow",
        lines: &[
            "Build on the platform, deploy into turnarounds/newcos with",
            "compliance, prove value and capture rev-share/SaaS/equity,",
            "harvest working patterns into the library, faster next build.",
        ],
    },
    NoteSection {
        title: "Compounding loops",
        lines: &[
            "Templates: each win adds reusable modules.",
            "Compliance: HIL turns edge cases into rules; audit builds trust.",
            "GTM: content and CRO motions grow demand; Sidekick brokers deals.",
        ],
    },
    NoteSection {
        title: "Divisions and strategy",
        lines: &[
            "R&D: research to build brand and capabilities.",
            "Prod: digital employees, full companies, off-the-shelf products.",
            "MSP: ongoing technical support; consultants at the edge.",
            "Strategies: AI-first newcos; update outdated firms; partner up.",
        ],
    },
];

pub const KEY_LOOPS: &[&str] = &[
    "Pattern harvesting: recurring adjudication patterns become rules.",
    "Human-in-the-loop: escalations label edge cases for updates.",
    "Compliance pack: rulesets per jurisdiction, audit-ready logs.",
    "Latency cuts: parallel provider calls, retries, fallbacks.",
];

pub const KEY_LOOPS_NOTE: &str = "Outputs: compliant reports, audit trails, template components \
added to the library, and case studies feeding the flywheel.";

#[cfg(test)]
mod tests {
    use super::{CANVAS_BLOCKS, CANVAS_EXTENSIONS, FLYWHEEL_STEPS, MAP_NOTES};

    #[test]
    fn canvas_has_nine_blocks_and_five_extensions() {
        assert_eq!(CANVAS_BLOCKS.len(), 9);
        assert_eq!(CANVAS_EXTENSIONS.len(), 5);
        for block in CANVAS_BLOCKS.iter().chain(CANVAS_EXTENSIONS) {
            assert!(!block.title.is_empty());
            assert!(!block.items.is_empty());
        }
    }

    #[test]
    fn flywheel_has_six_steps() {
        assert_eq!(FLYWHEEL_STEPS.len(), 6);
    }

    #[test]
    fn map_notes_are_non_empty() {
        assert_eq!(MAP_NOTES.len(), 4);
        for section in MAP_NOTES {
            assert!(!section.lines.is_empty());
        }
    }
}
