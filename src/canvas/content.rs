//! # Canvas Content
//!
//! The fixed content table for the CardEx Lean Canvas: nine sections, each
//! with a title, an accent color, a list of items, and optional labeled
//! annotations. Sections are fixed at build time; none are created,
//! mutated, or destroyed at runtime.

use ratatui::style::Color;

/// Identifier for one of the nine canvas sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Problem,
    CustomerSegments,
    UniqueValueProp,
    Solution,
    Channels,
    RevenueStreams,
    CostStructure,
    KeyMetrics,
    UnfairAdvantage,
}

impl SectionId {
    /// All section ids, in the content table's defined order.
    pub fn all() -> &'static [SectionId] {
        &[
            SectionId::Problem,
            SectionId::CustomerSegments,
            SectionId::UniqueValueProp,
            SectionId::Solution,
            SectionId::Channels,
            SectionId::RevenueStreams,
            SectionId::CostStructure,
            SectionId::KeyMetrics,
            SectionId::UnfairAdvantage,
        ]
    }

    /// Stable kebab-case identifier, used in debug output.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Problem => "problem",
            SectionId::CustomerSegments => "customer-segments",
            SectionId::UniqueValueProp => "unique-value-prop",
            SectionId::Solution => "solution",
            SectionId::Channels => "channels",
            SectionId::RevenueStreams => "revenue-streams",
            SectionId::CostStructure => "cost-structure",
            SectionId::KeyMetrics => "key-metrics",
            SectionId::UnfairAdvantage => "unfair-advantage",
        }
    }

    /// Find a section id by its kebab-case identifier (case-insensitive).
    pub fn from_str_opt(s: &str) -> Option<SectionId> {
        SectionId::all()
            .iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s))
            .copied()
    }

    /// Display title of the section.
    pub fn title(&self) -> &'static str {
        section(*self).title
    }
}

/// A labeled one-line annotation under a section's item list
/// (e.g. "Alternatives", "Target").
#[derive(Debug, Clone, Copy)]
pub struct Annotation {
    pub label: &'static str,
    pub text: &'static str,
}

/// One named division of the canvas: title, accent color, item list, and
/// optional annotations.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub id: SectionId,
    pub title: &'static str,
    pub color: Color,
    pub items: &'static [&'static str],
    pub annotations: &'static [Annotation],
}

/// Look up a section record. Total over the fixed set of ids.
pub fn section(id: SectionId) -> &'static Section {
    // SECTIONS is in `SectionId::all()` order, so position lookup is safe.
    let pos = SectionId::all()
        .iter()
        .position(|s| *s == id)
        .unwrap_or_default();
    &SECTIONS[pos]
}

// -- Canvas chrome ----------------------------------------------------------

pub const PRODUCT_NAME: &str = "CardEx";
pub const CANVAS_LABEL: &str = "Lean Canvas";
pub const VERSION_LINE: &str = "v0.1 — Feb 2026";
pub const TAGLINE: &str = "x402-powered autonomous pricing oracle for the Pokémon TCG collectibles market. Agent-to-agent micropayments. ERC-8004 verifiable identity. Cross-market intelligence.";
pub const TECH_TAGS: &[&str] = &["x402", "ERC-8004", "Base", "Vercel AI SDK"];
pub const FOOTER_NOTE: &str = "CARDEX — CONCEPT STAGE — NOT FOR DISTRIBUTION";
pub const CONCEPT_STATS: &[(&str, &str)] =
    &[("TAM", "$12B+"), ("MVP", "2 weeks"), ("Margin", "55-70%")];

// -- Section table ----------------------------------------------------------

/// The nine canvas sections, in defined order.
pub static SECTIONS: [Section; 9] = [
    Section {
        id: SectionId::Problem,
        title: "Problem",
        color: Color::Rgb(255, 107, 107),
        items: &[
            "Pokémon card pricing is fragmented across 6+ platforms with no unified real-time view",
            "Arbitrage opportunities between markets (US, EU, Japan) are invisible without manual research",
            "Grading ROI is a guessing game — collectors submit blindly at $20-50/card with no data-driven guidance",
        ],
        annotations: &[Annotation {
            label: "Alternatives",
            text: "Manual cross-platform searching, spreadsheet tracking, Discord alpha groups, gut feeling",
        }],
    },
    Section {
        id: SectionId::CustomerSegments,
        title: "Customer Segments",
        color: Color::Rgb(78, 205, 196),
        items: &[
            "Primary: Autonomous agents (portfolio bots, Discord bots, trading bots) needing structured price data",
            "Secondary: Serious Pokémon card collectors/investors ($1K+ portfolios)",
            "Tertiary: Card shop owners needing real-time competitive pricing intelligence",
        ],
        annotations: &[Annotation {
            label: "Early Adopters",
            text: "Web3-native card collectors, Farcaster card trading communities, Discord bot developers building card tools",
        }],
    },
    Section {
        id: SectionId::UniqueValueProp,
        title: "Unique Value Proposition",
        color: Color::Rgb(255, 230, 109),
        items: &[
            "The first agent-native pricing oracle for Pokémon cards — pay per query, no subscriptions, no API keys",
        ],
        annotations: &[Annotation {
            label: "High-level",
            text: "Bloomberg Terminal for Pokémon cards, powered by x402 micropayments and verifiable onchain reputation",
        }],
    },
    Section {
        id: SectionId::Solution,
        title: "Solution",
        color: Color::Rgb(168, 230, 207),
        items: &[
            "Cross-platform price aggregation engine with consensus pricing and spread analysis",
            "Real-time arbitrage detection across US, EU, and Japanese markets",
            "Vision-powered grading probability engine with expected ROI calculations",
        ],
        annotations: &[],
    },
    Section {
        id: SectionId::Channels,
        title: "Channels",
        color: Color::Rgb(221, 160, 221),
        items: &[
            "x402 API endpoints (agent-to-agent discovery)",
            "Next.js dashboard (direct human users)",
            "Farcaster MiniApp & Telegram bot",
            "Card trading Discord communities",
            "Hackathon demos (ETH Global, Encode)",
        ],
        annotations: &[],
    },
    Section {
        id: SectionId::RevenueStreams,
        title: "Revenue Streams",
        color: Color::Rgb(152, 216, 200),
        items: &[
            "x402 micropayments per API query ($0.001 - $0.01/call)",
            "Premium grading estimates ($0.01/estimate — highest margin)",
            "Bulk agent licensing (20% discount at >1K queries/day)",
            "Portfolio valuation as recurring micro-subscription",
        ],
        annotations: &[Annotation {
            label: "Target",
            text: "Month 1: $60 → Month 6: $3,000 → Month 12: $10,000+",
        }],
    },
    Section {
        id: SectionId::CostStructure,
        title: "Cost Structure",
        color: Color::Rgb(247, 220, 111),
        items: &[
            "Data acquisition via x402 outbound ($0.0002-$0.001/source/call)",
            "LLM inference — Sonnet for analysis, Haiku for routing (~$0.001/query)",
            "Vision model for grading (~$0.005/estimate)",
            "Infrastructure: Vercel + Supabase + Upstash (~$50/mo base)",
        ],
        annotations: &[Annotation {
            label: "Margin",
            text: "Gross margin target: 55-70% standard queries, 40-50% grading",
        }],
    },
    Section {
        id: SectionId::KeyMetrics,
        title: "Key Metrics",
        color: Color::Rgb(133, 193, 233),
        items: &[
            "Daily query volume (target: 500 → 25K in 6 months)",
            "Unique consuming agents (target: 3 → 50 in 6 months)",
            "ERC-8004 reputation score (target: 9,500+)",
            "Arbitrage detection accuracy (target: 70% → 85%)",
            "Price data freshness (< 15 min staleness)",
        ],
        annotations: &[],
    },
    Section {
        id: SectionId::UnfairAdvantage,
        title: "Unfair Advantage",
        color: Color::Rgb(240, 178, 122),
        items: &[
            "First-mover in x402 collectibles pricing — captures default agent routing",
            "ERC-8004 reputation compounds over time — new entrants start at zero",
            "Japanese market data integration (hardest to replicate, biggest arbitrage edge)",
            "Historical price depth becomes an irreplaceable moat",
        ],
        annotations: &[],
    },
];
