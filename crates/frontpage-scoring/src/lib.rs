//! Economic scoring for the Frontpage simulation.
//!
//! Turns a finished arrangement into cash, credibility, and readership
//! figures. Scoring is deterministic and side-effect free: the same
//! arrangement, catalogs, baseline, and configuration always produce the
//! same [`EconomicResult`](frontpage_types::EconomicResult).
//!
//! # Modules
//!
//! - [`config`] -- Tunable multipliers, impacts, and bounds
//! - [`tag_rules`] -- Ad target tags and pricing classes
//! - [`catalog`] -- Id-indexed article and ad lookup
//! - [`adjacency`] -- Synergy and conflict between neighboring slots
//! - [`engine`] -- The two-pass scoring engine

pub mod adjacency;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod tag_rules;

pub use adjacency::{AdjacencyEffect, AdjacencyFinding, AdjacencyKind, ResolvedSlot, analyze_row};
pub use catalog::ContentCatalog;
pub use config::{AdjacencyRules, CredibilityBounds, RowMultipliers, ScoringConfig, VariantEffects};
pub use engine::{ScoringEngine, compute_economic_result};
pub use tag_rules::{
    AdClass, AdImpact, AdImpactTable, TAG_HEALTH, TAG_OIL, TAG_WAR, classify_ad, resolve_ad_impact,
    resolve_ad_target_tag,
};
