//! Tunable scoring parameters.
//!
//! [`ScoringConfig`] bundles every constant the scoring engine uses so the
//! `scoring` section of `frontpage-config.yaml` can override them. The
//! defaults are the shipped game balance; an absent section reproduces it
//! exactly.
//!
//! Deltas are signed: a negative `credibility` delta costs credibility.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use frontpage_types::RowId;

use crate::tag_rules::{AdImpact, AdImpactTable};

/// Every tunable used by the scoring engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Visibility weight of each row.
    #[serde(default)]
    pub row_multipliers: RowMultipliers,

    /// Cash and credibility impact per ad class.
    #[serde(default)]
    pub ad_impacts: AdImpactTable,

    /// Per-variant article effects.
    #[serde(default)]
    pub variants: VariantEffects,

    /// Ad/article adjacency rules.
    #[serde(default)]
    pub adjacency: AdjacencyRules,

    /// Range credibility is clamped to after scoring.
    #[serde(default)]
    pub credibility_bounds: CredibilityBounds,
}

/// Visibility weight of each row (default: 1.5 / 1.2 / 1.0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowMultipliers {
    /// Lead row weight.
    pub row1: Decimal,
    /// Second row weight.
    pub row2: Decimal,
    /// Bottom row weight.
    pub row3: Decimal,
}

impl RowMultipliers {
    /// Weight applied to row-weighted effects in `row`.
    pub const fn for_row(&self, row: RowId) -> Decimal {
        match row {
            RowId::Row1 => self.row1,
            RowId::Row2 => self.row2,
            RowId::Row3 => self.row3,
        }
    }
}

impl Default for RowMultipliers {
    fn default() -> Self {
        Self {
            row1: Decimal::new(15, 1),
            row2: Decimal::new(12, 1),
            row3: Decimal::ONE,
        }
    }
}

impl Default for AdImpactTable {
    fn default() -> Self {
        Self {
            war: AdImpact::new(Decimal::from(2000), Decimal::from(-5)),
            pharma: AdImpact::new(Decimal::from(1500), Decimal::from(-3)),
            generic: AdImpact::new(Decimal::from(1000), Decimal::ZERO),
        }
    }
}

/// Effects of placing an article, by displayed variant.
///
/// Which deltas are multiplied by the row weight is fixed; see the field
/// docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantEffects {
    /// Factual: credibility delta, row-weighted (default: +5).
    pub factual_credibility: Decimal,
    /// Sensationalist: credibility delta, flat (default: -5).
    pub sensationalist_credibility: Decimal,
    /// Sensationalist: readers delta, row-weighted (default: +5000).
    pub sensationalist_readers: Decimal,
    /// Propaganda: cash delta, row-weighted (default: +200).
    pub propaganda_cash: Decimal,
    /// Propaganda: credibility delta, flat (default: -10).
    pub propaganda_credibility: Decimal,
    /// Propaganda: readers delta, flat (default: -2000).
    pub propaganda_readers: Decimal,
}

impl Default for VariantEffects {
    fn default() -> Self {
        Self {
            factual_credibility: Decimal::from(5),
            sensationalist_credibility: Decimal::from(-5),
            sensationalist_readers: Decimal::from(5000),
            propaganda_cash: Decimal::from(200),
            propaganda_credibility: Decimal::from(-10),
            propaganda_readers: Decimal::from(-2000),
        }
    }
}

/// Synergy and conflict parameters for adjacent ad/article pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjacencyRules {
    /// Share of the ad's weighted cash paid out as a synergy bonus
    /// (default: 0.5).
    pub synergy_ratio: Decimal,
    /// Credibility lost per conflict, flat (default: 15).
    pub conflict_credibility_penalty: Decimal,
}

impl Default for AdjacencyRules {
    fn default() -> Self {
        Self {
            synergy_ratio: Decimal::new(5, 1),
            conflict_credibility_penalty: Decimal::from(15),
        }
    }
}

/// Inclusive credibility range (default: 0 to 100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredibilityBounds {
    /// Lowest reportable credibility.
    pub min: Decimal,
    /// Highest reportable credibility.
    pub max: Decimal,
}

impl CredibilityBounds {
    /// Clamp `value` into the range. Never panics, even if `min > max`
    /// (the upper bound wins).
    pub fn clamp(&self, value: Decimal) -> Decimal {
        value.max(self.min).min(self.max)
    }
}

impl Default for CredibilityBounds {
    fn default() -> Self {
        Self {
            min: Decimal::ZERO,
            max: Decimal::ONE_HUNDRED,
        }
    }
}
