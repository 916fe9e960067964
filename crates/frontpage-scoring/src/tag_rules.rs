//! Advertisement classification.
//!
//! Two independent classifiers look at an ad's company name and declared
//! tags:
//!
//! - [`resolve_ad_target_tag`] decides which article topic the ad cares
//!   about (used for adjacency).
//! - [`resolve_ad_impact`] decides how much the ad pays and what it costs
//!   in credibility (used for the base pass).
//!
//! Each uses its own pattern set, so they can disagree: a company called
//! "Northern Defense" targets `WAR` stories but pays the generic rate.
//!
//! Name patterns match the start of any word of the company name,
//! case-insensitively: "Petrolux Oil" matches `petro` and `oil`, while
//! "Sunny Farms" matches nothing.
//!
//! Declared tags are compared uppercased and otherwise verbatim, the same
//! way article topic tags are.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use frontpage_types::AdCatalogEntry;

// ---------------------------------------------------------------------------
// Target tags
// ---------------------------------------------------------------------------

/// Target tag for arms and defense advertisers.
pub const TAG_WAR: &str = "WAR";

/// Target tag for pharmaceutical advertisers.
pub const TAG_HEALTH: &str = "HEALTH";

/// Target tag for oil advertisers.
pub const TAG_OIL: &str = "OIL";

const WAR_TARGET_NAMES: &[&str] = &["arms", "armament", "defense", "defence", "military", "weapon"];
const HEALTH_TARGET_NAMES: &[&str] = &["pharma", "medic"];
const OIL_TARGET_NAMES: &[&str] = &["oil", "petro"];

/// The article topic an ad should be matched against, uppercased.
///
/// Precedence, first match wins:
/// 1. war-like name or a `WAR` tag: `"WAR"`
/// 2. pharmaceutical name: `"HEALTH"`
/// 3. oil name or an `OIL` tag: `"OIL"`
/// 4. the first declared tag, uppercased
///
/// Returns `None` if nothing matches and the ad declares no tags.
/// A blank first tag is returned as is and matches no ordinary topic.
pub fn resolve_ad_target_tag(ad: &AdCatalogEntry) -> Option<String> {
    if name_matches(&ad.company, WAR_TARGET_NAMES) || has_tag(ad, TAG_WAR) {
        return Some(TAG_WAR.to_owned());
    }
    if name_matches(&ad.company, HEALTH_TARGET_NAMES) {
        return Some(TAG_HEALTH.to_owned());
    }
    if name_matches(&ad.company, OIL_TARGET_NAMES) || has_tag(ad, TAG_OIL) {
        return Some(TAG_OIL.to_owned());
    }
    ad.tags.first().map(|tag| tag.to_uppercase())
}

// ---------------------------------------------------------------------------
// Impact
// ---------------------------------------------------------------------------

const WAR_IMPACT_NAMES: &[&str] = &["arms", "armament", "military", "weapon"];
const PHARMA_IMPACT_NAMES: &[&str] = &["pharma"];

/// Pricing class of an advertiser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdClass {
    /// Arms dealers: top rate, costs credibility.
    War,
    /// Drug makers: high rate, costs some credibility.
    Pharma,
    /// Everyone else.
    Generic,
}

/// What one ad is worth before row weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdImpact {
    /// Cash paid, multiplied by the row weight when scored.
    pub cash_delta: Decimal,
    /// Credibility change, applied flat.
    pub credibility_delta: Decimal,
}

impl AdImpact {
    /// Create an impact pair.
    pub const fn new(cash_delta: Decimal, credibility_delta: Decimal) -> Self {
        Self {
            cash_delta,
            credibility_delta,
        }
    }
}

/// Impact per [`AdClass`]. Defaults live with the rest of the scoring
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdImpactTable {
    /// Impact of a war-class ad (default: 2000 cash, -5 credibility).
    pub war: AdImpact,
    /// Impact of a pharma-class ad (default: 1500 cash, -3 credibility).
    pub pharma: AdImpact,
    /// Impact of any other ad (default: 1000 cash, no credibility change).
    pub generic: AdImpact,
}

impl AdImpactTable {
    /// Impact for a pricing class.
    pub const fn for_class(&self, class: AdClass) -> AdImpact {
        match class {
            AdClass::War => self.war,
            AdClass::Pharma => self.pharma,
            AdClass::Generic => self.generic,
        }
    }
}

/// Pricing class of `ad`, from its company name only.
pub fn classify_ad(ad: &AdCatalogEntry) -> AdClass {
    if name_matches(&ad.company, WAR_IMPACT_NAMES) {
        AdClass::War
    } else if name_matches(&ad.company, PHARMA_IMPACT_NAMES) {
        AdClass::Pharma
    } else {
        AdClass::Generic
    }
}

/// Cash and credibility impact of `ad` under `table`.
pub fn resolve_ad_impact(ad: &AdCatalogEntry, table: &AdImpactTable) -> AdImpact {
    table.for_class(classify_ad(ad))
}

// ---------------------------------------------------------------------------
// Matching helpers
// ---------------------------------------------------------------------------

fn name_matches(name: &str, patterns: &[&str]) -> bool {
    name.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| patterns.iter().any(|p| word.starts_with(*p)))
}

fn has_tag(ad: &AdCatalogEntry, tag: &str) -> bool {
    ad.tags.iter().any(|t| t.to_uppercase() == tag)
}
