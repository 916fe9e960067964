//! Core data structures: placed items, catalog reference data, scoring
//! inputs and outputs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Sentiment, Variant};
use crate::ids::{AdId, ArticleId, EditionId};
use crate::slot::SlotId;

// ---------------------------------------------------------------------------
// Placed items
// ---------------------------------------------------------------------------

/// What occupies a slot: an article shown in one variant, or an ad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum PlacementEntry {
    /// A catalog article displayed with the chosen variant.
    Article {
        /// Catalog id of the article.
        content_id: ArticleId,
        /// The variant currently displayed.
        variant: Variant,
    },
    /// A catalog advertisement.
    Ad {
        /// Catalog id of the advertisement.
        ad_id: AdId,
    },
}

impl PlacementEntry {
    /// Shorthand for an article entry.
    pub const fn article(content_id: ArticleId, variant: Variant) -> Self {
        Self::Article {
            content_id,
            variant,
        }
    }

    /// Shorthand for an ad entry.
    pub const fn ad(ad_id: AdId) -> Self {
        Self::Ad { ad_id }
    }
}

/// An entry together with the slot it currently sits in.
///
/// The placement store re-stamps `slot_id` after every mutation so it always
/// matches the item's physical position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PlacementItem {
    /// Current slot of the item.
    #[ts(as = "String")]
    pub slot_id: SlotId,
    /// The placed content.
    #[serde(flatten)]
    pub entry: PlacementEntry,
}

// ---------------------------------------------------------------------------
// Catalog reference data
// ---------------------------------------------------------------------------

/// Display text for each variant of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct VariantText {
    /// Factual headline and body.
    pub factual: String,
    /// Sensationalist headline and body.
    pub sensationalist: String,
    /// Propaganda headline and body.
    pub propaganda: String,
}

impl VariantText {
    /// Text for the given variant.
    pub fn get(&self, variant: Variant) -> &str {
        match variant {
            Variant::Factual => &self.factual,
            Variant::Sensationalist => &self.sensationalist,
            Variant::Propaganda => &self.propaganda,
        }
    }
}

/// An article available to the editor. Immutable reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ArticleCatalogEntry {
    /// Catalog id.
    pub id: ArticleId,
    /// Per-variant display text.
    pub text: VariantText,
    /// Topic tags, in any case. Matching against ads is case-insensitive.
    #[serde(default)]
    pub topic_tags: Vec<String>,
    /// Sentiment of the underlying story.
    pub sentiment: Sentiment,
    /// Where the story takes place, if anywhere in particular.
    #[serde(default)]
    pub location: Option<String>,
}

/// An advertisement available to the editor. Immutable reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AdCatalogEntry {
    /// Catalog id.
    pub id: AdId,
    /// Advertiser's company name.
    pub company: String,
    /// Short slogan.
    #[serde(default)]
    pub tagline: String,
    /// Longer description.
    #[serde(default)]
    pub description: String,
    /// Declared tags, in declaration order.
    #[serde(default)]
    pub tags: Vec<String>,
}

// ---------------------------------------------------------------------------
// Scoring inputs and outputs
// ---------------------------------------------------------------------------

/// Credibility and readership carried over from the previous edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EditionBaseline {
    /// Credibility at the end of the previous edition.
    #[ts(as = "String")]
    pub credibility: Decimal,
    /// Readership at the end of the previous edition.
    #[ts(as = "String")]
    pub readers: Decimal,
}

impl EditionBaseline {
    /// Credibility when no edition has been published yet.
    pub const DEFAULT_CREDIBILITY: i64 = 50;

    /// Readership when no edition has been published yet.
    pub const DEFAULT_READERS: i64 = 10_000;

    /// The baseline the next edition starts from after `edition`.
    pub const fn carried_from(edition: &PublishedEdition) -> Self {
        Self {
            credibility: edition.result.credibility,
            readers: edition.result.readers,
        }
    }
}

impl Default for EditionBaseline {
    fn default() -> Self {
        Self {
            credibility: Decimal::from(Self::DEFAULT_CREDIBILITY),
            readers: Decimal::from(Self::DEFAULT_READERS),
        }
    }
}

/// Decomposition of an edition's cash into its sources.
///
/// Each component is rounded on its own, so the parts need not add up to
/// [`EconomicResult::cash`] exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CashBreakdown {
    /// Row-weighted ad revenue.
    #[ts(as = "String")]
    pub ads: Decimal,
    /// Synergy bonuses from ads next to favorable articles.
    #[ts(as = "String")]
    pub bonuses: Decimal,
    /// Conflict penalties from ads next to unfavorable articles.
    #[ts(as = "String")]
    pub penalties: Decimal,
}

/// The outcome of scoring one arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EconomicResult {
    /// Net cash earned by the edition (not rounded).
    #[ts(as = "String")]
    pub cash: Decimal,
    /// Credibility after the edition, within `[0, 100]`.
    #[ts(as = "String")]
    pub credibility: Decimal,
    /// Readership after the edition, never negative.
    #[ts(as = "String")]
    pub readers: Decimal,
    /// Where the cash came from.
    pub breakdown: CashBreakdown,
    /// Readers gained (or lost) against the baseline, rounded.
    #[ts(as = "String")]
    pub reader_change: Decimal,
}

/// A published edition as handed to the archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PublishedEdition {
    /// Unique edition identifier.
    pub id: EditionId,
    /// Sequential edition number, starting at 1.
    pub number: u32,
    /// Real-world publish timestamp.
    pub published_at: DateTime<Utc>,
    /// Scoring outcome.
    pub result: EconomicResult,
    /// Placed items, lead row first, ascending index within a row.
    pub items: Vec<PlacementItem>,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::enums::RowId;

    #[test]
    fn default_baseline() {
        let baseline = EditionBaseline::default();
        assert_eq!(baseline.credibility, dec!(50));
        assert_eq!(baseline.readers, dec!(10000));
    }

    #[test]
    fn placement_item_wire_shape() {
        let item = PlacementItem {
            slot_id: SlotId::at(RowId::Row2, 1),
            entry: PlacementEntry::article(ArticleId::from(uuid::Uuid::nil()), Variant::Propaganda),
        };
        let value = serde_json::to_value(item).ok();
        let expected = serde_json::json!({
            "slot_id": "row2_1",
            "type": "article",
            "content_id": "00000000-0000-0000-0000-000000000000",
            "variant": "propaganda",
        });
        assert_eq!(value, Some(expected));
    }

    #[test]
    fn placement_item_roundtrip() {
        let item = PlacementItem {
            slot_id: SlotId::row(RowId::Row1),
            entry: PlacementEntry::ad(AdId::new()),
        };
        let json = serde_json::to_string(&item).unwrap_or_default();
        let back: Result<PlacementItem, _> = serde_json::from_str(&json);
        assert_eq!(back.ok(), Some(item));
    }

    #[test]
    fn variant_text_lookup() {
        let text = VariantText {
            factual: "Council passes budget".to_owned(),
            sensationalist: "BUDGET CHAOS".to_owned(),
            propaganda: "Council delivers again".to_owned(),
        };
        assert_eq!(text.get(Variant::Sensationalist), "BUDGET CHAOS");
    }

    #[test]
    fn ad_catalog_entry_defaults_optional_fields() {
        let json = r#"{"id":"00000000-0000-0000-0000-000000000001","company":"Acme"}"#;
        let ad: Result<AdCatalogEntry, _> = serde_json::from_str(json);
        assert!(ad.is_ok());
        let ad = ad.ok();
        assert_eq!(ad.map(|a| a.tags.len()), Some(0));
    }
}
