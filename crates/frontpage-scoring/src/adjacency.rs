//! Ad/article adjacency within a row.
//!
//! Only directly neighboring slots of the same row interact. For every
//! neighboring pair made of one ad and one article (either order), the ad's
//! target tag is resolved and must appear among the article's topic tags.
//! A qualifying pair is then checked against two independent rules:
//!
//! - **Synergy**: the article is shown as propaganda, or its sentiment is
//!   positive or supportive. Pays out a share of the ad's weighted cash.
//! - **Conflict**: the article is shown as factual, or its sentiment is
//!   negative or critical. Forfeits the ad's weighted cash and costs a flat
//!   credibility penalty.
//!
//! Both rules are checked for every pair, so one pair can trigger both.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use frontpage_types::{AdCatalogEntry, ArticleCatalogEntry, RowId, SlotId, Variant};

use crate::config::AdjacencyRules;
use crate::tag_rules::resolve_ad_target_tag;

/// A slot's occupant joined with its catalog data.
#[derive(Debug, Clone, Copy)]
pub enum ResolvedSlot<'a> {
    /// An article and the variant it is displayed with.
    Article {
        /// Catalog entry.
        article: &'a ArticleCatalogEntry,
        /// Displayed variant.
        variant: Variant,
    },
    /// An advertisement.
    Ad {
        /// Catalog entry.
        ad: &'a AdCatalogEntry,
    },
}

/// Which adjacency rule fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjacencyKind {
    /// Favorable framing next to a matching ad.
    Synergy,
    /// Unfavorable framing next to a matching ad.
    Conflict,
}

/// One rule firing on one pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacencyFinding {
    /// The rule that fired.
    pub kind: AdjacencyKind,
    /// Slot of the ad.
    pub ad_slot: SlotId,
    /// Slot of the article.
    pub article_slot: SlotId,
    /// The topic tag that matched.
    pub tag: String,
    /// Cash gained (synergy, positive) or lost (conflict, negative).
    pub cash: Decimal,
}

/// Accumulated adjacency effects for one or more rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyEffect {
    /// Net cash change.
    pub cash: Decimal,
    /// Sum of synergy bonuses.
    pub bonus: Decimal,
    /// Sum of conflict penalties (positive amount).
    pub penalty: Decimal,
    /// Net credibility change.
    pub credibility: Decimal,
    /// Every rule that fired, in row order.
    pub findings: Vec<AdjacencyFinding>,
}

impl AdjacencyEffect {
    /// Fold another row's effect into this one.
    pub fn merge(&mut self, other: Self) {
        self.cash = self.cash.saturating_add(other.cash);
        self.bonus = self.bonus.saturating_add(other.bonus);
        self.penalty = self.penalty.saturating_add(other.penalty);
        self.credibility = self.credibility.saturating_add(other.credibility);
        self.findings.extend(other.findings);
    }
}

/// Evaluate every neighboring ad/article pair of one row.
///
/// `contributions` holds each ad's row-weighted cash from the base pass,
/// keyed by canonical slot id. An ad with no recorded contribution counts
/// as zero.
pub fn analyze_row(
    row: RowId,
    slots: &[Option<ResolvedSlot<'_>>],
    contributions: &BTreeMap<SlotId, Decimal>,
    rules: &AdjacencyRules,
) -> AdjacencyEffect {
    let mut effect = AdjacencyEffect::default();

    for (left_index, pair) in slots.windows(2).enumerate() {
        let [left, right] = pair else {
            continue;
        };
        let right_index = left_index.saturating_add(1);

        let (ad, ad_index, article, variant, article_index) = match (left, right) {
            (Some(ResolvedSlot::Ad { ad }), Some(ResolvedSlot::Article { article, variant })) => {
                (*ad, left_index, *article, *variant, right_index)
            }
            (Some(ResolvedSlot::Article { article, variant }), Some(ResolvedSlot::Ad { ad })) => {
                (*ad, right_index, *article, *variant, left_index)
            }
            _ => continue,
        };

        let Some(tag) = resolve_ad_target_tag(ad) else {
            continue;
        };
        if !article.topic_tags.iter().any(|t| t.to_uppercase() == tag) {
            continue;
        }

        let ad_slot = SlotId::canonical(row, ad_index);
        let article_slot = SlotId::canonical(row, article_index);
        let contribution = contributions.get(&ad_slot).copied().unwrap_or(Decimal::ZERO);

        if variant == Variant::Propaganda || article.sentiment.is_favorable() {
            let bonus = contribution.saturating_mul(rules.synergy_ratio);
            effect.cash = effect.cash.saturating_add(bonus);
            effect.bonus = effect.bonus.saturating_add(bonus);
            effect.findings.push(AdjacencyFinding {
                kind: AdjacencyKind::Synergy,
                ad_slot,
                article_slot,
                tag: tag.clone(),
                cash: bonus,
            });
        }

        if variant == Variant::Factual || article.sentiment.is_unfavorable() {
            effect.cash = effect.cash.saturating_sub(contribution);
            effect.penalty = effect.penalty.saturating_add(contribution);
            effect.credibility = effect
                .credibility
                .saturating_sub(rules.conflict_credibility_penalty);
            effect.findings.push(AdjacencyFinding {
                kind: AdjacencyKind::Conflict,
                ad_slot,
                article_slot,
                tag,
                cash: contribution.saturating_mul(Decimal::NEGATIVE_ONE),
            });
        }
    }

    effect
}
