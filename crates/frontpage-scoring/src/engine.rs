//! The economic scoring engine.
//!
//! Scoring is a pure function of the layout, the catalogs, the baseline,
//! and the configuration. It runs as a fixed sequence:
//!
//! 1. Start from the baseline credibility and readers, with no cash.
//! 2. **Base pass**: rows top to bottom, slots left to right. Ads pay their
//!    impact times the row weight (credibility impact stays flat) and the
//!    weighted cash is recorded per slot. Articles apply their variant's
//!    effects.
//! 3. **Adjacency pass**: each row independently, reading the weighted ad
//!    cash recorded in step 2 only.
//! 4. Clamp credibility to its bounds and readers to zero or more.
//! 5. Reader change is measured after clamping.
//! 6. Breakdown parts and reader change are rounded half-up; cash,
//!    credibility and readers are reported unrounded.
//!
//! Slots whose id is missing from the catalog count as empty.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

use frontpage_layout::PlacementStore;
use frontpage_types::{CashBreakdown, EconomicResult, EditionBaseline, PlacementEntry, RowId, SlotId, Variant};

use crate::adjacency::{AdjacencyEffect, ResolvedSlot, analyze_row};
use crate::catalog::ContentCatalog;
use crate::config::ScoringConfig;
use crate::tag_rules::resolve_ad_impact;

/// Scores arrangements under one configuration.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

/// Running totals of the base pass.
#[derive(Debug, Default)]
struct BaseTotals {
    cash: Decimal,
    ads_cash: Decimal,
    credibility: Decimal,
    readers: Decimal,
    contributions: BTreeMap<SlotId, Decimal>,
}

impl ScoringEngine {
    /// Create an engine with the given configuration.
    pub const fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Score an arrangement.
    pub fn score(
        &self,
        store: &PlacementStore,
        catalog: &ContentCatalog,
        baseline: EditionBaseline,
    ) -> EconomicResult {
        let rows: Vec<(RowId, Vec<Option<ResolvedSlot<'_>>>)> = RowId::ALL
            .into_iter()
            .map(|row| (row, resolve_row(store, row, catalog)))
            .collect();

        let mut base = BaseTotals {
            credibility: baseline.credibility,
            readers: baseline.readers,
            ..BaseTotals::default()
        };
        for (row, slots) in &rows {
            self.base_pass(*row, slots, &mut base);
        }
        debug!(
            cash = %base.cash,
            ads_cash = %base.ads_cash,
            credibility = %base.credibility,
            readers = %base.readers,
            "Base pass complete"
        );

        let mut adjacency = AdjacencyEffect::default();
        for (row, slots) in &rows {
            adjacency.merge(analyze_row(
                *row,
                slots,
                &base.contributions,
                &self.config.adjacency,
            ));
        }
        for finding in &adjacency.findings {
            debug!(
                kind = ?finding.kind,
                ad_slot = %finding.ad_slot,
                article_slot = %finding.article_slot,
                tag = finding.tag,
                cash = %finding.cash,
                "Adjacency rule fired"
            );
        }

        let cash = base.cash.saturating_add(adjacency.cash);
        let credibility = self
            .config
            .credibility_bounds
            .clamp(base.credibility.saturating_add(adjacency.credibility));
        let readers = base.readers.max(Decimal::ZERO);
        let reader_change = readers.saturating_sub(baseline.readers);

        EconomicResult {
            cash: cash.normalize(),
            credibility: credibility.normalize(),
            readers: readers.normalize(),
            breakdown: CashBreakdown {
                ads: round_half_up(base.ads_cash),
                bonuses: round_half_up(adjacency.bonus),
                penalties: round_half_up(adjacency.penalty),
            },
            reader_change: round_half_up(reader_change),
        }
    }

    fn base_pass(&self, row: RowId, slots: &[Option<ResolvedSlot<'_>>], totals: &mut BaseTotals) {
        let weight = self.config.row_multipliers.for_row(row);
        let effects = &self.config.variants;

        for (index, slot) in slots.iter().enumerate() {
            match slot {
                Some(ResolvedSlot::Ad { ad }) => {
                    let impact = resolve_ad_impact(ad, &self.config.ad_impacts);
                    let weighted = impact.cash_delta.saturating_mul(weight);
                    totals
                        .contributions
                        .insert(SlotId::canonical(row, index), weighted);
                    totals.cash = totals.cash.saturating_add(weighted);
                    totals.ads_cash = totals.ads_cash.saturating_add(weighted);
                    totals.credibility = totals.credibility.saturating_add(impact.credibility_delta);
                }
                Some(ResolvedSlot::Article { variant, .. }) => match variant {
                    Variant::Factual => {
                        totals.credibility = totals
                            .credibility
                            .saturating_add(effects.factual_credibility.saturating_mul(weight));
                    }
                    Variant::Sensationalist => {
                        totals.credibility = totals
                            .credibility
                            .saturating_add(effects.sensationalist_credibility);
                        totals.readers = totals
                            .readers
                            .saturating_add(effects.sensationalist_readers.saturating_mul(weight));
                    }
                    Variant::Propaganda => {
                        totals.cash = totals
                            .cash
                            .saturating_add(effects.propaganda_cash.saturating_mul(weight));
                        totals.credibility = totals
                            .credibility
                            .saturating_add(effects.propaganda_credibility);
                        totals.readers = totals.readers.saturating_add(effects.propaganda_readers);
                    }
                },
                None => {}
            }
        }
    }
}

/// Score an arrangement with the default configuration.
pub fn compute_economic_result(
    store: &PlacementStore,
    catalog: &ContentCatalog,
    baseline: EditionBaseline,
) -> EconomicResult {
    ScoringEngine::default().score(store, catalog, baseline)
}

/// Join one row's occupants with their catalog entries. Catalog misses
/// become empty slots.
fn resolve_row<'a>(
    store: &PlacementStore,
    row: RowId,
    catalog: &'a ContentCatalog,
) -> Vec<Option<ResolvedSlot<'a>>> {
    store
        .row(row)
        .iter()
        .map(|slot| {
            slot.as_ref().and_then(|item| match item.entry {
                PlacementEntry::Article {
                    content_id,
                    variant,
                } => catalog
                    .article(content_id)
                    .map(|article| ResolvedSlot::Article { article, variant }),
                PlacementEntry::Ad { ad_id } => {
                    catalog.ad(ad_id).map(|ad| ResolvedSlot::Ad { ad })
                }
            })
        })
        .collect()
}

/// Round to the nearest integer, halves toward positive infinity.
fn round_half_up(value: Decimal) -> Decimal {
    value.saturating_add(Decimal::new(5, 1)).floor().normalize()
}

#[cfg(test)]
mod tests {
    use frontpage_types::{
        AdCatalogEntry, AdId, ArticleCatalogEntry, ArticleId, Sentiment, VariantText,
    };
    use rust_decimal_macros::dec;

    use super::*;

    fn article(tags: &[&str], sentiment: Sentiment) -> ArticleCatalogEntry {
        ArticleCatalogEntry {
            id: ArticleId::new(),
            text: VariantText {
                factual: "Border talks resume".to_owned(),
                sensationalist: "BORDER ON THE BRINK".to_owned(),
                propaganda: "Our brave forces stand ready".to_owned(),
            },
            topic_tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            sentiment,
            location: None,
        }
    }

    fn ad(company: &str, tags: &[&str]) -> AdCatalogEntry {
        AdCatalogEntry {
            id: AdId::new(),
            company: company.to_owned(),
            tagline: String::new(),
            description: String::new(),
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        }
    }

    fn slot(s: &str) -> SlotId {
        s.parse().unwrap_or(SlotId::row(RowId::Row1))
    }

    #[test]
    fn empty_page_keeps_baseline() {
        let result = compute_economic_result(
            &PlacementStore::new(),
            &ContentCatalog::default(),
            EditionBaseline::default(),
        );
        assert_eq!(result.cash, dec!(0));
        assert_eq!(result.credibility, dec!(50));
        assert_eq!(result.readers, dec!(10000));
        assert_eq!(result.reader_change, dec!(0));
        assert_eq!(result.breakdown, CashBreakdown::default());
    }

    #[test]
    fn factual_lead_is_row_weighted() {
        let story = article(&["politics"], Sentiment::Neutral);
        let mut store = PlacementStore::new();
        store.place(PlacementEntry::article(story.id, Variant::Factual), slot("row1"));
        let catalog = ContentCatalog::new([story], []);

        let result = compute_economic_result(&store, &catalog, EditionBaseline::default());
        assert_eq!(result.credibility, dec!(57.5));
        assert_eq!(result.readers, dec!(10000));
        assert_eq!(result.cash, dec!(0));
    }

    #[test]
    fn generic_ad_in_lead_row() {
        let sponsor = ad("Acme Widgets", &[]);
        let mut store = PlacementStore::new();
        store.place(PlacementEntry::ad(sponsor.id), slot("row1"));
        let catalog = ContentCatalog::new([], [sponsor]);

        let result = compute_economic_result(&store, &catalog, EditionBaseline::default());
        assert_eq!(result.cash, dec!(1500));
        assert_eq!(result.breakdown.ads, dec!(1500));
        assert_eq!(result.credibility, dec!(50));
    }

    #[test]
    fn war_ad_beside_war_propaganda() {
        let sponsor = ad("Ironclad Arms", &[]);
        let story = article(&["war", "border"], Sentiment::Neutral);
        let mut store = PlacementStore::new();
        store.place(PlacementEntry::ad(sponsor.id), slot("row2_0"));
        store.place(PlacementEntry::article(story.id, Variant::Propaganda), slot("row2_1"));
        let catalog = ContentCatalog::new([story], [sponsor]);

        let result = compute_economic_result(&store, &catalog, EditionBaseline::default());
        assert_eq!(result.cash, dec!(3840));
        assert_eq!(result.breakdown.ads, dec!(2400));
        assert_eq!(result.breakdown.bonuses, dec!(1200));
        assert_eq!(result.breakdown.penalties, dec!(0));
        // -5 for the war ad, -10 for propaganda, both flat.
        assert_eq!(result.credibility, dec!(35));
        assert_eq!(result.readers, dec!(8000));
        assert_eq!(result.reader_change, dec!(-2000));
    }

    #[test]
    fn sensationalist_is_weighted_for_readers_only() {
        let story = article(&["crime"], Sentiment::Negative);
        let mut store = PlacementStore::new();
        store.place(PlacementEntry::article(story.id, Variant::Sensationalist), slot("row2_0"));
        let catalog = ContentCatalog::new([story], []);

        let result = compute_economic_result(&store, &catalog, EditionBaseline::default());
        assert_eq!(result.readers, dec!(16000));
        assert_eq!(result.reader_change, dec!(6000));
        assert_eq!(result.credibility, dec!(45));
    }

    #[test]
    fn conflict_forfeits_ad_cash_and_credibility() {
        let sponsor = ad("Vita Pharma", &[]);
        let story = article(&["health"], Sentiment::Critical);
        let mut store = PlacementStore::new();
        store.place(PlacementEntry::article(story.id, Variant::Factual), slot("row3_0"));
        store.place(PlacementEntry::ad(sponsor.id), slot("row3_1"));
        let catalog = ContentCatalog::new([story], [sponsor]);

        let result = compute_economic_result(&store, &catalog, EditionBaseline::default());
        assert_eq!(result.cash, dec!(0));
        assert_eq!(result.breakdown.ads, dec!(1500));
        assert_eq!(result.breakdown.penalties, dec!(1500));
        // 50 - 3 (pharma) + 5 (factual, row weight 1.0) - 15 (conflict)
        assert_eq!(result.credibility, dec!(37));
    }

    #[test]
    fn missing_catalog_entries_count_as_empty() {
        let mut store = PlacementStore::new();
        store.place(PlacementEntry::ad(AdId::new()), slot("row1"));
        store.place(PlacementEntry::article(ArticleId::new(), Variant::Propaganda), slot("row2_0"));

        let result = compute_economic_result(&store, &ContentCatalog::default(), EditionBaseline::default());
        assert_eq!(result.cash, dec!(0));
        assert_eq!(result.credibility, dec!(50));
        assert_eq!(result.readers, dec!(10000));
    }

    #[test]
    fn credibility_and_readers_are_clamped() {
        let story = article(&["war"], Sentiment::Negative);
        let mut store = PlacementStore::new();
        store.place(PlacementEntry::article(story.id, Variant::Propaganda), slot("row1"));
        let catalog = ContentCatalog::new([story], []);
        let baseline = EditionBaseline {
            credibility: dec!(4),
            readers: dec!(500),
        };

        let result = compute_economic_result(&store, &catalog, baseline);
        assert_eq!(result.credibility, dec!(0));
        assert_eq!(result.readers, dec!(0));
        assert_eq!(result.reader_change, dec!(-500));

        let high = EditionBaseline {
            credibility: dec!(99),
            readers: dec!(10000),
        };
        let mut factual = PlacementStore::new();
        let lead = article(&["science"], Sentiment::Positive);
        factual.place(PlacementEntry::article(lead.id, Variant::Factual), slot("row1"));
        let catalog = ContentCatalog::new([lead], []);
        let result = compute_economic_result(&factual, &catalog, high);
        assert_eq!(result.credibility, dec!(100));
    }

    #[test]
    fn cash_is_unrounded_while_breakdown_is_rounded() {
        let mut config = ScoringConfig::default();
        config.row_multipliers.row1 = dec!(1.25);
        config.ad_impacts.generic.cash_delta = dec!(1.4);
        let engine = ScoringEngine::new(config);

        let sponsor = ad("Acme Widgets", &[]);
        let mut store = PlacementStore::new();
        store.place(PlacementEntry::ad(sponsor.id), slot("row1"));
        let catalog = ContentCatalog::new([], [sponsor]);
        let result = engine.score(&store, &catalog, EditionBaseline::default());

        // 1.4 * 1.25 = 1.75
        assert_eq!(result.cash, dec!(1.75));
        assert_eq!(result.breakdown.ads, dec!(2));
    }

    #[test]
    fn round_half_up_goes_toward_positive_infinity() {
        assert_eq!(round_half_up(dec!(2.5)), dec!(3));
        assert_eq!(round_half_up(dec!(-2.5)), dec!(-2));
        assert_eq!(round_half_up(dec!(-2.6)), dec!(-3));
        assert_eq!(round_half_up(dec!(1199.4)), dec!(1199));
    }

    #[test]
    fn scoring_is_repeatable() {
        let sponsor = ad("Gulf Oil", &[]);
        let story = article(&["oil"], Sentiment::Supportive);
        let mut store = PlacementStore::new();
        store.place(PlacementEntry::article(story.id, Variant::Factual), slot("row3_1"));
        store.place(PlacementEntry::ad(sponsor.id), slot("row3_2"));
        let catalog = ContentCatalog::new([story], [sponsor]);

        let first = compute_economic_result(&store, &catalog, EditionBaseline::default());
        let second = compute_economic_result(&store, &catalog, EditionBaseline::default());
        assert_eq!(first, second);
        assert_eq!(first.cash.to_string(), second.cash.to_string());
    }
}
