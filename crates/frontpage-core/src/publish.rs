//! Publish orchestration.
//!
//! Publishing resolves the baseline (the previous edition's closing
//! credibility and readers, or the configured defaults for the first
//! edition), scores the arrangement, and packages the result with the
//! flattened placed items as a [`PublishedEdition`].

use chrono::{DateTime, Utc};
use tracing::info;

use frontpage_layout::PlacementStore;
use frontpage_scoring::{ContentCatalog, ScoringEngine};
use frontpage_types::{EditionBaseline, EditionId, EconomicResult, PublishedEdition};

use crate::config::EditorConfig;

/// Errors that can occur while publishing an edition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PublishError {
    /// The previous edition already carries the highest possible number.
    #[error("edition number overflow after edition {previous}")]
    EditionNumberOverflow {
        /// Number of the previous edition.
        previous: u32,
    },
}

/// Scores and packages editions under one configuration.
#[derive(Debug, Clone, Default)]
pub struct Publisher {
    engine: ScoringEngine,
    first_baseline: EditionBaseline,
}

impl Publisher {
    /// Create a publisher from a scoring engine and the baseline used for
    /// the first edition.
    pub const fn new(engine: ScoringEngine, first_baseline: EditionBaseline) -> Self {
        Self {
            engine,
            first_baseline,
        }
    }

    /// Create a publisher from editor configuration.
    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(
            ScoringEngine::new(config.scoring.clone()),
            config.baseline.to_baseline(),
        )
    }

    /// The baseline the edition following `previous` starts from.
    pub fn baseline(&self, previous: Option<&PublishedEdition>) -> EditionBaseline {
        previous.map_or(self.first_baseline, EditionBaseline::carried_from)
    }

    /// Score an arrangement against the baseline that follows `previous`
    /// without publishing it.
    pub fn preview(
        &self,
        store: &PlacementStore,
        catalog: &ContentCatalog,
        previous: Option<&PublishedEdition>,
    ) -> EconomicResult {
        self.engine.score(store, catalog, self.baseline(previous))
    }

    /// Publish an arrangement now.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::EditionNumberOverflow`] if `previous` is
    /// numbered `u32::MAX`.
    pub fn publish(
        &self,
        store: &PlacementStore,
        catalog: &ContentCatalog,
        previous: Option<&PublishedEdition>,
    ) -> Result<PublishedEdition, PublishError> {
        self.publish_at(store, catalog, previous, Utc::now())
    }

    /// Publish an arrangement with an explicit timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::EditionNumberOverflow`] if `previous` is
    /// numbered `u32::MAX`.
    pub fn publish_at(
        &self,
        store: &PlacementStore,
        catalog: &ContentCatalog,
        previous: Option<&PublishedEdition>,
        published_at: DateTime<Utc>,
    ) -> Result<PublishedEdition, PublishError> {
        let number = match previous {
            Some(edition) => edition
                .number
                .checked_add(1)
                .ok_or(PublishError::EditionNumberOverflow {
                    previous: edition.number,
                })?,
            None => 1,
        };

        let result = self.preview(store, catalog, previous);
        let items = store.placed_items();

        info!(
            edition = number,
            items = items.len(),
            cash = %result.cash,
            credibility = %result.credibility,
            readers = %result.readers,
            reader_change = %result.reader_change,
            "Edition published"
        );

        Ok(PublishedEdition {
            id: EditionId::new(),
            number,
            published_at,
            result,
            items,
        })
    }
}
