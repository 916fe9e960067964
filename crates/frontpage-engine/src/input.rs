//! The edition input file.
//!
//! One JSON document carries everything needed to produce an edition:
//!
//! ```json
//! {
//!   "articles": [ ...ArticleCatalogEntry ],
//!   "ads": [ ...AdCatalogEntry ],
//!   "previous": { ...PublishedEdition },
//!   "draft": { "row1": [...], "row2": [...], "row3": [...] },
//!   "commands": [ ...LayoutCommand ]
//! }
//! ```
//!
//! Every field is optional. Commands are replayed on top of the draft, or
//! on an empty page if there is none.

use std::path::Path;

use serde::Deserialize;

use frontpage_layout::{LayoutCommand, PlacementStore};
use frontpage_types::{AdCatalogEntry, ArticleCatalogEntry, PublishedEdition};

use crate::error::EngineError;

/// Parsed edition input.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EditionInput {
    /// Article catalog.
    pub articles: Vec<ArticleCatalogEntry>,
    /// Ad catalog.
    pub ads: Vec<AdCatalogEntry>,
    /// The last published edition, if any.
    pub previous: Option<PublishedEdition>,
    /// A saved arrangement to start from.
    pub draft: Option<PlacementStore>,
    /// Edits to replay, in order.
    pub commands: Vec<LayoutCommand>,
}

impl EditionInput {
    /// Read and parse an input file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Read`] if the file cannot be read, or
    /// [`EngineError::Input`] if it is not valid edition JSON.
    pub fn from_file(path: &Path) -> Result<Self, EngineError> {
        let contents = std::fs::read_to_string(path).map_err(|source| EngineError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| EngineError::Input {
            path: path.to_path_buf(),
            source,
        })
    }
}
