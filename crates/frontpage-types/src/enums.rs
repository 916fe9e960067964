//! Enumeration types for the Frontpage simulation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Article variants
// ---------------------------------------------------------------------------

/// The rhetorical framing an article is displayed with.
///
/// Every catalog article carries display text for all three variants; the
/// editor picks one per placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Variant {
    /// Sober, sourced reporting.
    Factual,
    /// Attention-grabbing framing that trades credibility for readers.
    Sensationalist,
    /// Framing that serves an agenda (and whoever pays for it).
    Propaganda,
}

impl Variant {
    /// Wire name of the variant.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Factual => "factual",
            Self::Sensationalist => "sensationalist",
            Self::Propaganda => "propaganda",
        }
    }
}

impl core::fmt::Display for Variant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Article sentiment
// ---------------------------------------------------------------------------

/// Editorial sentiment of an article's underlying story.
///
/// Sentiment is catalog data and does not change with the displayed
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Sentiment {
    /// Good news.
    Positive,
    /// Bad news.
    Negative,
    /// Endorses its subject.
    Supportive,
    /// Takes its subject to task.
    Critical,
    /// No particular slant.
    Neutral,
}

impl Sentiment {
    /// Returns `true` for sentiments that flatter an adjacent advertiser.
    pub const fn is_favorable(self) -> bool {
        matches!(self, Self::Positive | Self::Supportive)
    }

    /// Returns `true` for sentiments that embarrass an adjacent advertiser.
    pub const fn is_unfavorable(self) -> bool {
        matches!(self, Self::Negative | Self::Critical)
    }
}

// ---------------------------------------------------------------------------
// Layout rows
// ---------------------------------------------------------------------------

/// One of the three rows of the front page.
///
/// Rows get wider and less prominent as they go down the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum RowId {
    /// The lead story row (one slot).
    Row1,
    /// The second row (two slots).
    Row2,
    /// The bottom row (three slots).
    Row3,
}

impl RowId {
    /// All rows, top to bottom. This is also the scoring order.
    pub const ALL: [Self; 3] = [Self::Row1, Self::Row2, Self::Row3];

    /// Number of slots in the row.
    pub const fn capacity(self) -> usize {
        match self {
            Self::Row1 => 1,
            Self::Row2 => 2,
            Self::Row3 => 3,
        }
    }

    /// Wire name of the row, as used in slot ids.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Row1 => "row1",
            Self::Row2 => "row2",
            Self::Row3 => "row3",
        }
    }

    /// Parse a bare row name (`"row1"`, `"row2"`, `"row3"`).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|row| row.as_str() == name)
    }
}

impl core::fmt::Display for RowId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
