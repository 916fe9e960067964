//! Slot identifiers and their string form.
//!
//! Slot ids travel through drag-and-drop handlers and saved drafts as plain
//! strings, so the grammar is fixed:
//!
//! ```text
//! "row1" | "row1_{n}" | "row2_{0|1}" | "row3_{0|1|2}"
//! ```
//!
//! A bare row name (`"row2"`) means "somewhere in this row". An index past
//! the row's capacity is kept verbatim but resolves to no index at all, so
//! it falls back to the same find-empty-or-append logic as a bare row.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::enums::RowId;

/// Errors produced when parsing a slot id string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlotIdError {
    /// The row prefix is not one of `row1`, `row2`, `row3`.
    #[error("unknown row in slot id: {0:?}")]
    UnknownRow(String),

    /// The suffix after the underscore is not a non-negative integer.
    #[error("invalid slot index in slot id: {0:?}")]
    InvalidIndex(String),
}

/// Address of a slot (or of a whole row) on the front page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SlotId {
    row: RowId,
    index: Option<u32>,
}

impl SlotId {
    /// Address a whole row without naming an index.
    pub const fn row(row: RowId) -> Self {
        Self { row, index: None }
    }

    /// Address an explicit index within a row.
    pub const fn at(row: RowId, index: u32) -> Self {
        Self {
            row,
            index: Some(index),
        }
    }

    /// The id an item carries while it sits at `index` of `row`.
    ///
    /// The lead row has a single slot and is always addressed without an
    /// index in canonical form.
    pub fn canonical(row: RowId, index: usize) -> Self {
        match row {
            RowId::Row1 => Self::row(row),
            RowId::Row2 | RowId::Row3 => Self {
                row,
                index: u32::try_from(index).ok(),
            },
        }
    }

    /// The row this id points into.
    pub const fn row_id(&self) -> RowId {
        self.row
    }

    /// The index as written, even if it is out of range.
    pub const fn raw_index(&self) -> Option<u32> {
        self.index
    }

    /// The index if one was given and it lies within the row's capacity.
    pub fn explicit_index(&self) -> Option<usize> {
        self.index
            .and_then(|i| usize::try_from(i).ok())
            .filter(|&i| i < self.row.capacity())
    }

    /// The single slot this id refers to, if it refers to one.
    ///
    /// Same as [`explicit_index`](Self::explicit_index), except that the
    /// bare `"row1"` form addresses the lead row's only slot.
    pub fn addressed_index(&self) -> Option<usize> {
        match (self.row, self.explicit_index()) {
            (_, Some(i)) => Some(i),
            (RowId::Row1, None) => Some(0),
            (RowId::Row2 | RowId::Row3, None) => None,
        }
    }
}

impl core::fmt::Display for SlotId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.index {
            Some(i) => write!(f, "{}_{i}", self.row),
            None => f.write_str(self.row.as_str()),
        }
    }
}

impl FromStr for SlotId {
    type Err = SlotIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row_name, suffix) = match s.split_once('_') {
            Some((row_name, suffix)) => (row_name, Some(suffix)),
            None => (s, None),
        };

        let row = RowId::from_name(row_name).ok_or_else(|| SlotIdError::UnknownRow(s.to_owned()))?;

        let index = match suffix {
            None | Some("") => None,
            Some(digits) => Some(
                digits
                    .parse::<u32>()
                    .map_err(|_parse| SlotIdError::InvalidIndex(s.to_owned()))?,
            ),
        };

        Ok(Self { row, index })
    }
}

impl TryFrom<String> for SlotId {
    type Error = SlotIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SlotId> for String {
    fn from(id: SlotId) -> Self {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Option<SlotId> {
        s.parse().ok()
    }

    #[test]
    fn parses_every_canonical_form() {
        assert_eq!(parse("row1"), Some(SlotId::row(RowId::Row1)));
        assert_eq!(parse("row1_0"), Some(SlotId::at(RowId::Row1, 0)));
        assert_eq!(parse("row2_1"), Some(SlotId::at(RowId::Row2, 1)));
        assert_eq!(parse("row3_2"), Some(SlotId::at(RowId::Row3, 2)));
        assert_eq!(parse("row3"), Some(SlotId::row(RowId::Row3)));
    }

    #[test]
    fn display_is_the_wire_form() {
        for s in ["row1", "row1_4", "row2", "row2_0", "row2_1", "row3_2"] {
            assert_eq!(parse(s).map(|id| id.to_string()).as_deref(), Some(s));
        }
    }

    #[test]
    fn out_of_range_index_is_not_explicit() {
        let id = parse("row2_7");
        assert_eq!(id.and_then(|id| id.raw_index()), Some(7));
        assert_eq!(id.and_then(|id| id.explicit_index()), None);
    }

    #[test]
    fn bare_lead_row_addresses_its_only_slot() {
        assert_eq!(SlotId::row(RowId::Row1).addressed_index(), Some(0));
        assert_eq!(SlotId::row(RowId::Row2).addressed_index(), None);
        assert_eq!(SlotId::at(RowId::Row3, 2).addressed_index(), Some(2));
    }

    #[test]
    fn trailing_underscore_means_no_index() {
        assert_eq!(parse("row3_"), Some(SlotId::row(RowId::Row3)));
    }

    #[test]
    fn rejects_malformed_ids() {
        assert_eq!(
            "row9_0".parse::<SlotId>(),
            Err(SlotIdError::UnknownRow("row9_0".to_owned()))
        );
        assert_eq!(
            "row2_x".parse::<SlotId>(),
            Err(SlotIdError::InvalidIndex("row2_x".to_owned()))
        );
        assert!("".parse::<SlotId>().is_err());
    }

    #[test]
    fn canonical_ids() {
        assert_eq!(SlotId::canonical(RowId::Row1, 0).to_string(), "row1");
        assert_eq!(SlotId::canonical(RowId::Row2, 1).to_string(), "row2_1");
        assert_eq!(SlotId::canonical(RowId::Row3, 0).to_string(), "row3_0");
    }

    #[test]
    fn serde_uses_string_form() {
        let json = serde_json::to_string(&SlotId::at(RowId::Row2, 0)).ok();
        assert_eq!(json.as_deref(), Some("\"row2_0\""));
        let back: Result<SlotId, _> = serde_json::from_str("\"row3_1\"");
        assert_eq!(back.ok(), Some(SlotId::at(RowId::Row3, 1)));
        let bad: Result<SlotId, _> = serde_json::from_str("\"column1\"");
        assert!(bad.is_err());
    }
}
