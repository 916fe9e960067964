//! The mutable arrangement of items on the front page.
//!
//! Each row is a fixed-size array of optional slots. Two write
//! disciplines apply:
//!
//! - **Placing** writes straight into an index. An explicit index is
//!   overwritten in place (the previous occupant is discarded), which can
//!   leave holes below a filled higher index.
//! - **Removing** (including the source side of a cross-slot move) closes
//!   the gap by shifting every later slot one to the left.
//!
//! # Invariants
//!
//! - A row never holds more items than its capacity (enforced by the array
//!   types).
//! - Every stored item's `slot_id` equals [`SlotId::canonical`] for its
//!   position. Every mutation ends by re-stamping.

use serde::{Deserialize, Serialize};
use tracing::debug;

use frontpage_types::{PlacementEntry, PlacementItem, RowId, SlotId, Variant};

/// A row's slots as seen from outside the store.
pub type Slots = [Option<PlacementItem>];

/// The front-page layout: one lead slot, two second-row slots, three
/// bottom-row slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoreDraft")]
pub struct PlacementStore {
    row1: [Option<PlacementItem>; 1],
    row2: [Option<PlacementItem>; 2],
    row3: [Option<PlacementItem>; 3],
}

/// Loosely shaped rows as found in a saved draft.
///
/// Rows may be short, long, or missing; extra entries past a row's
/// capacity are dropped. Stored slot ids are ignored in favor of the
/// position each item lands in.
#[derive(Debug, Default, Deserialize)]
struct StoreDraft {
    #[serde(default)]
    row1: Vec<Option<PlacementItem>>,
    #[serde(default)]
    row2: Vec<Option<PlacementItem>>,
    #[serde(default)]
    row3: Vec<Option<PlacementItem>>,
}

impl From<StoreDraft> for PlacementStore {
    fn from(draft: StoreDraft) -> Self {
        let entries = |row: Vec<Option<PlacementItem>>| {
            row.into_iter()
                .map(|slot| slot.map(|item| item.entry))
                .collect::<Vec<_>>()
        };
        Self::from_rows(entries(draft.row1), entries(draft.row2), entries(draft.row3))
    }
}

impl PlacementStore {
    /// Create an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a layout from externally supplied rows (e.g. a restored
    /// draft).
    ///
    /// Holes are kept where they are. Entries beyond a row's capacity are
    /// discarded.
    pub fn from_rows(
        row1: Vec<Option<PlacementEntry>>,
        row2: Vec<Option<PlacementEntry>>,
        row3: Vec<Option<PlacementEntry>>,
    ) -> Self {
        let mut store = Self::new();
        for (row, entries) in RowId::ALL.into_iter().zip([row1, row2, row3]) {
            let slots = store.slots_mut(row);
            if entries.len() > slots.len() {
                debug!(row = %row, supplied = entries.len(), capacity = slots.len(), "Draft row truncated to capacity");
            }
            for (slot, entry) in slots.iter_mut().zip(entries) {
                *slot = entry.map(|entry| PlacementItem {
                    slot_id: SlotId::row(row),
                    entry,
                });
            }
        }
        store.restamp();
        store
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// The slots of one row, in index order.
    pub fn row(&self, row: RowId) -> &Slots {
        match row {
            RowId::Row1 => &self.row1,
            RowId::Row2 => &self.row2,
            RowId::Row3 => &self.row3,
        }
    }

    /// The item at the slot `slot` addresses, if any.
    ///
    /// A bare row id other than `"row1"` addresses no single slot and
    /// always yields `None`.
    pub fn get(&self, slot: SlotId) -> Option<&PlacementItem> {
        let index = slot.addressed_index()?;
        self.row(slot.row_id()).get(index)?.as_ref()
    }

    /// Every placed item, lead row first, ascending index within a row.
    pub fn items(&self) -> impl Iterator<Item = &PlacementItem> {
        RowId::ALL
            .into_iter()
            .flat_map(|row| self.row(row).iter().flatten())
    }

    /// Flattened copy of every placed item, for archiving a published
    /// edition.
    pub fn placed_items(&self) -> Vec<PlacementItem> {
        self.items().copied().collect()
    }

    /// Number of occupied slots.
    pub fn occupied_count(&self) -> usize {
        self.items().count()
    }

    /// Returns `true` if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.items().next().is_none()
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Put `entry` on the page at `target`.
    ///
    /// - Lead row: the row is replaced wholesale, whatever index was named.
    /// - Explicit in-range index: that slot is overwritten; nothing shifts.
    /// - No usable index: the first empty slot is used; if the row is full
    ///   the placement is silently dropped.
    ///
    /// Returns where the entry landed, or `None` if it was dropped.
    pub fn place(&mut self, entry: PlacementEntry, target: SlotId) -> Option<SlotId> {
        let landed = self.write(entry, target);
        self.restamp();
        match landed {
            Some(slot) => debug!(target = %target, landed = %slot, "Placed entry"),
            None => debug!(target = %target, "Row full, placement dropped"),
        }
        landed
    }

    /// Move the item at `source` to `target`.
    ///
    /// Within one row, with both indices explicit, the two slots swap
    /// contents (the target may be empty). Otherwise the source row is
    /// compacted and the item is placed at `target` exactly as
    /// [`place`](Self::place) would, which can drop it if the target row
    /// is full.
    ///
    /// Does nothing if `source` addresses no occupied slot. Returns where
    /// the item ended up.
    pub fn move_item(&mut self, source: SlotId, target: SlotId) -> Option<SlotId> {
        let source_index = source.addressed_index()?;
        let item = *self.row(source.row_id()).get(source_index)?.as_ref()?;

        let same_row = source.row_id() == target.row_id();
        let landed = match (same_row, source.explicit_index(), target.explicit_index()) {
            (true, Some(from), Some(to)) => {
                self.slots_mut(source.row_id()).swap(from, to);
                Some(SlotId::canonical(target.row_id(), to))
            }
            _ => {
                compact(self.slots_mut(source.row_id()), source_index);
                self.write(item.entry, target)
            }
        };

        self.restamp();
        match landed {
            Some(slot) => debug!(source = %source, target = %target, landed = %slot, "Moved item"),
            None => debug!(source = %source, target = %target, "Target row full, moved item dropped"),
        }
        landed
    }

    /// Delete the item at `slot`, shifting later items in the row left.
    ///
    /// Returns the removed item, if the slot was occupied.
    pub fn remove(&mut self, slot: SlotId) -> Option<PlacementItem> {
        let index = slot.addressed_index()?;
        let removed = compact(self.slots_mut(slot.row_id()), index);
        self.restamp();
        debug!(slot = %slot, removed = removed.is_some(), "Removed slot");
        removed
    }

    /// Switch the displayed variant of the article at `slot`.
    ///
    /// Returns `false` (and changes nothing) if the slot is empty or holds
    /// an ad.
    pub fn set_variant(&mut self, slot: SlotId, variant: Variant) -> bool {
        let Some(index) = slot.addressed_index() else {
            return false;
        };
        let occupant = self
            .slots_mut(slot.row_id())
            .get_mut(index)
            .and_then(Option::as_mut);
        match occupant {
            Some(PlacementItem {
                entry: PlacementEntry::Article { variant: current, .. },
                ..
            }) => {
                *current = variant;
                debug!(slot = %slot, variant = %variant, "Variant changed");
                true
            }
            Some(PlacementItem {
                entry: PlacementEntry::Ad { .. },
                ..
            })
            | None => false,
        }
    }

    /// Empty every slot.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn slots_mut(&mut self, row: RowId) -> &mut Slots {
        match row {
            RowId::Row1 => &mut self.row1,
            RowId::Row2 => &mut self.row2,
            RowId::Row3 => &mut self.row3,
        }
    }

    /// The shared write path of `place` and `move_item`. Does not re-stamp.
    fn write(&mut self, entry: PlacementEntry, target: SlotId) -> Option<SlotId> {
        let row = target.row_id();
        let slots = self.slots_mut(row);
        let item = PlacementItem {
            slot_id: target,
            entry,
        };

        let index = match row {
            RowId::Row1 => {
                slots.fill(None);
                0
            }
            RowId::Row2 | RowId::Row3 => match target.explicit_index() {
                Some(index) => index,
                None => slots.iter().position(Option::is_none)?,
            },
        };

        *slots.get_mut(index)? = Some(item);
        Some(SlotId::canonical(row, index))
    }

    /// Bring every item's `slot_id` back in line with its position.
    fn restamp(&mut self) {
        for row in RowId::ALL {
            for (index, slot) in self.slots_mut(row).iter_mut().enumerate() {
                if let Some(item) = slot {
                    item.slot_id = SlotId::canonical(row, index);
                }
            }
        }
    }
}

/// Remove `slots[index]` and shift everything after it one to the left,
/// leaving the last slot empty.
fn compact(slots: &mut Slots, index: usize) -> Option<PlacementItem> {
    let tail = slots.get_mut(index..)?;
    let first = tail.first_mut()?;
    let removed = first.take();
    tail.rotate_left(1);
    removed
}
