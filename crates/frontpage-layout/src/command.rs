//! Serializable layout edits.
//!
//! The editor front end reports each drag, drop, removal, and variant
//! toggle as a [`LayoutCommand`]. Replaying a command list against an empty
//! [`PlacementStore`] reproduces the arrangement, which is how drafts and
//! edition input files describe a front page.

use serde::{Deserialize, Serialize};

use frontpage_types::{PlacementEntry, PlacementItem, SlotId, Variant};

use crate::store::PlacementStore;

/// One edit to the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum LayoutCommand {
    /// Drop a catalog item onto the page.
    Place {
        /// What to place.
        entry: PlacementEntry,
        /// Where it was dropped.
        target: SlotId,
    },
    /// Drag a placed item to another slot.
    Move {
        /// Slot the item is dragged from.
        source: SlotId,
        /// Slot it is dropped on.
        target: SlotId,
    },
    /// Take an item off the page.
    Remove {
        /// Slot to clear.
        slot: SlotId,
    },
    /// Change how a placed article is framed.
    SetVariant {
        /// Slot holding the article.
        slot: SlotId,
        /// New variant.
        variant: Variant,
    },
}

/// What applying a [`LayoutCommand`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The entry or moved item now sits at this slot.
    Landed(SlotId),
    /// This item was taken off the page.
    Removed(PlacementItem),
    /// An article's variant was changed.
    VariantChanged,
    /// Nothing changed, or the item did not fit and was dropped.
    Unchanged,
}

impl PlacementStore {
    /// Apply one command.
    pub fn apply(&mut self, command: LayoutCommand) -> CommandOutcome {
        match command {
            LayoutCommand::Place { entry, target } => self
                .place(entry, target)
                .map_or(CommandOutcome::Unchanged, CommandOutcome::Landed),
            LayoutCommand::Move { source, target } => self
                .move_item(source, target)
                .map_or(CommandOutcome::Unchanged, CommandOutcome::Landed),
            LayoutCommand::Remove { slot } => self
                .remove(slot)
                .map_or(CommandOutcome::Unchanged, CommandOutcome::Removed),
            LayoutCommand::SetVariant { slot, variant } => {
                if self.set_variant(slot, variant) {
                    CommandOutcome::VariantChanged
                } else {
                    CommandOutcome::Unchanged
                }
            }
        }
    }

    /// Apply commands in order, returning each outcome.
    pub fn apply_all<I>(&mut self, commands: I) -> Vec<CommandOutcome>
    where
        I: IntoIterator<Item = LayoutCommand>,
    {
        commands.into_iter().map(|c| self.apply(c)).collect()
    }

    /// Build a layout by replaying `commands` against an empty page.
    pub fn replay<I>(commands: I) -> Self
    where
        I: IntoIterator<Item = LayoutCommand>,
    {
        let mut store = Self::new();
        store.apply_all(commands);
        store
    }
}

#[cfg(test)]
mod tests {
    use frontpage_types::{AdId, ArticleId, RowId};

    use super::*;

    #[test]
    fn commands_parse_from_editor_json() {
        let json = r#"[
            {"op": "place", "entry": {"type": "ad", "ad_id": "00000000-0000-0000-0000-000000000001"}, "target": "row2_0"},
            {"op": "move", "source": "row2_0", "target": "row2_1"},
            {"op": "set_variant", "slot": "row1", "variant": "factual"},
            {"op": "remove", "slot": "row2_1"}
        ]"#;
        let commands: Result<Vec<LayoutCommand>, _> = serde_json::from_str(json);
        assert_eq!(commands.map(|c| c.len()).ok(), Some(4));
    }

    #[test]
    fn malformed_slot_id_is_rejected_at_parse_time() {
        let json = r#"{"op": "remove", "slot": "sidebar_0"}"#;
        let command: Result<LayoutCommand, _> = serde_json::from_str(json);
        assert!(command.is_err());
    }

    #[test]
    fn replay_reports_each_outcome() {
        let article = PlacementEntry::article(ArticleId::new(), Variant::Factual);
        let ad = PlacementEntry::ad(AdId::new());
        let mut store = PlacementStore::new();
        let outcomes = store.apply_all([
            LayoutCommand::Place {
                entry: article,
                target: SlotId::row(RowId::Row1),
            },
            LayoutCommand::Place {
                entry: ad,
                target: SlotId::at(RowId::Row2, 1),
            },
            LayoutCommand::SetVariant {
                slot: SlotId::at(RowId::Row2, 1),
                variant: Variant::Propaganda,
            },
            LayoutCommand::SetVariant {
                slot: SlotId::row(RowId::Row1),
                variant: Variant::Propaganda,
            },
            LayoutCommand::Move {
                source: SlotId::at(RowId::Row2, 0),
                target: SlotId::at(RowId::Row3, 0),
            },
        ]);

        assert_eq!(
            outcomes,
            vec![
                CommandOutcome::Landed(SlotId::row(RowId::Row1)),
                CommandOutcome::Landed(SlotId::at(RowId::Row2, 1)),
                CommandOutcome::Unchanged,
                CommandOutcome::VariantChanged,
                CommandOutcome::Unchanged,
            ]
        );
        assert_eq!(store.occupied_count(), 2);
    }

    #[test]
    fn replay_builds_from_empty() {
        let ad = PlacementEntry::ad(AdId::new());
        let store = PlacementStore::replay([
            LayoutCommand::Place {
                entry: ad,
                target: SlotId::row(RowId::Row3),
            },
            LayoutCommand::Remove {
                slot: SlotId::at(RowId::Row3, 0),
            },
        ]);
        assert!(store.is_empty());
    }
}
