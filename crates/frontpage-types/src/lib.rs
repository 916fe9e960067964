//! Shared type definitions for the Frontpage editorial simulation.
//!
//! This crate is the single source of truth for the data model used across
//! the workspace. Types defined here flow downstream to `TypeScript` via
//! `ts-rs` for the editor front end.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for catalog and edition identifiers
//! - [`enums`] -- Article variants, sentiments, and layout rows
//! - [`slot`] -- Slot ids and their fixed string grammar
//! - [`structs`] -- Placed items, catalog entries, baselines, and results

pub mod enums;
pub mod ids;
pub mod slot;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{RowId, Sentiment, Variant};
pub use ids::{AdId, ArticleId, EditionId};
pub use slot::{SlotId, SlotIdError};
pub use structs::{
    AdCatalogEntry, ArticleCatalogEntry, CashBreakdown, EconomicResult, EditionBaseline,
    PlacementEntry, PlacementItem, PublishedEdition, VariantText,
};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs writes the files to `bindings/` relative to the crate root.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::ArticleId::export_all();
        let _ = crate::ids::AdId::export_all();
        let _ = crate::ids::EditionId::export_all();

        // Enums
        let _ = crate::enums::Variant::export_all();
        let _ = crate::enums::Sentiment::export_all();
        let _ = crate::enums::RowId::export_all();

        // Structs
        let _ = crate::structs::PlacementEntry::export_all();
        let _ = crate::structs::PlacementItem::export_all();
        let _ = crate::structs::VariantText::export_all();
        let _ = crate::structs::ArticleCatalogEntry::export_all();
        let _ = crate::structs::AdCatalogEntry::export_all();
        let _ = crate::structs::EditionBaseline::export_all();
        let _ = crate::structs::CashBreakdown::export_all();
        let _ = crate::structs::EconomicResult::export_all();
        let _ = crate::structs::PublishedEdition::export_all();
    }
}
