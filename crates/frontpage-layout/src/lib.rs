//! Front-page placement store for the Frontpage simulation.
//!
//! This crate owns the editable arrangement of articles and ads on the
//! page. It performs no I/O and never fails: edits that do not fit are
//! dropped and reported through return values, not errors.
//!
//! # Modules
//!
//! - [`store`] -- [`PlacementStore`] with place, move, remove, and variant edits
//! - [`command`] -- [`LayoutCommand`] for replaying recorded edits

pub mod command;
pub mod store;

pub use command::{CommandOutcome, LayoutCommand};
pub use store::{PlacementStore, Slots};
