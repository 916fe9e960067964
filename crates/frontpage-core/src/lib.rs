//! Editing sessions and publishing for the Frontpage simulation.
//!
//! This crate ties the placement store and the scoring engine together
//! into the editor's workflow: arrange, preview, publish, repeat.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `frontpage-config.yaml` into
//!   strongly-typed structs.
//! - [`publish`] -- Baseline resolution, scoring, and edition packaging.
//! - [`session`] -- [`EditingSession`] and its mutex-guarded
//!   [`SharedSession`].
//!
//! [`EditingSession`]: session::EditingSession
//! [`SharedSession`]: session::SharedSession

pub mod config;
pub mod publish;
pub mod session;
