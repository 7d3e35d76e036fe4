//! `tabula-align` — translation-to-line reconciliation engine.
//!
//! Pure engine crate: receives parsed structural lines and raw translation
//! records, returns the records with outcomes populated. No CLI or IO
//! dependencies, no hidden state between artifacts.

pub mod cascade;
pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod glossary;
pub mod positional;
pub mod summary;

pub use config::AlignConfig;
pub use engine::{run, AlignResult};
pub use error::AlignError;
pub use summary::AlignSummary;
