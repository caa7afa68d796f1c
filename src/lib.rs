//! Bilingual content resolution pipeline for a game-dev portfolio site.
//!
//! The crate centers on [`resolver::ContentResolver`], which owns the
//! process-wide language selection and the resolved content document, and
//! [`fetch::SectionFetcher`], the fetch-with-fallback helper behind every
//! leaf display section's supplementary data.

pub mod config;
pub mod content;
pub mod fetch;
pub mod i18n;
pub mod navigator;
pub mod resolver;
pub mod store;
