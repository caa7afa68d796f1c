//! Internationalization (i18n) module for the bilingual site.
//!
//! All locale-related logic lives here: the registry of supported languages
//! and the validated `Language` type the resolver keys every fetch on.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported languages and their metadata
//! - `language`: Type-safe Language type validated against the registry
//!
//! # Example
//!
//! ```rust,ignore
//! use portfolio_content::i18n::{Language, LanguageRegistry};
//!
//! // Get the default language (Chinese)
//! let default = Language::default_language();
//!
//! // Create language from code
//! let english = Language::from_code("en")?;
//!
//! // List all enabled languages
//! let languages = LanguageRegistry::get().list_enabled();
//! ```

mod language;
mod registry;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
