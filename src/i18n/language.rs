//! Language type: a validated locale selector.
//!
//! A `Language` can only be constructed for a code the registry knows and
//! has enabled, so an invalid locale can never reach the content resolver.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};

/// A validated language.
///
/// Copyable wrapper over a registry-backed language code. Only supported,
/// enabled languages can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "zh", "en")
    code: &'static str,
}

impl Language {
    /// The default locale. Its compiled-in content is the known-good
    /// fallback document.
    pub const CHINESE: Language = Language { code: "zh" };

    /// The secondary locale.
    pub const ENGLISH: Language = Language { code: "en" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the default language (Chinese).
    pub fn default_language() -> Language {
        let config = LanguageRegistry::get().default_language();
        Language { code: config.code }
    }

    /// The other locale in the two-language set.
    pub fn toggled(&self) -> Language {
        if *self == Language::CHINESE {
            Language::ENGLISH
        } else {
            Language::CHINESE
        }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This should
    /// never happen if the Language was constructed properly (via `from_code`
    /// or constants).
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the default language.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::default_language()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chinese_constant() {
        let chinese = Language::CHINESE;
        assert_eq!(chinese.code(), "zh");
        assert_eq!(chinese.name(), "Chinese");
        assert!(chinese.is_default());
    }

    #[test]
    fn test_english_constant() {
        let english = Language::ENGLISH;
        assert_eq!(english.code(), "en");
        assert_eq!(english.name(), "English");
        assert!(!english.is_default());
    }

    #[test]
    fn test_from_code_valid() {
        let language = Language::from_code("en").expect("Should succeed");
        assert_eq!(language.code(), "en");
        assert_eq!(language.name(), "English");
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("fr");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_default_language_is_chinese() {
        let default = Language::default_language();
        assert_eq!(default.code(), "zh");
        assert!(default.is_default());
        assert_eq!(Language::default(), default);
    }

    #[test]
    fn test_toggled_flips_between_locales() {
        assert_eq!(Language::CHINESE.toggled(), Language::ENGLISH);
        assert_eq!(Language::ENGLISH.toggled(), Language::CHINESE);
    }

    #[test]
    fn test_language_equality() {
        let lang1 = Language::ENGLISH;
        let lang2 = Language::from_code("en").unwrap();
        assert_eq!(lang1, lang2);
        assert_ne!(Language::CHINESE, Language::ENGLISH);
    }

    #[test]
    fn test_language_display() {
        assert_eq!(Language::CHINESE.to_string(), "zh");
        assert_eq!(format!("{}", Language::ENGLISH), "en");
    }

    #[test]
    fn test_native_name() {
        assert_eq!(Language::CHINESE.native_name(), "中文");
        assert_eq!(Language::ENGLISH.native_name(), "English");
    }
}
