//! Language registry: single source of truth for the supported locales.
//!
//! The site ships with a fixed, closed set of languages (Chinese as the
//! default, English as the secondary locale). The registry is a singleton
//! behind `OnceLock` so every part of the process sees the same set.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "zh", "en")
    pub code: &'static str,

    /// English name of the language (e.g., "Chinese", "English")
    pub name: &'static str,

    /// Native name of the language (e.g., "中文", "English")
    pub native_name: &'static str,

    /// Whether this is the default language (exactly one should be true).
    /// The default language's compiled-in content is the known-good
    /// fallback document.
    pub is_default: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: supported_languages(),
        })
    }

    /// Get a language configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get the default language configuration.
    ///
    /// # Panics
    /// Panics if no default language is found or if multiple defaults are
    /// defined (this indicates a configuration error).
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Check if a language code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// The closed set of languages the site supports.
fn supported_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "zh",
            name: "Chinese",
            native_name: "中文",
            is_default: true,
            enabled: true,
        },
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: false,
            enabled: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_chinese() {
        let registry = LanguageRegistry::get();
        let config = registry.get_by_code("zh");

        assert!(config.is_some());
        let config = config.unwrap();
        assert_eq!(config.code, "zh");
        assert_eq!(config.name, "Chinese");
        assert_eq!(config.native_name, "中文");
        assert!(config.is_default);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_english() {
        let registry = LanguageRegistry::get();
        let config = registry.get_by_code("en");

        assert!(config.is_some());
        let config = config.unwrap();
        assert_eq!(config.code, "en");
        assert_eq!(config.name, "English");
        assert!(!config.is_default);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        let registry = LanguageRegistry::get();
        assert!(registry.get_by_code("fr").is_none());
    }

    #[test]
    fn test_list_enabled_contains_both_locales() {
        let registry = LanguageRegistry::get();
        let enabled = registry.list_enabled();

        assert_eq!(enabled.len(), 2);
        assert!(enabled.iter().any(|lang| lang.code == "zh"));
        assert!(enabled.iter().any(|lang| lang.code == "en"));
    }

    #[test]
    fn test_default_language_is_chinese() {
        let registry = LanguageRegistry::get();
        let default = registry.default_language();

        assert_eq!(default.code, "zh");
        assert!(default.is_default);
    }

    #[test]
    fn test_is_enabled() {
        let registry = LanguageRegistry::get();
        assert!(registry.is_enabled("zh"));
        assert!(registry.is_enabled("en"));
        assert!(!registry.is_enabled("fr"));
        assert!(!registry.is_enabled(""));
    }
}
