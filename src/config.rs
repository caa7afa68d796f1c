use crate::i18n::Language;
use anyhow::Result;

/// Default location of the public assets repository.
const DEFAULT_ASSET_BASE_URL: &str =
    "https://raw.githubusercontent.com/floatingsnowflake/MyHomepageAssets/main/public";

#[derive(Debug, Clone)]
pub struct Config {
    // Remote content
    pub asset_base_url: String,

    // Persisted language preference
    pub lang_store_path: String,

    // Address the process was opened with (carries the ?lang= parameter)
    pub initial_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            asset_base_url: std::env::var("ASSET_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_ASSET_BASE_URL.to_string()),

            lang_store_path: std::env::var("LANG_STORE_PATH")
                .unwrap_or_else(|_| ".portfolio_lang".to_string()),

            initial_url: std::env::var("INITIAL_URL").ok(),
        })
    }

    /// URL of the content bundle for a language, e.g. `.../data/content_en.json`.
    pub fn content_url(&self, lang: Language) -> String {
        format!("{}/data/content_{}.json", self.asset_base_url, lang.code())
    }

    /// URL of a fixed (language-independent) data file, e.g. `.../data/interests.json`.
    pub fn data_url(&self, name: &str) -> String {
        format!("{}/data/{}.json", self.asset_base_url, name)
    }

    /// URL of a language-suffixed data file, e.g. `.../data/skills_en.json`.
    pub fn localized_data_url(&self, name: &str, lang: Language) -> String {
        format!("{}/data/{}_{}.json", self.asset_base_url, name, lang.code())
    }
}
