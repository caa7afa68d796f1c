//! ContentResolver: the single source of truth for the selected language
//! and the resolved content document.
//!
//! The resolver seeds its state synchronously from compiled-in defaults, so
//! consumers always have a complete document before any network activity.
//! Every language change updates the language immediately, persists the
//! preference and syncs the address best-effort, then fetches the remote
//! bundle and merges it onto the current document. No operation here ever
//! returns an error to the caller; failures recover locally to a
//! known-good document and are logged.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Config;
use crate::content::{merge_overlay, ContentDocument};
use crate::i18n::Language;
use crate::navigator::{self, Navigator};
use crate::store::PreferenceStore;

/// The resolver's published state: what every consumer reads.
#[derive(Debug, Clone)]
pub struct ResolvedState {
    pub language: Language,
    pub content: ContentDocument,
    /// True while a content-bundle fetch is outstanding.
    pub loading: bool,
}

pub struct ContentResolver {
    client: reqwest::Client,
    config: Config,
    store: Box<dyn PreferenceStore>,
    navigator: Box<dyn Navigator>,
    state: RwLock<ResolvedState>,
    // Monotonic token per change-language request. A fetch result is only
    // applied while its token is still the latest, so a stale fetch can
    // never overwrite a newer request's content.
    request_seq: AtomicU64,
}

impl ContentResolver {
    /// Build a resolver seeded with the default language and the compiled-in
    /// default document. Purely synchronous; call [`resolve_initial`] (or
    /// spawn it) to kick off the first content fetch.
    ///
    /// [`resolve_initial`]: ContentResolver::resolve_initial
    pub fn new(
        client: reqwest::Client,
        config: Config,
        store: Box<dyn PreferenceStore>,
        navigator: Box<dyn Navigator>,
    ) -> Self {
        Self {
            client,
            config,
            store,
            navigator,
            state: RwLock::new(ResolvedState {
                language: Language::default_language(),
                content: ContentDocument::compiled_default(),
                loading: false,
            }),
            request_seq: AtomicU64::new(0),
        }
    }

    /// The currently selected language.
    pub fn language(&self) -> Language {
        self.read_state().language
    }

    /// A snapshot of the resolved content document.
    pub fn content(&self) -> ContentDocument {
        self.read_state().content.clone()
    }

    /// True while a content-bundle fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.read_state().loading
    }

    /// A snapshot of the full resolved state.
    pub fn snapshot(&self) -> ResolvedState {
        self.read_state().clone()
    }

    /// Determine the initial language. Priority order: a valid `lang` query
    /// parameter on the current address, then a valid persisted preference,
    /// then the compiled-in default. Never fails.
    pub fn initial_language(&self) -> Language {
        if let Some(url) = self.navigator.current_url() {
            if let Some(code) = navigator::lang_param(&url) {
                match Language::from_code(&code) {
                    Ok(lang) => return lang,
                    Err(e) => debug!("Ignoring address language parameter: {}", e),
                }
            }
        }

        if let Some(code) = self.store.load() {
            match Language::from_code(&code) {
                Ok(lang) => return lang,
                Err(e) => debug!("Ignoring persisted language preference: {}", e),
            }
        }

        Language::default_language()
    }

    /// Run the initial resolution: pick the initial language and apply it.
    /// First paint never waits on this; callers spawn it.
    pub async fn resolve_initial(&self) {
        let target = self.initial_language();
        self.set_language(target).await;
    }

    /// Switch to the other locale.
    pub async fn toggle_language(&self) {
        let target = self.language().toggled();
        self.set_language(target).await;
    }

    /// Change the selected language and resolve its content.
    ///
    /// The language is updated immediately, before the fetch begins, so the
    /// UI reflects the selection even while content is in flight. The
    /// preference persist and address sync are best-effort. On a failed or
    /// malformed fetch the current document is kept, unless the target is
    /// the default language, in which case the document resets to the
    /// compiled-in default so the baseline never shows another language's
    /// stale content.
    pub async fn set_language(&self, target: Language) {
        let token = self.request_seq.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut state = self.write_state();
            state.loading = true;
            state.language = target;
        }

        if let Err(e) = self.store.save(target.code()) {
            warn!("Failed to persist language preference: {:#}", e);
        }
        self.sync_address(target);

        let fetched = self.fetch_bundle(target).await;

        let mut state = self.write_state();
        if self.request_seq.load(Ordering::SeqCst) != token {
            // A newer request owns the state now, including the loading flag.
            debug!("Discarding stale content fetch for '{}'", target);
            return;
        }

        match fetched {
            Ok(overlay) => match merge_overlay(&state.content, &overlay) {
                Some(merged) => state.content = merged,
                None => {
                    warn!("Malformed content bundle for '{}'", target);
                    if target.is_default() {
                        state.content = ContentDocument::compiled_default();
                    }
                }
            },
            Err(e) => {
                warn!("Failed to fetch content for '{}': {:#}", target, e);
                if target.is_default() {
                    state.content = ContentDocument::compiled_default();
                }
            }
        }

        state.loading = false;
    }

    /// Keep the address's `lang` parameter in sync with the selection.
    /// Hosts without an address or that forbid mutation are tolerated.
    fn sync_address(&self, target: Language) {
        let Some(current) = self.navigator.current_url() else {
            return;
        };
        let updated = navigator::with_lang_param(&current, target.code());
        if let Err(e) = self.navigator.replace_url(updated) {
            debug!("Skipped address update due to environment restrictions: {:#}", e);
        }
    }

    async fn fetch_bundle(&self, target: Language) -> Result<Value> {
        let url = self.config.content_url(target);
        debug!("Fetching content bundle from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send content bundle request")?;

        if !response.status().is_success() {
            anyhow::bail!("Content bundle request failed ({})", response.status());
        }

        response
            .json::<Value>()
            .await
            .context("Failed to parse content bundle")
    }

    fn read_state(&self) -> RwLockReadGuard<'_, ResolvedState> {
        self.state.read().expect("resolver state lock poisoned")
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, ResolvedState> {
        self.state.write().expect("resolver state lock poisoned")
    }
}
