//! Navigable-address handling.
//!
//! The host environment exposes a current address whose `lang` query
//! parameter takes priority on initial resolution, and the resolver keeps
//! the parameter synchronized with the current language. Some hosts forbid
//! address mutation; `replace_url` is allowed to fail and callers swallow
//! the error.

use std::sync::Mutex;

use anyhow::Result;
use reqwest::Url;

/// Name of the query parameter carrying the language code.
pub const LANG_PARAM: &str = "lang";

/// Access to the host's current navigable address.
pub trait Navigator: Send + Sync {
    /// The address the process is currently showing, if the host has one.
    fn current_url(&self) -> Option<Url>;

    /// Replace the current address without a reload. Hosts that forbid
    /// address mutation return an error.
    fn replace_url(&self, url: Url) -> Result<()>;
}

/// Read the `lang` query parameter off an address.
pub fn lang_param(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == LANG_PARAM)
        .map(|(_, value)| value.into_owned())
}

/// Return a copy of the address with the `lang` query parameter set,
/// replacing any existing occurrence and preserving the other parameters.
pub fn with_lang_param(url: &Url, code: &str) -> Url {
    let others: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != LANG_PARAM)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut updated = url.clone();
    {
        let mut pairs = updated.query_pairs_mut();
        pairs.clear();
        for (key, value) in &others {
            pairs.append_pair(key, value);
        }
        pairs.append_pair(LANG_PARAM, code);
    }
    updated
}

/// In-process navigator holding a mutable address. Construct it read-only
/// to model hosts that deny address mutation.
pub struct MemoryNavigator {
    url: Mutex<Option<Url>>,
    read_only: bool,
}

impl MemoryNavigator {
    /// A navigator with no current address (headless host).
    pub fn headless() -> Self {
        Self {
            url: Mutex::new(None),
            read_only: false,
        }
    }

    pub fn with_url(url: Url) -> Self {
        Self {
            url: Mutex::new(Some(url)),
            read_only: false,
        }
    }

    pub fn read_only(url: Url) -> Self {
        Self {
            url: Mutex::new(Some(url)),
            read_only: true,
        }
    }

    /// Parse an address string into a navigator; an unparsable address
    /// behaves like a headless host.
    pub fn from_address(address: Option<&str>) -> Self {
        match address.and_then(|raw| Url::parse(raw).ok()) {
            Some(url) => Self::with_url(url),
            None => Self::headless(),
        }
    }
}

impl Navigator for MemoryNavigator {
    fn current_url(&self) -> Option<Url> {
        self.url.lock().ok()?.clone()
    }

    fn replace_url(&self, url: Url) -> Result<()> {
        if self.read_only {
            anyhow::bail!("Host forbids address mutation");
        }
        if let Ok(mut current) = self.url.lock() {
            *current = Some(url);
        }
        Ok(())
    }
}
