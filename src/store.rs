//! Persisted language preference.
//!
//! A single language code stored under a fixed key in a host-provided
//! key/value store that survives process restarts. Everything here is
//! best-effort: a missing store yields no preference, and a write failure
//! is logged and otherwise ignored by callers.

use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};

/// Process-external storage for the selected language code.
pub trait PreferenceStore: Send + Sync {
    /// The previously persisted language code, if any. The caller validates
    /// it against the registry; the store does not.
    fn load(&self) -> Option<String>;

    /// Persist a language code, replacing any previous value.
    fn save(&self, code: &str) -> Result<()>;
}

/// File-backed store: the code is the entire file contents.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PreferenceStore for FileStore {
    fn load(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let code = raw.trim();
        if code.is_empty() {
            None
        } else {
            Some(code.to_string())
        }
    }

    fn save(&self, code: &str) -> Result<()> {
        std::fs::write(&self.path, code)
            .with_context(|| format!("Failed to write language preference to {:?}", self.path))
    }
}

/// In-memory store for tests and hosts without persistent storage. Can be
/// made read-only to model a sandbox that denies writes.
pub struct MemoryStore {
    value: Mutex<Option<String>>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            value: Mutex::new(None),
            read_only: false,
        }
    }

    pub fn with_value(code: &str) -> Self {
        Self {
            value: Mutex::new(Some(code.to_string())),
            read_only: false,
        }
    }

    pub fn read_only() -> Self {
        Self {
            value: Mutex::new(None),
            read_only: true,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.lock().ok()?.clone()
    }

    fn save(&self, code: &str) -> Result<()> {
        if self.read_only {
            anyhow::bail!("Preference store is read-only");
        }
        if let Ok(mut value) = self.value.lock() {
            *value = Some(code.to_string());
        }
        Ok(())
    }
}
