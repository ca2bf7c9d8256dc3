//! Draft persistence for the in-progress application
//!
//! The store holds one opaque serialized blob. Writes are best-effort:
//! the controller logs failures and keeps going, so implementations do
//! not need to be durable. File contents of attachments never land here.

use anyhow::{anyhow, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// Opaque key-value persistence for one working draft.
#[cfg_attr(test, mockall::automock)]
pub trait DraftStore: Send + Sync {
    /// The stored blob, if a draft exists.
    fn read(&self) -> Result<Option<String>>;

    fn write(&self, blob: &str) -> Result<()>;

    fn clear(&self) -> Result<()>;
}

impl<T: DraftStore + ?Sized> DraftStore for std::sync::Arc<T> {
    fn read(&self) -> Result<Option<String>> {
        (**self).read()
    }

    fn write(&self, blob: &str) -> Result<()> {
        (**self).write(blob)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}

/// File-backed store under the user's config directory.
pub struct JsonDraftStore {
    path: PathBuf,
}

impl JsonDraftStore {
    /// Store at the default per-user location.
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("ar", "renovarte", "sgr-onboarding")
            .ok_or_else(|| anyhow!("no home directory available for the draft store"))?;
        Ok(Self {
            path: dirs.config_dir().join("draft.json"),
        })
    }

    /// Store at an explicit path.
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl DraftStore for JsonDraftStore {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }

    fn write(&self, blob: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, blob)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// Ephemeral store for tests and embedders that want no persistence.
#[derive(Debug, Default)]
pub struct MemoryDraftStore {
    blob: Mutex<Option<String>>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing blob, as if a prior session had written it.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Mutex::new(Some(blob.into())),
        }
    }
}

impl DraftStore for MemoryDraftStore {
    fn read(&self) -> Result<Option<String>> {
        let blob = self
            .blob
            .lock()
            .map_err(|_| anyhow!("draft store lock poisoned"))?;
        Ok(blob.clone())
    }

    fn write(&self, blob: &str) -> Result<()> {
        let mut slot = self
            .blob
            .lock()
            .map_err(|_| anyhow!("draft store lock poisoned"))?;
        *slot = Some(blob.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut slot = self
            .blob
            .lock()
            .map_err(|_| anyhow!("draft store lock poisoned"))?;
        *slot = None;
        Ok(())
    }
}
