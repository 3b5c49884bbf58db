//! Load-once dataset handle
//!
//! The source file is assumed static for the life of the process, so the
//! first successful load is kept and handed out to every caller. There is no
//! invalidation. A failed load is not cached; the next call tries again.

use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use domain_claims::ClaimDataset;

use crate::error::LoadError;
use crate::loader::load_dataset;

/// Explicit handle to the claims dataset at a fixed path
#[derive(Debug)]
pub struct DatasetCache {
    path: PathBuf,
    dataset: OnceCell<Arc<ClaimDataset>>,
}

impl DatasetCache {
    /// Creates an empty handle; nothing is read until the first access
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            dataset: OnceCell::new(),
        }
    }

    /// Path of the source CSV
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the dataset, reading the file on first use only
    pub fn get_or_load(&self) -> Result<Arc<ClaimDataset>, LoadError> {
        if let Some(dataset) = self.dataset.get() {
            debug!(path = %self.path.display(), "Dataset served from cache");
            return Ok(Arc::clone(dataset));
        }

        self.dataset
            .get_or_try_init(|| load_dataset(&self.path).map(Arc::new))
            .map(Arc::clone)
    }

    /// Returns the dataset if it has already been loaded
    pub fn get(&self) -> Option<Arc<ClaimDataset>> {
        self.dataset.get().cloned()
    }

    /// True once a load has succeeded
    pub fn is_loaded(&self) -> bool {
        self.dataset.get().is_some()
    }
}
