// src/core/fs_ops.rs
//! Scratch-file handling for uploaded documents

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{trace, warn};

pub struct FsOps;

impl FsOps {
    /// Fresh, collision-free path in the system temp dir for one upload.
    pub fn upload_temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("cv_upload_{}", uuid::Uuid::new_v4()))
    }

    /// Read a persisted upload into memory, then delete it whatever the read outcome.
    pub async fn take_file(path: &Path) -> Result<Vec<u8>> {
        let bytes = fs::read(path)
            .await
            .with_context(|| format!("Failed to read uploaded file: {}", path.display()));
        Self::remove_quietly(path).await;
        bytes
    }

    /// Best-effort removal; a missing file is not an error.
    pub async fn remove_quietly(path: &Path) {
        match fs::remove_file(path).await {
            Ok(()) => trace!("Removed scratch file: {}", path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to remove scratch file {}: {}", path.display(), e),
        }
    }
}
