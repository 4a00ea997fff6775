//! Single-record JSON file storage.
//!
//! Each save writes the pretty-printed record to its own temporary file in the
//! target directory and renames it over the target, so readers see either the
//! old or the new record. Concurrent writers are not coordinated; the last
//! rename wins.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use contribution_settings_sdk::ContributionSettings;
use tempfile::NamedTempFile;
use tokio::fs;

use crate::domain::repo::SettingsRepository;

pub struct JsonFileSettingsRepository {
    path: PathBuf,
}

impl JsonFileSettingsRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

fn write_replacing(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(bytes)
        .and_then(|()| tmp.as_file().sync_all())
        .with_context(|| format!("failed to write {}", tmp.path().display()))?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("failed to replace {}", path.display()))?;
    Ok(())
}

#[async_trait]
impl SettingsRepository for JsonFileSettingsRepository {
    async fn load(&self) -> anyhow::Result<Option<ContributionSettings>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read {}", self.path.display()));
            }
        };

        let settings = serde_json::from_slice(&bytes)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;
        Ok(Some(settings))
    }

    async fn save(&self, settings: &ContributionSettings) -> anyhow::Result<()> {
        let bytes = serde_json::to_vec_pretty(settings).context("failed to encode settings")?;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_replacing(&path, &bytes))
            .await
            .context("settings writer task failed")??;

        tracing::debug!(path = %self.path.display(), "Settings record written");
        Ok(())
    }
}
