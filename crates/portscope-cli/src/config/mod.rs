//! API key storage.

use anyhow::{Context as _, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// The stored API key: one trimmed token in a plain-text file.
#[derive(Debug, Clone)]
pub struct KeyFile {
    path: PathBuf,
}

impl KeyFile {
    /// Key file at the platform config location.
    ///
    /// `PORTSCOPE_CONFIG_DIR` overrides the platform directory when set.
    pub fn default_location() -> Result<Self> {
        if let Ok(dir) = std::env::var("PORTSCOPE_CONFIG_DIR") {
            return Ok(Self {
                path: PathBuf::from(dir).join("api_key"),
            });
        }

        let dirs = ProjectDirs::from("io", "portscope", "portscope")
            .ok_or_else(|| anyhow::anyhow!("could not determine config directory"))?;

        Ok(Self {
            path: dirs.config_dir().join("api_key"),
        })
    }

    /// Key file at an explicit path.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored key, trimming surrounding whitespace.
    pub fn load(&self) -> Result<String> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("could not read API key from {}", self.path.display()))?;

        let key = content.trim().to_string();
        if key.is_empty() {
            anyhow::bail!("the key file {} is empty", self.path.display());
        }

        Ok(key)
    }

    /// Write the key, creating the config directory if needed.
    ///
    /// The file is restricted to the owning user on Unix.
    pub fn save(&self, key: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("could not create {}", parent.display()))?;
        }

        std::fs::write(&self.path, format!("{key}\n"))
            .with_context(|| format!("could not write {}", self.path.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }
}
