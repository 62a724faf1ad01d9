//! Obsidian vault directory layout.
//!
//! All notes live under `03 - Content/Write Ups/<platform>/<target>/`,
//! with numbered stage directories and the enumeration logs split by
//! protocol. `ports/tcp` is created but never populated here; the
//! per-port "Enumeration Notes" links point into it for manual authorship.

use crate::cli::Platform;
use crate::models::Protocol;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolved paths for one target's write-up tree.
#[derive(Debug, Clone)]
pub struct VaultLayout {
    target_dir: PathBuf,
    /// Vault-relative prefix used inside wikilinks and transclusions.
    note_prefix: String,
}

impl VaultLayout {
    pub fn new(vault_dir: &Path, platform: Platform, target: &str) -> Self {
        let note_prefix = format!("03 - Content/Write Ups/{}/{}", platform, target);
        let target_dir = vault_dir
            .join("03 - Content")
            .join("Write Ups")
            .join(platform.as_str())
            .join(target);

        Self {
            target_dir,
            note_prefix,
        }
    }

    /// Create the full stage layout, tolerating pre-existing directories.
    pub fn create_directories(&self) -> Result<()> {
        let dirs = [
            self.enumeration_dir().join("logs").join("tcp"),
            self.enumeration_dir().join("logs").join("udp"),
            self.enumeration_dir().join("ports").join("tcp"),
            self.target_dir.join("1 - Exploitation"),
            self.target_dir.join("2 - Escalation"),
            self.target_dir.join("3 - Loot"),
        ];

        for dir in &dirs {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory {}", dir.display()))?;
        }

        debug!("Vault layout ready under {}", self.target_dir.display());
        Ok(())
    }

    pub fn enumeration_dir(&self) -> PathBuf {
        self.target_dir.join("0 - Enumeration")
    }

    /// Filesystem path of a per-port log note.
    pub fn log_path(&self, protocol: Protocol, port: u16) -> PathBuf {
        self.enumeration_dir()
            .join("logs")
            .join(protocol.as_str())
            .join(format!("{}.md", port))
    }

    /// Filesystem path of the master summary document.
    pub fn master_path(&self) -> PathBuf {
        self.enumeration_dir().join("Enumeration - Master.md")
    }

    /// Vault-relative prefix (forward slashes) for wikilinks.
    pub fn note_prefix(&self) -> &str {
        &self.note_prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_layout_paths() {
        let layout = VaultLayout::new(Path::new("/vault"), Platform::Htb, "Forest");

        assert_eq!(
            layout.note_prefix(),
            "03 - Content/Write Ups/HTB/Forest"
        );
        assert_eq!(
            layout.log_path(Protocol::Tcp, 445),
            Path::new("/vault/03 - Content/Write Ups/HTB/Forest/0 - Enumeration/logs/tcp/445.md")
        );
        assert_eq!(
            layout.master_path(),
            Path::new(
                "/vault/03 - Content/Write Ups/HTB/Forest/0 - Enumeration/Enumeration - Master.md"
            )
        );
    }

    #[test]
    fn test_create_directories() {
        let vault = TempDir::new().unwrap();
        let layout = VaultLayout::new(vault.path(), Platform::Pg, "Nibbles");

        layout.create_directories().unwrap();

        let base = vault
            .path()
            .join("03 - Content/Write Ups/PG/Nibbles");
        assert!(base.join("0 - Enumeration/logs/tcp").is_dir());
        assert!(base.join("0 - Enumeration/logs/udp").is_dir());
        assert!(base.join("0 - Enumeration/ports/tcp").is_dir());
        assert!(base.join("1 - Exploitation").is_dir());
        assert!(base.join("2 - Escalation").is_dir());
        assert!(base.join("3 - Loot").is_dir());

        // Idempotent on rerun.
        layout.create_directories().unwrap();
    }
}
