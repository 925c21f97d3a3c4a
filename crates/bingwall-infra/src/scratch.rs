//! Scratch directory for the downloaded wallpaper.
//!
//! Wiped on every run; at most one artifact lives here at a time.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};

fn cache_home() -> anyhow::Result<PathBuf> {
    if let Some(v) = std::env::var_os("XDG_CACHE_HOME") {
        return Ok(PathBuf::from(v));
    }
    let home = std::env::var_os("HOME").ok_or_else(|| anyhow!("HOME not set"))?;
    Ok(PathBuf::from(home).join(".cache"))
}

pub fn dir() -> anyhow::Result<PathBuf> {
    if let Some(p) = std::env::var_os("BINGWALL_SCRATCH_DIR") {
        return Ok(PathBuf::from(p));
    }
    Ok(cache_home()?.join("bingwall/current"))
}

/// Remove every entry under `dir`. Best-effort: individual failures are
/// logged and skipped, the run continues.
pub fn clear(dir: &Path) -> anyhow::Result<()> {
    let entries = fs::read_dir(dir).with_context(|| format!("read {}", dir.display()))?;
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable scratch entry");
                continue;
            }
        };
        let path = entry.path();
        let removed = if path.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        if let Err(err) = removed {
            tracing::warn!(path = %path.display(), error = %err, "failed to remove stale entry");
        }
    }
    Ok(())
}
