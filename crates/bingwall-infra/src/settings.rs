//! Config persistence (`config.json` under the XDG config dir).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};

use bingwall_core::config::Config;

fn config_home() -> anyhow::Result<PathBuf> {
    if let Some(v) = std::env::var_os("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(v));
    }
    let home = std::env::var_os("HOME").ok_or_else(|| anyhow!("HOME not set"))?;
    Ok(PathBuf::from(home).join(".config"))
}

pub fn config_path() -> anyhow::Result<PathBuf> {
    if let Some(p) = std::env::var_os("BINGWALL_CONFIG_PATH") {
        return Ok(PathBuf::from(p));
    }
    Ok(config_home()?.join("bingwall/config.json"))
}

fn atomic_write(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    let dir = path.parent().ok_or_else(|| anyhow!("invalid path"))?;
    fs::create_dir_all(dir).with_context(|| format!("create dir {}", dir.display()))?;

    let tmp = dir.join(format!(
        ".{}.tmp",
        path.file_name().and_then(|s| s.to_str()).unwrap_or("bingwall")
    ));
    fs::write(&tmp, bytes).with_context(|| format!("write {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

/// Missing file means defaults; a file that exists must parse.
pub fn load() -> anyhow::Result<Config> {
    let path = config_path()?;
    let text = match fs::read_to_string(&path) {
        Ok(t) => t,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(err) => return Err(err).with_context(|| format!("read {}", path.display())),
    };
    serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))
}

pub fn store(cfg: &Config) -> anyhow::Result<()> {
    let path = config_path()?;
    let json = serde_json::to_string_pretty(cfg).context("serialize config")?;
    atomic_write(&path, json.as_bytes())
}
