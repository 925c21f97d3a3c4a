use std::path::Path;
use std::process::Command;

use anyhow::{Context, anyhow};

fn file_uri(path: &Path) -> anyhow::Result<String> {
    // GNOME expects a file:// URI.
    let s = path
        .to_str()
        .ok_or_else(|| anyhow!("path is not valid UTF-8"))?;
    Ok(format!("file://{s}"))
}

fn gsettings_set(key: &str, value: &str) -> anyhow::Result<()> {
    let status = Command::new("gsettings")
        .arg("set")
        .arg("org.gnome.desktop.background")
        .arg(key)
        .arg(value)
        .status()
        .with_context(|| format!("run gsettings ({key})"))?;
    if !status.success() {
        return Err(anyhow!("gsettings failed ({key})"));
    }
    Ok(())
}

pub fn set_wallpaper(image_abs: &Path) -> anyhow::Result<()> {
    let uri = file_uri(image_abs)?;

    gsettings_set("picture-uri", &uri)?;

    // Best-effort: dark variant (GNOME 42+) and fill scaling.
    if let Err(err) = gsettings_set("picture-uri-dark", &uri) {
        tracing::debug!(error = %err, "picture-uri-dark not set");
    }
    if let Err(err) = gsettings_set("picture-options", "zoom") {
        tracing::debug!(error = %err, "picture-options not set");
    }

    Ok(())
}
