use std::path::Path;
use std::process::Command;

use anyhow::{Context, anyhow};

pub fn set_wallpaper(image_abs: &Path) -> anyhow::Result<()> {
    let path = image_abs
        .to_str()
        .ok_or_else(|| anyhow!("path is not valid UTF-8"))?;
    if path.contains('"') {
        return Err(anyhow!("path contains a double quote"));
    }

    // Desktop 1 is the primary display.
    let script =
        format!("tell application \"System Events\" to set picture of desktop 1 to POSIX file \"{path}\"");

    let output = Command::new("osascript")
        .arg("-e")
        .arg(script)
        .output()
        .context("run osascript")?;

    if !output.status.success() {
        return Err(anyhow!(
            "osascript failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        ));
    }

    Ok(())
}
