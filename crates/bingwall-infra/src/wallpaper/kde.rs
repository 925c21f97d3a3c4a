use std::path::Path;
use std::process::Command;

use anyhow::{Context, anyhow};

fn find_qdbus() -> Option<&'static str> {
    // Plasma 6 often ships qdbus6, Plasma 5 ships qdbus.
    for exe in ["qdbus6", "qdbus"] {
        if Command::new(exe).arg("--version").output().is_ok() {
            return Some(exe);
        }
    }
    None
}

pub fn set_wallpaper(image_abs: &Path) -> anyhow::Result<()> {
    let qdbus = find_qdbus().ok_or_else(|| anyhow!("qdbus not found (qdbus6/qdbus)"))?;
    let path = image_abs
        .to_str()
        .ok_or_else(|| anyhow!("path is not valid UTF-8"))?;

    // Standard PlasmaShell JS API; only the first (primary) desktop.
    let script = format!(
        "var d = desktops()[0];\n\
         d.wallpaperPlugin = 'org.kde.image';\n\
         d.currentConfigGroup = ['Wallpaper', 'org.kde.image', 'General'];\n\
         d.writeConfig('Image', 'file://{path}');\n"
    );

    let status = Command::new(qdbus)
        .arg("org.kde.plasmashell")
        .arg("/PlasmaShell")
        .arg("org.kde.PlasmaShell.evaluateScript")
        .arg(script)
        .status()
        .with_context(|| format!("run {qdbus} PlasmaShell.evaluateScript"))?;

    if !status.success() {
        return Err(anyhow!("qdbus wallpaper script failed"));
    }

    Ok(())
}
