//! Desktop background backends.

use std::path::Path;

use anyhow::{Context, anyhow};

use crate::env_detect::{DesktopKind, detect_desktop};

mod gnome;
mod kde;
mod macos;

/// Set the desktop background on the primary display.
pub fn set(image_abs: &Path) -> anyhow::Result<()> {
    match detect_desktop() {
        DesktopKind::Gnome => gnome::set_wallpaper(image_abs).context("GNOME wallpaper"),
        DesktopKind::Kde => kde::set_wallpaper(image_abs).context("KDE wallpaper"),
        DesktopKind::MacOs => macos::set_wallpaper(image_abs).context("macOS wallpaper"),
        DesktopKind::Other => Err(anyhow!("no supported desktop detected")),
    }
}
