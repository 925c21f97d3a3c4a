//! The refresh pipeline: metadata fetch, image download, persist, apply.
//!
//! One forward-only sequence of fallible steps. Every failure aborts the
//! run and leaves the previous wallpaper (and any half-staged file)
//! untouched; nothing is ever written in place at the final path.

use std::fs;
use std::path::{Path, PathBuf};

use bingwall_core::config::{Config, FALLBACK_FILENAME};
use bingwall_core::error::RefreshError;
use bingwall_core::provider;
use bingwall_core::state::RunOutcome;

use crate::{http, scratch, wallpaper};

/// Seam for the platform's set-desktop-background call.
pub trait WallpaperSetter {
    fn set_wallpaper(&self, image_abs: &Path) -> anyhow::Result<()>;
}

/// Production setter: dispatch to the detected desktop backend.
pub struct DesktopSetter;

impl WallpaperSetter for DesktopSetter {
    fn set_wallpaper(&self, image_abs: &Path) -> anyhow::Result<()> {
        wallpaper::set(image_abs)
    }
}

#[derive(Debug)]
pub struct Applied {
    pub path: PathBuf,
}

pub fn run(cfg: &Config) -> Result<Applied, RefreshError> {
    run_with(cfg, &DesktopSetter)
}

pub fn run_with(cfg: &Config, setter: &dyn WallpaperSetter) -> Result<Applied, RefreshError> {
    let client = http::client()?;

    let endpoint = cfg.endpoint();
    tracing::info!(endpoint, "fetching image metadata");
    let body = http::fetch_metadata(&client, endpoint)?;

    let image_url = provider::resolve_image_url(&body)?;
    tracing::info!(url = %image_url, "downloading image");

    let dir = scratch::dir().map_err(|err| RefreshError::Filesystem(format!("{err:#}")))?;
    // Stage next to the scratch dir so the final step is a same-fs rename
    // and cleanup cannot eat the in-flight download.
    let staging = dir.parent().map(Path::to_path_buf).unwrap_or_else(|| dir.clone());
    fs::create_dir_all(&staging)
        .map_err(|err| RefreshError::Filesystem(format!("create {}: {err}", staging.display())))?;

    let download = http::download_image(&client, &image_url, &staging)?;

    fs::create_dir_all(&dir)
        .map_err(|err| RefreshError::Filesystem(format!("create {}: {err}", dir.display())))?;
    if let Err(err) = scratch::clear(&dir) {
        // Partial cleanup is tolerated; stale files just get superseded.
        tracing::warn!(error = %format!("{err:#}"), "scratch cleanup incomplete");
    }

    let name = download
        .suggested_name
        .unwrap_or_else(|| FALLBACK_FILENAME.to_string());
    let dest = dir.join(&name);
    download
        .file
        .persist(&dest)
        .map_err(|err| RefreshError::Filesystem(format!("persist {}: {err}", dest.display())))?;
    tracing::info!(path = %dest.display(), "image saved");

    setter
        .set_wallpaper(&dest)
        .map_err(|err| RefreshError::Platform(format!("{err:#}")))?;
    tracing::info!("wallpaper applied");

    Ok(Applied { path: dest })
}

/// Fire-and-forget variant for the daemon: never fails, only logs, and
/// reports what happened as an outcome for `STATUS`.
pub fn run_logged(cfg: &Config) -> RunOutcome {
    match run(cfg) {
        Ok(applied) => RunOutcome::Applied { path: applied.path },
        Err(err) => {
            tracing::error!(kind = err.kind(), error = %err, "refresh failed");
            RunOutcome::Failed {
                kind: err.kind(),
                message: err.to_string(),
            }
        }
    }
}
