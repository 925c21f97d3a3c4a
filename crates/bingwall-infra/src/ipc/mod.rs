//! IPC server/client.

use std::path::{Path, PathBuf};

pub mod client;
pub mod server;

pub(crate) fn socket_path() -> PathBuf {
    if let Some(p) = std::env::var_os("BINGWALL_SOCKET_PATH") {
        return PathBuf::from(p);
    }
    if let Some(dir) = std::env::var_os("XDG_RUNTIME_DIR") {
        return Path::new(&dir).join("bingwall.sock");
    }
    // macOS has no XDG_RUNTIME_DIR.
    std::env::temp_dir().join("bingwall.sock")
}
