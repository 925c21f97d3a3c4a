//! Persisted configuration (one value: the custom metadata-API URL).

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Built-in metadata endpoint: one image, index zero, fixed market.
pub const DEFAULT_ENDPOINT: &str =
    "https://www.bing.com/HPImageArchive.aspx?format=js&idx=0&n=1&mkt=en-US";

/// Origin prepended to the path-relative `url` field of archive responses.
pub const PROVIDER_ORIGIN: &str = "https://www.bing.com";

/// Used when the image response suggests no filename.
pub const FALLBACK_FILENAME: &str = "bing-wallpaper.jpg";

/// How often the daemon refreshes the wallpaper.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// User-supplied metadata-API URL. Empty means "use the built-in
    /// provider". Not validated at write time; a bad URL only surfaces
    /// as a transport error when a refresh uses it.
    #[serde(default)]
    pub custom_api: String,
}

impl Config {
    pub fn endpoint(&self) -> &str {
        let custom = self.custom_api.trim();
        if custom.is_empty() {
            DEFAULT_ENDPOINT
        } else {
            custom
        }
    }

    pub fn has_custom_api(&self) -> bool {
        !self.custom_api.trim().is_empty()
    }
}
