//! HTTP adapters: metadata fetch and streaming image download.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use tempfile::NamedTempFile;

use bingwall_core::error::RefreshError;

const TIMEOUT: Duration = Duration::from_secs(30);

/// A downloaded image, staged outside the scratch directory. The temp
/// file is deleted on drop unless persisted.
pub struct Download {
    pub file: NamedTempFile,
    pub suggested_name: Option<String>,
}

pub fn client() -> Result<Client, RefreshError> {
    Client::builder()
        .timeout(TIMEOUT)
        .build()
        .map_err(|err| RefreshError::Transport(format!("build http client: {err}")))
}

/// GET the metadata endpoint and return the raw body.
pub fn fetch_metadata(client: &Client, url: &str) -> Result<String, RefreshError> {
    let resp = client
        .get(url)
        .send()
        .map_err(|err| RefreshError::Transport(format!("GET {url}: {err}")))?;
    if !resp.status().is_success() {
        return Err(RefreshError::Transport(format!(
            "GET {url}: status {}",
            resp.status()
        )));
    }
    resp.text()
        .map_err(|err| RefreshError::Transport(format!("read body of {url}: {err}")))
}

/// GET the image and stream it into a temp file under `staging`.
///
/// The declared content type is checked before anything is written, so a
/// non-image response leaves the filesystem untouched.
pub fn download_image(
    client: &Client,
    url: &str,
    staging: &std::path::Path,
) -> Result<Download, RefreshError> {
    let mut resp = client
        .get(url)
        .send()
        .map_err(|err| RefreshError::Transport(format!("GET {url}: {err}")))?;
    if !resp.status().is_success() {
        return Err(RefreshError::Transport(format!(
            "GET {url}: status {}",
            resp.status()
        )));
    }

    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    if !content_type.starts_with("image") {
        return Err(RefreshError::ContentType(format!(
            "expected an image, got {content_type:?}"
        )));
    }

    let suggested_name = resp
        .headers()
        .get(CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .and_then(disposition_filename);

    let mut file = NamedTempFile::new_in(staging)
        .map_err(|err| RefreshError::Filesystem(format!("create staging file: {err}")))?;
    resp.copy_to(&mut file)
        .map_err(|err| RefreshError::Transport(format!("stream {url}: {err}")))?;

    Ok(Download {
        file,
        suggested_name,
    })
}

/// Extract `filename=...` from a Content-Disposition value, sanitized to
/// a bare file name.
fn disposition_filename(value: &str) -> Option<String> {
    let rest = value
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))?;
    let name = rest.trim().trim_matches('"');
    // Bare file name only; anything path-like is discarded.
    let name = std::path::Path::new(name).file_name()?.to_str()?;
    if name.is_empty() || name == ".." {
        return None;
    }
    Some(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_is_extracted_and_unquoted() {
        assert_eq!(
            disposition_filename("attachment; filename=\"today.jpg\""),
            Some("today.jpg".into())
        );
        assert_eq!(
            disposition_filename("inline; filename=plain.png"),
            Some("plain.png".into())
        );
    }

    #[test]
    fn path_components_are_stripped() {
        assert_eq!(
            disposition_filename("attachment; filename=\"../../etc/passwd\""),
            Some("passwd".into())
        );
    }

    #[test]
    fn missing_filename_yields_none() {
        assert_eq!(disposition_filename("attachment"), None);
        assert_eq!(disposition_filename("attachment; filename=\"\""), None);
    }
}
