//! Metadata-API response interpretation.
//!
//! Two shapes are understood, tried in order:
//! 1. the Bing image archive (`images[0].url`, path relative to the
//!    provider origin);
//! 2. a custom provider (`imageUrl`, absolute).
//!
//! A shape that does not match is "not applicable" and the next one is
//! tried; only when every shape has been exhausted is the response a
//! parse failure.

use serde::Deserialize;
use url::Url;

use crate::config::PROVIDER_ORIGIN;
use crate::error::RefreshError;

#[derive(Debug, Deserialize)]
struct ArchiveResponse {
    // Kept loose on purpose: entries past the first are never inspected,
    // so a malformed trailing entry must not reject the whole response.
    images: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct CustomResponse {
    #[serde(rename = "imageUrl")]
    image_url: String,
}

/// `None` means "this shape does not apply", never a hard error.
type Strategy = fn(&str) -> Option<String>;

const STRATEGIES: &[Strategy] = &[parse_archive, parse_custom];

fn parse_archive(body: &str) -> Option<String> {
    let resp: ArchiveResponse = serde_json::from_str(body).ok()?;
    // Only the first entry matters; the endpoint asks for n=1 anyway.
    let path = resp.images.first()?.get("url")?.as_str()?;
    Some(format!("{PROVIDER_ORIGIN}{path}"))
}

fn parse_custom(body: &str) -> Option<String> {
    let resp: CustomResponse = serde_json::from_str(body).ok()?;
    Url::parse(&resp.image_url).ok()?;
    Some(resp.image_url)
}

/// Resolve the absolute image URL from a metadata response body.
pub fn resolve_image_url(body: &str) -> Result<String, RefreshError> {
    for parse in STRATEGIES {
        if let Some(url) = parse(body) {
            return Ok(url);
        }
    }
    Err(RefreshError::Parse(
        "response matched no known provider shape".into(),
    ))
}
