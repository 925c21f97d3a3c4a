//! Refresh failure taxonomy.
//!
//! The pipeline never escalates these past the shell; they exist so the
//! daemon can log the step that failed and report it over `STATUS`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RefreshError {
    /// Network-level failure on either HTTP round-trip.
    #[error("transport: {0}")]
    Transport(String),

    /// Response matched neither known provider shape.
    #[error("parse: {0}")]
    Parse(String),

    /// Image response did not declare an image media type.
    #[error("content-type: {0}")]
    ContentType(String),

    /// Scratch-directory or persist failure.
    #[error("filesystem: {0}")]
    Filesystem(String),

    /// No supported desktop, or the background-setting call was rejected.
    #[error("platform: {0}")]
    Platform(String),
}

impl RefreshError {
    /// Short stable tag, used in status lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Parse(_) => "parse",
            Self::ContentType(_) => "content-type",
            Self::Filesystem(_) => "filesystem",
            Self::Platform(_) => "platform",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_stable_tags() {
        assert_eq!(RefreshError::Transport("x".into()).kind(), "transport");
        assert_eq!(RefreshError::Parse("x".into()).kind(), "parse");
        assert_eq!(
            RefreshError::ContentType("x".into()).kind(),
            "content-type"
        );
    }
}
