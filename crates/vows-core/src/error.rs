//! Error types for content loading.
//!
//! The gallery, reveal and audio paths degrade instead of failing, so content
//! validation is the only fallible surface in this crate.

use thiserror::Error;

/// Errors raised while parsing and validating the site content document.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("required field `{0}` is empty")]
    EmptyField(&'static str),
    #[error("palette color `{0}` is not a #RRGGBB hex value")]
    InvalidColor(String),
    #[error("snap-share link `{0}` is not an absolute http(s) URL")]
    InvalidLink(String),
}
