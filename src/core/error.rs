//! Browser-side error types.
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`ClipboardError`] - Clipboard writes
//! - [`AudioError`] - Media element playback
//!
//! None of these reach the page; callers log them and carry on.

use std::fmt;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// Browser window not available
    NoWindow,
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    HttpError(u16),
    /// Failed to read response body
    ResponseReadFailed,
    /// Invalid response content (not text)
    InvalidContent,
    /// JSON parsing error
    JsonParseError(String),
    /// Request timed out
    Timeout,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::HttpError(status) => write!(f, "HTTP error: {}", status),
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::InvalidContent => write!(f, "Invalid response content"),
            Self::JsonParseError(msg) => write!(f, "JSON parse error: {}", msg),
            Self::Timeout => write!(f, "Request timed out"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Clipboard write errors.
#[derive(Debug, Clone)]
pub enum ClipboardError {
    /// Browser window not available
    NoWindow,
    /// The browser refused the write (permissions, insecure context)
    WriteRejected(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::WriteRejected(msg) => write!(f, "Failed to copy text: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Media playback errors.
#[derive(Debug, Clone)]
pub enum AudioError {
    /// `play()` threw synchronously
    PlayUnavailable(String),
    /// The play promise rejected (autoplay policy, decode error)
    PlayRejected(String),
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayUnavailable(msg) => write!(f, "Playback unavailable: {}", msg),
            Self::PlayRejected(msg) => write!(f, "Playback rejected: {}", msg),
        }
    }
}

impl std::error::Error for AudioError {}

/// Best-effort message from a thrown JS value.
pub fn js_error_message(value: &wasm_bindgen::JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    js_sys::Reflect::get(value, &"message".into())
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| "Unknown error".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(FetchError::HttpError(404).to_string(), "HTTP error: 404");
        assert_eq!(FetchError::Timeout.to_string(), "Request timed out");
        assert_eq!(
            ClipboardError::WriteRejected("denied".into()).to_string(),
            "Failed to copy text: denied"
        );
        assert_eq!(
            AudioError::PlayRejected("NotAllowedError".into()).to_string(),
            "Playback rejected: NotAllowedError"
        );
    }
}
