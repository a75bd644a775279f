//! External link validation.
//!
//! Buttons that leave the site (maps, photo drive) only open URLs whose host
//! is on [`ALLOWED_EXTERNAL_DOMAINS`].

use url::Url;

use crate::config::ALLOWED_EXTERNAL_DOMAINS;

/// Result of URL validation
#[derive(Debug, Clone, PartialEq)]
pub enum UrlValidation {
    /// URL is safe to open
    Valid(String),
    /// URL is invalid or unsafe
    Invalid(UrlValidationError),
}

/// Errors that can occur during URL validation.
#[derive(Debug, Clone, PartialEq)]
pub enum UrlValidationError {
    /// URL is empty
    Empty,
    /// URL could not be parsed
    Malformed,
    /// Scheme is not http or https
    InvalidProtocol,
    /// URL has no host
    NoHost,
    /// Domain is not in the allowed list
    DomainNotAllowed(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "URL is empty"),
            Self::Malformed => write!(f, "URL is malformed"),
            Self::InvalidProtocol => write!(f, "URL must use http or https"),
            Self::NoHost => write!(f, "URL has no host"),
            Self::DomainNotAllowed(domain) => write!(f, "Domain '{}' is not allowed", domain),
        }
    }
}

/// Validate a URL before opening it in a new browsing context.
pub fn validate_external_url(raw: &str) -> UrlValidation {
    let raw = raw.trim();
    if raw.is_empty() {
        return UrlValidation::Invalid(UrlValidationError::Empty);
    }

    let Ok(url) = Url::parse(raw) else {
        return UrlValidation::Invalid(UrlValidationError::Malformed);
    };

    if !matches!(url.scheme(), "http" | "https") {
        return UrlValidation::Invalid(UrlValidationError::InvalidProtocol);
    }

    let Some(host) = url.host_str().filter(|h| !h.is_empty()) else {
        return UrlValidation::Invalid(UrlValidationError::NoHost);
    };

    let host = host.trim_start_matches("www.").to_ascii_lowercase();
    if !is_domain_allowed(&host) {
        return UrlValidation::Invalid(UrlValidationError::DomainNotAllowed(host));
    }

    UrlValidation::Valid(url.into())
}

/// Exact match or subdomain of an allowed domain.
fn is_domain_allowed(host: &str) -> bool {
    ALLOWED_EXTERNAL_DOMAINS.iter().any(|allowed| {
        host == *allowed
            || host
                .strip_suffix(allowed)
                .is_some_and(|prefix| prefix.ends_with('.'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_and_drive_allowed() {
        let maps = vows_core::content::maps_link("Parang Road, San Jose Del Monte");
        assert!(matches!(validate_external_url(&maps), UrlValidation::Valid(_)));
        assert!(matches!(
            validate_external_url(&vows_core::site().snap_share.drive_link),
            UrlValidation::Valid(_)
        ));
        assert!(matches!(
            validate_external_url("https://www.maps.google.com/?q=x"),
            UrlValidation::Valid(_)
        ));
    }

    #[test]
    fn test_invalid_urls() {
        assert_eq!(
            validate_external_url("  "),
            UrlValidation::Invalid(UrlValidationError::Empty)
        );
        assert_eq!(
            validate_external_url("not a url"),
            UrlValidation::Invalid(UrlValidationError::Malformed)
        );
        assert_eq!(
            validate_external_url("javascript:alert(1)"),
            UrlValidation::Invalid(UrlValidationError::InvalidProtocol)
        );
        assert_eq!(
            validate_external_url("https://evil.com/maps.google.com"),
            UrlValidation::Invalid(UrlValidationError::DomainNotAllowed(
                "evil.com".to_string()
            ))
        );
    }

    #[test]
    fn test_lookalike_domain_rejected() {
        assert!(matches!(
            validate_external_url("https://notmaps.google.com.evil.io/"),
            UrlValidation::Invalid(UrlValidationError::DomainNotAllowed(_))
        ));
        assert!(matches!(
            validate_external_url("https://xmaps.google.com/"),
            UrlValidation::Invalid(UrlValidationError::DomainNotAllowed(_))
        ));
    }

    #[test]
    fn test_domain_matching() {
        assert!(is_domain_allowed("maps.google.com"));
        assert!(is_domain_allowed("eu.drive.google.com"));
        assert!(!is_domain_allowed("google.com"));
    }
}
