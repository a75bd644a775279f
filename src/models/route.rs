//! Hash-based routing.

use crate::utils::dom;

/// Application routes for hash-based navigation.
/// URL format: `#/` for the invitation, `#/gallery` for the photo gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Route {
    /// Invitation page: #/ or empty hash
    #[default]
    Home,
    /// Photo gallery: #/gallery
    Gallery,
}

impl Route {
    /// Parse URL hash into Route. Unknown paths fall back to Home.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');

        match path {
            "gallery" => Self::Gallery,
            _ => Self::Home,
        }
    }

    /// Convert Route to URL hash
    pub fn to_hash(self) -> &'static str {
        match self {
            Self::Home => "#/",
            Self::Gallery => "#/gallery",
        }
    }

    /// Get current route from browser URL
    pub fn current() -> Self {
        Self::from_hash(&dom::get_hash())
    }

    /// Navigate to this route; the hashchange listener picks it up.
    pub fn push(self) {
        dom::set_hash(self.to_hash());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::from_hash(""), Route::Home);
        assert_eq!(Route::from_hash("#"), Route::Home);
        assert_eq!(Route::from_hash("#/"), Route::Home);
        assert_eq!(Route::from_hash("#/gallery"), Route::Gallery);
        assert_eq!(Route::from_hash("#/gallery/"), Route::Gallery);
        assert_eq!(Route::from_hash("#gallery"), Route::Gallery);
    }

    #[test]
    fn test_unknown_falls_back_home() {
        assert_eq!(Route::from_hash("#/main-content"), Route::Home);
        assert_eq!(Route::from_hash("#/gallery/extra"), Route::Home);
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(Route::Home.to_hash(), "#/");
        assert_eq!(Route::Gallery.to_hash(), "#/gallery");
        for route in [Route::Home, Route::Gallery] {
            assert_eq!(Route::from_hash(route.to_hash()), route);
        }
    }
}
