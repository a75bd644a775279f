//! Gallery page view state: category filter and lightbox.

use vows_core::{Category, ImageEntry};

/// Category filter on the gallery page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GalleryFilter {
    #[default]
    All,
    Only(Category),
}

impl GalleryFilter {
    pub const ALL: [GalleryFilter; 3] = [
        GalleryFilter::All,
        GalleryFilter::Only(Category::Desktop),
        GalleryFilter::Only(Category::Mobile),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    pub fn matches(self, entry: &ImageEntry) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => entry.category == category,
        }
    }
}

/// Index of the image open in the lightbox, if any.
///
/// Navigation wraps around the currently filtered list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Lightbox {
    open: Option<usize>,
}

impl Lightbox {
    pub fn current(self) -> Option<usize> {
        self.open
    }

    pub fn is_open(self) -> bool {
        self.open.is_some()
    }

    /// Open at `index`, ignored when it is out of range.
    pub fn open(&mut self, index: usize, len: usize) {
        if index < len {
            self.open = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn next(&mut self, len: usize) {
        self.step(len, 1);
    }

    pub fn prev(&mut self, len: usize) {
        self.step(len, len.saturating_sub(1));
    }

    fn step(&mut self, len: usize, by: usize) {
        self.open = match self.open {
            Some(_) if len == 0 => None,
            Some(i) => Some((i + by) % len),
            None => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vows_core::Gallery;

    fn gallery() -> Gallery {
        Gallery::from_listings(
            vec!["b.jpg".to_string(), "a.png".to_string()],
            vec!["m.webp".to_string()],
        )
    }

    #[test]
    fn test_filter_matches() {
        let gallery = gallery();
        let count = |filter: GalleryFilter| gallery.iter().filter(|e| filter.matches(e)).count();

        assert_eq!(count(GalleryFilter::All), 3);
        assert_eq!(count(GalleryFilter::Only(Category::Desktop)), 2);
        assert_eq!(count(GalleryFilter::Only(Category::Mobile)), 1);
    }

    #[test]
    fn test_filter_labels() {
        let labels: Vec<_> = GalleryFilter::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels[0], "All");
        assert_eq!(labels[1], Category::Desktop.label());
        assert_eq!(labels[2], Category::Mobile.label());
    }

    #[test]
    fn test_lightbox_wraps() {
        let mut lightbox = Lightbox::default();
        assert!(!lightbox.is_open());

        lightbox.open(2, 3);
        lightbox.next(3);
        assert_eq!(lightbox.current(), Some(0));
        lightbox.prev(3);
        assert_eq!(lightbox.current(), Some(2));

        lightbox.close();
        assert_eq!(lightbox.current(), None);
        lightbox.next(3);
        assert_eq!(lightbox.current(), None);
    }

    #[test]
    fn test_lightbox_rejects_out_of_range() {
        let mut lightbox = Lightbox::default();
        lightbox.open(3, 3);
        assert!(!lightbox.is_open());

        lightbox.open(0, 1);
        lightbox.next(0);
        assert!(!lightbox.is_open());
    }
}
