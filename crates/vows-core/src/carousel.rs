//! Hero background carousel index.

use std::time::Duration;

/// Interval between background changes.
pub const CAROUSEL_INTERVAL: Duration = Duration::from_millis(5500);

/// Cycling index over a list whose length may change (e.g. when the
/// viewport switches between desktop and mobile image sets).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Current index, or `None` when there is nothing to show.
    pub fn index(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether a timer is worth running at all.
    pub fn should_cycle(&self) -> bool {
        self.len > 1
    }

    /// Move to the next item, wrapping to the start.
    pub fn advance(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.index = (self.index + 1) % self.len;
        Some(self.index)
    }

    /// Replace the list length. The index restarts when it would fall out of
    /// range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycles_and_wraps() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.index(), Some(0));
        assert_eq!(carousel.advance(), Some(1));
        assert_eq!(carousel.advance(), Some(2));
        assert_eq!(carousel.advance(), Some(0));
    }

    #[test]
    fn test_empty() {
        let mut carousel = Carousel::new(0);
        assert!(carousel.is_empty());
        assert_eq!(carousel.index(), None);
        assert_eq!(carousel.advance(), None);
        assert!(!carousel.should_cycle());
    }

    #[test]
    fn test_single_image_does_not_cycle() {
        let mut carousel = Carousel::new(1);
        assert!(!carousel.should_cycle());
        assert_eq!(carousel.advance(), Some(0));
    }

    #[test]
    fn test_shrinking_list_resets_index() {
        let mut carousel = Carousel::new(5);
        carousel.advance();
        carousel.advance();
        carousel.advance();
        carousel.set_len(2);
        assert_eq!(carousel.index(), Some(0));

        carousel.advance();
        carousel.set_len(4);
        assert_eq!(carousel.index(), Some(1));
    }
}
