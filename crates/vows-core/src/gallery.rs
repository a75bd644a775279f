//! Gallery assembly from the public asset directories.
//!
//! Two fixed directories under the public root hold the photos:
//!
//! ```text
//! public/
//! ├── desktop-background/   # Category::Desktop
//! │   ├── a.jpg
//! │   └── b.PNG
//! └── mobile-background/    # Category::Mobile
//!     └── couple (1).JPG
//! ```
//!
//! Each directory is listed, filtered to regular files with an image
//! extension, sorted by name and tagged with its category. Desktop entries
//! always precede mobile entries. A missing or unreadable directory yields an
//! empty listing for that category; assembly itself never fails.

use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Allow-listed image extensions (compared case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// Which background set an image belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Desktop,
    Mobile,
}

impl Category {
    /// Categories in output order.
    pub const ALL: [Category; 2] = [Category::Desktop, Category::Mobile];

    /// Logical directory name under the public root.
    pub fn dir(self) -> &'static str {
        match self {
            Self::Desktop => "desktop-background",
            Self::Mobile => "mobile-background",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Desktop => "Desktop",
            Self::Mobile => "Mobile",
        }
    }
}

/// A servable image path tagged with its category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageEntry {
    /// URL path, e.g. `/desktop-background/a.jpg`
    #[serde(rename = "src")]
    pub path: String,
    pub category: Category,
}

impl ImageEntry {
    fn new(category: Category, name: &str) -> Self {
        Self {
            path: format!("/{}/{}", category.dir(), name),
            category,
        }
    }

    /// File name portion of the path.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// Ordered gallery: all desktop entries, then all mobile entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gallery {
    entries: Vec<ImageEntry>,
}

impl Gallery {
    /// List both directories under `public_root` and assemble the gallery.
    pub fn assemble(public_root: &Path) -> Self {
        let desktop = list_images(public_root, Category::Desktop);
        let mobile = list_images(public_root, Category::Mobile);
        Self::from_sorted(desktop, mobile)
    }

    /// Assemble from raw directory listings (unfiltered, unsorted names).
    pub fn from_listings<D, M>(desktop: D, mobile: M) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        M: IntoIterator,
        M::Item: Into<String>,
    {
        Self::from_sorted(
            select_images(desktop.into_iter().map(Into::into)),
            select_images(mobile.into_iter().map(Into::into)),
        )
    }

    fn from_sorted(desktop: Vec<String>, mobile: Vec<String>) -> Self {
        let entries = desktop
            .iter()
            .map(|name| ImageEntry::new(Category::Desktop, name))
            .chain(mobile.iter().map(|name| ImageEntry::new(Category::Mobile, name)))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[ImageEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries of one category, in gallery order.
    pub fn of(&self, category: Category) -> impl Iterator<Item = &ImageEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    /// Number of entries in a category.
    pub fn count(&self, category: Category) -> usize {
        self.of(category).count()
    }
}

impl<'a> IntoIterator for &'a Gallery {
    type Item = &'a ImageEntry;
    type IntoIter = std::slice::Iter<'a, ImageEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Sorted image file names for one category. Never fails.
pub fn list_images(public_root: &Path, category: Category) -> Vec<String> {
    let dir = public_root.join(category.dir());
    match read_file_names(&dir) {
        Ok(names) => select_images(names),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(dir = %dir.display(), "gallery directory missing");
            Vec::new()
        }
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "gallery directory unreadable");
            Vec::new()
        }
    }
}

/// Keep image names and sort them.
pub fn select_images(names: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut images: Vec<String> = names.into_iter().filter(|n| is_image_name(n)).collect();
    images.sort_by(|a, b| compare_names(a, b));
    images
}

/// Whether a file name ends in an allow-listed image extension.
pub fn is_image_name(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => IMAGE_EXTENSIONS
            .iter()
            .any(|allowed| ext.eq_ignore_ascii_case(allowed)),
        None => false,
    }
}

/// Collation-style ordering of file names.
///
/// Levels, in order: base letters (accents and case ignored), accents,
/// case (lowercase first), then raw bytes so the order is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let (a_lower, b_lower) = (decomposed_lowercase(a), decomposed_lowercase(b));
    base_letters(&a_lower)
        .cmp(base_letters(&b_lower))
        .then_with(|| a_lower.cmp(&b_lower))
        .then_with(|| case_levels(a).cmp(case_levels(b)))
        .then_with(|| a.cmp(b))
}

fn decomposed_lowercase(name: &str) -> String {
    name.nfd().flat_map(char::to_lowercase).collect()
}

fn base_letters(decomposed: &str) -> impl Iterator<Item = char> + '_ {
    decomposed.chars().filter(|c| !is_combining_mark(*c))
}

fn case_levels(name: &str) -> impl Iterator<Item = bool> + '_ {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
}

/// Names of regular files in `dir`. Subdirectories, symlinks and
/// non-UTF-8 names are skipped.
fn read_file_names(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => tracing::debug!(name = ?raw, "skipping non UTF-8 file name"),
        }
    }
    Ok(names)
}
