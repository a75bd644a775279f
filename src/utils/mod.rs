//! Browser utilities.
//!
//! Provides:
//! - [`dom`] - Window/document access, navigation, external links, listeners
//! - [`fetch_json`] - Network fetching with timeout
//! - [`log`] - Console logging
//! - `url` - External link allow-list, checked by [`dom::open_external`]

pub mod dom;
mod fetch;
pub mod log;
mod url;

pub use fetch::fetch_json;
