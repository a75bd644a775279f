//! Root application module.
//!
//! Contains the main App component and the AppContext shared by every page.

use leptos::prelude::*;
use vows_core::{CopyFeedback, CopyTicket, Gallery};
use wasm_bindgen_futures::spawn_local;

use crate::components::AppRouter;
use crate::config::{APP_TITLE, GALLERY_URL};
use crate::core::BrowserTimers;
use crate::utils::{dom, fetch_json, log};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read with
/// `use_context::<AppContext>()`.
///
/// This struct is `Copy` because all fields are arena handles.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Identifiers whose "copied" indicator is showing.
    pub copied: RwSignal<CopyFeedback>,

    /// Release timers for `copied`.
    copy_timers: StoredValue<BrowserTimers<CopyTicket>, LocalStorage>,

    /// Gallery listing fetched from the server.
    pub gallery: RwSignal<Gallery>,

    /// Whether the gallery fetch has finished (successfully or not).
    pub gallery_loaded: RwSignal<bool>,
}

impl AppContext {
    pub fn new() -> Self {
        let copied = RwSignal::new(CopyFeedback::new());
        let copy_timers = StoredValue::new_local(BrowserTimers::new(move |ticket: CopyTicket| {
            copied.maybe_update(|feedback| feedback.release(&ticket));
        }));

        Self {
            copied,
            copy_timers,
            gallery: RwSignal::new(Gallery::default()),
            gallery_loaded: RwSignal::new(false),
        }
    }

    /// Show the "copied" indicator for `id`, restarting its window.
    pub fn mark_copied(&self, id: &str) {
        let copied = self.copied;
        self.copy_timers.update_value(|timers| {
            copied.update(|feedback| {
                feedback.mark(id, timers);
            });
        });
    }

    pub fn is_copied(&self, id: &str) -> bool {
        self.copied.with(|feedback| feedback.is_copied(id))
    }

    /// Fetch the gallery listing once. Failures leave it empty.
    fn load_gallery(&self) {
        let gallery = self.gallery;
        let loaded = self.gallery_loaded;
        spawn_local(async move {
            match fetch_json::<Gallery>(GALLERY_URL).await {
                Ok(listing) => {
                    log::info(&format!("Gallery: {} images", listing.len()));
                    gallery.set(listing);
                }
                Err(e) => log::warn(&format!("Gallery unavailable: {}", e)),
            }
            loaded.set(true);
        });
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Starts the gallery fetch
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    ctx.load_gallery();

    if let Some(document) = dom::document() {
        document.set_title(APP_TITLE);
    }

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    padding: 2rem;
                    background: #f5efe6;
                    color: #5c4a3d;
                    font-family: Georgia, 'Times New Roman', serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #8b5e3c; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="margin-bottom: 2rem;">
                            "The invitation could not be displayed. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #fffaf3;
                            padding: 1rem;
                            border-radius: 8px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer;">"Error details"</summary>
                            <ul style="margin: 1rem 0 0 0; padding-left: 1.5rem; font-size: 0.9rem;">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = dom::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #8b5e3c;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 999px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
