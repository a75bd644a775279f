//! Application router component.
//!
//! Uses native hashchange events instead of leptos_router for hash routing.
//!
//! - `#/` → invitation (loader, hero, main content)
//! - `#/gallery` → photo gallery
//!
//! Background music lives outside the routed view so navigating to the
//! gallery and back does not restart it.

use leptos::prelude::*;

use crate::components::audio::BackgroundMusic;
use crate::components::gallery::GalleryPage;
use crate::components::invitation::InvitationPage;
use crate::models::Route;
use crate::utils::dom::{EventListener, window};

/// Main application router.
#[component]
pub fn AppRouter() -> impl IntoView {
    let route = RwSignal::new(Route::current());

    // Set up hashchange event listener, removed on cleanup
    let listener = window().and_then(|w| {
        EventListener::new(&w, "hashchange", move |_| {
            route.set(Route::current());
        })
    });
    let listener = StoredValue::new_local(listener);
    on_cleanup(move || listener.update_value(|l| drop(l.take())));

    // Only re-render when the page actually changes
    let page = Memo::new(move |_| route.get());

    view! {
        <BackgroundMusic />
        {move || match page.get() {
            Route::Home => view! { <InvitationPage /> }.into_any(),
            Route::Gallery => view! { <GalleryPage /> }.into_any(),
        }}
    }
}
