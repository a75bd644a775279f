//! Photo gallery page (`#/gallery`).
//!
//! Masonry grid over the fetched gallery with a category filter and a
//! lightbox. The lightbox closes on Escape or a backdrop click and locks page
//! scrolling while open.

use leptos::prelude::*;
use leptos_icons::Icon;
use vows_core::ImageEntry;
use wasm_bindgen::JsCast;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{GalleryFilter, Lightbox, Route};
use crate::utils::dom::{self, EventListener};

stylance::import_crate_style!(css, "src/components/gallery/gallery.module.css");

#[component]
pub fn GalleryPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let filter = RwSignal::new(GalleryFilter::default());
    let lightbox = RwSignal::new(Lightbox::default());

    let shown = Memo::new(move |_| {
        let filter = filter.get();
        ctx.gallery.with(|g| {
            g.iter()
                .filter(|e| filter.matches(e))
                .cloned()
                .collect::<Vec<ImageEntry>>()
        })
    });
    let count = move || shown.with(Vec::len);

    // Keyboard navigation while the lightbox is open
    let keys = EventListener::on_document("keydown", move |event| {
        let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
            return;
        };
        if !lightbox.get_untracked().is_open() {
            return;
        }
        let len = shown.with_untracked(Vec::len);
        match event.key().as_str() {
            "Escape" => lightbox.update(Lightbox::close),
            "ArrowRight" => lightbox.update(|l| l.next(len)),
            "ArrowLeft" => lightbox.update(|l| l.prev(len)),
            _ => {}
        }
    });
    let keys = StoredValue::new_local(keys);

    Effect::new(move |_| dom::set_body_scroll_locked(lightbox.get().is_open()));

    on_cleanup(move || {
        keys.try_update_value(|keys| keys.take());
        dom::set_body_scroll_locked(false);
    });

    let filters = GalleryFilter::ALL
        .into_iter()
        .map(|f| {
            let class = move || {
                if filter.get() == f {
                    format!("{} {}", css::filter, css::filterActive)
                } else {
                    css::filter.to_string()
                }
            };
            let label = move || {
                let n = ctx
                    .gallery
                    .with(|g| g.iter().filter(|e| f.matches(e)).count());
                format!("{} ({})", f.label(), n)
            };
            view! {
                <button
                    class=class
                    on:click=move |_| {
                        filter.set(f);
                        lightbox.update(Lightbox::close);
                    }
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    let grid = move || {
        shown
            .get()
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                view! {
                    <button
                        class=css::tile
                        on:click=move |_| lightbox.update(|l| l.open(i, count()))
                    >
                        <img src=entry.path.clone() alt=entry.file_name().to_string() loading="lazy" />
                    </button>
                }
            })
            .collect_view()
    };

    let status = move || {
        if !ctx.gallery_loaded.get() {
            Some("Loading photos\u{2026}")
        } else if count() == 0 {
            Some("No photos yet.")
        } else {
            None
        }
    };

    let viewer = move || {
        let index = lightbox.get().current()?;
        let entry = shown.with(|v| v.get(index).cloned())?;
        let total = count();
        Some(view! {
            <div
                class=css::backdrop
                role="dialog"
                aria-modal="true"
                on:click=move |_| lightbox.update(Lightbox::close)
            >
                <button
                    class=css::close
                    aria-label="Close"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        lightbox.update(Lightbox::close);
                    }
                >
                    <Icon icon=ic::CLOSE />
                </button>
                <button
                    class=css::prev
                    aria-label="Previous photo"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        lightbox.update(|l| l.prev(total));
                    }
                >
                    <Icon icon=ic::CHEVRON_LEFT />
                </button>
                <img
                    class=css::photo
                    src=entry.path.clone()
                    alt=entry.file_name().to_string()
                    on:click=|ev| ev.stop_propagation()
                />
                <button
                    class=css::next
                    aria-label="Next photo"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        lightbox.update(|l| l.next(total));
                    }
                >
                    <Icon icon=ic::CHEVRON_RIGHT />
                </button>
                <p class=css::counter>{format!("{} / {}", index + 1, total)}</p>
            </div>
        })
    };

    view! {
        <div class=css::page>
            <header class=css::header>
                <button class=css::back on:click=move |_| Route::Home.push()>
                    <Icon icon=ic::HOME />
                    <span>"Back to Invitation"</span>
                </button>
                <h1 class=css::title>"Our Gallery"</h1>
                <div class=css::filters>{filters}</div>
            </header>
            {move || status().map(|text| view! { <p class=css::status>{text}</p> })}
            <div class=css::masonry>{grid}</div>
            {viewer}
        </div>
    }
}
