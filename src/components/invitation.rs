//! Invitation page: loading screen, hero, then the main content.

use leptos::prelude::*;
use leptos_icons::Icon;
use vows_core::{Screen, site};

use crate::components::icons as ic;
use crate::components::loader::{HeroScreen, LoadingScreen, use_reveal};
use crate::components::sections::{Details, Entourage, Narrative, SnapShare, Timeline};
use crate::config::MAIN_CONTENT_ID;
use crate::models::Route;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/invitation.module.css");

#[component]
pub fn InvitationPage() -> impl IntoView {
    let reveal = use_reveal();
    let loading = reveal.visibility(Screen::Loading);
    let hero = reveal.visibility(Screen::Hero);
    let main = reveal.visibility(Screen::Main);

    let on_open = Callback::new(move |_: ()| reveal.open_invitation());

    // Bring the content into view once it has rendered
    Effect::new(move |_| {
        if main.get().mounted {
            request_animation_frame(|| dom::scroll_to_id(MAIN_CONTENT_ID));
        }
    });

    // Keep the page from scrolling behind the full-screen loader and hero
    Effect::new(move |_| dom::set_body_scroll_locked(!main.get().mounted));
    on_cleanup(|| dom::set_body_scroll_locked(false));

    let couple = site().couple_display();

    view! {
        <LoadingScreen visibility=loading />
        <HeroScreen visibility=hero on_open=on_open />
        <Show when=move || main.get().mounted>
            <main id=MAIN_CONTENT_ID class=css::main>
                <nav class=css::nav>
                    <span class=css::brand>{couple.clone()}</span>
                    <button class=css::navButton on:click=move |_| Route::Gallery.push()>
                        <Icon icon=ic::GALLERY />
                        <span>"Gallery"</span>
                    </button>
                </nav>
                <Narrative />
                <Timeline />
                <Details />
                <Entourage />
                <SnapShare />
                <footer class=css::footer>
                    <Icon icon=ic::HEART />
                    <p>{format!("{} \u{00b7} {}", couple.clone(), site().wedding.date)}</p>
                </footer>
            </main>
        </Show>
    }
}
