//! Love story, either one shared narrative or a tab per side.

use leptos::prelude::*;
use vows_core::content::story_paragraphs;
use vows_core::{StoryTab, site};

stylance::import_crate_style!(css, "src/components/sections/sections.module.css");

#[component]
pub fn Narrative() -> impl IntoView {
    let content = site();
    let tab = RwSignal::new(StoryTab::default());

    let tabs = (!content.has_shared_narrative()).then(|| {
        let buttons = StoryTab::ALL
            .into_iter()
            .map(|t| {
                let class = move || {
                    if tab.get() == t {
                        format!("{} {}", css::tab, css::tabActive)
                    } else {
                        css::tab.to_string()
                    }
                };
                view! {
                    <button
                        class=class
                        role="tab"
                        aria-selected=move || (tab.get() == t).to_string()
                        on:click=move |_| tab.set(t)
                    >
                        {content.story_label(t)}
                    </button>
                }
            })
            .collect_view();
        view! { <div class=css::tabs role="tablist">{buttons}</div> }
    });

    let story = move || {
        story_paragraphs(content.narrative_for(tab.get()))
            .into_iter()
            .map(|p| view! { <p>{p}</p> })
            .collect_view()
    };

    view! {
        <section class=css::section id="narrative">
            <p class=css::eyebrow>"Our Love Story"</p>
            <h2 class=css::title>{content.couple_display()}</h2>
            {tabs}
            <div class=css::story>{story}</div>
        </section>
    }
}
