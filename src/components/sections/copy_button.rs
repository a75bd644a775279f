use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::clipboard::copy_with_feedback;

stylance::import_crate_style!(css, "src/components/sections/sections.module.css");

/// Copies `text` and shows "Copied!" for the feedback window.
#[component]
pub fn CopyButton(
    id: &'static str,
    #[prop(into)] text: String,
    #[prop(into)] label: String,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let copied = Memo::new(move |_| ctx.is_copied(id));

    view! {
        <button
            class=css::secondaryButton
            on:click=move |_| copy_with_feedback(ctx, id, text.clone())
            aria-live="polite"
        >
            {move || {
                if copied.get() {
                    view! {
                        <Icon icon=ic::CHECK />
                        <span>"Copied!"</span>
                    }
                        .into_any()
                } else {
                    view! {
                        <Icon icon=ic::COPY />
                        <span>{label.clone()}</span>
                    }
                        .into_any()
                }
            }}
        </button>
    }
}
