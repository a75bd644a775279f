//! Entourage roles, family, and principal sponsors.

use leptos::prelude::*;
use vows_core::content::AttendantGroup;
use vows_core::site;

stylance::import_crate_style!(css, "src/components/sections/sections.module.css");

#[component]
pub fn Entourage() -> impl IntoView {
    let content = site();

    let roles = content
        .entourage_by_role()
        .into_iter()
        .map(|group| {
            let names = group
                .names
                .into_iter()
                .map(|name| view! { <li>{name}</li> })
                .collect_view();
            view! {
                <div class=css::roleGroup>
                    <h4 class=css::roleName>{group.role}</h4>
                    <ul>{names}</ul>
                </div>
            }
        })
        .collect_view();

    // Empty groups are skipped
    let groups = AttendantGroup::ALL
        .into_iter()
        .filter_map(|group| {
            let members = content.entourage_in(group);
            (!members.is_empty()).then(|| {
                let members = members
                    .into_iter()
                    .map(|a| {
                        view! {
                            <li>
                                <span class=css::roleName>{a.role.as_str()}</span>
                                <span>{a.name.as_str()}</span>
                            </li>
                        }
                    })
                    .collect_view();
                view! {
                    <div class=css::roleGroup>
                        <h4 class=css::cardHeading>{group.heading()}</h4>
                        <ul>{members}</ul>
                    </div>
                }
            })
        })
        .collect_view();

    let sponsors = content
        .principal_sponsors
        .iter()
        .map(|pair| {
            let line = match pair.spouse() {
                Some(spouse) => format!("{} & {}", pair.name, spouse),
                None => pair.name.clone(),
            };
            view! { <li>{line}</li> }
        })
        .collect_view();

    view! {
        <section class=css::section id="entourage">
            <p class=css::eyebrow>"With the Blessing of"</p>
            <h2 class=css::title>"The Entourage"</h2>
            <div class=css::grid>{roles}</div>
            <div class=css::grid>{groups}</div>
            <article class=css::card>
                <h4 class=css::cardHeading>"Principal Sponsors"</h4>
                <ul class=css::sponsors>{sponsors}</ul>
            </article>
        </section>
    }
}
