//! Mobile navigation views.

use crate::core::routes::Route;
use crate::features::menu::state::{
    MenuEntry, MenuSection, MenuTarget, default_open, menu_sections, toggle_section,
};
use yew::prelude::*;
use yew_router::prelude::Link;

/// Collapsible navigation tree for small screens.
///
/// Section open state is local to the component; the content comes from
/// [`menu_sections`] so it stays testable off-screen.
#[function_component(MobileMenu)]
pub fn mobile_menu() -> Html {
    let open = use_state(default_open);
    let sections = menu_sections();
    html! {
        <nav class="mobile-menu" aria-label="Site menu">
            { for sections.iter().map(|section| {
                let expanded = open.contains(section.id);
                let toggle = {
                    let open = open.clone();
                    let id = section.id;
                    Callback::from(move |_| open.set(toggle_section(&open, id)))
                };
                render_section(section, expanded, &toggle)
            }) }
        </nav>
    }
}

fn render_section(section: &MenuSection, expanded: bool, on_toggle: &Callback<MouseEvent>) -> Html {
    html! {
        <section class="menu-section" key={section.id}>
            <button
                type="button"
                class={classes!("menu-section-toggle", if expanded { Some("open") } else { None })}
                aria-expanded={expanded.to_string()}
                onclick={on_toggle.clone()}
            >
                { section.title }
            </button>
            { if expanded {
                html! {
                    <ul class="menu-entries">
                        { for section.entries.iter().map(render_entry) }
                    </ul>
                }
            } else {
                html! {}
            } }
        </section>
    }
}

fn render_entry(entry: &MenuEntry) -> Html {
    let link = match &entry.target {
        MenuTarget::Route(route) => html! {
            <Link<Route> to={*route} classes="menu-link">{ entry.label }</Link<Route>>
        },
        MenuTarget::External(href) => html! {
            <a class="menu-link" href={*href}>{ entry.label }</a>
        },
    };
    html! {
        <li key={entry.label}>{ link }</li>
    }
}
