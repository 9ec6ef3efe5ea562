//! Storefront chrome wrapped around customer-facing pages.

use crate::components::atoms::{IconMenu, IconMoon, IconSun};
use crate::components::logo::Logo;
use crate::core::nav::NavPort;
use crate::core::routes::Route;
use crate::core::theme::ThemeMode;
use yew::prelude::*;

/// Props for [`SiteShell`].
#[derive(Properties, PartialEq)]
pub struct SiteShellProps {
    /// Page content rendered inside the shell.
    pub children: Children,
    /// Active theme mode, used to pick the toggle icon.
    pub theme: ThemeMode,
    /// Fired when the shopper taps the theme toggle.
    pub on_toggle_theme: Callback<()>,
}

/// Header with the logo, menu and theme controls, plus the page footer.
#[function_component(SiteShell)]
pub fn site_shell(props: &SiteShellProps) -> Html {
    let nav = use_context::<NavPort>().unwrap_or_else(NavPort::fallback);
    let open_menu = Callback::from(move |_| nav.push(Route::Menu));
    let toggle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_| on_toggle_theme.emit(()))
    };
    let theme_icon = match props.theme {
        ThemeMode::Light => html! { <IconMoon class="icon" /> },
        ThemeMode::Dark => html! { <IconSun class="icon" /> },
    };
    html! {
        <div class="site-shell">
            <header class="site-header">
                <Logo />
                <div class="site-actions">
                    <button
                        type="button"
                        class="icon-button"
                        aria-label="Toggle theme"
                        onclick={toggle_theme}
                    >
                        { theme_icon }
                    </button>
                    <button
                        type="button"
                        class="icon-button"
                        aria-label="Open menu"
                        onclick={open_menu}
                    >
                        <IconMenu class="icon" />
                    </button>
                </div>
            </header>
            <main class="site-main">
                { for props.children.iter() }
            </main>
            <footer class="site-footer">
                <span>{ "Vitrine" }</span>
                <span class="muted">{ "Made in small batches, shipped from Lisbon." }</span>
            </footer>
        </div>
    }
}
