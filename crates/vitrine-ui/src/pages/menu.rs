//! Full-viewport page hosting the mobile navigation menu.

use crate::core::theme::{ThemeMode, page_background};
use crate::features::menu::view::MobileMenu;
use yew::prelude::*;

/// The container paints the theme's default background token itself so the
/// menu reads as one full surface in either mode.
#[function_component(MenuPage)]
pub(crate) fn menu_page() -> Html {
    let theme = use_context::<ThemeMode>().unwrap_or(ThemeMode::Light);
    html! {
        <div class="menu-page" style={page_background(theme)}>
            <MobileMenu />
        </div>
    }
}
