//! Brand logo widget for the storefront header.
//!
//! The rendered size, alt text, and click target are part of the brand
//! contract, so they live here as constants the widget and tests share.

use crate::core::nav::NavPort;
use crate::core::routes::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// Rendered logo width in CSS pixels.
pub const LOGO_WIDTH: u32 = 180;
/// Rendered logo height in CSS pixels.
pub const LOGO_HEIGHT: u32 = 40;
/// Alternative text announced for the logo image.
pub const LOGO_ALT: &str = "logo";
/// Served path of the brand wordmark.
pub const LOGO_SRC: &str = "/static/brand/logo.svg";

/// Send a logo click to the storefront landing page.
pub fn go_home(nav: &NavPort) {
    nav.push(Route::Home);
}

/// Brand wordmark that returns shoppers to the landing page on click.
#[cfg(target_arch = "wasm32")]
#[function_component(Logo)]
pub fn logo() -> Html {
    let nav = use_context::<NavPort>().unwrap_or_else(NavPort::fallback);
    let onclick = Callback::from(move |_| go_home(&nav));
    html! {
        <img
            class="logo"
            src={LOGO_SRC}
            width={LOGO_WIDTH.to_string()}
            height={LOGO_HEIGHT.to_string()}
            alt={LOGO_ALT}
            {onclick}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use yew::Callback;
    use yew_router::Routable;

    #[test]
    fn dimensions_and_alt_match_the_brand_contract() {
        assert_eq!(LOGO_WIDTH, 180);
        assert_eq!(LOGO_HEIGHT, 40);
        assert_eq!(LOGO_ALT, "logo");
        assert!(LOGO_SRC.ends_with("logo.svg"));
    }

    #[test]
    fn each_click_pushes_one_navigation_to_the_root() {
        let pushed = Rc::new(RefCell::new(Vec::new()));
        let sink = pushed.clone();
        let nav = NavPort::new(Callback::from(move |route: Route| {
            sink.borrow_mut().push(route);
        }));
        go_home(&nav);
        assert_eq!(*pushed.borrow(), vec![Route::Home]);
        go_home(&nav);
        assert_eq!(*pushed.borrow(), vec![Route::Home, Route::Home]);
        assert_eq!(Route::Home.to_path(), "/");
    }
}
