//! Routing definitions for the Vitrine storefront.
//!
//! Path strings are part of the page contract (the logo must land on `/`),
//! so the table lives outside the render layer where it can be tested.

use yew_router::prelude::*;

/// Client-side route table.
#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    /// Storefront landing page.
    #[at("/")]
    Home,
    /// Mobile navigation menu.
    #[at("/menu")]
    Menu,
    /// Staff support-chat console.
    #[at("/admin/chat")]
    AdminChat,
    /// Catch-all placeholder.
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_match_the_route_contract() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Menu.to_path(), "/menu");
        assert_eq!(Route::AdminChat.to_path(), "/admin/chat");
        assert_eq!(Route::NotFound.to_path(), "/404");
    }

    #[test]
    fn every_route_recognizes_its_own_path() {
        for route in [Route::Home, Route::Menu, Route::AdminChat, Route::NotFound] {
            assert_eq!(Route::recognize(&route.to_path()), Some(route));
        }
    }

    #[test]
    fn unknown_paths_land_on_not_found() {
        assert_eq!(Route::recognize("/no-such-page"), Some(Route::NotFound));
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }
}
