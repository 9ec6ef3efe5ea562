//! Catch-all for unknown paths.

use crate::core::routes::Route;
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(NotFoundPage)]
pub(crate) fn not_found_page() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{ "Page not found" }</h1>
            <p>{ "The link may be old, or the page may have moved." }</p>
            <Link<Route> to={Route::Home} classes="cta">{ "Back to the storefront" }</Link<Route>>
        </div>
    }
}
