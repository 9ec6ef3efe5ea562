//! Storefront landing page.

use crate::core::routes::Route;
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    html! {
        <div class="home-page">
            <section class="hero">
                <p class="hero-kicker">{ "Autumn drop" }</p>
                <h1>{ "Everyday pieces, made to last" }</h1>
                <p class="hero-copy">
                    { "Wool, linen, and ceramics from small European workshops." }
                </p>
                <div class="hero-actions">
                    <a class="cta" href="/shop/new-in">{ "Shop new in" }</a>
                    <Link<Route> to={Route::Menu} classes="cta ghost">{ "Browse the menu" }</Link<Route>>
                </div>
            </section>
        </div>
    }
}
