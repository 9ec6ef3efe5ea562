//! App root: theme ownership, routing, and the wasm entrypoint.

use crate::components::admin_shell::AdminShell;
use crate::components::site_shell::SiteShell;
use crate::core::nav::NavPort;
use crate::core::routes::Route;
use crate::core::theme::ThemeMode;
use crate::pages::admin_chat::AdminChatPage;
use crate::pages::home::HomePage;
use crate::pages::menu::MenuPage;
use crate::pages::not_found::NotFoundPage;
use gloo::utils::window;
use preferences::{load_theme, persist_theme};
use yew::prelude::*;
use yew_router::prelude::*;

mod preferences;

/// Root component: owns the theme preference and mounts the router.
#[function_component(VitrineApp)]
pub(crate) fn vitrine_app() -> Html {
    let theme = use_state(load_theme);
    {
        let current = *theme;
        use_effect_with_deps(
            move |_| {
                apply_theme(current);
                persist_theme(current);
                || ()
            },
            current,
        );
    }
    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |()| theme.set(theme.toggled()))
    };

    html! {
        <ContextProvider<ThemeMode> context={*theme}>
            <BrowserRouter>
                <RoutedApp theme={*theme} on_toggle_theme={on_toggle_theme} />
            </BrowserRouter>
        </ContextProvider<ThemeMode>>
    }
}

#[derive(Properties, PartialEq)]
struct RoutedAppProps {
    theme: ThemeMode,
    on_toggle_theme: Callback<()>,
}

/// Lives under the router so it can turn the live navigator into a
/// [`NavPort`] for everything below it.
#[function_component(RoutedApp)]
fn routed_app(props: &RoutedAppProps) -> Html {
    let nav = use_navigator().map_or_else(NavPort::fallback, |navigator| {
        NavPort::new(Callback::from(move |route: Route| navigator.push(&route)))
    });
    let theme = props.theme;
    let on_toggle_theme = props.on_toggle_theme.clone();
    html! {
        <ContextProvider<NavPort> context={nav}>
            <Switch<Route> render={move |route| switch(route, theme, &on_toggle_theme)} />
        </ContextProvider<NavPort>>
    }
}

fn switch(route: Route, theme: ThemeMode, on_toggle_theme: &Callback<()>) -> Html {
    match route {
        Route::Home => storefront(theme, on_toggle_theme, html! { <HomePage /> }),
        Route::Menu => storefront(theme, on_toggle_theme, html! { <MenuPage /> }),
        Route::AdminChat => html! {
            <AdminShell active={Route::AdminChat}>
                <AdminChatPage />
            </AdminShell>
        },
        Route::NotFound => storefront(theme, on_toggle_theme, html! { <NotFoundPage /> }),
    }
}

fn storefront(theme: ThemeMode, on_toggle_theme: &Callback<()>, page: Html) -> Html {
    html! {
        <SiteShell theme={theme} on_toggle_theme={on_toggle_theme.clone()}>
            { page }
        </SiteShell>
    }
}

fn apply_theme(theme: ThemeMode) {
    if let Some(document) = window().document()
        && let Some(body) = document.body()
    {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<VitrineApp>::with_root(root).render();
    } else {
        yew::Renderer::<VitrineApp>::new().render();
    }
}
