//! Staff console chrome: sidebar navigation and the content column.

use crate::components::atoms::{IconArrowLeft, IconMessagesSquare};
use crate::core::routes::Route;
use crate::core::store::AppStore;
use crate::features::chat::state::unread_total;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

/// Props for [`AdminShell`].
#[derive(Properties, PartialEq)]
pub struct AdminShellProps {
    /// Console page rendered inside the shell.
    pub children: Children,
    /// Route of the page being shown, for nav highlighting.
    pub active: Route,
}

/// Sidebar-plus-content layout for admin pages.
///
/// The chat nav entry carries a live unread badge so staff see pending
/// work from any console page.
#[function_component(AdminShell)]
pub fn admin_shell(props: &AdminShellProps) -> Html {
    let unread = use_selector(|store: &AppStore| unread_total(&store.chat));
    html! {
        <div class="admin-shell">
            <aside class="admin-sidebar">
                <div class="admin-brand">
                    <strong>{ "Vitrine" }</strong>
                    <span class="muted">{ "Support console" }</span>
                </div>
                <nav class="admin-nav">
                    { nav_item(Route::AdminChat, props.active, html! { <>
                        <IconMessagesSquare class="icon" />
                        <span>{ "Chat" }</span>
                        { if *unread > 0 {
                            html! { <span class="unread-badge">{ *unread }</span> }
                        } else {
                            html! {}
                        } }
                    </> }) }
                    { nav_item(Route::Home, props.active, html! { <>
                        <IconArrowLeft class="icon" />
                        <span>{ "Storefront" }</span>
                    </> }) }
                </nav>
            </aside>
            <main class="admin-main">
                { for props.children.iter() }
            </main>
        </div>
    }
}

fn nav_item(route: Route, active: Route, label: Html) -> Html {
    let classes = classes!(
        "nav-item",
        if active == route { Some("active") } else { None }
    );
    html! {
        <Link<Route> to={route} classes={classes}>{ label }</Link<Route>>
    }
}
