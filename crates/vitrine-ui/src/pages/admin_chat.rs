//! Staff support-chat page; mounts the console and nothing else.

use crate::features::chat::view::ChatManagement;
use yew::prelude::*;

#[function_component(AdminChatPage)]
pub(crate) fn admin_chat_page() -> Html {
    html! { <ChatManagement /> }
}
