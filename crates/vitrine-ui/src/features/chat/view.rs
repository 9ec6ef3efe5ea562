//! Support console views for the chat feature.

use crate::components::atoms::{IconMessagesSquare, IconSend};
use crate::core::store::AppStore;
use crate::features::chat::state::{
    StatusFilter, dialog_count_label, seed_dialogs, select_dialog, selected_dialog, selected_draft,
    send_reply, set_draft, set_filter, set_search, set_status, visible_dialogs,
};
use crate::models::{ChatMessage, Dialog, DialogStatus, demo_dialogs};
use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

/// Two-pane support console: dialog list on the left, transcript on the right.
///
/// Reads and mutates the chat slice of the shared store directly, so the page
/// mounting it passes nothing in. Seeds demo dialogs on first mount while no
/// backend feed exists.
#[function_component(ChatManagement)]
pub fn chat_management() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                if dispatch.get().chat.by_id.is_empty() {
                    dispatch.reduce_mut(|store| seed_dialogs(&mut store.chat, demo_dialogs()));
                }
                || ()
            },
            (),
        );
    }

    let dialogs = use_selector(|store: &AppStore| visible_dialogs(&store.chat));
    let selected = use_selector(|store: &AppStore| selected_dialog(&store.chat));
    let filter = use_selector(|store: &AppStore| store.chat.filter);
    let search = use_selector(|store: &AppStore| store.chat.search.clone());
    let draft = use_selector(|store: &AppStore| selected_draft(&store.chat));
    let count_label = use_selector(|store: &AppStore| dialog_count_label(&store.chat));

    let on_select = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: Uuid| {
            dispatch.reduce_mut(move |store| select_dialog(&mut store.chat, Some(id)));
        })
    };
    let on_filter = {
        let dispatch = dispatch.clone();
        Callback::from(move |filter: StatusFilter| {
            dispatch.reduce_mut(move |store| set_filter(&mut store.chat, filter));
        })
    };
    let on_search = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                dispatch.reduce_mut(|store| set_search(&mut store.chat, input.value()));
            }
        })
    };
    let on_draft = {
        let dispatch = dispatch.clone();
        Callback::from(move |(id, value): (Uuid, String)| {
            dispatch.reduce_mut(move |store| set_draft(&mut store.chat, id, value));
        })
    };
    let on_send = {
        let dispatch = dispatch.clone();
        Callback::from(move |(id, body): (Uuid, String)| {
            let stamp = now_label();
            dispatch.reduce_mut(move |store| {
                send_reply(&mut store.chat, id, &body, &stamp);
            });
        })
    };
    let on_status = Callback::from(move |(id, status): (Uuid, DialogStatus)| {
        dispatch.reduce_mut(move |store| set_status(&mut store.chat, id, status));
    });

    let selected_id = (*selected).as_ref().map(|dialog| dialog.id);
    html! {
        <section class="chat-console">
            <aside class="chat-list">
                <header class="chat-list-head">
                    <h2>{ "Dialogs" }</h2>
                    <span class="chat-count">{ (*count_label).clone() }</span>
                </header>
                { render_list_tools(*filter, &search, &on_filter, &on_search) }
                { render_dialog_rows(&dialogs, selected_id, &on_select) }
            </aside>
            <section class="chat-transcript">
                { match &*selected {
                    Some(dialog) => render_transcript(dialog, &draft, &on_draft, &on_send, &on_status),
                    None => render_empty_transcript(),
                } }
            </section>
        </section>
    }
}

fn render_list_tools(
    filter: StatusFilter,
    search: &str,
    on_filter: &Callback<StatusFilter>,
    on_search: &Callback<InputEvent>,
) -> Html {
    let tabs = StatusFilter::all().into_iter().map(|option| {
        let active = filter == option;
        let onclick = {
            let on_filter = on_filter.clone();
            Callback::from(move |_| on_filter.emit(option))
        };
        html! {
            <button
                type="button"
                class={classes!("segmented-item", if active { Some("active") } else { None })}
                aria-pressed={active.to_string()}
                {onclick}
            >
                { option.label() }
            </button>
        }
    });
    html! {
        <div class="chat-tools">
            <div class="segmented" role="group" aria-label="Filter dialogs by status">
                { for tabs }
            </div>
            <input
                class="chat-search"
                type="search"
                placeholder="Search dialogs"
                aria-label="Search dialogs"
                value={search.to_string()}
                oninput={on_search.clone()}
            />
        </div>
    }
}

fn render_dialog_rows(
    dialogs: &[Rc<Dialog>],
    selected_id: Option<Uuid>,
    on_select: &Callback<Uuid>,
) -> Html {
    let rows = dialogs
        .iter()
        .map(|dialog| render_dialog_row(dialog, selected_id == Some(dialog.id), on_select));
    html! {
        <ul class="dialog-rows">
            { for rows }
            { if dialogs.is_empty() {
                html! { <li class="dialog-empty">{ "No dialogs match." }</li> }
            } else {
                html! {}
            } }
        </ul>
    }
}

fn render_dialog_row(dialog: &Dialog, active: bool, on_select: &Callback<Uuid>) -> Html {
    let id = dialog.id;
    let select = {
        let on_select = on_select.clone();
        Callback::from(move |_| on_select.emit(id))
    };
    html! {
        <li key={id.to_string()}>
            <button
                type="button"
                class={classes!("dialog-row", if active { Some("active") } else { None })}
                onclick={select}
            >
                <span class="dialog-top">
                    <span class="dialog-customer">{ dialog.customer.clone() }</span>
                    <span class="dialog-stamp">{ dialog.last_activity.clone() }</span>
                </span>
                <span class="dialog-subject">{ dialog.subject.clone() }</span>
                <span class="dialog-bottom">
                    <span class="dialog-preview">{ dialog.preview().to_string() }</span>
                    { if dialog.unread > 0 {
                        html! { <span class="unread-badge">{ dialog.unread }</span> }
                    } else {
                        html! {
                            <span class={classes!("status-pill", dialog.status.as_str())}>
                                { dialog.status.as_str() }
                            </span>
                        }
                    } }
                </span>
            </button>
        </li>
    }
}

fn render_transcript(
    dialog: &Dialog,
    draft: &str,
    on_draft: &Callback<(Uuid, String)>,
    on_send: &Callback<(Uuid, String)>,
    on_status: &Callback<(Uuid, DialogStatus)>,
) -> Html {
    let id = dialog.id;
    let is_open = dialog.status == DialogStatus::Open;
    let flip_status = {
        let on_status = on_status.clone();
        let next = if is_open {
            DialogStatus::Resolved
        } else {
            DialogStatus::Open
        };
        Callback::from(move |_| on_status.emit((id, next)))
    };
    html! {
        <>
            <header class="transcript-head">
                <div class="transcript-who">
                    <h2>{ dialog.customer.clone() }</h2>
                    <p class="transcript-subject">{ dialog.subject.clone() }</p>
                </div>
                <div class="transcript-actions">
                    <span class={classes!("status-pill", dialog.status.as_str())}>
                        { dialog.status.as_str() }
                    </span>
                    <button type="button" class="ghost-button" onclick={flip_status}>
                        { if is_open { "Resolve" } else { "Reopen" } }
                    </button>
                </div>
            </header>
            <ul class="bubble-list">
                { for dialog.messages.iter().map(render_bubble) }
            </ul>
            { if is_open {
                render_reply_form(id, draft, on_draft, on_send)
            } else {
                html! {
                    <p class="transcript-note">
                        { "This dialog is resolved. Reopen it to reply." }
                    </p>
                }
            } }
        </>
    }
}

fn render_reply_form(
    id: Uuid,
    draft: &str,
    on_draft: &Callback<(Uuid, String)>,
    on_send: &Callback<(Uuid, String)>,
) -> Html {
    let draft_input = {
        let on_draft = on_draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                on_draft.emit((id, area.value()));
            }
        })
    };
    let send = {
        let on_send = on_send.clone();
        let body = draft.to_string();
        Callback::from(move |_| on_send.emit((id, body.clone())))
    };
    let can_send = !draft.trim().is_empty();
    html! {
        <div class="reply-form">
            <textarea
                class="reply-input"
                placeholder="Write a reply"
                aria-label="Reply"
                value={draft.to_string()}
                oninput={draft_input}
            />
            <button type="button" class="send-button" disabled={!can_send} onclick={send}>
                <IconSend class="icon" />
                { "Send" }
            </button>
        </div>
    }
}

fn render_bubble(message: &ChatMessage) -> Html {
    html! {
        <li
            class={classes!("bubble", message.speaker.as_str())}
            key={message.seq.to_string()}
        >
            <p class="bubble-body">{ message.body.clone() }</p>
            <span class="bubble-stamp">{ message.sent_at.clone() }</span>
        </li>
    }
}

fn render_empty_transcript() -> Html {
    html! {
        <div class="transcript-empty">
            <IconMessagesSquare class="icon-large" />
            <p>{ "Select a dialog to read the transcript." }</p>
        </div>
    }
}

// Wall-clock label for freshly sent replies, e.g. "14:07".
fn now_label() -> String {
    let now = js_sys::Date::new_0();
    format!("{:02}:{:02}", now.get_hours(), now.get_minutes())
}
