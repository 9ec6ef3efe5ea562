//! Support-chat state and pure transformations for testing outside wasm.
//!
//! # Design
//! - Dialogs live in an id-keyed map plus an explicit ordering, most recently
//!   active first.
//! - Reducers take `&mut ChatState` and plain values; timestamps are display
//!   labels produced by the caller so nothing here touches a clock.

use crate::models::{ChatMessage, Dialog, DialogStatus, Speaker};
use std::collections::HashMap;
use std::rc::Rc;
use uuid::Uuid;

/// Which dialogs the list pane shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Every dialog regardless of status.
    #[default]
    All,
    /// Only open dialogs.
    Open,
    /// Only resolved dialogs.
    Resolved,
}

impl StatusFilter {
    /// All filters in tab order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::All, Self::Open, Self::Resolved]
    }

    /// Tab label for the filter.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Open => "Open",
            Self::Resolved => "Resolved",
        }
    }

    /// Whether a dialog with `status` passes the filter.
    #[must_use]
    pub const fn admits(self, status: DialogStatus) -> bool {
        match self {
            Self::All => true,
            Self::Open => matches!(status, DialogStatus::Open),
            Self::Resolved => matches!(status, DialogStatus::Resolved),
        }
    }
}

/// Support-chat slice stored in the app state.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ChatState {
    /// Map of dialogs by id.
    pub by_id: HashMap<Uuid, Rc<Dialog>>,
    /// Dialog ordering, most recently active first.
    pub order: Vec<Uuid>,
    /// Dialog shown in the transcript pane.
    pub selected_id: Option<Uuid>,
    /// Status filter for the list pane.
    pub filter: StatusFilter,
    /// Search needle applied to customer names and subjects.
    pub search: String,
    /// Unsent reply drafts keyed by dialog.
    pub drafts: HashMap<Uuid, String>,
}

/// Replace the dialog table with a new snapshot, keeping list order.
///
/// Selection and drafts survive only for dialogs present in the snapshot.
pub fn seed_dialogs(state: &mut ChatState, dialogs: Vec<Dialog>) {
    state.order = dialogs.iter().map(|dialog| dialog.id).collect();
    state.by_id = dialogs
        .into_iter()
        .map(|dialog| (dialog.id, Rc::new(dialog)))
        .collect();
    state.drafts.retain(|id, _| state.by_id.contains_key(id));
    if let Some(id) = state.selected_id
        && !state.by_id.contains_key(&id)
    {
        state.selected_id = None;
    }
}

/// Select a dialog for the transcript pane, or clear the selection.
///
/// Selecting a dialog marks it read. An id missing from the table clears
/// the selection so it never points at a dead dialog.
pub fn select_dialog(state: &mut ChatState, id: Option<Uuid>) {
    let Some(id) = id else {
        state.selected_id = None;
        return;
    };
    let Some(current) = state.by_id.get(&id) else {
        state.selected_id = None;
        return;
    };
    if current.unread > 0 {
        let mut next = (**current).clone();
        next.unread = 0;
        state.by_id.insert(id, Rc::new(next));
    }
    state.selected_id = Some(id);
}

/// Set the status filter for the list pane.
pub const fn set_filter(state: &mut ChatState, filter: StatusFilter) {
    state.filter = filter;
}

/// Set the search needle for the list pane.
pub fn set_search(state: &mut ChatState, needle: String) {
    state.search = needle;
}

/// Record an unsent reply draft for a dialog. Blank drafts are dropped.
pub fn set_draft(state: &mut ChatState, id: Uuid, draft: String) {
    if draft.is_empty() {
        state.drafts.remove(&id);
    } else {
        state.drafts.insert(id, draft);
    }
}

/// Append an agent reply to a dialog transcript.
///
/// Rejects blank bodies, unknown dialogs, and resolved dialogs. On success
/// the reply is appended, the draft cleared, the activity label updated,
/// and the dialog promoted to the top of the ordering.
pub fn send_reply(state: &mut ChatState, id: Uuid, body: &str, sent_at: &str) -> bool {
    let body = body.trim();
    if body.is_empty() {
        return false;
    }
    let Some(current) = state.by_id.get(&id) else {
        return false;
    };
    if current.status == DialogStatus::Resolved {
        return false;
    }
    let mut next = (**current).clone();
    next.messages.push(ChatMessage {
        seq: next.next_seq(),
        speaker: Speaker::Agent,
        body: body.to_string(),
        sent_at: sent_at.to_string(),
    });
    next.last_activity = sent_at.to_string();
    state.by_id.insert(id, Rc::new(next));
    state.drafts.remove(&id);
    promote(state, id);
    true
}

/// Resolve or reopen a dialog. Unknown ids are ignored; selection is kept.
pub fn set_status(state: &mut ChatState, id: Uuid, status: DialogStatus) {
    let Some(current) = state.by_id.get(&id) else {
        return;
    };
    if current.status == status {
        return;
    }
    let mut next = (**current).clone();
    next.status = status;
    state.by_id.insert(id, Rc::new(next));
}

fn promote(state: &mut ChatState, id: Uuid) {
    state.order.retain(|dialog_id| *dialog_id != id);
    state.order.insert(0, id);
}

/// Read the dialogs the list pane should show, in order.
#[must_use]
pub fn visible_dialogs(state: &ChatState) -> Vec<Rc<Dialog>> {
    let needle = state.search.trim().to_lowercase();
    state
        .order
        .iter()
        .filter_map(|id| state.by_id.get(id))
        .filter(|dialog| state.filter.admits(dialog.status))
        .filter(|dialog| matches_needle(dialog, &needle))
        .cloned()
        .collect()
}

fn matches_needle(dialog: &Dialog, needle: &str) -> bool {
    needle.is_empty()
        || dialog.customer.to_lowercase().contains(needle)
        || dialog.subject.to_lowercase().contains(needle)
}

/// Read the dialog shown in the transcript pane.
#[must_use]
pub fn selected_dialog(state: &ChatState) -> Option<Rc<Dialog>> {
    let id = state.selected_id?;
    state.by_id.get(&id).cloned()
}

/// Read the reply draft for the selected dialog, or an empty string.
#[must_use]
pub fn selected_draft(state: &ChatState) -> String {
    state
        .selected_id
        .and_then(|id| state.drafts.get(&id).cloned())
        .unwrap_or_default()
}

/// Sum of unread counts across every dialog. Drives the admin nav badge.
#[must_use]
pub fn unread_total(state: &ChatState) -> u32 {
    state.by_id.values().map(|dialog| dialog.unread).sum()
}

/// Short summary for the list pane header, e.g. `"2 open · 1 resolved"`.
#[must_use]
pub fn dialog_count_label(state: &ChatState) -> String {
    let open = state
        .by_id
        .values()
        .filter(|dialog| dialog.status == DialogStatus::Open)
        .count();
    let resolved = state.by_id.len() - open;
    format!("{open} open · {resolved} resolved")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::demo_dialogs;

    fn seeded() -> ChatState {
        let mut state = ChatState::default();
        seed_dialogs(&mut state, demo_dialogs());
        state
    }

    fn first_open_id(state: &ChatState) -> Uuid {
        *state
            .order
            .iter()
            .find(|id| state.by_id[*id].status == DialogStatus::Open)
            .unwrap()
    }

    fn resolved_id(state: &ChatState) -> Uuid {
        *state
            .order
            .iter()
            .find(|id| state.by_id[*id].status == DialogStatus::Resolved)
            .unwrap()
    }

    #[test]
    fn seeding_preserves_list_order() {
        let state = seeded();
        let expected: Vec<Uuid> = demo_dialogs().iter().map(|dialog| dialog.id).collect();
        assert_eq!(state.order, expected);
        assert_eq!(state.by_id.len(), expected.len());
    }

    #[test]
    fn reseeding_drops_stale_selection_and_drafts() {
        let mut state = seeded();
        let id = first_open_id(&state);
        select_dialog(&mut state, Some(id));
        set_draft(&mut state, id, "half-written".to_string());

        seed_dialogs(&mut state, Vec::new());
        assert!(state.selected_id.is_none());
        assert!(state.drafts.is_empty());
    }

    #[test]
    fn selecting_clears_unread_on_that_dialog_only() {
        let mut state = seeded();
        let id = first_open_id(&state);
        let before_total = unread_total(&state);
        let own_unread = state.by_id[&id].unread;
        assert!(own_unread > 0);

        select_dialog(&mut state, Some(id));
        assert_eq!(state.selected_id, Some(id));
        assert_eq!(state.by_id[&id].unread, 0);
        assert_eq!(unread_total(&state), before_total - own_unread);
    }

    #[test]
    fn selecting_an_unknown_dialog_clears_selection() {
        let mut state = seeded();
        let id = first_open_id(&state);
        select_dialog(&mut state, Some(id));
        select_dialog(&mut state, Some(Uuid::from_u128(0xDEAD)));
        assert!(state.selected_id.is_none());
    }

    #[test]
    fn status_filter_narrows_the_list() {
        let mut state = seeded();
        let total = state.by_id.len();

        set_filter(&mut state, StatusFilter::Open);
        let open = visible_dialogs(&state);
        assert!(open.len() < total);
        assert!(open.iter().all(|d| d.status == DialogStatus::Open));

        set_filter(&mut state, StatusFilter::Resolved);
        let resolved = visible_dialogs(&state);
        assert!(resolved.iter().all(|d| d.status == DialogStatus::Resolved));
        assert_eq!(open.len() + resolved.len(), total);
    }

    #[test]
    fn search_matches_customer_and_subject_case_insensitively() {
        let mut state = seeded();
        set_search(&mut state, "MAYA".to_string());
        let by_customer = visible_dialogs(&state);
        assert_eq!(by_customer.len(), 1);
        assert!(by_customer[0].customer.contains("Maya"));

        set_search(&mut state, "wool coat".to_string());
        let by_subject = visible_dialogs(&state);
        assert_eq!(by_subject.len(), 1);

        set_search(&mut state, "no such thing".to_string());
        assert!(visible_dialogs(&state).is_empty());
    }

    #[test]
    fn blank_drafts_are_dropped() {
        let mut state = seeded();
        let id = first_open_id(&state);
        set_draft(&mut state, id, "On it".to_string());
        assert_eq!(state.drafts.get(&id).map(String::as_str), Some("On it"));
        set_draft(&mut state, id, String::new());
        assert!(!state.drafts.contains_key(&id));
    }

    #[test]
    fn reply_appends_clears_draft_and_promotes() {
        let mut state = seeded();
        // Second in the seeded order, so a successful reply must move it up.
        let id = state.order[1];
        let before_len = state.by_id[&id].messages.len();
        set_draft(&mut state, id, "Sizing runs true, no need.".to_string());

        assert!(send_reply(
            &mut state,
            id,
            "Sizing runs true, no need.",
            "10:02"
        ));
        let dialog = &state.by_id[&id];
        assert_eq!(dialog.messages.len(), before_len + 1);
        let reply = dialog.last_message().unwrap();
        assert_eq!(reply.speaker, Speaker::Agent);
        assert_eq!(reply.seq, before_len as u64 + 1);
        assert_eq!(dialog.last_activity, "10:02");
        assert!(!state.drafts.contains_key(&id));
        assert_eq!(state.order.first(), Some(&id));
    }

    #[test]
    fn blank_unknown_and_resolved_replies_are_rejected() {
        let mut state = seeded();
        let open = first_open_id(&state);
        let resolved = resolved_id(&state);
        let order_before = state.order.clone();

        assert!(!send_reply(&mut state, open, "   ", "10:02"));
        assert!(!send_reply(&mut state, Uuid::from_u128(7), "hi", "10:02"));
        assert!(!send_reply(&mut state, resolved, "hi", "10:02"));
        assert_eq!(state.order, order_before);
    }

    #[test]
    fn resolve_and_reopen_keep_selection() {
        let mut state = seeded();
        let id = first_open_id(&state);
        select_dialog(&mut state, Some(id));

        set_status(&mut state, id, DialogStatus::Resolved);
        assert_eq!(state.by_id[&id].status, DialogStatus::Resolved);
        assert_eq!(state.selected_id, Some(id));

        set_status(&mut state, id, DialogStatus::Open);
        assert_eq!(state.by_id[&id].status, DialogStatus::Open);
        assert!(send_reply(&mut state, id, "Back with you now.", "10:05"));
    }

    #[test]
    fn selected_draft_follows_the_selection() {
        let mut state = seeded();
        let id = first_open_id(&state);
        set_draft(&mut state, id, "draft text".to_string());
        assert_eq!(selected_draft(&state), "");

        select_dialog(&mut state, Some(id));
        assert_eq!(selected_draft(&state), "draft text");
    }

    #[test]
    fn count_label_reports_open_and_resolved() {
        let state = seeded();
        assert_eq!(dialog_count_label(&state), "2 open · 1 resolved");
        assert_eq!(dialog_count_label(&ChatState::default()), "0 open · 0 resolved");
    }
}
