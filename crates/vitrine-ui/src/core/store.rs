//! App-wide yewdux store.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Slices stay small and mutate only through their feature reducers.

use crate::features::chat::state::ChatState;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Support-chat console state.
    pub chat: ChatState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_store_is_empty() {
        let store = AppStore::default();
        assert!(store.chat.by_id.is_empty());
        assert!(store.chat.selected_id.is_none());
    }
}
