//! Persistence helpers for shopper preferences.

use crate::core::theme::{ThemeMode, mode_from_preference};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use serde::Serialize;

pub(crate) const THEME_KEY: &str = "vitrine.theme";

pub(crate) fn load_theme() -> ThemeMode {
    let stored = LocalStorage::get::<String>(THEME_KEY).ok();
    mode_from_preference(stored.as_deref())
}

pub(crate) fn persist_theme(mode: ThemeMode) {
    set_storage(THEME_KEY, mode.as_str());
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
