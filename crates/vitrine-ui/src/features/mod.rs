//! Feature modules, each pairing DOM-free state with wasm-only views.

pub mod chat;
pub mod menu;
