//! Mobile menu feature surface: navigation content and views.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
