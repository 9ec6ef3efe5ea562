//! Support chat feature surface: state, transformations, and console views.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
