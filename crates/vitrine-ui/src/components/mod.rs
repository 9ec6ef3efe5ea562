//! Reusable view components shared across pages.

pub mod logo;

#[cfg(target_arch = "wasm32")]
pub mod admin_shell;
#[cfg(target_arch = "wasm32")]
pub(crate) mod atoms;
#[cfg(target_arch = "wasm32")]
pub mod site_shell;
