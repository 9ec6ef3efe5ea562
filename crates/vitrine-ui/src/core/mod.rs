//! Core, DOM-free primitives and helpers for the storefront UI.
pub mod nav;
pub mod routes;
pub mod store;
pub mod theme;
