//! Routed pages. Each page renders what its route promises and leaves the
//! chrome to the shells.

pub(crate) mod admin_chat;
pub(crate) mod home;
pub(crate) mod menu;
pub(crate) mod not_found;
