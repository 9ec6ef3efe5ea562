//! Explicit navigation port for components that request route changes.
//!
//! # Design
//! - The app root constructs one port from the router and provides it via
//!   context; components never reach for the router themselves.
//! - A fallback port keeps renders working outside a provider: clicks log a
//!   console warning instead of navigating.

use crate::core::routes::Route;
use gloo::console;
use yew::Callback;
use yew_router::Routable;

/// Cloneable handle that components use to request navigation.
#[derive(Clone, Debug, PartialEq)]
pub struct NavPort {
    push: Callback<Route>,
}

impl NavPort {
    /// Wrap a callback that performs the actual route change.
    #[must_use]
    pub const fn new(push: Callback<Route>) -> Self {
        Self { push }
    }

    /// Request navigation to `route`. Emits exactly one push per call.
    pub fn push(&self, route: Route) {
        self.push.emit(route);
    }

    /// Port used when no provider is in context; drops the request with a
    /// console warning.
    #[must_use]
    pub fn fallback() -> Self {
        Self::new(Callback::from(|route: Route| {
            console::warn!("no navigation port in context, dropping", route.to_path());
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn capturing_port() -> (NavPort, Rc<RefCell<Vec<Route>>>) {
        let pushed = Rc::new(RefCell::new(Vec::new()));
        let sink = pushed.clone();
        let port = NavPort::new(Callback::from(move |route| {
            sink.borrow_mut().push(route);
        }));
        (port, pushed)
    }

    #[test]
    fn push_forwards_the_route_once() {
        let (port, pushed) = capturing_port();
        port.push(Route::Home);
        assert_eq!(*pushed.borrow(), vec![Route::Home]);
    }

    #[test]
    fn clones_share_the_same_sink() {
        let (port, pushed) = capturing_port();
        let clone = port.clone();
        port.push(Route::Menu);
        clone.push(Route::AdminChat);
        assert_eq!(*pushed.borrow(), vec![Route::Menu, Route::AdminChat]);
        assert_eq!(port, clone);
    }
}
