//! App root: session context, change listeners, and routing.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::{Dashboard, LoginView, Masthead};
use crate::session::{self, SessionListeners};

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Dashboard {},
    #[route("/login")]
    Login {},
}

#[component]
pub fn App() -> Element {
    // Session context — provided to the whole subtree, seeded from storage
    // so a reload keeps the user logged in.
    let session = use_context_provider(|| Signal::new(session::load_stored_identity()));

    // Keep the storage/auth-change listeners alive for the app's lifetime.
    use_hook(|| Rc::new(SessionListeners::attach(session)));

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Shell() -> Element {
    rsx! {
        Masthead {}
        Outlet::<Route> {}
    }
}

#[component]
fn Login() -> Element {
    rsx! {
        LoginView {}
    }
}
