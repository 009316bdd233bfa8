//! Top bar: route links plus the current identity.

use dioxus::prelude::*;

use crate::app::Route;
use crate::session::{self, Session};

use super::styles::MASTHEAD_STYLES;

#[component]
pub fn Masthead() -> Element {
    let session = use_context::<Session>();
    let identity = session.read().clone();

    rsx! {
        style { {MASTHEAD_STYLES} }
        header { class: "masthead",
            nav {
                Link { to: Route::Dashboard {}, "Dashboard" }
            }
            div { class: "identity",
                if let Some(identity) = identity {
                    span {
                        "data-testid": "masthead-identity",
                        if identity.name.is_empty() { "{identity.email}" } else { "{identity.name}" }
                    }
                    button {
                        onclick: move |_| session::logout(session),
                        "Log out"
                    }
                } else {
                    Link { to: Route::Login {}, "Login" }
                }
            }
        }
    }
}
