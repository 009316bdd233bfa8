//! Login screen: the session store's entry point.

use dioxus::prelude::*;

use crate::session::{self, Session};

use super::styles::{DASHBOARD_STYLES, LOGIN_STYLES};

#[component]
pub fn LoginView() -> Element {
    let session = use_context::<Session>();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let handle_submit = move |_| {
        if *busy.peek() {
            return;
        }
        let email_value = email.peek().trim().to_string();
        let password_value = password.peek().clone();
        if email_value.is_empty() || password_value.is_empty() {
            error.set(Some("Email and password are required".to_string()));
            return;
        }
        busy.set(true);
        error.set(None);
        spawn(async move {
            let result = session::login(session, &email_value, &password_value).await;
            busy.set(false);
            match result {
                Ok(()) => {
                    navigator.push(crate::app::Route::Dashboard {});
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        style { {DASHBOARD_STYLES} }
        style { {LOGIN_STYLES} }
        div { class: "login-container",
            header {
                h1 { "Login" }
            }
            form {
                class: "login-form",
                "data-testid": "login-form",
                onsubmit: move |e| e.prevent_default(),

                if let Some(message) = error.read().as_deref() {
                    div { class: "error-message", "data-testid": "login-error", "{message}" }
                }

                div { class: "form-group",
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        required: true,
                        placeholder: "Enter your email",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                }

                div { class: "form-group",
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        required: true,
                        placeholder: "Enter your password",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                }

                div { class: "form-actions",
                    button {
                        r#type: "submit",
                        disabled: busy(),
                        onclick: handle_submit,
                        if busy() { "Logging in" } else { "Login" }
                    }
                }
            }
        }
    }
}
