//! Manuscript creation form.
//!
//! Title and author are required and validated before any network call.
//! When the logged-in person creates a manuscript under their own email,
//! the author role is granted locally so authorship-gated UI unlocks
//! without a fresh login (the server remains authoritative).

use dioxus::prelude::*;

use journal_types::NewManuscript;

use crate::api;
use crate::session::{self, Session};

/// Client-side validation: both fields required, whitespace is not content.
pub fn validate_new_manuscript(title: &str, author: &str) -> Result<NewManuscript, String> {
    let title = title.trim();
    let author = author.trim();
    if title.is_empty() {
        return Err("Title is required.".to_string());
    }
    if author.is_empty() {
        return Err("Author is required.".to_string());
    }
    Ok(NewManuscript {
        title: title.to_string(),
        author: author.to_string(),
    })
}

#[component]
pub fn CreateManuscriptForm(on_cancel: EventHandler<()>, on_success: EventHandler<()>) -> Element {
    let session = use_context::<Session>();

    let mut title = use_signal(String::new);
    // Prefill with the logged-in email; still editable for editors
    // submitting on an author's behalf.
    let mut author = use_signal(|| {
        session
            .peek()
            .as_ref()
            .map(|id| id.email.clone())
            .unwrap_or_default()
    });
    let mut form_error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |_| {
        if *submitting.peek() {
            return;
        }
        let manuscript = match validate_new_manuscript(&title.peek(), &author.peek()) {
            Ok(m) => m,
            Err(message) => {
                form_error.set(Some(message));
                return;
            }
        };
        submitting.set(true);
        form_error.set(None);
        spawn(async move {
            let result = api::create_manuscript(&manuscript).await;
            submitting.set(false);
            match result {
                Ok(()) => {
                    let own_submission = session
                        .peek()
                        .as_ref()
                        .is_some_and(|id| id.email == manuscript.author);
                    if own_submission {
                        session::grant_author_role(session);
                    }
                    title.set(String::new());
                    on_success.call(());
                }
                Err(e) => form_error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        form {
            class: "manuscript-form",
            "data-testid": "create-form",
            onsubmit: move |e| e.prevent_default(),
            h2 { "Create New Manuscript" }

            if let Some(message) = form_error.read().as_deref() {
                div { class: "form-error", "data-testid": "create-error", "{message}" }
            }

            div { class: "form-group",
                label { r#for: "title", "Title" }
                input {
                    id: "title",
                    r#type: "text",
                    required: true,
                    value: "{title}",
                    oninput: move |e| title.set(e.value()),
                }
            }

            div { class: "form-group",
                label { r#for: "author", "Author" }
                input {
                    id: "author",
                    r#type: "text",
                    required: true,
                    value: "{author}",
                    oninput: move |e| author.set(e.value()),
                }
            }

            div { class: "form-buttons",
                button {
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    r#type: "submit",
                    "data-testid": "create-submit",
                    disabled: submitting(),
                    onclick: handle_submit,
                    "Create Manuscript"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_title_fails_before_any_request() {
        assert!(validate_new_manuscript("", "a@j.edu").is_err());
        assert!(validate_new_manuscript("   ", "a@j.edu").is_err());
    }

    #[test]
    fn empty_author_fails_before_any_request() {
        let err = validate_new_manuscript("A Title", "").unwrap_err();
        assert_eq!(err, "Author is required.");
    }

    #[test]
    fn valid_input_is_trimmed() {
        let m = validate_new_manuscript("  A Title ", " a@j.edu ").unwrap();
        assert_eq!(m.title, "A Title");
        assert_eq!(m.author, "a@j.edu");
    }
}
