//! Session store: the single owner of the authenticated identity.
//!
//! The identity lives in a `Signal<Option<Identity>>` provided via context
//! from the app root, and is mirrored to `localStorage` under the `"user"`
//! key so it survives reloads. All storage access goes through this module;
//! components never touch `localStorage` themselves.
//!
//! Change notification is two-layered: writes here dispatch an
//! `auth-change` CustomEvent for same-tab listeners, and the browser's
//! `storage` event covers other tabs. `SessionListeners` wires both back
//! into the signal.

use dioxus::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use journal_types::{Identity, ROLE_AUTHOR};

use crate::api::{self, ApiError};

pub const STORAGE_KEY: &str = "user";
pub const AUTH_EVENT: &str = "auth-change";

/// The shared identity signal. `None` means no one is logged in.
pub type Session = Signal<Option<Identity>>;

// ============================================================================
// Storage
// ============================================================================

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the persisted identity, if any. A corrupt entry is treated as
/// absent rather than an error.
pub fn load_stored_identity() -> Option<Identity> {
    let storage = local_storage()?;
    let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(identity) => Some(identity),
        Err(e) => {
            log::warn!("ignoring unreadable stored identity: {e}");
            None
        }
    }
}

fn notify_changed() {
    if let Some(window) = web_sys::window() {
        if let Ok(event) = web_sys::CustomEvent::new(AUTH_EVENT) {
            let _ = window.dispatch_event(&event);
        }
    }
}

fn persist_identity(identity: &Identity) {
    if let Some(storage) = local_storage() {
        match serde_json::to_string(identity) {
            Ok(json) => {
                let _ = storage.set_item(STORAGE_KEY, &json);
            }
            Err(e) => log::error!("failed to encode identity: {e}"),
        }
    }
    notify_changed();
}

fn clear_stored_identity() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
    notify_changed();
}

// ============================================================================
// Operations
// ============================================================================

/// Authenticate against the backend and make the returned identity current.
/// On failure the session is left untouched and the error propagates to the
/// caller's error banner.
pub async fn login(mut session: Session, email: &str, password: &str) -> Result<(), ApiError> {
    let identity = api::login(email, password).await?;
    persist_identity(&identity);
    session.set(Some(identity));
    Ok(())
}

pub fn logout(mut session: Session) {
    clear_stored_identity();
    session.set(None);
}

/// True iff someone is logged in and their role set intersects {ED, ME}.
pub fn is_editor(session: &Option<Identity>) -> bool {
    session.as_ref().is_some_and(Identity::is_editor)
}

/// Copy of `identity` with the author role appended when missing.
pub fn with_author_role(identity: &Identity) -> Identity {
    let mut updated = identity.clone();
    if !updated.has_role(ROLE_AUTHOR) {
        updated.roles.push(ROLE_AUTHOR.to_string());
    }
    updated
}

/// Optimistically grant the author role after a successful manuscript
/// creation, so authorship-gated UI unlocks without a fresh login.
///
/// This leaves the local role set briefly ahead of the server's; the server
/// still validates every authorization-sensitive call, and the local set is
/// rebuilt from the login response at the next login.
pub fn grant_author_role(mut session: Session) {
    let Some(current) = session.read().clone() else {
        return;
    };
    if current.has_role(ROLE_AUTHOR) {
        return;
    }
    let updated = with_author_role(&current);
    persist_identity(&updated);
    session.set(Some(updated));
}

// ============================================================================
// Change listeners
// ============================================================================

/// Keeps the session signal in sync with storage writes from this tab
/// (`auth-change`) and other tabs (`storage`). The closures must stay alive
/// for the lifetime of the app, so the root component parks this struct in
/// a hook.
pub struct SessionListeners {
    _on_auth_change: Closure<dyn FnMut(web_sys::Event)>,
    _on_storage: Closure<dyn FnMut(web_sys::StorageEvent)>,
}

impl SessionListeners {
    pub fn attach(mut session: Session) -> Option<Self> {
        let window = web_sys::window()?;

        let on_auth_change = Closure::wrap(Box::new(move |_e: web_sys::Event| {
            session.set(load_stored_identity());
        }) as Box<dyn FnMut(web_sys::Event)>);

        let on_storage = Closure::wrap(Box::new(move |e: web_sys::StorageEvent| {
            if e.key().as_deref() == Some(STORAGE_KEY) || e.key().is_none() {
                session.set(load_stored_identity());
            }
        }) as Box<dyn FnMut(web_sys::StorageEvent)>);

        if window
            .add_event_listener_with_callback(AUTH_EVENT, on_auth_change.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("could not attach {AUTH_EVENT} listener");
        }
        if window
            .add_event_listener_with_callback("storage", on_storage.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("could not attach storage listener");
        }

        Some(Self {
            _on_auth_change: on_auth_change,
            _on_storage: on_storage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(roles: &[&str]) -> Identity {
        Identity {
            email: "kris@journal.edu".to_string(),
            name: "Kris".to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn is_editor_false_for_null_session() {
        assert!(!is_editor(&None));
    }

    #[test]
    fn is_editor_requires_ed_or_me() {
        assert!(!is_editor(&Some(identity(&["AU"]))));
        assert!(is_editor(&Some(identity(&["AU", "ED"]))));
        assert!(is_editor(&Some(identity(&["ME"]))));
    }

    #[test]
    fn author_role_granted_once() {
        let granted = with_author_role(&identity(&["ED"]));
        assert_eq!(granted.roles, ["ED", "AU"]);
        let again = with_author_role(&granted);
        assert_eq!(again.roles, ["ED", "AU"]);
    }
}
