//! Manuscript transition form.
//!
//! Drives one state transition for one manuscript. The action selector is
//! populated from the workflow catalog's transition table for the
//! manuscript's current state and from nowhere else; if that table never
//! arrived the selector stays empty and submit stays disabled. Withdrawal
//! is only offered to the manuscript's own author. The two referee actions
//! additionally require picking a referee from the directory.

use dioxus::prelude::*;

use journal_types::{
    is_referee_action, Manuscript, ManuscriptAction, WorkflowCatalog, ACTION_WITHDRAW,
};

use crate::api;
use crate::session::Session;

// ============================================================================
// Draft state — pure, no signals
// ============================================================================

/// The in-progress transition. `action` / `referee` empty means unselected.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionDraft {
    pub manu_id: String,
    pub curr_state: String,
    pub action: String,
    pub referee: String,
}

impl TransitionDraft {
    pub fn new(manuscript: &Manuscript) -> Self {
        Self {
            manu_id: manuscript.manu_id.clone(),
            curr_state: manuscript.curr_state.clone(),
            action: String::new(),
            referee: String::new(),
        }
    }

    /// Select an action. A stale referee choice is cleared whenever the new
    /// action is not one of the referee actions.
    pub fn select_action(&mut self, action: &str) {
        self.action = action.to_string();
        if !is_referee_action(action) {
            self.referee.clear();
        }
    }

    pub fn requires_referee(&self) -> bool {
        is_referee_action(&self.action)
    }

    pub fn can_submit(&self) -> bool {
        !self.manu_id.is_empty()
            && !self.curr_state.is_empty()
            && !self.action.is_empty()
            && (!self.requires_referee() || !self.referee.is_empty())
    }

    pub fn to_payload(&self) -> ManuscriptAction {
        ManuscriptAction {
            manu_id: self.manu_id.clone(),
            curr_state: self.curr_state.clone(),
            action: self.action.clone(),
            referee: if self.referee.is_empty() {
                None
            } else {
                Some(self.referee.clone())
            },
        }
    }
}

/// Actions to offer for a manuscript in `state`: exactly the catalog's
/// transition list, minus withdrawal when the viewer is not the owning
/// author. Never unions in anything.
pub fn available_actions<'a>(
    catalog: &'a WorkflowCatalog,
    state: &str,
    viewer_owns_manuscript: bool,
) -> Vec<&'a str> {
    catalog
        .actions_for(state)
        .iter()
        .map(String::as_str)
        .filter(|action| *action != ACTION_WITHDRAW || viewer_owns_manuscript)
        .collect()
}

// ============================================================================
// Component
// ============================================================================

#[component]
pub fn TransitionForm(
    manuscript: Manuscript,
    catalog: WorkflowCatalog,
    on_cancel: EventHandler<()>,
    on_success: EventHandler<()>,
) -> Element {
    let session = use_context::<Session>();

    // Fresh draft each time the form opens for a manuscript.
    let mut draft = use_signal(|| TransitionDraft::new(&manuscript));
    let mut form_error = use_signal(|| None::<String>);
    let mut referees = use_signal(|| None::<Vec<String>>);
    let mut submitting = use_signal(|| false);

    let viewer_owns = session
        .read()
        .as_ref()
        .is_some_and(|id| manuscript.is_owned_by(&id.email));

    let actions: Vec<String> = available_actions(&catalog, &manuscript.curr_state, viewer_owns)
        .into_iter()
        .map(str::to_string)
        .collect();

    let needs_referee = draft.read().requires_referee();

    // The referee directory is only needed once a referee action is picked.
    use_effect(move || {
        if !draft.read().requires_referee() || referees.peek().is_some() {
            return;
        }
        spawn(async move {
            match api::fetch_referees().await {
                Ok(list) => referees.set(Some(list)),
                Err(e) => {
                    log::error!("error loading referees: {e}");
                    form_error.set(Some(format!("Could not load referees list: {e}")));
                }
            }
        });
    });

    let submit_disabled = !draft.read().can_submit() || *submitting.read();

    let handle_submit = move |_| {
        if *submitting.peek() {
            return;
        }
        let payload = draft.peek().to_payload();
        submitting.set(true);
        form_error.set(None);
        spawn(async move {
            let result = api::submit_action(&payload).await;
            submitting.set(false);
            match result {
                Ok(()) => on_success.call(()),
                Err(e) => form_error.set(Some(e.to_string())),
            }
        });
    };

    let current_state_label = catalog.label_for(&manuscript.curr_state).to_string();
    let transitions_unavailable = catalog.transitions_unavailable();

    rsx! {
        form {
            class: "manuscript-form state-form",
            "data-testid": "transition-form",
            onsubmit: move |e| e.prevent_default(),
            h2 { "Change Manuscript State" }

            if let Some(message) = form_error.read().as_deref() {
                div { class: "form-error", "data-testid": "transition-error", "{message}" }
            }

            if transitions_unavailable {
                div { class: "form-error",
                    "Available transitions could not be loaded; submitting is disabled."
                }
            }

            div { class: "form-group",
                label { r#for: "manuscriptId", "Manuscript ID" }
                input {
                    id: "manuscriptId",
                    r#type: "text",
                    class: "readonly-field",
                    readonly: true,
                    value: "{manuscript.manu_id}",
                }
            }

            div { class: "form-group",
                label { r#for: "currentState", "Current State" }
                input {
                    id: "currentState",
                    r#type: "text",
                    class: "readonly-field",
                    readonly: true,
                    value: "{current_state_label}",
                }
            }

            div { class: "form-group",
                label { r#for: "newState", "New State" }
                select {
                    id: "newState",
                    required: true,
                    value: "{draft.read().action}",
                    onchange: move |e| draft.write().select_action(&e.value()),
                    option { value: "", "Select action" }
                    for action in actions.iter() {
                        option {
                            key: "{action}",
                            value: "{action}",
                            "{catalog.label_for(action)}"
                        }
                    }
                }
            }

            if needs_referee {
                div { class: "form-group",
                    label { r#for: "refereeEmail", "Referee Email" }
                    select {
                        id: "refereeEmail",
                        required: true,
                        value: "{draft.read().referee}",
                        onchange: move |e| draft.write().referee = e.value(),
                        option { value: "", "Select a referee" }
                        for email in referees.read().iter().flatten() {
                            option { key: "{email}", value: "{email}", "{email}" }
                        }
                    }
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
                    "data-testid": "transition-submit",
                    disabled: submit_disabled,
                    onclick: handle_submit,
                    if submitting() { "Submitting" } else { "Perform Action" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn catalog() -> WorkflowCatalog {
        WorkflowCatalog {
            state_names: HashMap::from([
                ("SUB".to_string(), "Submitted".to_string()),
                ("REV".to_string(), "Under Review".to_string()),
            ]),
            transitions: HashMap::from([
                (
                    "SUB".to_string(),
                    vec!["REJ".to_string(), "REV".to_string(), "WIT".to_string()],
                ),
                (
                    "REV".to_string(),
                    vec!["ARF".to_string(), "DRF".to_string(), "ACC".to_string()],
                ),
            ]),
            valid_states: Vec::new(),
        }
    }

    fn manuscript(state: &str) -> Manuscript {
        Manuscript {
            manu_id: "m1".to_string(),
            title: "T".to_string(),
            author: "au@j.edu".to_string(),
            curr_state: state.to_string(),
            referees: Vec::new(),
        }
    }

    #[test]
    fn offers_exactly_the_catalog_transitions() {
        let cat = catalog();
        assert_eq!(available_actions(&cat, "SUB", true), ["REJ", "REV", "WIT"]);
        // unknown state: nothing offered, never a guess
        assert!(available_actions(&cat, "PUB", true).is_empty());
    }

    #[test]
    fn withdrawal_filtered_for_non_owners() {
        let cat = catalog();
        assert_eq!(available_actions(&cat, "SUB", false), ["REJ", "REV"]);
    }

    #[test]
    fn selecting_non_referee_action_clears_referee() {
        let mut draft = TransitionDraft::new(&manuscript("REV"));
        draft.select_action("ARF");
        assert!(draft.requires_referee());
        draft.referee = "ref@j.edu".to_string();
        assert!(draft.can_submit());

        draft.select_action("ACC");
        assert!(!draft.requires_referee());
        assert!(draft.referee.is_empty());
        assert!(draft.can_submit());
    }

    #[test]
    fn referee_action_blocks_submit_until_chosen() {
        let mut draft = TransitionDraft::new(&manuscript("REV"));
        draft.select_action("DRF");
        assert!(!draft.can_submit());
        draft.referee = "ref@j.edu".to_string();
        assert!(draft.can_submit());
    }

    #[test]
    fn submit_blocked_with_no_action() {
        let draft = TransitionDraft::new(&manuscript("SUB"));
        assert!(!draft.can_submit());
    }

    #[test]
    fn payload_omits_referee_for_plain_actions() {
        let mut draft = TransitionDraft::new(&manuscript("SUB"));
        draft.select_action("REJ");
        let json = serde_json::to_string(&draft.to_payload()).unwrap();
        assert_eq!(
            json,
            r#"{"manu_id":"m1","curr_state":"SUB","action":"REJ"}"#
        );
    }

    #[test]
    fn payload_carries_referee_when_set() {
        let mut draft = TransitionDraft::new(&manuscript("REV"));
        draft.select_action("ARF");
        draft.referee = "ref@j.edu".to_string();
        let payload = draft.to_payload();
        assert_eq!(payload.referee.as_deref(), Some("ref@j.edu"));
    }
}
