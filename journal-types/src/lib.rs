//! Shared types for the journal front-end
//!
//! Everything that crosses the wire or is shared between components lives
//! here: manuscripts, people, the authenticated identity, and the workflow
//! catalog the backend publishes. Serializable with serde for JSON over HTTP.
//!
//! Field names follow the backend contract (`manu_id`, `curr_state`, ...);
//! codes (states, actions, roles) are opaque strings assigned server-side.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// Role & action codes
// ============================================================================

/// The two role codes that grant full manuscript mutation rights.
/// This is the one place role codes are matched literally; everywhere else
/// they are opaque strings resolved through the backend's role directory.
pub const ROLE_EDITOR: &str = "ED";
pub const ROLE_MANAGING_EDITOR: &str = "ME";

/// Role code granted locally (optimistically) when a logged-in person
/// creates their first manuscript.
pub const ROLE_AUTHOR: &str = "AU";

/// Action codes with client-side behavior attached: the two referee
/// actions require a referee selection, and withdrawal is restricted to the
/// manuscript's own author.
pub const ACTION_ASSIGN_REFEREE: &str = "ARF";
pub const ACTION_REMOVE_REFEREE: &str = "DRF";
pub const ACTION_WITHDRAW: &str = "WIT";

/// True if `action` is one of the two referee-manipulating actions.
pub fn is_referee_action(action: &str) -> bool {
    action == ACTION_ASSIGN_REFEREE || action == ACTION_REMOVE_REFEREE
}

// ============================================================================
// Manuscript
// ============================================================================

/// A manuscript record as the backend reports it.
///
/// `manu_id` is assigned at creation and never changes; `curr_state` only
/// moves by applying an action the workflow catalog recognizes for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manuscript {
    pub manu_id: String,
    pub title: String,
    /// Submitting author, typically an email address.
    pub author: String,
    pub curr_state: String,
    /// Referee emails; mutated only via the ARF/DRF actions.
    #[serde(default)]
    pub referees: Vec<String>,
}

impl Manuscript {
    /// Whether `email` is this manuscript's submitting author.
    pub fn is_owned_by(&self, email: &str) -> bool {
        !email.is_empty() && self.author == email
    }
}

/// Request body for creating a manuscript. The backend assigns the id and
/// the entry state.
#[derive(Debug, Clone, Serialize)]
pub struct NewManuscript {
    pub title: String,
    pub author: String,
}

/// Request body for `receive_action`. `referee` is omitted from the JSON
/// entirely when the chosen action does not involve a referee.
#[derive(Debug, Clone, Serialize)]
pub struct ManuscriptAction {
    pub manu_id: String,
    pub curr_state: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referee: Option<String>,
}

// ============================================================================
// People & identity
// ============================================================================

/// A person record from the people directory. Lookup endpoints may return
/// partial records (the name endpoint sends only `name`), so every field
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub affiliation: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// The authenticated identity returned by the login endpoint and persisted
/// client-side between reloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Identity {
    /// Full rights iff the role set intersects {ED, ME}.
    pub fn is_editor(&self) -> bool {
        self.roles
            .iter()
            .any(|r| r == ROLE_EDITOR || r == ROLE_MANAGING_EDITOR)
    }

    pub fn has_role(&self, code: &str) -> bool {
        self.roles.iter().any(|r| r == code)
    }
}

// ============================================================================
// Workflow catalog
// ============================================================================

/// One valid state as the `valid_states` endpoint reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateOption {
    pub code: String,
    pub name: String,
}

/// The backend's authoritative description of the manuscript workflow:
/// the universe of state codes with display labels, and the actions legal
/// out of each state. Fetched once per dashboard mount and treated as
/// immutable for the duration of a transition.
///
/// There is deliberately no built-in fallback table; an empty catalog
/// means the transition UI stays disabled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowCatalog {
    /// State (and action) code -> human-readable label.
    #[serde(default)]
    pub state_names: HashMap<String, String>,
    /// State code -> action codes legal from that state.
    #[serde(default)]
    pub transitions: HashMap<String, Vec<String>>,
    /// States offered by the filter dropdown, in backend order.
    #[serde(default)]
    pub valid_states: Vec<StateOption>,
}

impl WorkflowCatalog {
    /// Display label for a state or action code, falling back to the raw
    /// code when the catalog has no name for it.
    pub fn label_for<'a>(&'a self, code: &'a str) -> &'a str {
        self.state_names.get(code).map(String::as_str).unwrap_or(code)
    }

    /// Actions legal from `state`, exactly as the backend reported them.
    /// Unknown state -> empty slice, never a guess.
    pub fn actions_for(&self, state: &str) -> &[String] {
        self.transitions
            .get(state)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `code` is one of the states offered by the filter dropdown.
    pub fn is_valid_state(&self, code: &str) -> bool {
        self.valid_states.iter().any(|s| s.code == code)
    }

    /// True when the transitions table never arrived; the transition form
    /// must disable submission in this case.
    pub fn transitions_unavailable(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> WorkflowCatalog {
        WorkflowCatalog {
            state_names: HashMap::from([
                ("SUB".to_string(), "Submitted".to_string()),
                ("REV".to_string(), "Under Review".to_string()),
            ]),
            transitions: HashMap::from([(
                "SUB".to_string(),
                vec!["REJ".to_string(), "REV".to_string(), "WIT".to_string()],
            )]),
            valid_states: vec![
                StateOption {
                    code: "SUB".to_string(),
                    name: "Submitted".to_string(),
                },
                StateOption {
                    code: "REV".to_string(),
                    name: "Under Review".to_string(),
                },
            ],
        }
    }

    #[test]
    fn label_falls_back_to_raw_code() {
        let cat = catalog();
        assert_eq!(cat.label_for("SUB"), "Submitted");
        assert_eq!(cat.label_for("REJ"), "REJ");
    }

    #[test]
    fn actions_for_unknown_state_is_empty() {
        let cat = catalog();
        assert_eq!(cat.actions_for("SUB"), ["REJ", "REV", "WIT"]);
        assert!(cat.actions_for("PUB").is_empty());
    }

    #[test]
    fn person_tolerates_partial_directory_records() {
        let p: Person = serde_json::from_str(r#"{"name":"Ada Lovelace"}"#).unwrap();
        assert_eq!(p.name, "Ada Lovelace");
        assert!(p.email.is_empty());
        assert!(p.roles.is_empty());
    }

    #[test]
    fn valid_state_membership() {
        let cat = catalog();
        assert!(cat.is_valid_state("SUB"));
        assert!(!cat.is_valid_state("ZZZ"));
        assert!(!cat.is_valid_state(""));
    }

    #[test]
    fn editor_check_intersects_ed_me() {
        let mut id = Identity {
            email: "a@b.edu".to_string(),
            name: "A".to_string(),
            roles: vec!["AU".to_string()],
        };
        assert!(!id.is_editor());
        id.roles.push("ME".to_string());
        assert!(id.is_editor());
        id.roles = vec!["ED".to_string()];
        assert!(id.is_editor());
    }

    #[test]
    fn action_payload_omits_absent_referee() {
        let action = ManuscriptAction {
            manu_id: "m1".to_string(),
            curr_state: "SUB".to_string(),
            action: "REJ".to_string(),
            referee: None,
        };
        let json = serde_json::to_string(&action).unwrap();
        assert!(!json.contains("referee"));

        let with_ref = ManuscriptAction {
            referee: Some("ref@b.edu".to_string()),
            ..action
        };
        let json = serde_json::to_string(&with_ref).unwrap();
        assert!(json.contains("\"referee\":\"ref@b.edu\""));
    }

    #[test]
    fn manuscript_deserializes_without_referees() {
        let m: Manuscript = serde_json::from_str(
            r#"{"manu_id":"m1","title":"T","author":"a@b.edu","curr_state":"SUB"}"#,
        )
        .unwrap();
        assert!(m.referees.is_empty());
        assert!(m.is_owned_by("a@b.edu"));
        assert!(!m.is_owned_by(""));
    }

    #[test]
    fn referee_actions_recognized() {
        assert!(is_referee_action(ACTION_ASSIGN_REFEREE));
        assert!(is_referee_action(ACTION_REMOVE_REFEREE));
        assert!(!is_referee_action(ACTION_WITHDRAW));
        assert!(!is_referee_action("REJ"));
    }
}
