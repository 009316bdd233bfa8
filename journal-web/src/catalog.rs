//! Workflow catalog client.
//!
//! The backend is the single source of truth for manuscript states and the
//! actions legal out of each one. The catalog is assembled here once per
//! dashboard mount and treated as immutable until the next mount; nothing
//! in the client fills in transitions the backend did not report.

use std::collections::HashMap;

use journal_types::WorkflowCatalog;

use crate::api;

/// `state_names` has shipped in two shapes: a `{code: label}` map, and an
/// array of `{code, name}` objects. Accept both; anything else is treated
/// as an empty catalog (caller surfaces a warning, the UI must not guess).
pub fn parse_state_names(value: &serde_json::Value) -> HashMap<String, String> {
    match value {
        serde_json::Value::Object(map) => map
            .iter()
            .filter_map(|(code, label)| Some((code.clone(), label.as_str()?.to_string())))
            .collect(),
        serde_json::Value::Array(items) => items
            .iter()
            .filter_map(|item| {
                let code = item.get("code")?.as_str()?;
                let name = item.get("name")?.as_str()?;
                Some((code.to_string(), name.to_string()))
            })
            .collect(),
        _ => HashMap::new(),
    }
}

/// Fetch the full catalog. Partial failure degrades rather than aborts:
/// missing labels fall back to raw codes, a missing filter list hides the
/// filter dropdown, and missing transitions disable the transition form.
/// Returns the catalog plus any user-visible warnings.
pub async fn load_catalog() -> (WorkflowCatalog, Vec<String>) {
    let mut catalog = WorkflowCatalog::default();
    let mut warnings = Vec::new();

    match api::fetch_state_names_raw().await {
        Ok(value) => {
            catalog.state_names = parse_state_names(&value);
            if catalog.state_names.is_empty() {
                log::warn!("state_names response had no usable entries: {value}");
                warnings.push("Failed to retrieve state names".to_string());
            }
        }
        Err(e) => {
            log::error!("error fetching state names: {e}");
            warnings.push(format!("Failed to retrieve state names: {e}"));
        }
    }

    match api::fetch_valid_states().await {
        Ok(states) => catalog.valid_states = states,
        Err(e) => {
            // Non-critical: the filter dropdown just stays hidden.
            log::warn!("error fetching valid states: {e}");
        }
    }

    match api::fetch_state_transitions().await {
        Ok(transitions) => catalog.transitions = transitions,
        Err(e) => {
            log::error!("error fetching state transitions: {e}");
            warnings.push(format!("Failed to load available state transitions: {e}"));
        }
    }

    (catalog, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_map_shape() {
        let value = serde_json::json!({ "SUB": "Submitted", "REV": "Under Review" });
        let names = parse_state_names(&value);
        assert_eq!(names.len(), 2);
        assert_eq!(names["SUB"], "Submitted");
    }

    #[test]
    fn parses_array_shape() {
        let value = serde_json::json!([
            { "code": "SUB", "name": "Submitted" },
            { "code": "REV", "name": "Under Review" },
            { "code": "BAD" }
        ]);
        let names = parse_state_names(&value);
        assert_eq!(names.len(), 2);
        assert_eq!(names["REV"], "Under Review");
    }

    #[test]
    fn malformed_shape_yields_empty_map() {
        assert!(parse_state_names(&serde_json::json!("nope")).is_empty());
        assert!(parse_state_names(&serde_json::json!(42)).is_empty());
        assert!(parse_state_names(&serde_json::json!(null)).is_empty());
    }

    #[test]
    fn non_string_labels_are_skipped() {
        let value = serde_json::json!({ "SUB": "Submitted", "REV": 7 });
        let names = parse_state_names(&value);
        assert_eq!(names.len(), 1);
    }
}
