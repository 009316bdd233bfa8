//! Dashboard pure logic — no RSX, no signals.

use std::collections::HashMap;

use journal_types::{Identity, Manuscript, WorkflowCatalog};

use super::types::{ListScope, ViewMode};

/// Per-row action visibility. Editors get everything; a non-editor author
/// may edit (and withdraw through the form) their own manuscript but never
/// delete it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowPermissions {
    pub can_edit: bool,
    pub can_delete: bool,
}

pub fn row_permissions(session: &Option<Identity>, manuscript: &Manuscript) -> RowPermissions {
    match session {
        Some(identity) if identity.is_editor() => RowPermissions {
            can_edit: true,
            can_delete: true,
        },
        Some(identity) if manuscript.is_owned_by(&identity.email) => RowPermissions {
            can_edit: true,
            can_delete: false,
        },
        _ => RowPermissions::default(),
    }
}

/// The backend's sorted endpoint returns ascending order; the dashboard
/// displays it newest-group-first.
pub fn order_for_display(mode: &ViewMode, mut manuscripts: Vec<Manuscript>) -> Vec<Manuscript> {
    if *mode == ViewMode::Sorted {
        manuscripts.reverse();
    }
    manuscripts
}

/// Where the view lands after a failed fetch. Non-default views revert to
/// the default view, buying exactly one retry; a default-view failure stays
/// put so the revert can never loop.
pub fn fallback_mode(failed: &ViewMode) -> Option<ViewMode> {
    if *failed == ViewMode::Default {
        None
    } else {
        Some(ViewMode::Default)
    }
}

pub fn list_heading(scope: &ListScope, catalog: &WorkflowCatalog) -> String {
    match scope {
        ListScope::AuthorOwned(_) => "Your Manuscripts".to_string(),
        ListScope::Editor(ViewMode::Default) => "All Manuscripts".to_string(),
        ListScope::Editor(ViewMode::Sorted) => "Manuscripts Sorted by State".to_string(),
        ListScope::Editor(ViewMode::FilteredBy(code)) => {
            format!("Manuscripts in State: {}", catalog.label_for(code))
        }
        ListScope::None => String::new(),
    }
}

pub fn looks_like_email(value: &str) -> bool {
    value.contains('@')
}

/// Name to show in the author column: the resolved display name when we
/// have one, otherwise the raw identifier.
pub fn display_author<'a>(author: &'a str, names: &'a HashMap<String, String>) -> &'a str {
    if looks_like_email(author) {
        if let Some(name) = names.get(author) {
            return name;
        }
    }
    author
}

/// Distinct author emails worth resolving that we have not asked about yet.
pub fn unresolved_authors(
    manuscripts: &[Manuscript],
    already_requested: &std::collections::HashSet<String>,
) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    manuscripts
        .iter()
        .filter(|m| looks_like_email(&m.author))
        .filter(|m| !already_requested.contains(&m.author))
        .filter(|m| seen.insert(m.author.clone()))
        .map(|m| m.author.clone())
        .collect()
}

pub fn confirm_delete_message(manu_id: &str) -> String {
    format!("Are you sure you want to delete manuscript ID {manu_id}?")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn manuscript(id: &str, author: &str, state: &str) -> Manuscript {
        Manuscript {
            manu_id: id.to_string(),
            title: format!("Paper {id}"),
            author: author.to_string(),
            curr_state: state.to_string(),
            referees: Vec::new(),
        }
    }

    fn identity(email: &str, roles: &[&str]) -> Identity {
        Identity {
            email: email.to_string(),
            name: String::new(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn editors_get_full_row_actions() {
        let session = Some(identity("ed@j.edu", &["ED"]));
        let perms = row_permissions(&session, &manuscript("m1", "other@j.edu", "SUB"));
        assert!(perms.can_edit);
        assert!(perms.can_delete);
    }

    #[test]
    fn owning_author_gets_edit_only() {
        let session = Some(identity("au@j.edu", &["AU"]));
        let own = row_permissions(&session, &manuscript("m1", "au@j.edu", "SUB"));
        assert!(own.can_edit);
        assert!(!own.can_delete);

        let other = row_permissions(&session, &manuscript("m2", "x@j.edu", "SUB"));
        assert_eq!(other, RowPermissions::default());
    }

    #[test]
    fn no_session_no_actions() {
        let perms = row_permissions(&None, &manuscript("m1", "au@j.edu", "SUB"));
        assert_eq!(perms, RowPermissions::default());
    }

    #[test]
    fn sorted_mode_reverses_for_display() {
        let list = vec![
            manuscript("m1", "a@j.edu", "SUB"),
            manuscript("m2", "b@j.edu", "REV"),
        ];
        let sorted = order_for_display(&ViewMode::Sorted, list.clone());
        assert_eq!(sorted[0].manu_id, "m2");
        let unsorted = order_for_display(&ViewMode::Default, list);
        assert_eq!(unsorted[0].manu_id, "m1");
    }

    #[test]
    fn failed_fetch_reverts_to_default_view_once() {
        assert_eq!(fallback_mode(&ViewMode::Sorted), Some(ViewMode::Default));
        assert_eq!(
            fallback_mode(&ViewMode::FilteredBy("REV".to_string())),
            Some(ViewMode::Default)
        );
        // a default-view failure has nowhere to fall back to, so the
        // retry stops after one round trip
        assert_eq!(fallback_mode(&ViewMode::Default), None);
    }

    #[test]
    fn author_display_falls_back_to_raw_identifier() {
        let mut names = HashMap::new();
        names.insert("a@j.edu".to_string(), "Ada".to_string());
        assert_eq!(display_author("a@j.edu", &names), "Ada");
        assert_eq!(display_author("b@j.edu", &names), "b@j.edu");
        // not an email: never looked up even if a mapping exists
        names.insert("legacy-id".to_string(), "Nope".to_string());
        assert_eq!(display_author("legacy-id", &names), "legacy-id");
    }

    #[test]
    fn unresolved_authors_dedupes_and_skips_requested() {
        let manuscripts = vec![
            manuscript("m1", "a@j.edu", "SUB"),
            manuscript("m2", "a@j.edu", "REV"),
            manuscript("m3", "b@j.edu", "SUB"),
            manuscript("m4", "legacy-id", "SUB"),
        ];
        let mut requested = HashSet::new();
        requested.insert("b@j.edu".to_string());
        assert_eq!(
            unresolved_authors(&manuscripts, &requested),
            vec!["a@j.edu".to_string()]
        );
    }

    #[test]
    fn heading_uses_catalog_label_for_filter() {
        let catalog = WorkflowCatalog {
            state_names: HashMap::from([("REV".to_string(), "Under Review".to_string())]),
            ..Default::default()
        };
        let scope = ListScope::Editor(ViewMode::FilteredBy("REV".to_string()));
        assert_eq!(
            list_heading(&scope, &catalog),
            "Manuscripts in State: Under Review"
        );
        let unknown = ListScope::Editor(ViewMode::FilteredBy("ZZZ".to_string()));
        assert_eq!(list_heading(&unknown, &catalog), "Manuscripts in State: ZZZ");
    }
}
