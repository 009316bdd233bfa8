//! View-mode state for the manuscript list.

use journal_types::Identity;

/// How an editor wants the list presented. Pure UI state; switching modes
/// only changes which endpoint the next fetch hits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Default,
    Sorted,
    /// Filtered to one valid state code.
    FilteredBy(String),
}

impl ViewMode {
    /// Value bound to the filter dropdown; empty when no filter is active.
    pub fn filter_value(&self) -> &str {
        match self {
            ViewMode::FilteredBy(code) => code,
            _ => "",
        }
    }
}

/// Which list the viewer is entitled to see. Editors get the full list in
/// the selected mode; a logged-in non-editor sees only their own
/// manuscripts; anyone else sees nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum ListScope {
    Editor(ViewMode),
    AuthorOwned(String),
    None,
}

impl ListScope {
    pub fn resolve(session: &Option<Identity>, mode: &ViewMode) -> Self {
        match session {
            Some(identity) if identity.is_editor() => ListScope::Editor(mode.clone()),
            Some(identity) if !identity.email.is_empty() => {
                ListScope::AuthorOwned(identity.email.clone())
            }
            _ => ListScope::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(email: &str, roles: &[&str]) -> Identity {
        Identity {
            email: email.to_string(),
            name: String::new(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn scope_none_without_session() {
        assert_eq!(ListScope::resolve(&None, &ViewMode::Sorted), ListScope::None);
    }

    #[test]
    fn editor_keeps_selected_mode() {
        let session = Some(identity("ed@j.edu", &["ED"]));
        assert_eq!(
            ListScope::resolve(&session, &ViewMode::Sorted),
            ListScope::Editor(ViewMode::Sorted)
        );
    }

    #[test]
    fn non_editor_author_is_scoped_to_own_manuscripts() {
        let session = Some(identity("au@j.edu", &["AU"]));
        assert_eq!(
            ListScope::resolve(&session, &ViewMode::Sorted),
            ListScope::AuthorOwned("au@j.edu".to_string())
        );
    }

    #[test]
    fn filter_value_tracks_active_filter() {
        assert_eq!(ViewMode::Default.filter_value(), "");
        assert_eq!(ViewMode::FilteredBy("REV".to_string()).filter_value(), "REV");
    }
}
