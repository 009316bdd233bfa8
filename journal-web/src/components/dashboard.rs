//! Manuscript dashboard: the collection view.
//!
//! Renders the manuscript set the viewer is entitled to see (full list for
//! editors, own manuscripts for authors), with the editor-only view modes:
//! default order, backend-sorted by state, or filtered to one valid state.
//! All mutation goes through the transition form, the create form, or the
//! confirmed delete action; the table itself never edits a manuscript.

pub mod logic;
pub mod types;

use std::collections::{HashMap, HashSet};

use dioxus::prelude::*;

use journal_types::{Manuscript, WorkflowCatalog};

use crate::api::{self, ApiError};
use crate::app::Route;
use crate::catalog::load_catalog;
use crate::session::Session;

use super::styles::{DASHBOARD_STYLES, FORM_STYLES};
use super::{CreateManuscriptForm, TransitionForm};
use logic::*;
use types::{ListScope, ViewMode};

async fn fetch_for(scope: &ListScope) -> Result<Vec<Manuscript>, ApiError> {
    match scope {
        ListScope::Editor(ViewMode::Default) => api::fetch_manuscripts().await,
        ListScope::Editor(ViewMode::Sorted) => api::fetch_manuscripts_sorted().await,
        ListScope::Editor(ViewMode::FilteredBy(code)) => {
            api::fetch_manuscripts_by_state(code).await
        }
        ListScope::AuthorOwned(email) => api::fetch_author_manuscripts(email).await,
        ListScope::None => Ok(Vec::new()),
    }
}

#[component]
pub fn Dashboard() -> Element {
    let session = use_context::<Session>();

    let mut error = use_signal(|| None::<String>);
    let mut catalog_warning = use_signal(|| None::<String>);
    let mut manuscripts = use_signal(Vec::<Manuscript>::new);
    let mut catalog = use_signal(WorkflowCatalog::default);
    let view_mode = use_signal(ViewMode::default);
    let mut show_create = use_signal(|| false);
    let mut editing = use_signal(|| None::<Manuscript>);
    let mut author_names = use_signal(HashMap::<String, String>::new);
    let mut names_requested = use_signal(HashSet::<String>::new);
    // Bumped after any successful mutation to force a refetch.
    let refresh = use_signal(|| 0u32);
    // Guards against a stale response landing after the inputs changed.
    let mut fetch_generation = use_signal(|| 0u64);

    // Catalog is fetched once per mount and held immutable after that.
    use_effect(move || {
        spawn(async move {
            let (loaded, warnings) = load_catalog().await;
            catalog.set(loaded);
            if !warnings.is_empty() {
                catalog_warning.set(Some(warnings.join("; ")));
            }
        });
    });

    // Refetch whenever the viewer, the view mode, or the refresh tick
    // changes. A failed non-default fetch falls back to the default view,
    // which re-runs this effect for exactly one retry.
    use_effect(move || {
        let scope = ListScope::resolve(&session.read(), &view_mode.read());
        let _ = refresh();

        let generation = fetch_generation.peek().wrapping_add(1);
        fetch_generation.set(generation);

        if scope == ListScope::None {
            manuscripts.set(Vec::new());
            error.set(Some("Please log in to view manuscripts.".to_string()));
            return;
        }

        let mode = view_mode.peek().clone();
        let mut view_mode = view_mode;
        let mut manuscripts = manuscripts;
        let mut error = error;
        spawn(async move {
            let result = fetch_for(&scope).await;
            if *fetch_generation.peek() != generation {
                // The view moved on while this request was in flight.
                return;
            }
            match result {
                Ok(list) => {
                    manuscripts.set(order_for_display(&mode, list));
                    error.set(None);
                }
                Err(e) => {
                    log::error!("error fetching manuscripts ({scope:?}): {e}");
                    error.set(Some(format!("Failed to retrieve manuscripts: {e}")));
                    if let Some(fallback) = fallback_mode(&mode) {
                        view_mode.set(fallback);
                    }
                }
            }
        });
    });

    // Best-effort author-name resolution. Failures are logged, never shown;
    // the table falls back to the raw email.
    use_effect(move || {
        let pending = unresolved_authors(&manuscripts.read(), &names_requested.peek());
        if pending.is_empty() {
            return;
        }
        names_requested.write().extend(pending.iter().cloned());
        for email in pending {
            let mut author_names = author_names;
            spawn(async move {
                match api::fetch_person(&email).await {
                    Ok(person) if !person.name.is_empty() => {
                        author_names.write().insert(email, person.name);
                    }
                    Ok(_) => {}
                    Err(e) => log::warn!("error fetching name for {email}: {e}"),
                }
            });
        }
    });

    let scope = ListScope::resolve(&session.read(), &view_mode.read());
    let viewer_is_editor = matches!(scope, ListScope::Editor(_));
    let has_access = scope != ListScope::None;
    let heading = list_heading(&scope, &catalog.read());

    let handle_delete = move |manuscript: Manuscript| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&confirm_delete_message(&manuscript.manu_id))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let mut refresh = refresh;
        let mut error = error;
        spawn(async move {
            match api::delete_manuscript(&manuscript.manu_id).await {
                Ok(()) => {
                    { let next = refresh.peek().wrapping_add(1); refresh.set(next) };
                }
                Err(e) => error.set(Some(format!("Error deleting manuscript: {e}"))),
            }
        });
    };

    rsx! {
        style { {DASHBOARD_STYLES} }
        style { {FORM_STYLES} }
        div {
            class: "dashboard-container",
            "data-testid": "dashboard",
            h1 { "Manuscript Management" }

            if let Some(message) = error.read().as_deref() {
                div {
                    class: "error-message",
                    "data-testid": "dashboard-error",
                    "{message}"
                    if session.read().is_none() {
                        p {
                            Link { to: Route::Login {}, "Click here to log in" }
                        }
                    }
                }
            }

            if let Some(message) = catalog_warning.read().as_deref() {
                div {
                    class: "error-message",
                    "data-testid": "catalog-warning",
                    "{message}"
                }
            }

            if has_access {
                div { class: "dashboard-buttons",
                    button {
                        onclick: move |_| {
                            let showing = *show_create.read();
                            show_create.set(!showing);
                        },
                        if show_create() { "Cancel Create" } else { "Create New Manuscript" }
                    }
                }
            }

            if show_create() {
                CreateManuscriptForm {
                    on_cancel: move |_| show_create.set(false),
                    on_success: move |_| {
                        error.set(None);
                        show_create.set(false);
                        let mut refresh = refresh;
                        { let next = refresh.peek().wrapping_add(1); refresh.set(next) };
                    },
                }
            }

            if let Some(manuscript) = editing.read().clone() {
                TransitionForm {
                    key: "{manuscript.manu_id}",
                    manuscript,
                    catalog: catalog.read().clone(),
                    on_cancel: move |_| editing.set(None),
                    on_success: move |_| {
                        editing.set(None);
                        let mut refresh = refresh;
                        { let next = refresh.peek().wrapping_add(1); refresh.set(next) };
                    },
                }
            }

            if viewer_is_editor {
                ViewControls { view_mode, catalog: catalog.read().clone() }
            }

            if has_access {
                if manuscripts.read().is_empty() {
                    p { "No manuscripts found." }
                } else {
                    div { class: "manuscripts-list",
                        h2 { "{heading}" }
                        table { class: "manuscripts-table",
                            thead {
                                tr {
                                    th { "ID" }
                                    th { "Title" }
                                    th { "Author" }
                                    th { "State" }
                                    th { "Actions" }
                                }
                            }
                            tbody {
                                for manuscript in manuscripts.read().iter().cloned() {
                                    ManuscriptRow {
                                        key: "{manuscript.manu_id}",
                                        manuscript: manuscript.clone(),
                                        state_label: catalog.read().label_for(&manuscript.curr_state).to_string(),
                                        author_name: display_author(&manuscript.author, &author_names.read()).to_string(),
                                        permissions: row_permissions(&session.read(), &manuscript),
                                        on_edit: move |m: Manuscript| editing.set(Some(m)),
                                        on_delete: move |m: Manuscript| handle_delete(m),
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ViewControls(view_mode: Signal<ViewMode>, catalog: WorkflowCatalog) -> Element {
    let current = view_mode.read().clone();
    let filter_value = current.filter_value().to_string();
    let valid_states = catalog.valid_states.clone();

    rsx! {
        div { class: "view-controls",
            h3 { "View Options" }
            div { class: "view-buttons",
                button {
                    class: if current == ViewMode::Default { "active" } else { "" },
                    onclick: move |_| view_mode.set(ViewMode::Default),
                    "Default Order"
                }
                button {
                    class: if current == ViewMode::Sorted { "active" } else { "" },
                    onclick: move |_| view_mode.set(ViewMode::Sorted),
                    "Sort by State"
                }
            }

            if !valid_states.is_empty() {
                div { class: "filter-controls",
                    label { r#for: "stateFilter", "Filter by State:" }
                    select {
                        id: "stateFilter",
                        value: "{filter_value}",
                        onchange: move |e| {
                            let code = e.value();
                            if catalog.is_valid_state(&code) {
                                view_mode.set(ViewMode::FilteredBy(code));
                            } else {
                                // empty selection or a code the catalog
                                // does not recognize
                                view_mode.set(ViewMode::Default);
                            }
                        },
                        option { value: "", "-- Select State --" }
                        for state in valid_states.iter() {
                            option { key: "{state.code}", value: "{state.code}", "{state.name}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ManuscriptRow(
    manuscript: Manuscript,
    state_label: String,
    author_name: String,
    permissions: RowPermissions,
    on_edit: EventHandler<Manuscript>,
    on_delete: EventHandler<Manuscript>,
) -> Element {
    let edit_target = manuscript.clone();
    let delete_target = manuscript.clone();

    rsx! {
        tr {
            td { "{manuscript.manu_id}" }
            td { "{manuscript.title}" }
            td { "{author_name}" }
            td {
                span { class: "state-badge", "{state_label}" }
            }
            td {
                div { class: "action-buttons",
                    if permissions.can_edit {
                        button {
                            "data-testid": "edit-{manuscript.manu_id}",
                            title: "Edit state",
                            onclick: move |_| on_edit.call(edit_target.clone()),
                            "Edit"
                        }
                    }
                    if permissions.can_delete {
                        button {
                            "data-testid": "delete-{manuscript.manu_id}",
                            title: "Delete",
                            onclick: move |_| on_delete.call(delete_target.clone()),
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}
