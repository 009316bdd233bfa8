pub const DASHBOARD_STYLES: &str = r#"
/* Dashboard */
.dashboard-container {
    max-width: 960px;
    margin: 0 auto;
    padding: 1.25rem;
    color: var(--text-primary, #1e293b);
}

.dashboard-container h1 {
    margin: 0 0 1rem 0;
}

.error-message {
    background: #fef2f2;
    border: 1px solid #fca5a5;
    color: #b91c1c;
    border-radius: 6px;
    padding: 0.6rem 0.9rem;
    margin-bottom: 1rem;
}

.error-message a {
    color: #b91c1c;
    font-weight: 600;
}

.dashboard-buttons {
    margin-bottom: 1rem;
}

/* View controls */
.view-controls {
    border: 1px solid var(--border-color, #e2e8f0);
    border-radius: 6px;
    padding: 0.75rem 1rem;
    margin-bottom: 1rem;
}

.view-controls h3 {
    margin: 0 0 0.5rem 0;
}

.view-buttons {
    display: flex;
    gap: 0.5rem;
}

.view-buttons button.active {
    font-weight: 700;
    text-decoration: underline;
}

.filter-controls {
    margin-top: 0.6rem;
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

/* Manuscript table */
.manuscripts-table {
    width: 100%;
    border-collapse: collapse;
}

.manuscripts-table th,
.manuscripts-table td {
    border-bottom: 1px solid var(--border-color, #e2e8f0);
    padding: 0.5rem 0.6rem;
    text-align: left;
}

.state-badge {
    display: inline-block;
    padding: 0.1rem 0.5rem;
    border-radius: 999px;
    background: var(--badge-bg, #e0e7ff);
    font-size: 0.85em;
}

.action-buttons {
    display: flex;
    gap: 0.4rem;
}
"#;

pub const FORM_STYLES: &str = r#"
/* Shared form layout (create / transition) */
.manuscript-form {
    border: 1px solid var(--border-color, #e2e8f0);
    border-radius: 6px;
    padding: 1rem;
    margin-bottom: 1rem;
    max-width: 480px;
    display: flex;
    flex-direction: column;
    gap: 0.6rem;
}

.manuscript-form h2 {
    margin: 0;
}

.form-group {
    display: flex;
    flex-direction: column;
    gap: 0.25rem;
}

.form-group input,
.form-group select {
    padding: 0.35rem 0.5rem;
    border: 1px solid var(--border-color, #cbd5e1);
    border-radius: 4px;
}

.readonly-field {
    background: #f1f5f9;
    color: #475569;
}

.form-buttons {
    display: flex;
    gap: 0.5rem;
    justify-content: flex-end;
}

.form-error {
    color: #b91c1c;
    font-size: 0.9em;
}
"#;

pub const MASTHEAD_STYLES: &str = r#"
.masthead {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0.6rem 1.25rem;
    border-bottom: 1px solid var(--border-color, #e2e8f0);
}

.masthead nav {
    display: flex;
    gap: 1rem;
    align-items: center;
}

.masthead .identity {
    display: flex;
    gap: 0.75rem;
    align-items: center;
    font-size: 0.9em;
}
"#;

pub const LOGIN_STYLES: &str = r#"
.login-container {
    max-width: 360px;
    margin: 3rem auto;
    padding: 0 1rem;
}

.login-form {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
}

.login-form input {
    padding: 0.45rem 0.6rem;
    border: 1px solid var(--border-color, #cbd5e1);
    border-radius: 4px;
    width: 100%;
    box-sizing: border-box;
}
"#;
