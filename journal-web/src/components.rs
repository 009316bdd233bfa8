pub mod create_form;
pub mod dashboard;
pub mod login;
pub mod masthead;
pub mod styles;
pub mod transition_form;

pub use create_form::CreateManuscriptForm;
pub use dashboard::Dashboard;
pub use login::LoginView;
pub use masthead::Masthead;
pub use transition_form::TransitionForm;
