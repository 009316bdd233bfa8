pub mod api;
pub mod app;
pub mod catalog;
pub mod components;
pub mod session;

pub use app::App;
pub use components::*;
