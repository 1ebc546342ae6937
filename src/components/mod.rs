//! UI Components
//!
//! Leptos components for the auth and todo views.

mod auth_panel;
mod feedback_banner;
mod new_todo_form;
mod todo_list;
mod todo_row;
mod user_status;

pub use auth_panel::AuthPanel;
pub use feedback_banner::FeedbackBanner;
pub use new_todo_form::NewTodoForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
pub use user_status::UserStatus;
