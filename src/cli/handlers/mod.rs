//! Command handlers
//!
//! Each handler receives a [`HandlerContext`] holding the opened ticket store.

pub mod common;
mod dashboard;
mod delete;
mod edit;
pub mod form;
mod lock;
mod submit;

pub use common::HandlerContext;
pub use dashboard::{handle_list_command, handle_show_command};
pub use delete::handle_delete_command;
pub use edit::{EditParams, handle_edit_command};
pub use lock::handle_toggle_lock_command;
pub use submit::handle_submit_command;
