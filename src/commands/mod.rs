//! Command implementations for the club roster CLI

pub mod common;
pub mod delete;
pub mod list;
pub mod save;
pub mod show;

pub use common::CommandContext;
pub use delete::handle_delete;
pub use list::handle_list;
pub use save::{handle_add, handle_edit};
pub use show::handle_show;
