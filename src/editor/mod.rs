//! Command interpreter for the bitmap editor.
//!
//! Each input line goes through three stages:
//! - [`Command::parse`]: letter lookup, then argument count, then argument types
//! - [`Editor::apply`]: image precondition and size/range validation
//! - [`Grid::set_region`](crate::bitmap::Grid::set_region) for every paint

mod command;
mod error;
mod session;

pub use command::{Command, is_color, is_integer};
pub use error::EditorError;
pub use session::{Bounds, DEFAULT_MAX_SIZE, Editor, Reply};
