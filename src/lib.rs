// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::EditorError)
    clippy::module_name_repetitions
)]

//! # Bitmap editor
//!
//! A line-oriented interpreter for a tiny bitmap drawing language.
//!
//! ```text
//! I 5 6        create a 5x6 image, all white (O)
//! L 1 3 A      colour pixel (1,3) with A
//! V 2 3 6 W    vertical segment in column 2, rows 3..=6
//! H 3 5 2 Z    horizontal segment in row 2, columns 3..=5
//! C            clear back to white
//! S            print the image
//! ```
//!
//! ## Modules
//!
//! - [`bitmap`]: pixel storage and the rectangular fill
//! - [`editor`]: command parsing, validation and dispatch
//! - [`script`]: running an editor over a line source
//! - [`config`]: flag-file configuration
//! - [`perf`]: timing and debug logging

pub mod bitmap;
pub mod config;
pub mod editor;
pub mod perf;
pub mod script;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::bitmap::{Color, Grid};
    pub use crate::editor::{Bounds, Command, Editor, EditorError, Reply};
    pub use crate::script::RunSummary;
}
