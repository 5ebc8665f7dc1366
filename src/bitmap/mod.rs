//! In-memory pixel storage.
//!
//! A [`Grid`] is a fixed-size matrix of [`Color`] cells addressed with
//! 1-based `(column, row)` coordinates. Every paint operation reduces to
//! the single rectangular fill [`Grid::set_region`].

mod color;
mod grid;

pub use color::Color;
pub use grid::{Grid, GridError};
