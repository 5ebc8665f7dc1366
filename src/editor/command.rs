use std::sync::LazyLock;

use regex::Regex;

use super::EditorError;
use crate::bitmap::Color;

// `\d` would also match non-ASCII digits.
static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A[-+]?[0-9]+\z").expect("integer pattern is valid"));

/// True if `token` is an optionally signed run of ASCII digits and nothing else.
pub fn is_integer(token: &str) -> bool {
    INTEGER.is_match(token)
}

/// True if `token` is exactly one uppercase letter.
pub fn is_color(token: &str) -> bool {
    Color::parse(token).is_some()
}

/// One parsed, well-formed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `I W H`
    Create { width: i64, height: i64 },
    /// `C`
    Clear,
    /// `L X Y C`
    Point { col: i64, row: i64, color: Color },
    /// `V X Y1 Y2 C`
    VerticalLine {
        col: i64,
        row1: i64,
        row2: i64,
        color: Color,
    },
    /// `H X1 X2 Y C`
    HorizontalLine {
        col1: i64,
        col2: i64,
        row: i64,
        color: Color,
    },
    /// `S`
    Show,
    /// Any line whose leading token is not a known command letter.
    Unrecognized { raw: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArgKind {
    Int,
    Color,
}

#[derive(Debug, Clone, Copy)]
enum Arg {
    Int(i64),
    Color(Color),
}

fn signature(letter: &str) -> Option<&'static [ArgKind]> {
    use ArgKind::{Color, Int};
    match letter {
        "I" => Some(&[Int, Int]),
        "C" | "S" => Some(&[]),
        "L" => Some(&[Int, Int, Color]),
        "V" | "H" => Some(&[Int, Int, Int, Color]),
        _ => None,
    }
}

impl Command {
    /// Parse and shape-check one line (trailing newline already stripped).
    ///
    /// Unknown letters produce [`Command::Unrecognized`] regardless of the
    /// remaining tokens. Known letters are checked for argument count
    /// first, then argument types.
    ///
    /// # Errors
    /// Returns [`EditorError::WrongArgumentCount`] or
    /// [`EditorError::WrongArgumentType`], both echoing `line`.
    pub fn parse(line: &str) -> Result<Self, EditorError> {
        let mut tokens = line.split_ascii_whitespace();
        let letter = tokens.next().unwrap_or_default();
        let Some(kinds) = signature(letter) else {
            return Ok(Self::Unrecognized {
                raw: line.to_string(),
            });
        };

        let tokens = tokens.collect::<Vec<_>>();
        if tokens.len() != kinds.len() {
            return Err(EditorError::WrongArgumentCount(line.to_string()));
        }

        let args = tokens
            .iter()
            .zip(kinds)
            .map(|(token, kind)| typed_arg(token, *kind))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| EditorError::WrongArgumentType(line.to_string()))?;

        let command = match (letter, args.as_slice()) {
            ("I", &[Arg::Int(width), Arg::Int(height)]) => Self::Create { width, height },
            ("C", []) => Self::Clear,
            ("S", []) => Self::Show,
            ("L", &[Arg::Int(col), Arg::Int(row), Arg::Color(color)]) => {
                Self::Point { col, row, color }
            }
            ("V", &[Arg::Int(col), Arg::Int(row1), Arg::Int(row2), Arg::Color(color)]) => {
                Self::VerticalLine {
                    col,
                    row1,
                    row2,
                    color,
                }
            }
            ("H", &[Arg::Int(col1), Arg::Int(col2), Arg::Int(row), Arg::Color(color)]) => {
                Self::HorizontalLine {
                    col1,
                    col2,
                    row,
                    color,
                }
            }
            _ => return Err(EditorError::WrongArgumentType(line.to_string())),
        };
        Ok(command)
    }

    /// Short lowercase name used in timings and traces.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Clear => "clear",
            Self::Point { .. } => "point",
            Self::VerticalLine { .. } => "vertical_line",
            Self::HorizontalLine { .. } => "horizontal_line",
            Self::Show => "show",
            Self::Unrecognized { .. } => "unrecognized",
        }
    }
}

fn typed_arg(token: &str, kind: ArgKind) -> Option<Arg> {
    match kind {
        ArgKind::Int if is_integer(token) => Some(Arg::Int(parse_int(token))),
        ArgKind::Color => Color::parse(token).map(Arg::Color),
        ArgKind::Int => None,
    }
}

// Values past i64 saturate so they fail the range check downstream
// instead of being reported as a type error.
fn parse_int(token: &str) -> i64 {
    token.parse().unwrap_or(if token.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    })
}
