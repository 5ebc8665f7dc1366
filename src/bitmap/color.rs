use std::fmt;

/// A single pixel value: one uppercase ASCII letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(char);

impl Color {
    /// The default paint value every fresh or cleared cell holds.
    pub const WHITE: Self = Self('O');

    /// Build a color from a character, rejecting anything outside `A..=Z`.
    pub const fn new(ch: char) -> Option<Self> {
        if ch.is_ascii_uppercase() {
            Some(Self(ch))
        } else {
            None
        }
    }

    /// Parse a command token. The token must be exactly one uppercase letter.
    pub fn parse(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::new(ch),
            _ => None,
        }
    }

    /// The underlying letter.
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
