use thiserror::Error;

/// A rejected command. `Display` is the exact diagnostic line shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("unrecognised command :( : {0}")]
    Unrecognized(String),
    #[error("wrong number of arguments: {0}")]
    WrongArgumentCount(String),
    #[error("wrong type of arguments: {0}")]
    WrongArgumentType(String),
    #[error("there is no image")]
    NoImage,
    #[error(
        "command failed: {command}     column must be within 1 and {width}; row must be within 1 and {height}"
    )]
    OutOfRange {
        command: String,
        width: usize,
        height: usize,
    },
    #[error(
        "command failed: {command}     column size must be within 1 and {max_width}, row size must be within 1 and {max_height}"
    )]
    InvalidSize {
        command: String,
        max_width: usize,
        max_height: usize,
    },
}

impl EditorError {
    /// Syntax errors are caught before the command reaches any image.
    pub const fn is_syntax(&self) -> bool {
        matches!(
            self,
            Self::Unrecognized(_) | Self::WrongArgumentCount(_) | Self::WrongArgumentType(_)
        )
    }

    /// Short label for the kind of rejection, used in traces.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Unrecognized(_) => "unrecognised",
            Self::WrongArgumentCount(_) => "wrong_count",
            Self::WrongArgumentType(_) => "wrong_type",
            Self::NoImage => "no_image",
            Self::OutOfRange { .. } => "out_of_range",
            Self::InvalidSize { .. } => "invalid_size",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_protocol() {
        assert_eq!(
            EditorError::Unrecognized("X 1 2".into()).to_string(),
            "unrecognised command :( : X 1 2"
        );
        assert_eq!(
            EditorError::WrongArgumentCount("C 1".into()).to_string(),
            "wrong number of arguments: C 1"
        );
        assert_eq!(
            EditorError::WrongArgumentType("I 10 a".into()).to_string(),
            "wrong type of arguments: I 10 a"
        );
        assert_eq!(EditorError::NoImage.to_string(), "there is no image");
        assert_eq!(
            EditorError::OutOfRange {
                command: "L 9 1 A".into(),
                width: 5,
                height: 6
            }
            .to_string(),
            "command failed: L 9 1 A     column must be within 1 and 5; row must be within 1 and 6"
        );
        assert_eq!(
            EditorError::InvalidSize {
                command: "I 0 3".into(),
                max_width: 250,
                max_height: 250
            }
            .to_string(),
            "command failed: I 0 3     column size must be within 1 and 250, row size must be within 1 and 250"
        );
    }

    #[test]
    fn test_is_syntax() {
        assert!(EditorError::WrongArgumentType(String::new()).is_syntax());
        assert!(!EditorError::NoImage.is_syntax());
    }

    #[test]
    fn test_labels() {
        assert_eq!(EditorError::NoImage.label(), "no_image");
        assert_eq!(
            EditorError::WrongArgumentCount("S 1".into()).label(),
            "wrong_count"
        );
    }
}
