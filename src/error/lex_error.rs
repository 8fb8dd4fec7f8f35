use thiserror::Error;

/// Represents all errors that can occur while tokenizing the input.
///
/// Positions are 0-based character offsets into the input; the rendered
/// message reports them as 1-based columns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that does not start any token.
    #[error("Unexpected character '{ch}' at column {}.", .position + 1)]
    UnexpectedChar {
        /// The offending character.
        ch:       char,
        /// Where the character appears.
        position: usize,
    },
    /// A number literal with more than one decimal point, or no digits at all.
    #[error("Malformed number '{literal}' at column {}.", .position + 1)]
    MalformedNumber {
        /// The literal as written.
        literal:  String,
        /// Where the literal starts.
        position: usize,
    },
}

impl LexError {
    /// Returns the position the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedChar { position, .. } | Self::MalformedNumber { position, .. } => {
                *position
            },
        }
    }
}
