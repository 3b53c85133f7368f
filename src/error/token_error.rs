#[derive(Debug, Clone, PartialEq)]
/// Represents a single problem detected while validating a delimited input.
///
/// Every variant carries a `position`: the zero-based character offset into
/// the cleaned (prefix-stripped) input where the problem was detected. The
/// position orders diagnostics in the final report; it is never rendered as a
/// separate field. For [`TokenError::NegativeNumbers`] the position is the
/// element index of the first negative value, which only has to order the
/// combined message against the other diagnostics.
pub enum TokenError {
    /// The input ends in a separator with nothing following it.
    EndOfInput {
        /// Offset of the trailing separator character.
        position: usize,
    },
    /// A character outside the digit/point/minus/separator set was found.
    UnexpectedSeparator {
        /// The separator class that was expected, as shown to the user.
        expected: String,
        /// The character that was found instead.
        found:    char,
        /// Offset of the found character.
        position: usize,
    },
    /// Two adjacent separators left an empty slot where a number belonged.
    MissingNumber {
        /// The second separator character of the run.
        found:    char,
        /// Offset of the second separator character.
        position: usize,
    },
    /// A token survived the structural checks but is not a valid number.
    InvalidNumber {
        /// The offending token text, already trimmed.
        token:    String,
        /// Offset of the first character of the token.
        position: usize,
    },
    /// One or more parsed values were negative.
    NegativeNumbers {
        /// Every negative value, truncated toward zero, in input order.
        values:   Vec<i64>,
        /// Element index of the first negative value.
        position: usize,
    },
}

impl TokenError {
    /// Returns the ordering key of this diagnostic.
    ///
    /// Diagnostics are reported sorted ascending by this value; ties keep
    /// their detection order.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::EndOfInput { position }
            | Self::UnexpectedSeparator { position, .. }
            | Self::MissingNumber { position, .. }
            | Self::InvalidNumber { position, .. }
            | Self::NegativeNumbers { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EndOfInput { .. } => write!(f, "Number expected but EOF found."),

            Self::UnexpectedSeparator { expected,
                                        found,
                                        position, } => {
                write!(f, "'{expected}' expected but '{found}' found at position {position}.")
            },

            Self::MissingNumber { found, position } => {
                write!(f, "Number expected but '{found}' found at position {position}.")
            },

            Self::InvalidNumber { token, position } => {
                write!(f, "Number expected but '{token}' found at position {position}.")
            },

            Self::NegativeNumbers { values, .. } => {
                write!(f, "Negative not allowed : ")?;

                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                Ok(())
            },
        }
    }
}

impl std::error::Error for TokenError {}
