use crate::error::TokenError;

#[derive(Debug, Clone, PartialEq)]
/// The failure signaled when an input does not validate.
///
/// Validation collects every detectable problem in one pass instead of
/// failing fast, so this error owns the complete list of diagnostics. The
/// list is sorted ascending by position; diagnostics with equal positions
/// keep their detection order. The `Display` output is the newline-joined
/// concatenation of the individual messages and is the complete error
/// report shown to a caller.
pub struct ValidationError {
    errors: Vec<TokenError>,
}

impl ValidationError {
    /// Creates a validation error from the collected diagnostics.
    ///
    /// The diagnostics are sorted by position here, so callers may push them
    /// in whatever order detection happens to run.
    ///
    /// # Example
    /// ```
    /// use summa::error::{TokenError, ValidationError};
    ///
    /// let error = ValidationError::new(vec![
    ///     TokenError::MissingNumber { found: ',', position: 3 },
    ///     TokenError::EndOfInput { position: 0 },
    /// ]);
    ///
    /// assert_eq!(error.to_string(),
    ///            "Number expected but EOF found.\nNumber expected but ',' found at position 3.");
    /// ```
    #[must_use]
    pub fn new(mut errors: Vec<TokenError>) -> Self {
        errors.sort_by_key(TokenError::position);

        Self { errors }
    }

    /// Returns the individual diagnostics, ordered by position.
    #[must_use]
    pub fn errors(&self) -> &[TokenError] {
        &self.errors
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, error) in self.errors.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }

            write!(f, "{error}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}
