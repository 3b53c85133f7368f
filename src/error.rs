/// Token-level diagnostics.
///
/// Defines all error types that can be detected while validating a delimited
/// input string. Token errors include trailing separators, unexpected
/// separator characters, gaps between separators, tokens that are not
/// numbers, and negative values.
pub mod token_error;
/// Aggregated validation failures.
///
/// Contains the error type returned by the public API when one or more token
/// errors were detected. It owns the full, position-ordered list of
/// diagnostics and renders them as a single newline-joined message.
pub mod validation_error;

pub use token_error::TokenError;
pub use validation_error::ValidationError;
