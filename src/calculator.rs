/// The reducer module aggregates validated numbers into one result.
///
/// The reducer consumes the numeric sequence produced by the tokenizer and
/// folds it into a single value: a sum, a product, a left-to-right
/// difference, or a left-to-right quotient. It is the last stage of a
/// calculation.
///
/// # Responsibilities
/// - Defines the `Operation` enum naming the supported aggregates.
/// - Folds the numeric sequence left to right with the selected operation.
/// - Leaves division by zero to `f64` semantics instead of raising an error.
pub mod reducer;
/// The separator module resolves the active separator declaration.
///
/// The separator resolver inspects the raw input for a `//<spec>\n` prefix,
/// extracts the declared separator when one is present, and strips the
/// declaration so the remaining text can be tokenized. This is the first
/// stage of a calculation and it never fails.
///
/// # Responsibilities
/// - Detects and strips the custom separator declaration prefix.
/// - Falls back to the default comma-or-newline class.
/// - Renders the active class the way diagnostics display it.
pub mod separator;
/// The tokenizer module splits and validates the cleaned input.
///
/// The tokenizer splits the prefix-stripped text on the active separator
/// class, detects every malformed-input condition in a single pass, and
/// produces either the parsed numeric sequence or the full position-ordered
/// list of diagnostics. This is the second stage of a calculation and the
/// only one with non-trivial logic.
///
/// # Responsibilities
/// - Splits the cleaned text on the active separator pattern.
/// - Detects trailing separators, unexpected characters, gaps between
///   separators, unparseable tokens, and negative values.
/// - Orders diagnostics by the character position where each was detected.
pub mod tokenizer;
