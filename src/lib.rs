//! # summa
//!
//! summa is a calculator over delimited strings of numbers written in Rust.
//! It resolves separator declarations, validates the token stream against a
//! small grammar, and reduces the parsed numbers to a sum, product,
//! difference, or quotient.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    calculator::{reducer::reduce, separator::SeparatorSpec, tokenizer::tokenize},
    util::num::format_number,
};

/// Orchestrates the stages of a calculation.
///
/// This module ties together separator resolution, tokenization with
/// validation, and reduction to provide the complete pipeline behind the
/// public entry points. The stages run strictly in sequence and share no
/// state between calls.
///
/// # Responsibilities
/// - Coordinates the pipeline stages: separator resolver, tokenizer,
///   reducer.
/// - Keeps every per-call value threaded through function arguments.
/// - Manages the flow of data and diagnostics between stages.
pub mod calculator;
/// Provides unified error types for validation.
///
/// This module defines all errors that can be detected while validating a
/// delimited input. It standardizes diagnostic reporting and carries the
/// character positions used to order multiple findings deterministically.
///
/// # Responsibilities
/// - Defines the per-diagnostic error enum with its message renderings.
/// - Aggregates diagnostics into the single error the public API signals.
/// - Supports integration with standard error handling traits.
pub mod error;
/// General numeric utilities.
///
/// This module provides reusable helpers used by the reducer and validator:
/// display formatting of aggregates and truncation toward zero.
///
/// # Responsibilities
/// - Decides between integral and full-precision decimal rendering.
/// - Truncates values for the negative-number diagnostic.
pub mod util;

pub use calculator::reducer::Operation;
pub use error::{TokenError, ValidationError};

/// Returns the formatted aggregate of a delimited input string.
///
/// The input is resolved for a separator declaration, tokenized and
/// validated, then reduced with `operation`. The empty input short-circuits
/// to `"0"` for every operation before the tokenizer runs. Whole results
/// render without a decimal point; fractional results keep the full `f64`
/// decimal expansion.
///
/// # Errors
/// Returns a [`ValidationError`] carrying every diagnostic detected in the
/// input, ordered by position and joined by newlines in its `Display`
/// output. When any diagnostic fires, no result is computed.
///
/// # Example
/// ```
/// use summa::{Operation, calculate};
///
/// assert_eq!(calculate("2,2", Operation::Multiply).unwrap(), "4");
/// assert_eq!(calculate("", Operation::Divide).unwrap(), "0");
/// ```
pub fn calculate(input: &str, operation: Operation) -> Result<String, ValidationError> {
    if input.is_empty() {
        return Ok(String::from("0"));
    }

    let (separator, cleaned) = SeparatorSpec::resolve(input);
    tracing::debug!(?separator, "resolved separator");

    let values = tokenize(cleaned, &separator)?;
    tracing::trace!(count = values.len(), "tokenized input");

    Ok(format_number(reduce(&values, operation)))
}

/// Returns the sum of the numbers in a delimited input string.
///
/// # Errors
/// Returns a [`ValidationError`] if the input does not validate.
///
/// # Example
/// ```
/// use summa::add;
///
/// assert_eq!(add("1,2\n3").unwrap(), "6");
/// assert_eq!(add("//;\n1;2").unwrap(), "3");
/// assert!(add("1,3,").is_err());
/// ```
pub fn add(input: &str) -> Result<String, ValidationError> {
    calculate(input, Operation::Add)
}

/// Returns the product of the numbers in a delimited input string.
///
/// # Errors
/// Returns a [`ValidationError`] if the input does not validate.
///
/// # Example
/// ```
/// use summa::multiply;
///
/// assert_eq!(multiply("2,2").unwrap(), "4");
/// ```
pub fn multiply(input: &str) -> Result<String, ValidationError> {
    calculate(input, Operation::Multiply)
}

/// Returns the left-to-right difference of the numbers in a delimited input
/// string: the first value minus every subsequent one.
///
/// # Errors
/// Returns a [`ValidationError`] if the input does not validate.
///
/// # Example
/// ```
/// use summa::subtract;
///
/// assert_eq!(subtract("8,2").unwrap(), "6");
/// ```
pub fn subtract(input: &str) -> Result<String, ValidationError> {
    calculate(input, Operation::Subtract)
}

/// Returns the left-to-right quotient of the numbers in a delimited input
/// string: the first value divided by every subsequent one.
///
/// Division by zero follows `f64` semantics and renders as `inf` or `NaN`
/// rather than failing.
///
/// # Errors
/// Returns a [`ValidationError`] if the input does not validate.
///
/// # Example
/// ```
/// use summa::divide;
///
/// assert_eq!(divide("8,2,2").unwrap(), "2");
/// assert_eq!(divide("8,0").unwrap(), "inf");
/// ```
pub fn divide(input: &str) -> Result<String, ValidationError> {
    calculate(input, Operation::Divide)
}
