use regex::Regex;

use crate::{
    calculator::separator::SeparatorSpec,
    error::{TokenError, ValidationError},
    util::num::truncate,
};

/// Splits the cleaned input on the active separator class and validates it.
///
/// Every detection rule runs in one pass and their findings accumulate; a
/// single malformed input can produce several diagnostics. When at least one
/// fires, the numeric result is never produced.
///
/// Detection rules:
/// 1. A trailing separator with nothing after it.
/// 2. The first character outside the digit/point/minus/separator set. The
///    found character then also acts as a separator when splitting, so its
///    later occurrences do not surface as fresh boundary problems.
/// 3. An empty token between two adjacent separators. Empty tokens explained
///    by a structural rule are discarded before numeric parsing.
/// 4. A token that survives the structural checks but does not parse as a
///    number.
/// 5. Negative parsed values, aggregated into one diagnostic positioned at
///    the first negative element.
///
/// # Parameters
/// - `input`: The cleaned (prefix-stripped) text.
/// - `separator`: The separator class resolved for this input.
///
/// # Returns
/// The parsed numbers in input order.
///
/// # Errors
/// Returns a [`ValidationError`] holding every detected diagnostic, sorted
/// ascending by the character position of detection.
///
/// # Example
/// ```
/// use summa::calculator::{separator::SeparatorSpec, tokenizer::tokenize};
///
/// let numbers = tokenize("1,2\n3", &SeparatorSpec::Default).unwrap();
/// assert_eq!(numbers, vec![1.0, 2.0, 3.0]);
///
/// let error = tokenize("1,3,", &SeparatorSpec::Default).unwrap_err();
/// assert_eq!(error.to_string(), "Number expected but EOF found.");
/// ```
pub fn tokenize(input: &str, separator: &SeparatorSpec) -> Result<Vec<f64>, ValidationError> {
    let mut errors = Vec::new();

    let pattern = separator.pattern_text();
    let split = compile(&pattern);
    let scan = compile(&format!("[^0-9.\\-{}]", separator.class_text()));
    let gap = compile(&format!("(?:{pattern}){{2}}"));

    // Rule 1: trailing separator.
    if let Some(last) = split.find_iter(input).last()
       && !last.as_str().is_empty()
       && last.end() == input.len()
    {
        errors.push(TokenError::EndOfInput { position: input.chars().count() - 1 });
    }

    // Rule 2: unexpected separator character.
    let split = match unexpected_separator(input, &scan) {
        Some((found, position)) => {
            errors.push(TokenError::UnexpectedSeparator { expected: separator.to_string(),
                                                          found,
                                                          position });

            compile(&format!("{pattern}|{}", regex::escape(&found.to_string())))
        },
        None => split,
    };

    let segments = split_segments(&split, input);

    // Rule 3: empty token between two adjacent separators. The diagnostic
    // points at the second character of the first separator run.
    if segments.iter().any(|(_, token)| token.is_empty())
       && let Some(run) = gap.find(input)
       && let Some(found) = run.as_str().chars().nth(1)
    {
        errors.push(TokenError::MissingNumber { found,
                                                position: char_position(input, run.start()) + 1 });
    }

    let structural = !errors.is_empty();
    let mut values = Vec::new();

    for (offset, token) in segments {
        let trimmed = token.trim();

        if trimmed.is_empty() && structural {
            continue;
        }

        match trimmed.parse::<f64>() {
            Ok(value) => values.push(value),
            Err(_) => {
                errors.push(TokenError::InvalidNumber { token:    trimmed.to_string(),
                                                        position: char_position(input, offset), });
            },
        }
    }

    // Rule 5: negative values, one combined diagnostic.
    let negatives: Vec<i64> = values.iter().filter(|v| **v < 0.0).map(|v| truncate(*v)).collect();
    if !negatives.is_empty() {
        let position = values.iter().position(|v| *v < 0.0).unwrap_or(0);
        errors.push(TokenError::NegativeNumbers { values: negatives,
                                                  position });
    }

    if errors.is_empty() {
        Ok(values)
    } else {
        tracing::debug!(count = errors.len(), "input failed validation");

        Err(ValidationError::new(errors))
    }
}

/// Compiles a separator-derived pattern.
///
/// Invariant: every pattern handed to this function was validated (or
/// escaped) by [`SeparatorSpec`] before composition, so compilation cannot
/// fail.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("separator patterns are validated before compilation")
}

/// Finds the first character outside the digit/point/minus/separator set.
fn unexpected_separator(input: &str, scan: &Regex) -> Option<(char, usize)> {
    let found = scan.find(input)?;
    let character = found.as_str().chars().next()?;

    Some((character, char_position(input, found.start())))
}

/// Splits `input` on `split`, keeping the starting byte offset of every
/// token so diagnostics can report where a token began.
fn split_segments<'a>(split: &Regex, input: &'a str) -> Vec<(usize, &'a str)> {
    let mut segments = Vec::new();
    let mut last = 0;

    for matched in split.find_iter(input) {
        // A zero-width match separates nothing.
        if matched.as_str().is_empty() {
            continue;
        }

        segments.push((last, &input[last..matched.start()]));
        last = matched.end();
    }

    segments.push((last, &input[last..]));
    segments
}

/// Converts a byte offset into the character position diagnostics report.
fn char_position(input: &str, byte_offset: usize) -> usize {
    input[..byte_offset].chars().count()
}
