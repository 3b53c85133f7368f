/// Names the aggregate computed over a validated numeric sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Adds all values, starting from zero.
    Add,
    /// Multiplies all values, starting from one.
    Multiply,
    /// Subtracts every subsequent value from the first, left to right.
    Subtract,
    /// Divides the first value by every subsequent value, left to right.
    Divide,
}

/// Reduces a validated numeric sequence with the selected operation.
///
/// Division by zero follows `f64` semantics and yields an infinity or NaN
/// that flows through to formatting; it is never an error.
///
/// # Parameters
/// - `values`: The parsed numbers, in input order.
/// - `operation`: The aggregate to compute.
///
/// # Returns
/// The folded value. An empty sequence reduces to the operation's starting
/// value (zero for sums and the first-value folds, one for products).
///
/// # Example
/// ```
/// use summa::calculator::reducer::{Operation, reduce};
///
/// assert_eq!(reduce(&[1.0, 2.0, 3.0], Operation::Add), 6.0);
/// assert_eq!(reduce(&[8.0, 2.0, 2.0], Operation::Divide), 2.0);
/// assert_eq!(reduce(&[8.0, 2.0], Operation::Subtract), 6.0);
/// ```
#[must_use]
pub fn reduce(values: &[f64], operation: Operation) -> f64 {
    match operation {
        Operation::Add => values.iter().sum(),
        Operation::Multiply => values.iter().product(),
        Operation::Subtract => fold_from_first(values, |acc, value| acc - value),
        Operation::Divide => fold_from_first(values, |acc, value| acc / value),
    }
}

/// Folds every value after the first into the first, left to right.
fn fold_from_first(values: &[f64], op: impl Fn(f64, f64) -> f64) -> f64 {
    values.split_first()
          .map_or(0.0, |(first, rest)| rest.iter().fold(*first, |acc, value| op(acc, *value)))
}
