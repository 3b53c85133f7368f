/// Numeric helpers.
///
/// This module provides the formatting and truncation routines shared by the
/// reducer and the validator: deciding whether a computed aggregate renders
/// as an integer or keeps its full decimal expansion, and truncating values
/// toward zero for diagnostics.
///
/// All helpers are pure functions over `f64`; none of them can fail.
pub mod num;
