use regex::Regex;

/// Represents the separator class active for one calculation.
///
/// A separator class is either the default — comma or newline, freely mixed —
/// or the text a caller declared between `//` and the first newline of the
/// input. Exactly one class is active per call; once a custom class is
/// declared the defaults no longer apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeparatorSpec {
    /// Numbers separated by commas and/or newlines.
    Default,
    /// Numbers separated by a declared literal or pattern.
    Custom(String),
}

impl SeparatorSpec {
    /// Resolves the separator class for a raw input string.
    ///
    /// An input of the form `//<spec>\n<rest>` declares `<spec>` as the
    /// active class and `<rest>` is the text to tokenize; anything else keeps
    /// the default class and the input untouched. Resolution never fails: an
    /// empty declaration simply falls back to the default class.
    ///
    /// # Parameters
    /// - `input`: The raw, unprocessed input text.
    ///
    /// # Returns
    /// The active class and the cleaned text to tokenize.
    ///
    /// # Example
    /// ```
    /// use summa::calculator::separator::SeparatorSpec;
    ///
    /// let (separator, cleaned) = SeparatorSpec::resolve("//;\n1;2");
    /// assert_eq!(separator, SeparatorSpec::Custom(String::from(";")));
    /// assert_eq!(cleaned, "1;2");
    ///
    /// let (separator, cleaned) = SeparatorSpec::resolve("1,2");
    /// assert_eq!(separator, SeparatorSpec::Default);
    /// assert_eq!(cleaned, "1,2");
    /// ```
    #[must_use]
    pub fn resolve(input: &str) -> (Self, &str) {
        if let Some(declaration) = input.strip_prefix("//")
           && let Some((declared, cleaned)) = declaration.split_once('\n')
        {
            if declared.is_empty() {
                return (Self::Default, cleaned);
            }

            return (Self::Custom(declared.to_string()), cleaned);
        }

        (Self::Default, input)
    }

    /// Returns the pattern fragment matching one separator occurrence.
    pub(crate) fn pattern_text(&self) -> String {
        match self {
            Self::Default => String::from(r"[,\n]"),
            Self::Custom(declared) => custom_pattern(declared),
        }
    }

    /// Returns the class characters accepted between digits, as inserted
    /// into the allowed-character scan.
    pub(crate) fn class_text(&self) -> String {
        match self {
            Self::Default => String::from(r",\n"),
            Self::Custom(declared) => custom_pattern(declared),
        }
    }
}

/// Renders the class the way diagnostics display it: the default class as
/// its two member characters, a custom class as the declared text verbatim.
impl std::fmt::Display for SeparatorSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => f.write_str(",\n"),
            Self::Custom(declared) => f.write_str(declared),
        }
    }
}

/// Returns the usable pattern text for a declared separator.
///
/// A declared single pipe is always a literal pipe, never alternation.
/// Declared text that does not compile in every pattern position falls back
/// to literal (escaped) matching.
fn custom_pattern(declared: &str) -> String {
    if declared == "|" {
        return String::from(r"\|");
    }

    if composes(declared) {
        declared.to_string()
    } else {
        regex::escape(declared)
    }
}

/// True when the declared text compiles standalone, inside the
/// allowed-character class, and under repetition.
fn composes(text: &str) -> bool {
    Regex::new(text).is_ok()
    && Regex::new(&format!("[^0-9.\\-{text}]")).is_ok()
    && Regex::new(&format!("(?:{text}){{2}}")).is_ok()
}
