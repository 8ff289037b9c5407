use std::fmt;

use serde::{Deserialize, Serialize};

/// A line/column pair. Zero-based unless produced with [`Options::one_based_mode`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Shifts both fields by one.
    pub(crate) fn to_one_based(self) -> Self {
        Self {
            line: self.line + 1,
            column: self.column + 1,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Report line and column starting at 1 instead of 0.
    pub one_based: bool,
}

impl Options {
    /// Options with the `one_based` flag set.
    pub fn one_based_mode() -> Self {
        Self { one_based: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_line_colon_column() {
        assert_eq!(Position::new(3, 14).to_string(), "3:14");
    }

    #[test]
    fn options_default_to_zero_based() {
        let opts: Options = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, Options::default());
        assert!(!opts.one_based);

        let opts: Options = serde_json::from_str(r#"{"oneBased": true}"#).unwrap();
        assert_eq!(opts, Options::one_based_mode());
    }

    #[test]
    fn position_serializes_as_object() {
        let json = serde_json::to_string(&Position::new(1, 2)).unwrap();
        assert_eq!(json, r#"{"line":1,"column":2}"#);
    }
}
