use miette::Diagnostic;
use thiserror::Error;

/// What can go wrong while resolving an offset.
///
/// `index` holds the offset as the caller passed it, so floats and values
/// outside the integer range are reported verbatim.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("offset must be an integer, got {index}")]
    #[diagnostic(
        code(textpos::resolve::invalid_argument),
        help("Offsets count code units and cannot be fractional")
    )]
    InvalidArgument { index: String },

    #[error("offset {index} is out of range for text of length {len}")]
    #[diagnostic(
        code(textpos::resolve::out_of_range),
        help("Valid offsets are 0..length, or exactly 0 for empty text")
    )]
    OutOfRange { index: String, len: usize },
}

impl ResolveError {
    pub fn invalid_argument(index: impl ToString) -> Self {
        Self::InvalidArgument {
            index: index.to_string(),
        }
    }

    pub fn out_of_range(index: impl ToString, len: usize) -> Self {
        Self::OutOfRange {
            index: index.to_string(),
            len,
        }
    }
}
