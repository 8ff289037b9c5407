use std::fmt;

use crate::resolver::{
    core::{checked_index, position_at},
    error::ResolveError,
    offset::IntoOffset,
    position::{Options, Position},
};

/// A resolved position tagged with the file it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceLoc<'a> {
    pub input_path: &'a str,
    /// Range-checked offset the position was resolved from.
    pub index: usize,
    pub position: Position,
}

impl<'a> SourceLoc<'a> {
    pub fn resolve(
        input_path: &'a str,
        text: &str,
        index: impl IntoOffset,
        options: Options,
    ) -> Result<Self, ResolveError> {
        let index = checked_index(text.len(), index.into_offset()?)?;
        Ok(Self {
            input_path,
            index,
            position: position_at(text.as_bytes(), index, options),
        })
    }
}

impl<'a> fmt::Display for SourceLoc<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.input_path, self.position.line, self.position.column
        )
    }
}
