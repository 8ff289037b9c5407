use tracing::trace;

use crate::resolver::{
    error::ResolveError,
    offset::{IntoOffset, Offset},
    position::{Options, Position},
};

/// Resolve `index` in `text` into a line/column [`Position`].
///
/// Offsets and columns count UTF-8 code units (bytes); only `\n` breaks a
/// line. For non-empty text the offset must lie in `0..text.len()`. Empty
/// text accepts exactly offset 0.
///
/// ```
/// use textpos::{Options, Position, resolve};
///
/// assert_eq!(resolve("Hello\nWorld", 7, Options::default()), Ok(Position::new(1, 1)));
/// assert_eq!(resolve("Hello\nWorld", 7, Options::one_based_mode()), Ok(Position::new(2, 2)));
/// ```
pub fn resolve(
    text: &str,
    index: impl IntoOffset,
    options: Options,
) -> Result<Position, ResolveError> {
    let index = checked_index(text.len(), index.into_offset()?)?;
    Ok(position_at(text.as_bytes(), index, options))
}

/// Range check: `0..len`, or exactly 0 when `len` is 0.
pub(crate) fn checked_index(len: usize, offset: Offset) -> Result<usize, ResolveError> {
    let index = match offset {
        Offset::Int(index) => index,
        Offset::Huge(_) => return Err(ResolveError::out_of_range(offset, len)),
    };

    let in_range = if len == 0 {
        index == 0
    } else {
        0 <= index && index < len as i128
    };

    if in_range {
        Ok(index as usize)
    } else {
        Err(ResolveError::out_of_range(index, len))
    }
}

/// `index` must already be range checked.
pub(crate) fn position_at(bytes: &[u8], index: usize, options: Options) -> Position {
    let prev_break = last_line_break(bytes, index.checked_sub(1));
    let column = index - prev_break.map_or(0, |b| b + 1);

    let mut line = 0;
    let mut cursor = prev_break;
    while let Some(at) = cursor {
        line += 1;
        cursor = last_line_break(bytes, at.checked_sub(1));
    }

    let mut position = Position::new(line, column);
    if options.one_based {
        position = position.to_one_based();
    }

    trace!(index, %position, one_based = options.one_based, "resolved offset");
    position
}

/// Nearest `\n` at or before `from`. `None` as the start means the search
/// began before the text, which finds nothing.
fn last_line_break(bytes: &[u8], from: Option<usize>) -> Option<usize> {
    let from = from?;
    bytes[..=from].iter().rposition(|&b| b == b'\n')
}
