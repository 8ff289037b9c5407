//! Map offsets in a text to line/column positions.

pub mod resolver;
pub mod utils;

pub use resolver::{
    core::resolve,
    error::ResolveError,
    offset::{IntoOffset, Offset},
    position::{Options, Position},
};
pub use utils::core::SourceLoc;
