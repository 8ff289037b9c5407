pub mod core;
pub mod error;
pub mod offset;
pub mod position;
