//! CLI command implementations

pub mod csv;
pub mod json;
pub mod render;
pub mod validate;
