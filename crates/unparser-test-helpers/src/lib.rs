//! Test utilities for the unparser workspace.

pub mod builders;
pub mod unparse;

pub use builders::*;
pub use unparse::*;
