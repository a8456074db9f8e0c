//! Core utilities shared by the cross crates.
//!
//! This crate provides the argument-validation error raised across the
//! workspace, along with the casing and file-writing helpers.

mod error;
mod file;
mod guard;
mod utils;

// Argument validation
pub use error::{ArgumentError, ArgumentErrorKind, Cause};
pub use guard::{ensure_not_white_space, ensure_present};
// File operations
pub use file::{FileEncoding, write_to_file, write_to_file_with_encoding};
// String utilities
pub use utils::{to_camel_case, to_camel_case_opt};
