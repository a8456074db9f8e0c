//! Dynamic property bags for the cross crates.
//!
//! A [`PropertyBag`] is an ordered, string-keyed map of JSON values whose
//! keys are always camel-cased. Bags are built from:
//!
//! - name/value pairs ([`from_map`])
//! - objects implementing [`Reflect`] ([`from_object`], [`ToPropertyBag`])
//! - anything serializable as a struct or map ([`from_serialize`])
//!
//! and can be extended with additional properties ([`extend_object`]).
//!
//! ```text
//! source object --Reflect--> names/values --to_camel_case--> PropertyBag
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod bag;
mod build;
mod error;
mod ext;
mod merge;
mod reflect;

pub use bag::PropertyBag;
pub use build::{from_map, from_object, from_serialize};
pub use error::{Error, Result};
pub use ext::ToPropertyBag;
pub use merge::{MergePolicy, extend_object, extend_object_with};
pub use reflect::{ReadError, Reflect};
