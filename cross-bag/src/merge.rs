//! Extending a reflected object's bag with additional properties.

use cross_core::ensure_present;
use serde_json::Value;

use crate::{
    bag::PropertyBag,
    build::{SOURCE, from_object},
    error::Result,
    reflect::Reflect,
};

const ADDITIONAL_PROPERTIES: &str = "additionalProperties";

/// How to treat an additional property whose key the bag already holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergePolicy {
    /// The additional value replaces the existing one
    #[default]
    Overwrite,
    /// The merge fails with [`Error::DuplicateKey`](crate::Error::DuplicateKey)
    Reject,
}

/// Reflect `source` into a bag, then add `additional_properties` to it.
///
/// Additional keys are camel-cased like reflected ones and overwrite any
/// reflected property with the same key. `source` is checked before
/// `additional_properties`.
///
/// # Example
///
/// ```
/// use cross_bag::extend_object;
/// use serde_json::{Map, Value, json};
///
/// let mut source = Map::new();
/// source.insert("Id".to_string(), json!(1));
///
/// let bag = extend_object(Some(&source), Some([("MyRightFace", 12)])).unwrap();
///
/// assert_eq!(bag.keys().collect::<Vec<_>>(), ["id", "myRightFace"]);
/// assert_eq!(bag["myRightFace"], Value::from(12));
/// ```
pub fn extend_object<R, I, K, V>(
    source: Option<&R>,
    additional_properties: Option<I>,
) -> Result<PropertyBag>
where
    R: Reflect + ?Sized,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<Value>,
{
    extend_object_with(source, additional_properties, MergePolicy::Overwrite)
}

/// Like [`extend_object`], with an explicit policy for keys the reflected
/// object already defines.
///
/// Keys repeated within `additional_properties` itself are always
/// last-write-wins.
pub fn extend_object_with<R, I, K, V>(
    source: Option<&R>,
    additional_properties: Option<I>,
    policy: MergePolicy,
) -> Result<PropertyBag>
where
    R: Reflect + ?Sized,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<Value>,
{
    let source = ensure_present(SOURCE, source)?;
    let additional_properties = ensure_present(ADDITIONAL_PROPERTIES, additional_properties)?;

    let mut bag = from_object(Some(source))?;
    bag.extend_with(additional_properties, policy)?;
    Ok(bag)
}
