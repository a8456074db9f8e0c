//! Building property bags from maps, reflected objects and serializable values.

use cross_core::ensure_present;
use serde::Serialize;
use serde_json::Value;

use crate::{
    bag::PropertyBag,
    error::{Error, Result},
    reflect::Reflect,
};

pub(crate) const SOURCE: &str = "source";

/// Build a bag from name/value pairs, camel-casing every name.
///
/// Pairs are inserted in iteration order. When two names normalize to the
/// same key the later value wins.
///
/// Fails with an argument error naming `source` when `source` is `None`.
pub fn from_map<I, K, V>(source: Option<I>) -> Result<PropertyBag>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<Value>,
{
    let source = ensure_present(SOURCE, source)?;
    Ok(source.into_iter().collect())
}

/// Build a bag from the readable properties of `source`.
///
/// Properties are read in the order [`Reflect::property_names`] reports
/// them. Read failures are returned as [`Error::Read`].
pub fn from_object<R>(source: Option<&R>) -> Result<PropertyBag>
where
    R: Reflect + ?Sized,
{
    let source = ensure_present(SOURCE, source)?;
    let names = source.property_names();

    let mut bag = PropertyBag::with_capacity(names.len());
    for name in &names {
        let value = source.read_property(name)?;
        bag.insert(name, value);
    }
    Ok(bag)
}

/// Build a bag from any value that serializes as a struct or map.
///
/// Struct fields keep their declaration order.
pub fn from_serialize<T>(source: Option<&T>) -> Result<PropertyBag>
where
    T: Serialize + ?Sized,
{
    let source = ensure_present(SOURCE, source)?;
    match serde_json::to_value(source).map_err(Error::Serialize)? {
        Value::Object(map) => Ok(map.into_iter().collect()),
        other => Err(Error::NotAnObject {
            found: value_kind(&other),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a map",
    }
}
