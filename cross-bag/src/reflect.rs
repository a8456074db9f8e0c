//! Reading named properties off an object.

use std::{borrow::Cow, error::Error as StdError};

use indexmap::IndexMap;
use serde_json::{Map, Value};
use thiserror::Error;

/// Trait for objects whose properties can be enumerated and read by name.
///
/// Implement this for any type that should be turned into a
/// [`PropertyBag`](crate::PropertyBag). Names are reported as the type
/// spells them (e.g. "Description"); the bag builders take care of casing.
///
/// # Example
///
/// ```
/// use std::borrow::Cow;
///
/// use cross_bag::{ReadError, Reflect};
/// use serde_json::Value;
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Reflect for Point {
///     fn property_names(&self) -> Vec<Cow<'_, str>> {
///         vec!["X".into(), "Y".into()]
///     }
///
///     fn read_property(&self, name: &str) -> Result<Value, ReadError> {
///         match name {
///             "X" => Ok(self.x.into()),
///             "Y" => Ok(self.y.into()),
///             _ => Err(ReadError::missing(name)),
///         }
///     }
/// }
/// ```
pub trait Reflect {
    /// Names of the readable properties, in a stable order.
    fn property_names(&self) -> Vec<Cow<'_, str>>;

    /// Current value of the property called `name`.
    fn read_property(&self, name: &str) -> Result<Value, ReadError>;
}

/// Failure to read a property while reflecting an object.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("no readable property named '{property}'")]
    Missing { property: String },

    #[error("failed to read property '{property}'")]
    Failed {
        property: String,
        #[source]
        source: Box<dyn StdError + Send + Sync + 'static>,
    },
}

impl ReadError {
    pub fn missing(property: impl Into<String>) -> Self {
        ReadError::Missing {
            property: property.into(),
        }
    }

    pub fn failed(
        property: impl Into<String>,
        source: impl Into<Box<dyn StdError + Send + Sync + 'static>>,
    ) -> Self {
        ReadError::Failed {
            property: property.into(),
            source: source.into(),
        }
    }

    /// Name of the property that could not be read.
    pub fn property(&self) -> &str {
        match self {
            ReadError::Missing { property } | ReadError::Failed { property, .. } => property,
        }
    }
}

impl Reflect for Map<String, Value> {
    fn property_names(&self) -> Vec<Cow<'_, str>> {
        self.keys().map(|key| Cow::Borrowed(key.as_str())).collect()
    }

    fn read_property(&self, name: &str) -> Result<Value, ReadError> {
        self.get(name).cloned().ok_or_else(|| ReadError::missing(name))
    }
}

impl<V> Reflect for IndexMap<String, V>
where
    V: Clone + Into<Value>,
{
    fn property_names(&self) -> Vec<Cow<'_, str>> {
        self.keys().map(|key| Cow::Borrowed(key.as_str())).collect()
    }

    fn read_property(&self, name: &str) -> Result<Value, ReadError> {
        self.get(name)
            .map(|value| value.clone().into())
            .ok_or_else(|| ReadError::missing(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_map_reflects_in_insertion_order() {
        let mut map = Map::new();
        map.insert("Zeta".to_string(), Value::from(1));
        map.insert("Alpha".to_string(), Value::from(2));

        assert_eq!(map.property_names(), ["Zeta", "Alpha"]);
        assert_eq!(map.read_property("Alpha").unwrap(), Value::from(2));
    }

    #[test]
    fn test_index_map_reflects_values() {
        let map: IndexMap<String, &str> =
            IndexMap::from([("Name".to_string(), "ada"), ("Kind".to_string(), "cli")]);

        assert_eq!(map.property_names(), ["Name", "Kind"]);
        assert_eq!(map.read_property("Kind").unwrap(), Value::from("cli"));
    }

    #[test]
    fn test_missing_property() {
        let map = Map::new();

        let err = map.read_property("Ghost").unwrap_err();

        assert_eq!(err.property(), "Ghost");
        assert_eq!(err.to_string(), "no readable property named 'Ghost'");
    }

    #[test]
    fn test_failed_keeps_source() {
        let err = ReadError::failed("Count", "lock poisoned");

        assert_eq!(err.property(), "Count");
        assert_eq!(
            StdError::source(&err).map(|s| s.to_string()).as_deref(),
            Some("lock poisoned")
        );
    }
}
