//! The dynamically keyed property bag.

use std::{borrow::Cow, fmt, ops::Index};

use cross_core::to_camel_case;
use indexmap::{IndexMap, map};
use serde::{Deserialize, Serialize, Serializer, de::DeserializeOwned};
use serde_json::Value;

use crate::{
    error::{Error, Result},
    merge::MergePolicy,
    reflect::{ReadError, Reflect},
};

/// An ordered map from camel-cased property name to value.
///
/// Every key that enters the bag goes through [`to_camel_case`], so "Id"
/// and "id" address the same entry. Entries keep the order they were first
/// inserted in; re-inserting an existing key replaces its value in place.
///
/// The bag serializes as a plain map, which makes it usable anywhere a
/// serializer or template engine expects an object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "IndexMap<String, Value>")]
pub struct PropertyBag {
    entries: IndexMap<String, Value>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a value under the camel-cased `key`.
    ///
    /// Returns the value previously stored under that key, if any.
    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<Value>) -> Option<Value> {
        let key = to_camel_case(key.as_ref()).into_owned();
        self.entries.insert(key, value.into())
    }

    /// Look up a value by its camel-cased key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Look up a value and deserialize it into `T`.
    ///
    /// Returns `None` if the key is absent or the value does not fit `T`.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.entries.get(key)?;
        T::deserialize(value).ok()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    pub fn iter(&self) -> map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    pub fn into_map(self) -> IndexMap<String, Value> {
        self.entries
    }

    /// Merge another bag into this one.
    ///
    /// With [`MergePolicy::Reject`] nothing is inserted when any key of
    /// `other` already exists here.
    pub fn merge(&mut self, other: PropertyBag, policy: MergePolicy) -> Result<()> {
        self.extend_with(other, policy)
    }

    /// Insert `pairs` after normalizing their keys.
    ///
    /// Under [`MergePolicy::Reject`] a key already present before the call
    /// fails the whole extension; keys repeated within `pairs` are still
    /// last-write-wins.
    pub(crate) fn extend_with<I, K, V>(&mut self, pairs: I, policy: MergePolicy) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let pairs: Vec<(String, Value)> = pairs
            .into_iter()
            .map(|(key, value)| (to_camel_case(key.as_ref()).into_owned(), value.into()))
            .collect();

        if policy == MergePolicy::Reject {
            if let Some((key, _)) = pairs.iter().find(|(key, _)| self.contains_key(key)) {
                return Err(Error::DuplicateKey { key: key.clone() });
            }
        }

        self.entries.reserve(pairs.len());
        self.entries.extend(pairs);
        Ok(())
    }
}

impl Serialize for PropertyBag {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.entries.serialize(serializer)
    }
}

impl fmt::Display for PropertyBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&self.entries).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl Index<&str> for PropertyBag {
    type Output = Value;

    /// # Panics
    ///
    /// Panics if `key` is not in the bag.
    fn index(&self, key: &str) -> &Value {
        &self.entries[key]
    }
}

impl<K, V> FromIterator<(K, V)> for PropertyBag
where
    K: AsRef<str>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = PropertyBag::new();
        bag.extend(iter);
        bag
    }
}

impl<K, V> Extend<(K, V)> for PropertyBag
where
    K: AsRef<str>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl From<IndexMap<String, Value>> for PropertyBag {
    fn from(map: IndexMap<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl From<PropertyBag> for Value {
    fn from(bag: PropertyBag) -> Self {
        Value::Object(bag.entries.into_iter().collect())
    }
}

impl IntoIterator for PropertyBag {
    type Item = (String, Value);
    type IntoIter = map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a PropertyBag {
    type Item = (&'a String, &'a Value);
    type IntoIter = map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Reflect for PropertyBag {
    fn property_names(&self) -> Vec<Cow<'_, str>> {
        self.keys().map(Cow::Borrowed).collect()
    }

    fn read_property(&self, name: &str) -> std::result::Result<Value, ReadError> {
        self.get(name).cloned().ok_or_else(|| ReadError::missing(name))
    }
}
