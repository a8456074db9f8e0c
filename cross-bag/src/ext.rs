use serde_json::Value;

use crate::{
    bag::PropertyBag, build::from_object, error::Result, merge::extend_object, reflect::Reflect,
};

/// Method-call access to the bag builders for any [`Reflect`] type.
pub trait ToPropertyBag {
    /// See [`from_object`].
    fn to_property_bag(&self) -> Result<PropertyBag>;

    /// See [`extend_object`].
    fn to_property_bag_with<I, K, V>(&self, additional_properties: I) -> Result<PropertyBag>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>;
}

impl<T> ToPropertyBag for T
where
    T: Reflect + ?Sized,
{
    fn to_property_bag(&self) -> Result<PropertyBag> {
        from_object(Some(self))
    }

    fn to_property_bag_with<I, K, V>(&self, additional_properties: I) -> Result<PropertyBag>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        extend_object(Some(self), Some(additional_properties))
    }
}
