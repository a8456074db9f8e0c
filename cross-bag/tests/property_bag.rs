//! End-to-end tests for building and extending property bags.
//!
//! Serialized bags are checked with inline snapshots.
//! Run `cargo insta review` to update them when making intentional changes.

use std::borrow::Cow;

use cross_bag::{
    Error, MergePolicy, PropertyBag, ReadError, Reflect, ToPropertyBag, extend_object,
    extend_object_with, from_map, from_object, from_serialize,
};
use serde::Serialize;
use serde_json::{Value, json};

/// A plain object exposing three readable properties.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
struct Widget {
    id: u64,
    description: String,
    count: i32,
}

impl Widget {
    fn sample() -> Self {
        Self {
            id: 7,
            description: "widget".to_string(),
            count: 3,
        }
    }
}

impl Reflect for Widget {
    fn property_names(&self) -> Vec<Cow<'_, str>> {
        vec!["Id".into(), "Description".into(), "Count".into()]
    }

    fn read_property(&self, name: &str) -> Result<Value, ReadError> {
        match name {
            "Id" => Ok(self.id.into()),
            "Description" => Ok(self.description.clone().into()),
            "Count" => Ok(self.count.into()),
            _ => Err(ReadError::missing(name)),
        }
    }
}

fn keys(bag: &PropertyBag) -> Vec<&str> {
    bag.keys().collect()
}

#[test]
fn test_from_map_camel_cases_keys() {
    let id = json!("3f2504e0-4f89-11d3-9a0c-0305e82c3301");
    let bag = from_map(Some([
        ("Id", id.clone()),
        ("Description", json!("description")),
        ("Count", json!(1)),
    ]))
    .unwrap();

    assert_eq!(keys(&bag), ["id", "description", "count"]);
    assert_eq!(bag["id"], id);
    assert_eq!(bag["description"], json!("description"));
    assert_eq!(bag["count"], json!(1));
}

#[test]
fn test_from_map_collision_keeps_last_value() {
    let bag = from_map(Some([("a", 1), ("A", 2)])).unwrap();

    insta::assert_json_snapshot!(bag, @r#"
    {
      "a": 2
    }
    "#);
}

#[test]
fn test_from_map_without_source() {
    let err = from_map(None::<[(&str, i32); 0]>).unwrap_err();

    assert!(matches!(err, Error::InvalidArgument(_)));
    assert_eq!(err.param_name(), Some("source"));
    assert_eq!(err.to_string(), "Value cannot be null. (Parameter 'source')");
}

#[test]
fn test_from_object_reads_current_values() {
    let mut widget = Widget::sample();
    widget.count = 42;

    let bag = from_object(Some(&widget)).unwrap();

    assert_eq!(bag.get_as::<u64>("id"), Some(widget.id));
    assert_eq!(bag.get_as::<String>("description"), Some(widget.description));
    assert_eq!(bag.get_as::<i32>("count"), Some(42));
}

#[test]
fn test_from_object_keeps_reported_order() {
    let bag = from_object(Some(&Widget::sample())).unwrap();

    insta::assert_json_snapshot!(bag, @r#"
    {
      "id": 7,
      "description": "widget",
      "count": 3
    }
    "#);
}

#[test]
fn test_from_object_without_source() {
    let err = from_object(None::<&Widget>).unwrap_err();

    assert_eq!(err.param_name(), Some("source"));
}

#[test]
fn test_from_object_works_through_trait_objects() {
    let widget = Widget::sample();
    let source: &dyn Reflect = &widget;

    let bag = from_object(Some(source)).unwrap();

    assert_eq!(keys(&bag), ["id", "description", "count"]);
}

#[test]
fn test_extend_object_adds_properties() {
    let widget = Widget::sample();

    let bag = extend_object(Some(&widget), Some([("MyRightFace", 12)])).unwrap();

    assert_eq!(bag["id"], json!(widget.id));
    assert_eq!(bag["description"], json!(widget.description));
    assert_eq!(bag["count"], json!(widget.count));
    assert_eq!(bag["myRightFace"], json!(12));
}

#[test]
fn test_extend_object_without_additional_properties() {
    let err = extend_object(Some(&Widget::sample()), None::<Vec<(&str, Value)>>).unwrap_err();

    assert_eq!(err.param_name(), Some("additionalProperties"));
}

#[test]
fn test_extend_object_without_source() {
    let err = extend_object(None::<&Widget>, Some([("MyRightFace", 12)])).unwrap_err();

    assert_eq!(err.param_name(), Some("source"));
}

#[test]
fn test_extend_object_overwrites_reflected_property() {
    let bag = extend_object(Some(&Widget::sample()), Some([("Count", 99)])).unwrap();

    insta::assert_json_snapshot!(bag, @r#"
    {
      "id": 7,
      "description": "widget",
      "count": 99
    }
    "#);
}

#[test]
fn test_extend_object_reject_policy() {
    let err = extend_object_with(
        Some(&Widget::sample()),
        Some([("Count", 99)]),
        MergePolicy::Reject,
    )
    .unwrap_err();

    assert!(matches!(&err, Error::DuplicateKey { key } if key == "count"));
}

#[test]
fn test_extension_trait_matches_free_functions() {
    let widget = Widget::sample();

    assert_eq!(
        widget.to_property_bag().unwrap(),
        from_object(Some(&widget)).unwrap()
    );
    assert_eq!(
        widget.to_property_bag_with([("MyRightFace", 12)]).unwrap(),
        extend_object(Some(&widget), Some([("MyRightFace", 12)])).unwrap()
    );
}

#[test]
fn test_from_serialize_matches_reflection() {
    let widget = Widget::sample();

    let serialized = from_serialize(Some(&widget)).unwrap();
    let reflected = from_object(Some(&widget)).unwrap();

    assert_eq!(keys(&serialized), keys(&reflected));
    assert_eq!(serialized, reflected);
}

#[test]
fn test_bag_serializes_nested_values() {
    let bag = extend_object(
        Some(&Widget::sample()),
        Some([("Owner", json!({"Name": "ada", "Roles": ["admin"]}))]),
    )
    .unwrap();

    // Only top-level keys are renamed
    insta::assert_json_snapshot!(bag, @r#"
    {
      "id": 7,
      "description": "widget",
      "count": 3,
      "owner": {
        "Name": "ada",
        "Roles": [
          "admin"
        ]
      }
    }
    "#);
}

#[test]
fn test_bag_into_value() {
    let bag = Widget::sample().to_property_bag().unwrap();

    assert_eq!(
        Value::from(bag),
        json!({"id": 7, "description": "widget", "count": 3})
    );
}
