use std::sync::Arc;

use fakeapi::application::services::DataGenerator;
use fakeapi::domain::SchemaNode;
use serde_json::{Value, json};

use crate::helpers::CountingFieldProvider;

fn generator() -> DataGenerator<CountingFieldProvider> {
    DataGenerator::new(Arc::new(CountingFieldProvider::default()))
}

#[test]
fn given_object_schema_when_generating_then_keys_are_kept_and_values_replaced() {
    let schema = SchemaNode::from(json!({"id": "uuid", "name": "name"}));

    let value = generator().generate(&schema);

    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert!(object["id"].as_str().unwrap().starts_with("uuid-"));
    assert!(object["name"].as_str().unwrap().starts_with("name-"));
}

#[test]
fn given_unknown_generator_when_generating_then_name_is_returned_verbatim() {
    let schema = SchemaNode::from(json!({"role": "admin"}));

    let value = generator().generate(&schema);

    assert_eq!(value, json!({"role": "admin"}));
}

#[test]
fn given_nested_schema_when_generating_then_structure_is_preserved() {
    let schema = SchemaNode::from(json!({
        "user": {"email": "email", "address": {"city": "city"}},
        "tags": ["word", "word"]
    }));

    let value = generator().generate(&schema);

    assert!(value["user"]["email"].is_string());
    assert!(value["user"]["address"]["city"].is_string());
    let tags = value["tags"].as_array().unwrap();
    assert_eq!(tags.len(), 2);
    assert_ne!(tags[0], tags[1]);
}

#[test]
fn given_scalars_when_generating_then_they_pass_through() {
    let schema = SchemaNode::from(json!({"count": 42, "ratio": 0.5, "ok": false, "gone": null}));

    let value = generator().generate(&schema);

    assert_eq!(value, json!({"count": 42, "ratio": 0.5, "ok": false, "gone": null}));
}

#[test]
fn given_unsupported_node_when_generating_then_description_is_returned() {
    let schema = SchemaNode::Unsupported("tagged value !custom".to_string());

    let value = generator().generate(&schema);

    assert_eq!(
        value,
        Value::String("Unsupported schema node: tagged value !custom".to_string())
    );
}

#[test]
fn given_valid_page_when_generating_list_then_exactly_per_page_items_are_returned() {
    let template = SchemaNode::from(json!({"id": "uuid"}));

    let items = generator().generate_list(&template, 7, 5);

    assert_eq!(items.len(), 5);
}

#[test]
fn given_page_below_one_when_generating_list_then_it_is_empty() {
    let template = SchemaNode::from(json!({"id": "uuid"}));
    let generator = generator();

    assert!(generator.generate_list(&template, 0, 5).is_empty());
    assert!(generator.generate_list(&template, -2, 5).is_empty());
}

#[test]
fn given_per_page_below_one_when_generating_list_then_it_is_empty() {
    let template = SchemaNode::from(json!({"id": "uuid"}));
    let generator = generator();

    assert!(generator.generate_list(&template, 1, 0).is_empty());
    assert!(generator.generate_list(&template, 1, -1).is_empty());
}

#[test]
fn given_template_when_generating_list_then_each_item_is_fresh() {
    let template = SchemaNode::from(json!({"id": "uuid"}));

    let items = generator().generate_list(&template, 1, 3);

    assert_ne!(items[0], items[1]);
    assert_ne!(items[1], items[2]);
}

#[test]
fn given_large_page_size_when_generating_list_then_all_items_are_produced() {
    let template = SchemaNode::Generator("word".to_string());

    let items = generator().generate_list(&template, 1, 100_000);

    assert_eq!(items.len(), 100_000);
}
