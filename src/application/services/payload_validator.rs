use serde_json::Value;

use crate::domain::SchemaNode;

/// Checks that `body` has the shape of `schema`.
///
/// Only structure is compared: objects against objects with their required
/// keys, arrays against arrays. Leaf values are never type-checked, and a key
/// whose schema is `null` may be missing from the body.
pub fn validate_payload(schema: &SchemaNode, body: &Value) -> bool {
    match schema {
        SchemaNode::Object(fields) => {
            let Value::Object(body) = body else {
                return false;
            };

            fields
                .iter()
                .filter(|(_, node)| !node.is_null())
                .all(|(key, node)| {
                    body.get(key)
                        .is_some_and(|value| validate_payload(node, value))
                })
        }
        SchemaNode::Array(items) => {
            let Value::Array(body) = body else {
                return false;
            };

            match items.first() {
                Some(template) => body.iter().all(|item| validate_payload(template, item)),
                None => {
                    let template = SchemaNode::Object(Default::default());
                    body.iter().all(|item| validate_payload(&template, item))
                }
            }
        }
        _ => true,
    }
}
