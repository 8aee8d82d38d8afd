use std::sync::Arc;

use serde_json::Value;

use crate::application::ports::FieldProvider;
use crate::domain::SchemaNode;

/// Walks a schema tree and replaces every generator name with a fake value.
pub struct DataGenerator<P>
where
    P: FieldProvider + ?Sized,
{
    provider: Arc<P>,
}

impl<P> DataGenerator<P>
where
    P: FieldProvider + ?Sized,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Generates a value with the same structure as `schema`. Never fails: an
    /// unsupported node degrades into a descriptive string.
    pub fn generate(&self, schema: &SchemaNode) -> Value {
        match schema {
            SchemaNode::Generator(name) => self
                .provider
                .generate_field(name)
                .unwrap_or_else(|| Value::String(name.clone())),
            SchemaNode::Object(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(key, node)| (key.clone(), self.generate(node)))
                    .collect(),
            ),
            SchemaNode::Array(items) => {
                Value::Array(items.iter().map(|node| self.generate(node)).collect())
            }
            SchemaNode::Scalar(value) => value.clone(),
            SchemaNode::Unsupported(shape) => {
                tracing::warn!(shape = %shape, "Unsupported schema node");
                Value::String(format!("Unsupported schema node: {}", shape))
            }
        }
    }

    /// Generates `per_page` fresh items from `template`.
    ///
    /// Pages do not address a stable sequence: each call re-rolls its items,
    /// and `page` only decides between an empty and a full page.
    pub fn generate_list(&self, template: &SchemaNode, page: i64, per_page: i64) -> Vec<Value> {
        if page < 1 || per_page < 1 {
            return Vec::new();
        }

        let Ok(count) = usize::try_from(per_page) else {
            return Vec::new();
        };

        (0..count).map(|_| self.generate(template)).collect()
    }
}
