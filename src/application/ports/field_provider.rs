use serde_json::Value;

/// Source of fake values for generator names found in a schema.
pub trait FieldProvider: Send + Sync {
    /// Produces a value for `kind`, or `None` when the name is not a known
    /// generator.
    fn generate_field(&self, kind: &str) -> Option<Value>;
}
