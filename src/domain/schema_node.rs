use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserialize, Deserializer, EnumAccess, MapAccess, SeqAccess, VariantAccess, Visitor};
use serde_json::Value;

/// A node of a user-supplied schema tree.
///
/// Used both as the template for generated responses and as the shape a
/// request payload has to match.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// Name of a fake-value generator, e.g. `"uuid"` or `"city"`.
    Generator(String),
    Object(BTreeMap<String, SchemaNode>),
    Array(Vec<SchemaNode>),
    /// Numbers, booleans and null, passed through verbatim.
    Scalar(Value),
    /// A config node with no JSON meaning; holds a description of its shape.
    Unsupported(String),
}

impl SchemaNode {
    pub fn null() -> Self {
        Self::Scalar(Value::Null)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Scalar(Value::Null))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Generator(_) => "generator",
            Self::Object(_) => "object",
            Self::Array(_) => "array",
            Self::Scalar(_) => "scalar",
            Self::Unsupported(_) => "unsupported",
        }
    }
}

impl Default for SchemaNode {
    fn default() -> Self {
        Self::null()
    }
}

impl From<Value> for SchemaNode {
    fn from(value: Value) -> Self {
        match value {
            Value::String(name) => Self::Generator(name),
            Value::Object(fields) => Self::Object(
                fields
                    .into_iter()
                    .map(|(key, node)| (key, Self::from(node)))
                    .collect(),
            ),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            scalar => Self::Scalar(scalar),
        }
    }
}

impl<'de> Deserialize<'de> for SchemaNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(SchemaNodeVisitor)
    }
}

struct SchemaNodeVisitor;

impl<'de> Visitor<'de> for SchemaNodeVisitor {
    type Value = SchemaNode;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a generator name, an object, an array or a scalar")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<SchemaNode, E> {
        Ok(SchemaNode::Scalar(Value::Bool(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<SchemaNode, E> {
        Ok(SchemaNode::Scalar(Value::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<SchemaNode, E> {
        Ok(SchemaNode::Scalar(Value::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<SchemaNode, E> {
        Ok(SchemaNode::Scalar(Value::from(v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<SchemaNode, E> {
        Ok(SchemaNode::Generator(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<SchemaNode, E> {
        Ok(SchemaNode::Generator(v))
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<SchemaNode, E> {
        Ok(SchemaNode::Unsupported(format!("{} bytes of binary data", v.len())))
    }

    fn visit_unit<E: de::Error>(self) -> Result<SchemaNode, E> {
        Ok(SchemaNode::null())
    }

    fn visit_none<E: de::Error>(self) -> Result<SchemaNode, E> {
        Ok(SchemaNode::null())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<SchemaNode, D::Error>
    where
        D: Deserializer<'de>,
    {
        SchemaNode::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<SchemaNode, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(SchemaNode::Array(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<SchemaNode, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut fields = BTreeMap::new();
        let mut has_complex_key = false;

        while let Some(key) = map.next_key::<MapKey>()? {
            let node: SchemaNode = map.next_value()?;
            match key {
                MapKey::Name(name) => {
                    fields.insert(name, node);
                }
                MapKey::Complex => has_complex_key = true,
            }
        }

        if has_complex_key {
            return Ok(SchemaNode::Unsupported(
                "mapping with a non-scalar key".to_string(),
            ));
        }
        Ok(SchemaNode::Object(fields))
    }

    // YAML tags (`!custom value`) arrive as enums.
    fn visit_enum<A>(self, data: A) -> Result<SchemaNode, A::Error>
    where
        A: EnumAccess<'de>,
    {
        let (tag, content) = data.variant::<String>()?;
        content.newtype_variant::<de::IgnoredAny>()?;
        Ok(SchemaNode::Unsupported(format!(
            "tagged value !{}",
            tag.trim_start_matches('!')
        )))
    }
}

/// Object keys as they may appear in YAML: scalars become strings, anything
/// else is remembered as unrepresentable.
enum MapKey {
    Name(String),
    Complex,
}

impl<'de> Deserialize<'de> for MapKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MapKeyVisitor)
    }
}

struct MapKeyVisitor;

impl<'de> Visitor<'de> for MapKeyVisitor {
    type Value = MapKey;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object key")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<MapKey, E> {
        Ok(MapKey::Name(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<MapKey, E> {
        Ok(MapKey::Name(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<MapKey, E> {
        Ok(MapKey::Name(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<MapKey, E> {
        Ok(MapKey::Name(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<MapKey, E> {
        Ok(MapKey::Name(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<MapKey, E> {
        Ok(MapKey::Name(v.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<MapKey, E> {
        Ok(MapKey::Name("null".to_string()))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<MapKey, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<de::IgnoredAny>()?.is_some() {}
        Ok(MapKey::Complex)
    }

    fn visit_map<A>(self, mut map: A) -> Result<MapKey, A::Error>
    where
        A: MapAccess<'de>,
    {
        while map
            .next_entry::<de::IgnoredAny, de::IgnoredAny>()?
            .is_some()
        {}
        Ok(MapKey::Complex)
    }

    fn visit_enum<A>(self, data: A) -> Result<MapKey, A::Error>
    where
        A: EnumAccess<'de>,
    {
        let (_, content) = data.variant::<de::IgnoredAny>()?;
        content.newtype_variant::<de::IgnoredAny>()?;
        Ok(MapKey::Complex)
    }
}
