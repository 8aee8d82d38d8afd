use serde::Deserialize;

use super::http_method::HttpMethod;
use super::schema_node::SchemaNode;

pub const DEFAULT_STATUS: u16 = 200;

/// One configured mock route.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EndpointDefinition {
    pub url: String,
    #[serde(rename = "type", default)]
    pub method: HttpMethod,
    #[serde(default)]
    pub response: SchemaNode,
    #[serde(default)]
    pub payload: Option<SchemaNode>,
    #[serde(default)]
    pub status: Option<u16>,
    /// Number of times a cached response may be replayed; `-1` is unlimited.
    /// Absent means the endpoint is not cached at all.
    #[serde(default)]
    pub cache: Option<i64>,
}

impl EndpointDefinition {
    pub fn new(url: impl Into<String>, method: HttpMethod, response: SchemaNode) -> Self {
        Self {
            url: url.into(),
            method,
            response,
            payload: None,
            status: None,
            cache: None,
        }
    }

    pub fn with_payload(mut self, payload: SchemaNode) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_cache(mut self, max_uses: i64) -> Self {
        self.cache = Some(max_uses);
        self
    }

    /// Response status, falling back to 200 when unset or zero.
    pub fn status(&self) -> u16 {
        match self.status {
            None | Some(0) => DEFAULT_STATUS,
            Some(status) => status,
        }
    }
}
