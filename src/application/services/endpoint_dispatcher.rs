use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use crate::application::ports::{FieldProvider, ResponseCache};
use crate::domain::{CacheKey, EndpointDefinition, HttpMethod, Pagination, SchemaNode};

use super::data_generator::DataGenerator;
use super::payload_validator::validate_payload;

pub const NO_CONTENT: u16 = 204;

/// An endpoint definition bundled with the cache that belongs to it.
pub struct CompiledEndpoint {
    definition: EndpointDefinition,
    cache: Option<Arc<dyn ResponseCache>>,
}

impl CompiledEndpoint {
    pub fn new(definition: EndpointDefinition, cache: Option<Arc<dyn ResponseCache>>) -> Self {
        Self { definition, cache }
    }

    pub fn definition(&self) -> &EndpointDefinition {
        &self.definition
    }

    pub fn method(&self) -> HttpMethod {
        self.definition.method
    }

    pub fn is_cached(&self) -> bool {
        self.cache.is_some()
    }
}

/// The parts of an inbound request the pipeline looks at.
#[derive(Debug, Clone, Copy)]
pub struct MockRequest<'a> {
    pub method: HttpMethod,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub body: &'a [u8],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockResponse {
    pub status: u16,
    /// Serialized JSON; `None` for 204 responses.
    pub body: Option<Vec<u8>>,
    pub cache_hit: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Empty body")]
    EmptyBody,
    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),
    #[error("Payload does not match schema")]
    PayloadMismatch,
    #[error("Error generating JSON: {0}")]
    Serialization(String),
}

impl DispatchError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::EmptyBody | Self::InvalidJson(_) | Self::PayloadMismatch => 400,
            Self::Serialization(_) => 500,
        }
    }
}

/// Runs the per-request pipeline: payload validation, cache lookup,
/// generation, serialization and cache store.
pub struct EndpointDispatcher<P>
where
    P: FieldProvider + ?Sized,
{
    generator: DataGenerator<P>,
}

impl<P> EndpointDispatcher<P>
where
    P: FieldProvider + ?Sized,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            generator: DataGenerator::new(provider),
        }
    }

    #[tracing::instrument(
        skip(self, endpoint, request),
        fields(method = %request.method, path = %request.path)
    )]
    pub fn dispatch(
        &self,
        endpoint: &CompiledEndpoint,
        request: &MockRequest<'_>,
    ) -> Result<MockResponse, DispatchError> {
        let definition = endpoint.definition();
        let status = definition.status();

        if let Some(schema) = definition
            .payload
            .as_ref()
            .filter(|_| request.method.carries_body())
        {
            check_payload(schema, request.body)?;
        }

        let cache_slot = match (&endpoint.cache, request.method) {
            (Some(cache), HttpMethod::Get) => {
                let key = CacheKey::for_request(request.method, request.path, request.query);
                if let Some(body) = cache.get(&key) {
                    tracing::debug!(key = %key, "Serving cached response");
                    return Ok(MockResponse {
                        status,
                        body: (status != NO_CONTENT).then_some(body),
                        cache_hit: true,
                    });
                }
                Some((cache, key))
            }
            _ => None,
        };

        let data = self.generate_response(&definition.response, request.query);

        let body = serde_json::to_vec(&data).map_err(|e| {
            tracing::error!(error = %e, "Failed to serialize generated response");
            DispatchError::Serialization(e.to_string())
        })?;

        if status == NO_CONTENT {
            return Ok(MockResponse {
                status,
                body: None,
                cache_hit: false,
            });
        }

        if let Some((cache, key)) = cache_slot {
            cache.set(key, body.clone());
        }

        Ok(MockResponse {
            status,
            body: Some(body),
            cache_hit: false,
        })
    }

    fn generate_response(&self, schema: &SchemaNode, query: Option<&str>) -> Value {
        match schema {
            SchemaNode::Array(items) => {
                let pagination = Pagination::from_query(query);
                tracing::debug!(
                    page = pagination.page,
                    per_page = pagination.per_page,
                    "Generating list response"
                );
                let list = match items.first() {
                    Some(template) => self.generator.generate_list(
                        template,
                        pagination.page,
                        pagination.per_page,
                    ),
                    None => self.generator.generate_list(
                        &SchemaNode::Object(BTreeMap::new()),
                        pagination.page,
                        pagination.per_page,
                    ),
                };
                Value::Array(list)
            }
            other => self.generator.generate(other),
        }
    }
}

fn check_payload(schema: &SchemaNode, body: &[u8]) -> Result<(), DispatchError> {
    if body.is_empty() {
        tracing::warn!("Rejected request with empty body");
        return Err(DispatchError::EmptyBody);
    }

    let body: Value = serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(error = %e, "Rejected request with invalid JSON body");
        DispatchError::InvalidJson(e.to_string())
    })?;

    if !validate_payload(schema, &body) {
        tracing::warn!("Rejected payload that does not match schema");
        return Err(DispatchError::PayloadMismatch);
    }

    Ok(())
}
