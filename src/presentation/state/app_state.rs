use std::sync::Arc;

use crate::application::ports::{FieldProvider, ResponseCache};
use crate::application::services::{CompiledEndpoint, EndpointDispatcher};
use crate::domain::HttpMethod;
use crate::infrastructure::cache::BoundedUseCache;
use crate::presentation::config::ApiConfig;

pub struct AppState<P>
where
    P: FieldProvider + ?Sized,
{
    pub dispatcher: Arc<EndpointDispatcher<P>>,
    pub endpoints: Vec<CompiledEndpoint>,
    pub max_body_bytes: usize,
}

impl<P> AppState<P>
where
    P: FieldProvider + ?Sized,
{
    /// Compiles every endpoint of `api_config`, giving each cached endpoint
    /// its own cache.
    pub fn from_config(api_config: ApiConfig, provider: Arc<P>, max_body_bytes: usize) -> Self {
        let endpoints = api_config
            .endpoints
            .into_iter()
            .map(|definition| {
                let cache = definition.cache.map(|max_uses| {
                    Arc::new(BoundedUseCache::new(max_uses)) as Arc<dyn ResponseCache>
                });
                CompiledEndpoint::new(definition, cache)
            })
            .collect();

        Self {
            dispatcher: Arc::new(EndpointDispatcher::new(provider)),
            endpoints,
            max_body_bytes,
        }
    }
}

/// State of one routed url: every endpoint declared for it, one per method.
pub struct RouteState<P>
where
    P: FieldProvider + ?Sized,
{
    pub dispatcher: Arc<EndpointDispatcher<P>>,
    pub endpoints: Arc<Vec<CompiledEndpoint>>,
    pub max_body_bytes: usize,
}

impl<P> RouteState<P>
where
    P: FieldProvider + ?Sized,
{
    pub fn endpoint_for(&self, method: HttpMethod) -> Option<&CompiledEndpoint> {
        self.endpoints
            .iter()
            .find(|endpoint| endpoint.method() == method)
    }

    /// Value for the `Allow` header.
    pub fn allowed_methods(&self) -> String {
        self.endpoints
            .iter()
            .map(|endpoint| endpoint.method().as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<P> Clone for RouteState<P>
where
    P: FieldProvider + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            dispatcher: Arc::clone(&self.dispatcher),
            endpoints: Arc::clone(&self.endpoints),
            max_body_bytes: self.max_body_bytes,
        }
    }
}
