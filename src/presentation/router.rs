use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::any;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::FieldProvider;
use crate::application::services::CompiledEndpoint;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::config::ApiConfig;
use crate::presentation::handlers::mock_endpoint_handler;
use crate::presentation::state::{AppState, RouteState};

/// Builds the router serving every endpoint of `api_config`.
pub fn build_app<P>(api_config: ApiConfig, provider: Arc<P>, max_body_bytes: usize) -> Router
where
    P: FieldProvider + ?Sized + 'static,
{
    create_router(AppState::from_config(api_config, provider, max_body_bytes))
}

pub fn create_router<P>(state: AppState<P>) -> Router
where
    P: FieldProvider + ?Sized + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let mut routes: BTreeMap<String, Vec<CompiledEndpoint>> = BTreeMap::new();
    for endpoint in state.endpoints {
        routes
            .entry(endpoint.definition().url.clone())
            .or_default()
            .push(endpoint);
    }

    let mut router = Router::new();
    for (url, endpoints) in routes {
        let route_state = RouteState {
            dispatcher: Arc::clone(&state.dispatcher),
            endpoints: Arc::new(endpoints),
            max_body_bytes: state.max_body_bytes,
        };

        tracing::info!(
            url = %url,
            methods = %route_state.allowed_methods(),
            "Registered mock endpoint"
        );

        router = router.route(&url, any(mock_endpoint_handler::<P>).with_state(route_state));
    }

    router
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
}
