use axum::body::{Body, Bytes, to_bytes};
use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::application::ports::FieldProvider;
use crate::application::services::{MockRequest, MockResponse};
use crate::domain::HttpMethod;
use crate::presentation::state::RouteState;

use super::error_response::error_response;

const JSON_CONTENT_TYPE: &str = "application/json";

#[tracing::instrument(skip(route, request), fields(method = %request.method(), path = %request.uri().path()))]
pub async fn mock_endpoint_handler<P>(
    State(route): State<RouteState<P>>,
    request: Request,
) -> Response
where
    P: FieldProvider + ?Sized + 'static,
{
    let endpoint = HttpMethod::try_from(request.method().as_str())
        .ok()
        .and_then(|method| route.endpoint_for(method));

    let Some(endpoint) = endpoint else {
        tracing::debug!(allowed = %route.allowed_methods(), "Method not allowed");
        return (
            [(header::ALLOW, route.allowed_methods())],
            error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed"),
        )
            .into_response();
    };

    let method = endpoint.method();
    let path = request.uri().path().to_string();
    let query = request.uri().query().map(str::to_string);

    let body = if endpoint.definition().payload.is_some() && method.carries_body() {
        match to_bytes(request.into_body(), route.max_body_bytes).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read request body");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Error reading request body: {}", e),
                );
            }
        }
    } else {
        Bytes::new()
    };

    let mock_request = MockRequest {
        method,
        path: &path,
        query: query.as_deref(),
        body: &body,
    };

    match route.dispatcher.dispatch(endpoint, &mock_request) {
        Ok(response) => {
            tracing::debug!(
                status = response.status,
                cache_hit = response.cache_hit,
                "Mock response ready"
            );
            into_http_response(response)
        }
        Err(e) => {
            let status =
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            error_response(status, e.to_string())
        }
    }
}

fn into_http_response(response: MockResponse) -> Response {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::OK);
    let content_type = [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)];

    match response.body {
        Some(body) => (status, content_type, Body::from(body)).into_response(),
        None => (status, content_type).into_response(),
    }
}
