use std::sync::Arc;

use fakeapi::application::ports::ResponseCache;
use fakeapi::application::services::{
    CompiledEndpoint, DispatchError, EndpointDispatcher, MockRequest, NO_CONTENT,
};
use fakeapi::domain::{EndpointDefinition, HttpMethod, SchemaNode};
use fakeapi::infrastructure::cache::{BoundedUseCache, UNLIMITED_USES};
use serde_json::{Value, json};

use crate::helpers::CountingFieldProvider;

fn dispatcher() -> EndpointDispatcher<CountingFieldProvider> {
    EndpointDispatcher::new(Arc::new(CountingFieldProvider::default()))
}

fn endpoint(definition: EndpointDefinition) -> CompiledEndpoint {
    let cache = definition
        .cache
        .map(|max_uses| Arc::new(BoundedUseCache::new(max_uses)) as Arc<dyn ResponseCache>);
    CompiledEndpoint::new(definition, cache)
}

fn request<'a>(method: HttpMethod, query: Option<&'a str>, body: &'a [u8]) -> MockRequest<'a> {
    MockRequest {
        method,
        path: "/items",
        query,
        body,
    }
}

fn body_json(body: &Option<Vec<u8>>) -> Value {
    serde_json::from_slice(body.as_ref().unwrap()).unwrap()
}

#[test]
fn given_object_response_when_dispatching_then_generated_json_is_returned() {
    let endpoint = endpoint(EndpointDefinition::new(
        "/items",
        HttpMethod::Get,
        SchemaNode::from(json!({"id": "uuid"})),
    ));

    let response = dispatcher()
        .dispatch(&endpoint, &request(HttpMethod::Get, None, b""))
        .unwrap();

    assert_eq!(response.status, 200);
    assert!(!response.cache_hit);
    assert!(body_json(&response.body)["id"].is_string());
}

#[test]
fn given_array_response_when_dispatching_then_paginated_list_is_returned() {
    let endpoint = endpoint(EndpointDefinition::new(
        "/items",
        HttpMethod::Get,
        SchemaNode::from(json!([{"id": "uuid"}])),
    ));
    let dispatcher = dispatcher();

    let default_page = dispatcher
        .dispatch(&endpoint, &request(HttpMethod::Get, None, b""))
        .unwrap();
    let second_page = dispatcher
        .dispatch(&endpoint, &request(HttpMethod::Get, Some("page=2&per_page=5"), b""))
        .unwrap();
    let empty_page = dispatcher
        .dispatch(&endpoint, &request(HttpMethod::Get, Some("page=0"), b""))
        .unwrap();

    assert_eq!(body_json(&default_page.body).as_array().unwrap().len(), 10);
    assert_eq!(body_json(&second_page.body).as_array().unwrap().len(), 5);
    assert_eq!(body_json(&empty_page.body), json!([]));
}

#[test]
fn given_empty_array_response_when_dispatching_then_items_are_empty_objects() {
    let endpoint = endpoint(EndpointDefinition::new(
        "/items",
        HttpMethod::Get,
        SchemaNode::from(json!([])),
    ));

    let response = dispatcher()
        .dispatch(&endpoint, &request(HttpMethod::Get, Some("per_page=2"), b""))
        .unwrap();

    assert_eq!(body_json(&response.body), json!([{}, {}]));
}

#[test]
fn given_payload_schema_when_body_is_empty_then_empty_body_error() {
    let endpoint = endpoint(
        EndpointDefinition::new("/items", HttpMethod::Post, SchemaNode::null())
            .with_payload(SchemaNode::from(json!({"name": "name"}))),
    );

    let result = dispatcher().dispatch(&endpoint, &request(HttpMethod::Post, None, b""));

    let error = result.unwrap_err();
    assert!(matches!(error, DispatchError::EmptyBody));
    assert_eq!(error.status_code(), 400);
    assert_eq!(error.to_string(), "Empty body");
}

#[test]
fn given_payload_schema_when_body_is_not_json_then_invalid_json_error() {
    let endpoint = endpoint(
        EndpointDefinition::new("/items", HttpMethod::Post, SchemaNode::null())
            .with_payload(SchemaNode::from(json!({"name": "name"}))),
    );

    let result = dispatcher().dispatch(&endpoint, &request(HttpMethod::Post, None, b"{oops"));

    let error = result.unwrap_err();
    assert!(matches!(error, DispatchError::InvalidJson(_)));
    assert_eq!(error.status_code(), 400);
    assert!(error.to_string().starts_with("Invalid JSON body"));
}

#[test]
fn given_payload_schema_when_body_mismatches_then_payload_mismatch_error() {
    let endpoint = endpoint(
        EndpointDefinition::new("/items", HttpMethod::Post, SchemaNode::null())
            .with_payload(SchemaNode::from(json!({"name": "name"}))),
    );

    let result =
        dispatcher().dispatch(&endpoint, &request(HttpMethod::Post, None, br#"{"x": 1}"#));

    let error = result.unwrap_err();
    assert!(matches!(error, DispatchError::PayloadMismatch));
    assert_eq!(error.to_string(), "Payload does not match schema");
}

#[test]
fn given_payload_schema_when_body_matches_then_configured_status_is_returned() {
    let endpoint = endpoint(
        EndpointDefinition::new("/items", HttpMethod::Post, SchemaNode::from(json!({"id": "uuid"})))
            .with_payload(SchemaNode::from(json!({"name": "name"})))
            .with_status(201),
    );

    let response = dispatcher()
        .dispatch(
            &endpoint,
            &request(HttpMethod::Post, None, br#"{"name": "Ann"}"#),
        )
        .unwrap();

    assert_eq!(response.status, 201);
    assert!(body_json(&response.body)["id"].is_string());
}

#[test]
fn given_payload_schema_on_get_when_dispatching_then_body_is_not_checked() {
    let endpoint = endpoint(
        EndpointDefinition::new("/items", HttpMethod::Get, SchemaNode::from(json!({"id": "uuid"})))
            .with_payload(SchemaNode::from(json!({"name": "name"}))),
    );

    let response = dispatcher().dispatch(&endpoint, &request(HttpMethod::Get, None, b""));

    assert!(response.is_ok());
}

#[test]
fn given_cached_get_when_dispatching_twice_then_second_response_is_a_hit() {
    let endpoint = endpoint(
        EndpointDefinition::new("/items", HttpMethod::Get, SchemaNode::from(json!({"id": "uuid"})))
            .with_cache(1),
    );
    let dispatcher = dispatcher();

    let first = dispatcher
        .dispatch(&endpoint, &request(HttpMethod::Get, None, b""))
        .unwrap();
    let second = dispatcher
        .dispatch(&endpoint, &request(HttpMethod::Get, None, b""))
        .unwrap();
    let third = dispatcher
        .dispatch(&endpoint, &request(HttpMethod::Get, None, b""))
        .unwrap();

    assert!(!first.cache_hit);
    assert!(second.cache_hit);
    assert_eq!(first.body, second.body);
    assert!(!third.cache_hit);
    assert_ne!(second.body, third.body);
}

#[test]
fn given_cached_get_when_queries_differ_then_entries_are_separate() {
    let endpoint = endpoint(
        EndpointDefinition::new("/items", HttpMethod::Get, SchemaNode::from(json!({"id": "uuid"})))
            .with_cache(UNLIMITED_USES),
    );
    let dispatcher = dispatcher();

    let first = dispatcher
        .dispatch(&endpoint, &request(HttpMethod::Get, Some("a=1"), b""))
        .unwrap();
    let other = dispatcher
        .dispatch(&endpoint, &request(HttpMethod::Get, Some("a=2"), b""))
        .unwrap();
    let again = dispatcher
        .dispatch(&endpoint, &request(HttpMethod::Get, Some("a=1"), b""))
        .unwrap();

    assert!(!other.cache_hit);
    assert_ne!(first.body, other.body);
    assert!(again.cache_hit);
    assert_eq!(first.body, again.body);
}

#[test]
fn given_cache_on_post_endpoint_when_dispatching_then_nothing_is_cached() {
    let endpoint = endpoint(
        EndpointDefinition::new("/items", HttpMethod::Post, SchemaNode::from(json!({"id": "uuid"})))
            .with_cache(UNLIMITED_USES),
    );
    let dispatcher = dispatcher();

    let first = dispatcher
        .dispatch(&endpoint, &request(HttpMethod::Post, None, b""))
        .unwrap();
    let second = dispatcher
        .dispatch(&endpoint, &request(HttpMethod::Post, None, b""))
        .unwrap();

    assert!(!second.cache_hit);
    assert_ne!(first.body, second.body);
}

#[test]
fn given_no_content_status_when_dispatching_then_body_is_absent_and_not_cached() {
    let endpoint = endpoint(
        EndpointDefinition::new("/items", HttpMethod::Get, SchemaNode::from(json!({"id": "uuid"})))
            .with_status(NO_CONTENT)
            .with_cache(UNLIMITED_USES),
    );
    let dispatcher = dispatcher();

    let first = dispatcher
        .dispatch(&endpoint, &request(HttpMethod::Get, None, b""))
        .unwrap();
    let second = dispatcher
        .dispatch(&endpoint, &request(HttpMethod::Get, None, b""))
        .unwrap();

    assert_eq!(first.status, 204);
    assert!(first.body.is_none());
    assert!(!second.cache_hit);
}
