mod cache_key;
mod endpoint;
mod http_method;
mod pagination;
mod schema_node;

pub use cache_key::CacheKey;
pub use endpoint::{DEFAULT_STATUS, EndpointDefinition};
pub use http_method::HttpMethod;
pub use pagination::{DEFAULT_PAGE, DEFAULT_PER_PAGE, Pagination};
pub use schema_node::SchemaNode;
