mod field_provider;
mod response_cache;

pub use field_provider::FieldProvider;
pub use response_cache::ResponseCache;
