use std::fmt;

use super::http_method::HttpMethod;

/// Identity of a cacheable request: method, path and the raw query string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn for_request(method: HttpMethod, path: &str, query: Option<&str>) -> Self {
        match query.filter(|q| !q.is_empty()) {
            Some(query) => Self(format!("{}:{}?{}", method, path, query)),
            None => Self(format!("{}:{}", method, path)),
        }
    }

    pub fn from_raw(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
