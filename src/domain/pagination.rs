use url::form_urlencoded;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PER_PAGE: i64 = 10;

/// Paging parameters of a list request.
///
/// Values are kept signed: a page or page size below one is a legal request
/// that yields an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub per_page: i64,
}

impl Pagination {
    pub fn new(page: i64, per_page: i64) -> Self {
        Self { page, per_page }
    }

    /// Reads `page` and `per_page` from a raw query string.
    ///
    /// Missing or empty parameters take their defaults; anything that is not
    /// an integer counts as 0. Only the first occurrence of a parameter is
    /// considered.
    pub fn from_query(query: Option<&str>) -> Self {
        let mut page = None;
        let mut per_page = None;

        if let Some(query) = query {
            for (name, value) in form_urlencoded::parse(query.as_bytes()) {
                match name.as_ref() {
                    "page" if page.is_none() => page = Some(value.into_owned()),
                    "per_page" if per_page.is_none() => per_page = Some(value.into_owned()),
                    _ => {}
                }
            }
        }

        Self {
            page: parse_param(page.as_deref(), DEFAULT_PAGE),
            per_page: parse_param(per_page.as_deref(), DEFAULT_PER_PAGE),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PER_PAGE)
    }
}

fn parse_param(raw: Option<&str>, default: i64) -> i64 {
    match raw {
        None | Some("") => default,
        Some(value) => value.parse().unwrap_or(0),
    }
}
