mod bounded_use_cache;

pub use bounded_use_cache::{BoundedUseCache, UNLIMITED_USES};
