pub mod cache;
pub mod faker;
pub mod observability;
