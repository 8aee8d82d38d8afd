mod fake_field_provider;

pub use fake_field_provider::{FakeFieldProvider, SUPPORTED_FIELDS};
