mod data_generator;
mod endpoint_dispatcher;
mod payload_validator;

pub use data_generator::DataGenerator;
pub use endpoint_dispatcher::{
    CompiledEndpoint, DispatchError, EndpointDispatcher, MockRequest, MockResponse, NO_CONTENT,
};
pub use payload_validator::validate_payload;
