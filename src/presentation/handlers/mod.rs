mod error_response;
mod mock_endpoint;

pub use error_response::{ErrorResponse, error_response};
pub use mock_endpoint::mock_endpoint_handler;
