pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{ApiConfig, ConfigurationError, Settings, SettingsOverrides};
pub use router::{build_app, create_router};
pub use state::{AppState, RouteState};
