mod api_config;
mod config_error;
mod settings;

pub use api_config::{ApiConfig, ConfigFormat};
pub use config_error::ConfigurationError;
pub use settings::{
    DEFAULT_ENDPOINTS_FILE, DEFAULT_MAX_BODY_BYTES, DEFAULT_PORT, ENV_PREFIX, GeneratorSettings,
    LoggingSettings, SETTINGS_FILE, ServerSettings, Settings, SettingsOverrides,
    SettingsSources,
};
