use std::collections::HashMap;
use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use super::ConfigurationError;

pub const SETTINGS_FILE: &str = "fakeapi";
pub const ENV_PREFIX: &str = "FAKEAPI";
pub const DEFAULT_ENDPOINTS_FILE: &str = "fake.json";
pub const DEFAULT_PORT: u16 = 8765;
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub generator: GeneratorSettings,
    pub endpoints_file: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorSettings {
    pub seed: u64,
}

/// Values given on the command line; they win over every other source.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub endpoints_file: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub seed: Option<u64>,
}

/// Where settings are read from besides defaults and overrides.
#[derive(Debug, Clone)]
pub struct SettingsSources {
    /// Settings file name without extension.
    pub settings_file: PathBuf,
    /// Variables to read instead of the process environment.
    pub environment: Option<HashMap<String, String>>,
}

impl Default for SettingsSources {
    fn default() -> Self {
        Self {
            settings_file: PathBuf::from(SETTINGS_FILE),
            environment: None,
        }
    }
}

impl Settings {
    /// Layers defaults, an optional `fakeapi.toml`, `FAKEAPI_*` environment
    /// variables (sections split by `__`, e.g. `FAKEAPI_SERVER__PORT`) and the
    /// command line overrides.
    pub fn load(overrides: &SettingsOverrides) -> Result<Self, ConfigurationError> {
        Self::load_from(&SettingsSources::default(), overrides)
    }

    pub fn load_from(
        sources: &SettingsSources,
        overrides: &SettingsOverrides,
    ) -> Result<Self, ConfigurationError> {
        let settings_file = sources.settings_file.display().to_string();

        let settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("server.max_body_bytes", DEFAULT_MAX_BODY_BYTES.to_string())?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .set_default("generator.seed", "0")?
            .set_default("endpoints_file", DEFAULT_ENDPOINTS_FILE)?
            .add_source(File::with_name(&settings_file).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(sources.environment.clone()),
            )
            .set_override_option(
                "endpoints_file",
                overrides
                    .endpoints_file
                    .as_ref()
                    .map(|path| path.display().to_string()),
            )?
            .set_override_option("server.host", overrides.host.clone())?
            .set_override_option("server.port", overrides.port.map(i64::from))?
            .set_override_option("generator.seed", overrides.seed.map(|seed| seed.to_string()))?
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }
}
