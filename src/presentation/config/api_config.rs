use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::domain::{EndpointDefinition, HttpMethod};

use super::ConfigurationError;

const INLINE_SOURCE: &str = "<inline>";

/// The endpoint definitions the server mocks.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub endpoints: Vec<EndpointDefinition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// `.yaml` and `.yml` files are YAML, everything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

impl ApiConfig {
    /// Reads, parses and validates an endpoint file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let config = Self::from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| ConfigurationError::Read {
                path: path.display().to_string(),
                source,
            })?;

        Self::parse(
            &content,
            ConfigFormat::from_path(path),
            &path.display().to_string(),
        )
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigurationError> {
        Self::parse(content, ConfigFormat::Json, INLINE_SOURCE)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigurationError> {
        Self::parse(content, ConfigFormat::Yaml, INLINE_SOURCE)
    }

    fn parse(content: &str, format: ConfigFormat, origin: &str) -> Result<Self, ConfigurationError> {
        let parsed: Result<Self, String> = match format {
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|message| ConfigurationError::Parse {
            path: origin.to_string(),
            message,
        })
    }

    /// Rejects definitions the router could not serve.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let mut seen: HashSet<(&str, HttpMethod)> = HashSet::new();
        let mut parameters: HashMap<String, (&str, &str)> = HashMap::new();

        for endpoint in &self.endpoints {
            validate_url(&endpoint.url)?;

            for (prefix, name) in parameter_positions(&endpoint.url) {
                match parameters.get(&prefix) {
                    Some((other_url, other_name)) if *other_name != name => {
                        return Err(ConfigurationError::ConflictingParameter {
                            url: endpoint.url.clone(),
                            other: (*other_url).to_string(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        parameters.insert(prefix, (endpoint.url.as_str(), name));
                    }
                }
            }

            if let Some(status) = endpoint
                .status
                .filter(|status| *status != 0 && !(100..=999).contains(status))
            {
                return Err(ConfigurationError::InvalidStatus {
                    method: endpoint.method,
                    url: endpoint.url.clone(),
                    status,
                });
            }

            if !seen.insert((endpoint.url.as_str(), endpoint.method)) {
                return Err(ConfigurationError::DuplicateRoute {
                    method: endpoint.method,
                    url: endpoint.url.clone(),
                });
            }
        }

        Ok(())
    }
}

fn validate_url(url: &str) -> Result<(), ConfigurationError> {
    let invalid = |reason: &str| ConfigurationError::InvalidUrl {
        url: url.to_string(),
        reason: reason.to_string(),
    };

    if !url.starts_with('/') {
        return Err(invalid("must start with '/'"));
    }

    for segment in url.split('/') {
        if segment.starts_with(':') {
            return Err(invalid("use {param} instead of :param for path parameters"));
        }

        if segment.starts_with('*') {
            return Err(invalid("wildcard segments are not supported"));
        }

        if segment.contains(['{', '}']) {
            match parameter_name(segment) {
                Some(name) if name.starts_with('*') => {
                    return Err(invalid("catch-all parameters are not supported"));
                }
                Some(_) => {}
                None => {
                    return Err(invalid(
                        "a path parameter must fill its whole segment, as in {id}",
                    ));
                }
            }
        }
    }

    Ok(())
}

/// `{name}` segments yield `name`; anything else with braces is malformed.
fn parameter_name(segment: &str) -> Option<&str> {
    segment
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .filter(|name| !name.is_empty() && !name.contains(['{', '}']))
}

/// Every path parameter of `url`, keyed by the url prefix ending at it with
/// parameter names erased. Two routes sharing such a prefix must use the same
/// parameter name there.
fn parameter_positions(url: &str) -> Vec<(String, &str)> {
    let mut shape = String::new();
    let mut positions = Vec::new();

    for segment in url.split('/').skip(1) {
        shape.push('/');
        match parameter_name(segment) {
            Some(name) => {
                shape.push_str("{}");
                positions.push((shape.clone(), name));
            }
            None => shape.push_str(segment),
        }
    }

    positions
}
