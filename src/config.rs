use crate::constants::financing_sources;
use crate::error::{PoaError, Result};

/// Runtime configuration for the POA lifecycle core.
///
/// Defaults are suitable for local development; `from_env` overlays
/// `POA_*` environment variables on top of them.
#[derive(Debug, Clone)]
pub struct PoaConfig {
    /// Base URL of the authoritative backend API
    pub api_base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Optional API key sent with every request
    pub api_key: Option<String>,
    /// Header name carrying the API key
    pub api_key_header: String,
    /// Financing source ids considered institutional
    pub institutional_sources: Vec<i64>,
    /// Financing source ids considered external
    pub external_sources: Vec<i64>,
}

impl Default for PoaConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            request_timeout_ms: 30000,
            api_key: None,
            api_key_header: "X-API-Key".to_string(),
            institutional_sources: financing_sources::INSTITUTIONAL.to_vec(),
            external_sources: financing_sources::EXTERNAL.to_vec(),
        }
    }
}

impl PoaConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("POA_API_BASE_URL") {
            config.api_base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("POA_REQUEST_TIMEOUT_MS") {
            config.request_timeout_ms = timeout.parse().map_err(|e| {
                PoaError::ConfigurationError(format!("Invalid request_timeout_ms: {e}"))
            })?;
        }

        if let Ok(api_key) = std::env::var("POA_API_KEY") {
            config.api_key = Some(api_key);
        }

        if let Ok(header) = std::env::var("POA_API_KEY_HEADER") {
            config.api_key_header = header;
        }

        if let Ok(sources) = std::env::var("POA_INSTITUTIONAL_SOURCES") {
            config.institutional_sources = parse_source_list(&sources, "institutional_sources")?;
        }

        if let Ok(sources) = std::env::var("POA_EXTERNAL_SOURCES") {
            config.external_sources = parse_source_list(&sources, "external_sources")?;
        }

        Ok(config)
    }
}

/// Parse a comma-separated list of financing source ids
fn parse_source_list(raw: &str, field: &str) -> Result<Vec<i64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>().map_err(|e| {
                PoaError::ConfigurationError(format!("Invalid {field} entry '{s}': {e}"))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PoaConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.request_timeout_ms, 30000);
        assert!(config.api_key.is_none());
        assert_eq!(config.institutional_sources, vec![1, 4, 5, 7]);
        assert_eq!(config.external_sources, vec![2, 3, 6]);
    }

    #[test]
    fn test_parse_source_list() {
        assert_eq!(parse_source_list("1, 2,3", "x").unwrap(), vec![1, 2, 3]);
        assert!(parse_source_list("1,two", "x").is_err());
        assert_eq!(parse_source_list("", "x").unwrap(), Vec::<i64>::new());
    }
}
