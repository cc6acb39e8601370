//! API configuration.

use std::env;

use common::{ServiceConfig, UploadConfig};
use domain::DEFAULT_KNOWN_PERSON_IDS;

/// API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Bind address, service name and log level
    pub service: ServiceConfig,
    /// Request body limits
    pub upload: UploadConfig,
    /// Ids answered by the existence check
    pub known_person_ids: Vec<i64>,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            service: ServiceConfig {
                host: env::var("API_HOST").unwrap_or(defaults.service.host),
                port: env::var("API_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.service.port),
                log_level: env::var("LOG_LEVEL").unwrap_or(defaults.service.log_level),
                ..defaults.service
            },
            upload: UploadConfig {
                max_bytes: env::var("MAX_UPLOAD_BYTES")
                    .ok()
                    .and_then(|b| b.parse().ok())
                    .unwrap_or(defaults.upload.max_bytes),
            },
            known_person_ids: env::var("KNOWN_PERSON_IDS")
                .map(|ids| parse_person_ids(&ids))
                .unwrap_or(defaults.known_person_ids),
        }
    }

    /// Override the bind address (CLI flags win over the environment).
    pub fn with_addr(mut self, host: impl Into<String>, port: u16) -> Self {
        self.service.host = host.into();
        self.service.port = port;
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            upload: UploadConfig::default(),
            known_person_ids: DEFAULT_KNOWN_PERSON_IDS.to_vec(),
        }
    }
}

/// Parse a comma separated id list, skipping entries that are not positive
/// integers. Falls back to the default ids when nothing usable remains.
pub fn parse_person_ids(raw: &str) -> Vec<i64> {
    let ids: Vec<i64> = raw
        .split(',')
        .filter_map(|id| id.trim().parse().ok())
        .filter(|id| *id > 0)
        .collect();

    if ids.is_empty() {
        tracing::warn!("KNOWN_PERSON_IDS has no usable ids, using defaults");
        DEFAULT_KNOWN_PERSON_IDS.to_vec()
    } else {
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_person_ids() {
        assert_eq!(parse_person_ids("7, 8,9"), vec![7, 8, 9]);
        assert_eq!(parse_person_ids("3,abc,-1,0,4"), vec![3, 4]);
    }

    #[test]
    fn test_parse_person_ids_falls_back_to_defaults() {
        assert_eq!(parse_person_ids(""), vec![1, 2, 3, 4, 5]);
        assert_eq!(parse_person_ids("x,y"), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_with_addr_overrides_bind_address() {
        let config = ApiConfig::default().with_addr("127.0.0.1", 9000);
        assert_eq!(config.service.addr(), "127.0.0.1:9000");
        assert_eq!(config.known_person_ids, vec![1, 2, 3, 4, 5]);
    }
}
