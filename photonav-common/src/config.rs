use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ENV_PROJECT_ID: &str = "PHOTONAV_PROJECT_ID";
pub const ENV_DATASET: &str = "PHOTONAV_DATASET";
pub const ENV_CDN_BASE: &str = "PHOTONAV_CDN_BASE";
pub const ENV_PHOTOS_URL: &str = "PHOTONAV_PHOTOS_URL";
pub const ENV_PRODUCTS_URL: &str = "PHOTONAV_PRODUCTS_URL";

const DEFAULT_DATASET: &str = "production";
const DEFAULT_CDN_BASE: &str = "https://cdn.sanity.io";
const DEFAULT_PHOTOS_URL: &str = "/api/gallery.json";
const DEFAULT_PRODUCTS_URL: &str = "/api/products";

/// Configuration errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required setting {0}")]
    Missing(&'static str),
    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Where image assets are served from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdnConfig {
    pub project_id: String,
    pub dataset: String,
    pub base_url: String,
}

impl CdnConfig {
    pub fn new(
        project_id: impl Into<String>,
        dataset: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let project_id = project_id.into();
        let dataset = dataset.into();
        let base_url = base_url.into().trim_end_matches('/').to_string();

        if project_id.is_empty() {
            return Err(ConfigError::Missing(ENV_PROJECT_ID));
        }
        if !is_slug(&project_id) {
            return Err(ConfigError::Invalid {
                key: ENV_PROJECT_ID,
                reason: "only a-z, 0-9 and '-' are allowed".to_string(),
            });
        }
        if dataset.is_empty() || !is_slug(&dataset.replace('_', "-")) {
            return Err(ConfigError::Invalid {
                key: ENV_DATASET,
                reason: format!("{dataset:?} is not a dataset name"),
            });
        }
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(ConfigError::Invalid {
                key: ENV_CDN_BASE,
                reason: "must be an http(s) URL".to_string(),
            });
        }

        Ok(Self {
            project_id,
            dataset,
            base_url,
        })
    }
}

fn is_slug(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Site-level settings for the gallery front end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub cdn: CdnConfig,
    /// Endpoint serving the gallery document list
    pub photos_url: String,
    /// Prefix for per-product documents (`{products_url}/{slug}.json`)
    pub products_url: String,
}

impl SiteConfig {
    /// Build from a key lookup (environment, compile-time env, test map).
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let project_id = get(ENV_PROJECT_ID).ok_or(ConfigError::Missing(ENV_PROJECT_ID))?;
        let dataset = get(ENV_DATASET).unwrap_or_else(|| DEFAULT_DATASET.to_string());
        let base_url = get(ENV_CDN_BASE).unwrap_or_else(|| DEFAULT_CDN_BASE.to_string());
        let cdn = CdnConfig::new(project_id, dataset, base_url)?;

        Ok(Self {
            cdn,
            photos_url: get(ENV_PHOTOS_URL).unwrap_or_else(|| DEFAULT_PHOTOS_URL.to_string()),
            products_url: get(ENV_PRODUCTS_URL)
                .unwrap_or_else(|| DEFAULT_PRODUCTS_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        })
    }

    pub fn product_url(&self, slug: &str) -> String {
        format!("{}/{}.json", self.products_url, slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::from_lookup(lookup_from(&[(ENV_PROJECT_ID, "abc123")])).unwrap();
        assert_eq!(config.cdn.project_id, "abc123");
        assert_eq!(config.cdn.dataset, "production");
        assert_eq!(config.cdn.base_url, "https://cdn.sanity.io");
        assert_eq!(config.photos_url, "/api/gallery.json");
        assert_eq!(config.product_url("roof-trusses"), "/api/products/roof-trusses.json");
    }

    #[test]
    fn test_missing_project_id() {
        let err = SiteConfig::from_lookup(lookup_from(&[(ENV_PROJECT_ID, "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing(ENV_PROJECT_ID));
    }

    #[test]
    fn test_overrides() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            (ENV_PROJECT_ID, "abc123"),
            (ENV_DATASET, "staging_v2"),
            (ENV_CDN_BASE, "http://localhost:9000/"),
            (ENV_PRODUCTS_URL, "/cms/products/"),
        ]))
        .unwrap();
        assert_eq!(config.cdn.dataset, "staging_v2");
        assert_eq!(config.cdn.base_url, "http://localhost:9000");
        assert_eq!(config.product_url("x"), "/cms/products/x.json");
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            CdnConfig::new("Bad Id", "production", "https://cdn.sanity.io"),
            Err(ConfigError::Invalid { key: ENV_PROJECT_ID, .. })
        ));
        assert!(matches!(
            CdnConfig::new("abc", "prod/../x", "https://cdn.sanity.io"),
            Err(ConfigError::Invalid { key: ENV_DATASET, .. })
        ));
        assert!(matches!(
            CdnConfig::new("abc", "production", "cdn.sanity.io"),
            Err(ConfigError::Invalid { key: ENV_CDN_BASE, .. })
        ));
    }
}
