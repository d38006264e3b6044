//! Backend location and optional client settings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BreathScanError, Result};
use crate::models::{PatientDetails, DEFAULT_MODEL};

/// Environment variable naming the backend base URL.
pub const API_URL_ENV: &str = "BREATHSCAN_API_URL";

/// Used when nothing else names a backend.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Where the backend lives. All endpoint paths are joined onto `api_url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Base URL baked in at compile time through `BREATHSCAN_API_URL`.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("BREATHSCAN_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    /// Absolute URL for an `/api/...` path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

/// Contents of an optional `breathscan.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub api_url: Option<String>,
    pub model_name: Option<String>,
    pub patient_name: Option<String>,
    pub age: Option<u32>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: FileConfig = serde_yaml::from_str(&text)?;
        if let Some(url) = &config.api_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(BreathScanError::Config(format!(
                    "api_url must be an http(s) URL, got '{url}'"
                )));
            }
        }
        Ok(config)
    }

    pub fn model_name(&self) -> &str {
        self.model_name.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    /// Patient details with unset fields falling back to the placeholders.
    pub fn patient(&self) -> PatientDetails {
        let defaults = PatientDetails::default();
        PatientDetails {
            name: self.patient_name.clone().unwrap_or(defaults.name),
            age: self.age.unwrap_or(defaults.age),
        }
    }
}
