//! JSON credentials file adapter.

use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::error::TenenciasError;

/// Connection credentials for the brokerage connector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub host: u32,
    pub dni: String,
    pub user: String,
    pub password: String,
    /// Account number whose holdings are monitored.
    pub comitente: u32,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            host: 0,
            dni: "0000000".into(),
            user: "xxxxxxxx".into(),
            password: "xxxxxxxxx".into(),
            comitente: 0,
        }
    }
}

/// Load credentials from `path`. On first run the file does not exist yet:
/// a placeholder one is written for the user to edit, and the placeholders
/// are returned.
pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Credentials, TenenciasError> {
    let path = path.as_ref();
    if path.exists() {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| TenenciasError::Config {
            file: path.display().to_string(),
            reason: e.to_string(),
        })
    } else {
        let defaults = Credentials::default();
        let json = serde_json::to_string_pretty(&defaults).map_err(|e| TenenciasError::Config {
            file: path.display().to_string(),
            reason: e.to_string(),
        })?;
        fs::write(path, json)?;
        info!(
            "created {} with placeholder credentials; edit it before connecting to a live feed",
            path.display()
        );
        Ok(defaults)
    }
}
