//! Configuration handling for the wizard
//!
//! Addressing for the notification sender. The original deployment
//! hard-coded these; here they live in a per-user json file with the
//! production values as defaults.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const DEFAULT_ADMIN_EMAIL: &str = "lucasliendocba@gmail.com";
const DEFAULT_FROM_ADDRESS: &str = "lucasliendocba@sgr.renovarte.com.ar";

/// User configuration for the wizard core.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WizardConfig {
    /// Where the admin notification goes.
    pub admin_email: Option<String>,
    /// From-address for both outbound emails.
    pub from_address: Option<String>,
}

impl WizardConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("ar", "renovarte", "sgr-onboarding")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: WizardConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    pub fn admin_email(&self) -> &str {
        self.admin_email.as_deref().unwrap_or(DEFAULT_ADMIN_EMAIL)
    }

    pub fn from_address(&self) -> &str {
        self.from_address.as_deref().unwrap_or(DEFAULT_FROM_ADDRESS)
    }
}
