// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Profile and settings file types

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::wait::WaitConfig;

/// A connection profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Profile name
    pub name: String,

    /// API base URL
    pub url: String,

    /// API token sent with every request
    #[serde(rename = "apiKey")]
    pub api_key: String,

    /// Default region for regional resources (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Profile {
    /// Create a new profile
    pub fn new(name: String, url: String, api_key: String) -> Self {
        Self {
            name,
            url,
            api_key,
            region: None,
        }
    }

    /// Load a profile from the profiles directory
    pub fn load(name: &str) -> anyhow::Result<Self> {
        Self::load_from(name, &super::paths::profile_path(name))
    }

    fn load_from(name: &str, path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read profile '{}': {}", name, e))?;
        let profile: Profile = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse profile '{}': {}", name, e))?;
        Ok(profile)
    }
}

/// Main configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Current active profile name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Seconds to wait for a long-running command before giving up
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_wait_timeout_seconds: Option<i64>,

    /// Seconds between polls while waiting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_wait_sleep_seconds: Option<i64>,
}

impl Config {
    /// Load the main config file, or defaults when there is none
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&super::paths::config_file())
    }

    fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Get the current profile name
    pub fn current_profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    /// Wait settings from the file, falling back to built-in defaults
    pub fn wait_config(&self) -> WaitConfig {
        let defaults = WaitConfig::default();
        WaitConfig {
            timeout_seconds: self
                .command_wait_timeout_seconds
                .unwrap_or(defaults.timeout_seconds),
            sleep_seconds: self
                .command_wait_sleep_seconds
                .unwrap_or(defaults.sleep_seconds),
        }
    }
}
