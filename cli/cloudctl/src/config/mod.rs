// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Configuration management

pub mod paths;
pub mod profile;

pub use profile::{Config, Profile};

use anyhow::Result;

use crate::wait::WaitConfig;

/// Build an "env" profile from environment variables
pub fn env_profile() -> Result<Profile> {
    let url = std::env::var("CLOUDCTL_URL")
        .map_err(|_| anyhow::anyhow!("CLOUDCTL_URL must be set"))?;
    let api_key = std::env::var("CLOUDCTL_API_KEY")
        .map_err(|_| anyhow::anyhow!("CLOUDCTL_API_KEY must be set"))?;

    let mut profile = Profile::new("env".to_string(), url, api_key);
    profile.region = std::env::var("CLOUDCTL_REGION").ok();
    Ok(profile)
}

/// Resolve which profile to use
///
/// Priority:
/// 1. CLI --profile argument (or CLOUDCTL_PROFILE, via clap)
/// 2. "env" if CLOUDCTL_URL is set
/// 3. Current profile from config.json
pub fn resolve_profile(cli_profile: Option<&str>) -> Result<Profile> {
    if let Some(name) = cli_profile {
        if name == "env" {
            return env_profile();
        }
        return Profile::load(name);
    }

    if std::env::var("CLOUDCTL_URL").is_ok() {
        return env_profile();
    }

    let config = Config::load()?;
    if let Some(name) = config.current_profile() {
        return Profile::load(name);
    }

    Err(anyhow::anyhow!(
        "No profile configured. Add one under {} or set CLOUDCTL_URL and CLOUDCTL_API_KEY.",
        paths::profiles_dir().display()
    ))
}

/// Resolve wait settings: explicit values (flags or their environment
/// variables) win over config.json, which wins over the defaults
pub fn resolve_wait_config(timeout: Option<i64>, interval: Option<i64>) -> Result<WaitConfig> {
    let base = Config::load()?.wait_config();
    Ok(WaitConfig {
        timeout_seconds: timeout.unwrap_or(base.timeout_seconds),
        sleep_seconds: interval.unwrap_or(base.sleep_seconds),
    })
}
