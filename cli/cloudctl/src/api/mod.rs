// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Remote API surface used by the commands
//!
//! Commands only talk to the service through [`CloudApi`], so they can be
//! exercised against an in-memory implementation in tests.

pub mod http;

pub use http::HttpClient;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;
use thiserror::Error;

use crate::filter::ListParams;

/// Errors returned by the remote API
#[derive(Error, Debug)]
pub enum ApiError {
    /// The resource does not exist (or no longer exists)
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("API request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("invalid API URL '{0}'")]
    InvalidUrl(String),

    /// An identifier that cannot name a single path segment
    #[error("invalid identifier '{0}'")]
    InvalidId(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Lifecycle state of a compute instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InstanceState {
    Provisioning,
    Running,
    Stopped,
    Resizing,
    Deleting,
    Failed,
    #[serde(other)]
    Unknown,
}

/// A compute instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub id: String,
    pub name: String,
    pub state: InstanceState,
    pub flavor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub region: String,
    #[serde(default)]
    pub addresses: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateInstanceRequest {
    pub name: String,
    pub flavor: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// A DNS zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub records: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<u64>,
    #[serde(default)]
    pub dnssec: bool,
}

/// DDoS protection profile attached to a public address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DdosProfile {
    pub id: u64,
    pub ip_address: String,
    pub template: String,
    pub active: bool,
    /// Template-specific settings, passed through untouched
    #[serde(default)]
    pub fields: serde_json::Value,
}

#[async_trait]
pub trait CloudApi: Send + Sync {
    async fn list_instances(&self, params: &ListParams) -> Result<Vec<Instance>, ApiError>;

    async fn get_instance(&self, id: &str) -> Result<Instance, ApiError>;

    async fn create_instance(&self, request: &CreateInstanceRequest)
    -> Result<Instance, ApiError>;

    async fn delete_instance(&self, id: &str) -> Result<(), ApiError>;

    async fn resize_instance(&self, id: &str, flavor: &str) -> Result<(), ApiError>;

    async fn list_zones(&self, params: &ListParams) -> Result<Vec<Zone>, ApiError>;

    async fn get_zone(&self, name: &str) -> Result<Zone, ApiError>;

    async fn list_ddos_profiles(&self, params: &ListParams) -> Result<Vec<DdosProfile>, ApiError>;
}
