// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! JSON-over-HTTP implementation of [`CloudApi`]

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{ApiError, CloudApi, CreateInstanceRequest, DdosProfile, Instance, Zone};
use crate::config::Profile;
use crate::filter::ListParams;

pub struct HttpClient {
    client: Client,
    base_url: Url,
    api_key: String,
    region: Option<String>,
}

impl HttpClient {
    pub fn new(profile: &Profile) -> Result<Self, ApiError> {
        // reqwest is built without a bundled provider; an Err here only
        // means one is already installed
        let _ = rustls::crypto::ring::default_provider().install_default();

        let base = format!("{}/", profile.url.trim_end_matches('/'));
        let base_url = Url::parse(&base).map_err(|_| ApiError::InvalidUrl(profile.url.clone()))?;
        Ok(Self {
            client: Client::builder()
                .user_agent(concat!("cloudctl/", env!("CARGO_PKG_VERSION")))
                .build()?,
            base_url,
            api_key: profile.api_key.clone(),
            region: profile.region.clone(),
        })
    }

    /// Resolve path segments below the base URL
    ///
    /// Each segment is percent-encoded on its own, so an identifier can
    /// never add, remove or escape path components.
    fn url(&self, segments: &[&str], query: &[(String, String)]) -> Result<Url, ApiError> {
        for segment in segments {
            let dots = segment.to_ascii_lowercase().replace("%2e", ".");
            if segment.is_empty() || dots == "." || dots == ".." {
                return Err(ApiError::InvalidId(segment.to_string()));
            }
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() || self.region.is_some() {
            let mut pairs = url.query_pairs_mut();
            if let Some(region) = &self.region {
                pairs.append_pair("region", region);
            }
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(%method, %url, "API request");
        self.client
            .request(method, url)
            .header(reqwest::header::AUTHORIZATION, format!("APIKey {}", self.api_key))
    }

    async fn send(
        &self,
        builder: RequestBuilder,
        kind: &'static str,
        id: &str,
    ) -> Result<Response, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                kind,
                id: id.to_string(),
            });
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(String, String)],
        kind: &'static str,
        id: &str,
    ) -> Result<T, ApiError> {
        let url = self.url(segments, query)?;
        let response = self.send(self.request(Method::GET, url), kind, id).await?;
        Ok(response.json().await?)
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
        kind: &'static str,
        id: &str,
    ) -> Result<Response, ApiError> {
        let url = self.url(segments, &[])?;
        self.send(self.request(Method::POST, url).json(body), kind, id)
            .await
    }
}

#[async_trait]
impl CloudApi for HttpClient {
    async fn list_instances(&self, params: &ListParams) -> Result<Vec<Instance>, ApiError> {
        self.get(&["v1", "instances"], &params.query_pairs(), "instances", "")
            .await
    }

    async fn get_instance(&self, id: &str) -> Result<Instance, ApiError> {
        self.get(&["v1", "instances", id], &[], "instance", id)
            .await
    }

    async fn create_instance(
        &self,
        request: &CreateInstanceRequest,
    ) -> Result<Instance, ApiError> {
        let response = self
            .post(&["v1", "instances"], request, "instance", &request.name)
            .await?;
        Ok(response.json().await?)
    }

    async fn delete_instance(&self, id: &str) -> Result<(), ApiError> {
        let url = self.url(&["v1", "instances", id], &[])?;
        self.send(self.request(Method::DELETE, url), "instance", id)
            .await?;
        Ok(())
    }

    async fn resize_instance(&self, id: &str, flavor: &str) -> Result<(), ApiError> {
        let body = serde_json::json!({ "flavor": flavor });
        self.post(&["v1", "instances", id, "resize"], &body, "instance", id)
            .await?;
        Ok(())
    }

    async fn list_zones(&self, params: &ListParams) -> Result<Vec<Zone>, ApiError> {
        self.get(&["v1", "dns", "zones"], &params.query_pairs(), "zones", "")
            .await
    }

    async fn get_zone(&self, name: &str) -> Result<Zone, ApiError> {
        self.get(&["v1", "dns", "zones", name], &[], "zone", name)
            .await
    }

    async fn list_ddos_profiles(&self, params: &ListParams) -> Result<Vec<DdosProfile>, ApiError> {
        self.get(&["v1", "ddos", "profiles"], &params.query_pairs(), "ddos profiles", "")
            .await
    }
}
