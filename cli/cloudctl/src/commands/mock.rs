// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! In-memory [`CloudApi`] for command tests

#![allow(clippy::unwrap_used)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use super::Context;
use crate::api::{
    ApiError, CloudApi, CreateInstanceRequest, DdosProfile, Instance, InstanceState, Zone,
};
use crate::filter::ListParams;
use crate::wait::{WaitConfig, Waiter};

pub fn instance(id: &str, state: InstanceState) -> Instance {
    Instance {
        id: id.to_string(),
        name: format!("{id}-name"),
        state,
        flavor: "g1-small".to_string(),
        image: Some("ubuntu-24.04".to_string()),
        region: "ed-1".to_string(),
        addresses: Vec::new(),
        created_at: None,
    }
}

pub fn waiter() -> Waiter {
    Waiter::new(WaitConfig {
        timeout_seconds: 1200,
        sleep_seconds: 1,
    })
}

pub fn context() -> Context {
    Context {
        format: "json".to_string(),
        template: None,
        waiter: waiter(),
    }
}

struct Entry {
    instance: Instance,
    /// Successive states returned by lookups; the last one repeats and
    /// `None` means the instance is gone
    states: VecDeque<Option<InstanceState>>,
    lookups: usize,
    flavor_after: Option<(usize, String)>,
    fail_status: Option<u16>,
}

#[derive(Default)]
struct State {
    instances: HashMap<String, Entry>,
    zones: Vec<Zone>,
    ddos_profiles: Vec<DdosProfile>,
    get_calls: usize,
    list_calls: usize,
    last_params: Option<ListParams>,
    deleted: Vec<String>,
    resized: Vec<(String, String)>,
}

#[derive(Default)]
pub struct MockApi {
    state: Mutex<State>,
}

impl MockApi {
    pub fn with_states(self, id: &str, states: &[Option<InstanceState>]) -> Self {
        let first = states.first().copied().flatten().unwrap_or(InstanceState::Unknown);
        self.state.lock().unwrap().instances.insert(
            id.to_string(),
            Entry {
                instance: instance(id, first),
                states: states.iter().copied().collect(),
                lookups: 0,
                flavor_after: None,
                fail_status: None,
            },
        );
        self
    }

    pub fn with_zones(self, zones: Vec<Zone>) -> Self {
        self.state.lock().unwrap().zones = zones;
        self
    }

    pub fn with_ddos_profiles(self, profiles: Vec<DdosProfile>) -> Self {
        self.state.lock().unwrap().ddos_profiles = profiles;
        self
    }

    pub fn strip_image(&self, id: &str) {
        if let Some(entry) = self.state.lock().unwrap().instances.get_mut(id) {
            entry.instance.image = None;
        }
    }

    /// Report `flavor` from the `lookup`-th lookup on
    pub fn set_flavor_after(&self, id: &str, lookup: usize, flavor: &str) {
        if let Some(entry) = self.state.lock().unwrap().instances.get_mut(id) {
            entry.flavor_after = Some((lookup, flavor.to_string()));
        }
    }

    pub fn fail_gets(&self, id: &str, status: u16) {
        if let Some(entry) = self.state.lock().unwrap().instances.get_mut(id) {
            entry.fail_status = Some(status);
        }
    }

    pub fn get_calls(&self) -> usize {
        self.state.lock().unwrap().get_calls
    }

    pub fn list_calls(&self) -> usize {
        self.state.lock().unwrap().list_calls
    }

    pub fn last_params(&self) -> Option<ListParams> {
        self.state.lock().unwrap().last_params.clone()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.state.lock().unwrap().deleted.clone()
    }

    pub fn resized(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().resized.clone()
    }

    fn record_list(&self, params: &ListParams) {
        let mut state = self.state.lock().unwrap();
        state.list_calls += 1;
        state.last_params = Some(params.clone());
    }
}

fn not_found(id: &str) -> ApiError {
    ApiError::NotFound {
        kind: "instance",
        id: id.to_string(),
    }
}

#[async_trait]
impl CloudApi for MockApi {
    async fn list_instances(&self, params: &ListParams) -> Result<Vec<Instance>, ApiError> {
        self.record_list(params);
        let state = self.state.lock().unwrap();
        let mut instances: Vec<Instance> =
            state.instances.values().map(|e| e.instance.clone()).collect();
        instances.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(instances)
    }

    async fn get_instance(&self, id: &str) -> Result<Instance, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.get_calls += 1;

        let entry = state.instances.get_mut(id).ok_or_else(|| not_found(id))?;
        if let Some(status) = entry.fail_status {
            return Err(ApiError::Status {
                status,
                message: "service unavailable".to_string(),
            });
        }

        entry.lookups += 1;
        let current = if entry.states.len() > 1 {
            entry.states.pop_front().flatten()
        } else {
            entry.states.front().copied().flatten()
        };
        let Some(current) = current else {
            return Err(not_found(id));
        };

        let mut instance = entry.instance.clone();
        instance.state = current;
        if let Some((after, flavor)) = &entry.flavor_after
            && entry.lookups >= *after
        {
            instance.flavor = flavor.clone();
        }
        Ok(instance)
    }

    async fn create_instance(
        &self,
        request: &CreateInstanceRequest,
    ) -> Result<Instance, ApiError> {
        let id = format!("i-{}", request.name);
        let mut created = instance(&id, InstanceState::Provisioning);
        created.name = request.name.clone();
        created.flavor = request.flavor.clone();
        created.image = Some(request.image.clone());

        let states = [Some(InstanceState::Provisioning), Some(InstanceState::Running)];
        self.state.lock().unwrap().instances.insert(
            id,
            Entry {
                instance: created.clone(),
                states: states.into_iter().collect(),
                lookups: 0,
                flavor_after: None,
                fail_status: None,
            },
        );
        Ok(created)
    }

    async fn delete_instance(&self, id: &str) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        if !state.instances.contains_key(id) {
            return Err(not_found(id));
        }
        state.deleted.push(id.to_string());
        Ok(())
    }

    async fn resize_instance(&self, id: &str, flavor: &str) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        if !state.instances.contains_key(id) {
            return Err(not_found(id));
        }
        state.resized.push((id.to_string(), flavor.to_string()));
        Ok(())
    }

    async fn list_zones(&self, params: &ListParams) -> Result<Vec<Zone>, ApiError> {
        self.record_list(params);
        Ok(self.state.lock().unwrap().zones.clone())
    }

    async fn get_zone(&self, name: &str) -> Result<Zone, ApiError> {
        self.state
            .lock()
            .unwrap()
            .zones
            .iter()
            .find(|z| z.name == name)
            .cloned()
            .ok_or_else(|| ApiError::NotFound {
                kind: "zone",
                id: name.to_string(),
            })
    }

    async fn list_ddos_profiles(&self, params: &ListParams) -> Result<Vec<DdosProfile>, ApiError> {
        self.record_list(params);
        Ok(self.state.lock().unwrap().ddos_profiles.clone())
    }
}
