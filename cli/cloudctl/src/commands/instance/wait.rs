// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Instance wait command and the probes used by `--wait`

use anyhow::Result;
use clap::Args;

use super::InstanceDetail;
use crate::api::{CloudApi, InstanceState};
use crate::commands::Context;
use crate::wait::{WaitError, Waiter};

#[derive(Args, Clone)]
pub struct WaitArgs {
    /// Instance ID
    pub instance: String,

    /// Target state(s) to wait for
    #[arg(long, short, default_value = "running")]
    pub state: Vec<String>,
}

pub async fn run(args: WaitArgs, api: &dyn CloudApi, ctx: &Context) -> Result<()> {
    wait_for_states(api, &ctx.waiter, &args.instance, &args.state).await?;

    let instance = api.get_instance(&args.instance).await?;
    ctx.output(&InstanceDetail(instance)).handle()?;
    Ok(())
}

async fn probe_states(api: &dyn CloudApi, id: &str, targets: &[String]) -> Result<bool> {
    let instance = api.get_instance(id).await?;
    let current = instance.state.to_string();

    if targets.iter().any(|s| s.eq_ignore_ascii_case(&current)) {
        return Ok(true);
    }
    if instance.state == InstanceState::Failed {
        anyhow::bail!(
            "instance {} entered failed state while waiting for {}",
            id,
            targets.join(", ")
        );
    }
    Ok(false)
}

async fn probe_running(api: &dyn CloudApi, id: &str, flavor: Option<&str>) -> Result<bool> {
    let instance = api.get_instance(id).await?;
    match instance.state {
        InstanceState::Failed => anyhow::bail!("instance {} entered failed state", id),
        InstanceState::Running => Ok(flavor.is_none_or(|f| instance.flavor == f)),
        _ => Ok(false),
    }
}

async fn probe_deleted(api: &dyn CloudApi, id: &str) -> Result<bool> {
    match api.get_instance(id).await {
        Err(e) if e.is_not_found() => Ok(true),
        Err(e) => Err(e.into()),
        Ok(instance) if instance.state == InstanceState::Failed => {
            anyhow::bail!("instance {} entered failed state while deleting", id)
        }
        Ok(_) => Ok(false),
    }
}

/// Wait until the instance reaches one of `targets`
pub async fn wait_for_states(
    api: &dyn CloudApi,
    waiter: &Waiter,
    id: &str,
    targets: &[String],
) -> Result<(), WaitError> {
    waiter
        .wait_for_command(|| probe_states(api, id, targets))
        .await
}

/// Wait until the instance is running, and on `flavor` when given
pub async fn wait_until_running(
    api: &dyn CloudApi,
    waiter: &Waiter,
    id: &str,
    flavor: Option<&str>,
) -> Result<(), WaitError> {
    waiter
        .wait_for_command(|| probe_running(api, id, flavor))
        .await
}

/// Wait until the API no longer knows the instance
pub async fn wait_until_deleted(
    api: &dyn CloudApi,
    waiter: &Waiter,
    id: &str,
) -> Result<(), WaitError> {
    waiter.wait_for_command(|| probe_deleted(api, id)).await
}
