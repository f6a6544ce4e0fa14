// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Instance delete command

use anyhow::Result;
use clap::Args;

use crate::api::CloudApi;
use crate::commands::{Context, ItemErrors};

#[derive(Args, Clone)]
pub struct DeleteArgs {
    /// Instance ID(s)
    #[arg(required = true)]
    pub instances: Vec<String>,

    /// Wait for each instance to be gone
    #[arg(long, short)]
    pub wait: bool,
}

pub async fn run(args: DeleteArgs, api: &dyn CloudApi, ctx: &Context) -> Result<()> {
    let mut errors = ItemErrors::default();

    for id in &args.instances {
        let result = delete_one(id, args.wait, api, ctx).await;
        errors.record(id, result);
    }

    errors.finish("instance")
}

async fn delete_one(id: &str, wait: bool, api: &dyn CloudApi, ctx: &Context) -> Result<()> {
    api.delete_instance(id).await?;
    println!("Deleting instance {}", id);

    if wait {
        super::wait::wait_until_deleted(api, &ctx.waiter, id).await?;
        println!("Instance {} deleted", id);
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::InstanceState::*;
    use crate::commands::mock::{MockApi, context};

    #[tokio::test(start_paused = true)]
    async fn test_delete_and_wait() {
        let api = MockApi::default().with_states("i-1", &[Some(Deleting), None]);
        let args = DeleteArgs {
            instances: vec!["i-1".to_string()],
            wait: true,
        };

        run(args, &api, &context()).await.unwrap();
        assert_eq!(api.deleted(), vec!["i-1"]);
        assert_eq!(api.get_calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_one_failure_does_not_stop_the_others() {
        let api = MockApi::default()
            .with_states("i-1", &[Some(Running)])
            .with_states("i-3", &[Some(Running)]);
        let args = DeleteArgs {
            instances: vec!["i-1".to_string(), "i-2".to_string(), "i-3".to_string()],
            wait: false,
        };

        let err = run(args, &api, &context()).await.unwrap_err();
        assert_eq!(err.to_string(), "1 of 3 instance(s) failed");
        assert_eq!(api.deleted(), vec!["i-1", "i-3"]);
    }
}
