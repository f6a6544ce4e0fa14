// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Instance resize command

use anyhow::Result;
use clap::Args;

use crate::api::CloudApi;
use crate::commands::Context;

#[derive(Args, Clone)]
pub struct ResizeArgs {
    /// Instance ID
    pub instance: String,

    /// New flavor
    pub flavor: String,

    /// Wait for resize to complete
    #[arg(long, short)]
    pub wait: bool,
}

pub async fn run(args: ResizeArgs, api: &dyn CloudApi, ctx: &Context) -> Result<()> {
    api.resize_instance(&args.instance, &args.flavor).await?;
    println!("Resizing instance {} to flavor {}", args.instance, args.flavor);

    if args.wait {
        println!("Waiting for resize to complete...");
        super::wait::wait_until_running(api, &ctx.waiter, &args.instance, Some(&args.flavor))
            .await?;
        println!("Instance {} resize complete", args.instance);
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
    async fn test_resize_and_wait() {
        let api = MockApi::default().with_states("i-1", &[Some(Resizing), Some(Running)]);
        api.set_flavor_after("i-1", 2, "g1-large");
        let args = ResizeArgs {
            instance: "i-1".to_string(),
            flavor: "g1-large".to_string(),
            wait: true,
        };

        run(args, &api, &context()).await.unwrap();
        assert_eq!(
            api.resized(),
            vec![("i-1".to_string(), "g1-large".to_string())]
        );
        assert_eq!(api.get_calls(), 2);
    }

    #[tokio::test]
    async fn test_unknown_instance() {
        let api = MockApi::default();
        let args = ResizeArgs {
            instance: "i-9".to_string(),
            flavor: "g1-large".to_string(),
            wait: false,
        };

        let err = run(args, &api, &context()).await.unwrap_err();
        assert_eq!(err.to_string(), "instance not found: i-9");
    }
}
