// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Instance create command

use anyhow::Result;
use clap::Args;

use super::InstanceDetail;
use crate::api::{CloudApi, CreateInstanceRequest};
use crate::commands::Context;

#[derive(Args, Clone)]
pub struct CreateArgs {
    /// Instance name
    #[arg(long, short)]
    pub name: String,

    /// Flavor (size) of the instance
    #[arg(long)]
    pub flavor: String,

    /// Image to boot from
    #[arg(long, short)]
    pub image: String,

    /// Region, when different from the profile's
    #[arg(long)]
    pub region: Option<String>,

    /// Wait for the instance to be running
    #[arg(long, short)]
    pub wait: bool,
}

pub async fn run(args: CreateArgs, api: &dyn CloudApi, ctx: &Context) -> Result<()> {
    let request = CreateInstanceRequest {
        name: args.name,
        flavor: args.flavor,
        image: args.image,
        region: args.region,
    };

    let mut instance = api.create_instance(&request).await?;
    eprintln!("Creating instance {} ({})", instance.name, instance.id);

    if args.wait {
        eprintln!("Waiting for instance to be running...");
        super::wait::wait_until_running(api, &ctx.waiter, &instance.id, None).await?;
        instance = api.get_instance(&instance.id).await?;
        eprintln!("Instance is running");
    }

    ctx.output(&InstanceDetail(instance)).handle()?;
    Ok(())
}
