// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Instance show command

use anyhow::Result;
use clap::Args;

use super::InstanceDetail;
use crate::api::CloudApi;
use crate::commands::{Context, ItemErrors};

#[derive(Args, Clone)]
pub struct ShowArgs {
    /// Instance ID(s)
    #[arg(required = true)]
    pub instances: Vec<String>,
}

/// Show each instance in turn; a lookup failure is reported and the rest
/// are still shown
pub async fn run(args: ShowArgs, api: &dyn CloudApi, ctx: &Context) -> Result<()> {
    let mut errors = ItemErrors::default();

    for id in &args.instances {
        let result = api.get_instance(id).await.map_err(anyhow::Error::from);
        if let Some(instance) = errors.record(id, result) {
            ctx.output(&InstanceDetail(instance)).handle()?;
        }
    }

    errors.finish("instance")
}
