// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Instance list command

use anyhow::Result;
use clap::Args;

use super::InstanceList;
use crate::api::CloudApi;
use crate::commands::Context;
use crate::filter::ListParams;

#[derive(Args, Clone)]
pub struct ListArgs {
    /// Filter expression, `property[:operator]=value` (repeatable)
    #[arg(long = "filter", short = 'f')]
    pub filters: Vec<String>,

    /// Filter by name
    #[arg(long)]
    pub name: Option<String>,

    /// Filter by state
    #[arg(long)]
    pub state: Option<String>,

    /// Filter by flavor
    #[arg(long)]
    pub flavor: Option<String>,

    /// Maximum results
    #[arg(long)]
    pub limit: Option<u32>,
}

impl ListArgs {
    pub fn params(&self) -> Result<ListParams> {
        Ok(ListParams::from_filters(self.filters.as_slice())?
            .equals("name", self.name.as_deref())
            .equals("state", self.state.as_deref())
            .equals("flavor", self.flavor.as_deref())
            .limit(self.limit))
    }
}

pub async fn run(args: ListArgs, api: &dyn CloudApi, ctx: &Context) -> Result<()> {
    let params = args.params()?;
    let instances = api.list_instances(&params).await?;

    ctx.output(&InstanceList(instances)).handle()?;
    Ok(())
}
