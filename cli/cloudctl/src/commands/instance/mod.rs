// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Instance management commands

use anyhow::Result;
use clap::Subcommand;

use super::Context;
use crate::api::{CloudApi, Instance};
use crate::output::{FieldSet, OutputData};

pub mod create;
pub mod delete;
pub mod list;
pub mod resize;
pub mod show;
pub mod wait;

pub use list::ListArgs;

#[derive(Subcommand, Clone)]
pub enum InstanceCommand {
    /// List instances
    #[command(alias = "ls")]
    List(list::ListArgs),

    /// Show instance details
    #[command(alias = "get")]
    Show(show::ShowArgs),

    /// Create a new instance
    Create(create::CreateArgs),

    /// Delete instance(s)
    #[command(alias = "rm")]
    Delete(delete::DeleteArgs),

    /// Resize an instance to a different flavor
    Resize(resize::ResizeArgs),

    /// Wait for instance state change
    Wait(wait::WaitArgs),
}

impl InstanceCommand {
    pub async fn run(self, api: &dyn CloudApi, ctx: &Context) -> Result<()> {
        match self {
            Self::List(args) => list::run(args, api, ctx).await,
            Self::Show(args) => show::run(args, api, ctx).await,
            Self::Create(args) => create::run(args, api, ctx).await,
            Self::Delete(args) => delete::run(args, api, ctx).await,
            Self::Resize(args) => resize::run(args, api, ctx).await,
            Self::Wait(args) => wait::run(args, api, ctx).await,
        }
    }
}

fn primary_address(instance: &Instance) -> &str {
    instance.addresses.first().map(String::as_str).unwrap_or("-")
}

/// Instance list rows
pub struct InstanceList(pub Vec<Instance>);

impl OutputData for InstanceList {
    type Raw = Vec<Instance>;

    fn data(&self) -> &Self::Raw {
        &self.0
    }

    fn field_data(&self) -> Result<Vec<FieldSet>> {
        Ok(self
            .0
            .iter()
            .map(|i| {
                FieldSet::new()
                    .visible("id", &i.id)
                    .visible("name", &i.name)
                    .hidden("flavor", &i.flavor)
                    .hidden("state", i.state)
                    .hidden("region", &i.region)
                    .hidden("primary_ip", primary_address(i))
            })
            .collect())
    }

    fn field_names(&self) -> Vec<String> {
        ["id", "name", "flavor", "state", "region", "primary_ip"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

/// A single instance with every attribute
pub struct InstanceDetail(pub Instance);

impl OutputData for InstanceDetail {
    type Raw = Instance;

    fn data(&self) -> &Self::Raw {
        &self.0
    }

    fn field_data(&self) -> Result<Vec<FieldSet>> {
        let i = &self.0;
        let image = i
            .image
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("instance {} has no image", i.id))?;
        let created = i
            .created_at
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| "-".to_string());

        Ok(vec![
            FieldSet::new()
                .visible("id", &i.id)
                .visible("name", &i.name)
                .visible("state", i.state)
                .hidden("flavor", &i.flavor)
                .hidden("image", image)
                .hidden("region", &i.region)
                .hidden("addresses", i.addresses.join(","))
                .hidden("created", created),
        ])
    }
}
