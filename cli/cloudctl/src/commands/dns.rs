// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! DNS zone commands

use anyhow::Result;
use clap::{Args, Subcommand};

use super::{Context, ItemErrors};
use crate::api::{CloudApi, Zone};
use crate::filter::ListParams;
use crate::output::{FieldSet, OutputData, OutputFormat};

/// Formats accepted by zone commands
const ZONE_FORMATS: &[OutputFormat] = &[
    OutputFormat::Table,
    OutputFormat::Json,
    OutputFormat::Csv,
    OutputFormat::Value,
];

#[derive(Subcommand, Clone)]
pub enum DnsCommand {
    /// Manage DNS zones
    Zone {
        #[command(subcommand)]
        command: ZoneCommand,
    },
}

#[derive(Subcommand, Clone)]
pub enum ZoneCommand {
    /// List zones
    #[command(alias = "ls")]
    List(ZoneListArgs),

    /// Show zone details
    #[command(alias = "get")]
    Show(ZoneShowArgs),
}

#[derive(Args, Clone)]
pub struct ZoneListArgs {
    /// Filter expression, `property[:operator]=value` (repeatable)
    #[arg(long = "filter", short = 'f')]
    pub filters: Vec<String>,

    /// Filter by zone name
    #[arg(long)]
    pub name: Option<String>,

    /// Maximum results
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Args, Clone)]
pub struct ZoneShowArgs {
    /// Zone name(s)
    #[arg(required = true)]
    pub zones: Vec<String>,
}

impl DnsCommand {
    pub async fn run(self, api: &dyn CloudApi, ctx: &Context) -> Result<()> {
        match self {
            Self::Zone { command } => match command {
                ZoneCommand::List(args) => list(args, api, ctx).await,
                ZoneCommand::Show(args) => show(args, api, ctx).await,
            },
        }
    }
}

/// Zone rows
pub struct ZoneList(pub Vec<Zone>);

impl OutputData for ZoneList {
    type Raw = Vec<Zone>;

    fn data(&self) -> &Self::Raw {
        &self.0
    }

    fn field_data(&self) -> Result<Vec<FieldSet>> {
        Ok(self
            .0
            .iter()
            .map(|z| {
                FieldSet::new()
                    .visible("name", &z.name)
                    .hidden("status", &z.status)
                    .hidden("records", z.records)
                    .hidden("serial", z.serial.map(|s| s.to_string()).unwrap_or_default())
                    .hidden("dnssec", if z.dnssec { "enabled" } else { "disabled" })
            })
            .collect())
    }

    fn field_names(&self) -> Vec<String> {
        ["name", "status", "records", "serial", "dnssec"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

async fn list(args: ZoneListArgs, api: &dyn CloudApi, ctx: &Context) -> Result<()> {
    let params = ListParams::from_filters(args.filters.as_slice())?
        .equals("name", args.name.as_deref())
        .limit(args.limit);
    let zones = api.list_zones(&params).await?;

    ctx.output(&ZoneList(zones))
        .supported_formats(ZONE_FORMATS)
        .handle()?;
    Ok(())
}

async fn show(args: ZoneShowArgs, api: &dyn CloudApi, ctx: &Context) -> Result<()> {
    let mut errors = ItemErrors::default();

    for name in &args.zones {
        let result = api.get_zone(name).await.map_err(anyhow::Error::from);
        if let Some(zone) = errors.record(name, result) {
            ctx.output(&ZoneList(vec![zone]))
                .supported_formats(ZONE_FORMATS)
                .handle()?;
        }
    }

    errors.finish("zone")
}
