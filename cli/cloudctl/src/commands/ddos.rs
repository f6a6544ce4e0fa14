// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! DDoS protection commands
//!
//! Profiles carry template-specific settings that do not flatten into
//! columns, so these commands only print JSON.

use std::io::{self, Write};

use anyhow::Result;
use clap::{Args, Subcommand};

use super::Context;
use crate::api::{CloudApi, DdosProfile};
use crate::filter::ListParams;
use crate::output::{FieldSet, OutputData, OutputFormat, json};

#[derive(Subcommand, Clone)]
pub enum DdosCommand {
    /// Manage protection profiles
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
}

#[derive(Subcommand, Clone)]
pub enum ProfileCommand {
    /// List protection profiles
    #[command(alias = "ls")]
    List(ProfileListArgs),
}

#[derive(Args, Clone)]
pub struct ProfileListArgs {
    /// Filter expression, `property[:operator]=value` (repeatable)
    #[arg(long = "filter", short = 'f')]
    pub filters: Vec<String>,

    /// Filter by protected IP address
    #[arg(long)]
    pub ip: Option<String>,
}

impl DdosCommand {
    pub async fn run(self, api: &dyn CloudApi, ctx: &Context) -> Result<()> {
        match self {
            Self::Profile {
                command: ProfileCommand::List(args),
            } => list(args, api, ctx).await,
        }
    }
}

/// Protection profile rows
pub struct DdosProfileList(pub Vec<DdosProfile>);

impl OutputData for DdosProfileList {
    type Raw = Vec<DdosProfile>;

    fn data(&self) -> &Self::Raw {
        &self.0
    }

    fn field_data(&self) -> Result<Vec<FieldSet>> {
        Ok(self
            .0
            .iter()
            .map(|p| {
                FieldSet::new()
                    .visible("id", p.id)
                    .visible("ip_address", &p.ip_address)
                    .hidden("template", &p.template)
                    .hidden("active", p.active)
            })
            .collect())
    }
}

async fn list(args: ProfileListArgs, api: &dyn CloudApi, ctx: &Context) -> Result<()> {
    let params =
        ListParams::from_filters(args.filters.as_slice())?.equals("ip_address", args.ip.as_deref());
    let profiles = DdosProfileList(api.list_ddos_profiles(&params).await?);

    let stdout = io::stdout();
    let stderr = io::stderr();
    print_profiles(&profiles, ctx, &mut stdout.lock(), &mut stderr.lock())
}

fn print_profiles<W: Write, E: Write>(
    profiles: &DdosProfileList,
    ctx: &Context,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    ctx.output(profiles)
        .supported_formats(&[OutputFormat::Json])
        .on_unsupported_format(|out, err| {
            writeln!(
                err,
                "Format '{}' is not available for DDoS profiles, printing JSON",
                ctx.format
            )?;
            out.write_all(json::render(profiles.data())?.as_bytes())?;
            Ok(())
        })
        .handle_to(out, err)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::commands::mock::{MockApi, context};

    fn profile() -> DdosProfile {
        DdosProfile {
            id: 7,
            ip_address: "192.0.2.10".to_string(),
            template: "game-servers".to_string(),
            active: true,
            fields: serde_json::json!({"port_range": "27015-27020"}),
        }
    }

    fn render(format: &str) -> (String, String) {
        let profiles = DdosProfileList(vec![profile()]);
        let ctx = Context {
            format: format.to_string(),
            ..context()
        };
        let mut out = Vec::new();
        let mut err = Vec::new();
        print_profiles(&profiles, &ctx, &mut out, &mut err).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_table_request_falls_back_to_json() {
        let (out, err) = render("table");

        let printed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(printed[0]["id"], 7);
        assert_eq!(printed[0]["ip_address"], "192.0.2.10");
        assert_eq!(
            err,
            "Format 'table' is not available for DDoS profiles, printing JSON\n"
        );
    }

    #[test]
    fn test_json_request_prints_without_notice() {
        let (out, err) = render("json");
        assert!(out.starts_with('['));
        assert_eq!(err, "");
    }

    #[tokio::test]
    async fn test_ip_flag_becomes_filter() {
        let api = MockApi::default().with_ddos_profiles(vec![profile()]);
        let ctx = context();
        let args = ProfileListArgs {
            filters: Vec::new(),
            ip: Some("192.0.2.10".to_string()),
        };

        list(args, &api, &ctx).await.unwrap();
        let params = api.last_params().unwrap();
        assert_eq!(params.filters[0].property, "ip_address");
    }
}
