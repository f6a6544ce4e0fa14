// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! cloudctl - command-line client for the cloud management API

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod config;
mod filter;
mod output;
mod wait;

use api::HttpClient;
use commands::ddos::ProfileCommand;
use commands::dns::ZoneCommand;
use commands::{Context, DdosCommand, DnsCommand, InstanceCommand};
use wait::Waiter;

#[derive(Parser)]
#[command(
    name = "cloudctl",
    version,
    about = "Cloud management CLI",
    long_about = "Command-line client for compute, DNS and DDoS protection resources"
)]
struct Cli {
    /// Profile to use
    #[arg(short, long, global = true, env = "CLOUDCTL_PROFILE")]
    profile: Option<String>,

    /// Output format: table, json, csv, value or template
    #[arg(short = 'o', long = "format", global = true)]
    format: Option<String>,

    /// Output as JSON (same as --format json)
    #[arg(short, long, global = true, conflicts_with = "format")]
    json: bool,

    /// Template for --format template, e.g. '{{.id}} {{.name}}'
    #[arg(long, global = true)]
    template: Option<String>,

    /// Seconds to wait for long-running operations
    #[arg(
        long,
        global = true,
        env = "CLOUDCTL_WAIT_TIMEOUT",
        allow_negative_numbers = true
    )]
    wait_timeout: Option<i64>,

    /// Seconds between status checks while waiting
    #[arg(
        long,
        global = true,
        env = "CLOUDCTL_WAIT_INTERVAL",
        allow_negative_numbers = true
    )]
    wait_interval: Option<i64>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage compute instances
    #[command(alias = "inst")]
    Instance {
        #[command(subcommand)]
        command: InstanceCommand,
    },

    /// List instances (shortcut for 'instance list')
    #[command(alias = "insts")]
    Instances(commands::instance::ListArgs),

    /// Manage DNS
    Dns {
        #[command(subcommand)]
        command: DnsCommand,
    },

    /// Manage DDoS protection
    Ddos {
        #[command(subcommand)]
        command: DdosCommand,
    },
}

impl Commands {
    /// Filter expressions given to a list command
    fn filters(&self) -> &[String] {
        match self {
            Commands::Instance {
                command: InstanceCommand::List(args),
            }
            | Commands::Instances(args) => &args.filters,
            Commands::Dns {
                command:
                    DnsCommand::Zone {
                        command: ZoneCommand::List(args),
                    },
            } => &args.filters,
            Commands::Ddos {
                command:
                    DdosCommand::Profile {
                        command: ProfileCommand::List(args),
                    },
            } => &args.filters,
            _ => &[],
        }
    }
}

impl Cli {
    fn context(&self) -> Result<Context> {
        let format = if self.json {
            "json".to_string()
        } else {
            self.format.clone().unwrap_or_default()
        };
        let wait_config = config::resolve_wait_config(self.wait_timeout, self.wait_interval)?;

        Ok(Context {
            format,
            template: self.template.clone(),
            waiter: Waiter::new(wait_config),
        })
    }

    fn build_client(&self) -> Result<HttpClient> {
        let profile = config::resolve_profile(self.profile.as_deref())?;
        tracing::debug!(profile = %profile.name, url = %profile.url, "using profile");
        Ok(HttpClient::new(&profile)?)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    if cli.verbose {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cloudctl=debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let ctx = cli.context()?;
    // Bad filter input is reported before any profile lookup
    filter::parse(cli.command.filters())?;
    let client = cli.build_client()?;

    match &cli.command {
        Commands::Instance { command } => command.clone().run(&client, &ctx).await,
        Commands::Instances(args) => {
            commands::instance::list::run(args.clone(), &client, &ctx).await
        }
        Commands::Dns { command } => command.clone().run(&client, &ctx).await,
        Commands::Ddos { command } => command.clone().run(&client, &ctx).await,
    }
}
