// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! CLI commands

pub mod ddos;
pub mod dns;
pub mod instance;

#[cfg(test)]
pub(crate) mod mock;

pub use ddos::DdosCommand;
pub use dns::DnsCommand;
pub use instance::InstanceCommand;

use crate::output::{OutputData, OutputHandler};
use crate::wait::Waiter;

/// Settings shared by every command invocation
#[derive(Debug, Clone)]
pub struct Context {
    pub format: String,
    pub template: Option<String>,
    pub waiter: Waiter,
}

impl Context {
    /// Output handler for `data` using the global format flags
    pub fn output<'a, D: OutputData>(&'a self, data: &'a D) -> OutputHandler<'a, D> {
        OutputHandler::new(data, &self.format).template(self.template.as_deref())
    }
}

/// Outcome of a command that processes several arguments independently
///
/// A failed item is reported on stderr and the rest still run; the
/// command fails at the end if anything did.
#[derive(Debug, Default)]
pub(crate) struct ItemErrors {
    failed: usize,
    total: usize,
}

impl ItemErrors {
    pub(crate) fn record<T>(&mut self, item: &str, result: anyhow::Result<T>) -> Option<T> {
        self.total += 1;
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.failed += 1;
                eprintln!("Error: {item}: {e:#}");
                None
            }
        }
    }

    pub(crate) fn finish(self, noun: &str) -> anyhow::Result<()> {
        if self.failed > 0 {
            anyhow::bail!("{} of {} {}(s) failed", self.failed, self.total, noun);
        }
        Ok(())
    }
}
