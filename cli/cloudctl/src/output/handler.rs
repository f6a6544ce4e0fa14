// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Format selection and dispatch

use std::io::{self, Write};
use std::str::FromStr;

use tracing::debug;

use super::{OutputData, OutputError, OutputFormat, column_names, csv, json, table, template, value};

type UnsupportedFormatHandler<'a> =
    Box<dyn FnOnce(&mut dyn Write, &mut dyn Write) -> Result<(), OutputError> + 'a>;

/// Renders one command result in the format the user asked for
///
/// ```ignore
/// OutputHandler::new(&instances, &cli.format)
///     .template(cli.template.as_deref())
///     .handle()?;
/// ```
pub struct OutputHandler<'a, D: OutputData> {
    data: &'a D,
    format: String,
    template: Option<String>,
    supported_formats: Vec<OutputFormat>,
    unsupported_format_handler: Option<UnsupportedFormatHandler<'a>>,
}

impl<'a, D: OutputData> OutputHandler<'a, D> {
    pub fn new(data: &'a D, format: &str) -> Self {
        Self {
            data,
            format: format.trim().to_string(),
            template: None,
            supported_formats: Vec::new(),
            unsupported_format_handler: None,
        }
    }

    /// Template text for the `template` format
    pub fn template(mut self, template: Option<&str>) -> Self {
        self.template = template.map(str::to_string);
        self
    }

    /// Restrict the formats this call site accepts
    pub fn supported_formats(mut self, formats: &[OutputFormat]) -> Self {
        self.supported_formats = formats.to_vec();
        self
    }

    /// Called instead of failing when the requested format is not supported
    ///
    /// The handler receives the same output and warning writers the
    /// renderers would have used.
    pub fn on_unsupported_format<F>(mut self, handler: F) -> Self
    where
        F: FnOnce(&mut dyn Write, &mut dyn Write) -> Result<(), OutputError> + 'a,
    {
        self.unsupported_format_handler = Some(Box::new(handler));
        self
    }

    /// Render to stdout, warnings to stderr
    pub fn handle(self) -> Result<(), OutputError> {
        let stdout = io::stdout();
        let stderr = io::stderr();
        self.handle_to(&mut stdout.lock(), &mut stderr.lock())
    }

    pub fn handle_to<W: Write, E: Write>(self, out: &mut W, err: &mut E) -> Result<(), OutputError> {
        // An empty name quietly means the default
        let parsed = if self.format.is_empty() {
            Some(OutputFormat::Table)
        } else {
            OutputFormat::from_str(&self.format).ok()
        };

        if !self.supported_formats.is_empty()
            && !parsed.is_some_and(|f| self.supported_formats.contains(&f))
        {
            debug!(requested = %self.format, "format not supported at this call site");
            return match self.unsupported_format_handler {
                Some(handler) => handler(out, err),
                None => Err(OutputError::UnsupportedFormat {
                    requested: self.format,
                    supported: self.supported_formats,
                }),
            };
        }

        let format = match parsed {
            Some(format) => format,
            None => {
                writeln!(
                    err,
                    "Invalid output format [{}], defaulting to 'table'",
                    self.format
                )?;
                OutputFormat::Table
            }
        };

        let rendered = self.render(format)?;
        out.write_all(rendered.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    fn render(&self, format: OutputFormat) -> Result<String, OutputError> {
        match format {
            OutputFormat::Json => json::render(self.data.data()),
            OutputFormat::Template => {
                let source = self
                    .template
                    .as_deref()
                    .ok_or(OutputError::MissingTemplate)?;
                template::render(source, self.data.data())
            }
            OutputFormat::Table | OutputFormat::Csv | OutputFormat::Value => {
                let rows = self.data.field_data()?;
                debug!(%format, rows = rows.len(), "rendering rows");
                let columns = column_names(&rows, self.data.field_names());
                match format {
                    OutputFormat::Csv => csv::render(&rows, &columns),
                    OutputFormat::Value => Ok(value::render(&rows)),
                    _ => Ok(table::render(&rows, &columns)),
                }
            }
        }
    }
}
