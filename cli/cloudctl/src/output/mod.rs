// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Output formatting
//!
//! Commands wrap their results in a type implementing [`OutputData`] and
//! hand it to an [`OutputHandler`], which picks a renderer by format name.
//! Renderers come in two flavours: the flat ones (table, csv, value) work
//! on [`FieldSet`] rows, the structured ones (json, template) work on the
//! raw serializable result.

pub mod csv;
pub mod handler;
pub mod json;
pub mod table;
pub mod template;
pub mod value;

pub use handler::OutputHandler;

use indexmap::IndexMap;
use serde::Serialize;
use strum::{Display, EnumString};
use thiserror::Error;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
    Value,
    Template,
}

/// Errors raised while rendering command output
#[derive(Error, Debug)]
pub enum OutputError {
    /// The call site does not accept the requested format
    #[error("unsupported format [{requested}], supported formats: {}", join_formats(.supported))]
    UnsupportedFormat {
        requested: String,
        supported: Vec<OutputFormat>,
    },

    /// `template` format requested without a template string
    #[error("a template is required for the 'template' output format")]
    MissingTemplate,

    /// Template could not be parsed or expanded
    #[error("template error: {0}")]
    Template(String),

    /// The result could not be flattened into rows
    #[error(transparent)]
    Data(#[from] anyhow::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV output failed: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn join_formats(formats: &[OutputFormat]) -> String {
    formats
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A single named display value within a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: String,
    /// Shown by the terse `value` format
    pub default_visible: bool,
}

/// The fields of one result row, in display order
///
/// Field names are unique; setting an existing name replaces its value
/// in place and keeps the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    fields: IndexMap<String, Field>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field shown by every format
    pub fn visible(mut self, name: &str, value: impl ToString) -> Self {
        self.insert(name, value.to_string(), true);
        self
    }

    /// Append a field left out of the `value` format
    pub fn hidden(mut self, name: &str, value: impl ToString) -> Self {
        self.insert(name, value.to_string(), false);
        self
    }

    pub fn insert(&mut self, name: &str, value: String, default_visible: bool) {
        let field = Field {
            name: name.to_string(),
            value,
            default_visible,
        };
        self.fields.insert(name.to_string(), field);
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.values().map(|f| f.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }
}

/// Capability implemented by every result type a command can print
pub trait OutputData {
    type Raw: Serialize;

    /// The unmodified result, used by the json and template formats
    fn data(&self) -> &Self::Raw;

    /// One field set per displayed entity, in enumeration order
    fn field_data(&self) -> anyhow::Result<Vec<FieldSet>>;

    /// Column names for an empty result, so tables and CSV still get a
    /// header row
    fn field_names(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Column names for a result: the first row's, or the provider's own
pub(crate) fn column_names(rows: &[FieldSet], fallback: Vec<String>) -> Vec<String> {
    match rows.first() {
        Some(first) => first.names().map(str::to_string).collect(),
        None => fallback,
    }
}
