// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Table output formatting

use comfy_table::{Table, presets::ASCII_FULL_CONDENSED};

use super::FieldSet;

/// Create a new bordered table with headers
pub fn create_table<S: AsRef<str>>(headers: &[S]) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL_CONDENSED);
    table.set_header(headers.iter().map(|h| header_label(h.as_ref())));
    table
}

/// Render rows as a table
///
/// Columns come from `columns`; every row is expected to carry the same
/// field names in the same order. An empty `rows` gives a header-only grid.
pub fn render(rows: &[FieldSet], columns: &[String]) -> String {
    let mut table = create_table(columns);
    for row in rows {
        table.add_row(row.iter().map(|f| f.value.as_str()));
    }
    format!("{table}\n")
}

/// Turn a field name into a column header: `primary_ip` and `primaryIp`
/// both become `PRIMARY IP`
pub fn header_label(name: &str) -> String {
    let mut label = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for c in name.chars() {
        if c == '_' || c == '-' || c == ' ' {
            if !label.is_empty() && !label.ends_with(' ') {
                label.push(' ');
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower {
            label.push(' ');
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        label.extend(c.to_uppercase());
    }
    label.trim_end().to_string()
}
