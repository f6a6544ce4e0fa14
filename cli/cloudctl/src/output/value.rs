// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Terse single-line output for shell pipelines

use super::FieldSet;

/// One line per row holding the default-visible values, space separated
pub fn render(rows: &[FieldSet]) -> String {
    let mut out = String::new();
    for row in rows {
        let values: Vec<&str> = row
            .iter()
            .filter(|f| f.default_visible)
            .map(|f| f.value.as_str())
            .collect();
        out.push_str(&values.join(" "));
        out.push('\n');
    }
    out
}
