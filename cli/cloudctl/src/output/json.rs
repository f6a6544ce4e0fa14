// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! JSON output formatting

use serde::Serialize;

use super::OutputError;

/// Render a value as pretty JSON
pub fn render<T: Serialize + ?Sized>(value: &T) -> Result<String, OutputError> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}
