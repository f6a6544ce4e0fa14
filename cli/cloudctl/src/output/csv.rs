// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! CSV output formatting

use super::{FieldSet, OutputError};

/// Render rows as CSV: a header line of field names, then one record per row
pub fn render(rows: &[FieldSet], columns: &[String]) -> Result<String, OutputError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    if !columns.is_empty() {
        wtr.write_record(columns)?;
    }
    for row in rows {
        wtr.write_record(row.iter().map(|f| f.value.as_str()))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| OutputError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| OutputError::Data(e.into()))
}
