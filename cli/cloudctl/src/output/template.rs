// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! User template output
//!
//! Templates substitute `{{.path}}` references against the raw JSON form
//! of a result:
//!
//! - `{{.name}}` looks up a top-level attribute
//! - `{{.network.ip}}` follows nested objects, numeric segments index arrays
//! - `{{.}}` is the whole value
//!
//! Strings are inserted without quotes and missing or null values expand
//! to nothing. A list result expands the template once per element.

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use super::OutputError;

const TAG_PATTERN: &str = r"\{\{(.*?)\}\}";
const PATH_PATTERN: &str = r"^\.([A-Za-z0-9_-]+(\.[A-Za-z0-9_-]+)*)?$";

/// A parsed template
#[derive(Debug, Clone)]
pub struct Template {
    parts: Vec<Part>,
}

#[derive(Debug, Clone)]
enum Part {
    Text(String),
    /// Path segments below the root; empty means the root itself
    Path(Vec<String>),
}

impl Template {
    pub fn parse(source: &str) -> Result<Self, OutputError> {
        let tag = Regex::new(TAG_PATTERN).map_err(|e| OutputError::Template(e.to_string()))?;
        let path = Regex::new(PATH_PATTERN).map_err(|e| OutputError::Template(e.to_string()))?;

        let mut parts = Vec::new();
        let mut last = 0;
        for caps in tag.captures_iter(source) {
            let (Some(whole), Some(expr)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            push_text(&mut parts, &source[last..whole.start()])?;

            let expr = expr.as_str().trim();
            if !path.is_match(expr) {
                return Err(OutputError::Template(format!(
                    "unsupported expression '{{{{{expr}}}}}'"
                )));
            }
            let segments = expr[1..]
                .split('.')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            parts.push(Part::Path(segments));
            last = whole.end();
        }
        push_text(&mut parts, &source[last..])?;

        Ok(Self { parts })
    }

    /// Expand the template against a single value
    pub fn expand(&self, value: &Value) -> String {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                Part::Text(text) => out.push_str(text),
                Part::Path(segments) => {
                    if let Some(found) = lookup(value, segments) {
                        out.push_str(&display(found));
                    }
                }
            }
        }
        out
    }
}

fn push_text(parts: &mut Vec<Part>, text: &str) -> Result<(), OutputError> {
    if text.contains("{{") {
        return Err(OutputError::Template("unclosed '{{' in template".to_string()));
    }
    if !text.is_empty() {
        parts.push(Part::Text(text.to_string()));
    }
    Ok(())
}

fn lookup<'a>(value: &'a Value, segments: &[String]) -> Option<&'a Value> {
    segments.iter().try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

fn display(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render raw data through a template, one line per expansion
pub fn render<T: Serialize + ?Sized>(source: &str, data: &T) -> Result<String, OutputError> {
    let template = Template::parse(source)?;
    let value = serde_json::to_value(data)?;

    let mut out = String::new();
    match &value {
        Value::Array(items) => {
            for item in items {
                out.push_str(&template.expand(item));
                out.push('\n');
            }
        }
        single => {
            out.push_str(&template.expand(single));
            out.push('\n');
        }
    }
    Ok(out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_substitutes_named_attributes() {
        let data = json!({"id": "a1", "name": "web", "memory": 2048});
        let out = render("{{.name}} ({{ .id }}) {{.memory}}MB", &data).unwrap();
        assert_eq!(out, "web (a1) 2048MB\n");
    }

    #[test]
    fn test_nested_paths_and_indexes() {
        let data = json!({"addresses": [{"ip": "10.0.0.5"}], "flavor": {"name": "g1-small"}});
        let out = render("{{.flavor.name}} {{.addresses.0.ip}}", &data).unwrap();
        assert_eq!(out, "g1-small 10.0.0.5\n");
    }

    #[test]
    fn test_list_expands_per_element() {
        let data = json!([{"name": "a"}, {"name": "b"}]);
        assert_eq!(render("{{.name}}", &data).unwrap(), "a\nb\n");
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        let data: Vec<Value> = Vec::new();
        assert_eq!(render("{{.name}}", &data).unwrap(), "");
    }

    #[test]
    fn test_missing_and_null_are_blank() {
        let data = json!({"name": "web", "ip": null});
        assert_eq!(render("[{{.ip}}][{{.nope}}]", &data).unwrap(), "[][]\n");
    }

    #[test]
    fn test_root_reference() {
        let data = json!("plain");
        assert_eq!(render("value={{.}}", &data).unwrap(), "value=plain\n");
    }

    #[test]
    fn test_unclosed_tag_is_an_error() {
        let err = render("{{.name", &json!({})).unwrap_err();
        assert!(matches!(err, OutputError::Template(_)));
    }

    #[test]
    fn test_unsupported_expression_is_an_error() {
        let err = render("{{range .}}", &json!([])).unwrap_err();
        assert!(err.to_string().contains("unsupported expression"));
    }
}
