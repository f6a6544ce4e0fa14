// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! List filtering
//!
//! `--filter` takes expressions of the form `property[:operator]=value`.
//! Without an operator the clause is an equality test. A value may list
//! several alternatives separated by commas:
//!
//! ```text
//! --filter name=web-1
//! --filter name:contains=web
//! --filter memory:gte=2048
//! --filter state:in=running,stopped
//! ```
//!
//! All clauses must hold for a resource to match.

use std::str::FromStr;

use strum::{Display, EnumString};
use thiserror::Error;
use tracing::debug;

/// Errors from malformed filter expressions
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FilterError {
    #[error("Missing value for filtering")]
    MissingValue,

    #[error("Missing property for filtering: {0}")]
    MissingProperty(String),

    #[error("Unknown filter operator '{operator}' in '{expression}'")]
    UnknownOperator {
        operator: String,
        expression: String,
    },
}

/// Comparison applied by a filter clause
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FilterOperator {
    #[default]
    Eq,
    Ne,
    Contains,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
}

/// One `property operator value` predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterClause {
    pub property: String,
    pub operator: FilterOperator,
    pub values: Vec<String>,
}

impl FilterClause {
    pub fn equals(property: &str, value: &str) -> Self {
        Self {
            property: property.to_string(),
            operator: FilterOperator::Eq,
            values: vec![value.to_string()],
        }
    }

    /// Query-string form understood by list endpoints: `name=web` for
    /// equality, `memory[gte]=2048` otherwise
    pub fn query_pair(&self) -> (String, String) {
        let key = match self.operator {
            FilterOperator::Eq => self.property.clone(),
            op => format!("{}[{}]", self.property, op),
        };
        (key, self.values.join(","))
    }
}

impl FromStr for FilterClause {
    type Err = FilterError;

    fn from_str(expression: &str) -> Result<Self, Self::Err> {
        let expression = expression.trim();
        let (lhs, rhs) = match expression.split_once('=') {
            Some((lhs, rhs)) => (lhs.trim(), rhs.trim()),
            None if expression.is_empty() => {
                return Err(FilterError::MissingProperty(expression.to_string()));
            }
            None => return Err(FilterError::MissingValue),
        };

        let (property, operator) = match lhs.split_once(':') {
            Some((property, op)) => {
                let operator =
                    FilterOperator::from_str(op.trim()).map_err(|_| FilterError::UnknownOperator {
                        operator: op.trim().to_string(),
                        expression: expression.to_string(),
                    })?;
                (property.trim(), operator)
            }
            None => (lhs, FilterOperator::Eq),
        };

        if property.is_empty() {
            return Err(FilterError::MissingProperty(expression.to_string()));
        }

        let values: Vec<String> = rhs
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect();
        if values.is_empty() {
            return Err(FilterError::MissingValue);
        }

        Ok(Self {
            property: property.to_string(),
            operator,
            values,
        })
    }
}

/// Parse repeated `--filter` expressions, keeping input order
pub fn parse<S: AsRef<str>>(expressions: &[S]) -> Result<Vec<FilterClause>, FilterError> {
    expressions
        .iter()
        .map(|e| {
            let clause = e.as_ref().parse::<FilterClause>()?;
            debug!(
                property = %clause.property,
                operator = %clause.operator,
                values = ?clause.values,
                "parsed filter"
            );
            Ok(clause)
        })
        .collect()
}

/// Query parameters for a list call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub filters: Vec<FilterClause>,
    pub limit: Option<u32>,
}

impl ListParams {
    /// Build parameters from raw `--filter` expressions
    pub fn from_filters<S: AsRef<str>>(expressions: &[S]) -> Result<Self, FilterError> {
        Ok(Self {
            filters: parse(expressions)?,
            limit: None,
        })
    }

    /// Add an equality clause for a named flag, only when it was given
    pub fn equals(mut self, property: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.filters.push(FilterClause::equals(property, value));
        }
        self
    }

    pub fn limit(mut self, limit: Option<u32>) -> Self {
        self.limit = limit;
        self
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> =
            self.filters.iter().map(FilterClause::query_pair).collect();
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }
}
