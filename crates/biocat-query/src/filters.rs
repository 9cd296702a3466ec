// SPDX-License-Identifier: Apache-2.0

use crate::limits::QueryLimits;
use crate::query_error::QueryError;
use biocat_model::{Category, SortOrder};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Session-owned filter state, as edited through the search form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchFilters {
    pub name: String,
    pub category: Category,
    pub owner: String,
    pub saved_low: Option<NaiveDate>,
    pub saved_high: Option<NaiveDate>,
    pub start_row: u32,
    pub max_rows: u32,
    pub order_by: SortOrder,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: Category::All,
            owner: String::new(),
            saved_low: None,
            saved_high: None,
            start_row: 1,
            max_rows: 10,
            order_by: SortOrder::DateDesc,
        }
    }
}

/// Validated request for the catalog query service's wire contract.
///
/// Blank filter terms and the unfiltered category are omitted rather than
/// sent as empty-string filters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BiomodelQueryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bm_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_low: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_high: Option<NaiveDate>,
    pub start_row: u32,
    pub max_rows: u32,
    pub order_by: SortOrder,
}

/// Canonical term normalization: NFKC, then trimmed.
#[must_use]
pub fn normalize_term(input: &str) -> String {
    input.nfkc().collect::<String>().trim().to_string()
}

fn filter_term(raw: &str, field: &'static str, limits: &QueryLimits) -> Result<Option<String>, QueryError> {
    let term = normalize_term(raw);
    if term.is_empty() {
        return Ok(None);
    }
    if term.len() > limits.max_term_len {
        return Err(QueryError::validation(format!(
            "{field} filter exceeds max length {}",
            limits.max_term_len
        )));
    }
    Ok(Some(term))
}

/// Translates filter state into a wire request. Numeric ranges are silently
/// clamped; an inverted date range is a validation error and produces no
/// request.
pub fn build_query_request(
    filters: &SearchFilters,
    limits: &QueryLimits,
) -> Result<BiomodelQueryRequest, QueryError> {
    if let (Some(low), Some(high)) = (filters.saved_low, filters.saved_high) {
        if low > high {
            return Err(QueryError::validation(format!(
                "saved-date lower bound {low} is after upper bound {high}"
            )));
        }
    }

    let bm_name = filter_term(&filters.name, "name", limits)?;
    let owner = filter_term(&filters.owner, "owner", limits)?;
    let category = match filters.category {
        Category::All => None,
        other => Some(other),
    };

    Ok(BiomodelQueryRequest {
        bm_name,
        category,
        owner,
        saved_low: filters.saved_low,
        saved_high: filters.saved_high,
        start_row: limits.clamp_start_row(filters.start_row),
        max_rows: limits.clamp_max_rows(filters.max_rows),
        order_by: filters.order_by,
    })
}

/// Deterministic key/value pairs for URL encoding, in the wire contract's
/// field order. Omitted fields produce no pair.
#[must_use]
pub fn to_query_pairs(request: &BiomodelQueryRequest) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::with_capacity(8);
    if let Some(name) = &request.bm_name {
        pairs.push(("bmName", name.clone()));
    }
    if let Some(category) = request.category {
        pairs.push(("category", category.as_str().to_string()));
    }
    if let Some(owner) = &request.owner {
        pairs.push(("owner", owner.clone()));
    }
    if let Some(low) = request.saved_low {
        pairs.push(("savedLow", low.format("%Y-%m-%d").to_string()));
    }
    if let Some(high) = request.saved_high {
        pairs.push(("savedHigh", high.format("%Y-%m-%d").to_string()));
    }
    pairs.push(("startRow", request.start_row.to_string()));
    pairs.push(("maxRows", request.max_rows.to_string()));
    pairs.push(("orderBy", request.order_by.as_str().to_string()));
    pairs
}
