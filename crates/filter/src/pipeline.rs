//! Sort -> filter -> paginate over an in-memory record list.
//!
//! Each stage runs only when its guard holds (see [`ParameterRecord::sort_spec`],
//! [`ParameterRecord::predicate`] and [`ZeroPagination`]) and hands a new `Vec`
//! to the next one. Nothing here fails: malformed filter input degrades to an
//! empty result, never an error.

use core::cmp::Ordering;

use criteria_core::{Record, cmp_fields};

use crate::params::{FilterValue, Operator, ParameterRecord, Predicate, SortOrder, SortSpec};

/// How a zero `limit`/`offset` is read by the pagination guard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ZeroPagination {
    /// Zero means "not supplied": pagination runs only when both `limit` and
    /// `offset` are non-zero. Matches the legacy endpoint.
    #[default]
    Unset,
    /// Zero is a real value: pagination always runs, `limit=0` returns nothing
    /// and `offset=0` starts at the first record.
    Explicit,
}

impl ZeroPagination {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "unset" | "legacy" => Some(ZeroPagination::Unset),
            "explicit" => Some(ZeroPagination::Explicit),
            _ => None,
        }
    }
}

/// Pipeline configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    pub zero_pagination: ZeroPagination,
}

/// Run the pipeline with default options.
pub fn apply(data: Vec<Record>, params: &ParameterRecord) -> Vec<Record> {
    apply_with(data, params, PipelineOptions::default())
}

/// Run the pipeline with explicit options.
pub fn apply_with(data: Vec<Record>, params: &ParameterRecord, options: PipelineOptions) -> Vec<Record> {
    if data.is_empty() {
        return data;
    }
    let input = data.len();

    let data = match params.sort_spec() {
        Some(spec) => sort(data, &spec),
        None => data,
    };
    let data = match params.predicate() {
        Some(predicate) => filter(data, &predicate),
        None => data,
    };
    let data = match page_window(params, options.zero_pagination) {
        Some((offset, limit)) => paginate(data, offset, limit),
        None => data,
    };

    tracing::debug!(
        input,
        output = data.len(),
        order_by = %params.order_by,
        operator = %params.operator,
        "criteria pipeline applied"
    );
    data
}

/// Stable single-key sort. Ties keep their input order in both directions.
pub fn sort(mut data: Vec<Record>, spec: &SortSpec<'_>) -> Vec<Record> {
    let field = spec.field;
    match spec.order {
        SortOrder::Asc => data.sort_by(|a, b| cmp_fields(a.get(field), b.get(field))),
        SortOrder::Desc => data.sort_by(|a, b| cmp_fields(b.get(field), a.get(field))),
    }
    data
}

/// Keep the records the predicate matches.
pub fn filter(data: Vec<Record>, predicate: &Predicate<'_>) -> Vec<Record> {
    data.into_iter().filter(|record| matches(record, predicate)).collect()
}

/// Does `record` satisfy `predicate`? A record without the field never matches.
pub fn matches(record: &Record, predicate: &Predicate<'_>) -> bool {
    let Some(field) = record.get(predicate.field) else {
        return false;
    };
    match (&predicate.operator, predicate.value) {
        (Operator::Equals, FilterValue::Single(v)) => field.loose_eq(v),
        (Operator::Greater, FilterValue::Single(v)) => field.loose_cmp(v) == Ordering::Greater,
        (Operator::Less, FilterValue::Single(v)) => field.loose_cmp(v) == Ordering::Less,
        (Operator::Between, FilterValue::Range(low, high)) => {
            field.loose_cmp(low) != Ordering::Less && field.loose_cmp(high) != Ordering::Greater
        }
        _ => false,
    }
}

/// `data[offset .. offset + limit]`, clipped to what is available.
pub fn paginate(data: Vec<Record>, offset: usize, limit: usize) -> Vec<Record> {
    data.into_iter().skip(offset).take(limit).collect()
}

fn page_window(params: &ParameterRecord, zero: ZeroPagination) -> Option<(usize, usize)> {
    match zero {
        ZeroPagination::Unset if params.limit == 0 || params.offset == 0 => None,
        _ => Some((params.offset, params.limit)),
    }
}
