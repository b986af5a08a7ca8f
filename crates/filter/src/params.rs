//! Parameter normalization: raw request mapping -> fully-defaulted [`ParameterRecord`].

use serde::Serialize;
use serde_json::Value;

use criteria_core::{Scalar, cast};

pub const DEFAULT_ORDER: &str = "asc";
pub const DEFAULT_LIMIT: usize = 10;
pub const DEFAULT_OFFSET: usize = 0;

/// Comparison operand of the filter stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FilterValue {
    #[default]
    Empty,
    Single(Scalar),
    Range(Scalar, Scalar),
}

impl FilterValue {
    /// Read the `value` parameter: a scalar, or an array whose first two
    /// entries form an inclusive range.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Array(items) => {
                let mut scalars = items.iter().filter_map(Scalar::from_json);
                match (scalars.next(), scalars.next()) {
                    (Some(low), Some(high)) => FilterValue::Range(low, high),
                    (Some(only), None) => FilterValue::Single(only),
                    _ => FilterValue::Empty,
                }
            }
            other => Scalar::from_json(other).map_or(FilterValue::Empty, FilterValue::Single),
        }
    }

    /// Legacy emptiness: a falsy scalar disables filtering, a range never does.
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Empty => true,
            FilterValue::Single(s) => s.is_falsy(),
            FilterValue::Range(..) => false,
        }
    }
}

/// Sort direction. Only the literal `"asc"` is ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(raw: &str) -> Self {
        if raw == "asc" { SortOrder::Asc } else { SortOrder::Desc }
    }
}

/// Filter operator. Unrecognised names are kept and match nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operator {
    Equals,
    Between,
    Greater,
    Less,
    Other(String),
}

impl Operator {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "equals" => Operator::Equals,
            "between" => Operator::Between,
            "greater" => Operator::Greater,
            "less" => Operator::Less,
            other => Operator::Other(other.to_string()),
        }
    }
}

/// Normalized filter request. Built once per request, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterRecord {
    pub order_by: String,
    pub order: String,
    pub limit: usize,
    pub offset: usize,
    /// Carried through for callers; no stage filters on it.
    pub category: String,
    pub param: String,
    pub value: FilterValue,
    pub operator: String,
}

impl Default for ParameterRecord {
    fn default() -> Self {
        Self {
            order_by: String::new(),
            order: DEFAULT_ORDER.to_string(),
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
            category: String::new(),
            param: String::new(),
            value: FilterValue::Empty,
            operator: String::new(),
        }
    }
}

/// Sort stage input, present only when its guard holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec<'a> {
    pub field: &'a str,
    pub order: SortOrder,
}

/// Filter stage input, present only when its guard holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate<'a> {
    pub field: &'a str,
    pub operator: Operator,
    pub value: &'a FilterValue,
}

/// Legacy emptiness for text parameters: `""` and `"0"` count as not supplied.
fn is_blank(raw: &str) -> bool {
    raw.is_empty() || raw == "0"
}

impl ParameterRecord {
    pub fn sort_spec(&self) -> Option<SortSpec<'_>> {
        if is_blank(&self.order_by) || is_blank(&self.order) {
            return None;
        }
        Some(SortSpec {
            field: &self.order_by,
            order: SortOrder::parse(&self.order),
        })
    }

    pub fn predicate(&self) -> Option<Predicate<'_>> {
        if is_blank(&self.param) || self.value.is_empty() || is_blank(&self.operator) {
            return None;
        }
        Some(Predicate {
            field: &self.param,
            operator: Operator::parse(&self.operator),
            value: &self.value,
        })
    }
}

/// Build a [`ParameterRecord`] from a raw mapping with an optional nested
/// `query` object. Missing fields take their defaults; this never fails.
pub fn normalize(raw: &Value) -> ParameterRecord {
    let defaults = ParameterRecord::default();
    let Some(query) = raw.get("query").and_then(Value::as_object) else {
        return defaults;
    };

    let text = |name: &str, default: String| query.get(name).map_or(default, cast::to_text);
    let count = |name: &str, default: usize| {
        query
            .get(name)
            .map_or(default, |v| usize::try_from(cast::to_int(v).max(0)).unwrap_or(usize::MAX))
    };

    ParameterRecord {
        order_by: text("orderBy", defaults.order_by),
        order: text("order", defaults.order),
        limit: count("limit", defaults.limit),
        offset: count("offset", defaults.offset),
        category: text("category", defaults.category),
        param: text("param", defaults.param),
        value: query.get("value").map_or(FilterValue::Empty, FilterValue::from_json),
        operator: text("operator", defaults.operator),
    }
}
