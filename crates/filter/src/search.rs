//! Caller-facing search wrapper and the `{status, data, message}` envelope.

use serde::Serialize;
use serde_json::Value;

use criteria_core::{CriteriaError, CriteriaResult, Record};

use crate::params::normalize;
use crate::pipeline::{PipelineOptions, apply_with};

/// Validate the request, normalize `raw`, and run the pipeline.
///
/// Fails with [`CriteriaError::EmptyData`] when `data` is empty and with
/// [`CriteriaError::EmptyParameters`] when `raw` is `null` or an empty object.
pub fn search(data: Vec<Record>, raw: &Value) -> CriteriaResult<Vec<Record>> {
    search_with(data, raw, PipelineOptions::default())
}

pub fn search_with(data: Vec<Record>, raw: &Value, options: PipelineOptions) -> CriteriaResult<Vec<Record>> {
    if data.is_empty() {
        tracing::warn!("search rejected: no data provided");
        return Err(CriteriaError::EmptyData);
    }
    if is_blank(raw) {
        tracing::warn!("search rejected: no parameters provided");
        return Err(CriteriaError::EmptyParameters);
    }

    let params = normalize(raw);
    Ok(apply_with(data, &params, options))
}

fn is_blank(raw: &Value) -> bool {
    match raw {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Response envelope handed to serializers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse {
    pub status: Status,
    pub data: Vec<Record>,
    pub message: String,
}

impl SearchResponse {
    pub fn success(data: Vec<Record>) -> Self {
        Self {
            status: Status::Success,
            data,
            message: String::new(),
        }
    }

    pub fn error(err: &CriteriaError) -> Self {
        Self {
            status: Status::Error,
            data: Vec::new(),
            message: err.to_string(),
        }
    }

    pub fn from_result(result: CriteriaResult<Vec<Record>>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(e) => Self::error(&e),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Vec<Record> {
        vec![
            Record::new().with("code", 1).with("price", 5),
            Record::new().with("code", 2).with("price", 15),
            Record::new().with("code", 3).with("price", 25),
        ]
    }

    #[test]
    fn empty_data_is_rejected() {
        let err = search(Vec::new(), &json!({"query": {}})).unwrap_err();
        assert_eq!(err, CriteriaError::EmptyData);
    }

    #[test]
    fn blank_parameters_are_rejected() {
        assert_eq!(search(sample(), &json!(null)).unwrap_err(), CriteriaError::EmptyParameters);
        assert_eq!(search(sample(), &json!({})).unwrap_err(), CriteriaError::EmptyParameters);
    }

    #[test]
    fn empty_query_object_lists_everything() {
        let out = search(sample(), &json!({"query": {}})).unwrap();
        assert_eq!(out, sample());
    }

    #[test]
    fn query_string_style_values_filter_numerically() {
        let raw = json!({"query": {
            "orderBy": "price",
            "order": "desc",
            "param": "price",
            "value": "10",
            "operator": "greater",
        }});
        let out = search(sample(), &raw).unwrap();
        assert_eq!(out, vec![sample()[2].clone(), sample()[1].clone()]);
    }

    #[test]
    fn between_from_raw_pair() {
        let raw = json!({"query": {"param": "price", "value": ["10", "25"], "operator": "between"}});
        let out = search(sample(), &raw).unwrap();
        assert_eq!(out, vec![sample()[1].clone(), sample()[2].clone()]);
    }

    #[test]
    fn envelope_serializes_success() {
        let resp = SearchResponse::from_result(Ok(vec![Record::new().with("code", 1)]));
        assert!(resp.is_success());
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({"status": "success", "data": [{"code": 1}], "message": ""})
        );
    }

    #[test]
    fn envelope_serializes_error() {
        let resp = SearchResponse::from_result(Err(CriteriaError::EmptyData));
        assert!(!resp.is_success());
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({"status": "error", "data": [], "message": "No data provided"})
        );
    }
}
