//! Criteria filter (sort, filter, paginate over in-memory records).
//!
//! This crate is deterministic, pure logic (no IO, no HTTP, no storage):
//! - `params`: raw request mapping -> normalized [`ParameterRecord`]
//! - `pipeline`: the sort -> filter -> paginate stages
//! - `search`: caller-facing validation and the response envelope

pub mod params;
pub mod pipeline;
pub mod search;

pub use params::{FilterValue, Operator, ParameterRecord, Predicate, SortOrder, SortSpec, normalize};
pub use pipeline::{PipelineOptions, ZeroPagination, apply, apply_with};
pub use search::{SearchResponse, Status, search, search_with};
