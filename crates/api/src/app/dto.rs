use serde_json::{Map, Value};

// -------------------------
// Query-string mapping
// -------------------------

/// Rebuild the raw parameter mapping from decoded query pairs.
///
/// Bracketed keys nest under `query`: `query[orderBy]=price` sets
/// `query.orderBy`, while `query[value][]=10` (or `query[value][0]=10`)
/// appends to the `query.value` array. Other keys stay at the top level. The
/// `query` object is always present, so a bare request normalizes to defaults.
pub fn raw_params(pairs: &[(String, String)]) -> Value {
    let mut root = Map::new();
    let mut query = Map::new();

    for (key, value) in pairs {
        match split_query_key(key) {
            Some(QueryKey::Scalar(name)) => {
                query.insert(name.to_string(), Value::String(value.clone()));
            }
            Some(QueryKey::Item(name)) => {
                let slot = query
                    .entry(name.to_string())
                    .or_insert_with(|| Value::Array(Vec::new()));
                if !slot.is_array() {
                    *slot = Value::Array(Vec::new());
                }
                if let Value::Array(items) = slot {
                    items.push(Value::String(value.clone()));
                }
            }
            None => {
                root.insert(key.clone(), Value::String(value.clone()));
            }
        }
    }

    root.insert("query".to_string(), Value::Object(query));
    Value::Object(root)
}

#[derive(Debug, PartialEq, Eq)]
enum QueryKey<'a> {
    Scalar(&'a str),
    Item(&'a str),
}

fn split_query_key(key: &str) -> Option<QueryKey<'_>> {
    let rest = key.strip_prefix("query[")?;
    let (name, tail) = rest.split_once(']')?;
    if name.is_empty() {
        return None;
    }
    if tail.is_empty() {
        Some(QueryKey::Scalar(name))
    } else if tail.starts_with('[') && tail.ends_with(']') {
        Some(QueryKey::Item(name))
    } else {
        None
    }
}
