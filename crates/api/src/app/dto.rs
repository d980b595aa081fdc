use serde::Serialize;
use serde_json::{Value, json};

/// `{"items": [...]}` envelope used by every list endpoint.
pub fn items_json<T: Serialize>(items: &[T]) -> Value {
    json!({ "items": items })
}

pub fn count_json(count: u64) -> Value {
    json!({ "count": count })
}
