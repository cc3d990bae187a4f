//! Shape validation for raw response bodies.
//!
//! Every function here takes the body text exactly as received and either
//! returns typed models or a [`FetchError::Malformed`] describing what was
//! wrong with the shape.

use crate::error::FetchError;
use crate::models::{AnalyticsSnapshot, NamedEntity, PredictionSnapshot, RecentAnalytics};
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Reason reported when the organizations body is not a JSON array.
pub const ORGANIZATIONS_NOT_ARRAY: &str = "Response is not an array";
/// Reason reported when the stores body is not a JSON array.
pub const STORES_NOT_ARRAY: &str = "Stores response is not an array";

/// Parse the body as JSON; an empty body is treated as `null`.
fn parse_value(body: &str) -> Result<Value, FetchError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| FetchError::Malformed(format!("invalid JSON: {}", e)))
}

fn from_object<T: DeserializeOwned>(value: Value, what: &str) -> Result<T, FetchError> {
    if !value.is_object() {
        return Err(FetchError::Malformed(format!("expected {} object", what)));
    }
    serde_json::from_value(value).map_err(|e| FetchError::Malformed(format!("{}: {}", what, e)))
}

/// Extract the `message` field of an error body, if there is a non-empty one.
pub fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")?
        .as_str()
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

/// An id is usable when it is a non-zero number or a non-empty string.
fn entity_id(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn entity_name(value: &Value) -> Option<String> {
    value.as_str().filter(|s| !s.is_empty()).map(str::to_string)
}

/// JSON values a dropdown body is rejected as empty for.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Parse an `[{id, name}, ...]` dropdown body.
///
/// Records missing an id or a name are dropped rather than failing the
/// whole list. An empty or falsy body fails with [`FetchError::EmptyBody`];
/// any other body that is not an array (non-JSON text included) fails with
/// `not_array_reason`.
pub fn named_list(body: &str, not_array_reason: &str) -> Result<Vec<NamedEntity>, FetchError> {
    if body.trim().is_empty() {
        return Err(FetchError::EmptyBody);
    }
    let items = match serde_json::from_str::<Value>(body) {
        Ok(Value::Array(items)) => items,
        Ok(value) if is_falsy(&value) => return Err(FetchError::EmptyBody),
        Ok(_) => return Err(FetchError::Malformed(not_array_reason.to_string())),
        Err(e) => {
            debug!("Dropdown body is not JSON: {}", e);
            return Err(FetchError::Malformed(not_array_reason.to_string()));
        }
    };

    let total = items.len();
    let entities: Vec<NamedEntity> = items
        .iter()
        .filter_map(|item| {
            let id = entity_id(item.get("id")?)?;
            let name = entity_name(item.get("name")?)?;
            Some(NamedEntity { id, name })
        })
        .collect();

    if entities.len() < total {
        debug!(
            "Dropped {} dropdown records without an id or name",
            total - entities.len()
        );
    }
    Ok(entities)
}

/// Parse an analytics body. A `null` or empty body yields `Ok(None)`.
pub fn analytics(body: &str) -> Result<Option<AnalyticsSnapshot>, FetchError> {
    match parse_value(body)? {
        Value::Null => Ok(None),
        value => from_object(value, "analytics").map(Some),
    }
}

pub fn prediction(body: &str) -> Result<PredictionSnapshot, FetchError> {
    from_object(parse_value(body)?, "prediction")
}

pub fn recent(body: &str) -> Result<RecentAnalytics, FetchError> {
    from_object(parse_value(body)?, "recent analytics")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn named_list_filters_incomplete_records() {
        let body = json!([
            {"id": 1, "name": "Acme"},
            {"id": 2},
            {"name": "No Id"},
            {"id": 0, "name": "Zero"},
            {"id": "", "name": "Blank"},
            {"id": 3, "name": ""},
            null,
            {"id": "store-9", "name": "Harbor"}
        ])
        .to_string();
        let entities = named_list(&body, ORGANIZATIONS_NOT_ARRAY).unwrap();
        assert_eq!(
            entities,
            vec![
                NamedEntity {
                    id: "1".into(),
                    name: "Acme".into()
                },
                NamedEntity {
                    id: "store-9".into(),
                    name: "Harbor".into()
                },
            ]
        );
    }

    #[test]
    fn named_list_rejects_non_array() {
        let err = named_list(r#"{"id": 1, "name": "Acme"}"#, STORES_NOT_ARRAY).unwrap_err();
        assert_eq!(err, FetchError::Malformed(STORES_NOT_ARRAY.to_string()));

        let err = named_list(r#""stores""#, ORGANIZATIONS_NOT_ARRAY).unwrap_err();
        assert_eq!(err, FetchError::Malformed(ORGANIZATIONS_NOT_ARRAY.to_string()));
    }

    #[test]
    fn named_list_non_json_body_is_not_an_array() {
        let err = named_list("<html>oops</html>", ORGANIZATIONS_NOT_ARRAY).unwrap_err();
        assert_eq!(err, FetchError::Malformed(ORGANIZATIONS_NOT_ARRAY.to_string()));
    }

    #[test]
    fn named_list_empty_or_falsy_body() {
        for body in ["", "  ", "null", "false", "0", r#""""#] {
            assert_eq!(
                named_list(body, STORES_NOT_ARRAY),
                Err(FetchError::EmptyBody),
                "body {:?}",
                body
            );
        }
    }

    #[test]
    fn analytics_null_body_is_none() {
        assert_eq!(analytics("null").unwrap(), None);
        assert_eq!(analytics("").unwrap(), None);
    }

    #[test]
    fn analytics_object_body() {
        let body = json!({"totalMessages": 10, "totalClicks": 1}).to_string();
        let snapshot = analytics(&body).unwrap().unwrap();
        assert_eq!(snapshot.total_messages, 10);
        assert_eq!(snapshot.total_clicks, 1);
    }

    #[test]
    fn analytics_array_body_is_malformed() {
        assert!(matches!(analytics("[]"), Err(FetchError::Malformed(_))));
    }

    #[test]
    fn prediction_requires_object() {
        assert!(matches!(prediction("null"), Err(FetchError::Malformed(_))));
        let body = json!({"currentCTR": 0.1, "averagePredictedCTR": 0.2, "predictions": {}})
            .to_string();
        let snapshot = prediction(&body).unwrap();
        assert_eq!(snapshot.average_predicted_ctr, 0.2);
        assert!(snapshot.predictions.is_empty());
    }

    #[test]
    fn server_message_extraction() {
        assert_eq!(
            server_message(r#"{"message": "Store not found", "status": 404}"#),
            Some("Store not found".to_string())
        );
        assert_eq!(server_message(r#"{"message": ""}"#), None);
        assert_eq!(server_message("Internal Server Error"), None);
    }
}
