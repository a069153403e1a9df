//! Response validator
//!
//! Checks that a review service response is `{"homeworks": [...]}`.

use serde_json::Value;

use crate::error::WatchError;

/// Returns the `homeworks` list of a raw response
///
/// The records are handed back untouched and in the service's order; only
/// the first one is ever looked at. An empty list simply means nothing
/// changed since the cursor.
pub fn validate_response(raw: &Value) -> Result<&[Value], WatchError> {
    let Some(object) = raw.as_object() else {
        return Err(WatchError::Shape("API вернул не словарь".to_string()));
    };

    let homeworks = match object.get("homeworks") {
        None | Some(Value::Null) => {
            return Err(WatchError::Shape(
                "в ответе API нет ключа homeworks".to_string(),
            ));
        }
        Some(value) => value,
    };

    homeworks
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| WatchError::Shape("homeworks не является списком".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_response() {
        let raw = json!({
            "homeworks": [
                {"homework_name": "hw2", "status": "approved"},
                {"homework_name": "hw1", "status": "rejected"}
            ],
            "current_date": 1000
        });

        let homeworks = validate_response(&raw).unwrap();
        assert_eq!(homeworks.len(), 2);
        assert_eq!(homeworks[0]["homework_name"], "hw2");
    }

    #[test]
    fn test_empty_list_is_not_an_error() {
        let raw = json!({"homeworks": []});
        assert!(validate_response(&raw).unwrap().is_empty());
    }

    #[test]
    fn test_records_are_returned_unchanged() {
        let raw = json!({"homeworks": [{"name": "hw1", "status": 5}, "junk", null]});

        let homeworks = validate_response(&raw).unwrap();
        assert_eq!(homeworks, raw["homeworks"].as_array().unwrap().as_slice());
    }

    #[test]
    fn test_non_object_response() {
        let raw = json!([{"homework_name": "hw1"}]);
        let result = validate_response(&raw);
        assert!(matches!(result, Err(WatchError::Shape(_))));
    }

    #[test]
    fn test_missing_homeworks_key() {
        assert!(matches!(
            validate_response(&json!({"current_date": 1000})),
            Err(WatchError::Shape(_))
        ));
        assert!(matches!(
            validate_response(&json!({"homeworks": null})),
            Err(WatchError::Shape(_))
        ));
    }

    #[test]
    fn test_homeworks_not_a_list() {
        let raw = json!({"homeworks": {"homework_name": "hw1"}});
        let result = validate_response(&raw);
        assert!(matches!(result, Err(WatchError::Shape(_))));
    }
}
