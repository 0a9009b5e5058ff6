//! Request payload validation for review records.

use serde_json::{Map, Value};

use super::Review;

/// The recognized fields of a validated review payload, plus the
/// unrecognized fields that pass through to storage verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewFields {
    pub se_id: String,
    pub ty_id: String,
    pub ty_review: Option<String>,
    pub extra: Map<String, Value>,
}

impl ReviewFields {
    /// Materializes a review record with the given identifier.
    pub fn into_review(self, review_id: impl Into<String>) -> Review {
        Review {
            review_id: review_id.into(),
            se_id: self.se_id,
            ty_id: self.ty_id,
            ty_review: self.ty_review,
            extra: self.extra,
        }
    }
}

/// Validates a decoded request payload.
///
/// Violations are accumulated rather than short-circuited, so the caller
/// receives the complete report in one round trip. A `reviewId` supplied by
/// the caller is dropped; identifiers are assigned by the service.
pub fn validate_review_payload(payload: &Value) -> Result<ReviewFields, Vec<String>> {
    let Some(object) = payload.as_object() else {
        return Err(vec!["request body must be a JSON object".to_string()]);
    };

    let mut violations = Vec::new();

    let se_id = required_string(object, "seId", &mut violations);
    let ty_id = required_string(object, "tyId", &mut violations);
    let ty_review = optional_string(object, "tyReview", &mut violations);

    if !violations.is_empty() {
        return Err(violations);
    }

    let extra = object
        .iter()
        .filter(|(key, _)| {
            !matches!(key.as_str(), "reviewId" | "seId" | "tyId" | "tyReview")
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Ok(ReviewFields {
        // Violations are empty here, so both lookups succeeded.
        se_id: se_id.unwrap_or_default(),
        ty_id: ty_id.unwrap_or_default(),
        ty_review,
        extra,
    })
}

fn required_string(
    object: &Map<String, Value>,
    field: &str,
    violations: &mut Vec<String>,
) -> Option<String> {
    match object.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        Some(Value::String(_)) | Some(Value::Null) | None => {
            violations.push(format!("{field} is a required field"));
            None
        }
        Some(_) => {
            violations.push(format!("{field} must be a string"));
            None
        }
    }
}

fn optional_string(
    object: &Map<String, Value>,
    field: &str,
    violations: &mut Vec<String>,
) -> Option<String> {
    match object.get(field) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Null) | None => None,
        Some(_) => {
            violations.push(format!("{field} must be a string"));
            None
        }
    }
}
