//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! review records. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Map, Number, Value};

use reviewd_core::review::Review;
use reviewd_core::storage::RepositoryError;

/// Convert a Review to a DynamoDB item.
///
/// Extra payload fields are converted recursively, so any JSON shape the
/// caller sent persists verbatim.
pub fn review_to_item(review: &Review) -> Result<HashMap<String, AttributeValue>, RepositoryError> {
    let mut item = HashMap::new();

    item.insert(
        "reviewId".to_string(),
        AttributeValue::S(review.review_id.clone()),
    );
    item.insert("seId".to_string(), AttributeValue::S(review.se_id.clone()));
    item.insert("tyId".to_string(), AttributeValue::S(review.ty_id.clone()));
    if let Some(ty_review) = &review.ty_review {
        item.insert("tyReview".to_string(), AttributeValue::S(ty_review.clone()));
    }

    for (key, value) in &review.extra {
        item.insert(key.clone(), value_to_attr(value)?);
    }

    Ok(item)
}

/// Convert a DynamoDB item to a Review.
pub fn item_to_review(item: &HashMap<String, AttributeValue>) -> Result<Review, RepositoryError> {
    let mut extra = Map::new();
    for (key, attr) in item {
        if matches!(key.as_str(), "reviewId" | "seId" | "tyId" | "tyReview") {
            continue;
        }
        extra.insert(key.clone(), attr_to_value(attr)?);
    }

    Ok(Review {
        review_id: get_string(item, "reviewId")?,
        se_id: get_string(item, "seId")?,
        ty_id: get_string(item, "tyId")?,
        ty_review: get_optional_string(item, "tyReview"),
        extra,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Convert a JSON value to a DynamoDB attribute.
fn value_to_attr(value: &Value) -> Result<AttributeValue, RepositoryError> {
    Ok(match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(items) => {
            AttributeValue::L(items.iter().map(value_to_attr).collect::<Result<_, _>>()?)
        }
        Value::Object(fields) => AttributeValue::M(
            fields
                .iter()
                .map(|(k, v)| Ok((k.clone(), value_to_attr(v)?)))
                .collect::<Result<_, RepositoryError>>()?,
        ),
    })
}

/// Convert a DynamoDB attribute back to a JSON value.
fn attr_to_value(attr: &AttributeValue) -> Result<Value, RepositoryError> {
    match attr {
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::N(n) => n
            .parse::<Number>()
            .map(Value::Number)
            .map_err(|e| RepositoryError::InvalidData(format!("Invalid number {n}: {e}"))),
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::L(items) => Ok(Value::Array(
            items.iter().map(attr_to_value).collect::<Result<_, _>>()?,
        )),
        AttributeValue::M(fields) => Ok(Value::Object(
            fields
                .iter()
                .map(|(k, v)| Ok((k.clone(), attr_to_value(v)?)))
                .collect::<Result<_, RepositoryError>>()?,
        )),
        other => Err(RepositoryError::InvalidData(format!(
            "Unsupported attribute type: {:?}",
            other
        ))),
    }
}

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute.
fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}
