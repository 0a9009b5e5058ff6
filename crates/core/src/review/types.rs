use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A review of a subject (`seId`) written by a reviewer (`tyId`).
///
/// The identifier is assigned by the service at creation time and never
/// changes afterwards. Payload fields beyond the recognized three are
/// carried in `extra` and persist verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "reviewId")]
    pub review_id: String,
    #[serde(rename = "seId")]
    pub se_id: String,
    #[serde(rename = "tyId")]
    pub ty_id: String,
    /// Free-text review content; omitted from responses when absent.
    #[serde(rename = "tyReview", skip_serializing_if = "Option::is_none")]
    pub ty_review: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Review {
    /// Creates a new review with a freshly generated identifier.
    pub fn new(se_id: impl Into<String>, ty_id: impl Into<String>) -> Self {
        Self {
            review_id: Uuid::new_v4().to_string(),
            se_id: se_id.into(),
            ty_id: ty_id.into(),
            ty_review: None,
            extra: Map::new(),
        }
    }

    /// Sets the review content.
    pub fn with_ty_review(mut self, ty_review: impl Into<String>) -> Self {
        self.ty_review = Some(ty_review.into());
        self
    }

    /// Sets a specific identifier for this review (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.review_id = id.into();
        self
    }
}
