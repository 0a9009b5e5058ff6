mod types;
mod validation;

pub use types::Review;
pub use validation::{validate_review_payload, ReviewFields};
