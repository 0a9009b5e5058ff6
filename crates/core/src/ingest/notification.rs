//! Object-storage upload notification types.
//!
//! Mirrors the S3 event notification shape: a `Records` array where each
//! record names the bucket and the URL-encoded object key.

use serde::Deserialize;

/// A batch of upload notifications.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadNotification {
    #[serde(rename = "Records", default)]
    pub records: Vec<UploadRecord>,
}

/// A single upload notification record.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadRecord {
    pub s3: ObjectLocation,
}

/// The bucket and key of the uploaded object.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectLocation {
    pub bucket: BucketRef,
    pub object: ObjectRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BucketRef {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectRef {
    pub key: String,
}

impl UploadRecord {
    /// Returns the object key with URL encoding removed.
    ///
    /// Keys arrive URL-encoded in notifications, with spaces as `+`.
    pub fn decoded_key(&self) -> String {
        let plus_decoded = self.s3.object.key.replace('+', " ");
        match urlencoding::decode(&plus_decoded) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => plus_decoded,
        }
    }
}
