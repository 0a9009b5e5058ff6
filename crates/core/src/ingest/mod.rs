mod notification;
mod parser;
mod traits;

pub use notification::{BucketRef, ObjectLocation, ObjectRef, UploadNotification, UploadRecord};
pub use parser::{parse_delimited, ParseError, Row};
pub use traits::{ObjectStore, ObjectStoreError};
