use axum::{extract::State, http::StatusCode, Json};

use reviewd_core::ingest::{parse_delimited, UploadNotification};

use crate::state::AppState;

/// Handle an object-storage upload notification (POST /ingest).
///
/// Opens a streaming read of the uploaded object and parses it as
/// delimited rows, logging each row in emission order. Only the first
/// record of the notification is inspected. Retrieval and streaming
/// failures are logged; the notification is acknowledged either way.
pub async fn ingest_upload(
    State(state): State<AppState>,
    Json(notification): Json<UploadNotification>,
) -> StatusCode {
    let Some(record) = notification.records.first() else {
        tracing::warn!("Upload notification carried no records");
        return StatusCode::NO_CONTENT;
    };

    let bucket = &record.s3.bucket.name;
    let key = record.decoded_key();

    tracing::info!(%bucket, %key, "Processing uploaded object");

    let reader = match state.objects.open(bucket, &key).await {
        Ok(reader) => reader,
        Err(error) => {
            tracing::error!(%bucket, %key, error = %error, "Failed to open uploaded object");
            return StatusCode::NO_CONTENT;
        }
    };

    let result = parse_delimited(reader, state.delimiter, |row| {
        tracing::info!(?row, "Parsed row");
    })
    .await;

    match result {
        Ok(rows) => {
            tracing::info!(%bucket, %key, rows, "Finished parsing uploaded object");
        }
        Err(error) => {
            tracing::error!(%bucket, %key, error = %error, "Upload stream failed mid-parse");
        }
    }

    StatusCode::NO_CONTENT
}
