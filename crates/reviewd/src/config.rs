use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Table holding review records (default: "reviews")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub table_name: String,
    /// Column delimiter for ingested files (default: ',')
    pub delimiter: char,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `REVIEWS_TABLE_NAME` - table holding review records (default: "reviews")
    /// - `INGEST_DELIMITER` - column delimiter for ingested files (default: ",")
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("REVIEWS_TABLE_NAME").unwrap_or_else(|_| "reviews".to_string()),
            delimiter: env::var("INGEST_DELIMITER")
                .ok()
                .and_then(|v| v.chars().next())
                .unwrap_or(','),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
