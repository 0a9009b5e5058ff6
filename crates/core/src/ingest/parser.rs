//! Streaming delimited-row reader.

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

/// A parsed data row: header/value pairs in column order.
pub type Row = Vec<(String, String)>;

/// Errors that can occur while consuming the byte stream.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("stream failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Parses a delimited-text byte stream row by row.
///
/// The first line is the header row; every following non-empty line is
/// split on `delimiter`, zipped with the headers, and handed to `on_row` in
/// emission order. Rows shorter than the header yield only the columns
/// present; values beyond the last header are dropped. The whole stream is
/// never buffered. Returns the number of data rows observed.
pub async fn parse_delimited<R, F>(
    reader: R,
    delimiter: char,
    mut on_row: F,
) -> Result<usize, ParseError>
where
    R: AsyncRead + Unpin,
    F: FnMut(Row),
{
    let mut lines = BufReader::new(reader).lines();

    let Some(header_line) = lines.next_line().await? else {
        return Ok(0);
    };
    let headers: Vec<String> = header_line
        .trim_end_matches('\r')
        .split(delimiter)
        .map(str::to_string)
        .collect();

    let mut count = 0;
    while let Some(line) = lines.next_line().await? {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        let row: Row = headers
            .iter()
            .zip(line.split(delimiter))
            .map(|(header, value)| (header.clone(), value.to_string()))
            .collect();

        on_row(row);
        count += 1;
    }

    Ok(count)
}
