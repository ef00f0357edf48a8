use crate::domain::ports::EdgeRecordSource;
use crate::domain::record::EdgeRecord;
use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// CSV edge record source.
///
/// Expects a header row naming `resource_id_from`, `resource_id_to`,
/// `integration_type` and (optionally) `metadata`, in any column order.
pub struct CsvEdgeSource {
    path: PathBuf,
}

impl CsvEdgeSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EdgeRecordSource for CsvEdgeSource {
    fn load(&self) -> Result<Vec<EdgeRecord>> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open CSV file: {}", self.path.display()))?;
        let records = read_records(file)
            .with_context(|| format!("Failed to read edge records from {}", self.path.display()))?;
        debug!(path = %self.path.display(), records = records.len(), "loaded edge records");
        Ok(records)
    }
}

/// Parse edge records from any CSV stream. Rows are numbered from 1, header excluded.
pub fn read_records<R: Read>(input: R) -> Result<Vec<EdgeRecord>> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input);

    let mut records = Vec::new();
    for (i, row) in reader.deserialize::<EdgeRecord>().enumerate() {
        let row_number = i + 1;
        let record = row.with_context(|| format!("Malformed CSV row {row_number}"))?;
        if record.resource_id_from.is_empty() || record.resource_id_to.is_empty() {
            warn!(row = row_number, "rejecting edge record with empty resource identifier");
            bail!("CSV row {row_number}: resource_id_from and resource_id_to must be non-empty");
        }
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_rows_in_order() {
        let input = "resource_id_from,resource_id_to,integration_type,metadata\n\
                     api-gateway,book-lambda,http,sync call\n\
                     book-lambda,book-dynamodb,sdk,\n";
        let records = read_records(input.as_bytes()).unwrap();

        assert_eq!(
            records,
            vec![
                EdgeRecord::new("api-gateway", "book-lambda", "http", "sync call"),
                EdgeRecord::new("book-lambda", "book-dynamodb", "sdk", ""),
            ]
        );
    }

    #[test]
    fn test_columns_are_matched_by_header() {
        let input = "metadata,integration_type,resource_id_to,resource_id_from\n\
                     note,queue,b,a\n";
        let records = read_records(input.as_bytes()).unwrap();
        assert_eq!(records, vec![EdgeRecord::new("a", "b", "queue", "note")]);
    }

    #[test]
    fn test_metadata_column_is_optional() {
        let input = "resource_id_from,resource_id_to,integration_type\na,b,http\n";
        let records = read_records(input.as_bytes()).unwrap();
        assert_eq!(records[0].metadata, "");
    }

    #[test]
    fn test_empty_identifier_rejected_with_row_number() {
        let input = "resource_id_from,resource_id_to,integration_type,metadata\n\
                     a,b,http,\n\
                     ,c,http,\n";
        let err = read_records(input.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("row 2"), "got: {err}");
    }

    #[test]
    fn test_missing_required_column_rejected() {
        let input = "resource_id_from,integration_type\na,http\n";
        assert!(read_records(input.as_bytes()).is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        let source = CsvEdgeSource::new("/nonexistent/edges_12345.csv");
        assert!(source.load().is_err());
    }
}
