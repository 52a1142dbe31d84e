//! CSV loading into Polars DataFrames.

use std::path::{Path, PathBuf};

use polars::prelude::{CsvReadOptions, CsvWriter, DataFrame, SerReader, SerWriter};
use tracing::debug;

use crate::error::IngestError;

/// Rows sampled for schema inference. Enough to see past a numeric-looking
/// prefix in a mostly-text column.
const INFER_SCHEMA_ROWS: usize = 100;

/// Read a CSV file with a header row into a DataFrame.
pub fn read_table(path: &Path) -> Result<DataFrame, IngestError> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|source| csv_error(path, source))?
        .finish()
        .map_err(|source| csv_error(path, source))?;
    debug!(
        rows = df.height(),
        columns = df.width(),
        path = %path.display(),
        "read csv table"
    );
    Ok(df)
}

/// Write a DataFrame to a CSV file with a header row.
pub fn write_table(df: &mut DataFrame, path: &Path) -> Result<(), IngestError> {
    let mut file = std::fs::File::create(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .map_err(|source| csv_error(path, source))?;
    Ok(())
}

fn csv_error(path: &Path, source: polars::prelude::PolarsError) -> IngestError {
    IngestError::Csv {
        path: PathBuf::from(path),
        message: source.to_string(),
    }
}
