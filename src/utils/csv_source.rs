//! CSV-backed contribution source

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::traits::*;
use crate::types::*;

/// Reads contribution rows from a CSV export with a header row
///
/// Columns are looked up by their exact header names, so column order does not
/// matter and extra columns are ignored. Rows may carry more fields than the
/// header; the surplus is dropped. A missing column or a short row surfaces as
/// a CSV error.
pub struct CsvSource<R: Read> {
    rows: csv::DeserializeRecordsIntoIter<R, ContributionRow>,
    origin: String,
}

impl CsvSource<File> {
    /// Open a CSV file on disk
    pub fn open(path: impl AsRef<Path>) -> AirdropResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mut source = Self::from_reader(file);
        source.origin = path.display().to_string();
        Ok(source)
    }
}

impl<R: Read> CsvSource<R> {
    /// Read CSV data from any reader
    pub fn from_reader(reader: R) -> Self {
        let rows = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader)
            .into_deserialize();
        Self {
            rows,
            origin: "csv reader".to_string(),
        }
    }
}

impl<R: Read> ContributionSource for CsvSource<R> {
    fn next_row(&mut self) -> AirdropResult<Option<ContributionRow>> {
        self.rows.next().transpose().map_err(AirdropError::from)
    }

    fn describe(&self) -> String {
        self.origin.clone()
    }
}
