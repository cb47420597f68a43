use crate::domain::model::{MatchRecord, Report};
use crate::utils::error::{EolError, Result};

pub const CSV_HEADER: [&str; 3] = ["Product", "EOLDate", "Cycle"];

/// Serialize the report as UTF-8 CSV: header row, then one row per record.
///
/// The header is written explicitly so an empty report still has one.
pub fn render_csv(records: &[MatchRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }

    writer
        .into_inner()
        .map_err(|e| EolError::Csv(csv::Error::from(e.into_error())))
}

impl Report {
    pub fn to_csv(&self) -> Result<Vec<u8>> {
        render_csv(&self.records)
    }
}
