use std::path::Path;

use tracing::info;

use crate::error::SinkError;
use crate::normalize::CleanRecord;

/// Write records to `path` with a header row. `None` fields are left empty.
pub fn write_csv(path: &Path, records: &[CleanRecord]) -> Result<(), SinkError> {
    let wrap = |source: csv::Error| SinkError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(wrap)?;
    if records.is_empty() {
        // serialize() only emits the header alongside the first row
        writer.write_record(CleanRecord::COLUMNS).map_err(wrap)?;
    }
    for record in records {
        writer.serialize(record).map_err(wrap)?;
    }
    writer.flush().map_err(|e| wrap(e.into()))?;

    info!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}
