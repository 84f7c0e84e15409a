use crate::export::model::{WorklogExport, get_headers, to_csv_record};
use csv::Writer;

/// Write the normalized rows as CSV.
pub fn write_csv(path: &str, rows: &[WorklogExport]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;

    for row in rows {
        wtr.write_record(to_csv_record(row))?;
    }

    wtr.flush()?;
    Ok(())
}
