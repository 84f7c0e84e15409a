use crate::export::model::WorklogExport;
use std::io;

/// Write the normalized rows as pretty-printed JSON.
pub fn write_json(path: &str, rows: &[WorklogExport]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(rows).map_err(io::Error::other)?;
    std::fs::write(path, json)
}
