use crate::export::model::SessionRow;
use crate::models::session::WorkSession;
use csv::Writer;
use std::path::Path;

/// Write reconstructed sessions as CSV.
pub fn write_csv(path: &Path, sessions: &[WorkSession]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["employee_id", "status", "entry", "exit", "duration_secs"])?;

    for s in sessions {
        let row = SessionRow::from(s);
        wtr.write_record(&[
            row.employee_id.to_string(),
            row.status.to_string(),
            row.entry.unwrap_or_default(),
            row.exit.unwrap_or_default(),
            row.duration_secs.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
