use crate::errors::{AppError, AppResult};
use crate::export::model::SessionRow;
use crate::models::session::WorkSession;
use std::fs::File;
use std::path::Path;

/// Write reconstructed sessions as pretty-printed JSON.
pub fn write_json(path: &Path, sessions: &[WorkSession]) -> AppResult<()> {
    let rows: Vec<SessionRow> = sessions.iter().map(SessionRow::from).collect();

    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &rows).map_err(|e| AppError::Export(e.to_string()))?;

    Ok(())
}
