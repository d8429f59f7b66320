//! Spreadsheet loading.
//!
//! Rows come from the workbook itself (first sheet, header row first) or from a CSV
//! or JSON export of it. Every row is normalized; a single bad row fails the whole
//! load so no partial dataset is ever exposed.

use calamine::{RangeDeserializerBuilder, Reader, Xlsx};
use rayon::prelude::*;
use std::{
    fs::File,
    io::{Cursor, Read},
    path::Path,
};
use tracing::{debug, info};

use super::{
    normalize::{normalize_row, RawRow},
    types::HitEvent,
};
use crate::error::{ChartError, Result};

/// Supported export formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Json,
    Xlsx,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("csv") => Ok(SourceFormat::Csv),
            Some("json") => Ok(SourceFormat::Json),
            Some("xlsx") => Ok(SourceFormat::Xlsx),
            _ => Err(ChartError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

/// Read raw rows from CSV with a header line.
pub fn read_csv_rows<R: Read>(rdr: R) -> Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(rdr);

    let mut rows = Vec::new();
    for (idx, result) in reader.deserialize::<RawRow>().enumerate() {
        match result {
            Ok(raw) => rows.push(raw),
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                return Err(ChartError::MalformedRecord {
                    row: idx + 1,
                    reason: e.to_string(),
                })
            }
        }
    }
    Ok(rows)
}

/// Read raw rows from a JSON array of objects.
pub fn read_json_rows<R: Read>(rdr: R) -> Result<Vec<RawRow>> {
    let values: Vec<serde_json::Value> = serde_json::from_reader(rdr)?;
    values
        .into_iter()
        .enumerate()
        .map(|(idx, value)| {
            serde_json::from_value(value).map_err(|e| ChartError::MalformedRecord {
                row: idx + 1,
                reason: e.to_string(),
            })
        })
        .collect()
}

/// Read raw rows from the first sheet of an xlsx workbook.
pub fn read_xlsx_rows<R: Read>(mut rdr: R) -> Result<Vec<RawRow>> {
    let mut buf = Vec::new();
    rdr.read_to_end(&mut buf)?;
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(buf))?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ChartError::Workbook {
            message: "workbook has no sheets".to_string(),
        })?;
    let range = workbook.worksheet_range(&sheet)?;
    debug!(sheet = %sheet, "reading first sheet");

    let rows = RangeDeserializerBuilder::new()
        .from_range::<_, RawRow>(&range)
        .map_err(|e| ChartError::Workbook {
            message: format!("sheet '{}': {}", sheet, e),
        })?;
    rows.enumerate()
        .map(|(idx, row)| {
            row.map_err(|e| ChartError::MalformedRecord {
                row: idx + 1,
                reason: e.to_string(),
            })
        })
        .collect()
}

/// Normalize rows in parallel, preserving input order.
///
/// Fails with the first malformed row encountered; which one is reported is not
/// guaranteed when several rows are bad.
pub fn normalize_rows(rows: Vec<RawRow>) -> Result<Vec<HitEvent>> {
    rows.into_par_iter()
        .enumerate()
        .map(|(idx, raw)| normalize_row(idx + 1, raw))
        .collect()
}

/// Read and normalize an export from any reader.
pub fn load_events_from_reader<R: Read>(rdr: R, format: SourceFormat) -> Result<Vec<HitEvent>> {
    let rows = match format {
        SourceFormat::Csv => read_csv_rows(rdr)?,
        SourceFormat::Json => read_json_rows(rdr)?,
        SourceFormat::Xlsx => read_xlsx_rows(rdr)?,
    };
    debug!(rows = rows.len(), ?format, "read raw rows");
    normalize_rows(rows)
}

/// Read and normalize an export file.
pub fn load_events(path: &Path) -> Result<Vec<HitEvent>> {
    let format = SourceFormat::from_path(path)?;
    let file = File::open(path)?;
    let events = load_events_from_reader(file, format)?;
    info!(path = %path.display(), events = events.len(), "loaded batted-ball events");
    Ok(events)
}
