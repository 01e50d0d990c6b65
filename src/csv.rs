// src/csv.rs
use std::io::{self, Write};

use chrono::NaiveDate;

use crate::config::consts::{BOM, CSV_ALL_DAY, CSV_HEADER, CSV_PRIVATE, CSV_SEP};
use crate::data::CalendarEntry;
use crate::error::Result;

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Quote a field only when it has to be, doubling inner quotes.
pub fn escape(field: &str, sep: char) -> String {
    if needs_quotes(field, sep) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        s!(field)
    }
}

/// Write a single row to any writer, LF-terminated.
pub fn write_row<W, S>(mut w: W, row: &[S], sep: char) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    let mut first = true;
    for cell in row {
        if first {
            first = false;
        } else {
            write!(w, "{}", sep)?;
        }
        write!(w, "{}", escape(cell.as_ref(), sep))?;
    }
    writeln!(w)
}

/* ---------------- Calendar import format ---------------- */

/// `2025-11-04` → `2025/11/4`. Anything that is not a calendar date goes through untouched.
pub fn slash_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso.trim(), "%Y-%m-%d") {
        Ok(d) => d.format("%Y/%-m/%-d").to_string(),
        Err(e) => {
            logw!("CSV: date {:?} not YYYY-MM-DD ({e}), kept verbatim", iso);
            s!(iso)
        }
    }
}

/// The 9 columns spreadsheet calendar importers expect, for one entry.
fn calendar_row(e: &CalendarEntry) -> [String; 9] {
    [
        e.subject.clone(),
        slash_date(&e.date),
        e.start_time.clone(),
        s!(), // End Date
        e.end_time.clone(),
        s!(CSV_ALL_DAY),
        e.teacher.clone().unwrap_or_default(), // Description
        e.location.clone().unwrap_or_default(),
        s!(CSV_PRIVATE),
    ]
}

/// Full CSV document for the calendar import: BOM, fixed header, one row per entry.
pub fn calendar_to_csv(entries: &[CalendarEntry]) -> Result<String> {
    let mut buf: Vec<u8> = Vec::with_capacity(64 * (entries.len() + 1));
    write!(buf, "{BOM}")?;
    write_row(&mut buf, &CSV_HEADER, CSV_SEP)?;
    for e in entries {
        write_row(&mut buf, &calendar_row(e), CSV_SEP)?;
    }
    logd!("CSV: {} rows, {} bytes", entries.len(), buf.len());
    let text =
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(text)
}
