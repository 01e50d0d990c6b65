// src/json.rs
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::options::JsonFormat;
use crate::error::Result;

/// Render any record sequence. `Pretty` is 2-space indented, `Compact` has no whitespace.
pub fn to_json<T: Serialize>(records: &[T], format: JsonFormat) -> Result<String> {
    let text = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(records)?,
        JsonFormat::Compact => serde_json::to_string(records)?,
    };
    logd!("JSON: {} records, {:?}, {} bytes", records.len(), format, text.len());
    Ok(text)
}

/// Read an exported document back.
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<Vec<T>> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DayOfWeek, TimetableEntry};

    fn entry() -> TimetableEntry {
        TimetableEntry {
            day_of_week: DayOfWeek::Thu,
            period: 2,
            subject: s!("化学"),
            teacher: None,
            classroom: Some(s!("C-3")),
            color: Some(s!("#ff6b6b")),
            memo: None,
        }
    }

    #[test]
    fn compact_uses_camel_case_and_omits_absent_fields() {
        let txt = to_json(&[entry()], JsonFormat::Compact).unwrap();
        assert_eq!(
            txt,
            r##"[{"dayOfWeek":"木","period":2,"subject":"化学","classroom":"C-3","color":"#ff6b6b"}]"##
        );
    }

    #[test]
    fn pretty_is_two_space_indented() {
        let txt = to_json(&[entry()], JsonFormat::Pretty).unwrap();
        assert!(txt.starts_with("[\n  {\n    \"dayOfWeek\": \"木\""));
    }

    #[test]
    fn empty_sequence() {
        assert_eq!(to_json::<TimetableEntry>(&[], JsonFormat::Pretty).unwrap(), "[]");
    }
}
