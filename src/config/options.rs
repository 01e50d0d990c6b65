// src/config/options.rs
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::consts::DEFAULT_COLOR;
use crate::error::{ExportError, Result};

/// Which page the input HTML is, i.e. which pipeline runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Timetable,
    Calendar,
}

impl PageKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "timetable" | "grid" => Some(PageKind::Timetable),
            "calendar" | "month" => Some(PageKind::Calendar),
            _ => None,
        }
    }

    /// Naming contract a page gets unless the caller overrides it.
    pub fn default_filename(self) -> FilenameContract {
        match self {
            PageKind::Timetable => FilenameContract::Timetable,
            PageKind::Calendar => FilenameContract::Calendar,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilenameContract {
    /// `calendar_<YYYY>_<M>.csv`
    Calendar,
    /// `timetable_<YYYY>_<Q>Q.json`
    Timetable,
    /// `timetable.json`
    Static,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonFormat {
    #[default]
    Pretty,
    Compact,
}

impl JsonFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Some(JsonFormat::Pretty),
            "compact" | "min" => Some(JsonFormat::Compact),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    #[default]
    Download,
    Clipboard,
}

/// Per-run export configuration. Immutable once a run starts; every field is
/// resolved before it reaches an extractor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub format: JsonFormat,
    /// Hex color for entries (and placeholders) with no color of their own. Not validated.
    pub default_color: String,
    pub include_empty_cells: bool,
    pub include_meta: bool,
    pub output_type: OutputType,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: JsonFormat::Pretty,
            default_color: s!(DEFAULT_COLOR),
            include_empty_cells: false,
            include_meta: true,
            output_type: OutputType::Download,
        }
    }
}

impl ExportOptions {
    /// Read a TOML options file. Keys left out take their default.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let opts: ExportOptions = toml::from_str(text)?;
        logd!("Options: loaded {:?}", opts);
        Ok(opts)
    }

    pub fn set_format(&mut self, v: &str) -> Result<()> {
        self.format = JsonFormat::parse(v)
            .ok_or_else(|| ExportError::Args(format!("Unknown format: {v}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_popup_store() {
        let o = ExportOptions::default();
        assert_eq!(o.format, JsonFormat::Pretty);
        assert_eq!(o.default_color, "#ff6b6b");
        assert!(!o.include_empty_cells);
        assert!(o.include_meta);
        assert_eq!(o.output_type, OutputType::Download);
    }

    #[test]
    fn partial_toml_fills_from_defaults() {
        let o = ExportOptions::from_toml("format = \"compact\"\ninclude_meta = false\n").unwrap();
        assert_eq!(o.format, JsonFormat::Compact);
        assert!(!o.include_meta);
        assert_eq!(o.default_color, DEFAULT_COLOR);
        assert_eq!(o.output_type, OutputType::Download);
    }

    #[test]
    fn unknown_enum_value_is_rejected() {
        assert!(ExportOptions::from_toml("output_type = \"printer\"").is_err());
        let mut o = ExportOptions::default();
        assert!(o.set_format("yaml").is_err());
        o.set_format("Compact").unwrap();
        assert_eq!(o.format, JsonFormat::Compact);
    }

    #[test]
    fn page_kind_parse_and_default_contract() {
        assert_eq!(PageKind::parse("Calendar"), Some(PageKind::Calendar));
        assert_eq!(PageKind::parse("grid"), Some(PageKind::Timetable));
        assert_eq!(PageKind::parse("players"), None);
        assert_eq!(PageKind::Calendar.default_filename(), FilenameContract::Calendar);
        assert_eq!(PageKind::Timetable.default_filename(), FilenameContract::Timetable);
    }
}
