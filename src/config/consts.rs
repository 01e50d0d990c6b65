// src/config/consts.rs
//! Markup contract of the portal pages. If the portal moves things, this is the file to touch.

// Timetable grid (period × day)
pub const GRID_TABLE: &str = "table.schedule-table";
pub const GRID_BODY: &str = "tbody";
pub const GRID_DAYS: usize = 7;
pub const GRID_ITEM: &str = "ul > li";
pub const GRID_TITLE: &str = "h4";
pub const GRID_TEACHER: &[&str] = &["p.teacher", "p:not(.credits):not(.classroom-info):not(.memo)"];
pub const GRID_CLASSROOM: &[&str] = &["span.classroom", "p > span", ".classroom-info"];
pub const GRID_MEMO: &str = ".memo";
pub const COLOR_ATTR: &str = "data-color";
pub const STYLE_ATTR: &str = "style";
pub const STYLE_BG_COLOR: &str = "background-color";
pub const STYLE_BG: &str = "background";

/// Day cells carry `id="week1"` … `id="week7"`.
pub fn day_cell_selector(day: usize) -> String {
    format!("td#week{day}")
}

// Calendar (month view)
pub const CAL_LABEL: &str = "a.c-timetable-usage-guide-item-class";
pub const CAL_CELL_TAG: &str = "td";
pub const CAL_OTHER_MONTH: &str = "fc-day-other";
pub const CAL_DATE_ATTR: &str = "data-date";
pub const CAL_TITLE: &str = ".fc-event-title";
/// Ideographic space; ordinary spaces stay inside segments.
pub const CAL_DELIM: char = '\u{3000}';

// Page state used for filenames
pub const DATE_PICKER: &str = "#datePicker";
pub const TOOLBAR_TITLE: &str = ".fc-toolbar-title";
pub const YEAR_LABEL: &str = "p.year";
pub const ACTIVE_QUARTER: &str = "p.c-half-btn a.is-active";
pub const STATIC_FILE: &str = "timetable.json";

// Export
pub const DEFAULT_COLOR: &str = "#ff6b6b";
pub const BOM: char = '\u{FEFF}';
pub const CSV_SEP: char = ',';
pub const CSV_HEADER: [&str; 9] = [
    "Subject",
    "Start Date",
    "Start Time",
    "End Date",
    "End Time",
    "All Day Event",
    "Description",
    "Location",
    "Private",
];
pub const CSV_ALL_DAY: &str = "FALSE";
pub const CSV_PRIVATE: &str = "TRUE";
