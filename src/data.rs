// src/data.rs
//! Canonical records produced by the extractors, plus the per-run diagnostics
//! that travel alongside them.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Day column of the grid, in the portal's locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    #[serde(rename = "月")]
    Mon,
    #[serde(rename = "火")]
    Tue,
    #[serde(rename = "水")]
    Wed,
    #[serde(rename = "木")]
    Thu,
    #[serde(rename = "金")]
    Fri,
    #[serde(rename = "土")]
    Sat,
    #[serde(rename = "日")]
    Sun,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Mon,
        DayOfWeek::Tue,
        DayOfWeek::Wed,
        DayOfWeek::Thu,
        DayOfWeek::Fri,
        DayOfWeek::Sat,
        DayOfWeek::Sun,
    ];

    /// 1-based column index as used by the `td#weekN` ids.
    pub fn from_index(ix: usize) -> Option<Self> {
        ix.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn index(self) -> usize {
        self as usize + 1
    }

    pub fn symbol(self) -> &'static str {
        match self {
            DayOfWeek::Mon => "月",
            DayOfWeek::Tue => "火",
            DayOfWeek::Wed => "水",
            DayOfWeek::Thu => "木",
            DayOfWeek::Fri => "金",
            DayOfWeek::Sat => "土",
            DayOfWeek::Sun => "日",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One class in one grid cell. A cell can hold several of these.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableEntry {
    pub day_of_week: DayOfWeek,
    pub period: u32,
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classroom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl TimetableEntry {
    /// Stand-in for a cell with no classes.
    pub fn placeholder(period: u32, day_of_week: DayOfWeek, color: &str) -> Self {
        Self {
            day_of_week,
            period,
            subject: s!(),
            teacher: None,
            classroom: None,
            color: Some(s!(color)),
            memo: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.subject.is_empty()
    }
}

/// One event decoded from a calendar label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    /// `YYYY-MM-DD`, verbatim from the cell's `data-date`.
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher: Option<String>,
}

/* ---------------- Diagnostics ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Grid item without a usable `h4` title.
    MissingSubject,
    /// Label not inside any table cell.
    MissingCell,
    /// Label sits in a cell belonging to the previous/next month.
    OtherMonth,
    MissingDate,
    MissingTitle,
    EmptyTitle,
    TooFewSegments,
    MalformedTime,
}

impl SkipReason {
    /// Navigation artifacts are expected on every page; everything else is worth a warning.
    pub fn is_expected(self) -> bool {
        matches!(self, SkipReason::OtherMonth)
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            SkipReason::MissingSubject => "no subject title",
            SkipReason::MissingCell => "no enclosing cell",
            SkipReason::OtherMonth => "outside the displayed month",
            SkipReason::MissingDate => "cell has no date attribute",
            SkipReason::MissingTitle => "no title element",
            SkipReason::EmptyTitle => "title text is empty",
            SkipReason::TooFewSegments => "fewer than 2 segments",
            SkipReason::MalformedTime => "no H:MM-H:MM time range",
        };
        f.write_str(msg)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Issue {
    StructureNotFound {
        component: &'static str,
        what: &'static str,
    },
    ItemSkipped {
        component: &'static str,
        index: usize,
        reason: SkipReason,
    },
}

impl Issue {
    pub fn component(&self) -> &'static str {
        match self {
            Issue::StructureNotFound { component, .. } | Issue::ItemSkipped { component, .. } => {
                *component
            }
        }
    }

    /// Push the issue through the log facade, target = component.
    pub fn emit(&self) {
        match self {
            Issue::StructureNotFound { component, what } => {
                ::log::warn!(target: *component, "structure not found: {what}");
            }
            Issue::ItemSkipped { component, index, reason } if reason.is_expected() => {
                ::log::debug!(target: *component, "item={index} skipped: {reason}");
            }
            Issue::ItemSkipped { component, index, reason } => {
                ::log::warn!(target: *component, "item={index} skipped: {reason}");
            }
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::StructureNotFound { component, what } => {
                write!(f, "[{component}] {what} not found")
            }
            Issue::ItemSkipped { component, index, reason } => {
                write!(f, "[{component}] item {index} skipped: {reason}")
            }
        }
    }
}

/// Output of one extraction run. `issues` is advisory and never alters `records`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extracted<T> {
    pub records: Vec<T>,
    pub issues: Vec<Issue>,
}

impl<T> Default for Extracted<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            issues: Vec::new(),
        }
    }
}

impl<T> Extracted<T> {
    /// Empty result carrying a single structure-not-found notice.
    pub fn not_found(component: &'static str, what: &'static str) -> Self {
        let mut out = Self::default();
        out.report(Issue::StructureNotFound { component, what });
        out
    }

    pub fn skip(&mut self, component: &'static str, index: usize, reason: SkipReason) {
        self.report(Issue::ItemSkipped { component, index, reason });
    }

    fn report(&mut self, issue: Issue) {
        issue.emit();
        self.issues.push(issue);
    }

    pub fn structure_found(&self) -> bool {
        !self.issues.iter().any(|i| matches!(i, Issue::StructureNotFound { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.issues.iter().filter(|i| matches!(i, Issue::ItemSkipped { .. })).count()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_index_round_trips_through_week_ids() {
        for ix in 1..=7 {
            assert_eq!(DayOfWeek::from_index(ix).unwrap().index(), ix);
        }
        assert_eq!(DayOfWeek::from_index(0), None);
        assert_eq!(DayOfWeek::from_index(8), None);
        assert_eq!(DayOfWeek::from_index(5).unwrap().symbol(), "金");
    }

    #[test]
    fn not_found_is_empty_and_flagged() {
        let ex: Extracted<TimetableEntry> =
            Extracted::not_found("timetable", "table.schedule-table");
        assert!(ex.is_empty());
        assert!(!ex.structure_found());
        assert_eq!(ex.skipped(), 0);
        assert_eq!(ex.issues[0].component(), "timetable");
    }

    #[test]
    fn placeholder_carries_color_only() {
        let p = TimetableEntry::placeholder(3, DayOfWeek::Wed, "#ff6b6b");
        assert!(p.is_placeholder());
        assert_eq!(p.color.as_deref(), Some("#ff6b6b"));
        assert!(p.teacher.is_none() && p.classroom.is_none() && p.memo.is_none());
    }
}
