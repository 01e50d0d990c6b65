// src/specs/calendar.rs
//! Scraping *spec* for the month calendar.
//!
//! Each class is one anchor (`a.c-timetable-usage-guide-item-class`) whose title
//! packs every field into a single string, segments separated by ideographic spaces:
//!
//! ```text
//! 電磁気学Ⅰ　３限 13:00-14:30　(情)1401講義室　許　宗焄
//! subject    time segment      location       teacher (rest, space-joined)
//! ```
//!
//! The date is not in the label at all; it comes from `data-date` on the enclosing `td`.
//! Cells marked `fc-day-other` belong to the neighbouring months and are left out.
use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::config::consts::*;
use crate::core::html::{closest, first, has_class, text_of};
use crate::data::{CalendarEntry, Extracted, SkipReason};

const COMPONENT: &str = "calendar";

static LABEL: LazyLock<Selector> = selector!(CAL_LABEL);
static TITLE: LazyLock<Selector> = selector!(CAL_TITLE);

static SEGMENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("{CAL_DELIM}+")).unwrap_or_else(|e| panic!("segment pattern: {e}"))
});
// ASCII digits only: full-width "３限" must not read as a time.
static TIME_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,2}:[0-9]{2})-([0-9]{1,2}:[0-9]{2})")
        .unwrap_or_else(|e| panic!("time pattern: {e}"))
});

/// Decode every label on the page, in document order.
pub fn extract(doc: &Html) -> Extracted<CalendarEntry> {
    let mut out = Extracted::default();
    let mut seen = 0usize;

    for (ix, label) in doc.select(&LABEL).enumerate() {
        seen += 1;
        match read_label(label) {
            Ok(entry) => {
                logd!(
                    "Calendar: label {ix} → {} {}-{}",
                    entry.date,
                    entry.start_time,
                    entry.end_time
                );
                out.records.push(entry);
            }
            Err(reason) => out.skip(COMPONENT, ix, reason),
        }
    }

    logd!(
        "Calendar: {} labels, {} entries, {} skipped",
        seen,
        out.records.len(),
        out.skipped()
    );
    out
}

fn read_label(label: ElementRef<'_>) -> Result<CalendarEntry, SkipReason> {
    let cell = closest(label, CAL_CELL_TAG).ok_or(SkipReason::MissingCell)?;
    if has_class(cell, CAL_OTHER_MONTH) {
        return Err(SkipReason::OtherMonth);
    }
    // Verbatim; only an absent or empty attribute counts as missing
    let date = cell
        .value()
        .attr(CAL_DATE_ATTR)
        .filter(|d| !d.is_empty())
        .ok_or(SkipReason::MissingDate)?;

    let title = first(label, &TITLE).ok_or(SkipReason::MissingTitle)?;
    let text = text_of(title);
    if text.is_empty() {
        return Err(SkipReason::EmptyTitle);
    }

    parse_label_text(&text).map(|fields| CalendarEntry {
        date: s!(date),
        start_time: fields.start_time,
        end_time: fields.end_time,
        subject: fields.subject,
        location: fields.location,
        teacher: fields.teacher,
    })
}

/// Fields carried by the label text itself (everything but the date).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelFields {
    pub subject: String,
    pub start_time: String,
    pub end_time: String,
    pub location: Option<String>,
    pub teacher: Option<String>,
}

/// Split a label on ideographic spaces and capture its fields.
///
/// Times are taken verbatim; an end before the start is passed through.
pub fn parse_label_text(text: &str) -> Result<LabelFields, SkipReason> {
    let parts: Vec<&str> = SEGMENTS.split(text.trim()).collect();
    if parts.len() < 2 {
        return Err(SkipReason::TooFewSegments);
    }

    let caps = TIME_RANGE.captures(parts[1]).ok_or(SkipReason::MalformedTime)?;
    let (start_time, end_time) = (s!(&caps[1]), s!(&caps[2]));
    if end_before_start(&start_time, &end_time) {
        logd!("Calendar: end {end_time} before start {start_time}, kept as is");
    }

    let location = parts.get(2).map(|p| s!(*p));
    let teacher = if parts.len() > 3 {
        Some(s!(parts[3..].join(" ").trim()))
    } else {
        None
    };

    Ok(LabelFields {
        subject: s!(parts[0]),
        start_time,
        end_time,
        location,
        teacher,
    })
}

fn end_before_start(start: &str, end: &str) -> bool {
    fn minutes(t: &str) -> Option<u32> {
        let (h, m) = t.split_once(':')?;
        Some(h.parse::<u32>().ok()? * 60 + m.parse::<u32>().ok()?)
    }
    matches!((minutes(start), minutes(end)), (Some(s), Some(e)) if e < s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_label() {
        let f = parse_label_text(
            "Physics I\u{3000}3rd period 13:00-14:30\u{3000}(Bldg)1401\u{3000}Prof. X\u{3000}Y",
        )
        .unwrap();
        assert_eq!(f.subject, "Physics I");
        assert_eq!(f.start_time, "13:00");
        assert_eq!(f.end_time, "14:30");
        assert_eq!(f.location.as_deref(), Some("(Bldg)1401"));
        assert_eq!(f.teacher.as_deref(), Some("Prof. X Y"));
    }

    #[test]
    fn two_segments_only() {
        let f = parse_label_text("Seminar\u{3000}9:00-10:30").unwrap();
        assert_eq!(f.start_time, "9:00");
        assert_eq!(f.location, None);
        assert_eq!(f.teacher, None);
    }

    #[test]
    fn runs_of_delimiters_collapse() {
        let f = parse_label_text("A\u{3000}\u{3000}1:00-2:00\u{3000}\u{3000}\u{3000}Room").unwrap();
        assert_eq!(f.location.as_deref(), Some("Room"));
    }

    #[test]
    fn rejects_bad_labels() {
        assert_eq!(parse_label_text("Only subject 13:00-14:30"), Err(SkipReason::TooFewSegments));
        assert_eq!(
            parse_label_text("A\u{3000}３限 １３:００-１４:３０"),
            Err(SkipReason::MalformedTime)
        );
        assert_eq!(parse_label_text("A\u{3000}13-14"), Err(SkipReason::MalformedTime));
    }

    #[test]
    fn reversed_times_pass_through() {
        let f = parse_label_text("Late\u{3000}23:00-01:00").unwrap();
        assert_eq!((f.start_time.as_str(), f.end_time.as_str()), ("23:00", "01:00"));
        assert!(end_before_start("23:00", "01:00"));
        assert!(!end_before_start("9:00", "10:30"));
    }
}
