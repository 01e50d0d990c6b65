// src/specs/page_info.rs
//! Reads the page's own idea of "which month / which term" for export filenames.
//!
//! Never fails: every source is optional, and the clock is the last resort.
use std::sync::LazyLock;

use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use scraper::{Html, Selector};

use crate::config::consts::*;
use crate::config::options::FilenameContract;
use crate::core::html::{attr, text_of};
use crate::core::sanitize::digit_value;

static DATE_PICKER_SEL: LazyLock<Selector> = selector!(DATE_PICKER);
static TOOLBAR_SEL: LazyLock<Selector> = selector!(TOOLBAR_TITLE);
static YEAR_SEL: LazyLock<Selector> = selector!(YEAR_LABEL);
static QUARTER_SEL: LazyLock<Selector> = selector!(ACTIVE_QUARTER);

static YEAR_MONTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{4})年([0-9]{1,2})月")
        .unwrap_or_else(|e| panic!("year-month pattern: {e}"))
});
static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}").unwrap_or_else(|e| panic!("year pattern: {e}")));

/// Filename for `contract`, using the system date when the page says nothing.
pub fn filename(doc: &Html, contract: FilenameContract) -> String {
    filename_on(doc, contract, Local::now().date_naive())
}

/// Same as [`filename`] with an explicit "today".
pub fn filename_on(doc: &Html, contract: FilenameContract, today: NaiveDate) -> String {
    let name = match contract {
        FilenameContract::Calendar => {
            let (year, month) = displayed_month(doc).unwrap_or((today.year(), today.month()));
            format!("calendar_{year}_{month}.csv")
        }
        FilenameContract::Timetable => {
            let year = academic_year(doc).unwrap_or(today.year());
            let quarter = active_quarter(doc).unwrap_or(1);
            format!("timetable_{year}_{quarter}Q.json")
        }
        FilenameContract::Static => s!(STATIC_FILE),
    };
    logd!("Filename: {:?} → {}", contract, name);
    name
}

/// `YYYY年M月` from the date picker's value, else from the toolbar title.
pub fn displayed_month(doc: &Html) -> Option<(i32, u32)> {
    let picker = doc
        .select(&DATE_PICKER_SEL)
        .next()
        .and_then(|el| attr(el, "value"))
        .and_then(parse_year_month);
    if picker.is_some() {
        logd!("Filename: month from date picker");
        return picker;
    }

    let title = doc
        .select(&TOOLBAR_SEL)
        .next()
        .map(text_of)
        .and_then(|t| parse_year_month(&t));
    if title.is_some() {
        logd!("Filename: month from toolbar title");
    }
    title
}

fn parse_year_month(s: &str) -> Option<(i32, u32)> {
    let caps = YEAR_MONTH.captures(s)?;
    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    Some((year, month))
}

/// First 4-digit run in the year label.
pub fn academic_year(doc: &Html) -> Option<i32> {
    let label = doc.select(&YEAR_SEL).next().map(text_of)?;
    YEAR.find(&label)?.as_str().parse().ok()
}

/// First 1–4 digit (ASCII or full-width) in the active quarter tab, e.g. `３Ｑ` → 3.
pub fn active_quarter(doc: &Html) -> Option<u32> {
    let tab = doc.select(&QUARTER_SEL).next().map(text_of)?;
    tab.chars()
        .filter_map(digit_value)
        .find(|d| (1..=4).contains(d))
}
