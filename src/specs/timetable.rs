// src/specs/timetable.rs
//! Scraping *spec* for the weekly timetable grid.
//!
//! Layout:
//! - `table.schedule-table > tbody > tr`; the first row is the day header.
//! - Row N (1-based, header excluded) is period N.
//! - Day cells are `td#week1` … `td#week7`; a missing cell is simply skipped.
//! - Each class is a `ul > li` inside the cell, titled by its `h4`.
//!
//! Output order is row-major: period, then day, then document order in the cell.
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::*;
use crate::config::options::ExportOptions;
use crate::core::html::{attr, children_named, compile, first, first_of, non_empty_text};
use crate::core::{color, sanitize};
use crate::data::{DayOfWeek, Extracted, SkipReason, TimetableEntry};

const COMPONENT: &str = "timetable";

static TABLE: LazyLock<Selector> = selector!(GRID_TABLE);
static BODY: LazyLock<Selector> = selector!(GRID_BODY);
static ITEM: LazyLock<Selector> = selector!(GRID_ITEM);
static TITLE: LazyLock<Selector> = selector!(GRID_TITLE);
static MEMO: LazyLock<Selector> = selector!(GRID_MEMO);
static TEACHER: LazyLock<Vec<Selector>> =
    LazyLock::new(|| GRID_TEACHER.iter().map(|css| compile(css)).collect());
static CLASSROOM: LazyLock<Vec<Selector>> =
    LazyLock::new(|| GRID_CLASSROOM.iter().map(|css| compile(css)).collect());
static DAY_CELLS: LazyLock<[Selector; GRID_DAYS]> =
    LazyLock::new(|| std::array::from_fn(|i| compile(&day_cell_selector(i + 1))));

/// Walk the grid once and return its entries.
///
/// A page without the grid table or its `tbody` yields no records and a
/// `StructureNotFound` issue. A grid with only the header row is found but empty.
pub fn extract(doc: &Html, opts: &ExportOptions) -> Extracted<TimetableEntry> {
    let Some(table) = doc.select(&TABLE).next() else {
        return Extracted::not_found(COMPONENT, GRID_TABLE);
    };
    let Some(body) = first(table, &BODY) else {
        return Extracted::not_found(COMPONENT, GRID_BODY);
    };

    let mut out = Extracted::default();
    let mut item_ix = 0usize; // running index across the whole grid, for diagnostics

    // Skip the day-of-week header row
    for (row_ix, row) in children_named(body, "tr").skip(1).enumerate() {
        let period = row_ix as u32 + 1;

        for (day_sel, day) in DAY_CELLS.iter().zip(DayOfWeek::ALL) {
            let Some(cell) = first(row, day_sel) else {
                continue;
            };

            let items: Vec<ElementRef<'_>> = cell.select(&ITEM).collect();
            if items.is_empty() {
                if opts.include_empty_cells {
                    out.records.push(TimetableEntry::placeholder(period, day, &opts.default_color));
                }
                continue;
            }

            for li in items {
                match parse_item(li, period, day, opts) {
                    Some(entry) => out.records.push(entry),
                    None => out.skip(COMPONENT, item_ix, SkipReason::MissingSubject),
                }
                item_ix += 1;
            }
        }
    }

    logd!(
        "Timetable: {} entries, {} skipped",
        out.records.len(),
        out.skipped()
    );
    out
}

/// One `li` → one entry. `None` when there is no usable title.
fn parse_item(
    li: ElementRef<'_>,
    period: u32,
    day: DayOfWeek,
    opts: &ExportOptions,
) -> Option<TimetableEntry> {
    let subject = first(li, &TITLE).and_then(non_empty_text)?;

    // Metadata is suppressed outright when disabled, whatever the markup says
    let (teacher, classroom, memo) = if opts.include_meta {
        (
            first_of(li, &TEACHER).and_then(non_empty_text),
            first_of(li, &CLASSROOM).and_then(non_empty_text),
            first(li, &MEMO).and_then(non_empty_text),
        )
    } else {
        (None, None, None)
    };

    let style = li.value().attr(STYLE_ATTR).unwrap_or("");
    let inline = [
        sanitize::style_value(style, STYLE_BG_COLOR),
        sanitize::style_value(style, STYLE_BG).and_then(color::shorthand_color),
    ];
    let color = color::resolve(attr(li, COLOR_ATTR), inline, &opts.default_color);

    Some(TimetableEntry {
        day_of_week: day,
        period,
        subject,
        teacher,
        classroom,
        color: Some(color),
        memo,
    })
}
