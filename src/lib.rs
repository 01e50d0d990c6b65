// src/lib.rs
//! Timetable / calendar export for saved portal pages.
//!
//! ```text
//! html ─▶ specs::timetable::extract ─▶ json::to_json        ─▶ runner::deliver
//!      └▶ specs::calendar::extract  ─▶ csv::calendar_to_csv ─┘
//!      └▶ specs::page_info::filename ────────────────────────┘
//! ```

#[macro_use]
pub mod macros;
#[macro_use]
pub mod logging;

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod specs;

pub mod csv;
pub mod file;
pub mod json;
pub mod runner;

pub use config::options::{ExportOptions, FilenameContract, JsonFormat, OutputType, PageKind};
pub use data::{CalendarEntry, DayOfWeek, Extracted, Issue, SkipReason, TimetableEntry};
pub use error::ExportError;
