// src/specs/mod.rs
//! # Page “specs”
//!
//! One module per portal page. Each spec encodes *where the ground truth lives
//! in the markup* and *how to read it tolerantly*.
//!
//! ## What lives here
//! - **Pure tree reading** over an already-parsed `scraper::Html`.
//! - **Selector choice & precedence** (e.g. `p.teacher` before any plain `<p>`,
//!   date picker before toolbar title).
//! - **Shaping** into the canonical records of `crate::data`.
//!
//! ## What does **not** live here
//! - Serialization (`json`, `csv`), filesystem or stdout (`file`, `runner`).
//! - Option resolution: specs get a complete `ExportOptions` or none at all.
//!
//! ## Conventions & invariants
//! - A spec never fails. A missing page structure is an empty result with a
//!   `StructureNotFound` issue; a bad item is skipped, logged, and the walk goes on.
//! - Selectors live in `config::consts`, not inline.
//! - Runs are stateless: the same tree and options always give the same records.
//!
//! ## Current specs
//! - `timetable` – period × day grid → `TimetableEntry`.
//! - `calendar` – month view labels → `CalendarEntry`.
//! - `page_info` – year/month/quarter indicators → export filename.
pub mod calendar;
pub mod page_info;
pub mod timetable;
