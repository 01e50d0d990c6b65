// src/runner.rs
//! One export run: page HTML in, text out, delivered the way the options say.
//!
//! The library side (`render`) is pure; `deliver` is the only place that touches
//! the filesystem or stdout.
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use scraper::Html;

use crate::cli::Params;
use crate::config::options::{ExportOptions, FilenameContract, OutputType, PageKind};
use crate::data::Issue;
use crate::error::{ExportError, Result};
use crate::specs::{calendar, page_info, timetable};
use crate::{csv, file, json};

/// Serialized export, ready for the host to save or copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub filename: String,
    pub count: usize,
    pub issues: Vec<Issue>,
}

impl Rendered {
    /// A notice for the user when the page did not look like the expected page at all.
    pub fn notice(&self) -> Option<String> {
        self.issues
            .iter()
            .find(|i| matches!(i, Issue::StructureNotFound { .. }))
            .map(|i| format!("Page structure not recognised: {i}"))
    }
}

/// Where the text went.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delivered {
    File(PathBuf),
    Stdout,
}

/// Extract and serialize one page.
///
/// A calendar month with no classes is `NothingToExport` (nothing useful to import);
/// an empty timetable still renders `[]`.
pub fn render(
    doc: &Html,
    page: PageKind,
    contract: FilenameContract,
    opts: &ExportOptions,
) -> Result<Rendered> {
    let filename = page_info::filename(doc, contract);

    let rendered = match page {
        PageKind::Timetable => {
            let ex = timetable::extract(doc, opts);
            Rendered {
                text: json::to_json(&ex.records, opts.format)?,
                filename,
                count: ex.len(),
                issues: ex.issues,
            }
        }
        PageKind::Calendar => {
            let ex = calendar::extract(doc);
            if ex.is_empty() {
                logw!("Calendar: no classes found for this month");
                return Err(ExportError::NothingToExport("no classes found for this month"));
            }
            Rendered {
                text: csv::calendar_to_csv(&ex.records)?,
                filename,
                count: ex.len(),
                issues: ex.issues,
            }
        }
    };

    logf!(
        "Render: page={:?} records={} issues={} file={}",
        page,
        rendered.count,
        rendered.issues.len(),
        rendered.filename
    );
    Ok(rendered)
}

/// Hand the text to its destination.
pub fn deliver<W: Write>(
    rendered: &Rendered,
    output: OutputType,
    out: Option<&Path>,
    stdout: W,
) -> Result<Delivered> {
    match output {
        OutputType::Download => {
            let path = file::resolve_out_path(out, &rendered.filename)?;
            file::write_text(&path, &rendered.text)?;
            Ok(Delivered::File(path))
        }
        OutputType::Clipboard => {
            let mut w = stdout;
            w.write_all(rendered.text.as_bytes())?;
            w.flush()?;
            Ok(Delivered::Stdout)
        }
    }
}

pub fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(p) => Ok(std::fs::read_to_string(p)?),
        None => {
            let mut s = s!();
            io::stdin().read_to_string(&mut s)?;
            Ok(s)
        }
    }
}

/// Full CLI run.
pub fn run(params: &Params) -> Result<(Rendered, Delivered)> {
    let html = read_input(params.input.as_deref())?;
    logd!("Run: read {} bytes of HTML", html.len());
    let doc = Html::parse_document(&html);

    let rendered = render(&doc, params.page, params.filename, &params.options)?;
    if let Some(n) = rendered.notice() {
        logw!("{n}");
    }

    let delivered = deliver(
        &rendered,
        params.options.output_type,
        params.out.as_deref(),
        io::stdout().lock(),
    )?;
    Ok((rendered, delivered))
}
