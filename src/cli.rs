// src/cli.rs
use std::path::PathBuf;

use crate::config::options::{ExportOptions, FilenameContract, OutputType, PageKind};
use crate::error::{ExportError, Result};

pub const HELP: &str = "\
Usage: timetable_export --page <timetable|calendar> [options]

  --page <kind>          timetable (grid → JSON) or calendar (month → CSV)
  -i, --input <file|->   saved page HTML (default: stdin)
  --options <file>       TOML options file (missing keys use defaults)
  --format <f>           pretty | compact (JSON only)
  --default-color <hex>  color for entries without one
  --include-empty        emit a placeholder for empty grid cells
  --no-meta              drop teacher/classroom/memo
  --clipboard            print the export to stdout instead of writing a file
  --static-name          name the timetable export timetable.json
  -o, --out <path>       output file or directory (default: cwd)
  --log-file <path>      append debug log to this file
  -v, --verbose          debug logging on stderr
  -h, --help             this text
";

/// Everything one run needs, resolved from flags and the options file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub page: PageKind,
    pub input: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub filename: FilenameContract,
    pub options: ExportOptions,
    pub log_file: Option<PathBuf>,
    pub verbose: bool,
}

pub enum Command {
    Run(Params),
    Help,
}

/// Parse arguments (program name already stripped).
///
/// The options file is applied first; flags override it regardless of order.
pub fn parse_args<I, S>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut page: Option<PageKind> = None;
    let mut input = None;
    let mut out = None;
    let mut options_file: Option<PathBuf> = None;
    let mut static_name = false;
    let mut log_file = None;
    let mut verbose = false;
    let mut overrides: Vec<Override> = Vec::new();

    let mut args = args.into_iter().map(Into::into);
    while let Some(a) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .ok_or_else(|| ExportError::Args(format!("Missing value for {flag}")))
        };
        match a.as_str() {
            "--page" => {
                let v = value("--page")?;
                page = Some(
                    PageKind::parse(&v)
                        .ok_or_else(|| ExportError::Args(format!("Unknown page: {v}")))?,
                );
            }
            "-i" | "--input" => {
                let v = value("--input")?;
                input = if v == "-" { None } else { Some(PathBuf::from(v)) };
            }
            "-o" | "--out" => out = Some(PathBuf::from(value("--out")?)),
            "--options" => options_file = Some(PathBuf::from(value("--options")?)),
            "--format" => overrides.push(Override::Format(value("--format")?)),
            "--default-color" => overrides.push(Override::Color(value("--default-color")?)),
            "--include-empty" => overrides.push(Override::IncludeEmpty),
            "--no-meta" => overrides.push(Override::NoMeta),
            "--clipboard" => overrides.push(Override::Clipboard),
            "--static-name" => static_name = true,
            "--log-file" => log_file = Some(PathBuf::from(value("--log-file")?)),
            "-v" | "--verbose" => verbose = true,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(ExportError::Args(format!("Unknown arg: {a}"))),
        }
    }

    let page = page.ok_or_else(|| ExportError::Args(s!("Specify --page timetable|calendar")))?;

    let mut options = match &options_file {
        Some(p) => ExportOptions::load(p)?,
        None => ExportOptions::default(),
    };
    for o in overrides {
        o.apply(&mut options)?;
    }

    let filename = match (page, static_name) {
        (PageKind::Timetable, true) => FilenameContract::Static,
        (PageKind::Calendar, true) => {
            return Err(ExportError::Args(s!("--static-name only applies to --page timetable")));
        }
        (p, false) => p.default_filename(),
    };

    Ok(Command::Run(Params {
        page,
        input,
        out,
        filename,
        options,
        log_file,
        verbose,
    }))
}

enum Override {
    Format(String),
    Color(String),
    IncludeEmpty,
    NoMeta,
    Clipboard,
}

impl Override {
    fn apply(self, o: &mut ExportOptions) -> Result<()> {
        match self {
            Override::Format(v) => o.set_format(&v)?,
            Override::Color(v) => o.default_color = v,
            Override::IncludeEmpty => o.include_empty_cells = true,
            Override::NoMeta => o.include_meta = false,
            Override::Clipboard => o.output_type = OutputType::Clipboard,
        }
        Ok(())
    }
}
