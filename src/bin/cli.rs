// src/bin/cli.rs
use color_eyre::eyre::{Result, WrapErr};

use timetable_export::cli::{self, Command, HELP};
use timetable_export::runner::{self, Delivered};
use timetable_export::logging;

fn main() -> Result<()> {
    color_eyre::install()?;

    let params = match cli::parse_args(std::env::args().skip(1))? {
        Command::Help => {
            eprint!("{HELP}");
            return Ok(());
        }
        Command::Run(p) => p,
    };

    logging::init(params.verbose, params.log_file.as_deref()).wrap_err("opening log file")?;

    let (rendered, delivered) = runner::run(&params).wrap_err("export failed")?;
    if let Some(n) = rendered.notice() {
        eprintln!("{n}");
    }
    match delivered {
        Delivered::File(path) => {
            eprintln!("Wrote {} records to {}", rendered.count, path.display())
        }
        Delivered::Stdout => eprintln!("Copied {} records to stdout", rendered.count),
    }
    Ok(())
}
