use std::{path::PathBuf, process::exit, rc::Rc};

use clap::{ArgAction, Parser};
use linecheck::{display_error, read_lines, validate};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "linecheck")]
#[command(about = "Line validator for s-Java source files")]
#[command(version)]
struct Cli {
    /// Source file to validate
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Raise the log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

const VALID: i32 = 0;
const INVALID: i32 = 1;
const IO_FAILURE: i32 = 2;

fn verdict(code: i32) -> ! {
    println!("{}", code);
    exit(code)
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) if !error.use_stderr() => error.exit(),
        Err(error) => {
            eprintln!("{}", error);
            verdict(IO_FAILURE);
        }
    };

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    if let Err(error) = simple_logger::SimpleLogger::new().with_level(level).init() {
        eprintln!("Failed to start logger: {}", error);
    }

    let lines = match read_lines(&cli.file) {
        Ok(lines) => lines,
        Err(error) => {
            log::error!("failed to read {}: {}", cli.file.display(), error);
            verdict(IO_FAILURE);
        }
    };

    let file_name = cli
        .file
        .file_name()
        .map_or_else(|| cli.file.display().to_string(), |name| name.to_string_lossy().to_string());

    log::info!("validating {} ({} lines)", file_name, lines.len());

    match validate(&lines, Rc::new(file_name)) {
        Ok(()) => {
            log::info!("{} is valid", cli.file.display());
            verdict(VALID);
        }
        Err(error) => {
            log::error!("{}", error);
            eprintln!("{}", display_error(&error, &lines));
            verdict(INVALID);
        }
    }
}
