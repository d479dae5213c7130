mod options;

use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use options::Options;

fn main() -> ExitCode {
    let opts = Options::parse();
    init_logging(opts.debug);

    if opts.show_version {
        println!("closest version {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let Some(pattern) = opts.pattern else {
        // Usage goes to stdout; a missing pattern is still a failure.
        if let Err(e) = Options::command().print_help() {
            eprintln!("{e}");
        }
        return ExitCode::FAILURE;
    };

    match run(&pattern, opts.search_all, opts.use_regex) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", report(e.as_ref()));
            ExitCode::FAILURE
        }
    }
}

fn run(pattern: &str, search_all: bool, use_regex: bool) -> Result<(), Box<dyn Error>> {
    let results = closest::search(pattern)
        .regex(use_regex)
        .all(search_all)
        .run()?;

    debug!(
        levels = results.stats.levels,
        entries = results.stats.entries,
        elapsed = ?results.stats.duration,
        "search complete"
    );

    let mut out = io::stdout().lock();
    for path in results.paths() {
        writeln!(out, "{}", path.display())?;
    }
    out.flush()?;
    Ok(())
}

/// Logs go to stderr so stdout carries nothing but results.
/// `RUST_LOG` takes precedence over `--debug`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Error and its causes on one line, joined by `: `.
fn report(err: &(dyn Error + 'static)) -> String {
    let mut parts = vec![one_line(&err.to_string())];
    let mut source = err.source();
    while let Some(cause) = source {
        parts.push(one_line(&cause.to_string()));
        source = cause.source();
    }
    parts.join(": ")
}

// regex syntax errors render over several lines with a caret marker
fn one_line(msg: &str) -> String {
    msg.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
