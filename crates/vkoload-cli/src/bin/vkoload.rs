//! CLI entrypoint for the vko_tracer launcher.

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use vkoload_cli::config::{self, Overrides};
use vkoload_cli::probe;
use vkoload_cli::structured_log::{LogEmitter, LogEntry, LogLevel};
use vkoload_loader::invoker::{self, InvokeObserver};

/// Loads the vko_tracer rendering library and invokes its render export.
#[derive(Debug, Parser)]
#[command(name = "vkoload")]
#[command(about = "Launches the vko_tracer rendering library")]
struct Cli {
    /// Library stem, file name, or path to load (default: vko_tracer).
    #[arg(long)]
    library: Option<String>,

    /// Exported symbol to invoke (default: render).
    #[arg(long)]
    symbol: Option<String>,

    /// Resolve all symbols at load time instead of lazily.
    #[arg(long)]
    eager: bool,

    /// Append structured JSONL launch events to this file.
    #[arg(long)]
    log_json: Option<PathBuf>,

    /// Report load/resolve status as JSON without invoking.
    #[arg(long)]
    probe: bool,
}

/// Prints the launcher's console lines and mirrors them into the event log.
struct ConsoleObserver {
    emitter: Option<LogEmitter<File>>,
}

impl ConsoleObserver {
    fn log(&mut self, entry: LogEntry) {
        if let Some(emitter) = &mut self.emitter {
            if let Err(err) = emitter.emit(&entry) {
                eprintln!("vkoload: event log write failed: {err}");
                self.emitter = None;
            }
        }
    }
}

impl InvokeObserver for ConsoleObserver {
    fn loading(&mut self, library: &str) {
        println!("Loading dynamic library");
        self.log(LogEntry::new(LogLevel::Info, "load").with_library(library));
    }

    fn invoking(&mut self, symbol: &str) {
        println!("Calling render function");
        self.log(LogEntry::new(LogLevel::Info, "invoke").with_symbol(symbol));
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let overrides = Overrides {
        library: cli.library,
        symbol: cli.symbol,
        eager: cli.eager,
    };
    let plan = config::resolve_plan(&overrides);

    if cli.probe {
        let report = probe::probe(&plan);
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("vkoload: failed to serialize probe report: {err}");
                return ExitCode::from(1);
            }
        }
        return ExitCode::from(report.exit_code());
    }

    let emitter = match &cli.log_json {
        Some(path) => match LogEmitter::to_file(path) {
            Ok(emitter) => Some(emitter),
            Err(err) => {
                eprintln!("vkoload: cannot open event log {}: {err}", path.display());
                return ExitCode::from(1);
            }
        },
        None => None,
    };
    let mut observer = ConsoleObserver { emitter };

    match invoker::run_with(&plan, &mut observer) {
        Ok(()) => {
            observer.log(
                LogEntry::new(LogLevel::Info, "done")
                    .with_library(&plan.library)
                    .with_symbol(&plan.symbol),
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            observer.log(
                LogEntry::new(LogLevel::Error, err.stage())
                    .with_library(&plan.library)
                    .with_symbol(&plan.symbol)
                    .with_detail(err.to_string()),
            );
            eprintln!("{err}");
            ExitCode::from(1)
        }
    }
}
