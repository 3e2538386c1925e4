//! docorder CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use docorder::cli::{Cli, CommandDispatcher};
use docorder::ui::{OutputMode, TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN, so a passing check prints nothing
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("docorder=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("docorder=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("docorder starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = TerminalUI::new(OutputMode::from_flags(cli.verbose, cli.quiet));

    let root = match cli.root.clone() {
        Some(root) => root,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                ui.diagnostic(&format!("Error: cannot determine current directory: {}", e));
                return ExitCode::from(1);
            }
        },
    };

    let dispatcher = CommandDispatcher::new(root);

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.diagnostic(&format!("Error: {:?}", e.into_anyhow()));
            ExitCode::from(1)
        }
    }
}
