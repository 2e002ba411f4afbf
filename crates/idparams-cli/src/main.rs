mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::commands::generate::Summary;
use crate::config::defaults::DefaultsConfig;
use crate::error::{CliError, Result};
use std::process::ExitCode;
use tracing::{debug, error, info};

fn main() -> ExitCode {
    let cli = match cli::parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version output go to stdout and count as success.
            let code = if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = e.print();
            return code;
        }
    };

    match run_app(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_app(cli: cli::Cli) -> Result<()> {
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("idparams v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Parsed command line: {:?}", &cli);

    let app_config = config::build_config(&cli, DefaultsConfig::default())?;

    match commands::generate::run(app_config, cli.quiet)? {
        Summary::Written(path) => info!("Parameters written to {:?}.", path),
        Summary::Listed => info!("Modification listing printed."),
        Summary::Rejected { diagnostics } => {
            info!("Options rejected with {} diagnostic(s).", diagnostics)
        }
    }
    Ok(())
}
