use std::process::ExitCode;

use clap::Parser;

use gitmess_installer::{cli, commands, config, logging};

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    let log = logging::Logger::new(args.verbose);
    let spec = config::InstallSpec::from_cli(&args);

    match commands::install::run(&spec, args.dry_run, &log) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log.error(&err.to_string());
            if let Some(hint) = err.remediation() {
                log.info(&hint);
            }
            log.error("Installation failed");
            ExitCode::from(err.exit_code())
        }
    }
}
