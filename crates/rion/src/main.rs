use std::{io::IsTerminal, process::ExitCode};

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use rion::error::EX_ERROR;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    #[command(flatten)]
    args: rion::commands::Args,
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(std::io::stdout().is_terminal())
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .try_init()
        .into_diagnostic()
}

fn main() -> ExitCode {
    better_panic::install();

    let cli = Cli::parse();

    if let Err(err) = init_tracing() {
        eprintln!("{:?}", err);
        return ExitCode::from(EX_ERROR);
    }

    match cli.args.into_command().and_then(|command| command.handle()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.exit_code();
            eprintln!("{:?}", miette::Report::new(err));
            ExitCode::from(code)
        }
    }
}
