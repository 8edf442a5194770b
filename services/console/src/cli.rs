use crate::demo::{run_demo, DemoArgs};
use crate::session::{run_session, SessionArgs};
use clap::{Parser, Subcommand};
use disaster_waste::config::AppConfig;
use disaster_waste::error::AppError;
use disaster_waste::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Disaster Waste Console",
    about = "Register, process, and dispatch post-disaster waste from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the interactive waste management menu (default command)
    Session(SessionArgs),
    /// Run a scripted walkthrough of registration, transport, and processing
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Session(SessionArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(
        ?config.environment,
        unique_ids = config.registry.enforce_unique_ids,
        "console starting"
    );

    match command {
        Command::Session(args) => run_session(&config, args),
        Command::Demo(args) => run_demo(&config, args),
    }
}
