use crate::demo::{run_assess, run_demo, run_profiles, AssessArgs, DemoArgs};
use clap::{Parser, Subcommand};
use readiness_scout::config::AppConfig;
use readiness_scout::error::AppError;
use readiness_scout::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "readiness-scout",
    about = "Score organizations for AI readiness from collected evidence",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assess one evidence bundle and print the result as JSON
    Assess(AssessArgs),
    /// List registered scoring profiles and their weights
    Profiles,
    /// Assess bundled sample organizations and print a summary
    Demo(DemoArgs),
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(
        ?config.environment,
        default_profile = %config.scoring.default_profile,
        generative = config.generative.is_some(),
        "configuration loaded"
    );

    match cli.command {
        Command::Assess(args) => run_assess(&config, args).await,
        Command::Profiles => run_profiles(),
        Command::Demo(args) => run_demo(&config, args).await,
    }
}
