use crate::demo::{run_academic, run_archetypes, run_demo, run_mvp, AcademicArgs, MvpArgs};
use crate::server;
use circular_score::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Circular Development Score",
    about = "Score build, reuse and no-build decisions from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate the academic CDS for one decision or a published case study
    Academic(AcademicArgs),
    /// Evaluate the six-dimension MVP score, optionally from an archetype
    Mvp(MvpArgs),
    /// List the MVP archetype presets
    Archetypes,
    /// Walk through every published case study and archetype
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Reject out-of-range inputs regardless of APP_STRICT_INPUTS
    #[arg(long)]
    pub(crate) strict: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Academic(args) => run_academic(args),
        Command::Mvp(args) => run_mvp(args),
        Command::Archetypes => {
            run_archetypes();
            Ok(())
        }
        Command::Demo => run_demo(),
    }
}
