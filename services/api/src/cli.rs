use crate::demo::{print_routes, run_demo, run_tracker, DemoArgs, TrackerArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use smarthire::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "SmartHire",
    about = "Run the SmartHire recruitment platform or walk through it from the command line",
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
    /// Walk a candidate from resume upload to interview against the seeded data
    Demo(DemoArgs),
    /// Print the company status tracker with optional filters
    Tracker(TrackerArgs),
    /// List page routes and the per-role navigation menus
    Routes,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Demo(args) => run_demo(args).await,
        Command::Tracker(args) => run_tracker(args),
        Command::Routes => {
            print_routes();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["smarthire"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn tracker_filters_default_to_all() {
        let cli = Cli::try_parse_from(["smarthire", "tracker", "--search", "emily"]).expect("parses");
        match cli.command {
            Some(Command::Tracker(args)) => {
                assert_eq!(args.job, "all");
                assert_eq!(args.status, "all");
                assert_eq!(args.search, "emily");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn demo_rejects_non_numeric_delay() {
        assert!(Cli::try_parse_from(["smarthire", "demo", "--processing-ms", "soon"]).is_err());
        let cli = Cli::try_parse_from(["smarthire", "demo"]).expect("parses");
        match cli.command {
            Some(Command::Demo(args)) => assert_eq!(args.processing_ms, 250),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
