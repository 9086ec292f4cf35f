use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::warn;

use version_status::config::{
    CheckerConfig, DEFAULT_FETCH_TIMEOUT_MS, DEFAULT_LATEST_VERSION_URL, log_path,
};
use version_status::healthcheck::report::HealthReport;
use version_status::logging::init_logging;
use version_status::version::CLIENT_VERSION;
use version_status::version::checker::VersionStatusChecker;
use version_status::version::control_plane::HttpControlPlane;

#[derive(Parser)]
#[command(name = "version-status")]
#[command(version, about = "Checks that the CLI and control plane run the latest release")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Options for `check` when no subcommand is given
    #[command(flatten)]
    check: CheckArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Compare the CLI and control plane versions against the latest release
    Check(CheckArgs),
    /// Print the version embedded in this CLI
    Version,
}

#[derive(Args)]
struct CheckArgs {
    /// Endpoint reporting the latest release as {"version": "..."}
    #[arg(long, env = "VERSION_STATUS_LATEST_URL", default_value = DEFAULT_LATEST_VERSION_URL)]
    latest_version_url: String,

    /// Expected version to use instead of the latest release
    #[arg(long, env = "VERSION_STATUS_OVERRIDE", default_value = "")]
    version_override: String,

    /// Base URL of the control plane API
    #[arg(long, env = "VERSION_STATUS_API_URL", default_value = "http://localhost:8085")]
    api_url: String,

    /// Timeout for each HTTP request, in milliseconds
    #[arg(long, env = "VERSION_STATUS_TIMEOUT_MS", default_value_t = DEFAULT_FETCH_TIMEOUT_MS)]
    timeout_ms: u64,

    #[arg(long, value_enum, default_value_t = Output::Text)]
    output: Output,
}

#[derive(Clone, Copy, ValueEnum)]
enum Output {
    Text,
    Json,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let _guard = init_logging(&log_path())
        .inspect_err(|e| eprintln!("Failed to initialize logging: {}", e))
        .ok();

    match cli.command {
        Some(Command::Version) => {
            println!("{}", CLIENT_VERSION);
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Check(args)) => run_check(args),
        None => run_check(cli.check),
    }
}

fn run_check(args: CheckArgs) -> anyhow::Result<ExitCode> {
    let config = CheckerConfig {
        latest_version_url: args.latest_version_url,
        version_override: args.version_override,
        fetch_timeout_ms: args.timeout_ms,
    };
    let provider = HttpControlPlane::new(&args.api_url, config.fetch_timeout());
    let checker = VersionStatusChecker::new(CLIENT_VERSION, config, Arc::new(provider));

    let report = HealthReport::run(&[&checker]);

    match args.output {
        Output::Text => print!("{}", report.render()),
        Output::Json => println!("{}", serde_json::to_string_pretty(&report.results)?),
    }

    if report.success() {
        Ok(ExitCode::SUCCESS)
    } else {
        warn!("Version checks failed");
        Ok(ExitCode::FAILURE)
    }
}
