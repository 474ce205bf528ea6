//! # statuskit CLI entry point
//!
//! Parses command-line arguments, installs logging and dispatches to the
//! subcommand handlers. Rendered output goes to stdout; logs go to stderr.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use statuskit_cli::app::{run_app, AppArgs};
use statuskit_cli::delivery::{run_delivery, DeliveryArgs};
use statuskit_cli::demo::run_demo;
use statuskit_cli::output::OutputFormat;
use statuskit_cli::render::{run_render, RenderArgs};
use statuskit_cli::track::{run_track, TrackArgs};

/// statuskit — render closed delivery and application statuses.
#[derive(Parser, Debug)]
#[command(name = "statuskit", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format.
    #[arg(long, value_enum, default_value = "text", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a delivery status built from flags.
    Delivery(DeliveryArgs),

    /// Render an application status built from flags.
    App(AppArgs),

    /// Render every status in a JSON or YAML snapshot file.
    Render(RenderArgs),

    /// Replay delivery events from a journey file, rejecting illegal ones.
    Track(TrackArgs),

    /// Render the reference scenarios.
    Demo,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(format = ?cli.format, "statuskit starting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match &cli.command {
        Commands::Delivery(args) => run_delivery(args, cli.format, &mut out),
        Commands::App(args) => run_app(args, cli.format, &mut out),
        Commands::Render(args) => run_render(args, cli.format, &mut out),
        Commands::Track(args) => run_track(args, cli.format, &mut out),
        Commands::Demo => run_demo(cli.format, &mut out),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statuskit_cli::app::AppCommand;
    use statuskit_cli::delivery::DeliveryCommand;
    use statuskit_state::ProblemCode;

    #[test]
    fn cli_parse_delivery_pending() {
        let cli = Cli::try_parse_from(["statuskit", "delivery", "pending", "--sender", "Alice"])
            .unwrap();
        assert_eq!(cli.format, OutputFormat::Text);
        if let Commands::Delivery(args) = cli.command {
            assert!(matches!(args.command, DeliveryCommand::Pending { ref sender } if sender == "Alice"));
        } else {
            panic!("expected delivery command");
        }
    }

    #[test]
    fn cli_parse_delivery_in_transit_kebab_case() {
        let cli = Cli::try_parse_from([
            "statuskit",
            "delivery",
            "in-transit",
            "--estimated-delivery-date",
            "2024-11-20",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Delivery(_)));
    }

    #[test]
    fn cli_parse_delivery_requires_all_fields() {
        let result = Cli::try_parse_from([
            "statuskit",
            "delivery",
            "delivered",
            "--delivery-date",
            "2024-11-18",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parse_delivery_rejects_foreign_field() {
        let result = Cli::try_parse_from([
            "statuskit",
            "delivery",
            "canceled",
            "--reason",
            "x",
            "--sender",
            "Alice",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parse_app_error_problem() {
        let cli = Cli::try_parse_from(["statuskit", "app", "error", "--problem", "timeout"])
            .unwrap();
        if let Commands::App(args) = cli.command {
            assert!(matches!(
                args.command,
                AppCommand::Error {
                    problem: ProblemCode::Timeout
                }
            ));
        } else {
            panic!("expected app command");
        }
    }

    #[test]
    fn cli_parse_app_error_rejects_unknown_problem() {
        let result = Cli::try_parse_from(["statuskit", "app", "error", "--problem", "disk"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parse_app_ok_repeated_data() {
        let cli = Cli::try_parse_from([
            "statuskit", "app", "ok", "--data", "Data1", "--data", "Data2",
        ])
        .unwrap();
        if let Commands::App(args) = cli.command {
            assert!(matches!(args.command, AppCommand::Ok { ref data } if data == &["Data1", "Data2"]));
        } else {
            panic!("expected app command");
        }
    }

    #[test]
    fn cli_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["statuskit", "demo", "--format", "json", "-vv"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Demo));
    }

    #[test]
    fn cli_parse_render_path() {
        let cli = Cli::try_parse_from(["statuskit", "render", "statuses.yaml"]).unwrap();
        if let Commands::Render(args) = cli.command {
            assert_eq!(args.path, std::path::PathBuf::from("statuses.yaml"));
        } else {
            panic!("expected render command");
        }
    }
}
