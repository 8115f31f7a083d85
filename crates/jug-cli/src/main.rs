//! Water jug solver: command-line entry point.
//!
//! # Usage
//!
//! ```text
//! jug-cli solve <X> <Y> <Z> [--format text|json] [--max-states N]
//!                           [--transfer-rule reference|textbook]
//! jug-cli request             # reads {"x":..,"y":..,"z":..} from stdin
//!
//! Global options:
//!   --config <FILE>   TOML config file [env: JUG_CONFIG]
//! ```
//!
//! # Exit codes
//!
//! | Code | `solve`                  | `request`          |
//! |------|--------------------------|--------------------|
//! | 0    | solved or no solution    | status 200         |
//! | 1    | n/a                      | any other status   |
//! | 2    | invalid input            | n/a                |
//! | 3    | state limit exceeded     | n/a                |
//!
//! Results go to stdout; logs and diagnostics go to stderr.  The log level
//! comes from `RUST_LOG` if set, otherwise from `output.log_level` in the
//! config file.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use jug_cli::application::{render_text, ServiceError, SolveService};
use jug_cli::domain::messages::{ApiReply, MSG_INVALID_INPUT};
use jug_cli::domain::{AppConfig, OutputFormat};
use jug_cli::infrastructure::load_config;
use jug_core::{Solver, TransferRule};

const EXIT_OK: u8 = 0;
const EXIT_REQUEST_REJECTED: u8 = 1;
const EXIT_INVALID_INPUT: u8 = 2;
const EXIT_LIMIT_EXCEEDED: u8 = 3;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Finds the shortest fill/empty/pour sequence that measures a target volume
/// with two jugs.
#[derive(Debug, Parser)]
#[command(name = "jug-cli", about = "Breadth-first water jug puzzle solver", version)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(long, global = true, env = "JUG_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve one puzzle given on the command line.
    Solve(SolveArgs),

    /// Answer one JSON request read from stdin.
    Request,
}

#[derive(Debug, Args)]
struct SolveArgs {
    /// Capacity of jug X.
    ///
    /// Taken as text and validated, so `-1` is reported as invalid input
    /// rather than an unknown flag.
    #[arg(allow_hyphen_values = true)]
    x: String,

    /// Capacity of jug Y.
    #[arg(allow_hyphen_values = true)]
    y: String,

    /// Volume to measure.
    #[arg(allow_hyphen_values = true)]
    z: String,

    /// Output format; overrides `output.format`.
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Cap on expanded states; overrides `solver.max_states`.
    #[arg(long)]
    max_states: Option<usize>,

    /// Y-to-X pour rule; overrides `solver.transfer_rule`.
    #[arg(long)]
    transfer_rule: Option<TransferRule>,
}

impl SolveArgs {
    /// Applies command-line overrides on top of the loaded configuration.
    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(max_states) = self.max_states {
            config.solver.max_states = Some(max_states);
        }
        if let Some(rule) = self.transfer_rule {
            config.solver.transfer_rule = rule;
        }
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

/// What a command wants written and how the process should exit.
#[derive(Debug, PartialEq, Eq)]
struct Outcome {
    stdout: String,
    stderr: Option<String>,
    code: u8,
}

fn run_solve(args: &SolveArgs, config: &AppConfig) -> anyhow::Result<Outcome> {
    let service = SolveService::new(Solver::new(config.solver_options()));

    match service.solve_args(&args.x, &args.y, &args.z) {
        Ok((puzzle, path)) => {
            let stdout = match config.output.format {
                OutputFormat::Text => {
                    render_text(&puzzle, config.solver.transfer_rule, path.as_ref())
                        .context("rendering solution")?
                }
                OutputFormat::Json => {
                    let reply = path.map_or_else(ApiReply::no_solution, ApiReply::solution);
                    let mut json = serde_json::to_string_pretty(&reply.body)
                        .context("serializing solution")?;
                    json.push('\n');
                    json
                }
            };
            Ok(Outcome {
                stdout,
                stderr: None,
                code: EXIT_OK,
            })
        }
        Err(ServiceError::Input(e)) => Ok(Outcome {
            stdout: String::new(),
            stderr: Some(format!("{MSG_INVALID_INPUT}: {e}")),
            code: EXIT_INVALID_INPUT,
        }),
        Err(ServiceError::Solve(e)) => Ok(Outcome {
            stdout: String::new(),
            stderr: Some(e.to_string()),
            code: EXIT_LIMIT_EXCEEDED,
        }),
    }
}

fn run_request(body: &str, config: &AppConfig) -> anyhow::Result<Outcome> {
    let service = SolveService::new(Solver::new(config.solver_options()));
    let reply = service.handle_json(body);

    let mut stdout = serde_json::to_string(&reply.body).context("serializing response")?;
    stdout.push('\n');

    Ok(Outcome {
        stdout,
        stderr: None,
        code: if reply.is_success() {
            EXIT_OK
        } else {
            EXIT_REQUEST_REJECTED
        },
    })
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref()).context("loading configuration")?;
    if let Command::Solve(args) = &cli.command {
        args.apply_overrides(&mut config);
    }

    // `RUST_LOG` wins; otherwise use the configured level.  Logs go to stderr
    // so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.output.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(path) = &cli.config {
        debug!(path = %path.display(), "loaded config");
    }
    info!(
        transfer_rule = %config.solver.transfer_rule,
        max_states = ?config.solver.max_states,
        "jug-cli starting"
    );

    let outcome = match &cli.command {
        Command::Solve(args) => run_solve(args, &config)?,
        Command::Request => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("reading request from stdin")?;
            run_request(&body, &config)?
        }
    };

    print!("{}", outcome.stdout);
    if let Some(message) = &outcome.stderr {
        eprintln!("{message}");
    }
    Ok(ExitCode::from(outcome.code))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
