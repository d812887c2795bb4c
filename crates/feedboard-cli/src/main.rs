#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{CommandFactory, Parser, Subcommand};
use feedboard_core::BoardError;
use feedboard_core::config::resolve_config;
use output::{CliError, OutputMode, render_error, resolve_output_mode};
use std::env;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "fb: an in-memory feedback board",
    long_about = None
)]
struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true, hide = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Read",
        about = "Show the board",
        long_about = "Render the board's Open, In Progress and Complete columns under a category filter and sort order.",
        after_help = "EXAMPLES:\n    # Demo board, most upvoted first\n    fb board\n\n    # Only bugs, newest first\n    fb board --category bug --sort newest\n\n    # Emit machine-readable output\n    fb board --format json"
    )]
    Board(cmd::board::BoardArgs),

    #[command(
        next_help_heading = "Session",
        about = "Replay a script of board actions",
        long_about = "Apply a JSON-lines script of submit/vote/status/category/sort actions to a fresh board, then render it.",
        after_help = "EXAMPLES:\n    # Replay a script file\n    fb run --script session.jsonl\n\n    # Pipe actions through stdin\n    echo '{\"action\":\"vote\",\"id\":\"3\"}' | fb run"
    )]
    Run(cmd::run::RunArgs),

    #[command(
        next_help_heading = "Shell",
        about = "Generate shell completion scripts",
        after_help = "EXAMPLES:\n    # Generate bash completions\n    fb completions bash"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("FEEDBOARD_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "feedboard_core=debug,fb=debug,info"
        } else {
            "feedboard_core=info,fb=info,warn"
        })
    });

    let format = env::var("FEEDBOARD_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match resolve_config() {
        Ok(config) => config,
        Err(err) => {
            let mode = resolve_output_mode(cli.format, cli.json, None);
            if let Some(board_err) = err.downcast_ref::<BoardError>() {
                render_error(mode, &CliError::from(board_err))?;
            }
            return Err(err);
        }
    };
    let output = resolve_output_mode(cli.format, cli.json, config.display.output.as_deref());
    debug!(?output, "output mode resolved");

    match cli.command {
        Commands::Board(ref args) => cmd::board::run_board(args, &config, output),
        Commands::Run(ref args) => cmd::run::run_script(args, &config, output),
        Commands::Completions(ref args) => {
            let mut command = Cli::command();
            cmd::completions::write_completions(args.shell, &mut command, &mut std::io::stdout());
            Ok(())
        }
    }
}
