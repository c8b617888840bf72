//! aoc - run, lock and re-verify puzzle solutions
//!
//! CLI entry point that dispatches to subcommands.

use aoc::cli::commands;
use aoc::cli::{Cli, Commands};
use aoc::config::Config;
use aoc::error::AocResult;
use aoc::{solutions, ui, Aoc};
use clap::Parser;
use console::style;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> AocResult<()> {
    let cli = Cli::parse();

    // 0 = warn, 1 = info, 2+ = debug. Logs go to stderr so runner
    // output on stdout stays parseable.
    let filter = match cli.verbose {
        0 => EnvFilter::new("aoc=warn"),
        1 => EnvFilter::new("aoc=info"),
        _ => EnvFilter::new("aoc=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    // Neither needs the cache or workspace
    let command = match cli.command {
        Commands::Runner(args) => return commands::runner(args).await,
        Commands::Completions(args) => return commands::completions(args).await,
        other => other,
    };

    ui::init_theme();

    let jobs = match &command {
        Commands::Check(args) => args.jobs,
        _ => None,
    };
    let config = Config::from_env(cli.workspace.as_deref())?.with_jobs(jobs);
    let aoc = Aoc::new(config, solutions::registry())?;
    debug!("Using cache at {}", aoc.config().cache_root.display());

    match command {
        Commands::Run(args) => commands::run(args, &aoc).await,
        Commands::Status(args) => commands::status(args, &aoc).await,
        Commands::Lock(args) => commands::lock(args, &aoc).await,
        Commands::Unlock(args) => commands::unlock(args, &aoc).await,
        Commands::Check(args) => commands::check(args, &aoc).await,
        Commands::Cache(args) => commands::cache(args, &aoc).await,
        Commands::Login(args) => commands::login(args, &aoc).await,
        Commands::Submit(args) => commands::submit(args, &aoc).await,
        Commands::Input(args) => commands::input(args, &aoc).await,
        Commands::Init(args) => commands::init(args, &aoc).await,
        Commands::Runner(_) | Commands::Completions(_) => {
            unreachable!("handled before loading config")
        }
    }
}
