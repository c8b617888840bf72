//! CLI argument definitions using clap derive

use crate::config::WORKSPACE_ENV;
use crate::puzzle::{default_year, Puzzle};
use crate::runner::RUNNER_COMMAND;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// aoc - run, lock and re-verify puzzle solutions
///
/// Results are cached per puzzle and input. Locking a result turns every
/// later run into a regression check.
#[derive(Parser, Debug)]
#[command(name = "aoc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Directory holding {year}/input/day{day}/ trees
    #[arg(long, global = true, env = WORKSPACE_ENV)]
    pub workspace: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a solution, verifying it against a locked result
    Run(PuzzleArgs),

    /// Show the cached result of a puzzle
    Status(StatusArgs),

    /// Lock the cached result so later runs must reproduce it
    Lock(PuzzleArgs),

    /// Unlock a result so the next run may replace it
    Unlock(PuzzleArgs),

    /// Re-run every locked puzzle
    Check(CheckArgs),

    /// Manage the result cache
    Cache(CacheArgs),

    /// Store a session token after checking it with the server
    Login(LoginArgs),

    /// Submit the result of the last run
    Submit(SubmitArgs),

    /// Download puzzle input
    Input(InputArgs),

    /// Create empty inputs and a solution stub for a day
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Execute a generated runner
    #[command(name = RUNNER_COMMAND, hide = true)]
    Runner(RunnerArgs),
}

/// Identifies one puzzle run
#[derive(Args, Debug, Clone)]
pub struct PuzzleArgs {
    /// Event year (defaults to the current event)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Puzzle day
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: u8,

    /// Puzzle part
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: u8,

    /// Input file name inside {year}/input/day{day}/
    #[arg(short, long, default_value = "input.txt")]
    pub input: String,
}

impl PuzzleArgs {
    pub fn year(&self) -> u16 {
        self.year.unwrap_or_else(|| default_year(chrono::Utc::now()))
    }

    /// Validated identity
    pub fn puzzle(&self) -> crate::error::AocResult<Puzzle> {
        Puzzle::new(self.year(), self.day, self.part, self.input.clone())
    }
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    #[command(flatten)]
    pub puzzle: PuzzleArgs,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    Text,
    /// JSON object
    Json,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Run at most N puzzles at a time (default: all at once)
    #[arg(short, long)]
    pub jobs: Option<usize>,
}

#[derive(Args, Debug)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub action: CacheAction,
}

#[derive(Subcommand, Debug)]
pub enum CacheAction {
    /// Delete every cached result, lock and stored session
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Print the cache location
    Path,
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Value of the site's `session` cookie
    #[arg(short, long, env = "AOC_SESSION", hide_env_values = true)]
    pub session: String,
}

#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Submit without asking
    #[arg(long)]
    pub yes: bool,
}

#[derive(Args, Debug)]
pub struct InputArgs {
    /// Event year (defaults to the current event)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Puzzle day
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: u8,

    /// Also save the first example of the puzzle text as test.txt
    #[arg(short, long)]
    pub example: bool,
}

impl InputArgs {
    pub fn year(&self) -> u16 {
        self.year.unwrap_or_else(|| default_year(chrono::Utc::now()))
    }
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Event year (defaults to the current event)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Puzzle day
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: u8,

    /// Crate checkout that holds src/solutions/
    #[arg(long, default_value = ".")]
    pub source: PathBuf,
}

impl InitArgs {
    pub fn year(&self) -> u16 {
        self.year.unwrap_or_else(|| default_year(chrono::Utc::now()))
    }
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct RunnerArgs {
    /// Runner manifest
    pub manifest: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_run() {
        let cli = Cli::parse_from(["aoc", "run", "-y", "2024", "-d", "1", "-p", "2"]);
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.year, Some(2024));
                assert_eq!(args.day, 1);
                assert_eq!(args.part, 2);
                assert_eq!(args.input, "input.txt");
                assert_eq!(args.puzzle().unwrap().label(), "2024/day1/part2");
            }
            _ => panic!("expected Run command"),
        }
    }

    #[test]
    fn cli_run_defaults() {
        let cli = Cli::parse_from(["aoc", "run", "--day", "7", "--input", "test.txt"]);
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.year, None);
                assert_eq!(args.part, 1);
                assert_eq!(args.input, "test.txt");
                assert!(args.year() >= 2015);
            }
            _ => panic!("expected Run command"),
        }
    }

    #[test]
    fn cli_rejects_bad_day_and_part() {
        assert!(Cli::try_parse_from(["aoc", "run", "-d", "26"]).is_err());
        assert!(Cli::try_parse_from(["aoc", "run", "-d", "0"]).is_err());
        assert!(Cli::try_parse_from(["aoc", "run", "-d", "1", "-p", "3"]).is_err());
        assert!(Cli::try_parse_from(["aoc", "run"]).is_err());
    }

    #[test]
    fn cli_parses_status_json() {
        let cli = Cli::parse_from(["aoc", "status", "-d", "1", "--format", "json"]);
        match cli.command {
            Commands::Status(args) => {
                assert_eq!(args.format, OutputFormat::Json);
                assert_eq!(args.puzzle.day, 1);
            }
            _ => panic!("expected Status command"),
        }
    }

    #[test]
    fn cli_parses_check_jobs() {
        let cli = Cli::parse_from(["aoc", "check", "--jobs", "4"]);
        match cli.command {
            Commands::Check(args) => assert_eq!(args.jobs, Some(4)),
            _ => panic!("expected Check command"),
        }

        let cli = Cli::parse_from(["aoc", "check"]);
        assert!(matches!(cli.command, Commands::Check(CheckArgs { jobs: None })));
    }

    #[test]
    fn cli_parses_cache_clear() {
        let cli = Cli::parse_from(["aoc", "cache", "clear", "--yes"]);
        match cli.command {
            Commands::Cache(args) => {
                assert!(matches!(args.action, CacheAction::Clear { yes: true }))
            }
            _ => panic!("expected Cache command"),
        }
    }

    #[test]
    fn cli_parses_hidden_runner() {
        let cli = Cli::parse_from(["aoc", "__runner", "/tmp/runner"]);
        match cli.command {
            Commands::Runner(args) => assert_eq!(args.manifest, PathBuf::from("/tmp/runner")),
            _ => panic!("expected Runner command"),
        }
    }

    #[test]
    fn cli_global_flags() {
        let cli = Cli::parse_from(["aoc", "-vv", "check", "--workspace", "/ws"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.workspace, Some(PathBuf::from("/ws")));
    }

    #[test]
    fn cli_parses_input() {
        let cli = Cli::parse_from(["aoc", "input", "-d", "3", "-y", "2023", "--example"]);
        match cli.command {
            Commands::Input(args) => {
                assert_eq!(args.year(), 2023);
                assert_eq!(args.day, 3);
                assert!(args.example);
            }
            _ => panic!("expected Input command"),
        }
    }

    #[test]
    fn cli_parses_init() {
        let cli = Cli::parse_from(["aoc", "init", "-d", "5", "-y", "2022"]);
        match cli.command {
            Commands::Init(args) => {
                assert_eq!(args.year(), 2022);
                assert_eq!(args.day, 5);
                assert_eq!(args.source, PathBuf::from("."));
            }
            _ => panic!("expected Init command"),
        }
        assert!(Cli::try_parse_from(["aoc", "init", "-d", "0"]).is_err());
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
