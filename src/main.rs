//! Shapeguess CLI - play and inspect the country-shape guessing game.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Shapeguess - guess the country from its outline
#[derive(Parser, Debug)]
#[command(name = "shapeguess")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play the daily puzzle
    Daily {
        /// Play the puzzle for this date instead of today (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Play random shapes, one round after another
    Infinite {
        #[command(flatten)]
        filter: cli::FilterArgs,

        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Print autocomplete suggestions for a query
    Suggest {
        /// Partial country name
        query: String,

        /// Eligibility rules to apply
        #[arg(short, long, default_value = "daily")]
        mode: cli::ModeArg,

        #[command(flatten)]
        filter: cli::FilterArgs,

        /// Names already guessed this round
        #[arg(short, long)]
        guessed: Vec<String>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Reveal the daily answer for a date
    Answer {
        /// Date (default: today in the configured time zone)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// List upcoming daily answers
    Schedule {
        /// First date (default: today in the configured time zone)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Number of days (default: 7)
        #[arg(short = 'n', long, default_value = "7")]
        days: u32,

        /// Output format: text, json, or csv
        #[arg(short, long, default_value = "text")]
        format: cli::ScheduleFormat,
    },

    /// Time until the next daily puzzle
    Countdown {
        /// Keep ticking once a second for N lines (default: print once)
        #[arg(short, long, default_value = "0")]
        ticks: u32,
    },

    /// List catalog entries
    Countries {
        /// Restrict to the countries eligible in this mode
        #[arg(short, long)]
        mode: Option<cli::ModeArg>,

        #[command(flatten)]
        filter: cli::FilterArgs,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Autoplay many infinite rounds and report how hard a filter is
    Simulate {
        #[command(flatten)]
        filter: cli::FilterArgs,

        /// Number of rounds to play (default: 1000)
        #[arg(short, long, default_value = "1000")]
        rounds: u64,

        /// Starting seed (increments for each round)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Distance slack for the autoplayer in km (default: 250)
        #[arg(short, long, default_value = "250")]
        tolerance: u32,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shapeguess=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();
    let config = args.config.as_deref();

    let result = match args.command {
        Commands::Daily { date } => cli::play::execute_daily(config, date),

        Commands::Infinite { filter, seed } => cli::play::execute_infinite(config, filter, seed),

        Commands::Suggest {
            query,
            mode,
            filter,
            guessed,
            format,
        } => cli::suggest::execute(config, &query, mode, filter, &guessed, format),

        Commands::Answer { date, format } => cli::daily::execute_answer(config, date, format),

        Commands::Schedule { from, days, format } => cli::daily::execute_schedule(config, from, days, format),

        Commands::Countdown { ticks } => cli::countdown::execute(config, ticks),

        Commands::Countries { mode, filter, format } => cli::countries::execute(config, mode, filter, format),

        Commands::Simulate {
            filter,
            rounds,
            seed,
            tolerance,
            threads,
            format,
            progress,
        } => cli::simulate::execute(config, filter, rounds, seed, tolerance, threads, format, progress),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
