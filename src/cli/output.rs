//! Output formatting utilities for CLI.

use chrono::NaiveDate;
use serde::Serialize;
use shapeguess::{Country, GameFilter, GuessEntry, MAX_GUESSES, ResultSummary, Round, RoundStatus};

/// JSON-serializable schedule row.
#[derive(Debug, Serialize)]
pub(super) struct JsonScheduleEntry {
    /// Puzzle date.
    pub(super) date: NaiveDate,
    /// Target code.
    pub(super) code: &'static str,
    /// Target name.
    pub(super) name: &'static str,
}

/// Format a list of countries as aligned text.
pub(super) fn format_countries(countries: &[&Country]) -> String {
    let mut output = String::new();
    for c in countries {
        output.push_str(&format!(
            "  {:<4} {:<34} {:<9} {:<10} {}\n",
            c.code, c.name, c.continent, c.kind, c.difficulty
        ));
    }
    output.push_str(&format!("\n{} countries\n", countries.len()));
    output
}

/// Format the guess log with empty slots for remaining guesses.
pub(super) fn format_guess_log(entries: &[GuessEntry<'_>]) -> String {
    let mut output = String::new();
    for slot in 0..MAX_GUESSES {
        match entries.get(slot) {
            Some(entry) if entry.correct => {
                output.push_str(&format!("  {} ✓ {}\n", slot + 1, entry.country.name));
            }
            Some(entry) => {
                let feedback = entry
                    .feedback
                    .map(|f| f.to_string())
                    .unwrap_or_default();
                output.push_str(&format!(
                    "  {} ✗ {:<28} {}\n",
                    slot + 1,
                    entry.country.name,
                    feedback
                ));
            }
            None => output.push_str(&format!("  {} ·\n", slot + 1)),
        }
    }
    output
}

/// Format the end-of-round result view.
pub(super) fn format_result(summary: &ResultSummary, share: &str) -> String {
    let mut output = String::new();
    if summary.won {
        output.push_str("Correct! 🎉\n");
    } else {
        output.push_str("Game Over 😔\n");
    }
    output.push_str(&format!(
        "  {} ({})  Capital: {}\n",
        summary.country_name, summary.country_code, summary.capital
    ));
    if let Some(countdown) = &summary.countdown {
        output.push_str(&format!("  Next daily shape in {countdown}\n"));
    }
    output.push('\n');
    output.push_str(share);
    output.push('\n');
    output
}

/// One-line status header for a round.
pub(super) fn format_round_header(round: &Round<'_>) -> String {
    format!(
        "{} mode, guess {}/{} ({})",
        round.mode(),
        (round.guesses().len() + 1).min(MAX_GUESSES),
        MAX_GUESSES,
        round.tier()
    )
}

/// Aggregated autoplay results.
#[derive(Debug, Clone, Default)]
pub(super) struct SimulationStats {
    /// Rounds played.
    pub(super) rounds: u64,
    /// Rounds won.
    pub(super) wins: u64,
    /// Rounds lost after six guesses.
    pub(super) losses: u64,
    /// Rounds abandoned because feedback ruled out every candidate.
    pub(super) stalled: u64,
    /// Wins by number of guesses used (index 0 = first guess).
    pub(super) distribution: [u64; MAX_GUESSES],
}

impl SimulationStats {
    /// Record one finished round.
    pub(super) fn add_round(&mut self, status: RoundStatus, guesses: usize) {
        self.rounds += 1;
        match status {
            RoundStatus::Won => {
                self.wins += 1;
                if let Some(slot) = self.distribution.get_mut(guesses.saturating_sub(1)) {
                    *slot += 1;
                }
            }
            RoundStatus::Lost => self.losses += 1,
            RoundStatus::InProgress => self.stalled += 1,
        }
    }

    /// Merge another thread's stats.
    pub(super) fn merge(&mut self, other: &Self) {
        self.rounds += other.rounds;
        self.wins += other.wins;
        self.losses += other.losses;
        self.stalled += other.stalled;
        for (a, b) in self.distribution.iter_mut().zip(other.distribution) {
            *a += b;
        }
    }

    /// Win rate in percent.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        self.wins as f64 / self.rounds as f64 * 100.0
    }

    /// Mean guesses per won round.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn mean_guesses(&self) -> f64 {
        if self.wins == 0 {
            return 0.0;
        }
        let total: u64 = self
            .distribution
            .iter()
            .zip(1u64..)
            .map(|(count, guesses)| count * guesses)
            .sum();
        total as f64 / self.wins as f64
    }
}

/// JSON-serializable simulation summary.
#[derive(Debug, Serialize)]
pub(super) struct JsonSimulationResult {
    /// Filter the rounds were drawn from.
    pub(super) filter: String,
    /// Autoplayer distance tolerance.
    pub(super) tolerance_km: u32,
    /// Rounds played.
    pub(super) rounds: u64,
    /// Rounds won.
    pub(super) wins: u64,
    /// Rounds lost.
    pub(super) losses: u64,
    /// Rounds abandoned.
    pub(super) stalled: u64,
    /// Win rate in percent.
    pub(super) win_rate: f64,
    /// Mean guesses per win.
    pub(super) mean_guesses: f64,
    /// Wins by guess count.
    pub(super) distribution: [u64; MAX_GUESSES],
}

impl JsonSimulationResult {
    /// Create from aggregated stats.
    pub(super) fn from_stats(stats: &SimulationStats, filter: &GameFilter, tolerance_km: u32) -> Self {
        Self {
            filter: filter.to_string(),
            tolerance_km,
            rounds: stats.rounds,
            wins: stats.wins,
            losses: stats.losses,
            stalled: stats.stalled,
            win_rate: stats.win_rate(),
            mean_guesses: stats.mean_guesses(),
            distribution: stats.distribution,
        }
    }
}

/// Format simulation results as text.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(super) fn format_simulation_text(stats: &SimulationStats, filter: &GameFilter) -> String {
    let mut output = String::new();
    output.push_str(&format!("Simulation: {} rounds ({filter})\n", stats.rounds));
    output.push_str(&format!(
        "  Won {} ({:.1}%), lost {}, stalled {}\n",
        stats.wins,
        stats.win_rate(),
        stats.losses,
        stats.stalled
    ));
    output.push_str(&format!("  Mean guesses per win: {:.2}\n\n", stats.mean_guesses()));

    let peak = stats.distribution.iter().copied().max().unwrap_or(0).max(1);
    for (i, count) in stats.distribution.iter().enumerate() {
        let width = (*count as f64 / peak as f64 * 40.0).round() as usize;
        output.push_str(&format!("  {} │{:<40}│ {count}\n", i + 1, "█".repeat(width)));
    }
    output
}
