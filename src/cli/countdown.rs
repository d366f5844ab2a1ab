//! `countdown` command: time left until the next daily puzzle.

use super::{CliError, load_config};
use chrono::Utc;
use shapeguess::countdown::{CountdownTicker, countdown_string, next_rollover, today_in};
use std::path::Path;
use std::sync::mpsc;

/// Execute the `countdown` command.
///
/// With `ticks == 0` prints the countdown once; otherwise prints `ticks`
/// lines one second apart.
///
/// # Errors
///
/// Returns an error if the configured time zone is unknown.
pub(crate) fn execute(config: Option<&Path>, ticks: u32) -> Result<(), CliError> {
    let config = load_config(config)?;
    let tz = config.tz()?;
    let now = Utc::now();

    if ticks == 0 {
        println!(
            "Today in {tz}: {}. Next daily shape at {} UTC, in {}",
            today_in(tz, now),
            next_rollover(tz, now).format("%Y-%m-%d %H:%M:%S"),
            countdown_string(tz, now)
        );
        return Ok(());
    }

    let (tx, rx) = mpsc::channel();
    let ticker = CountdownTicker::start(tz, move |line| {
        // Receiver hangs up after the last tick
        let _ = tx.send(line);
    });
    for line in rx.iter().take(ticks as usize) {
        println!("{line}");
    }
    ticker.cancel();
    Ok(())
}
