//! Daily rollover: which date is "today" and how long until the next puzzle.
//!
//! All calendar logic is evaluated in a single reference time zone so every
//! player sees the same daily puzzle at the same instant.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};

use crate::error::{GameError, GameResult};

/// Reference zone used when none is configured.
pub const DEFAULT_TIMEZONE: &str = "Europe/London";

/// Interval at which a displayed countdown is recomputed.
pub const TICK_INTERVAL: std::time::Duration = std::time::Duration::from_secs(1);

/// Parse an IANA time zone name.
///
/// # Errors
///
/// Returns [`GameError::UnknownTimezone`] for names chrono-tz does not know.
pub fn parse_timezone(name: &str) -> GameResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| GameError::UnknownTimezone(name.to_string()))
}

/// Calendar date in `tz` at instant `now`.
#[must_use]
pub fn today_in(tz: Tz, now: DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&tz).date_naive()
}

/// Instant of the next local midnight in `tz` strictly after `now`.
#[must_use]
pub fn next_rollover(tz: Tz, now: DateTime<Utc>) -> DateTime<Utc> {
    let today = today_in(tz, now);
    let tomorrow = today.succ_opt().unwrap_or(today);
    let midnight = tomorrow.and_time(chrono::NaiveTime::MIN);

    // A DST jump can skip midnight; the first valid instant after it counts.
    (0..=3)
        .find_map(|hours| {
            tz.from_local_datetime(&(midnight + Duration::hours(hours)))
                .earliest()
        })
        .map_or_else(|| now + Duration::days(1), |local| local.with_timezone(&Utc))
}

/// Time remaining until the next daily puzzle.
#[must_use]
pub fn time_until_next_daily(tz: Tz, now: DateTime<Utc>) -> Duration {
    next_rollover(tz, now) - now
}

/// Format a duration as `HH:MM:SS`. Negative durations clamp to zero.
#[must_use]
pub fn format_countdown(remaining: Duration) -> String {
    let total = remaining.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Countdown string for instant `now`.
#[must_use]
pub fn countdown_string(tz: Tz, now: DateTime<Utc>) -> String {
    format_countdown(time_until_next_daily(tz, now))
}

/// Background ticker recomputing the countdown on a fixed interval.
///
/// Performs no state mutation other than handing each new string to its
/// callback. Stops on [`cancel`](Self::cancel) or when dropped.
#[derive(Debug)]
pub struct CountdownTicker {
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl CountdownTicker {
    /// Start ticking every [`TICK_INTERVAL`].
    pub fn start<F>(tz: Tz, on_tick: F) -> Self
    where
        F: FnMut(String) + Send + 'static,
    {
        Self::start_with_interval(tz, TICK_INTERVAL, on_tick)
    }

    /// Start ticking at a custom interval. The first tick fires immediately.
    pub fn start_with_interval<F>(tz: Tz, interval: std::time::Duration, mut on_tick: F) -> Self
    where
        F: FnMut(String) + Send + 'static,
    {
        let (stop, stopped) = mpsc::channel::<()>();
        let handle = thread::spawn(move || {
            loop {
                on_tick(countdown_string(tz, Utc::now()));
                match stopped.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {}
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        Self {
            stop: Some(stop),
            handle: Some(handle),
        }
    }

    /// Stop ticking and wait for the worker to exit.
    pub fn cancel(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(stop) = self.stop.take() {
            // Worker may already be gone
            let _ = stop.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn london() -> Tz {
        parse_timezone(DEFAULT_TIMEZONE).unwrap()
    }

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn test_parse_timezone() {
        assert!(parse_timezone("Europe/London").is_ok());
        assert!(matches!(
            parse_timezone("Mars/Olympus"),
            Err(GameError::UnknownTimezone(_))
        ));
    }

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(Duration::seconds(0)), "00:00:00");
        assert_eq!(format_countdown(Duration::seconds(3661)), "01:01:01");
        assert_eq!(format_countdown(Duration::seconds(86_399)), "23:59:59");
        assert_eq!(format_countdown(Duration::seconds(-5)), "00:00:00");
    }

    #[test]
    fn test_winter_countdown() {
        // GMT == UTC in January
        let now = utc(2025, 1, 15, 22, 30, 0);
        assert_eq!(countdown_string(london(), now), "01:30:00");
    }

    #[test]
    fn test_summer_countdown() {
        // BST is UTC+1: local 23:30 at 22:30 UTC
        let now = utc(2025, 7, 15, 22, 30, 0);
        assert_eq!(countdown_string(london(), now), "00:30:00");
        assert_eq!(today_in(london(), now), NaiveDate::from_ymd_opt(2025, 7, 15).unwrap());
    }

    #[test]
    fn test_today_rolls_at_local_midnight() {
        // 23:30 UTC in July is already 00:30 the next day in London
        let now = utc(2025, 7, 15, 23, 30, 0);
        assert_eq!(today_in(london(), now), NaiveDate::from_ymd_opt(2025, 7, 16).unwrap());
    }

    #[test]
    fn test_rollover_is_strictly_after_now() {
        let now = utc(2025, 1, 15, 0, 0, 0);
        let next = next_rollover(london(), now);
        assert_eq!(next, utc(2025, 1, 16, 0, 0, 0));
    }

    #[test]
    fn test_dst_day_is_23_hours() {
        // Clocks go forward on 2025-03-30 in London
        let now = utc(2025, 3, 30, 0, 0, 0);
        assert_eq!(countdown_string(london(), now), "23:00:00");
    }

    #[test]
    fn test_skipped_midnight_rolls_at_first_valid_instant() {
        // Havana springs forward at local midnight: 2025-03-09 00:00 never happens
        let havana = parse_timezone("America/Havana").unwrap();
        let now = utc(2025, 3, 9, 4, 30, 0);
        assert_eq!(today_in(havana, now), NaiveDate::from_ymd_opt(2025, 3, 8).unwrap());
        assert_eq!(next_rollover(havana, now), utc(2025, 3, 9, 5, 0, 0));
        assert_eq!(countdown_string(havana, now), "00:30:00");
    }

    #[test]
    fn test_ticker_fires_and_cancels() {
        let (tx, rx) = mpsc::channel();
        let ticker = CountdownTicker::start_with_interval(
            london(),
            std::time::Duration::from_millis(5),
            move |s| {
                let _ = tx.send(s);
            },
        );
        let first = rx.recv_timeout(std::time::Duration::from_secs(2)).unwrap();
        assert_eq!(first.len(), 8);
        assert_eq!(&first[2..3], ":");
        ticker.cancel();

        // Sender side is gone once the worker exits
        while rx.recv_timeout(std::time::Duration::from_millis(50)).is_ok() {}
        assert!(rx.recv().is_err());
    }
}
