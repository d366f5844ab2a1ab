//! `answer` and `schedule` commands: inspect daily targets without playing.

use super::output::JsonScheduleEntry;
use super::{CliError, OutputFormat, ScheduleFormat, load_config, resolve_date};
use chrono::{NaiveDate, TimeDelta};
use shapeguess::{Catalog, select_daily};
use std::path::Path;

/// Execute the `answer` command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub(crate) fn execute_answer(
    config: Option<&Path>,
    date: Option<NaiveDate>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let config = load_config(config)?;
    let date = resolve_date(date, &config)?;
    let country = select_daily(Catalog::builtin(), date)?;

    match format {
        OutputFormat::Text => {
            println!("{date}: {} ({}), capital {}", country.name, country.code, country.capital);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(country)?);
        }
    }
    Ok(())
}

/// Execute the `schedule` command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub(crate) fn execute_schedule(
    config: Option<&Path>,
    from: Option<NaiveDate>,
    days: u32,
    format: ScheduleFormat,
) -> Result<(), CliError> {
    let config = load_config(config)?;
    let start = resolve_date(from, &config)?;
    let catalog = Catalog::builtin();

    let mut entries = Vec::with_capacity(days as usize);
    for date in schedule_dates(start, days)? {
        let country = select_daily(catalog, date)?;
        entries.push(JsonScheduleEntry {
            date,
            code: country.code,
            name: country.name,
        });
    }

    match format {
        ScheduleFormat::Text => {
            for entry in &entries {
                println!("{}  {:<4} {}", entry.date, entry.code, entry.name);
            }
        }
        ScheduleFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        ScheduleFormat::Csv => {
            println!("date,code,name");
            for entry in &entries {
                println!("{},{},\"{}\"", entry.date, entry.code, entry.name);
            }
        }
    }
    Ok(())
}

/// `days` consecutive dates starting at `start`.
fn schedule_dates(start: NaiveDate, days: u32) -> Result<Vec<NaiveDate>, CliError> {
    (0..days)
        .map(|offset| {
            start
                .checked_add_signed(TimeDelta::days(i64::from(offset)))
                .ok_or_else(|| CliError::new(format!("schedule runs past the last representable date ({start} + {offset} days)")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_dates_consecutive() {
        let start = NaiveDate::from_ymd_opt(2025, 12, 30).unwrap_or(NaiveDate::MIN);
        let dates = schedule_dates(start, 3).map_err(|e| e.to_string());
        assert_eq!(
            dates,
            Ok(vec![
                start,
                NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or(NaiveDate::MIN),
                NaiveDate::from_ymd_opt(2026, 1, 1).unwrap_or(NaiveDate::MIN),
            ])
        );
    }

    #[test]
    fn test_schedule_near_max_date_errors() {
        assert_eq!(schedule_dates(NaiveDate::MAX, 1).map(|d| d.len()).ok(), Some(1));
        let err = schedule_dates(NaiveDate::MAX, 2).map(|_| ()).map_err(|e| e.to_string());
        assert!(err.is_err_and(|msg| msg.contains("last representable date")));
    }
}
