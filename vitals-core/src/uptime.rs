//! Uptime breakdown and formatting

use std::fmt;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * 60;
const SECS_PER_DAY: u64 = 60 * 60 * 24;
// The larger units are intentionally approximate, not calendar-accurate:
// days carry into months at 31, months into years at 12.
const DAYS_PER_MONTH: u64 = 31;
const MONTHS_PER_YEAR: u64 = 12;

/// Process uptime decomposed into display units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UptimeBreakdown {
    /// Whole years (12 approximate months each)
    pub years: u64,
    /// Months remaining after the year carry, 0..12
    pub months: u64,
    /// Days remaining after the month carry, 0..31
    pub days: u64,
    /// Hours remaining after the day carry, 0..24
    pub hours: u64,
    /// Minutes remaining after the hour carry, 0..60
    pub minutes: u64,
    /// Seconds remaining after the minute carry, 0..60
    pub seconds: u64,
}

impl UptimeBreakdown {
    /// Decompose a whole-second uptime
    pub fn from_secs(total_secs: u64) -> Self {
        let seconds = total_secs % SECS_PER_MINUTE;
        let minutes = (total_secs / SECS_PER_MINUTE) % 60;
        let hours = (total_secs / SECS_PER_HOUR) % 24;
        let total_days = total_secs / SECS_PER_DAY;
        let days = total_days % DAYS_PER_MONTH;
        let total_months = total_days / DAYS_PER_MONTH;
        let months = total_months % MONTHS_PER_YEAR;
        let years = total_months / MONTHS_PER_YEAR;

        Self {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
        }
    }
}

impl fmt::Display for UptimeBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Years, {} Months, {} Days, {} Hours, {} Min, {} Sec",
            self.years, self.months, self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Format a whole-second uptime as the fixed display string
///
/// Pure function of the input, so calling it twice with the same elapsed
/// value yields the same string.
pub fn format_uptime(total_secs: u64) -> String {
    UptimeBreakdown::from_secs(total_secs).to_string()
}
