use chrono::{DateTime, Utc};

const MILLISECONDS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// How elapsed storage time is converted into billable days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCountMode {
    /// Days reset at midnight; the arrival day itself counts as day 1.
    /// A package arriving at 23:59 and evaluated at 00:00 is on day 2.
    Calendar,
    /// 24-hour blocks from the exact arrival instant; any started block
    /// counts in full.
    Rolling,
}

/// Chargeable day count: elapsed days in the given mode, minus the grace
/// period, clamped at zero.
pub fn effective_days(
    arrival: DateTime<Utc>,
    now: DateTime<Utc>,
    mode: DayCountMode,
    grace_period_days: u32,
) -> u32 {
    let days = match mode {
        DayCountMode::Calendar => calendar_days(arrival, now),
        DayCountMode::Rolling => rolling_days(arrival, now),
    };
    (days - i64::from(grace_period_days)).max(0) as u32
}

fn calendar_days(arrival: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    // +1 because the arrival day is day 1.
    (now.date_naive() - arrival.date_naive()).num_days() + 1
}

fn rolling_days(arrival: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let duration_ms = (now - arrival).num_milliseconds();
    // Ceiling division; `div_ceil` on signed integers is still unstable.
    let floor = duration_ms.div_euclid(MILLISECONDS_PER_DAY);
    if duration_ms.rem_euclid(MILLISECONDS_PER_DAY) == 0 {
        floor
    } else {
        floor + 1
    }
}
