//! Number and time formatting for card labels.
//!
//! Output follows en-US conventions: `1,234` in standard notation, `1.2K` in
//! compact notation, `3 days ago` for relative times and
//! `January 5, 2024 at 3:04 PM` for exact timestamps.

use chrono::{DateTime, Utc};

/// Notation used by [`format_number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// Abbreviated magnitude, e.g. `1.2K`.
    Compact,
    /// Full digits with thousands separators, e.g. `1,234`.
    Standard,
}

const COMPACT_UNITS: [(u32, &str); 4] = [(3, "K"), (6, "M"), (9, "B"), (12, "T")];

/// Formats a count in the given notation.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_number(1234, Notation::Compact), "1.2K");
/// assert_eq!(format_number(1234, Notation::Standard), "1,234");
/// ```
pub fn format_number(n: u64, notation: Notation) -> String {
    match notation {
        Notation::Compact => format_compact(n),
        Notation::Standard => group_thousands(u128::from(n)),
    }
}

/// Compact notation.
///
/// A scaled value with one integer digit keeps at most one fraction digit,
/// larger scaled values round to an integer. Halves round away from zero.
/// Integers past the largest unit are grouped like standard notation.
fn format_compact(n: u64) -> String {
    if n < 1_000 {
        return n.to_string();
    }

    let mut unit = COMPACT_UNITS
        .iter()
        .rposition(|(exp, _)| u128::from(n) >= 10u128.pow(*exp))
        .unwrap_or(0);

    loop {
        let (exp, suffix) = COMPACT_UNITS[unit];
        let divisor = 10u128.pow(exp);
        let value = u128::from(n);

        // Scaled value in tenths when it has a single integer digit.
        let (tenths, whole) = if value < divisor * 10 {
            let tenths = (value * 10 + divisor / 2) / divisor;
            (Some(tenths), tenths / 10)
        } else {
            (None, (value + divisor / 2) / divisor)
        };

        if whole >= 1_000 && unit + 1 < COMPACT_UNITS.len() {
            unit += 1;
            continue;
        }

        return match tenths {
            Some(t) if t % 10 != 0 && t < 100 => format!("{}.{}{}", t / 10, t % 10, suffix),
            _ => format!("{}{suffix}", group_thousands(whole)),
        };
    }
}

/// Inserts `,` between groups of three digits.
fn group_thousands(n: u128) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

const MS_PER_MINUTE: i64 = 60_000;
const MINUTES_PER_DAY: i64 = 1_440;
const MINUTES_PER_MONTH: i64 = 43_200;
const MINUTES_PER_YEAR: i64 = 525_600;

/// Formats the distance between `instant` and `now` with a suffix.
///
/// Picks a single unit without qualifiers such as "about" or "over":
/// seconds under a minute, minutes under an hour, hours under a day, days
/// under 30 days, months under 365 days, years beyond. Counts round half up.
///
/// # Examples
///
/// ```ignore
/// // three days before now
/// assert_eq!(format_relative(now - Duration::days(3), now), "3 days ago");
/// // ten minutes after now
/// assert_eq!(format_relative(now + Duration::minutes(10), now), "in 10 minutes");
/// ```
pub fn format_relative(instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta_ms = (instant - now).num_milliseconds();
    let ms = delta_ms.abs();
    let minutes = ms / MS_PER_MINUTE;

    let (count, unit) = if minutes < 1 {
        (round_div(ms, 1_000), "second")
    } else if minutes < 60 {
        (round_div(ms, MS_PER_MINUTE), "minute")
    } else if minutes < MINUTES_PER_DAY {
        (round_div(ms, 60 * MS_PER_MINUTE), "hour")
    } else if minutes < MINUTES_PER_MONTH {
        (round_div(ms, MINUTES_PER_DAY * MS_PER_MINUTE), "day")
    } else if minutes < MINUTES_PER_YEAR {
        match round_div(ms, MINUTES_PER_MONTH * MS_PER_MINUTE) {
            12 => (1, "year"),
            months => (months, "month"),
        }
    } else {
        (round_div(ms, MINUTES_PER_YEAR * MS_PER_MINUTE), "year")
    };

    let plural = if count == 1 { "" } else { "s" };
    let distance = format!("{count} {unit}{plural}");

    if delta_ms > 0 {
        format!("in {distance}")
    } else {
        format!("{distance} ago")
    }
}

/// Formats an exact timestamp, e.g. `January 5, 2024 at 3:04 PM`.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.format("%B %-d, %Y at %-I:%M %p").to_string()
}

fn round_div(value: i64, divisor: i64) -> i64 {
    (value + divisor / 2) / divisor
}
