use chrono::{Duration, NaiveDate, NaiveDateTime};

const TIME_SEPARATOR: char = ':';
const ELAPSED_SEPARATOR: char = ' ';

const MILLIS_PER_HOUR: i64 = 3_600_000;
const MILLIS_PER_MINUTE: i64 = 60_000;
const MILLIS_PER_SECOND: i64 = 1_000;

/// Time-key arithmetic shared by both series.
///
/// Keys are signed milliseconds. Coordinate keys are measured from the clock
/// delta, depth keys are the elapsed time the sounder already reports.
pub struct ClockHelper;

impl ClockHelper {
    /// Fixed date every time of day is projected onto.
    pub fn reference_instant() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default()
    }

    /// Milliseconds between `time` and `delta`, both `hh:mm:ss` on the
    /// reference date. A missing or blank delta means midnight.
    pub fn time_key_millis(time: &str, delta: Option<&str>) -> i64 {
        let instant = Self::instant_of(time);
        let origin = match delta.filter(|delta| !delta.is_empty()) {
            Some(delta) => Self::instant_of(delta),
            None => Self::reference_instant(),
        };
        (instant - origin).num_milliseconds()
    }

    /// Milliseconds of a single-space separated `H M S` elapsed time.
    pub fn elapsed_millis(text: &str) -> i64 {
        let mut parts = text.split(ELAPSED_SEPARATOR).map(elapsed_component);
        let hours = parts.next().unwrap_or(0.0);
        let minutes = parts.next().unwrap_or(0.0);
        let seconds = parts.next().unwrap_or(0.0);

        let millis = hours * MILLIS_PER_HOUR as f64
            + minutes * MILLIS_PER_MINUTE as f64
            + seconds * MILLIS_PER_SECOND as f64;
        if millis.is_finite() {
            millis.round() as i64
        } else {
            0
        }
    }

    fn instant_of(time: &str) -> NaiveDateTime {
        let mut parts = time.split(TIME_SEPARATOR).map(clock_component);
        let hours = parts.next().unwrap_or(0);
        let minutes = parts.next().unwrap_or(0);
        let seconds = parts.next().unwrap_or(0);

        let offset = hours
            .saturating_mul(MILLIS_PER_HOUR)
            .saturating_add(minutes.saturating_mul(MILLIS_PER_MINUTE))
            .saturating_add(seconds.saturating_mul(MILLIS_PER_SECOND))
            .max(-i64::MAX);

        let reference = Self::reference_instant();
        reference
            .checked_add_signed(Duration::milliseconds(offset))
            .unwrap_or(reference)
    }
}

/// Whole units of a clock component; blank or non-numeric text counts as zero.
fn clock_component(part: &str) -> i64 {
    let value = elapsed_component(part);
    value.trunc() as i64
}

fn elapsed_component(part: &str) -> f64 {
    let trimmed = part.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}
