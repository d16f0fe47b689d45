/// Characters a filename may not carry on common filesystems.
const RESERVED_FILENAME_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|', '\r', '\n'];

/// Blank or `hh:mm:ss` with hours 0-23 and minutes/seconds 0-59, one or two
/// digits per component.
pub fn validate_clock_delta(delta: Option<&str>) -> bool {
    match delta {
        None => true,
        Some(delta) if delta.is_empty() => true,
        Some(delta) => is_clock_time(delta),
    }
}

/// Blank or a plain decimal numeral: digits with at most one `.`.
pub fn validate_decimal_offset(offset: Option<&str>) -> bool {
    match offset {
        None => true,
        Some(offset) => {
            offset.chars().all(|c| c.is_ascii_digit() || c == '.')
                && offset.matches('.').count() <= 1
        }
    }
}

/// Required, and free of path separators and reserved characters.
pub fn validate_output_filename(filename: &str) -> bool {
    !filename.is_empty() && !filename.contains(RESERVED_FILENAME_CHARS)
}

fn is_clock_time(text: &str) -> bool {
    let parts: Vec<&str> = text.split(':').collect();
    let [hours, minutes, seconds] = parts.as_slice() else {
        return false;
    };
    component_within(hours, 23) && component_within(minutes, 59) && component_within(seconds, 59)
}

fn component_within(part: &str, max: u32) -> bool {
    (1..=2).contains(&part.len())
        && part.bytes().all(|b| b.is_ascii_digit())
        && part.parse::<u32>().map_or(false, |value| value <= max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_delta_accepts_blank_and_valid_times() {
        assert!(validate_clock_delta(None));
        assert!(validate_clock_delta(Some("")));
        assert!(validate_clock_delta(Some("00:00:00")));
        assert!(validate_clock_delta(Some("9:5:7")));
        assert!(validate_clock_delta(Some("23:59:59")));
    }

    #[test]
    fn clock_delta_rejects_out_of_range_components() {
        assert!(!validate_clock_delta(Some("25:00:00")));
        assert!(!validate_clock_delta(Some("24:00:00")));
        assert!(!validate_clock_delta(Some("12:60:00")));
        assert!(!validate_clock_delta(Some("12:00")));
        assert!(!validate_clock_delta(Some("012:00:00")));
        assert!(!validate_clock_delta(Some("-1:00:00")));
    }

    #[test]
    fn decimal_offsets() {
        assert!(validate_decimal_offset(None));
        assert!(validate_decimal_offset(Some("")));
        assert!(validate_decimal_offset(Some("1.25")));
        assert!(validate_decimal_offset(Some(".5")));
        assert!(!validate_decimal_offset(Some("1.2.5")));
        assert!(!validate_decimal_offset(Some("-1")));
        assert!(!validate_decimal_offset(Some("1,5")));
    }

    #[test]
    fn output_filenames() {
        assert!(validate_output_filename("survey-2021.csv"));
        assert!(!validate_output_filename(""));
        assert!(!validate_output_filename("out/survey.csv"));
        assert!(!validate_output_filename("C:survey.csv"));
        assert!(!validate_output_filename("survey?.csv"));
    }
}
