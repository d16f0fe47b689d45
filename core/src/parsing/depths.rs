use crate::math::{coerce_number, ClockHelper, HeightHelper};
use crate::prelude::SeriesParser;
use crate::records::DepthRecord;

/// Parses `id   elapsed   height` lines and applies the vertical offsets.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthParser {
    antenna_delta: f64,
    instrument_base: f64,
}

impl DepthParser {
    pub fn new(antenna_delta: f64, instrument_base: f64) -> Self {
        Self {
            antenna_delta,
            instrument_base,
        }
    }
}

impl SeriesParser for DepthParser {
    type Record = DepthRecord;

    const ARITY: usize = 3;

    fn parse_fields(&self, fields: &[&str]) -> DepthRecord {
        let id = coerce_number(fields[0]);
        let raw_time_diff = fields[1];
        let raw_height = coerce_number(fields[2]);

        DepthRecord {
            id,
            raw_time_diff: raw_time_diff.to_string(),
            time_key_millis: ClockHelper::elapsed_millis(raw_time_diff),
            raw_height,
            height_with_delta: HeightHelper::with_delta(raw_height, self.antenna_delta),
            height_with_base_and_delta: HeightHelper::with_base_and_delta(
                raw_height,
                self.instrument_base,
                self.antenna_delta,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{all_valid, parse_content};

    #[test]
    fn parses_soundings_with_offsets() {
        let parser = DepthParser::new(0.5, 10.0);
        let records = parse_content(&parser, "1   0 0 5   -4.0\r\n2   0 0 6   4.5\r\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 1.0);
        assert_eq!(records[0].time_key_millis, 5_000);
        assert_eq!(records[0].height_with_delta, 4.5);
        assert_eq!(records[0].height_with_base_and_delta, 5.5);
        assert_eq!(records[1].height_with_base_and_delta, 5.0);
        assert!(all_valid(&records));
    }

    #[test]
    fn unparseable_height_invalidates_the_file() {
        let records = parse_content(&DepthParser::default(), "1   0 0 5   deep");
        assert!(records[0].raw_height.is_nan());
        assert!(!all_valid(&records));
    }

    #[test]
    fn fractional_id_counts_as_present() {
        let records = parse_content(&DepthParser::default(), "0.5   0 0 5   3.0");
        assert_eq!(records[0].id, 0.5);
        assert!(all_valid(&records));

        let records = parse_content(&DepthParser::default(), "0   0 0 5   3.0");
        assert!(!all_valid(&records));
    }

    #[test]
    fn sounding_at_elapsed_zero_is_rejected() {
        let records = parse_content(&DepthParser::default(), "1   0 0 0   3.0");
        assert!(!all_valid(&records));
    }
}
