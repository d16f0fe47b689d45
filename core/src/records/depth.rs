use serde::{Deserialize, Serialize};

use crate::math::truthy;
use crate::prelude::SeriesRecord;

/// One sounding from the depths file together with its calibrated heights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthRecord {
    /// Sounding number as written; kept as a number so fractional ids stay non-zero.
    pub id: f64,
    pub raw_time_diff: String,
    /// Elapsed milliseconds since the sounder started recording.
    pub time_key_millis: i64,
    pub raw_height: f64,
    pub height_with_delta: f64,
    pub height_with_base_and_delta: f64,
}

impl SeriesRecord for DepthRecord {
    /// Zero counts as missing for every numeric field.
    fn is_valid(&self) -> bool {
        truthy(self.id)
            && !self.raw_time_diff.is_empty()
            && self.time_key_millis != 0
            && truthy(self.raw_height)
            && truthy(self.height_with_delta)
            && truthy(self.height_with_base_and_delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sounding(id: i64, time_key_millis: i64, raw_height: f64) -> DepthRecord {
        DepthRecord {
            id: id as f64,
            raw_time_diff: "0 0 5".into(),
            time_key_millis,
            raw_height,
            height_with_delta: raw_height.abs(),
            height_with_base_and_delta: raw_height.abs(),
        }
    }

    #[test]
    fn complete_sounding_is_valid() {
        assert!(sounding(1, 5_000, 5.0).is_valid());
    }

    #[test]
    fn zero_or_nan_fields_are_invalid() {
        assert!(!sounding(0, 5_000, 5.0).is_valid());
        assert!(!sounding(1, 0, 5.0).is_valid());
        assert!(!sounding(1, 5_000, 0.0).is_valid());
        assert!(!sounding(1, 5_000, f64::NAN).is_valid());
        let mut unnumbered = sounding(1, 5_000, 5.0);
        unnumbered.id = f64::NAN;
        assert!(!unnumbered.is_valid());
    }
}
