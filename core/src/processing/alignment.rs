use serde::{Deserialize, Serialize};

use crate::records::{CoordinateRecord, DepthRecord, OutputRecord};
use crate::telemetry::log::LogManager;

/// How many coordinate fixes obtained a sounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coverage {
    None,
    Partial,
    Full,
}

impl Coverage {
    pub fn classify(matched: usize, coordinates: usize) -> Self {
        if matched == 0 {
            Coverage::None
        } else if matched == coordinates {
            Coverage::Full
        } else {
            Coverage::Partial
        }
    }
}

/// First index pair whose time keys agree. Frozen once found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchor {
    pub coordinate_index: usize,
    pub depth_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    pub anchor: Option<Anchor>,
    pub records: Vec<OutputRecord>,
    pub coverage: Coverage,
}

/// Pairs both series from the first exact time-key match onward.
///
/// Until an anchor exists, each fix is looked up among all soundings. After
/// that the two series are walked in lockstep without comparing keys again,
/// and pairing stops at the end of the soundings.
pub fn align(coordinates: &[CoordinateRecord], depths: &[DepthRecord]) -> Alignment {
    let logger = LogManager::new();
    let mut anchor: Option<Anchor> = None;
    let mut records = Vec::new();

    for (coordinate_index, coordinate) in coordinates.iter().enumerate() {
        if anchor.is_none() {
            anchor = find_anchor(depths, coordinate).map(|depth_index| Anchor {
                coordinate_index,
                depth_index,
            });
            if let Some(found) = anchor {
                logger.record(&format!(
                    "anchor at coordinate {} / depth {} (key {} ms)",
                    found.coordinate_index, found.depth_index, coordinate.time_key_millis
                ));
            }
        }
        let Some(current) = anchor else {
            continue;
        };

        let depth_index = current.depth_index + (coordinate_index - current.coordinate_index);
        let Some(depth) = depths.get(depth_index) else {
            break;
        };
        records.push(OutputRecord::pair(records.len() + 1, coordinate, depth));
    }

    let coverage = Coverage::classify(records.len(), coordinates.len());
    Alignment {
        anchor,
        records,
        coverage,
    }
}

fn find_anchor(depths: &[DepthRecord], coordinate: &CoordinateRecord) -> Option<usize> {
    depths
        .iter()
        .position(|depth| depth.time_key_millis == coordinate.time_key_millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fix(seconds: i64, x: &str, y: &str) -> CoordinateRecord {
        let time = format!("00:00:{:02}", seconds);
        CoordinateRecord::new(&time, seconds * 1_000, x, y)
    }

    fn sounding(id: i64, seconds: i64, height: f64) -> DepthRecord {
        DepthRecord {
            id: id as f64,
            raw_time_diff: format!("0 0 {}", seconds),
            time_key_millis: seconds * 1_000,
            raw_height: height,
            height_with_delta: height,
            height_with_base_and_delta: height,
        }
    }

    #[test]
    fn single_exact_match_is_full_coverage() {
        let alignment = align(&[fix(5, "1", "2")], &[sounding(1, 5, 5.0)]);
        assert_eq!(alignment.coverage, Coverage::Full);
        assert_eq!(
            alignment.records,
            vec![OutputRecord {
                sequence_number: 1,
                y: "2".into(),
                x: "1".into(),
                height: "5.00".into(),
            }]
        );
    }

    #[test]
    fn no_matching_key_yields_nothing() {
        let alignment = align(&[fix(5, "1", "2"), fix(6, "1", "2")], &[sounding(1, 9, 5.0)]);
        assert_eq!(alignment.anchor, None);
        assert!(alignment.records.is_empty());
        assert_eq!(alignment.coverage, Coverage::None);
    }

    #[test]
    fn pairing_stops_when_soundings_run_out() {
        let coordinates = [fix(4, "a", "b"), fix(5, "c", "d"), fix(6, "e", "f")];
        let depths = [sounding(1, 1, 1.0), sounding(2, 5, 2.345)];
        let alignment = align(&coordinates, &depths);
        assert_eq!(
            alignment.anchor,
            Some(Anchor {
                coordinate_index: 1,
                depth_index: 1
            })
        );
        assert_eq!(alignment.records.len(), 1);
        assert_eq!(alignment.records[0].x, "c");
        assert_eq!(alignment.records[0].sequence_number, 1);
        assert_eq!(alignment.coverage, Coverage::Partial);
    }

    #[test]
    fn anchor_at_first_sounding_is_honoured() {
        let alignment = align(&[fix(3, "1", "2")], &[sounding(1, 3, 7.0), sounding(2, 3, 8.0)]);
        assert_eq!(alignment.anchor.map(|a| a.depth_index), Some(0));
        assert_eq!(alignment.records[0].height, "7.00");
    }

    #[test]
    fn drift_after_anchor_is_not_corrected() {
        let coordinates = [fix(1, "a", "a"), fix(2, "b", "b"), fix(9, "c", "c")];
        let depths = [sounding(1, 1, 1.0), sounding(2, 2, 2.0), sounding(3, 3, 3.0)];
        let alignment = align(&coordinates, &depths);
        assert_eq!(alignment.coverage, Coverage::Full);
        assert_eq!(alignment.records[2].height, "3.00");
    }

    #[test]
    fn alignment_is_repeatable() {
        let coordinates = [fix(4, "a", "b"), fix(5, "c", "d")];
        let depths = [sounding(1, 5, 2.0), sounding(2, 6, 3.0)];
        assert_eq!(align(&coordinates, &depths), align(&coordinates, &depths));
    }
}
