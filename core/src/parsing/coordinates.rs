use crate::math::ClockHelper;
use crate::prelude::SeriesParser;
use crate::records::CoordinateRecord;

/// Parses `time   x   y` lines, keying each fix against the clock delta.
#[derive(Debug, Clone, Default)]
pub struct CoordinateParser {
    clock_delta: Option<String>,
}

impl CoordinateParser {
    pub fn new(clock_delta: Option<&str>) -> Self {
        Self {
            clock_delta: clock_delta.map(str::to_string),
        }
    }
}

impl SeriesParser for CoordinateParser {
    type Record = CoordinateRecord;

    const ARITY: usize = 3;

    fn parse_fields(&self, fields: &[&str]) -> CoordinateRecord {
        let time = fields[0];
        let time_key_millis = ClockHelper::time_key_millis(time, self.clock_delta.as_deref());
        CoordinateRecord::new(time, time_key_millis, fields[1], fields[2])
    }
}
