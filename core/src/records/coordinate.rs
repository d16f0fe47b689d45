use serde::{Deserialize, Serialize};

use crate::prelude::SeriesRecord;

/// One position fix from the coordinates file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinateRecord {
    pub time: String,
    /// Milliseconds since the configured clock delta.
    pub time_key_millis: i64,
    pub x: String,
    pub y: String,
}

impl CoordinateRecord {
    pub fn new(time: &str, time_key_millis: i64, x: &str, y: &str) -> Self {
        Self {
            time: time.to_string(),
            time_key_millis,
            x: x.to_string(),
            y: y.to_string(),
        }
    }
}

impl SeriesRecord for CoordinateRecord {
    /// A fix whose key lands exactly on zero is rejected along with blank fields.
    fn is_valid(&self) -> bool {
        !self.time.is_empty()
            && self.time_key_millis != 0
            && !self.x.is_empty()
            && !self.y.is_empty()
    }
}
