use serde::{Deserialize, Serialize};

use crate::records::{CoordinateRecord, DepthRecord};

/// One line of the merged result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    /// Dense, starting at 1.
    pub sequence_number: usize,
    pub y: String,
    pub x: String,
    /// Calibrated height with exactly two decimals.
    pub height: String,
}

impl OutputRecord {
    pub fn pair(sequence_number: usize, coordinate: &CoordinateRecord, depth: &DepthRecord) -> Self {
        Self {
            sequence_number,
            y: coordinate.y.clone(),
            x: coordinate.x.clone(),
            height: format_height(depth.height_with_base_and_delta),
        }
    }

    /// Cells in output column order.
    pub fn fields(&self) -> [String; 4] {
        [
            self.sequence_number.to_string(),
            self.y.clone(),
            self.x.clone(),
            self.height.clone(),
        ]
    }
}

/// Two decimals, with exact half-cent ties rounded away from zero.
pub fn format_height(height: f64) -> String {
    let rounded = (height * 100.0).round() / 100.0;
    format!("{:.2}", rounded)
}
