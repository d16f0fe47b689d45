use serde::{Deserialize, Serialize};

/// Field separator used by both input files.
pub const INPUT_SEPARATOR: &str = "   ";
/// Field separator used by the merged output file.
pub const OUTPUT_SEPARATOR: &str = " ";

/// Identifies which of the two input series a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Coordinates,
    Depths,
}

/// Calibration values as entered by the operator, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalibrationInputs {
    /// Clock skew of the positioning receiver, `hh:mm:ss`.
    pub clock_delta: Option<String>,
    /// Vertical antenna offset added to every sounding.
    pub antenna_delta: Option<String>,
    /// Reference elevation of the instrument.
    pub instrument_base: Option<String>,
}

/// A parsed record that can report whether all of its fields are present.
pub trait SeriesRecord {
    fn is_valid(&self) -> bool;
}

/// Maps the fields of one input line into a typed record.
pub trait SeriesParser {
    type Record: SeriesRecord;

    /// Number of fields a well-formed line carries.
    const ARITY: usize;

    /// `fields` always holds at least `ARITY` entries; missing ones are empty.
    fn parse_fields(&self, fields: &[&str]) -> Self::Record;
}
