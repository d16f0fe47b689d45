use crate::prelude::{SeriesParser, SeriesRecord, INPUT_SEPARATOR};

/// Splits a line on the input separator, padding to `arity` with blank fields.
pub fn split_fields(line: &str, arity: usize) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(INPUT_SEPARATOR).collect();
    if fields.len() < arity {
        fields.resize(arity, "");
    }
    fields
}

/// Parses every non-empty line of `content` in file order.
///
/// Short lines are not rejected here; they surface as records with blank
/// fields and fail [`all_valid`] instead.
pub fn parse_content<P: SeriesParser>(parser: &P, content: &str) -> Vec<P::Record> {
    content
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| parser.parse_fields(&split_fields(line, P::ARITY)))
        .collect()
}

/// True when no record is missing a field.
pub fn all_valid<R: SeriesRecord>(records: &[R]) -> bool {
    records.iter().all(SeriesRecord::is_valid)
}
