pub mod coordinates;
pub mod depths;
pub mod parser;
pub mod source;

pub use coordinates::CoordinateParser;
pub use depths::DepthParser;
pub use parser::{all_valid, parse_content, split_fields};
pub use source::{read_source, InputSource, SourceError};
