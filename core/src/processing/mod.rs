pub mod alignment;
pub mod export;

pub use alignment::{align, Alignment, Anchor, Coverage};
pub use export::{save, to_csv, ExportError, OutputTarget, CSV_MIME_TYPE};
