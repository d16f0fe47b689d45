pub mod coordinate;
pub mod depth;
pub mod output;

pub use coordinate::CoordinateRecord;
pub use depth::DepthRecord;
pub use output::OutputRecord;
