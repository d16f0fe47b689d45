pub mod clock;
pub mod coerce;
pub mod height;

pub use clock::ClockHelper;
pub use coerce::{coerce_number, coerce_offset, truthy};
pub use height::HeightHelper;
