pub mod fuzzy;
pub mod interval;

pub use interval::Interval;
