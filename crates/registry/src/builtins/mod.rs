//! Enumerations shipped with the crate.

pub mod shapes;
pub mod weekdays;

pub use shapes::Shapes;
pub use weekdays::WeekDays;
