//! Built-in calculators, one per calculation kind.

pub mod percent_difference;
pub mod percent_increase;
pub mod percent_of;
pub mod value_from_percent;
pub mod what_percent;
