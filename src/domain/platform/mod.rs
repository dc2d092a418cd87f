//! Platform domain module

mod overflow;
mod platform_id;

pub use overflow::OverflowPolicy;
pub use platform_id::{Platform, ALL_PLATFORMS};
