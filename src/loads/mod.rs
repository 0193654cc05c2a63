//! Point and distributed load types

mod distributed;
mod point_load;

pub use distributed::{DistLoad, IntervalLoad};
pub use point_load::PointLoad;
