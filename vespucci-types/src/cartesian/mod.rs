//! Types and traits for positions in cartesian coordinates.

mod point;
mod size;

pub use point::{CartesianPoint2d, NewCartesianPoint2d, Point2, Point2d};
pub use size::Size;
