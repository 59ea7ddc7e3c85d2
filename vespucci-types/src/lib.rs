//! Trait based geographic and cartesian types used by the Vespucci extension
//! toolkit.
//!
//! Host surfaces and extensions exchange two kinds of positions:
//!
//! * geographic coordinates ([`geo::GeoPoint`]) - latitude and longitude on
//!   the surface of the Earth, used to anchor overlay elements;
//! * cartesian coordinates ([`cartesian::CartesianPoint2d`]) - projected map
//!   or screen coordinates, used to place elements on the display surface.
//!
//! Both sides are specified as traits so that an application can plug its own
//! point types into the toolkit. The crate also ships simple implementations
//! ([`geo::GeoPoint2d`], [`cartesian::Point2d`]) and a [`geo::Projection`]
//! between the two ([`geo::WebMercator`]).

pub mod cartesian;
pub mod geo;
