//! Geographic point traits and the plain lat/lon implementation.

use num_traits::Float;
use serde::{Deserialize, Serialize};

/// A point on the surface of a celestial body, given as latitude and
/// longitude in degrees.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;

    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;

    /// Latitude in radians.
    fn lat_rad(&self) -> Self::Num {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> Self::Num {
        self.lon().to_radians()
    }
}

/// A geographic point that can be constructed from a lat/lon pair.
pub trait NewGeoPoint<N = f64>: GeoPoint<Num = N> + Sized {
    /// Creates a new point with the given latitude and longitude in degrees.
    fn latlon(lat: N, lon: N) -> Self;

    /// Creates a new point with the given longitude and latitude in degrees.
    fn lonlat(lon: N, lat: N) -> Self {
        Self::latlon(lat, lon)
    }
}

/// 2d point on the surface of a celestial body.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct GeoPoint2d {
    lat: f64,
    lon: f64,
}

impl GeoPoint for GeoPoint2d {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl NewGeoPoint<f64> for GeoPoint2d {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl GeoPoint2d {
    /// Creates a new point from another geographic point.
    pub fn from(other: &impl GeoPoint<Num = f64>) -> Self {
        Self {
            lat: other.lat(),
            lon: other.lon(),
        }
    }
}

/// Creates a [`GeoPoint2d`] from the given latitude and longitude in degrees.
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        <$crate::geo::GeoPoint2d as $crate::geo::NewGeoPoint<f64>>::latlon($lat, $lon)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latlon_macro() {
        let point = latlon!(10.0, 20.0);
        assert_eq!(point.lat(), 10.0);
        assert_eq!(point.lon(), 20.0);
    }

    #[test]
    fn radians() {
        let point = latlon!(90.0, -180.0);
        approx::assert_abs_diff_eq!(point.lat_rad(), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
        approx::assert_abs_diff_eq!(point.lon_rad(), -std::f64::consts::PI, epsilon = 1e-12);
    }
}
