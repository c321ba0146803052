use crate::constants::{WGS84_A_KM, WGS84_F};
use serde::Deserialize;

/// Reference ellipsoid used by the geodetic conversions.
///
/// Built once and handed to the converters by reference; nothing reads it from
/// global state.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Ellipsoid {
    pub semi_major_axis_km: f64,
    pub flattening: f64,
}

impl Ellipsoid {
    pub const WGS84: Ellipsoid = Ellipsoid {
        semi_major_axis_km: WGS84_A_KM,
        flattening: WGS84_F,
    };

    pub fn new(semi_major_axis_km: f64, flattening: f64) -> Self {
        Self {
            semi_major_axis_km,
            flattening,
        }
    }

    /// First eccentricity squared, e² = f(2 - f)
    pub fn eccentricity_squared(&self) -> f64 {
        self.flattening * (2.0 - self.flattening)
    }

    /// Polar radius b = a(1 - f) [km]
    pub fn semi_minor_axis_km(&self) -> f64 {
        self.semi_major_axis_km * (1.0 - self.flattening)
    }

    /// Prime-vertical radius of curvature N at a geodetic latitude [km]
    pub fn prime_vertical_radius_km(&self, latitude_rad: f64) -> f64 {
        let sin_lat = latitude_rad.sin();
        self.semi_major_axis_km / (1.0 - self.eccentricity_squared() * sin_lat * sin_lat).sqrt()
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}
