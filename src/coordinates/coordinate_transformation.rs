use crate::config::Ellipsoid;
use crate::constants::{GEODETIC_MAX_ITERATIONS, GEODETIC_TOLERANCE_RAD, KM_TO_M};
use crate::errors::TrackError;
use crate::models::{EcefSample, Track};

/// Convert geodetic coordinates to ECEF.
///
/// Latitude and longitude are in degrees, altitude in kilometers. The returned
/// position is in meters. Non-finite inputs propagate as NaN.
pub fn lla_to_ecef(
    latitude: f64,
    longitude: f64,
    altitude: f64,
    ellipsoid: &Ellipsoid,
) -> EcefSample {
    let lat = latitude.to_radians();
    let lon = longitude.to_radians();
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_lon, cos_lon) = lon.sin_cos();

    let n = ellipsoid.prime_vertical_radius_km(lat);
    let e2 = ellipsoid.eccentricity_squared();

    let x = (n + altitude) * cos_lat * cos_lon;
    let y = (n + altitude) * cos_lat * sin_lon;
    let z = (n * (1.0 - e2) + altitude) * sin_lat;

    EcefSample::new(x * KM_TO_M, y * KM_TO_M, z * KM_TO_M)
}

/// Convert a whole track to ECEF, one output per sample in the same order.
///
/// Fails on the first non-finite coordinate instead of letting NaN reach the
/// velocity estimate.
pub fn track_to_ecef(track: &Track, ellipsoid: &Ellipsoid) -> Result<Vec<EcefSample>, TrackError> {
    track
        .samples()
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            for (field, value) in [
                ("latitude", sample.latitude),
                ("longitude", sample.longitude),
                ("altitude", sample.altitude),
            ] {
                if !value.is_finite() {
                    return Err(TrackError::InvalidInput { index, field });
                }
            }
            Ok(lla_to_ecef(
                sample.latitude,
                sample.longitude,
                sample.altitude,
                ellipsoid,
            ))
        })
        .collect()
}

/// Convert an ECEF position [m] back to (latitude [deg], longitude [deg], altitude [km])
pub fn ecef_to_lla(position: &EcefSample, ellipsoid: &Ellipsoid) -> (f64, f64, f64) {
    let x = position.x / KM_TO_M;
    let y = position.y / KM_TO_M;
    let z = position.z / KM_TO_M;

    let a = ellipsoid.semi_major_axis_km;
    let b = ellipsoid.semi_minor_axis_km();
    let e2 = ellipsoid.eccentricity_squared();

    let longitude = y.atan2(x);
    let p = (x * x + y * y).sqrt();

    // On the polar axis
    if p < 1e-10 {
        let latitude: f64 = if z < 0.0 { -90.0 } else { 90.0 };
        return (latitude, longitude.to_degrees(), z.abs() - b);
    }

    let mut latitude = z.atan2(p * (1.0 - e2));

    for _ in 0..GEODETIC_MAX_ITERATIONS {
        let n = ellipsoid.prime_vertical_radius_km(latitude);
        let h = geodetic_height(p, z, latitude, a, e2);

        let prev_lat = latitude;
        latitude = (z / p).atan2(1.0 - e2 * n / (n + h));

        if (latitude - prev_lat).abs() < GEODETIC_TOLERANCE_RAD {
            break;
        }
    }

    let altitude = geodetic_height(p, z, latitude, a, e2);

    (latitude.to_degrees(), longitude.to_degrees(), altitude)
}

// Height above the ellipsoid, well conditioned at every latitude
fn geodetic_height(p: f64, z: f64, latitude: f64, a: f64, e2: f64) -> f64 {
    let (sin_lat, cos_lat) = latitude.sin_cos();
    p * cos_lat + z * sin_lat - a * (1.0 - e2 * sin_lat * sin_lat).sqrt()
}
