use crate::errors::TrackError;
use crate::models::EcefSample;

/// Speed [m/s] along an ECEF track from first-order backward differences.
///
/// `v[0]` is 0 since there is no earlier sample; for `i >= 1`
/// `v[i] = |p[i] - p[i-1]| / (t[i] - t[i-1])`.
/// Every timestep must be strictly positive.
pub fn ecef_velocity(t: &[f64], x: &[f64], y: &[f64], z: &[f64]) -> Result<Vec<f64>, TrackError> {
    for (name, series) in [("x", x), ("y", y), ("z", z)] {
        check_len(name, t.len(), series.len())?;
    }

    let positions: Vec<EcefSample> = x
        .iter()
        .zip(y)
        .zip(z)
        .map(|((&x, &y), &z)| EcefSample::new(x, y, z))
        .collect();

    ecef_velocity_from_samples(t, &positions)
}

/// Same as [`ecef_velocity`] over ECEF records.
pub fn ecef_velocity_from_samples(
    t: &[f64],
    positions: &[EcefSample],
) -> Result<Vec<f64>, TrackError> {
    check_len("positions", t.len(), positions.len())?;

    if positions.is_empty() {
        return Ok(Vec::new());
    }

    let mut v = Vec::with_capacity(positions.len());
    v.push(0.0);

    for i in 1..positions.len() {
        let dt = t[i] - t[i - 1];
        if dt.is_nan() || dt <= 0.0 {
            return Err(TrackError::DegenerateTimestep { index: i, dt });
        }
        let displacement = positions[i].to_vector() - positions[i - 1].to_vector();
        v.push(displacement.norm() / dt);
    }

    Ok(v)
}

fn check_len(name: &'static str, expected: usize, found: usize) -> Result<(), TrackError> {
    if expected != found {
        return Err(TrackError::ShapeMismatch {
            name,
            expected,
            found,
        });
    }
    Ok(())
}
