use hifitime::Epoch;
use nalgebra as na;

/// One geodetic fix of the trajectory
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackSample {
    pub time: f64,      // Unix epoch [s]
    pub latitude: f64,  // WGS84 latitude [deg]
    pub longitude: f64, // WGS84 longitude [deg]
    pub altitude: f64,  // WGS84 altitude [km]
}

impl TrackSample {
    pub fn new(time: f64, latitude: f64, longitude: f64, altitude: f64) -> Self {
        TrackSample {
            time,
            latitude,
            longitude,
            altitude,
        }
    }

    /// Sample time as a UTC epoch
    pub fn epoch(&self) -> Epoch {
        Epoch::from_unix_seconds(self.time)
    }
}

/// Earth-Centered Earth-Fixed position [m]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EcefSample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl EcefSample {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        EcefSample { x, y, z }
    }

    pub fn to_vector(&self) -> na::Vector3<f64> {
        na::Vector3::new(self.x, self.y, self.z)
    }
}

impl From<na::Vector3<f64>> for EcefSample {
    fn from(v: na::Vector3<f64>) -> Self {
        EcefSample::new(v.x, v.y, v.z)
    }
}

/// Ordered sequence of samples, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Track {
    samples: Vec<TrackSample>,
}

impl Track {
    pub fn new(samples: Vec<TrackSample>) -> Self {
        Track { samples }
    }

    pub fn samples(&self) -> &[TrackSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time).collect()
    }

    /// First and last sample times, if any
    pub fn time_span(&self) -> Option<(f64, f64)> {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => Some((first.time, last.time)),
            _ => None,
        }
    }
}

impl From<Vec<TrackSample>> for Track {
    fn from(samples: Vec<TrackSample>) -> Self {
        Track::new(samples)
    }
}

impl FromIterator<TrackSample> for Track {
    fn from_iter<I: IntoIterator<Item = TrackSample>>(iter: I) -> Self {
        Track::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn time_span_of_empty_track() {
        assert_eq!(Track::default().time_span(), None);
    }

    #[test]
    fn time_span_and_times() {
        let track: Track = vec![
            TrackSample::new(10.0, 0.0, 0.0, 0.0),
            TrackSample::new(20.0, 1.0, 1.0, 1.0),
            TrackSample::new(35.0, 2.0, 2.0, 2.0),
        ]
        .into();
        assert_eq!(track.len(), 3);
        assert_eq!(track.times(), vec![10.0, 20.0, 35.0]);
        assert_eq!(track.time_span(), Some((10.0, 35.0)));
    }

    #[test]
    fn epoch_from_unix_time() {
        let sample = TrackSample::new(1532334000.0, 0.0, 0.0, 0.0);
        assert_abs_diff_eq!(sample.epoch().to_unix_seconds(), 1532334000.0, epsilon = 1e-3);
    }
}
