use crate::config::{InterpolationMethod, OutOfRangePolicy};
use crate::errors::TrackError;

/// A one-dimensional curve through a set of samples.
pub trait Interpolant {
    /// Value of the curve at `t`. Outside the domain the first/last segment is
    /// continued.
    fn evaluate(&self, t: f64) -> f64;

    /// First and last abscissa
    fn domain(&self) -> (f64, f64);

    /// Evaluates `t` after applying the out-of-range policy.
    fn evaluate_checked(&self, t: f64, policy: OutOfRangePolicy) -> Result<f64, TrackError> {
        if !t.is_finite() {
            return Err(TrackError::InvalidInput {
                index: 0,
                field: "time_request",
            });
        }
        let (start, end) = self.domain();
        if t < start || t > end {
            match policy {
                OutOfRangePolicy::Reject => {
                    return Err(TrackError::OutOfRange {
                        requested: t,
                        start,
                        end,
                    })
                }
                OutOfRangePolicy::Extrapolate => {
                    log::warn!("Extrapolating to t={} outside [{}, {}]", t, start, end);
                }
            }
        }
        Ok(self.evaluate(t))
    }
}

/// Piecewise linear interpolation between bracketing samples.
#[derive(Debug, Clone)]
pub struct LinearInterpolant {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl LinearInterpolant {
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, TrackError> {
        validate_samples(x, y)?;
        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
        })
    }
}

impl Interpolant for LinearInterpolant {
    fn evaluate(&self, t: f64) -> f64 {
        let i = segment_index(&self.x, t);
        let fraction = (t - self.x[i]) / (self.x[i + 1] - self.x[i]);
        self.y[i] + (self.y[i + 1] - self.y[i]) * fraction
    }

    fn domain(&self) -> (f64, f64) {
        domain_of(&self.x)
    }
}

/// Cubic spline with zero second derivative at both ends.
///
/// Passes through every sample and is continuous up to the second derivative.
#[derive(Debug, Clone)]
pub struct NaturalCubicSpline {
    x: Vec<f64>,
    y: Vec<f64>,
    // Second derivative at each knot
    m: Vec<f64>,
}

impl NaturalCubicSpline {
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, TrackError> {
        validate_samples(x, y)?;
        let m = natural_second_derivatives(x, y);
        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
            m,
        })
    }
}

impl Interpolant for NaturalCubicSpline {
    fn evaluate(&self, t: f64) -> f64 {
        let i = segment_index(&self.x, t);
        let (x0, x1) = (self.x[i], self.x[i + 1]);
        let (y0, y1) = (self.y[i], self.y[i + 1]);
        let (m0, m1) = (self.m[i], self.m[i + 1]);
        let h = x1 - x0;
        let a = x1 - t;
        let b = t - x0;

        (m0 * a.powi(3) + m1 * b.powi(3)) / (6.0 * h)
            + (y0 / h - m0 * h / 6.0) * a
            + (y1 / h - m1 * h / 6.0) * b
    }

    fn domain(&self) -> (f64, f64) {
        domain_of(&self.x)
    }
}

/// Builds the interpolant selected by `method`.
pub fn build_interpolant(
    method: InterpolationMethod,
    x: &[f64],
    y: &[f64],
) -> Result<Box<dyn Interpolant>, TrackError> {
    let interpolant: Box<dyn Interpolant> = match method {
        InterpolationMethod::Linear => Box::new(LinearInterpolant::new(x, y)?),
        InterpolationMethod::NaturalCubicSpline => Box::new(NaturalCubicSpline::new(x, y)?),
    };
    Ok(interpolant)
}

/// Velocity at `time_request` from a sampled velocity series.
pub fn interpolate_velocity(
    time: &[f64],
    velocity: &[f64],
    time_request: f64,
    method: InterpolationMethod,
    policy: OutOfRangePolicy,
) -> Result<f64, TrackError> {
    build_interpolant(method, time, velocity)?.evaluate_checked(time_request, policy)
}

fn validate_samples(x: &[f64], y: &[f64]) -> Result<(), TrackError> {
    if x.len() != y.len() {
        return Err(TrackError::ShapeMismatch {
            name: "velocity",
            expected: x.len(),
            found: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(TrackError::InsufficientSamples {
            required: 2,
            found: x.len(),
        });
    }
    for (index, (&xi, &yi)) in x.iter().zip(y).enumerate() {
        if !xi.is_finite() {
            return Err(TrackError::InvalidInput {
                index,
                field: "time",
            });
        }
        if !yi.is_finite() {
            return Err(TrackError::InvalidInput {
                index,
                field: "velocity",
            });
        }
    }
    for i in 1..x.len() {
        let dt = x[i] - x[i - 1];
        if dt <= 0.0 {
            return Err(TrackError::DegenerateTimestep { index: i, dt });
        }
    }
    Ok(())
}

fn domain_of(x: &[f64]) -> (f64, f64) {
    (x[0], x[x.len() - 1])
}

// Index i of the segment [x[i], x[i+1]] used for t, clamped to the end segments
fn segment_index(x: &[f64], t: f64) -> usize {
    let upper = x.partition_point(|&xi| xi <= t);
    upper.saturating_sub(1).min(x.len() - 2)
}

// Solves the tridiagonal system for the knot second derivatives (Thomas algorithm)
fn natural_second_derivatives(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    let mut m = vec![0.0; n];
    if n < 3 {
        return m;
    }

    let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
    let slope: Vec<f64> = (0..n - 1).map(|i| (y[i + 1] - y[i]) / h[i]).collect();

    // Interior unknowns m[1..n-1]
    let size = n - 2;
    let mut c_prime = vec![0.0; size];
    let mut d_prime = vec![0.0; size];

    for k in 0..size {
        let i = k + 1;
        let lower = h[i - 1];
        let diag = 2.0 * (h[i - 1] + h[i]);
        let upper = h[i];
        let rhs = 6.0 * (slope[i] - slope[i - 1]);

        if k == 0 {
            c_prime[k] = upper / diag;
            d_prime[k] = rhs / diag;
        } else {
            let denom = diag - lower * c_prime[k - 1];
            c_prime[k] = upper / denom;
            d_prime[k] = (rhs - lower * d_prime[k - 1]) / denom;
        }
    }

    m[size] = d_prime[size - 1];
    for k in (0..size - 1).rev() {
        m[k + 1] = d_prime[k] - c_prime[k] * m[k + 2];
    }

    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use test_case::test_case;

    fn samples() -> (Vec<f64>, Vec<f64>) {
        let t = vec![0.0, 1.0, 2.5, 4.0, 4.5, 7.0];
        let v = vec![0.0, 12.0, 9.5, 30.0, 28.0, 41.0];
        (t, v)
    }

    #[test_case(InterpolationMethod::Linear; "linear")]
    #[test_case(InterpolationMethod::NaturalCubicSpline; "cubic")]
    fn exact_at_samples(method: InterpolationMethod) {
        let (t, v) = samples();
        for (tk, vk) in t.iter().zip(&v) {
            let value =
                interpolate_velocity(&t, &v, *tk, method, OutOfRangePolicy::Reject).unwrap();
            assert_abs_diff_eq!(value, *vk, epsilon = 1e-9);
        }
    }

    #[test]
    fn linear_midpoint() {
        let interp = LinearInterpolant::new(&[0.0, 10.0], &[100.0, 200.0]).unwrap();
        assert_relative_eq!(interp.evaluate(2.5), 125.0);
    }

    #[test]
    fn spline_reproduces_straight_line() {
        let t = [0.0, 1.0, 3.0, 6.0, 10.0];
        let v: Vec<f64> = t.iter().map(|ti| 3.0 * ti + 2.0).collect();
        let spline = NaturalCubicSpline::new(&t, &v).unwrap();
        for q in [0.5, 2.0, 4.2, 9.9] {
            assert_abs_diff_eq!(spline.evaluate(q), 3.0 * q + 2.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn spline_known_values() {
        // Natural spline through (0,0), (1,1), (2,0): m1 = -3
        let spline = NaturalCubicSpline::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
        assert_abs_diff_eq!(spline.m[1], -3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(spline.evaluate(0.5), 0.6875, epsilon = 1e-12);
        assert_abs_diff_eq!(spline.evaluate(1.5), 0.6875, epsilon = 1e-12);
    }

    #[test]
    fn spline_first_derivative_is_continuous() {
        let (t, v) = samples();
        let spline = NaturalCubicSpline::new(&t, &v).unwrap();
        let eps = 1e-6;
        for &knot in &t[1..t.len() - 1] {
            let left = (spline.evaluate(knot) - spline.evaluate(knot - eps)) / eps;
            let right = (spline.evaluate(knot + eps) - spline.evaluate(knot)) / eps;
            assert_abs_diff_eq!(left, right, epsilon = 1e-3);
        }
    }

    #[test_case(InterpolationMethod::Linear; "linear")]
    #[test_case(InterpolationMethod::NaturalCubicSpline; "cubic")]
    fn rejects_out_of_range(method: InterpolationMethod) {
        let (t, v) = samples();
        for q in [-0.001, 7.001] {
            let err = interpolate_velocity(&t, &v, q, method, OutOfRangePolicy::Reject).unwrap_err();
            assert!(matches!(
                err,
                TrackError::OutOfRange { start, end, .. } if start == 0.0 && end == 7.0
            ));
        }
    }

    #[test]
    fn extrapolates_end_segments() {
        let t = [0.0, 1.0, 2.0];
        let v = [0.0, 10.0, 30.0];
        let linear = LinearInterpolant::new(&t, &v).unwrap();
        let before = linear.evaluate_checked(-1.0, OutOfRangePolicy::Extrapolate).unwrap();
        let after = linear.evaluate_checked(3.0, OutOfRangePolicy::Extrapolate).unwrap();
        assert_relative_eq!(before, -10.0);
        assert_relative_eq!(after, 50.0);

        // Repeated queries give the same answer
        let spline = NaturalCubicSpline::new(&t, &v).unwrap();
        let first = spline.evaluate_checked(5.0, OutOfRangePolicy::Extrapolate).unwrap();
        let second = spline.evaluate_checked(5.0, OutOfRangePolicy::Extrapolate).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn two_samples_degrade_to_line() {
        let spline = NaturalCubicSpline::new(&[10.0, 20.0], &[1.0, 3.0]).unwrap();
        assert_relative_eq!(spline.evaluate(15.0), 2.0);
    }

    #[test]
    fn rejects_bad_samples() {
        assert!(matches!(
            LinearInterpolant::new(&[0.0], &[1.0]).unwrap_err(),
            TrackError::InsufficientSamples { found: 1, .. }
        ));
        assert!(matches!(
            NaturalCubicSpline::new(&[0.0, 1.0], &[1.0]).unwrap_err(),
            TrackError::ShapeMismatch { .. }
        ));
        assert!(matches!(
            NaturalCubicSpline::new(&[0.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).unwrap_err(),
            TrackError::DegenerateTimestep { index: 2, .. }
        ));
        assert!(matches!(
            LinearInterpolant::new(&[0.0, 1.0], &[1.0, f64::NAN]).unwrap_err(),
            TrackError::InvalidInput { index: 1, field: "velocity" }
        ));
    }

    #[test]
    fn rejects_non_finite_query() {
        let (t, v) = samples();
        let err = interpolate_velocity(
            &t,
            &v,
            f64::NAN,
            InterpolationMethod::Linear,
            OutOfRangePolicy::Extrapolate,
        )
        .unwrap_err();
        assert!(matches!(err, TrackError::InvalidInput { field: "time_request", .. }));
    }
}
