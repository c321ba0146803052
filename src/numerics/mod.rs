pub mod interpolation;

pub use interpolation::{
    build_interpolant, interpolate_velocity, Interpolant, LinearInterpolant, NaturalCubicSpline,
};
