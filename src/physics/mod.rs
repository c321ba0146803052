pub mod velocity;

pub use velocity::{ecef_velocity, ecef_velocity_from_samples};
