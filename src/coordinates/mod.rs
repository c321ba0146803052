pub mod coordinate_transformation;
pub mod track_loader;

pub use coordinate_transformation::{ecef_to_lla, lla_to_ecef, track_to_ecef};
pub use track_loader::{load_track, parse_track};
