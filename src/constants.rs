// WGS84 defining parameters
pub const WGS84_A_KM: f64 = 6378.137; // Semi-major axis [km]
pub const WGS84_F: f64 = 1.0 / 298.257223563; // Flattening

// Units
pub const KM_TO_M: f64 = 1000.0;

// Inverse geodetic transform
pub const GEODETIC_MAX_ITERATIONS: usize = 10;
pub const GEODETIC_TOLERANCE_RAD: f64 = 1e-12;

// Default file the pipeline appends its reports to
pub const DEFAULT_RESULT_LOG: &str = "stdout.txt";

// Expected CSV header, in order
pub const TRACK_COLUMNS: [&str; 4] = ["time", "latitude", "longitude", "altitude"];
