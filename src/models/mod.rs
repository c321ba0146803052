pub mod track;

pub use track::{EcefSample, Track, TrackSample};
