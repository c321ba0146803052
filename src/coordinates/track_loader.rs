use crate::constants::TRACK_COLUMNS;
use crate::errors::TrackError;
use crate::models::{Track, TrackSample};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Loads a track from a CSV file with a `time,latitude,longitude,altitude` header.
pub fn load_track(path: impl AsRef<Path>) -> Result<Track, TrackError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let track = parse_track(file)?;
    log::debug!("Loaded {} samples from {}", track.len(), path.display());
    Ok(track)
}

/// Parses in-memory or streamed CSV data.
pub fn parse_track<R: Read>(reader: R) -> Result<Track, TrackError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    check_header(rdr.headers()?)?;

    let mut samples = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        if record.len() != TRACK_COLUMNS.len() {
            return Err(TrackError::DataFormat {
                line,
                message: format!(
                    "expected {} fields, found {}",
                    TRACK_COLUMNS.len(),
                    record.len()
                ),
            });
        }

        samples.push(TrackSample {
            time: parse_field(&record, 0, line)?,
            latitude: parse_field(&record, 1, line)?,
            longitude: parse_field(&record, 2, line)?,
            altitude: parse_field(&record, 3, line)?,
        });
    }

    Ok(Track::new(samples))
}

fn check_header(header: &StringRecord) -> Result<(), TrackError> {
    let matches = header.len() == TRACK_COLUMNS.len()
        && header.iter().zip(TRACK_COLUMNS).all(|(found, expected)| found == expected);

    if matches {
        Ok(())
    } else {
        Err(TrackError::DataFormat {
            line: 1,
            message: format!(
                "expected header `{}`, found `{}`",
                TRACK_COLUMNS.join(","),
                header.iter().collect::<Vec<_>>().join(",")
            ),
        })
    }
}

fn parse_field(record: &StringRecord, column: usize, line: u64) -> Result<f64, TrackError> {
    record[column]
        .parse::<f64>()
        .map_err(|e| TrackError::DataFormat {
            line,
            message: format!("column `{}`: {} ({:?})", TRACK_COLUMNS[column], e, &record[column]),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_and_float_times() {
        let data = b"time,latitude,longitude,altitude\n\
                     1532332859,38.1,-76.5,0.0\n\
                     1532332860.5, 38.2 , -76.4, 1.25\n";
        let track = parse_track(&data[..]).unwrap();
        assert_eq!(track.len(), 2);
        assert_eq!(track.samples()[0], TrackSample::new(1532332859.0, 38.1, -76.5, 0.0));
        assert_eq!(track.samples()[1], TrackSample::new(1532332860.5, 38.2, -76.4, 1.25));
    }

    #[test]
    fn header_only_yields_empty_track() {
        let track = parse_track(&b"time,latitude,longitude,altitude\n"[..]).unwrap();
        assert!(track.is_empty());
    }

    #[test]
    fn rejects_reordered_header() {
        let data = b"time,longitude,latitude,altitude\n0,0,0,0\n";
        let err = parse_track(&data[..]).unwrap_err();
        assert!(matches!(err, TrackError::DataFormat { line: 1, .. }));
    }

    #[test]
    fn rejects_missing_column() {
        let data = b"time,latitude,longitude\n0,0,0\n";
        assert!(matches!(
            parse_track(&data[..]).unwrap_err(),
            TrackError::DataFormat { line: 1, .. }
        ));
    }

    #[test]
    fn rejects_short_row() {
        let data = b"time,latitude,longitude,altitude\n0,0,0,0\n1,0,0\n";
        let err = parse_track(&data[..]).unwrap_err();
        assert!(matches!(err, TrackError::DataFormat { line: 3, .. }));
    }

    #[test]
    fn rejects_unparseable_number() {
        let data = b"time,latitude,longitude,altitude\n0,north,0,0\n";
        match parse_track(&data[..]).unwrap_err() {
            TrackError::DataFormat { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("latitude"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_track("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, TrackError::Io(_)));
    }
}
