use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::backend::mathphysics::Meter;
use crate::backend::signal::{SignalLevel, SignalModel, SignalReading};


#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize snapshot: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}


#[derive(Serialize)]
pub struct Snapshot<'a> {
    model: &'a SignalModel,
    reading: &'a SignalReading,
    level: SignalLevel,
    curve: &'a [SignalReading],
}

impl<'a> Snapshot<'a> {
    #[must_use]
    pub fn new(
        model: &'a SignalModel,
        reading: &'a SignalReading,
        curve: &'a [SignalReading],
    ) -> Self {
        Self {
            model,
            reading,
            level: reading.level(),
            curve,
        }
    }
}


#[must_use]
pub fn snapshot_filename(distance: Meter) -> String {
    let local_time = chrono::Local::now()
        .format("%Y-%m-%d_%H-%M-%S-%3f");

    format!("{local_time}_{distance}m.json")
}

/// Writes `snapshot` as pretty JSON into `output_directory`, creating the
/// directory when needed.
///
/// # Errors
///
/// Will return `Err` if serialization fails or the file can not be written.
pub fn write_snapshot(
    output_directory: &Path,
    snapshot: &Snapshot<'_>,
) -> Result<PathBuf, OutputError> {
    std::fs::create_dir_all(output_directory)?;

    let file_name = snapshot_filename(snapshot.reading.distance_meters());
    let file_path = output_directory.join(file_name);
    let json_data = serde_json::to_string_pretty(snapshot)?;

    std::fs::write(&file_path, json_data)?;

    Ok(file_path)
}
