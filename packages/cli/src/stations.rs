//! Station file readers.
//!
//! Two formats are accepted, picked by file extension:
//!
//! * `.json`: an array of station objects (`id`, `latitude`,
//!   `longitude`, and optional `name`, `area`, `district`, `province`,
//!   `region`). Extra attributes are ignored.
//! * `.csv`: a header row naming the same columns. Rows that fail to
//!   parse are skipped with a warning.

use std::io::Read;
use std::path::Path;

use station_density_models::PointEntity;

use crate::CliError;

/// Loads stations from a `.json` or `.csv` file.
///
/// # Errors
///
/// Returns [`CliError`] if the file cannot be read, is malformed JSON,
/// or has an unsupported extension.
pub fn load_stations(path: &Path) -> Result<Vec<PointEntity>, CliError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let stations = match extension.as_deref() {
        Some("json") => parse_json(&std::fs::read_to_string(path)?)?,
        Some("csv") => parse_csv(std::fs::File::open(path)?)?,
        _ => {
            return Err(CliError::UnsupportedStationFormat {
                path: path.display().to_string(),
            });
        }
    };

    log::info!("Loaded {} stations from {}", stations.len(), path.display());
    Ok(stations)
}

/// Parses a JSON array of stations.
///
/// # Errors
///
/// Returns [`CliError::Json`] if the text is not an array of stations.
pub fn parse_json(json: &str) -> Result<Vec<PointEntity>, CliError> {
    Ok(serde_json::from_str(json)?)
}

/// Parses CSV stations from any reader.
///
/// # Errors
///
/// Returns [`CliError::Csv`] if the header row cannot be read.
pub fn parse_csv(reader: impl Read) -> Result<Vec<PointEntity>, CliError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    // Fail on an unreadable header rather than silently skipping every row.
    reader.headers()?;

    let mut stations = Vec::new();
    let mut skipped = 0u64;
    for result in reader.deserialize::<PointEntity>() {
        match result {
            Ok(station) => stations.push(station),
            Err(e) => {
                log::trace!("Skipping malformed station row: {e}");
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        log::warn!("Skipped {skipped} malformed station rows");
    }

    Ok(stations)
}
