use crate::types::{CountryRecord, Dataset};
use anyhow::{Context, Result, anyhow};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

const REQUIRED_COLUMNS: [&str; 4] = ["country", "lat", "lon", "migration"];

// Spellings pandas reads as a missing value.
const ABSENT_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn load_dataset(path: &Path) -> Result<Dataset> {
    info!("Loading country data from {:?}...", path);
    let file = File::open(path)
        .with_context(|| format!("Failed to open CSV file: {:?}", path))?;
    let dataset = load_dataset_from_reader(file)
        .with_context(|| format!("Failed to load CSV file: {:?}", path))?;
    Ok(dataset)
}

/// Reads `country`, `lat`, `lon` and `migration` (other columns are ignored)
/// and drops every row without a migration value.
pub fn load_dataset_from_reader<R: Read>(reader: R) -> Result<Dataset> {
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut idx = [0usize; 4];
    for (slot, name) in idx.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers.iter().position(|h| h == name)
            .ok_or_else(|| anyhow!("Required column '{}' not found in CSV", name))?;
    }
    let [country_idx, lat_idx, lon_idx, migration_idx] = idx;

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for result in rdr.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        let migration = match optional_float(&row, migration_idx, "migration", line)? {
            Some(m) => m,
            None => {
                dropped += 1;
                continue;
            }
        };

        let country = row.get(country_idx).unwrap_or("");
        if country.is_empty() {
            return Err(anyhow!("Empty 'country' on line {}", line));
        }

        let lat = optional_float(&row, lat_idx, "lat", line)?
            .ok_or_else(|| anyhow!("Missing 'lat' for {} on line {}", country, line))?;
        let lon = optional_float(&row, lon_idx, "lon", line)?
            .ok_or_else(|| anyhow!("Missing 'lon' for {} on line {}", country, line))?;

        records.push(CountryRecord {
            country: country.to_string(),
            lat,
            lon,
            migration,
        });
    }

    info!("Loaded {} countries ({} without migration data dropped)", records.len(), dropped);

    Ok(Dataset::new(records))
}

fn optional_float(row: &StringRecord, idx: usize, column: &str, line: u64) -> Result<Option<f64>> {
    let raw = row.get(idx).unwrap_or("");
    if ABSENT_MARKERS.contains(&raw) {
        return Ok(None);
    }
    let value: f64 = raw.parse()
        .with_context(|| format!("Invalid '{}' value {:?} on line {}", column, raw, line))?;
    // f64 parsing also accepts NAN, -nan and friends
    if value.is_nan() {
        return Ok(None);
    }
    Ok(Some(value))
}
