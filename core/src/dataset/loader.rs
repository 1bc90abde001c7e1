//! CSV ingestion and row normalization.
//!
//! Policy is coerce-or-drop: a malformed *row* (unparseable numerics,
//! missing title or actor, non-positive runtime) is dropped and counted,
//! never propagated downstream as a type error. A missing *column* is
//! fatal. The vote floor from the source preprocessing is applied here too.

use std::fs::File;
use std::path::Path;
use std::time::Instant;

use hashbrown::HashMap;
use tracing::{info, warn};

use super::{DataLoadError, Dataset, FilmRecord};
use crate::catalog::MIN_VOTE_FLOOR;

/// Columns that must be present in the header row.
const REQUIRED_COLUMNS: [&str; 7] = [
    "title",
    "lead_actor",
    "release_year",
    "rating",
    "runtime_minutes",
    "vote_count",
    "genre",
];

/// Load and normalize the film dataset from a CSV file.
///
/// Pure function of the file contents; the caller (see [`super::DatasetCache`])
/// is responsible for memoizing the result across interactions.
pub fn load_dataset(path: &Path) -> Result<Dataset, DataLoadError> {
    let timer = Instant::now();
    let file = File::open(path).map_err(|source| DataLoadError::OpenFile {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|source| DataLoadError::ReadHeaders {
            path: path.to_path_buf(),
            source,
        })?;

    let columns: HashMap<&str, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (name, idx))
        .collect();

    for column in REQUIRED_COLUMNS {
        if !columns.contains_key(column) {
            return Err(DataLoadError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }
    let columns: HashMap<String, usize> = columns
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

    let mut films = Vec::new();
    let mut dropped_malformed = 0usize;
    let mut dropped_below_floor = 0usize;

    for record in reader.records() {
        let record = record.map_err(|source| DataLoadError::ReadRecord {
            path: path.to_path_buf(),
            source,
        })?;

        match normalize_row(&record, &columns) {
            Some(film) if film.vote_count < MIN_VOTE_FLOOR => dropped_below_floor += 1,
            Some(film) => films.push(film),
            None => dropped_malformed += 1,
        }
    }

    if dropped_malformed > 0 {
        warn!(count = dropped_malformed, "dropped malformed dataset rows");
    }
    info!(
        films = films.len(),
        below_vote_floor = dropped_below_floor,
        elapsed_ms = timer.elapsed().as_millis(),
        "loaded film dataset"
    );

    Ok(Dataset::new(films))
}

/// Coerce one CSV record into a typed film, or `None` if any required
/// field fails validation.
fn normalize_row(record: &csv::StringRecord, columns: &HashMap<String, usize>) -> Option<FilmRecord> {
    let field = |name: &str| -> Option<&str> {
        let value = record.get(*columns.get(name)?)?;
        if value.is_empty() { None } else { Some(value) }
    };

    let title = field("title")?.to_string();
    let lead_actor = field("lead_actor")?.to_string();
    let release_year = parse_int(field("release_year")?)?;
    let rating = field("rating")?.parse::<f64>().ok()?;
    if !rating.is_finite() || !(0.0..=10.0).contains(&rating) {
        return None;
    }
    let runtime_minutes = parse_int(field("runtime_minutes")?)?;
    if runtime_minutes <= 0 {
        return None;
    }
    let vote_count = parse_int(field("vote_count")?)?;
    if vote_count < 0 {
        return None;
    }

    // Genre column is required but a blank cell just means "untagged".
    let genres = record
        .get(columns["genre"])
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect();

    Some(FilmRecord {
        title,
        lead_actor,
        release_year: release_year as i32,
        rating,
        runtime_minutes: runtime_minutes as u32,
        vote_count: vote_count as u64,
        genres,
        decade: FilmRecord::decade_of(release_year as i32),
    })
}

/// Integer coercion that also accepts float-formatted cells ("110.0"),
/// which the source data produces for runtime and vote columns.
fn parse_int(value: &str) -> Option<i64> {
    if let Ok(n) = value.parse::<i64>() {
        return Some(n);
    }
    let f = value.parse::<f64>().ok()?;
    if !f.is_finite() || f.fract() != 0.0 {
        return None;
    }
    Some(f as i64)
}
