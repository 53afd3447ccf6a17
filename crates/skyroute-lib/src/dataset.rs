//! Loading airport and route records from disk.
//!
//! Records live in a data directory as `airports.{csv,json}` and
//! `routes.{csv,json}`. CSV files use the headers
//! `code,name,city,country,lat,lon` and `from,to,distanceKm,active`; JSON
//! files hold an array of objects with the same field names. The network
//! itself is never cached here: callers load records once and build a fresh
//! [`Network`](crate::Network) per query.

use std::env;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::airport::{Airport, Route};
use crate::error::{Error, Result};

/// Environment variable consulted when no explicit data directory is given.
pub const DATA_DIR_ENV: &str = "SKYROUTE_DATA_DIR";

const AIRPORTS_STEM: &str = "airports";
const ROUTES_STEM: &str = "routes";

/// File formats accepted for record files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Csv,
    Json,
}

impl RecordFormat {
    const ALL: [RecordFormat; 2] = [RecordFormat::Csv, RecordFormat::Json];

    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("csv") => Ok(RecordFormat::Csv),
            Some("json") => Ok(RecordFormat::Json),
            _ => Err(Error::UnsupportedRecordFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    fn extension(self) -> &'static str {
        match self {
            RecordFormat::Csv => "csv",
            RecordFormat::Json => "json",
        }
    }
}

/// Airport and route records loaded together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkDataset {
    pub airports: Vec<Airport>,
    pub routes: Vec<Route>,
}

impl NetworkDataset {
    /// Load `airports.*` and `routes.*` from a data directory.
    pub fn load(dir: &Path) -> Result<Self> {
        let airports_path = locate_records(dir, AIRPORTS_STEM)?;
        let routes_path = locate_records(dir, ROUTES_STEM)?;

        let airports = load_airports(&airports_path)?;
        let routes = load_routes(&routes_path)?;
        info!(
            airports = airports.len(),
            routes = routes.len(),
            "loaded network records from {}",
            dir.display()
        );

        Ok(Self { airports, routes })
    }
}

/// Resolve the data directory.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `SKYROUTE_DATA_DIR` environment variable.
/// 3. Platform-specific project data directory.
pub fn resolve_data_dir(target: Option<&Path>) -> Result<PathBuf> {
    if let Some(explicit) = target {
        return Ok(explicit.to_path_buf());
    }

    if let Some(env_path) = env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(env_path));
    }

    default_data_dir()
}

/// Platform-specific default data directory.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "skyroute", "skyroute").ok_or(Error::DataDirUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Load airport records from a `.csv` or `.json` file.
pub fn load_airports(path: &Path) -> Result<Vec<Airport>> {
    load_records(path)
}

/// Load route records from a `.csv` or `.json` file.
pub fn load_routes(path: &Path) -> Result<Vec<Route>> {
    load_records(path)
}

/// Read records of any supported type from a reader.
pub fn read_records<T, R>(reader: R, format: RecordFormat) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    match format {
        RecordFormat::Csv => {
            let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
            let mut records: Vec<T> = Vec::new();
            for record in csv_reader.deserialize::<T>() {
                records.push(record?);
            }
            Ok(records)
        }
        RecordFormat::Json => Ok(serde_json::from_reader(reader)?),
    }
}

fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let format = RecordFormat::from_path(path)?;
    let file = fs::File::open(path)?;
    let records = read_records(file, format)?;
    debug!(count = records.len(), "read records from {}", path.display());
    Ok(records)
}

fn locate_records(dir: &Path, stem: &'static str) -> Result<PathBuf> {
    RecordFormat::ALL
        .iter()
        .map(|format| dir.join(format!("{stem}.{}", format.extension())))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| Error::RecordsNotFound {
            kind: stem,
            dir: dir.to_path_buf(),
        })
}
