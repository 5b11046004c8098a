use crate::models::{NormalizeError, TableInstance, process_feature_data};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid feature data in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid data file: {0}")]
    InvalidDataFile(String),
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

/// Read a feature data file and return its raw text
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Parse feature data JSON (an array of records) into typed tables
pub fn parse_feature_data(json: &str, path: &Path) -> Result<Vec<TableInstance>, IoError> {
    let records: Vec<Value> = serde_json::from_str(json).map_err(|source| IoError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("{} raw records in {}", records.len(), path.display());
    Ok(process_feature_data(records)?)
}

/// Read and normalize a feature data file
pub fn read_feature_data(path: &Path) -> Result<Vec<TableInstance>, IoError> {
    let content = read_file(path)?;
    let tables = parse_feature_data(&content, path)?;
    log::info!("Loaded {} tables from {}", tables.len(), path.display());
    Ok(tables)
}

pub fn validate_data_file(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_file() {
        return Err(IoError::InvalidDataFile("File does not exist".to_string()));
    }

    Ok(())
}
