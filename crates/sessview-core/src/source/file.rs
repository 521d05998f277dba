//! Session records from a local JSON file.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::{records_from_json, ContentSource};
use crate::record::ContentRecord;

#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContentSource for JsonFileSource {
    fn fetch_records(&self) -> Result<Vec<ContentRecord>> {
        let bytes = std::fs::read(&self.path)
            .with_context(|| format!("read sessions: {}", self.path.display()))?;
        let value: serde_json::Value = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse sessions: {}", self.path.display()))?;
        records_from_json(value).with_context(|| format!("load sessions: {}", self.path.display()))
    }
}
