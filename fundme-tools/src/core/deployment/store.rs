// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/fundme-deployer/blob/main/licenses/COPYRIGHT.md

//! Named deployment records shared across deployment steps.

use std::{collections::HashMap, fs, path::PathBuf};

use super::DeployedContract;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to write deployment record {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub trait DeploymentStore {
    /// Most recent deployment of `name`, if any.
    fn get(&self, name: &str) -> Option<DeployedContract>;
    fn save(&mut self, name: &str, record: &DeployedContract) -> Result<(), StoreError>;
}

/// One JSON file per contract under `<dir>/<Name>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }
}

impl DeploymentStore for FileStore {
    fn get(&self, name: &str) -> Option<DeployedContract> {
        let path = self.path_for(name);
        let data = fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&data) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(@yellow, "ignoring unreadable deployment record {}: {}", path.display(), err);
                None
            }
        }
    }

    fn save(&mut self, name: &str, record: &DeployedContract) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Write {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.path_for(name);
        let data = serde_json::to_string_pretty(record)?;
        fs::write(&path, data).map_err(|source| StoreError::Write { path, source })
    }
}

/// In-memory store for tests and ephemeral runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<String, DeployedContract>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, name: &str, record: DeployedContract) -> Self {
        self.records.insert(name.to_owned(), record);
        self
    }
}

impl DeploymentStore for MemoryStore {
    fn get(&self, name: &str) -> Option<DeployedContract> {
        self.records.get(name).cloned()
    }

    fn save(&mut self, name: &str, record: &DeployedContract) -> Result<(), StoreError> {
        self.records.insert(name.to_owned(), record.clone());
        Ok(())
    }
}
