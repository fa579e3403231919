use crate::{
    error::{Result, VistagenError},
    models::GeneratedImage,
    store::traits::{is_recent, ImageStore},
};
use async_trait::async_trait;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// File-backed collection backend: the whole collection lives in one JSON
/// document, reloaded on construction and rewritten after every mutation.
pub struct JsonFileStore {
    path: PathBuf,
    records: Mutex<Vec<GeneratedImage>>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records = Self::load(&path)?;
        log::info!(
            "Loaded {} record(s) from {}",
            records.len(),
            path.display()
        );
        Ok(Self {
            path,
            records: Mutex::new(records),
        })
    }

    fn load(path: &Path) -> Result<Vec<GeneratedImage>> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(path)
            .map_err(|e| VistagenError::StoreError(format!("failed to read {}: {}", path.display(), e)))?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&contents)
            .map_err(|e| VistagenError::SerializationError(format!("corrupt store file: {}", e)))
    }

    fn persist(&self, records: &[GeneratedImage]) -> Result<()> {
        let contents = serde_json::to_string_pretty(records)
            .map_err(|e| VistagenError::SerializationError(e.to_string()))?;
        fs::write(&self.path, contents)
            .map_err(|e| VistagenError::StoreError(format!("failed to write {}: {}", self.path.display(), e)))
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<GeneratedImage>>> {
        self.records
            .lock()
            .map_err(|_| VistagenError::StoreError("collection lock poisoned".into()))
    }
}

#[async_trait]
impl ImageStore for JsonFileStore {
    async fn append(&self, records: Vec<GeneratedImage>) -> Result<usize> {
        let added = records.len();
        let mut all = self.lock()?;
        for record in records.into_iter().rev() {
            all.insert(0, record);
        }
        self.persist(&all)?;
        Ok(added)
    }

    async fn history(&self) -> Result<Vec<GeneratedImage>> {
        let now = Utc::now().timestamp_millis();
        let all = self.lock()?;
        Ok(all.iter().filter(|r| is_recent(r, now)).cloned().collect())
    }

    async fn gallery(&self) -> Result<Vec<GeneratedImage>> {
        let now = Utc::now().timestamp_millis();
        let all = self.lock()?;
        Ok(all
            .iter()
            .filter(|r| r.is_public && is_recent(r, now))
            .cloned()
            .collect())
    }

    async fn ranking(&self) -> Result<Vec<GeneratedImage>> {
        let mut ranked = self.gallery().await?;
        ranked.sort_by(|a, b| b.votes.cmp(&a.votes));
        Ok(ranked)
    }

    async fn promote(&self, id: &str) -> Result<bool> {
        let mut all = self.lock()?;
        let record = all
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| VistagenError::StoreError(format!("no record with id {}", id)))?;
        if record.is_public {
            return Ok(false);
        }
        record.is_public = true;
        self.persist(&all)?;
        Ok(true)
    }

    async fn vote(&self, id: &str, delta: i32) -> Result<i32> {
        let mut all = self.lock()?;
        let record = all
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| VistagenError::StoreError(format!("no record with id {}", id)))?;
        record.votes += delta;
        let votes = record.votes;
        self.persist(&all)?;
        Ok(votes)
    }

    async fn remove(&self, id: &str) -> Result<bool> {
        let mut all = self.lock()?;
        let before = all.len();
        all.retain(|r| r.id != id);
        let removed = all.len() < before;
        if removed {
            self.persist(&all)?;
        }
        Ok(removed)
    }

    async fn clear(&self) -> Result<()> {
        let mut all = self.lock()?;
        all.clear();
        self.persist(&all)
    }
}
