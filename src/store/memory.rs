use crate::{
    error::{Result, VistagenError},
    models::GeneratedImage,
    store::traits::{is_recent, ImageStore},
};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;

/// In-process collection backend. Mutation happens under one lock held for
/// the duration of each operation, never across awaits.
pub struct MemoryStore {
    records: Mutex<Vec<GeneratedImage>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<GeneratedImage>>> {
        self.records
            .lock()
            .map_err(|_| VistagenError::StoreError("collection lock poisoned".into()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageStore for MemoryStore {
    async fn append(&self, records: Vec<GeneratedImage>) -> Result<usize> {
        let added = records.len();
        let mut all = self.lock()?;
        for record in records.into_iter().rev() {
            all.insert(0, record);
        }
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
        Ok(true)
    }

    async fn vote(&self, id: &str, delta: i32) -> Result<i32> {
        let mut all = self.lock()?;
        let record = all
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| VistagenError::StoreError(format!("no record with id {}", id)))?;
        record.votes += delta;
        Ok(record.votes)
    }

    async fn remove(&self, id: &str) -> Result<bool> {
        let mut all = self.lock()?;
        let before = all.len();
        all.retain(|r| r.id != id);
        Ok(all.len() < before)
    }

    async fn clear(&self) -> Result<()> {
        self.lock()?.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AspectRatio, VisualStyle};
    use crate::store::traits::RETENTION_MS;

    fn record(prompt: &str) -> GeneratedImage {
        GeneratedImage::new(
            "data:image/png;base64,AAAA",
            prompt,
            prompt,
            VisualStyle::Artistic,
            AspectRatio::Horizontal,
        )
    }

    #[tokio::test]
    async fn test_append_is_newest_first() {
        let store = MemoryStore::new();
        store.append(vec![record("first")]).await.unwrap();
        store.append(vec![record("second"), record("third")]).await.unwrap();

        let history = store.history().await.unwrap();
        let prompts: Vec<&str> = history.iter().map(|r| r.prompt.as_str()).collect();
        assert_eq!(prompts, vec!["second", "third", "first"]);
    }

    #[tokio::test]
    async fn test_history_applies_retention_window() {
        let store = MemoryStore::new();
        let mut stale = record("stale");
        stale.timestamp -= RETENTION_MS + 1;
        store.append(vec![stale, record("fresh")]).await.unwrap();

        let history = store.history().await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].prompt, "fresh");
    }

    #[tokio::test]
    async fn test_gallery_only_shows_promoted_records() {
        let store = MemoryStore::new();
        let promoted = record("promoted");
        let promoted_id = promoted.id.clone();
        store.append(vec![promoted, record("private")]).await.unwrap();

        assert!(store.gallery().await.unwrap().is_empty());

        assert!(store.promote(&promoted_id).await.unwrap());
        let gallery = store.gallery().await.unwrap();
        assert_eq!(gallery.len(), 1);
        assert_eq!(gallery[0].prompt, "promoted");

        // A second promotion is a no-op.
        assert!(!store.promote(&promoted_id).await.unwrap());
    }

    #[tokio::test]
    async fn test_ranking_orders_by_votes() {
        let store = MemoryStore::new();
        let a = record("a");
        let b = record("b");
        let (id_a, id_b) = (a.id.clone(), b.id.clone());
        store.append(vec![a, b]).await.unwrap();
        store.promote(&id_a).await.unwrap();
        store.promote(&id_b).await.unwrap();

        store.vote(&id_b, 1).await.unwrap();
        store.vote(&id_b, 1).await.unwrap();
        assert_eq!(store.vote(&id_a, 1).await.unwrap(), 1);
        assert_eq!(store.vote(&id_a, -1).await.unwrap(), 0);

        let ranked = store.ranking().await.unwrap();
        assert_eq!(ranked[0].prompt, "b");
        assert_eq!(ranked[0].votes, 2);
        assert_eq!(ranked[1].votes, 0);
    }

    #[tokio::test]
    async fn test_vote_on_unknown_id_is_an_error() {
        let store = MemoryStore::new();
        let result = store.vote("missing", 1).await;
        assert!(matches!(result, Err(VistagenError::StoreError(_))));
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let store = MemoryStore::new();
        let victim = record("victim");
        let victim_id = victim.id.clone();
        store.append(vec![victim, record("kept")]).await.unwrap();

        assert!(store.remove(&victim_id).await.unwrap());
        assert!(!store.remove(&victim_id).await.unwrap());
        assert_eq!(store.history().await.unwrap().len(), 1);

        store.clear().await.unwrap();
        assert!(store.history().await.unwrap().is_empty());
    }
}
