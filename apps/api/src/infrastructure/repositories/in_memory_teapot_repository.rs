use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::repositories::TeapotRepository;
use crate::domain::teapot::Teapot;

/// In-memory implementation of TeapotRepository
///
/// Used when no database is configured, and by tests. Every call takes the
/// lock once, so each operation is atomic on its own.
#[derive(Default)]
pub struct InMemoryTeapotRepository {
    teapots: RwLock<HashMap<String, Teapot>>,
}

impl InMemoryTeapotRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeapotRepository for InMemoryTeapotRepository {
    async fn get(&self, id: &str) -> Result<Option<Teapot>, String> {
        Ok(self.teapots.read().await.get(id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Teapot>, String> {
        Ok(self.teapots.read().await.values().cloned().collect())
    }

    async fn put(&self, teapot: &Teapot) -> Result<(), String> {
        self.teapots
            .write()
            .await
            .insert(teapot.id.clone(), teapot.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool, String> {
        Ok(self.teapots.write().await.remove(id).is_some())
    }

    async fn clear(&self) -> Result<(), String> {
        self.teapots.write().await.clear();
        Ok(())
    }

    async fn exists(&self, id: &str) -> Result<bool, String> {
        Ok(self.teapots.read().await.contains_key(id))
    }

    async fn count(&self) -> Result<u64, String> {
        Ok(self.teapots.read().await.len() as u64)
    }
}
