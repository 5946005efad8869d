use async_trait::async_trait;

use crate::domain::teapot::Teapot;

/// Repository trait for teapots
///
/// A plain id-keyed store. It enforces no business rule of its own:
/// existence and uniqueness checks belong to the CRUD service.
/// Implementations report backend failures as `Err(String)`.
#[async_trait]
pub trait TeapotRepository: Send + Sync {
    /// Find a teapot by its id
    async fn get(&self, id: &str) -> Result<Option<Teapot>, String>;

    /// Find every stored teapot, in no particular order
    async fn get_all(&self) -> Result<Vec<Teapot>, String>;

    /// Insert a teapot, or replace the one stored under the same id
    async fn put(&self, teapot: &Teapot) -> Result<(), String>;

    /// Remove a teapot; returns whether it was present
    async fn delete(&self, id: &str) -> Result<bool, String>;

    /// Remove every teapot
    async fn clear(&self) -> Result<(), String>;

    /// Check whether a teapot is stored under `id`
    async fn exists(&self, id: &str) -> Result<bool, String>;

    /// Number of stored teapots
    async fn count(&self) -> Result<u64, String>;
}
