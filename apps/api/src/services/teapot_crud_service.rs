use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::errors::{TeapotError, TeapotResult};
use crate::domain::repositories::TeapotRepository;
use crate::domain::teapot::Teapot;

/// CRUD service over the teapot repository
///
/// The only mutator of the store. Enforces the identity rules the repository
/// leaves out: no two teapots share an id, and only existing teapots can be
/// updated or deleted.
///
/// Cloning is cheap; clones share the repository and the reset lock.
#[derive(Clone)]
pub struct TeapotCrudService {
    repo: Arc<dyn TeapotRepository>,
    reset_lock: Arc<Mutex<()>>,
}

impl TeapotCrudService {
    /// Creates a new TeapotCrudService
    ///
    /// # Arguments
    /// * `repo` - Backing store for teapots
    pub fn new(repo: Arc<dyn TeapotRepository>) -> Self {
        Self {
            repo,
            reset_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Finds a teapot by id
    ///
    /// # Errors
    /// * `NotExists` - No teapot is stored under `id`
    pub async fn find(&self, id: &str) -> TeapotResult<Teapot> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| TeapotError::NotExists(id.to_string()))
    }

    /// Returns every teapot, in no particular order
    pub async fn find_all(&self) -> TeapotResult<Vec<Teapot>> {
        Ok(self.repo.get_all().await?)
    }

    /// Finds teapots by their ids
    ///
    /// Repeated ids are looked up once.
    ///
    /// # Errors
    /// * `NotExistAll` - At least one id is absent; lists all absent ids
    pub async fn find_all_by_ids(&self, ids: &[String]) -> TeapotResult<Vec<Teapot>> {
        let mut seen = HashSet::new();
        let mut found = Vec::new();
        let mut missing = Vec::new();

        for id in ids {
            if !seen.insert(id.as_str()) {
                continue;
            }
            match self.repo.get(id).await? {
                Some(teapot) => found.push(teapot),
                None => missing.push(id.clone()),
            }
        }

        if !missing.is_empty() {
            return Err(TeapotError::NotExistAll(missing));
        }

        Ok(found)
    }

    /// Number of stored teapots
    pub async fn count(&self) -> TeapotResult<u64> {
        Ok(self.repo.count().await?)
    }

    /// Checks whether a teapot with the same id is stored
    pub async fn exists(&self, teapot: &Teapot) -> TeapotResult<bool> {
        Ok(self.repo.exists(&teapot.id).await?)
    }

    /// Adds a new teapot
    ///
    /// # Errors
    /// * `AlreadyExists` - A teapot with the same id is already stored
    pub async fn add(&self, teapot: &Teapot) -> TeapotResult<()> {
        if self.repo.exists(&teapot.id).await? {
            return Err(TeapotError::AlreadyExists(teapot.id.clone()));
        }

        self.repo.put(teapot).await?;
        tracing::info!(id = %teapot.id, "Teapot created");

        Ok(())
    }

    /// Adds several teapots at once
    ///
    /// Nothing is inserted unless every id is free.
    ///
    /// # Errors
    /// * `AlreadyExistAll` - Lists every id that is already stored
    pub async fn add_all(&self, teapots: &[Teapot]) -> TeapotResult<()> {
        let mut taken = Vec::new();
        for teapot in teapots {
            if self.repo.exists(&teapot.id).await? {
                taken.push(teapot.id.clone());
            }
        }

        if !taken.is_empty() {
            return Err(TeapotError::AlreadyExistAll(taken));
        }

        for teapot in teapots {
            self.repo.put(teapot).await?;
        }
        tracing::info!(count = teapots.len(), "Teapots created");

        Ok(())
    }

    /// Replaces the teapot stored under `id`
    ///
    /// If `teapot.id` differs from `id` the teapot is re-keyed.
    ///
    /// # Errors
    /// * `NotExists` - No teapot is stored under `id`
    /// * `AlreadyExists` - The new id belongs to another teapot
    pub async fn update(&self, id: &str, teapot: &Teapot) -> TeapotResult<()> {
        if !self.repo.exists(id).await? {
            return Err(TeapotError::NotExists(id.to_string()));
        }

        if teapot.id != id {
            if self.repo.exists(&teapot.id).await? {
                return Err(TeapotError::AlreadyExists(teapot.id.clone()));
            }
            self.repo.delete(id).await?;
            tracing::info!(from = %id, to = %teapot.id, "Teapot re-keyed");
        }

        self.repo.put(teapot).await?;
        tracing::info!(id = %teapot.id, "Teapot updated");

        Ok(())
    }

    /// Deletes a teapot by id
    ///
    /// # Errors
    /// * `NotExists` - No teapot is stored under `id`
    pub async fn delete(&self, id: &str) -> TeapotResult<()> {
        if !self.repo.delete(id).await? {
            return Err(TeapotError::NotExists(id.to_string()));
        }

        tracing::info!(id = %id, "Teapot deleted");
        Ok(())
    }

    /// Removes every teapot; deleting from an empty store is fine
    pub async fn delete_all(&self) -> TeapotResult<()> {
        self.repo.clear().await?;
        tracing::info!("All teapots deleted");
        Ok(())
    }

    /// Puts the store back into its seeded state
    ///
    /// Only one reset runs at a time, so two concurrent resets never
    /// interleave their clear and repopulate steps. Failures are logged and
    /// swallowed: a reset always reports success to its caller.
    pub async fn reset(&self, seeds: &[Teapot]) {
        let _guard = self.reset_lock.lock().await;

        if let Err(e) = self.reseed(seeds).await {
            tracing::warn!(error = %e, "Teapot reset did not complete");
            return;
        }

        tracing::info!(seeds = seeds.len(), "Teapots reset");
    }

    async fn reseed(&self, seeds: &[Teapot]) -> TeapotResult<()> {
        self.delete_all().await?;

        for seed in seeds {
            if self.exists(seed).await? {
                self.update(&seed.id, seed).await?;
            } else {
                self.add(seed).await?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::teapot::Capacity;
    use crate::infrastructure::repositories::InMemoryTeapotRepository;
    use async_trait::async_trait;

    /// Store whose backend is unreachable
    struct UnavailableRepository;

    #[async_trait]
    impl TeapotRepository for UnavailableRepository {
        async fn get(&self, _id: &str) -> Result<Option<Teapot>, String> {
            Err("down".into())
        }

        async fn get_all(&self) -> Result<Vec<Teapot>, String> {
            Err("down".into())
        }

        async fn put(&self, _teapot: &Teapot) -> Result<(), String> {
            Err("down".into())
        }

        async fn delete(&self, _id: &str) -> Result<bool, String> {
            Err("down".into())
        }

        async fn clear(&self) -> Result<(), String> {
            Err("down".into())
        }

        async fn exists(&self, _id: &str) -> Result<bool, String> {
            Err("down".into())
        }

        async fn count(&self) -> Result<u64, String> {
            Err("down".into())
        }
    }

    /// Store that empties fine but refuses writes
    #[derive(Default)]
    struct ReadOnlyRepository {
        inner: InMemoryTeapotRepository,
    }

    #[async_trait]
    impl TeapotRepository for ReadOnlyRepository {
        async fn get(&self, id: &str) -> Result<Option<Teapot>, String> {
            self.inner.get(id).await
        }

        async fn get_all(&self) -> Result<Vec<Teapot>, String> {
            self.inner.get_all().await
        }

        async fn put(&self, _teapot: &Teapot) -> Result<(), String> {
            Err("read-only".into())
        }

        async fn delete(&self, id: &str) -> Result<bool, String> {
            self.inner.delete(id).await
        }

        async fn clear(&self) -> Result<(), String> {
            self.inner.clear().await
        }

        async fn exists(&self, id: &str) -> Result<bool, String> {
            self.inner.exists(id).await
        }

        async fn count(&self) -> Result<u64, String> {
            self.inner.count().await
        }
    }

    fn service() -> TeapotCrudService {
        TeapotCrudService::new(Arc::new(InMemoryTeapotRepository::new()))
    }

    fn mouse() -> Teapot {
        Teapot::new("mouse", "Mouse", "Tefal", Capacity::L0_3)
    }

    fn einstein() -> Teapot {
        Teapot::new("einstein", "Einstein", "Sony", Capacity::L3)
    }

    fn nemezis() -> Teapot {
        Teapot::new("nemezis", "Nemezis", "Philips", Capacity::L10)
    }

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn add_then_find() {
        let crud = service();
        crud.add(&mouse()).await.unwrap();

        assert_eq!(crud.find("mouse").await.unwrap(), mouse());
        assert_eq!(crud.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn add_twice_fails() {
        let crud = service();
        crud.add(&mouse()).await.unwrap();

        let result = crud.add(&mouse()).await;
        assert_eq!(result, Err(TeapotError::AlreadyExists("mouse".into())));
    }

    #[tokio::test]
    async fn find_missing_fails() {
        let result = service().find("ghost").await;
        assert_eq!(result, Err(TeapotError::NotExists("ghost".into())));
    }

    #[tokio::test]
    async fn delete_missing_fails() {
        let result = service().delete("ghost").await;
        assert_eq!(result, Err(TeapotError::NotExists("ghost".into())));
    }

    #[tokio::test]
    async fn add_delete_then_find_fails() {
        let crud = service();
        crud.add(&mouse()).await.unwrap();
        crud.delete("mouse").await.unwrap();

        assert_eq!(
            crud.find("mouse").await,
            Err(TeapotError::NotExists("mouse".into()))
        );
    }

    #[tokio::test]
    async fn update_missing_fails() {
        let result = service().update("mouse", &mouse()).await;
        assert_eq!(result, Err(TeapotError::NotExists("mouse".into())));
    }

    #[tokio::test]
    async fn update_onto_taken_id_fails() {
        let crud = service();
        crud.add(&mouse()).await.unwrap();
        crud.add(&einstein()).await.unwrap();

        let mut changed = mouse();
        changed.id = "einstein".to_string();

        let result = crud.update("mouse", &changed).await;
        assert_eq!(result, Err(TeapotError::AlreadyExists("einstein".into())));
        assert_eq!(crud.find("einstein").await.unwrap(), einstein());
        assert_eq!(crud.find("mouse").await.unwrap(), mouse());
    }

    #[tokio::test]
    async fn update_in_place() {
        let crud = service();
        crud.add(&mouse()).await.unwrap();

        let mut changed = mouse();
        changed.brand = "Bosch".to_string();
        crud.update("mouse", &changed).await.unwrap();

        assert_eq!(crud.find("mouse").await.unwrap().brand, "Bosch");
    }

    #[tokio::test]
    async fn update_rekeys() {
        let crud = service();
        crud.add(&mouse()).await.unwrap();

        let mut changed = mouse();
        changed.id = "rat".to_string();
        crud.update("mouse", &changed).await.unwrap();

        assert!(crud.find("mouse").await.is_err());
        assert_eq!(crud.find("rat").await.unwrap().name, "Mouse");
        assert_eq!(crud.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn find_all_by_ids_lists_missing() {
        let crud = service();
        crud.add(&mouse()).await.unwrap();

        let result = crud
            .find_all_by_ids(&ids(&["mouse", "ghost", "phantom"]))
            .await;
        assert_eq!(
            result,
            Err(TeapotError::NotExistAll(ids(&["ghost", "phantom"])))
        );
    }

    #[tokio::test]
    async fn find_all_by_ids_returns_requested() {
        let crud = service();
        crud.add_all(&[mouse(), einstein(), nemezis()]).await.unwrap();

        let found = crud
            .find_all_by_ids(&ids(&["nemezis", "mouse", "mouse"]))
            .await
            .unwrap();
        assert_eq!(found, vec![nemezis(), mouse()]);
    }

    #[tokio::test]
    async fn add_all_rejects_taken_ids_atomically() {
        let crud = service();
        crud.add(&mouse()).await.unwrap();
        crud.add(&nemezis()).await.unwrap();

        let result = crud.add_all(&[mouse(), einstein(), nemezis()]).await;
        assert_eq!(
            result,
            Err(TeapotError::AlreadyExistAll(ids(&["mouse", "nemezis"])))
        );
        assert!(!crud.exists(&einstein()).await.unwrap());
    }

    #[tokio::test]
    async fn delete_all_is_idempotent() {
        let crud = service();
        crud.add(&mouse()).await.unwrap();

        crud.delete_all().await.unwrap();
        crud.delete_all().await.unwrap();
        assert_eq!(crud.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn reset_restores_seeds() {
        let crud = service();
        let seeds = vec![mouse(), einstein(), nemezis()];

        crud.add(&Teapot::new("extra", "Extra", "Bosch", Capacity::L1))
            .await
            .unwrap();
        let mut renamed = mouse();
        renamed.name = "Changed".to_string();
        crud.add(&renamed).await.unwrap();

        crud.reset(&seeds).await;

        let mut all = crud.find_all().await.unwrap();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        assert_eq!(all, vec![einstein(), mouse(), nemezis()]);
    }

    #[tokio::test]
    async fn reset_swallows_clear_failure() {
        let crud = TeapotCrudService::new(Arc::new(UnavailableRepository));

        crud.reset(&[mouse(), einstein(), nemezis()]).await;

        assert_eq!(
            crud.count().await,
            Err(TeapotError::Storage("down".into()))
        );
    }

    #[tokio::test]
    async fn reset_swallows_write_failure() {
        let crud = TeapotCrudService::new(Arc::new(ReadOnlyRepository::default()));

        crud.reset(&[mouse(), einstein(), nemezis()]).await;

        assert_eq!(crud.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn reset_after_failure_can_run_again() {
        let crud = TeapotCrudService::new(Arc::new(UnavailableRepository));

        crud.reset(&[mouse()]).await;
        // The lock is released even when the first reset failed
        crud.reset(&[mouse()]).await;
    }

    #[tokio::test]
    async fn storage_failures_surface_from_crud_operations() {
        let crud = TeapotCrudService::new(Arc::new(UnavailableRepository));

        assert_eq!(
            crud.find("mouse").await,
            Err(TeapotError::Storage("down".into()))
        );
        assert_eq!(
            crud.add(&mouse()).await,
            Err(TeapotError::Storage("down".into()))
        );
    }

    #[tokio::test]
    async fn concurrent_resets_leave_full_seed_set() {
        let crud = service();
        let seeds = Arc::new(vec![mouse(), einstein(), nemezis()]);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let crud = crud.clone();
                let seeds = Arc::clone(&seeds);
                tokio::spawn(async move { crud.reset(&seeds).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(crud.count().await.unwrap(), 3);
    }
}
