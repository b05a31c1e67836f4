use crate::domain::Idea;
use crate::infrastructure::db::IdeaRepository;
use crate::infrastructure::memory::MemoryIdeaStore;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("idea {0} not found")]
    NotFound(Uuid),
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}

/// The persistence seam behind the API: one capability set
/// (`list` / `create` / `upvote`), two interchangeable backends.
///
/// Callers construct whichever variant suits them. The ephemeral one
/// serves tests and demo deployments, Postgres anything that must
/// survive a restart.
pub enum IdeaStore {
    Memory(MemoryIdeaStore),
    Postgres(IdeaRepository),
}

impl IdeaStore {
    /// All ideas, ordered by upvotes descending, then creation time
    /// descending. No pagination, the caller gets the full set.
    pub async fn list(&self) -> Result<Vec<Idea>, StoreError> {
        match self {
            Self::Memory(store) => Ok(store.list()),
            Self::Postgres(store) => Ok(store.list().await?),
        }
    }

    /// Persists a new idea. `text` must already be trimmed and
    /// length-checked; the store assigns id, timestamp, and a zero count.
    pub async fn create(&self, text: String) -> Result<Idea, StoreError> {
        match self {
            Self::Memory(store) => Ok(store.create(text)),
            Self::Postgres(store) => Ok(store.create(text).await?),
        }
    }

    /// Adds exactly one upvote to `id` and returns the updated record.
    pub async fn upvote(&self, id: Uuid) -> Result<Idea, StoreError> {
        match self {
            Self::Memory(store) => store.upvote(id).ok_or(StoreError::NotFound(id)),
            Self::Postgres(store) => store.upvote(id).await?.ok_or(StoreError::NotFound(id)),
        }
    }
}
