use super::entities::idea;
use crate::domain::Idea;
use sea_orm::sea_query::Expr;
use sea_orm::{entity::*, query::*, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Durable [`Idea`] storage backed by the `ideas` table.
#[derive(Clone)]
pub struct IdeaRepository {
    db: DatabaseConnection,
}

impl IdeaRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All ideas, most upvoted first; equal counts order newest first.
    pub async fn list(&self) -> Result<Vec<Idea>, DbErr> {
        let models = idea::Entity::find()
            .order_by_desc(idea::Column::Upvotes)
            .order_by_desc(idea::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Idea::from).collect())
    }

    /// Inserts a fresh idea built from already-validated text.
    pub async fn create(&self, text: String) -> Result<Idea, DbErr> {
        let idea = Idea::new(text);
        let model = idea::ActiveModel {
            id: Set(idea.id),
            text: Set(idea.text),
            upvotes: Set(idea.upvotes),
            created_at: Set(idea.created_at),
        }
        .insert(&self.db)
        .await?;

        Ok(model.into())
    }

    /// Increments the counter in a single UPDATE, so concurrent upvotes
    /// never lose writes, then reads the row back. `None` when no row
    /// matched `id`.
    pub async fn upvote(&self, id: Uuid) -> Result<Option<Idea>, DbErr> {
        let result = idea::Entity::update_many()
            .col_expr(
                idea::Column::Upvotes,
                Expr::col(idea::Column::Upvotes).add(1),
            )
            .filter(idea::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        let model = idea::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Idea::from))
    }
}
