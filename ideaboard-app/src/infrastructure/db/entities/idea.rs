use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Row in the `ideas` table. The database owns the column defaults, but
/// inserts always set every field explicitly.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ideas")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub upvotes: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::domain::Idea {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            text: model.text,
            upvotes: model.upvotes,
            created_at: model.created_at,
        }
    }
}
