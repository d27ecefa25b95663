//! `topics` table.

use sea_orm::entity::prelude::*;

use crate::domain::Topic;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Topic {
    fn from(model: Model) -> Self {
        Topic {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            description: model.description,
            created_at: model.created_at,
        }
    }
}
