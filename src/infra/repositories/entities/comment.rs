//! `comments` table.

use sea_orm::entity::prelude::*;

use crate::domain::Comment;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub topic_id: i32,
    #[sea_orm(column_type = "Text")]
    pub comment: String,
    pub commented_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Comment {
    fn from(model: Model) -> Self {
        Comment {
            id: model.id,
            user_id: model.user_id,
            topic_id: model.topic_id,
            body: model.comment,
            commented_at: model.commented_at,
        }
    }
}
