//! `votes` table.

use sea_orm::entity::prelude::*;

use crate::domain::{Vote, VoteType};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "votes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub topic_id: i32,
    pub vote_type: String,
    pub voted_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Rows written by other tools may carry a vote type this crate does not know.
impl TryFrom<Model> for Vote {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let vote_type: VoteType = model.vote_type.parse().map_err(|_| {
            AppError::internal(format!(
                "vote {} has unrecognised vote_type '{}'",
                model.id, model.vote_type
            ))
        })?;

        Ok(Vote {
            id: model.id,
            user_id: model.user_id,
            topic_id: model.topic_id,
            vote_type,
            voted_at: model.voted_at,
        })
    }
}
