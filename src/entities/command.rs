use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::UNASSIGNED_ID;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "commands")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub platform: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Whether the store has assigned this record an identity yet.
    pub fn is_persisted(&self) -> bool {
        self.id > UNASSIGNED_ID
    }
}
