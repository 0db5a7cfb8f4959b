use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Skills listed on a job posting, persisted as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Skills(pub Vec<String>);

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "job_posting")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_name: String,
    pub profile: String,
    #[sea_orm(column_type = "Json")]
    pub skills_required: Skills,
    pub eligibility: String,
    pub description: String,
    pub apply_link: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
