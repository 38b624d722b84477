//! Requirement ticket
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "requirement")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// `REH-{year}-{sequence}`, unique.
    #[sea_orm(unique)]
    pub code: String,
    pub subject: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub requirement_type_id: i32,
    pub category_id: i32,
    pub priority_id: Option<i32>,
    pub status: String,
    pub created_by: Uuid,
    pub created_time: DateTimeUtc,
    pub is_deleted: bool,
    pub restored_time: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
