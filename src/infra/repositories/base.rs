//! Generic query helpers shared by the concrete repositories.
//!
//! Each helper works on any SeaORM entity and any connection, so the
//! same code runs against the pool or inside a transaction.

use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, PaginatorTrait, PrimaryKeyTrait,
    QueryOrder,
};

use crate::errors::AppResult;

/// Find all rows ordered by `order_by` ascending.
pub async fn find_all<E, C>(db: &C, order_by: E::Column) -> AppResult<Vec<E::Model>>
where
    E: EntityTrait,
    E::Column: ColumnTrait,
    C: ConnectionTrait,
{
    E::find()
        .order_by_asc(order_by)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Find one row by its integer primary key.
pub async fn find_by_id<E, C>(db: &C, id: i64) -> AppResult<Option<E::Model>>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i64>,
    C: ConnectionTrait,
{
    E::find_by_id(id).one(db).await.map_err(Into::into)
}

/// Count all rows.
pub async fn count<E, C>(db: &C) -> AppResult<u64>
where
    E: EntityTrait,
    E::Model: FromQueryResult + Send + Sync,
    C: ConnectionTrait,
{
    E::find().count(db).await.map_err(Into::into)
}
