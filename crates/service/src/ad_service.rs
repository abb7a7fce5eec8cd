use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait};
use serde_json::{Map, Value};
use tracing::{debug, info, instrument};

use models::ad::{self, AdPatch, NewAd};
use crate::errors::ServiceError;

const ENTITY: &str = "ad";

/// Fetch an ad or fail with `NotFound`.
pub async fn get_ad<C: ConnectionTrait>(db: &C, id: i32) -> Result<ad::Model, ServiceError> {
    ad::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found(ENTITY))
}

/// Insert an ad and return it as stored, re-read by id.
#[instrument(skip_all, fields(title = %input.title))]
pub async fn create_ad<C: ConnectionTrait>(db: &C, input: NewAd) -> Result<ad::Model, ServiceError> {
    input.validate()?;
    let inserted = input.into_active().insert(db).await?;
    let stored = get_ad(db, inserted.id).await?;
    info!(id = stored.id, "ad_created");
    Ok(stored)
}

/// Apply a JSON object of field updates to an existing ad.
///
/// Fields are checked against the patchable set before the row is loaded, so
/// an invalid body never touches the database.
#[instrument(skip(db, fields))]
pub async fn update_ad<C: ConnectionTrait>(
    db: &C,
    id: i32,
    fields: Map<String, Value>,
) -> Result<ad::Model, ServiceError> {
    let patch = AdPatch::from_fields(fields)?;
    let current = get_ad(db, id).await?;
    if patch.is_empty() {
        debug!(id, "empty patch");
        return Ok(current);
    }
    let mut am: ad::ActiveModel = current.into();
    patch.apply(&mut am);
    am.update(db).await?;
    let stored = get_ad(db, id).await?;
    info!(id, "ad_updated");
    Ok(stored)
}

/// Hard delete. Missing rows are `NotFound`.
#[instrument(skip(db))]
pub async fn delete_ad<C: ConnectionTrait>(db: &C, id: i32) -> Result<(), ServiceError> {
    let res = ad::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found(ENTITY));
    }
    info!(id, "ad_deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use sea_orm::{PaginatorTrait, TransactionTrait};
    use serde_json::json;

    fn new_ad(title: &str) -> NewAd {
        NewAd { title: title.into(), description: Some("Best car in the world".into()), owner: "Enzo Ferrari".into() }
    }

    fn object(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap_or_default()
    }

    #[tokio::test]
    async fn ad_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let created = create_ad(&db, new_ad("Ferrari")).await?;
        assert!(created.id > 0);

        let found = get_ad(&db, created.id).await?;
        assert_eq!(found, created);

        let updated = update_ad(&db, created.id, object(json!({"title": "Maserati"}))).await?;
        assert_eq!(updated.title, "Maserati");
        assert_eq!(updated.created_at, created.created_at);

        delete_ad(&db, created.id).await?;
        assert!(matches!(get_ad(&db, created.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(delete_ad(&db, created.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_title_conflicts_on_create_and_update() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let first = create_ad(&db, new_ad("Ferrari")).await?;
        let second = create_ad(&db, new_ad("Fiat")).await?;
        assert_ne!(first.id, second.id);

        assert!(matches!(create_ad(&db, new_ad("Ferrari")).await, Err(ServiceError::Conflict(_))));
        assert_eq!(ad::Entity::find().count(&db).await?, 2);

        let res = update_ad(&db, second.id, object(json!({"title": "Ferrari"}))).await;
        assert!(matches!(res, Err(ServiceError::Conflict(_))));
        assert_eq!(get_ad(&db, second.id).await?.title, "Fiat");
        Ok(())
    }

    #[tokio::test]
    async fn update_rejects_unknown_fields_and_missing_rows() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let created = create_ad(&db, new_ad("Ferrari")).await?;

        let res = update_ad(&db, created.id, object(json!({"price": 10}))).await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));

        let res = update_ad(&db, created.id + 100, object(json!({"title": "x"}))).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));

        let unchanged = update_ad(&db, created.id, Map::new()).await?;
        assert_eq!(unchanged, created);
        Ok(())
    }

    #[tokio::test]
    async fn create_validates_input() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let res = create_ad(&db, NewAd { title: " ".into(), description: None, owner: "o".into() }).await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));
        Ok(())
    }

    #[tokio::test]
    async fn rolled_back_transaction_leaves_no_row() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let txn = db.begin().await?;
        let created = create_ad(&txn, new_ad("Ferrari")).await?;
        txn.rollback().await?;

        assert!(matches!(get_ad(&db, created.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
