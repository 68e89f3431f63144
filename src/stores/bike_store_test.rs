#[cfg(test)]
mod tests {
    use crate::errors::InternalError;
    use crate::errors::internal::DatabaseError;
    use crate::services::{BikeChanges, NewBike};
    use crate::test::utils::setup_test_store;
    use crate::types::db::bike;
    use crate::types::dto::BikeCategory;
    use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};

    fn honda() -> NewBike {
        NewBike {
            make: "Honda".to_string(),
            model: "CB500".to_string(),
            year: 2023,
            category: BikeCategory::Sport,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_uuid_and_echoes_fields() {
        let (_db, store) = setup_test_store().await;

        let created = store.create(honda()).await.unwrap();

        assert!(uuid::Uuid::parse_str(&created.id).is_ok());
        assert_eq!(created.make, "Honda");
        assert_eq!(created.model, "CB500");
        assert_eq!(created.year, 2023);
        assert_eq!(created.category, "SPORT");
    }

    #[tokio::test]
    async fn test_create_never_reuses_ids() {
        let (_db, store) = setup_test_store().await;

        let first = store.create(honda()).await.unwrap();
        let second = store.create(honda()).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_list_returns_all_bikes() {
        let (_db, store) = setup_test_store().await;
        assert!(store.list().await.unwrap().is_empty());

        store.create(honda()).await.unwrap();
        store
            .create(NewBike {
                make: "KTM".to_string(),
                model: "390 Adventure".to_string(),
                year: 2022,
                category: BikeCategory::Adventure,
            })
            .await
            .unwrap();

        let bikes = store.list().await.unwrap();
        assert_eq!(bikes.len(), 2);
    }

    #[tokio::test]
    async fn test_get_by_id_round_trip() {
        let (_db, store) = setup_test_store().await;
        let created = store.create(honda()).await.unwrap();

        let fetched = store.get_by_id(&created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_by_id_unknown_is_not_found() {
        let (_db, store) = setup_test_store().await;

        let result = store.get_by_id("does-not-exist").await;
        assert!(matches!(result, Err(InternalError::BikeNotFound(id)) if id == "does-not-exist"));
    }

    #[tokio::test]
    async fn test_update_replaces_only_supplied_fields() {
        let (_db, store) = setup_test_store().await;
        let created = store.create(honda()).await.unwrap();

        let updated = store
            .update(
                &created.id,
                BikeChanges {
                    year: Some(2024),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.year, 2024);
        assert_eq!(updated.make, created.make);
        assert_eq!(updated.model, created.model);
        assert_eq!(updated.category, created.category);
    }

    #[tokio::test]
    async fn test_update_with_no_changes_returns_record() {
        let (_db, store) = setup_test_store().await;
        let created = store.create(honda()).await.unwrap();

        let unchanged = store
            .update(&created.id, BikeChanges::default())
            .await
            .unwrap();
        assert_eq!(unchanged, created);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let (_db, store) = setup_test_store().await;

        let result = store
            .update(
                "missing",
                BikeChanges {
                    make: Some("Yamaha".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(InternalError::BikeNotFound(_))));

        let result = store.update("missing", BikeChanges::default()).await;
        assert!(matches!(result, Err(InternalError::BikeNotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_returns_record_and_removes_it() {
        let (_db, store) = setup_test_store().await;
        let created = store.create(honda()).await.unwrap();

        let deleted = store.delete(&created.id).await.unwrap();
        assert_eq!(deleted, created);

        let result = store.get_by_id(&created.id).await;
        assert!(matches!(result, Err(InternalError::BikeNotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found() {
        let (_db, store) = setup_test_store().await;
        let created = store.create(honda()).await.unwrap();

        store.delete(&created.id).await.unwrap();
        let result = store.delete(&created.id).await;
        assert!(matches!(result, Err(InternalError::BikeNotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_returns_the_row_as_removed() {
        let (db, store) = setup_test_store().await;
        let created = store.create(honda()).await.unwrap();

        // Another writer changes the row before the delete runs
        bike::ActiveModel {
            id: Set(created.id.clone()),
            year: Set(2024),
            ..Default::default()
        }
        .update(&db)
        .await
        .unwrap();

        let deleted = store.delete(&created.id).await.unwrap();
        assert_eq!(deleted.year, 2024);
        assert!(bike::Entity::find().all(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_failure_is_tagged_with_operation() {
        let (db, store) = setup_test_store().await;
        db.execute_unprepared("DROP TABLE bikes").await.unwrap();

        let result = store.delete("any-id").await;
        match result {
            Err(InternalError::Database(DatabaseError::Operation { operation, .. })) => {
                assert_eq!(operation, "delete_bike");
            }
            other => panic!("expected a database error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_stored_category_is_returned_verbatim() {
        // The table has no constraint on category; rows written outside the API come back untouched
        let (db, store) = setup_test_store().await;
        bike::ActiveModel {
            id: Set("legacy-1".to_string()),
            make: Set("BSA".to_string()),
            model: Set("Gold Star".to_string()),
            year: Set(1956),
            category: Set("CAFE_RACER".to_string()),
        }
        .insert(&db)
        .await
        .unwrap();

        let fetched = store.get_by_id("legacy-1").await.unwrap();
        assert_eq!(fetched.category, "CAFE_RACER");
        assert_eq!(bike::Entity::find().all(&db).await.unwrap().len(), 1);
    }
}
