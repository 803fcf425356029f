//! User property repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use super::constraint::{is_rejected_statement, violation, Violation};
use super::entities::user_property::{self, ActiveModel, Entity as PropertyEntity};
use common::{AppError, AppResult, OptionExt};
use domain::{CreateProperty, Property, PropertyId, UpdateProperty, UserId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Property repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Insert a property for an existing user.
    ///
    /// A dangling user reference yields `NotFound` for that user; any other
    /// rejection by the database yields `Creation`.
    async fn create(&self, input: CreateProperty) -> AppResult<Property>;

    /// Find property by ID
    async fn find_by_id(&self, id: PropertyId) -> AppResult<Option<Property>>;

    /// All properties of a user in creation order
    async fn list_by_user(&self, user_id: UserId) -> AppResult<Vec<Property>>;

    /// Apply the supplied fields, leaving the rest untouched
    async fn update(&self, id: PropertyId, changes: UpdateProperty) -> AppResult<Property>;

    /// Delete property by ID. Missing properties are not an error.
    async fn delete(&self, id: PropertyId) -> AppResult<()>;
}

/// Concrete implementation of PropertyRepository
pub struct PropertyStore {
    db: DatabaseConnection,
}

impl PropertyStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn creation_error(input: &CreateProperty, err: DbErr) -> AppError {
    match violation(&err) {
        Some(Violation::ForeignKey) => {
            tracing::warn!(user_id = input.user_id, "property references a missing user");
            AppError::not_found(format!("User {}", input.user_id))
        }
        _ if is_rejected_statement(&err) => {
            tracing::warn!(user_id = input.user_id, error = %err, "property insert rejected");
            AppError::creation(format!(
                "Could not create property '{}' for user {}",
                input.key, input.user_id
            ))
        }
        _ => AppError::from(err),
    }
}

#[async_trait]
impl PropertyRepository for PropertyStore {
    async fn create(&self, input: CreateProperty) -> AppResult<Property> {
        let now = Utc::now();
        let active_model = ActiveModel {
            key: Set(input.key.clone()),
            value: Set(input.value.clone()),
            user_id: Set(input.user_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|err| creation_error(&input, err))?;
        Ok(Property::from(model))
    }

    async fn find_by_id(&self, id: PropertyId) -> AppResult<Option<Property>> {
        let result = PropertyEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Property::from))
    }

    async fn list_by_user(&self, user_id: UserId) -> AppResult<Vec<Property>> {
        let models = PropertyEntity::find()
            .filter(user_property::Column::UserId.eq(user_id))
            .order_by_asc(user_property::Column::CreatedAt)
            .order_by_asc(user_property::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Property::from).collect())
    }

    async fn update(&self, id: PropertyId, changes: UpdateProperty) -> AppResult<Property> {
        let mut active: ActiveModel = PropertyEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found(format!("Property {}", id))?
            .into();

        if let Some(key) = changes.key {
            active.key = Set(key);
        }
        if let Some(value) = changes.value {
            active.value = Set(value);
        }
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await.map_err(|err| match err {
            DbErr::RecordNotUpdated => AppError::not_found(format!("Property {}", id)),
            other => AppError::from(other),
        })?;
        Ok(Property::from(model))
    }

    async fn delete(&self, id: PropertyId) -> AppResult<()> {
        let result = PropertyEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        tracing::debug!(property_id = id, deleted = result.rows_affected, "property delete");
        Ok(())
    }
}
