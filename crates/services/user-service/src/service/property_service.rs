//! Property service - key/value properties owned by users.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::{validate_input, CreateProperty, Property, PropertyId, UpdateProperty, UserId};

use crate::repository::PropertyRepository;

/// Property service trait for dependency injection.
#[async_trait]
pub trait PropertyService: Send + Sync {
    /// Attach a new property to an existing user
    async fn create_property(&self, input: CreateProperty) -> AppResult<Property>;

    /// Get property by ID
    async fn get_property(&self, id: PropertyId) -> AppResult<Property>;

    /// All properties of a user in creation order (empty if none)
    async fn list_properties(&self, user_id: UserId) -> AppResult<Vec<Property>>;

    /// Update key and/or value
    async fn update_property(&self, id: PropertyId, changes: UpdateProperty)
        -> AppResult<Property>;

    /// Delete property if present
    async fn delete_property(&self, id: PropertyId) -> AppResult<()>;
}

/// Concrete implementation of PropertyService using repository.
pub struct PropertyManager {
    repo: Arc<dyn PropertyRepository>,
}

impl PropertyManager {
    pub fn new(repo: Arc<dyn PropertyRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl PropertyService for PropertyManager {
    async fn create_property(&self, input: CreateProperty) -> AppResult<Property> {
        validate_input(&input)?;
        tracing::debug!(user_id = input.user_id, key = %input.key, "creating property");

        let property = self.repo.create(input).await?;
        tracing::info!(property_id = property.id, user_id = property.user_id, "property created");
        Ok(property)
    }

    async fn get_property(&self, id: PropertyId) -> AppResult<Property> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_not_found(format!("Property {}", id))
    }

    async fn list_properties(&self, user_id: UserId) -> AppResult<Vec<Property>> {
        self.repo.list_by_user(user_id).await
    }

    async fn update_property(
        &self,
        id: PropertyId,
        changes: UpdateProperty,
    ) -> AppResult<Property> {
        validate_input(&changes)?;
        tracing::debug!(property_id = id, ?changes, "updating property");

        self.repo.update(id, changes).await
    }

    async fn delete_property(&self, id: PropertyId) -> AppResult<()> {
        tracing::debug!(property_id = id, "deleting property");
        self.repo.delete(id).await
    }
}
