//! Profile service - read-side composition of a user and its properties.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::{FindUserFilter, Profile};

use super::{PropertyService, UserService};

/// Profile service trait for dependency injection.
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Load the user matching `filter` with all of its properties.
    ///
    /// A missing user surfaces as `NotFound`; a user without properties
    /// yields an empty property list.
    async fn get_profile(&self, filter: FindUserFilter) -> AppResult<Profile>;
}

/// Builds profiles from the user and property services.
pub struct ProfileAssembler {
    users: Arc<dyn UserService>,
    properties: Arc<dyn PropertyService>,
}

impl ProfileAssembler {
    pub fn new(users: Arc<dyn UserService>, properties: Arc<dyn PropertyService>) -> Self {
        Self { users, properties }
    }
}

#[async_trait]
impl ProfileService for ProfileAssembler {
    async fn get_profile(&self, filter: FindUserFilter) -> AppResult<Profile> {
        let user = self.users.find_user(filter).await?;
        let properties = self.properties.list_properties(user.id).await?;

        tracing::debug!(user_id = user.id, properties = properties.len(), "profile assembled");
        Ok(Profile::assemble(user, properties))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::predicate::eq;

    use super::*;
    use crate::repository::{MockPropertyRepository, MockUserRepository};
    use crate::service::{PropertyManager, UserManager};
    use common::AppError;
    use domain::{Property, User};

    fn alice() -> User {
        User {
            id: 1,
            name: "Alice".to_string(),
            login: "alice1".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn property(id: i32, key: &str, value: &str) -> Property {
        Property {
            id,
            key: key.to_string(),
            value: value.to_string(),
            user_id: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn assembler(users: MockUserRepository, properties: MockPropertyRepository) -> ProfileAssembler {
        ProfileAssembler::new(
            Arc::new(UserManager::new(Arc::new(users))),
            Arc::new(PropertyManager::new(Arc::new(properties))),
        )
    }

    #[tokio::test]
    async fn test_profile_has_properties_and_no_password() {
        let mut users = MockUserRepository::new();
        users
            .expect_find()
            .with(eq(FindUserFilter::by_login("alice1")))
            .returning(|_| Ok(Some(alice())));

        let mut properties = MockPropertyRepository::new();
        properties
            .expect_list_by_user()
            .with(eq(1))
            .returning(|_| Ok(vec![property(1, "theme", "dark"), property(2, "lang", "en")]));

        let profile = assembler(users, properties)
            .get_profile(FindUserFilter::by_login("alice1"))
            .await
            .unwrap();

        assert_eq!(profile.id, 1);
        assert_eq!(profile.login, "alice1");
        let keys: Vec<&str> = profile.properties.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, ["theme", "lang"]);

        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("password").is_none());
    }

    #[tokio::test]
    async fn test_profile_missing_user() {
        let mut users = MockUserRepository::new();
        users.expect_find().returning(|_| Ok(None));

        let mut properties = MockPropertyRepository::new();
        properties.expect_list_by_user().never();

        let result = assembler(users, properties)
            .get_profile(FindUserFilter::by_email("ghost@example.com"))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_profile_without_properties() {
        let mut users = MockUserRepository::new();
        users.expect_find().returning(|_| Ok(Some(alice())));

        let mut properties = MockPropertyRepository::new();
        properties.expect_list_by_user().returning(|_| Ok(Vec::new()));

        let profile = assembler(users, properties)
            .get_profile(FindUserFilter::by_id(1))
            .await
            .unwrap();

        assert!(profile.properties.is_empty());
    }
}
