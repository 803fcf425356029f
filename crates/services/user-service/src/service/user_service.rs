//! User service - Handles user-related business logic.
//!
//! Validates inputs before delegating to the repository.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{
    validate_input, ChangePassword, CreateUser, FindUserFilter, PageRequest, PrivateUser,
    PublicUser, UpdateUser, User, UserId,
};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a new user (password is stored as given)
    async fn create_user(&self, input: CreateUser) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: UserId) -> AppResult<User>;

    /// Get the public view of a user
    async fn get_public_user(&self, id: UserId) -> AppResult<PublicUser>;

    /// Get the private view of a user (no credential)
    async fn get_private_user(&self, id: UserId) -> AppResult<PrivateUser>;

    /// Find the user matching every supplied filter field
    async fn find_user(&self, filter: FindUserFilter) -> AppResult<User>;

    /// List users; negative bounds are rejected
    async fn list_users(&self, limit: Option<i64>, offset: Option<i64>) -> AppResult<Vec<User>>;

    /// List public views of users; negative bounds are rejected
    async fn list_public_users(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> AppResult<Vec<PublicUser>>;

    /// Update name and/or login
    async fn update_user(&self, id: UserId, changes: UpdateUser) -> AppResult<User>;

    /// Replace the user's password
    async fn update_password(&self, id: UserId, password: String) -> AppResult<User>;

    /// Delete user together with its properties
    async fn delete_user(&self, id: UserId) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        validate_input(&input)?;
        tracing::debug!(login = %input.login, "creating user");

        let user = self.repo.create(input).await?;
        tracing::info!(user_id = user.id, "user created");
        Ok(user)
    }

    async fn get_user(&self, id: UserId) -> AppResult<User> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_not_found(format!("User {}", id))
    }

    async fn get_public_user(&self, id: UserId) -> AppResult<PublicUser> {
        self.get_user(id).await.map(PublicUser::from)
    }

    async fn get_private_user(&self, id: UserId) -> AppResult<PrivateUser> {
        self.get_user(id).await.map(PrivateUser::from)
    }

    async fn find_user(&self, filter: FindUserFilter) -> AppResult<User> {
        let filter = filter.normalized();
        if filter.is_empty() {
            return Err(AppError::validation(
                "filter must name at least one of id, login or email",
            ));
        }
        validate_input(&filter)?;
        tracing::debug!(?filter, "finding user");

        self.repo.find(filter).await?.ok_or_not_found("User")
    }

    async fn list_users(&self, limit: Option<i64>, offset: Option<i64>) -> AppResult<Vec<User>> {
        let page = PageRequest::new(limit, offset).validate()?;
        tracing::debug!(?page, "listing users");

        self.repo.list(page).await
    }

    async fn list_public_users(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> AppResult<Vec<PublicUser>> {
        let users = self.list_users(limit, offset).await?;
        Ok(users.into_iter().map(PublicUser::from).collect())
    }

    async fn update_user(&self, id: UserId, changes: UpdateUser) -> AppResult<User> {
        validate_input(&changes)?;
        tracing::debug!(user_id = id, ?changes, "updating user");

        self.repo.update(id, changes).await
    }

    async fn update_password(&self, id: UserId, password: String) -> AppResult<User> {
        let change = ChangePassword { password };
        validate_input(&change)?;
        tracing::debug!(user_id = id, "updating password");

        self.repo.update_password(id, change.password).await
    }

    async fn delete_user(&self, id: UserId) -> AppResult<()> {
        tracing::debug!(user_id = id, "deleting user");
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::predicate::eq;

    use super::*;
    use crate::repository::MockUserRepository;
    use domain::Page;

    fn test_user(id: UserId, name: &str, login: &str) -> User {
        User {
            id,
            name: name.to_string(),
            login: login.to_string(),
            email: format!("{}@example.com", login),
            password: "secret".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service(repo: MockUserRepository) -> UserManager {
        UserManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|input| Ok(test_user(1, &input.name, &input.login)));

        let user = service(repo)
            .create_user(CreateUser::new("Alice", "alice1", "alice1@example.com", "pw"))
            .await
            .unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.login, "alice1");
    }

    #[tokio::test]
    async fn test_create_user_invalid_email_never_reaches_store() {
        let mut repo = MockUserRepository::new();
        repo.expect_create().never();

        let result = service(repo)
            .create_user(CreateUser::new("Alice", "alice1", "not-an-email", "pw"))
            .await;

        match result {
            Err(AppError::Validation(message)) => assert!(message.contains("email")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_user_conflict_is_propagated() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .returning(|_| Err(AppError::already_exists("User with this login or email")));

        let result = service(repo)
            .create_user(CreateUser::new("Alice", "alice1", "alice1@example.com", "pw"))
            .await;

        assert!(matches!(result, Err(AppError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().with(eq(42)).returning(|_| Ok(None));

        let result = service(repo).get_user(42).await;

        assert!(matches!(result, Err(AppError::NotFound(ref e)) if e == "User 42"));
    }

    #[tokio::test]
    async fn test_views_hide_fields() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(test_user(id, "Alice", "alice1"))));
        let service = service(repo);

        let public = service.get_public_user(3).await.unwrap();
        assert_eq!(public, PublicUser { name: "Alice".to_string() });

        let private = service.get_private_user(3).await.unwrap();
        assert_eq!(private.email, "alice1@example.com");
    }

    #[tokio::test]
    async fn test_find_user_requires_a_field() {
        let mut repo = MockUserRepository::new();
        repo.expect_find().never();

        let result = service(repo)
            .find_user(FindUserFilter::by_login(""))
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_find_user_passes_normalized_filter() {
        let mut repo = MockUserRepository::new();
        repo.expect_find()
            .with(eq(FindUserFilter::by_login("alice1")))
            .returning(|_| Ok(Some(test_user(1, "Alice", "alice1"))));

        let filter = FindUserFilter {
            id: None,
            login: Some("alice1".to_string()),
            email: Some(String::new()),
        };
        let user = service(repo).find_user(filter).await.unwrap();

        assert_eq!(user.login, "alice1");
    }

    #[tokio::test]
    async fn test_find_user_no_match() {
        let mut repo = MockUserRepository::new();
        repo.expect_find().returning(|_| Ok(None));

        let result = service(repo).find_user(FindUserFilter::by_id(9)).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_users_rejects_negative_bounds() {
        let mut repo = MockUserRepository::new();
        repo.expect_list().never();
        let service = service(repo);

        assert!(matches!(
            service.list_users(Some(-1), Some(0)).await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            service.list_users(None, Some(-1)).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_list_users_forwards_page() {
        let mut repo = MockUserRepository::new();
        repo.expect_list()
            .with(eq(Page {
                limit: Some(1),
                offset: Some(0),
            }))
            .returning(|_| Ok(vec![test_user(1, "Alice", "alice1")]));

        let users = service(repo).list_users(Some(1), Some(0)).await.unwrap();

        assert_eq!(users.len(), 1);
    }

    #[tokio::test]
    async fn test_list_public_users() {
        let mut repo = MockUserRepository::new();
        repo.expect_list().returning(|_| {
            Ok(vec![
                test_user(1, "Alice", "alice1"),
                test_user(2, "Bob", "bob"),
            ])
        });

        let users = service(repo).list_public_users(None, None).await.unwrap();

        let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Alice", "Bob"]);
    }

    #[tokio::test]
    async fn test_update_user_validates_login_length() {
        let mut repo = MockUserRepository::new();
        repo.expect_update().never();

        let result = service(repo)
            .update_user(1, UpdateUser::login("l".repeat(51)))
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_password_rejects_empty() {
        let mut repo = MockUserRepository::new();
        repo.expect_update_password().never();

        let result = service(repo).update_password(1, String::new()).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete().with(eq(5)).times(1).returning(|_| Ok(()));

        assert!(service(repo).delete_user(5).await.is_ok());
    }
}
