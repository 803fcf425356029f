//! User repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};

use super::constraint::{violation, Violation};
use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use super::entities::user_property::{self, Entity as PropertyEntity};
use common::{AppError, AppResult, OptionExt};
use domain::{CreateUser, FindUserFilter, Page, UpdateUser, User, UserId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Inputs are expected to be validated already; the repository only maps
/// storage outcomes to [`AppError`] kinds.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user. Login or email collisions yield `AlreadyExists`.
    async fn create(&self, input: CreateUser) -> AppResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Find the user matching every supplied filter field
    async fn find(&self, filter: FindUserFilter) -> AppResult<Option<User>>;

    /// List users ordered by ID within the page window
    async fn list(&self, page: Page) -> AppResult<Vec<User>>;

    /// Apply the supplied fields, leaving the rest untouched
    async fn update(&self, id: UserId, changes: UpdateUser) -> AppResult<User>;

    /// Replace the stored credential
    async fn update_password(&self, id: UserId, password: String) -> AppResult<User>;

    /// Delete user and every property it owns. Missing users are not an error.
    async fn delete(&self, id: UserId) -> AppResult<()>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn load(&self, id: UserId) -> AppResult<user::Model> {
        UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found(format!("User {}", id))
    }

    async fn save(&self, id: UserId, active: ActiveModel) -> AppResult<User> {
        let model = active
            .update(&self.db)
            .await
            .map_err(|err| write_error(id, err))?;
        Ok(User::from(model))
    }
}

/// Map a failed insert/update on the users table.
fn write_error(id: UserId, err: DbErr) -> AppError {
    if matches!(err, DbErr::RecordNotUpdated) {
        return AppError::not_found(format!("User {}", id));
    }

    match violation(&err) {
        Some(Violation::Unique) => {
            tracing::warn!(user_id = id, "login or email already taken");
            AppError::already_exists("User with this login or email")
        }
        _ => AppError::from(err),
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, input: CreateUser) -> AppResult<User> {
        let now = Utc::now();
        let active_model = ActiveModel {
            name: Set(input.name),
            login: Set(input.login),
            email: Set(input.email),
            password: Set(input.password),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        match active_model.insert(&self.db).await {
            Ok(model) => Ok(User::from(model)),
            Err(err) => match violation(&err) {
                Some(Violation::Unique) => {
                    tracing::warn!("rejected user creation: login or email already taken");
                    Err(AppError::already_exists("User with this login or email"))
                }
                _ => Err(AppError::from(err)),
            },
        }
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find(&self, filter: FindUserFilter) -> AppResult<Option<User>> {
        let mut condition = Condition::all();
        if let Some(id) = filter.id {
            condition = condition.add(user::Column::Id.eq(id));
        }
        if let Some(login) = filter.login {
            condition = condition.add(user::Column::Login.eq(login));
        }
        if let Some(email) = filter.email {
            condition = condition.add(user::Column::Email.eq(email));
        }

        let result = UserEntity::find()
            .filter(condition)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn list(&self, page: Page) -> AppResult<Vec<User>> {
        let mut query = UserEntity::find().order_by_asc(user::Column::Id);
        if let Some(offset) = page.offset {
            query = query.offset(offset);
        }
        if let Some(limit) = page.limit {
            query = query.limit(limit);
        }

        let models = query.all(&self.db).await.map_err(AppError::from)?;
        Ok(models.into_iter().map(User::from).collect())
    }

    async fn update(&self, id: UserId, changes: UpdateUser) -> AppResult<User> {
        let mut active: ActiveModel = self.load(id).await?.into();

        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(login) = changes.login {
            active.login = Set(login);
        }
        active.updated_at = Set(Utc::now());

        self.save(id, active).await
    }

    async fn update_password(&self, id: UserId, password: String) -> AppResult<User> {
        let mut active: ActiveModel = self.load(id).await?.into();
        active.password = Set(password);
        active.updated_at = Set(Utc::now());

        self.save(id, active).await
    }

    async fn delete(&self, id: UserId) -> AppResult<()> {
        let txn = self.db.begin().await?;

        // Dropping the transaction on an early return rolls it back
        let properties = PropertyEntity::delete_many()
            .filter(user_property::Column::UserId.eq(id))
            .exec(&txn)
            .await?;
        let result = UserEntity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        tracing::info!(
            user_id = id,
            deleted = result.rows_affected,
            properties = properties.rows_affected,
            "user deleted"
        );
        Ok(())
    }
}
