//! Shared fixtures: a migrated in-memory SQLite database.

#![allow(dead_code)]

use common::DatabaseConfig;
use domain::{CreateUser, User};
use user_service_lib::config::UserServiceConfig;
use user_service_lib::infra::Database;
use user_service_lib::{bootstrap, Services};

/// A single pooled connection keeps the in-memory database alive and shared.
pub fn sqlite_config() -> UserServiceConfig {
    UserServiceConfig {
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            sqlx_logging: false,
        },
        ..UserServiceConfig::default()
    }
}

pub async fn setup() -> (Database, Services) {
    bootstrap(&sqlite_config())
        .await
        .expect("in-memory database should migrate")
}

pub fn new_user(login: &str) -> CreateUser {
    CreateUser::new(
        format!("{} name", login),
        login,
        format!("{}@example.com", login),
        format!("{}-password", login),
    )
}

pub async fn create_user(services: &Services, login: &str) -> User {
    services
        .users()
        .create_user(new_user(login))
        .await
        .expect("user should be created")
}
