//! User Service Library
//!
//! Persistence and validation for user records and the key/value
//! properties attached to them. The request layer talks to the services
//! through [`Services`]; everything below it is wired explicitly.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::config::UserServiceConfig;
use crate::infra::Database;
use crate::repository::{PropertyStore, UserStore};
use crate::service::{
    ProfileAssembler, ProfileService, PropertyManager, PropertyService, UserManager, UserService,
};

/// Centralized access to all services, built over one connection pool.
#[derive(Clone)]
pub struct Services {
    users: Arc<dyn UserService>,
    properties: Arc<dyn PropertyService>,
    profiles: Arc<dyn ProfileService>,
}

impl Services {
    /// Create a service container from already constructed services
    pub fn new(
        users: Arc<dyn UserService>,
        properties: Arc<dyn PropertyService>,
        profiles: Arc<dyn ProfileService>,
    ) -> Self {
        Self {
            users,
            properties,
            profiles,
        }
    }

    /// Wire stores and services over a database connection
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let user_repo = Arc::new(UserStore::new(db.clone()));
        let property_repo = Arc::new(PropertyStore::new(db));

        let users: Arc<dyn UserService> = Arc::new(UserManager::new(user_repo));
        let properties: Arc<dyn PropertyService> = Arc::new(PropertyManager::new(property_repo));
        let profiles = Arc::new(ProfileAssembler::new(users.clone(), properties.clone()));

        Self::new(users, properties, profiles)
    }

    pub fn users(&self) -> Arc<dyn UserService> {
        self.users.clone()
    }

    pub fn properties(&self) -> Arc<dyn PropertyService> {
        self.properties.clone()
    }

    pub fn profiles(&self) -> Arc<dyn ProfileService> {
        self.profiles.clone()
    }
}

/// Connect, apply pending migrations and wire the services.
pub async fn bootstrap(
    config: &UserServiceConfig,
) -> Result<(Database, Services), Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database).await?;
    let services = Services::from_connection(db.get_connection());
    info!(service = %config.service.service_name, "services ready");
    Ok((db, services))
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &UserServiceConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    db.close().await?;
    Ok(())
}

/// Verify the database is reachable.
pub async fn check(config: &UserServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;
    db.ping().await?;
    info!("Database reachable");
    db.close().await?;
    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
