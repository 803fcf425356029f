//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! users, their key/value properties, the composed profile view, and the
//! field-level validation rules applied before anything reaches storage.

pub mod constants;
pub mod error;
pub mod pagination;
pub mod profile;
pub mod property;
pub mod user;
pub mod validation;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use pagination::{Page, PageRequest};
pub use profile::Profile;
pub use property::{CreateProperty, Property, PropertyId, UpdateProperty};
pub use user::{
    ChangePassword, CreateUser, FindUserFilter, PrivateUser, PublicUser, UpdateUser, User, UserId,
};
pub use validation::validate_input;
