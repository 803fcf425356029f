//! Repository layer for data access.

mod constraint;
pub mod entities;
mod property_repository;
mod user_repository;

pub use property_repository::{PropertyRepository, PropertyStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use property_repository::MockPropertyRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
