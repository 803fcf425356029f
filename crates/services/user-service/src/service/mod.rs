//! Application services layer - use cases over users and their properties.
//!
//! Services depend on repository traits, wired explicitly through
//! constructors.

mod profile_service;
mod property_service;
mod user_service;

pub use profile_service::{ProfileAssembler, ProfileService};
pub use property_service::{PropertyManager, PropertyService};
pub use user_service::{UserManager, UserService};
