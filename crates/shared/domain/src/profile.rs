//! Profile: read-only composite of a user's public fields and properties.

use serde::{Deserialize, Serialize};

use crate::property::Property;
use crate::user::{User, UserId};

/// User profile. Never carries the password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: UserId,
    pub name: String,
    pub login: String,
    pub email: String,
    pub properties: Vec<Property>,
}

impl Profile {
    /// Compose a profile, discarding the user's credential
    pub fn assemble(user: User, properties: Vec<Property>) -> Self {
        let User {
            id,
            name,
            login,
            email,
            ..
        } = user;

        Self {
            id,
            name,
            login,
            email,
            properties,
        }
    }
}
