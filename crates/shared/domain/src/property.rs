//! User property entity: an arbitrary key/value pair owned by one user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{MAX_PROPERTY_KEY_LENGTH, MAX_PROPERTY_VALUE_LENGTH};
use crate::user::UserId;

/// Identifier assigned to a property by the store
pub type PropertyId = i32;

/// Property domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub key: String,
    pub value: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Property creation data transfer object
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct CreateProperty {
    /// Owning user
    pub user_id: UserId,
    #[validate(length(max = MAX_PROPERTY_KEY_LENGTH))]
    pub key: String,
    #[validate(length(max = MAX_PROPERTY_VALUE_LENGTH))]
    pub value: String,
}

impl CreateProperty {
    pub fn new(user_id: UserId, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            user_id,
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Property update data transfer object.
///
/// Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
pub struct UpdateProperty {
    #[validate(length(max = MAX_PROPERTY_KEY_LENGTH))]
    pub key: Option<String>,
    #[validate(length(max = MAX_PROPERTY_VALUE_LENGTH))]
    pub value: Option<String>,
}

impl UpdateProperty {
    pub fn key(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            ..Self::default()
        }
    }

    pub fn value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }
}
