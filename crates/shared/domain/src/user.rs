//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{MAX_EMAIL_LENGTH, MAX_LOGIN_LENGTH, MAX_NAME_LENGTH};

/// Identifier assigned to a user by the store
pub type UserId = i32;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub login: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User creation data transfer object
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct CreateUser {
    /// User display name
    #[validate(length(max = MAX_NAME_LENGTH))]
    pub name: String,
    /// Unique login
    #[validate(length(max = MAX_LOGIN_LENGTH))]
    pub login: String,
    /// Unique email address
    #[validate(email, length(max = MAX_EMAIL_LENGTH))]
    pub email: String,
    /// Opaque credential, stored as given
    pub password: String,
}

impl CreateUser {
    pub fn new(
        name: impl Into<String>,
        login: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            login: login.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// User update data transfer object.
///
/// Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
pub struct UpdateUser {
    /// New display name
    #[validate(length(max = MAX_NAME_LENGTH))]
    pub name: Option<String>,
    /// New login
    #[validate(length(max = MAX_LOGIN_LENGTH))]
    pub login: Option<String>,
}

impl UpdateUser {
    /// Change only the display name
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Change only the login
    pub fn login(login: impl Into<String>) -> Self {
        Self {
            login: Some(login.into()),
            ..Self::default()
        }
    }
}

/// Password replacement request
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct ChangePassword {
    #[validate(length(min = 1))]
    pub password: String,
}

/// Lookup filter for a single user.
///
/// Every supplied field must match (AND semantics).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
pub struct FindUserFilter {
    pub id: Option<UserId>,
    #[validate(length(max = MAX_LOGIN_LENGTH))]
    pub login: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}

impl FindUserFilter {
    pub fn by_id(id: UserId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn by_login(login: impl Into<String>) -> Self {
        Self {
            login: Some(login.into()),
            ..Self::default()
        }
    }

    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }

    /// Drop empty strings so they count as "not supplied"
    pub fn normalized(self) -> Self {
        Self {
            id: self.id,
            login: self.login.filter(|login| !login.is_empty()),
            email: self.email.filter(|email| !email.is_empty()),
        }
    }

    /// True when no field is supplied
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.login.is_none() && self.email.is_none()
    }
}

/// Public view of a user (safe to show to other users)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicUser {
    pub name: String,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self { name: user.name }
    }
}

/// Private view of a user (shown to the user themselves)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivateUser {
    pub name: String,
    pub login: String,
    pub email: String,
}

impl From<User> for PrivateUser {
    fn from(user: User) -> Self {
        Self {
            name: user.name,
            login: user.login,
            email: user.email,
        }
    }
}
