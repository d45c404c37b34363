use serde::{Deserialize, Serialize};

use crate::auth::repo::User;

/// Gender choice offered by the registration screen. `Other` defers to the
/// free-text `custom_gender` field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GenderChoice {
    Female,
    Male,
    Other,
}

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub repeat_password: String,
    #[serde(default)]
    pub gender: Option<GenderChoice>,
    #[serde(default)]
    pub custom_gender: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for password recovery.
#[derive(Debug, Deserialize)]
pub struct RecoverRequest {
    pub email: String,
}

/// Public part of the user returned to the client.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub gender: String,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            last_name: user.last_name,
            email: user.email,
            gender: user.gender,
        }
    }
}

/// Response returned after a password recovery request.
#[derive(Debug, Serialize)]
pub struct RecoveryResponse {
    pub message: String,
}
