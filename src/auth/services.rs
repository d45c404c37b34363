use sqlx::SqlitePool;
use tracing::warn;

use crate::auth::dto::{GenderChoice, RegisterRequest};
use crate::auth::repo::{NewUser, StoreError, User};

/// Result of a registration attempt. Validation outcomes come back before
/// any store access; `EmailTaken` is the store's uniqueness constraint
/// speaking.
#[derive(Debug)]
pub enum RegistrationOutcome {
    Success(User),
    MissingFields,
    PasswordMismatch,
    EmailTaken,
}

/// Result of a login attempt. An unknown email and a wrong password are
/// both `InvalidCredentials`.
#[derive(Debug)]
pub enum LoginOutcome {
    Success(User),
    MissingFields,
    InvalidCredentials,
}

/// Recovery only confirms receipt; nothing is looked up or sent.
#[derive(Debug, PartialEq, Eq)]
pub enum RecoveryOutcome {
    Acknowledged,
}

fn resolve_gender(choice: Option<GenderChoice>, custom: &str) -> String {
    match choice {
        Some(GenderChoice::Female) => "female".to_string(),
        Some(GenderChoice::Male) => "male".to_string(),
        Some(GenderChoice::Other) => custom.trim().to_string(),
        None => String::new(),
    }
}

/// Validate a registration form and insert the account.
///
/// Checks run in a fixed order: required fields, then password
/// confirmation, then the insert. A form with several problems reports the
/// earliest one. `Err` is reserved for storage faults.
pub async fn submit_registration(
    db: &SqlitePool,
    form: RegisterRequest,
) -> Result<RegistrationOutcome, StoreError> {
    let name = form.name.trim();
    let last_name = form.last_name.trim();
    let email = form.email.trim();
    let password = form.password.trim();
    let repeat_password = form.repeat_password.trim();

    if name.is_empty()
        || last_name.is_empty()
        || email.is_empty()
        || password.is_empty()
        || repeat_password.is_empty()
    {
        warn!("registration with missing fields");
        return Ok(RegistrationOutcome::MissingFields);
    }

    // Gender is the one field allowed to stay empty.
    let gender = resolve_gender(form.gender, &form.custom_gender);

    if password != repeat_password {
        warn!(email = %email, "registration with mismatched passwords");
        return Ok(RegistrationOutcome::PasswordMismatch);
    }

    let new = NewUser {
        name: name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        gender,
        repeat_password: repeat_password.to_string(),
    };

    match User::create(db, &new).await {
        Ok(user) => Ok(RegistrationOutcome::Success(user)),
        Err(StoreError::DuplicateEmail) => {
            warn!(email = %new.email, "registration with taken email");
            Ok(RegistrationOutcome::EmailTaken)
        }
        Err(e) => Err(e),
    }
}

/// Validate login input and look the account up by exact credentials.
pub async fn submit_login(
    db: &SqlitePool,
    email: &str,
    password: &str,
) -> Result<LoginOutcome, StoreError> {
    let email = email.trim();
    let password = password.trim();

    if email.is_empty() || password.is_empty() {
        warn!("login with missing fields");
        return Ok(LoginOutcome::MissingFields);
    }

    match User::find_by_credentials(db, email, password).await? {
        Some(user) => Ok(LoginOutcome::Success(user)),
        None => Ok(LoginOutcome::InvalidCredentials),
    }
}

/// Accept a recovery request. No lookup, no mail; the shell only shows the
/// confirmation message.
pub fn request_password_recovery(_email: &str) -> RecoveryOutcome {
    RecoveryOutcome::Acknowledged
}
