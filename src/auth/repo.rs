use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use thiserror::Error;

/// One account row in the `users` table.
///
/// `password` and `repeat_password` hold the text submitted at registration,
/// unhashed. That matches the system this service replaces and is a known
/// security defect; see the security note in DESIGN.md.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub gender: String,
    #[serde(skip_serializing)]
    pub repeat_password: String,
}

/// Field values for a new account. Callers trim and reject empty values
/// before reaching the store; the store itself only enforces email
/// uniqueness.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub gender: String,
    pub repeat_password: String,
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// Another account already owns this email. Expected outcome, not a
    /// fault.
    #[error("email already registered")]
    DuplicateEmail,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Create the `users` table on a fresh database file.
pub async fn ensure_schema(db: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            email TEXT UNIQUE NOT NULL,
            password TEXT NOT NULL,
            gender TEXT,
            repeat_password TEXT
        )
        "#,
    )
    .execute(db)
    .await?;
    Ok(())
}

impl User {
    /// Insert a new account and return it with its assigned id.
    ///
    /// Email uniqueness rides on the table constraint, not on a prior
    /// lookup; of two racing inserts for the same email exactly one gets
    /// `DuplicateEmail`.
    pub async fn create(db: &SqlitePool, new: &NewUser) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, last_name, email, password, gender, repeat_password)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, last_name, email, password, gender, repeat_password
            "#,
        )
        .bind(&new.name)
        .bind(&new.last_name)
        .bind(&new.email)
        .bind(&new.password)
        .bind(&new.gender)
        .bind(&new.repeat_password)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db_err| db_err.is_unique_violation())
            {
                StoreError::DuplicateEmail
            } else {
                StoreError::Database(e)
            }
        })?;
        Ok(user)
    }

    /// Find the account matching both email and password exactly.
    ///
    /// Case-sensitive, no trimming; both values compare against the stored
    /// text as-is. Read-only.
    pub async fn find_by_credentials(
        db: &SqlitePool,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, last_name, email, password, gender, repeat_password
            FROM users
            WHERE email = $1 AND password = $2
            "#,
        )
        .bind(email)
        .bind(password)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::memory_pool;

    fn sample_user(email: &str) -> NewUser {
        NewUser {
            name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: email.into(),
            password: "secret".into(),
            gender: "female".into(),
            repeat_password: "secret".into(),
        }
    }

    #[tokio::test]
    async fn create_then_find_by_credentials() {
        let db = memory_pool().await;
        let created = User::create(&db, &sample_user("ada@example.com"))
            .await
            .expect("create user");
        assert!(created.id >= 1);
        assert_eq!(created.email, "ada@example.com");
        assert_eq!(created.password, "secret");
        assert_eq!(created.repeat_password, "secret");

        let found = User::find_by_credentials(&db, "ada@example.com", "secret")
            .await
            .expect("query")
            .expect("user exists");
        assert_eq!(found.id, created.id);
        assert_eq!(found.name, "Ada");
        assert_eq!(found.last_name, "Lovelace");
        assert_eq!(found.gender, "female");
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let db = memory_pool().await;
        User::create(&db, &sample_user("taken@example.com"))
            .await
            .expect("first create");

        let mut second = sample_user("taken@example.com");
        second.name = "Grace".into();
        second.password = "different".into();
        second.repeat_password = "different".into();

        let err = User::create(&db, &second).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail));
    }

    #[tokio::test]
    async fn wrong_password_or_unknown_email_finds_nothing() {
        let db = memory_pool().await;
        User::create(&db, &sample_user("ada@example.com"))
            .await
            .expect("create");

        let miss = User::find_by_credentials(&db, "ada@example.com", "wrong")
            .await
            .expect("query");
        assert!(miss.is_none());

        let unknown = User::find_by_credentials(&db, "nobody@example.com", "secret")
            .await
            .expect("query");
        assert!(unknown.is_none());
    }

    #[tokio::test]
    async fn credentials_match_exactly() {
        let db = memory_pool().await;
        User::create(&db, &sample_user("Ada@Example.com"))
            .await
            .expect("create");

        // Lookup is case-sensitive and does not trim.
        assert!(
            User::find_by_credentials(&db, "ada@example.com", "secret")
                .await
                .expect("query")
                .is_none()
        );
        assert!(
            User::find_by_credentials(&db, "Ada@Example.com", " secret")
                .await
                .expect("query")
                .is_none()
        );
        assert!(
            User::find_by_credentials(&db, "Ada@Example.com", "secret")
                .await
                .expect("query")
                .is_some()
        );
    }

    #[tokio::test]
    async fn ids_are_assigned_in_increasing_order() {
        let db = memory_pool().await;
        let first = User::create(&db, &sample_user("a@example.com"))
            .await
            .expect("create");
        let second = User::create(&db, &sample_user("b@example.com"))
            .await
            .expect("create");
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn find_by_credentials_does_not_mutate_the_store() {
        let db = memory_pool().await;
        User::create(&db, &sample_user("ada@example.com"))
            .await
            .expect("create");

        for _ in 0..3 {
            User::find_by_credentials(&db, "ada@example.com", "secret")
                .await
                .expect("query")
                .expect("match");
        }

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&db)
            .await
            .expect("count");
        assert_eq!(count, 1);
    }

    #[test]
    fn password_fields_are_not_serialized() {
        let user = User {
            id: 1,
            name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "secret".into(),
            gender: String::new(),
            repeat_password: "secret".into(),
        };
        let json = serde_json::to_string(&user).expect("serialize");
        assert!(!json.contains("secret"));
    }
}
