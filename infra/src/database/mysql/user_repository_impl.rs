//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

use rh_core::domain::entities::user::{NewUser, User, UserRole};
use rh_core::errors::{AuthError, DomainError};
use rh_core::repositories::UserRepository;

const USER_COLUMNS: &str = "id, name, email, phone, password_hash, role";

/// MySQL implementation of UserRepository
///
/// E-mail uniqueness is enforced by the `users.email` unique index, which is
/// what settles two sign-ups racing for the same address.
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &MySqlRow) -> Result<User, DomainError> {
        let role: String = row.try_get("role").map_err(column_error("role"))?;
        let role = role
            .parse::<UserRole>()
            .map_err(|message| DomainError::Database { message })?;

        Ok(User {
            id: row.try_get("id").map_err(column_error("id"))?,
            name: row.try_get("name").map_err(column_error("name"))?,
            email: row.try_get("email").map_err(column_error("email"))?,
            phone: row.try_get("phone").map_err(column_error("phone"))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(column_error("password_hash"))?,
            role,
        })
    }

    async fn find_one(&self, filter: &str, bind: FindBy<'_>) -> Result<Option<User>, DomainError> {
        let sql = format!("SELECT {} FROM users WHERE {} = ? LIMIT 1", USER_COLUMNS, filter);
        let query = sqlx::query(&sql);
        let query = match bind {
            FindBy::Email(email) => query.bind(email),
            FindBy::Id(id) => query.bind(id),
        };

        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_error("Database query failed", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }
}

enum FindBy<'a> {
    Email(&'a str),
    Id(i64),
}

fn column_error(column: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| DomainError::Database {
        message: format!("Failed to get {}: {}", column, e),
    }
}

fn query_error(context: &str, e: sqlx::Error) -> DomainError {
    tracing::error!(error = %e, "{}", context);
    DomainError::Database {
        message: format!("{}: {}", context, e),
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.find_one("email", FindBy::Email(email)).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        self.find_one("id", FindBy::Id(id)).await
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (name, email, phone, password_hash, role)
            VALUES (?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.phone)
            .bind(&user.password_hash)
            .bind(user.role.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::Auth(AuthError::EmailTaken)
                } else {
                    query_error("Failed to create user", e)
                }
            })?;

        let id = i64::try_from(result.last_insert_id()).map_err(|_| DomainError::Database {
            message: "Assigned id out of range".to_string(),
        })?;

        Ok(user.into_user(id))
    }
}
