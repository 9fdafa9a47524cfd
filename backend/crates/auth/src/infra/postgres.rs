//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email, full_name::FullName, public_id::PublicId, user_id::UserId,
    user_password::UserPassword, user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const USER_COLUMNS: &str = r#"
    user_id,
    public_id,
    email,
    password_hash,
    user_role,
    full_name,
    avatar_url,
    last_login_at,
    created_at,
    updated_at
"#;

impl UserRepository for PgUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                public_id,
                email,
                password_hash,
                user_role,
                full_name,
                avatar_url,
                last_login_at,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.public_id.as_str())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(user.role.id())
        .bind(user.full_name.as_str())
        .bind(user.avatar_url.as_deref())
        .bind(user.last_login_at)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            // The unique index on email serializes concurrent signups;
            // the losing insert fails atomically and surfaces as Conflict.
            sqlx::Error::Database(db) if db.is_unique_violation() => AuthError::EmailTaken,
            _ => AuthError::Database(e),
        })?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE user_id = $1"
        ))
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE users SET
                full_name = $2,
                avatar_url = $3,
                last_login_at = $4,
                updated_at = $5
            WHERE user_id = $1
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.full_name.as_str())
        .bind(user.avatar_url.as_deref())
        .bind(user.last_login_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    public_id: String,
    email: String,
    password_hash: String,
    user_role: i16,
    full_name: String,
    avatar_url: Option<String>,
    last_login_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let public_id = PublicId::parse_str(&self.public_id)
            .map_err(|e| AuthError::Internal(format!("Invalid public_id in database: {e}")))?;

        let password_hash = UserPassword::from_phc_string(self.password_hash)?;

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            public_id,
            email: Email::from_db(self.email),
            password_hash,
            role: UserRole::from_id(self.user_role),
            full_name: FullName::from_db(self.full_name),
            avatar_url: self.avatar_url,
            last_login_at: self.last_login_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
