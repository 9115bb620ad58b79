// src/db.rs

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::{config::Config, error::AppError, utils::hash::hash_password};

/// Opens the connection pool, creating the database file if needed.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(3))
        .connect_with(options)
        .await
}

/// Applies the embedded migrations in `./migrations`.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Creates the configured admin account if it does not exist yet.
pub async fn seed_admin_user(pool: &SqlitePool, config: &Config) -> Result<(), AppError> {
    let (Some(username), Some(password)) = (&config.admin_username, &config.admin_password) else {
        return Ok(());
    };

    let user_exists: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await?;

    if user_exists.is_none() {
        tracing::info!("Seeding admin user: {}", username);
        let hashed_password = hash_password(password)?;

        sqlx::query(
            "INSERT INTO users (username, password, role, created_at) VALUES (?, ?, 'admin', ?)",
        )
        .bind(username)
        .bind(hashed_password)
        .bind(chrono::Utc::now())
        .execute(pool)
        .await?;
        tracing::info!("Admin user created successfully.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(admin: Option<(&str, &str)>) -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            jwt_secret: "secret".to_string(),
            jwt_expiration: 60,
            rust_log: "error".to_string(),
            bind_addr: "127.0.0.1:0".to_string(),
            admin_username: admin.map(|(u, _)| u.to_string()),
            admin_password: admin.map(|(_, p)| p.to_string()),
        }
    }

    async fn memory_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        migrate(&pool).await.unwrap();
        pool
    }

    async fn admin_count(pool: &SqlitePool) -> i64 {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE role = 'admin'")
            .fetch_one(pool)
            .await
            .unwrap();
        count
    }

    #[tokio::test]
    async fn seeding_admin_is_idempotent() {
        let pool = memory_pool().await;
        let config = config(Some(("root", "root_password")));

        seed_admin_user(&pool, &config).await.unwrap();
        seed_admin_user(&pool, &config).await.unwrap();

        assert_eq!(admin_count(&pool).await, 1);
    }

    #[tokio::test]
    async fn no_admin_without_credentials() {
        let pool = memory_pool().await;
        seed_admin_user(&pool, &config(None)).await.unwrap();
        assert_eq!(admin_count(&pool).await, 0);
    }

    #[tokio::test]
    async fn schema_rejects_out_of_range_correct_option() {
        let pool = memory_pool().await;
        let insert = sqlx::query(
            "INSERT INTO questions (text, option_1, option_2, option_3, option_4, correct_option, created_at)
             VALUES ('q', 'a', 'b', 'c', 'd', 5, '2024-01-01T00:00:00Z')",
        )
        .execute(&pool)
        .await;
        assert!(insert.is_err());
    }
}
