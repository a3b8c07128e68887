use sqlx::SqlitePool;
use tracing::debug;

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT,
        email TEXT UNIQUE,
        password_hash TEXT
    )
"#;

const CREATE_CONTACTS: &str = r#"
    CREATE TABLE IF NOT EXISTS contacts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT,
        email TEXT,
        message TEXT
    )
"#;

/// Create the `users` and `contacts` tables if they do not exist yet.
///
/// Safe to run on every startup; existing tables and rows are left untouched.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(CREATE_USERS).execute(&mut *tx).await?;
    sqlx::query(CREATE_CONTACTS).execute(&mut *tx).await?;

    tx.commit().await?;
    debug!("Schema ensured (users, contacts)");

    Ok(())
}
