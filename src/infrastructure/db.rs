use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    init_db_with_pool(database_url, DEFAULT_MAX_CONNECTIONS).await
}

pub async fn init_db_with_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(connect_options(database_url, max_connections)).await?;

    // Run migrations manually (simple SQL)
    run_migrations(&db).await?;

    Ok(db)
}

fn connect_options(database_url: &str, max_connections: u32) -> ConnectOptions {
    let mut options = ConnectOptions::new(database_url.to_owned());

    // Every pooled connection to an in-memory SQLite URL opens its own empty database
    let max_connections = if database_url.contains(":memory:") {
        1
    } else {
        max_connections.max(1)
    };

    options
        .max_connections(max_connections)
        .min_connections(1)
        .sqlx_logging(false);
    options
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS manuscripts (
            id INTEGER PRIMARY KEY,
            title TEXT,
            era TEXT,
            genre TEXT,
            description TEXT,
            cover_image TEXT,
            pdf_file TEXT
        )
        "#
        .to_owned(),
    ))
    .await?;

    tracing::debug!("Database migrations applied");
    Ok(())
}
