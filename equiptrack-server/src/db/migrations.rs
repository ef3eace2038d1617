//! Database migrations for inventory tables

use sqlx::PgPool;

/// Run all migrations
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running migrations...");

    // Create categories table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            category_id SERIAL PRIMARY KEY,
            category_name VARCHAR(100) NOT NULL UNIQUE,
            description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Create equipment conditions table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS equipment_conditions (
            condition_id SERIAL PRIMARY KEY,
            condition_name VARCHAR(100) NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Create sports equipment table
    // Deleting a category or condition still referenced here is
    // restricted; the violation surfaces as a conflict at the API.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS sports_equipment (
            equipment_id UUID PRIMARY KEY,
            category_id INTEGER NOT NULL REFERENCES categories(category_id) ON DELETE RESTRICT,
            serial_number VARCHAR(50) NOT NULL UNIQUE,
            equipment_name VARCHAR(100) NOT NULL,
            quantity INTEGER NOT NULL CHECK (quantity >= 0),
            condition_id INTEGER NOT NULL REFERENCES equipment_conditions(condition_id) ON DELETE RESTRICT,
            last_check_date DATE,
            end_of_service_date DATE NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    create_indexes(pool).await?;

    tracing::info!("Migrations complete");
    Ok(())
}

async fn create_indexes(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_sports_equipment_category ON sports_equipment(category_id)",
    )
    .execute(pool)
    .await?;
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_sports_equipment_condition ON sports_equipment(condition_id)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
