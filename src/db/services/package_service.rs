use sqlx::{MySqlPool, Result};

use crate::db::models::Package;

// --- Package Service Functions ---

/// Lists packages ordered by cost, cheapest first.
pub async fn list_packages(pool: &MySqlPool) -> Result<Vec<Package>> {
    sqlx::query_as::<_, Package>("SELECT * FROM Package ORDER BY Cost")
        .fetch_all(pool)
        .await
}

pub async fn create_package(pool: &MySqlPool, package: &Package) -> Result<()> {
    sqlx::query("INSERT INTO Package (Package_Id, Name, Duration, Cost) VALUES (?, ?, ?, ?)")
        .bind(&package.package_id)
        .bind(&package.name)
        .bind(package.duration)
        .bind(package.cost)
        .execute(pool)
        .await?;
    Ok(())
}
