use sqlx::{MySqlPool, Result};

use crate::db::models::Installation;

// --- Installation Service Functions ---

pub async fn list_installations(pool: &MySqlPool) -> Result<Vec<Installation>> {
    sqlx::query_as::<_, Installation>("SELECT * FROM Installation ORDER BY Date DESC")
        .fetch_all(pool)
        .await
}

/// Inserts one installation. The engine's before-insert trigger rejects the
/// row when `Employee_Id` does not exist; that rejection is relayed verbatim,
/// never suppressed.
pub async fn create_installation(pool: &MySqlPool, installation: &Installation) -> Result<()> {
    sqlx::query(
        "INSERT INTO Installation (Installation_Id, Date, Employee_Id, Customer_Id) \
         VALUES (?, ?, ?, ?)",
    )
    .bind(&installation.installation_id)
    .bind(installation.date)
    .bind(&installation.employee_id)
    .bind(&installation.customer_id)
    .execute(pool)
    .await?;
    Ok(())
}
