use sqlx::{MySqlPool, Result};

use crate::db::models::Billing;

// --- Billing Service Functions ---

pub async fn list_billing(pool: &MySqlPool) -> Result<Vec<Billing>> {
    sqlx::query_as::<_, Billing>("SELECT * FROM Billing ORDER BY Date DESC")
        .fetch_all(pool)
        .await
}

pub async fn create_billing(pool: &MySqlPool, billing: &Billing) -> Result<()> {
    sqlx::query(
        "INSERT INTO Billing (Billing_Id, Amount, Date, Discount, Customer_Id) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&billing.billing_id)
    .bind(billing.amount)
    .bind(billing.date)
    .bind(billing.discount)
    .bind(&billing.customer_id)
    .execute(pool)
    .await?;
    Ok(())
}
