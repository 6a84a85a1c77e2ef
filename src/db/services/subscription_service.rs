use sqlx::{MySqlPool, Result};

use crate::db::models::{NewSubscription, Subscription};

// --- Subscription Service Functions ---

/// Lists subscriptions newest first. `Status` is derived per-row by the
/// engine's `GetSubscriptionStatus` function inside the SELECT; it is never
/// stored in the table.
pub async fn list_subscriptions(pool: &MySqlPool) -> Result<Vec<Subscription>> {
    sqlx::query_as::<_, Subscription>(
        "SELECT *, GetSubscriptionStatus(Subscription_Id) AS Status \
         FROM Subscription \
         ORDER BY Start_Date DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn create_subscription(pool: &MySqlPool, subscription: &NewSubscription) -> Result<()> {
    sqlx::query(
        "INSERT INTO Subscription (Subscription_Id, Start_Date, End_Date, Customer_Id, Package_Id) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&subscription.subscription_id)
    .bind(subscription.start_date)
    .bind(subscription.end_date)
    .bind(&subscription.customer_id)
    .bind(&subscription.package_id)
    .execute(pool)
    .await?;
    Ok(())
}
