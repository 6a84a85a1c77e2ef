use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::Value;
use sqlx::{MySqlPool, Result};

use crate::db::models::PackageSummary;
use crate::db::rows_to_json;

// --- Stored Routine Invocations ---
//
// These forward fixed positional argument tuples to the engine's stored
// procedures and functions. Argument order matches the routine signatures
// exactly; the result sets come back as dynamic JSON because their shape is
// owned by the routine bodies, not by this system.

/// `CALL NewCustomerSubscription(...)`: creates a customer and their first
/// subscription in one engine-side transaction. Returns the procedure's
/// first result set.
#[allow(clippy::too_many_arguments)]
pub async fn new_customer_subscription(
    pool: &MySqlPool,
    customer_id: &str,
    first_name: &str,
    phone_no: &str,
    city: &str,
    date_of_birth: NaiveDate,
    package_id: &str,
    subscription_id: &str,
) -> Result<Vec<Value>> {
    let rows = sqlx::query("CALL NewCustomerSubscription(?, ?, ?, ?, ?, ?, ?)")
        .bind(customer_id)
        .bind(first_name)
        .bind(phone_no)
        .bind(city)
        .bind(date_of_birth)
        .bind(package_id)
        .bind(subscription_id)
        .fetch_all(pool)
        .await?;
    Ok(rows_to_json(&rows))
}

/// `CALL RecordNewPayment(...)`: inserts a billing row dated by the engine.
pub async fn record_payment(
    pool: &MySqlPool,
    billing_id: &str,
    customer_id: &str,
    amount: Decimal,
    discount: Decimal,
) -> Result<Vec<Value>> {
    let rows = sqlx::query("CALL RecordNewPayment(?, ?, ?, ?)")
        .bind(billing_id)
        .bind(customer_id)
        .bind(amount)
        .bind(discount)
        .fetch_all(pool)
        .await?;
    Ok(rows_to_json(&rows))
}

/// `CALL GetChannelsByCategoryAndCity(...)`: availability lookup.
pub async fn channels_by_category_and_city(
    pool: &MySqlPool,
    category: &str,
    city: &str,
) -> Result<Vec<Value>> {
    let rows = sqlx::query("CALL GetChannelsByCategoryAndCity(?, ?)")
        .bind(category)
        .bind(city)
        .fetch_all(pool)
        .await?;
    Ok(rows_to_json(&rows))
}

/// `GetSubscriptionStatus(id)`: ACTIVE/EXPIRED as computed by the engine from
/// `End_Date` vs the current date. NULL for an unknown subscription.
pub async fn subscription_status(pool: &MySqlPool, subscription_id: &str) -> Result<Option<String>> {
    sqlx::query_scalar("SELECT GetSubscriptionStatus(?) AS status")
        .bind(subscription_id)
        .fetch_one(pool)
        .await
}

pub async fn package_channel_count(pool: &MySqlPool, package_id: &str) -> Result<Option<i64>> {
    sqlx::query_scalar("SELECT GetPackageChannelCount(?) AS count")
        .bind(package_id)
        .fetch_one(pool)
        .await
}

pub async fn has_active_installation(pool: &MySqlPool, customer_id: &str) -> Result<Option<bool>> {
    sqlx::query_scalar("SELECT HasActiveInstallation(?) AS installed")
        .bind(customer_id)
        .fetch_one(pool)
        .await
}

/// Reads the engine's pre-joined `PackageSummary` view.
pub async fn package_summary(pool: &MySqlPool) -> Result<Vec<PackageSummary>> {
    sqlx::query_as::<_, PackageSummary>("SELECT * FROM PackageSummary")
        .fetch_all(pool)
        .await
}
