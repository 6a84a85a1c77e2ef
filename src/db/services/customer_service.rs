use sqlx::{MySqlPool, Result};

use crate::db::models::{Customer, NewCustomer};

// --- Customer Service Functions ---

/// Lists all customers in key order. `Age` on each row was filled in by the
/// engine's before-insert trigger.
pub async fn list_customers(pool: &MySqlPool) -> Result<Vec<Customer>> {
    sqlx::query_as::<_, Customer>("SELECT * FROM Customer ORDER BY Customer_ID")
        .fetch_all(pool)
        .await
}

/// Inserts one customer. `Age` is intentionally absent from the column list.
pub async fn create_customer(pool: &MySqlPool, customer: &NewCustomer) -> Result<()> {
    sqlx::query(
        "INSERT INTO Customer (Customer_ID, First_Name, Last_Name, Phone_No, City, Date_of_Birth) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&customer.customer_id)
    .bind(&customer.first_name)
    .bind(&customer.last_name)
    .bind(&customer.phone_no)
    .bind(&customer.city)
    .bind(customer.date_of_birth)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete_customer(pool: &MySqlPool, customer_id: &str) -> Result<()> {
    sqlx::query("DELETE FROM Customer WHERE Customer_ID = ?")
        .bind(customer_id)
        .execute(pool)
        .await?;
    Ok(())
}
