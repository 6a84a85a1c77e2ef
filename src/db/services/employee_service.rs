use sqlx::{MySqlPool, Result};

use crate::db::models::Employee;

// --- Employee Service Functions ---

pub async fn list_employees(pool: &MySqlPool) -> Result<Vec<Employee>> {
    sqlx::query_as::<_, Employee>("SELECT * FROM Employee ORDER BY Employee_Id")
        .fetch_all(pool)
        .await
}

pub async fn create_employee(pool: &MySqlPool, employee: &Employee) -> Result<()> {
    sqlx::query("INSERT INTO Employee (Employee_Id, Name, Contact) VALUES (?, ?, ?)")
        .bind(&employee.employee_id)
        .bind(&employee.name)
        .bind(&employee.contact)
        .execute(pool)
        .await?;
    Ok(())
}

/// Deletes an employee by key. The engine rejects this with a foreign-key
/// violation while installations still reference the employee; that error is
/// relayed to the caller as-is.
pub async fn delete_employee(pool: &MySqlPool, employee_id: &str) -> Result<()> {
    sqlx::query("DELETE FROM Employee WHERE Employee_Id = ?")
        .bind(employee_id)
        .execute(pool)
        .await?;
    Ok(())
}
