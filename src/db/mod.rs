use serde_json::{json, Map, Value};
use sqlx::mysql::{MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::{Column, Row, TypeInfo, ValueRef};

pub mod models;
pub mod services;

/// Opens the connection pool against the external engine. The caller treats a
/// failure here as fatal: the process must not start without its database.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Converts rows of unknown shape (stored-procedure result sets) into JSON
/// objects keyed by column name. The gateway relays these untouched; this is
/// shape-preserving transport, not interpretation.
pub fn rows_to_json(rows: &[MySqlRow]) -> Vec<Value> {
    rows.iter().map(row_to_json).collect()
}

fn row_to_json(row: &MySqlRow) -> Value {
    let mut object = Map::new();
    for column in row.columns() {
        object.insert(
            column.name().to_string(),
            column_to_json(row, column.ordinal(), column.type_info().name()),
        );
    }
    Value::Object(object)
}

fn column_to_json(row: &MySqlRow, idx: usize, type_name: &str) -> Value {
    match row.try_get_raw(idx) {
        Ok(raw) if raw.is_null() => return Value::Null,
        Ok(_) => {}
        Err(_) => return Value::Null,
    }

    // A value that fails to decode as its reported type degrades to null
    // rather than failing the whole result set.
    match type_name {
        "BOOLEAN" => row.try_get::<bool, _>(idx).map(Value::Bool),
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" => {
            row.try_get::<i64, _>(idx).map(|v| json!(v))
        }
        "TINYINT UNSIGNED" | "SMALLINT UNSIGNED" | "MEDIUMINT UNSIGNED" | "INT UNSIGNED"
        | "BIGINT UNSIGNED" | "YEAR" => row.try_get::<u64, _>(idx).map(|v| json!(v)),
        "FLOAT" | "DOUBLE" => row.try_get::<f64, _>(idx).map(|v| json!(v)),
        "DECIMAL" => row
            .try_get::<rust_decimal::Decimal, _>(idx)
            .map(|v| json!(v)),
        "DATE" => row
            .try_get::<chrono::NaiveDate, _>(idx)
            .map(|v| Value::String(v.to_string())),
        "DATETIME" | "TIMESTAMP" => row
            .try_get::<chrono::NaiveDateTime, _>(idx)
            .map(|v| Value::String(v.to_string())),
        "TIME" => row
            .try_get::<chrono::NaiveTime, _>(idx)
            .map(|v| Value::String(v.to_string())),
        _ => row.try_get::<String, _>(idx).map(Value::String),
    }
    .unwrap_or(Value::Null)
}
