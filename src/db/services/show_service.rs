use sqlx::{MySqlPool, Result};

use crate::db::models::{NewShow, Show};

// --- Show Service Functions ---

/// Lists shows alphabetically. `Episode_Count` on each row is maintained by
/// the engine's after-insert trigger on `Episode`.
pub async fn list_shows(pool: &MySqlPool) -> Result<Vec<Show>> {
    sqlx::query_as::<_, Show>("SELECT * FROM Shows ORDER BY Name")
        .fetch_all(pool)
        .await
}

pub async fn create_show(pool: &MySqlPool, show: &NewShow) -> Result<()> {
    sqlx::query("INSERT INTO Shows (Show_Id, Name, Genre, Channel_Id) VALUES (?, ?, ?, ?)")
        .bind(&show.show_id)
        .bind(&show.name)
        .bind(&show.genre)
        .bind(&show.channel_id)
        .execute(pool)
        .await?;
    Ok(())
}
