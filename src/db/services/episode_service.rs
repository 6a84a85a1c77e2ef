use sqlx::{MySqlPool, Result};

use crate::db::models::Episode;

// --- Episode Service Functions ---

pub async fn list_episodes(pool: &MySqlPool) -> Result<Vec<Episode>> {
    sqlx::query_as::<_, Episode>("SELECT * FROM Episode ORDER BY Show_Id, Episode_No DESC")
        .fetch_all(pool)
        .await
}

/// Inserts one episode. The engine's after-insert trigger bumps the parent
/// show's `Episode_Count` as a side effect; inserts against a show that does
/// not exist are rejected by the engine.
pub async fn create_episode(pool: &MySqlPool, episode: &Episode) -> Result<()> {
    sqlx::query("INSERT INTO Episode (Episode_No, Show_Id, Title, Air_Date) VALUES (?, ?, ?, ?)")
        .bind(episode.episode_no)
        .bind(&episode.show_id)
        .bind(&episode.title)
        .bind(episode.air_date)
        .execute(pool)
        .await?;
    Ok(())
}
