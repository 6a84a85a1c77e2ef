use sqlx::{MySqlPool, Result};

use crate::db::models::Channel;

// --- Channel Service Functions ---

// The table is named `Channels`, unlike the other singular table names.

pub async fn list_channels(pool: &MySqlPool) -> Result<Vec<Channel>> {
    sqlx::query_as::<_, Channel>("SELECT * FROM Channels ORDER BY Category, Name")
        .fetch_all(pool)
        .await
}

pub async fn create_channel(pool: &MySqlPool, channel: &Channel) -> Result<()> {
    sqlx::query("INSERT INTO Channels (Channel_Id, Name, Category) VALUES (?, ?, ?)")
        .bind(&channel.channel_id)
        .bind(&channel.name)
        .bind(&channel.category)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn delete_channel(pool: &MySqlPool, channel_id: &str) -> Result<()> {
    sqlx::query("DELETE FROM Channels WHERE Channel_Id = ?")
        .bind(channel_id)
        .execute(pool)
        .await?;
    Ok(())
}
