//! Aggregate counts for the admin dashboard.

use sqlx::PgPool;

use crate::models::dashboard::ContentCounts;

pub struct DashboardRepo;

impl DashboardRepo {
    /// Row counts of every content table in a single round trip.
    pub async fn counts(pool: &PgPool) -> Result<ContentCounts, sqlx::Error> {
        sqlx::query_as::<_, ContentCounts>(
            "SELECT
                (SELECT COUNT(*) FROM sports)  AS sports,
                (SELECT COUNT(*) FROM players) AS players,
                (SELECT COUNT(*) FROM games)   AS games,
                (SELECT COUNT(*) FROM stories) AS stories,
                (SELECT COUNT(*) FROM media)   AS media",
        )
        .fetch_one(pool)
        .await
    }
}
