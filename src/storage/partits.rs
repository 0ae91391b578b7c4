use super::db::ElectionStore;
use crate::error::StoreError;
use crate::models::Partit;

impl ElectionStore {
    /// Get every registered party: (nom, color, curt) triples.
    pub async fn get_all_partits(&self) -> Result<Vec<Partit>, StoreError> {
        let partits =
            sqlx::query_as::<_, Partit>("SELECT nom, color, curt FROM partits ORDER BY curt")
                .fetch_all(&self.pool)
                .await?;

        Ok(partits)
    }

    /// Get the parties holding a candidatura in a constituency.
    pub async fn get_partits(&self, demarcacio: &str) -> Result<Vec<Partit>, StoreError> {
        let partits = sqlx::query_as::<_, Partit>(
            r"
            SELECT p.nom, p.color, p.curt
            FROM candidatures c
            JOIN partits p ON c.partit = p.curt
            WHERE c.demarcacio = ?
            ORDER BY p.curt
            ",
        )
        .bind(demarcacio)
        .fetch_all(&self.pool)
        .await?;

        Ok(partits)
    }

    /// Insert a party. Reference data, administered out of band.
    pub async fn insert_partit(&self, partit: &Partit) -> Result<(), StoreError> {
        sqlx::query("INSERT OR REPLACE INTO partits (curt, nom, color) VALUES (?, ?, ?)")
            .bind(&partit.curt)
            .bind(&partit.nom)
            .bind(&partit.color)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Declare that a party runs in a constituency.
    pub async fn insert_candidatura(&self, partit: &str, demarcacio: &str) -> Result<(), StoreError> {
        sqlx::query("INSERT OR REPLACE INTO candidatures (partit, demarcacio) VALUES (?, ?)")
            .bind(partit)
            .bind(demarcacio)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
