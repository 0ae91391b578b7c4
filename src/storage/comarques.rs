use super::db::ElectionStore;
use crate::error::StoreError;

impl ElectionStore {
    /// Get all county names, alphabetically.
    pub async fn get_comarques(&self) -> Result<Vec<String>, StoreError> {
        let comarques = sqlx::query_scalar::<_, String>("SELECT nom FROM comarques ORDER BY nom")
            .fetch_all(&self.pool)
            .await?;

        Ok(comarques)
    }

    /// Insert a county. Reference data, administered out of band.
    pub async fn insert_comarca(&self, nom: &str) -> Result<(), StoreError> {
        sqlx::query("INSERT OR REPLACE INTO comarques (nom) VALUES (?)")
            .bind(nom)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
