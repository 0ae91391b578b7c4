use super::db::ElectionStore;
use crate::error::StoreError;
use crate::models::Poblacio;

impl ElectionStore {
    /// Get all municipalities with their comarca and demarcació.
    pub async fn get_municipis(&self) -> Result<Vec<Poblacio>, StoreError> {
        let municipis = sqlx::query_as::<_, Poblacio>(
            "SELECT poblacio, comarca, demarcacio FROM poblacions ORDER BY poblacio",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(municipis)
    }

    /// Check whether a municipality exists, exact name match.
    pub async fn find_poblacio(&self, poblacio: &str) -> Result<bool, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM poblacions WHERE poblacio = ?")
            .bind(poblacio)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    /// Insert a municipality. Reference data, administered out of band.
    pub async fn insert_poblacio(&self, poblacio: &Poblacio) -> Result<(), StoreError> {
        sqlx::query(
            r"
            INSERT OR REPLACE INTO poblacions (poblacio, comarca, demarcacio)
            VALUES (?, ?, ?)
            ",
        )
        .bind(&poblacio.poblacio)
        .bind(&poblacio.comarca)
        .bind(&poblacio.demarcacio)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
