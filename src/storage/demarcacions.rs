use super::db::ElectionStore;
use crate::error::StoreError;
use crate::models::Demarcacio;

impl ElectionStore {
    /// Get all constituencies with their apportioned seat counts.
    pub async fn get_demarcacions(&self) -> Result<Vec<Demarcacio>, StoreError> {
        let demarcacions =
            sqlx::query_as::<_, Demarcacio>("SELECT nom, escons FROM demarcacions ORDER BY nom")
                .fetch_all(&self.pool)
                .await?;

        Ok(demarcacions)
    }

    /// Check whether a constituency exists. Exact name match, per the schema
    /// collation; used as a precondition gate before further queries.
    pub async fn find_demarcacio(&self, demarcacio: &str) -> Result<bool, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM demarcacions WHERE nom = ?")
            .bind(demarcacio)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    /// Number of seats apportioned to a constituency, case-insensitive name
    /// match. An unknown name is [`StoreError::DemarcacioNotFound`], not zero.
    pub async fn get_num_escons(&self, demarcacio: &str) -> Result<i64, StoreError> {
        sqlx::query_scalar::<_, i64>(
            "SELECT escons FROM demarcacions WHERE UPPER(nom) = UPPER(?)",
        )
        .bind(demarcacio)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::DemarcacioNotFound(demarcacio.to_string()))
    }

    /// Insert a constituency. Reference data, administered out of band.
    pub async fn insert_demarcacio(&self, demarcacio: &Demarcacio) -> Result<(), StoreError> {
        sqlx::query("INSERT OR REPLACE INTO demarcacions (nom, escons) VALUES (?, ?)")
            .bind(&demarcacio.nom)
            .bind(demarcacio.escons)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
