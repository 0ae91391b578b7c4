use std::collections::BTreeMap;

use log::info;
use sqlx::Row;

use super::db::ElectionStore;
use crate::error::StoreError;

impl ElectionStore {
    /// Vote tally per party in a constituency.
    ///
    /// Returns a map keyed by party short code holding each party's total
    /// votes, summed over the constituency's municipalities. Only parties
    /// with a candidatura there are counted; a party with a candidatura but
    /// no vote rows yet is absent from the map.
    pub async fn get_vots(&self, demarcacio: &str) -> Result<BTreeMap<String, i64>, StoreError> {
        let rows = sqlx::query(
            r"
            SELECT v.partit, SUM(v.vots) AS vots
            FROM vots v
            JOIN poblacions pb ON v.poblacio = pb.poblacio
            JOIN candidatures c ON c.partit = v.partit AND c.demarcacio = pb.demarcacio
            WHERE UPPER(pb.demarcacio) = UPPER(?)
            GROUP BY v.partit
            ",
        )
        .bind(demarcacio)
        .fetch_all(&self.pool)
        .await?;

        let mut vots = BTreeMap::new();
        for row in &rows {
            vots.insert(row.get::<String, _>("partit"), row.get::<i64, _>("vots"));
        }

        Ok(vots)
    }

    /// Replace the vote rows of a municipality with the supplied
    /// (party short code → votes) pairs, atomically.
    ///
    /// The previous rows for the municipality are deleted and one row per
    /// pair is inserted, all inside a single transaction; on any failure the
    /// transaction rolls back and the prior rows stay untouched. An empty map
    /// leaves the municipality with no vote rows at all.
    pub async fn set_vots(
        &self,
        poblacio: &str,
        vots_partits: &BTreeMap<String, i64>,
    ) -> Result<(), StoreError> {
        if !self.find_poblacio(poblacio).await? {
            return Err(StoreError::PoblacioNotFound(poblacio.to_string()));
        }

        let mut tx = self.pool.begin().await?;

        // Clear existing vote rows for the municipality
        sqlx::query("DELETE FROM vots WHERE poblacio = ?")
            .bind(poblacio)
            .execute(&mut *tx)
            .await?;

        // Insert new tallies
        for (partit, vots) in vots_partits {
            sqlx::query("INSERT INTO vots (poblacio, partit, vots) VALUES (?, ?, ?)")
                .bind(poblacio)
                .bind(partit)
                .bind(vots)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        info!("stored {} vote tallies for {poblacio}", vots_partits.len());
        Ok(())
    }
}
