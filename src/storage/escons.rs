use std::collections::{BTreeMap, BTreeSet};

use log::info;
use sqlx::Row;

use super::db::ElectionStore;
use crate::error::StoreError;

impl ElectionStore {
    /// Seats won per party in one constituency, case-insensitive name match.
    ///
    /// A constituency with no seat-assignment rows yields an empty map.
    pub async fn get_escons(&self, demarcacio: &str) -> Result<BTreeMap<String, i64>, StoreError> {
        let rows = sqlx::query(
            "SELECT partit, escons FROM escons WHERE UPPER(demarcacio) = UPPER(?)",
        )
        .bind(demarcacio)
        .fetch_all(&self.pool)
        .await?;

        let mut escons = BTreeMap::new();
        for row in &rows {
            escons.insert(row.get::<String, _>("partit"), row.get::<i64, _>("escons"));
        }

        Ok(escons)
    }

    /// Total seats won per party, summed across every constituency.
    ///
    /// Sums the actual seat-assignment rows; the apportioned seat counts of
    /// the demarcacions play no part here.
    pub async fn get_all_escons(&self) -> Result<BTreeMap<String, i64>, StoreError> {
        let rows = sqlx::query("SELECT partit, SUM(escons) AS escons FROM escons GROUP BY partit")
            .fetch_all(&self.pool)
            .await?;

        let mut escons = BTreeMap::new();
        for row in &rows {
            escons.insert(row.get::<String, _>("partit"), row.get::<i64, _>("escons"));
        }

        Ok(escons)
    }

    /// Number of constituencies that already have seat-assignment rows.
    pub async fn count_demarcacions_amb_escons(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(DISTINCT demarcacio) FROM escons")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Replace the seat-assignment rows of a constituency with the supplied
    /// (party short code → seats) pairs, atomically.
    ///
    /// Every assigned party must hold a candidatura in the constituency
    /// ([`StoreError::CandidaturaNotFound`] otherwise), and the assignment
    /// must not exceed the seats apportioned to it
    /// ([`StoreError::SeatOverflow`]). Any failure, including one inside the
    /// transaction, leaves the prior rows untouched.
    pub async fn set_escons(
        &self,
        demarcacio: &str,
        assignacio: &BTreeMap<String, i64>,
    ) -> Result<(), StoreError> {
        // Resolve the canonical spelling: the lookup is case-insensitive but
        // the seat rows must reference the stored name exactly.
        let (nom, apportioned): (String, i64) =
            sqlx::query_as("SELECT nom, escons FROM demarcacions WHERE UPPER(nom) = UPPER(?)")
                .bind(demarcacio)
                .fetch_optional(&self.pool)
                .await?
                .ok_or_else(|| StoreError::DemarcacioNotFound(demarcacio.to_string()))?;

        let assigned: i64 = assignacio.values().sum();
        if assigned > apportioned {
            return Err(StoreError::SeatOverflow {
                demarcacio: demarcacio.to_string(),
                assigned,
                apportioned,
            });
        }

        let candidats: BTreeSet<String> =
            sqlx::query_scalar("SELECT partit FROM candidatures WHERE demarcacio = ?")
                .bind(&nom)
                .fetch_all(&self.pool)
                .await?
                .into_iter()
                .collect();
        if let Some(partit) = assignacio.keys().find(|p| !candidats.contains(*p)) {
            return Err(StoreError::CandidaturaNotFound {
                partit: partit.clone(),
                demarcacio: nom,
            });
        }

        let mut tx = self.pool.begin().await?;

        // Clear existing seat rows for the constituency
        sqlx::query("DELETE FROM escons WHERE demarcacio = ?")
            .bind(&nom)
            .execute(&mut *tx)
            .await?;

        // Insert the new assignment
        for (partit, escons) in assignacio {
            sqlx::query("INSERT INTO escons (demarcacio, partit, escons) VALUES (?, ?, ?)")
                .bind(&nom)
                .bind(partit)
                .bind(escons)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        info!("assigned {assigned} of {apportioned} seats in {nom}");
        Ok(())
    }
}
