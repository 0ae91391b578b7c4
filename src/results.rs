//! Result composition layer on top of the store.
//!
//! This module provides the [`ResultsService`] struct which ties the vote
//! tallies stored per municipality to the seat assignments published per
//! constituency. It validates the requested demarcació, runs the D'Hondt
//! apportionment over the stored tallies, and shapes seat results into the
//! series points the 3D bar chart consumes.

use std::collections::BTreeMap;

use log::info;

use crate::apportionment;
use crate::error::StoreError;
use crate::models::ChartPoint;
use crate::storage::ElectionStore;

/// Service that composes election results from the store.
///
/// Holds a cloned store handle; construct one wherever results are served.
#[derive(Clone)]
pub struct ResultsService {
    store: ElectionStore,
}

/// Apportionment progress: how many constituencies already have their seats
/// assigned, out of the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub assignades: i64,
    pub total: i64,
}

impl ResultsService {
    pub fn new(store: ElectionStore) -> Self {
        Self { store }
    }

    /// Apportion the seats of a constituency from its stored vote tallies
    /// and persist the assignment.
    ///
    /// Reads the apportioned seat count and the per-party tallies, runs
    /// D'Hondt over them (parties with a candidatura but no votes yet take
    /// part with zero votes), writes the result through the atomic
    /// seat-replacement and returns the assignment.
    ///
    /// # Errors
    /// Returns [`StoreError::DemarcacioNotFound`] for an unknown name, or any
    /// underlying query error.
    pub async fn apportion(&self, demarcacio: &str) -> Result<BTreeMap<String, i64>, StoreError> {
        let num_escons = self.store.get_num_escons(demarcacio).await?;
        let mut vots = self.store.get_vots(demarcacio).await?;

        // Every party running in the demarcació appears in the assignment,
        // even before any of its votes are loaded.
        for partit in self.store.get_partits(demarcacio).await? {
            vots.entry(partit.curt).or_insert(0);
        }

        let assignacio = apportionment::dhondt(&vots, num_escons);
        self.store.set_escons(demarcacio, &assignacio).await?;

        info!("apportioned {num_escons} seats in {demarcacio}");
        Ok(assignacio)
    }

    /// Seat results of one constituency as chart series points.
    ///
    /// Validates the demarcació first so an unknown name is a typed
    /// not-found instead of an empty chart. Points carry each party's short
    /// code, seats won and display color, ordered by seats descending and
    /// short code ascending.
    pub async fn chart_series(&self, demarcacio: &str) -> Result<Vec<ChartPoint>, StoreError> {
        if !self.store.find_demarcacio(demarcacio).await? {
            return Err(StoreError::DemarcacioNotFound(demarcacio.to_string()));
        }

        let escons = self.store.get_escons(demarcacio).await?;
        self.to_series(escons).await
    }

    /// Aggregate seat results across every constituency, same point shape.
    pub async fn chart_series_total(&self) -> Result<Vec<ChartPoint>, StoreError> {
        let escons = self.store.get_all_escons().await?;
        self.to_series(escons).await
    }

    /// How many constituencies have assigned seats, out of the total.
    pub async fn progress(&self) -> Result<Progress, StoreError> {
        let assignades = self.store.count_demarcacions_amb_escons().await?;
        let total = self.store.get_demarcacions().await?.len() as i64;

        Ok(Progress { assignades, total })
    }

    async fn to_series(
        &self,
        escons: BTreeMap<String, i64>,
    ) -> Result<Vec<ChartPoint>, StoreError> {
        let colors: BTreeMap<String, String> = self
            .store
            .get_all_partits()
            .await?
            .into_iter()
            .map(|p| (p.curt, p.color))
            .collect();

        let mut series: Vec<ChartPoint> = escons
            .into_iter()
            .map(|(curt, y)| ChartPoint {
                color: colors.get(&curt).cloned().unwrap_or_default(),
                name: curt,
                y,
            })
            .collect();

        series.sort_by(|a, b| b.y.cmp(&a.y).then_with(|| a.name.cmp(&b.name)));
        Ok(series)
    }
}
