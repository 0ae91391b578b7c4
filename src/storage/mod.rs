//! Database storage layer for election data
//!
//! This module provides the queries of the election schema, split per table:
//! - Comarques (counties)
//! - Poblacions (municipalities)
//! - Demarcacions (constituencies)
//! - Partits and candidatures
//! - Vots (per-municipality vote tallies)
//! - Escons (seat assignments)

pub mod comarques;
pub mod db;
pub mod demarcacions;
pub mod escons;
pub mod partits;
pub mod poblacions;
pub mod vots;

pub use db::ElectionStore;
