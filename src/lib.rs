//! Escrutini - election-results store and seat apportionment
//!
//! This library stores the results of the Catalan parliamentary elections in
//! a relational database and computes how the seats of each constituency
//! ("demarcació") are distributed among the parties that ran there, keeping
//! a constituency's apportioned seats distinct from the seats its parties
//! actually won.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`storage`] - Database schema and query layer
//! * [`apportionment`] - D'Hondt seat apportionment
//! * [`results`] - Result composition and chart payloads

/// D'Hondt divisor method over per-party vote tallies
pub mod apportionment;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and user-facing messages
pub mod constants;

/// Error taxonomy of the storage layer
pub mod error;

/// Logging setup for the binary
pub mod logger;

/// Row models for the election schema
pub mod models;

/// Result composition layer on top of the store
pub mod results;

/// Database storage layer for election data
pub mod storage;

// Re-export the handle and error type for convenient access
pub use error::StoreError;
pub use storage::ElectionStore;
