use thiserror::Error;

/// Errors surfaced by the storage layer.
///
/// Callers can tell an unreachable store apart from a missing row and from a
/// genuinely empty result, instead of every failure degrading to "no data".
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database could not be reached when the store was opened.
    #[error("cannot connect to the election database: {0}")]
    Unavailable(#[source] sqlx::Error),

    /// No demarcació with the given name exists.
    #[error("demarcació '{0}' does not exist")]
    DemarcacioNotFound(String),

    /// No població with the given name exists.
    #[error("població '{0}' does not exist")]
    PoblacioNotFound(String),

    /// A party was assigned seats in a demarcació where it has no candidatura.
    #[error("party '{partit}' has no candidatura in '{demarcacio}'")]
    CandidaturaNotFound { partit: String, demarcacio: String },

    /// A seat assignment would exceed the seats apportioned to the demarcació.
    #[error("cannot assign {assigned} seats in '{demarcacio}': only {apportioned} apportioned")]
    SeatOverflow {
        demarcacio: String,
        assigned: i64,
        apportioned: i64,
    },

    /// A query or statement failed.
    #[error(transparent)]
    Query(#[from] sqlx::Error),
}

impl StoreError {
    /// True when the error means the row asked about simply is not there.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::DemarcacioNotFound(_) | StoreError::PoblacioNotFound(_)
        )
    }
}
