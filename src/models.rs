use serde::{Deserialize, Serialize};

/// A constituency and the number of seats apportioned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Demarcacio {
    pub nom: String,
    pub escons: i64,
}

/// A municipality with its county and constituency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Poblacio {
    pub poblacio: String,
    pub comarca: String,
    pub demarcacio: String,
}

/// A party: full name, display color and the short code used as its key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Partit {
    pub nom: String,
    pub color: String,
    pub curt: String,
}

/// One column of the seats chart: party short code, seats won, party color.
///
/// Field names follow the chart library's series point format, so the
/// serialized payload can be embedded as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub y: i64,
    pub color: String,
}
