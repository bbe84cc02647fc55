//! Error types for partition search and record loading.

/// Errors that can occur while loading entities or configuring a search.
///
/// Enumeration, filtering and scoring are total over a validated
/// [`EntitySet`](crate::model::EntitySet), so every variant here is raised
/// before the search starts.
#[derive(Debug, thiserror::Error)]
pub enum PartitionError {
    /// Two entities share a name; names are the entity identity.
    #[error("duplicate entity name '{0}'")]
    DuplicateName(String),

    /// An entity coordinate is NaN or infinite.
    #[error("entity '{name}' has a non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { name: String, x: f64, y: f64 },

    /// The absolute values of one attribute sum beyond the `i64` range, so
    /// group totals could overflow.
    #[error("attribute '{attribute}' totals exceed the supported range")]
    AttributeOverflow { attribute: &'static str },

    /// The search configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A record is shorter than the layout requires.
    #[error("line {line}: missing field '{field}'")]
    MissingField { line: u64, field: &'static str },

    /// A numeric field could not be parsed.
    #[error("line {line}: field '{field}' is not a valid number: '{value}'")]
    InvalidNumber {
        line: u64,
        field: &'static str,
        value: String,
    },

    /// The underlying CSV reader failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The input file could not be opened.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
