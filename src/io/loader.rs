//! CSV entity loader.
//!
//! # Record format
//!
//! One header row, then one entity per row with ten positional fields,
//! optionally surrounded by whitespace:
//!
//! ```text
//! name, owner, economy, industry, science, resources, naturalResources, ships, y, x
//! ```
//!
//! Natural resources, industry and science become the primary, secondary
//! and tertiary attributes. Economy, resources and ships are kept as
//! unscored extras. Note that `y` precedes `x`.

use crate::error::PartitionError;
use crate::model::{Attributes, Entity, EntitySet, Position};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

const NAME: usize = 0;
const OWNER: usize = 1;
const ECONOMY: usize = 2;
const INDUSTRY: usize = 3;
const SCIENCE: usize = 4;
const RESOURCES: usize = 5;
const NATURAL_RESOURCES: usize = 6;
const SHIPS: usize = 7;
const Y: usize = 8;
const X: usize = 9;

/// Column placement of entity records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RecordLayout {
    /// Leading columns ignored before the name (e.g. a row index).
    pub skip_columns: usize,
}

impl RecordLayout {
    pub fn with_skip_columns(mut self, n: usize) -> Self {
        self.skip_columns = n;
        self
    }
}

/// Loads entities from the CSV file at `path`.
pub fn load_entities(path: &Path, layout: &RecordLayout) -> Result<EntitySet, PartitionError> {
    let file = File::open(path)?;
    let entities = read_entities(file, layout)?;
    info!(path = %path.display(), entities = entities.len(), "loaded entities");
    Ok(entities)
}

/// Reads entities from CSV text.
///
/// Any malformed record aborts the whole load.
///
/// # Examples
///
/// ```
/// use u_partition::io::{read_entities, RecordLayout};
///
/// let csv = "name,owner,economy,industry,science,resources,natural,ships,y,x\n\
///            Vega, blue, 3, 2, 1, 20, 14, 40, 1.5, -2.0\n";
/// let set = read_entities(csv.as_bytes(), &RecordLayout::default()).unwrap();
/// assert_eq!(set[0].attributes.primary, 14);
/// assert_eq!(set[0].position.x, -2.0);
/// ```
pub fn read_entities<R: Read>(reader: R, layout: &RecordLayout) -> Result<EntitySet, PartitionError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut entities = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        let row = Row {
            record: &record,
            line,
            skip: layout.skip_columns,
        };

        let entity = Entity::new(
            row.text(NAME, "name")?,
            Attributes::new(
                row.int(NATURAL_RESOURCES, "naturalResources")?,
                row.int(INDUSTRY, "industry")?,
                row.int(SCIENCE, "science")?,
            ),
            Position::new(row.real(X, "x")?, row.real(Y, "y")?),
        )
        .with_owner(row.text(OWNER, "owner")?)
        .with_extra("economy", row.int(ECONOMY, "economy")?)
        .with_extra("resources", row.int(RESOURCES, "resources")?)
        .with_extra("ships", row.int(SHIPS, "ships")?);

        debug!(line, name = %entity.name, "parsed entity");
        entities.push(entity);
    }

    EntitySet::new(entities)
}

struct Row<'r> {
    record: &'r csv::StringRecord,
    line: u64,
    skip: usize,
}

impl Row<'_> {
    fn text(&self, column: usize, field: &'static str) -> Result<&str, PartitionError> {
        self.record
            .get(self.skip + column)
            .ok_or(PartitionError::MissingField {
                line: self.line,
                field,
            })
    }

    fn int(&self, column: usize, field: &'static str) -> Result<i64, PartitionError> {
        let raw = self.text(column, field)?;
        raw.parse().map_err(|_| self.invalid(field, raw))
    }

    fn real(&self, column: usize, field: &'static str) -> Result<f64, PartitionError> {
        let raw = self.text(column, field)?;
        raw.parse().map_err(|_| self.invalid(field, raw))
    }

    fn invalid(&self, field: &'static str, raw: &str) -> PartitionError {
        PartitionError::InvalidNumber {
            line: self.line,
            field,
            value: raw.to_string(),
        }
    }
}
