//! Exhaustive balanced two-way partitioning.
//!
//! Splits a fixed collection of weighted, spatially located entities into
//! two disjoint groups whose attribute sums are as balanced as possible,
//! and reports the best-scoring splits:
//!
//! - **Model**: [`Entity`](model::Entity) records with three integer
//!   balance attributes and a 2-D position, collected in a validated
//!   [`EntitySet`](model::EntitySet); canonical [`Split`](model::Split)s.
//! - **Enumeration**: a lazy [`SplitGenerator`](enumerate::SplitGenerator)
//!   that emits every partition exactly once, in shards that can be
//!   processed independently.
//! - **Search**: feasibility filter, composite cost (attribute balance,
//!   spatial dispersion, group-size symmetry) and a bounded, deduplicated
//!   [`TopN`](search::TopN) collector, driven by
//!   [`PartitionRunner`](search::PartitionRunner).
//! - **I/O**: CSV loading of entity records and text rendering of results.
//!
//! # Example
//!
//! ```
//! use u_partition::io::{read_entities, render_report, RecordLayout};
//! use u_partition::search::{PartitionConfig, PartitionRunner};
//!
//! let csv = "name,owner,economy,industry,science,resources,natural,ships,y,x\n\
//!            A,p,0,1,1,0,10,0,0,0\n\
//!            B,p,0,1,1,0,10,0,0,1\n\
//!            C,p,0,1,1,0,10,0,1,0\n\
//!            D,p,0,1,1,0,10,0,1,1\n";
//! let entities = read_entities(csv.as_bytes(), &RecordLayout::default()).unwrap();
//! let result = PartitionRunner::run(&entities, &PartitionConfig::default()).unwrap();
//!
//! assert_eq!(result.best().unwrap().cost, 10.0);
//! println!("{}", render_report(&result, &entities));
//! ```
//!
//! # Features
//!
//! - `parallel`: shard the enumeration across threads with rayon.
//! - `serde`: `Serialize`/`Deserialize` for the model and configuration.
//! - `cli`: the `u-partition` command-line tool.

pub mod enumerate;
pub mod error;
pub mod io;
pub mod model;
pub mod search;

pub use error::PartitionError;
