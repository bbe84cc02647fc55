//! Record loading and result reporting.
//!
//! The search itself works on an in-memory [`EntitySet`](crate::model::EntitySet);
//! this module reads one from the tabular planet export and renders ranked
//! splits back as text.

mod loader;
mod report;

pub use loader::{load_entities, read_entities, RecordLayout};
pub use report::{render_report, GroupView, SplitView};
