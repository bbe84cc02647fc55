//! Text rendering of ranked splits.

use crate::model::{Attributes, Entity, EntitySet, ScoredSplit};
use crate::search::PartitionResult;
use std::fmt;

/// One side of a split, resolved to entities.
#[derive(Debug, Clone)]
pub struct GroupView<'a> {
    /// Summed attributes of the members.
    pub totals: Attributes,
    /// Members in entity-set order.
    pub members: Vec<&'a Entity>,
}

impl<'a> GroupView<'a> {
    fn new(indices: &[usize], entities: &'a EntitySet) -> Self {
        Self {
            totals: entities.totals(indices),
            members: indices.iter().map(|&i| &entities[i]).collect(),
        }
    }
}

/// A ranked split with its groups resolved to entities.
#[derive(Debug, Clone)]
pub struct SplitView<'a> {
    pub cost: f64,
    pub first: GroupView<'a>,
    pub second: GroupView<'a>,
}

impl<'a> SplitView<'a> {
    /// Resolves `scored` against the set it was computed from.
    pub fn new(scored: &ScoredSplit, entities: &'a EntitySet) -> Self {
        Self {
            cost: scored.cost,
            first: GroupView::new(scored.split.first(), entities),
            second: GroupView::new(scored.split.second(), entities),
        }
    }
}

fn write_triple(f: &mut fmt::Formatter<'_>, a: &Attributes) -> fmt::Result {
    write!(f, "({}, {}, {})", a.primary, a.secondary, a.tertiary)
}

impl fmt::Display for GroupView<'_> {
    /// `(P, S, T) [name(p, s, t), ...]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_triple(f, &self.totals)?;
        f.write_str(" [")?;
        for (i, e) in self.members.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&e.name)?;
            write_triple(f, &e.attributes)?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for SplitView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug keeps the trailing ".0" on integral costs.
        writeln!(f, "{:?}", self.cost)?;
        writeln!(f, "{}", self.first)?;
        writeln!(f, "{}", self.second)
    }
}

/// Renders `result` as text: a leading blank line, then per split a blank
/// line, the cost and one line per group.
pub fn render_report(result: &PartitionResult, entities: &EntitySet) -> String {
    let mut out = String::from("\n");
    for view in result.views(entities) {
        out.push('\n');
        out.push_str(&view.to_string());
    }
    out
}
