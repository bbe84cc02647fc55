//! Entity records and the validated entity collection.

use crate::error::PartitionError;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::ops::{Add, Index};

/// The three balance attributes compared between the two sides of a split.
///
/// In the planet-splitting domain these are natural resources (primary),
/// industry (secondary) and science (tertiary).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    pub primary: i64,
    pub secondary: i64,
    pub tertiary: i64,
}

impl Attributes {
    pub fn new(primary: i64, secondary: i64, tertiary: i64) -> Self {
        Self {
            primary,
            secondary,
            tertiary,
        }
    }

    /// Per-attribute absolute difference.
    pub fn abs_diff(&self, other: &Attributes) -> Attributes {
        Attributes {
            primary: (self.primary - other.primary).abs(),
            secondary: (self.secondary - other.secondary).abs(),
            tertiary: (self.tertiary - other.tertiary).abs(),
        }
    }
}

impl Add for Attributes {
    type Output = Attributes;

    fn add(self, rhs: Attributes) -> Attributes {
        Attributes {
            primary: self.primary + rhs.primary,
            secondary: self.secondary + rhs.secondary,
            tertiary: self.tertiary + rhs.tertiary,
        }
    }
}

impl Sum for Attributes {
    fn sum<I: Iterator<Item = Attributes>>(iter: I) -> Attributes {
        iter.fold(Attributes::default(), Add::add)
    }
}

impl<'a> Sum<&'a Attributes> for Attributes {
    fn sum<I: Iterator<Item = &'a Attributes>>(iter: I) -> Attributes {
        iter.copied().sum()
    }
}

/// A point on the 2-D map.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// An immutable, weighted, spatially located item to be partitioned.
///
/// Equality and hashing use the name only, so two records with the same
/// name are the same entity regardless of their attributes.
///
/// # Examples
///
/// ```
/// use u_partition::model::{Attributes, Entity, Position};
///
/// let e = Entity::new("Vega", Attributes::new(12, 3, 2), Position::new(1.0, -2.5))
///     .with_owner("blue")
///     .with_extra("ships", 40);
/// assert_eq!(e.extra("ships"), Some(40));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub name: String,
    pub owner: String,
    pub attributes: Attributes,
    pub position: Position,
    /// Attributes carried through from the input but not used in scoring.
    pub extras: Vec<(String, i64)>,
}

impl Entity {
    pub fn new(name: impl Into<String>, attributes: Attributes, position: Position) -> Self {
        Self {
            name: name.into(),
            owner: String::new(),
            attributes,
            position,
            extras: Vec::new(),
        }
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    pub fn with_extra(mut self, label: impl Into<String>, value: i64) -> Self {
        self.extras.push((label.into(), value));
        self
    }

    /// Looks up an unscored attribute by label.
    pub fn extra(&self, label: &str) -> Option<i64> {
        self.extras
            .iter()
            .find(|(l, _)| l == label)
            .map(|&(_, v)| v)
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Entity {}

impl Hash for Entity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// The ordered, validated collection of entities a search runs over.
///
/// Construction checks that names are unique, coordinates finite and that
/// the absolute attribute values of each kind sum within `i64`. Any group
/// total or difference of two disjoint group totals is then bounded by that
/// sum, so scoring is a total function.
#[derive(Debug, Clone, Default)]
pub struct EntitySet {
    entities: Vec<Entity>,
}

impl EntitySet {
    /// Validates and wraps `entities`, preserving their order.
    pub fn new(entities: Vec<Entity>) -> Result<Self, PartitionError> {
        {
            let mut seen = HashSet::with_capacity(entities.len());
            for e in &entities {
                if !seen.insert(e.name.as_str()) {
                    return Err(PartitionError::DuplicateName(e.name.clone()));
                }
                if !e.position.is_finite() {
                    return Err(PartitionError::NonFiniteCoordinate {
                        name: e.name.clone(),
                        x: e.position.x,
                        y: e.position.y,
                    });
                }
            }
        }
        check_attribute_range(&entities)?;
        Ok(Self { entities })
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }

    pub fn as_slice(&self) -> &[Entity] {
        &self.entities
    }

    /// Summed attributes of the entities at `indices`.
    pub fn totals(&self, indices: &[usize]) -> Attributes {
        indices.iter().map(|&i| &self.entities[i].attributes).sum()
    }
}

fn check_attribute_range(entities: &[Entity]) -> Result<(), PartitionError> {
    let fields: [(&'static str, fn(&Attributes) -> i64); 3] = [
        ("primary", |a| a.primary),
        ("secondary", |a| a.secondary),
        ("tertiary", |a| a.tertiary),
    ];
    for (attribute, field) in fields {
        let magnitude: i128 = entities
            .iter()
            .map(|e| i128::from(field(&e.attributes).unsigned_abs()))
            .sum();
        if magnitude > i128::from(i64::MAX) {
            return Err(PartitionError::AttributeOverflow { attribute });
        }
    }
    Ok(())
}

impl Index<usize> for EntitySet {
    type Output = Entity;

    fn index(&self, index: usize) -> &Entity {
        &self.entities[index]
    }
}

impl<'a> IntoIterator for &'a EntitySet {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn planet(name: &str, x: f64, y: f64) -> Entity {
        Entity::new(name, Attributes::new(10, 1, 1), Position::new(x, y))
    }

    #[test]
    fn test_attributes_sum_and_diff() {
        let a = [Attributes::new(1, 2, 3), Attributes::new(4, 5, 6)];
        let total: Attributes = a.iter().sum();
        assert_eq!(total, Attributes::new(5, 7, 9));

        let d = Attributes::new(3, 1, 0).abs_diff(&Attributes::new(10, 0, 2));
        assert_eq!(d, Attributes::new(7, 1, 2));
    }

    #[test]
    fn test_position_distance() {
        let d = Position::new(0.0, 0.0).distance(&Position::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_entity_identity_is_name() {
        let a = planet("Sol", 0.0, 0.0);
        let b = Entity::new("Sol", Attributes::new(99, 9, 9), Position::new(5.0, 5.0));
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(!set.insert(b));
    }

    #[test]
    fn test_entity_set_rejects_duplicate_names() {
        let err = EntitySet::new(vec![planet("A", 0.0, 0.0), planet("A", 1.0, 1.0)]);
        assert!(matches!(err, Err(PartitionError::DuplicateName(n)) if n == "A"));
    }

    #[test]
    fn test_entity_set_rejects_nan_coordinate() {
        let err = EntitySet::new(vec![planet("A", f64::NAN, 0.0)]);
        assert!(matches!(
            err,
            Err(PartitionError::NonFiniteCoordinate { .. })
        ));
    }

    #[test]
    fn test_entity_set_rejects_overflowing_attributes() {
        let huge = |name: &str| {
            Entity::new(name, Attributes::new(i64::MAX / 2 + 1, 0, 0), Position::new(0.0, 0.0))
        };
        let err = EntitySet::new(vec![huge("A"), huge("B"), huge("C"), huge("D")]);
        assert!(matches!(
            err,
            Err(PartitionError::AttributeOverflow { attribute: "primary" })
        ));

        let low = Entity::new("E", Attributes::new(0, 0, i64::MIN), Position::new(0.0, 0.0));
        let err = EntitySet::new(vec![low, planet("F", 1.0, 1.0)]);
        assert!(matches!(
            err,
            Err(PartitionError::AttributeOverflow { attribute: "tertiary" })
        ));
    }

    #[test]
    fn test_entity_set_accepts_attributes_at_range_limit() {
        let half = i64::MAX / 2;
        let set = EntitySet::new(vec![
            Entity::new("A", Attributes::new(half, 0, 0), Position::new(0.0, 0.0)),
            Entity::new("B", Attributes::new(-half, 0, 0), Position::new(1.0, 0.0)),
        ])
        .unwrap();
        assert_eq!(set.totals(&[0]).abs_diff(&set.totals(&[1])).primary, 2 * half);
    }

    #[test]
    fn test_entity_set_totals() {
        let set = EntitySet::new(vec![
            planet("A", 0.0, 0.0),
            planet("B", 1.0, 0.0),
            planet("C", 0.0, 1.0),
        ])
        .unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.totals(&[0, 2]), Attributes::new(20, 2, 2));
        assert_eq!(set.totals(&[]), Attributes::default());
        assert_eq!(set[1].name, "B");
    }
}
