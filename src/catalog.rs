//! Catalog data model: attribute values, universes, and the shirt records
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{FacetError, Result};

/// Stable identity of an enumerated attribute value. Equality and hashing go
/// through the identity alone, never the display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueId(String);

impl ValueId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ValueId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ValueId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One enumerated attribute value: a stable identity plus a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeValue {
    pub id: ValueId,
    pub name: String,
}

impl AttributeValue {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ValueId::new(id),
            name: name.into(),
        }
    }
}

/// Ordered, immutable set of attribute values: the full universe of one
/// attribute (all sizes, or all colors). Iteration order is injection order;
/// facet summaries are emitted in this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<AttributeValue>", into = "Vec<AttributeValue>")]
pub struct Universe {
    values: Vec<AttributeValue>,
}

impl Universe {
    /// Build a universe from an ordered list of values. A repeated identity
    /// keeps its first occurrence.
    pub fn new(values: Vec<AttributeValue>) -> Self {
        let mut seen = HashSet::new();
        let values = values
            .into_iter()
            .filter(|value| seen.insert(value.id.clone()))
            .collect();
        Self { values }
    }

    pub fn values(&self) -> &[AttributeValue] {
        &self.values
    }

    pub fn ids(&self) -> impl Iterator<Item = &ValueId> {
        self.values.iter().map(|value| &value.id)
    }

    pub fn contains(&self, id: &ValueId) -> bool {
        self.values.iter().any(|value| &value.id == id)
    }

    /// Display name for an identity, if the universe knows it.
    pub fn name_of(&self, id: &ValueId) -> Option<&str> {
        self.values
            .iter()
            .find(|value| &value.id == id)
            .map(|value| value.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<AttributeValue>> for Universe {
    fn from(values: Vec<AttributeValue>) -> Self {
        Universe::new(values)
    }
}

impl From<Universe> for Vec<AttributeValue> {
    fn from(universe: Universe) -> Self {
        universe.values
    }
}

/// Identity of one catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShirtId(pub u64);

impl fmt::Display for ShirtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One catalog item: exactly one size and one color, plus display fields the
/// search logic never inspects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shirt {
    pub id: ShirtId,
    pub name: String,
    pub size: ValueId,
    pub color: ValueId,
}

impl Shirt {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        size: impl Into<ValueId>,
        color: impl Into<ValueId>,
    ) -> Self {
        Self {
            id: ShirtId(id),
            name: name.into(),
            size: size.into(),
            color: color.into(),
        }
    }
}

/// The full immutable data set an engine is built over: the two attribute
/// universes and the shirt list. Owned by the caller; the engine only borrows
/// into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub sizes: Universe,
    pub colors: Universe,
    pub shirts: Vec<Shirt>,
}

impl Catalog {
    pub fn new(sizes: Universe, colors: Universe, shirts: Vec<Shirt>) -> Result<Self> {
        let catalog = Self {
            sizes,
            colors,
            shirts,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a catalog from JSON and validate it: every shirt must carry a
    /// size and color from the declared universes, and shirt ids must be
    /// unique.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let load = || -> Result<Self> {
            let content = fs::read_to_string(path)?;
            Self::from_json_str(&content)
        };
        load().map_err(|source| FacetError::CatalogLoad {
            path: path.to_path_buf(),
            source: Box::new(source),
        })
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for shirt in &self.shirts {
            if !seen.insert(shirt.id) {
                return Err(FacetError::Catalog(format!(
                    "duplicate shirt id {}",
                    shirt.id
                )));
            }
            if !self.sizes.contains(&shirt.size) {
                return Err(FacetError::Catalog(format!(
                    "shirt {} has unknown size '{}'",
                    shirt.id, shirt.size
                )));
            }
            if !self.colors.contains(&shirt.color) {
                return Err(FacetError::Catalog(format!(
                    "shirt {} has unknown color '{}'",
                    shirt.id, shirt.color
                )));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.shirts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shirts.is_empty()
    }

    /// Small built-in catalog over the default universes, used by the
    /// `sample` subcommand and as a quick-start fixture.
    pub fn sample() -> Self {
        let shirts = vec![
            Shirt::new(1, "Harbor Tee", "small", "red"),
            Shirt::new(2, "Harbor Tee", "medium", "red"),
            Shirt::new(3, "Skyline Polo", "medium", "blue"),
            Shirt::new(4, "Skyline Polo", "large", "blue"),
            Shirt::new(5, "Canary Henley", "small", "yellow"),
            Shirt::new(6, "Drift Oxford", "large", "white"),
            Shirt::new(7, "Onyx Crew", "medium", "black"),
            Shirt::new(8, "Onyx Crew", "large", "black"),
        ];
        Self {
            sizes: DEFAULT_SIZES.clone(),
            colors: DEFAULT_COLORS.clone(),
            shirts,
        }
    }
}

lazy_static! {
    /// Default size universe, in merchandising order.
    pub static ref DEFAULT_SIZES: Universe = Universe::new(vec![
        AttributeValue::new("small", "Small"),
        AttributeValue::new("medium", "Medium"),
        AttributeValue::new("large", "Large"),
    ]);

    /// Default color universe.
    pub static ref DEFAULT_COLORS: Universe = Universe::new(vec![
        AttributeValue::new("red", "Red"),
        AttributeValue::new("blue", "Blue"),
        AttributeValue::new("yellow", "Yellow"),
        AttributeValue::new("white", "White"),
        AttributeValue::new("black", "Black"),
    ]);
}
