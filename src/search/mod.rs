//! Faceted search: query and result shapes around the engine
pub mod engine;
pub mod index;

use serde::{Deserialize, Serialize};

use crate::catalog::{AttributeValue, Shirt, ValueId};

pub use engine::SearchEngine;
pub use index::AttributeIndex;

/// A query: zero or more desired sizes and zero or more desired colors.
///
/// An empty set for an attribute means "no restriction on that attribute",
/// not "match nothing".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub sizes: Vec<ValueId>,
    pub colors: Vec<ValueId>,
}

impl SearchQuery {
    /// The unrestricted query: matches the whole catalog.
    pub fn unfiltered() -> Self {
        Self::default()
    }

    pub fn sizes<I, V>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ValueId>,
    {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    pub fn colors<I, V>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ValueId>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_unfiltered(&self) -> bool {
        self.sizes.is_empty() && self.colors.is_empty()
    }
}

/// One facet: an enumerated attribute value and the number of result items
/// carrying it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacetCount {
    pub value: AttributeValue,
    pub count: usize,
}

/// Matching items plus exhaustive facet summaries.
///
/// Each summary has exactly one entry per member of the corresponding
/// universe, in universe order, zero counts included; counts sum to
/// `items.len()` per attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults<'c> {
    pub items: Vec<&'c Shirt>,
    pub color_counts: Vec<FacetCount>,
    pub size_counts: Vec<FacetCount>,
}

impl SearchResults<'_> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Count for one facet value, if the value belongs to either universe.
    pub fn count_for(&self, id: &ValueId) -> Option<usize> {
        self.color_counts
            .iter()
            .chain(&self.size_counts)
            .find(|facet| &facet.value.id == id)
            .map(|facet| facet.count)
    }
}
