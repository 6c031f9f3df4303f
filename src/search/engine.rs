//! Core search engine: candidate resolution, intersection, facet aggregation
use log::debug;
use std::collections::{HashMap, HashSet};

use crate::catalog::{Catalog, Shirt, ShirtId, Universe, ValueId};
use crate::error::{FacetError, Result};
use crate::search::index::AttributeIndex;
use crate::search::{FacetCount, SearchQuery, SearchResults};

/// Faceted search over a frozen catalog.
///
/// Both per-attribute indexes are built eagerly at construction and never
/// mutated afterward, so any number of concurrent `search` calls may share
/// one engine. A new catalog requires a new engine.
pub struct SearchEngine<'c> {
    by_size: AttributeIndex<'c>,
    by_color: AttributeIndex<'c>,
    sizes: &'c Universe,
    colors: &'c Universe,
}

impl<'c> SearchEngine<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        let by_size = AttributeIndex::build(&catalog.shirts, |shirt| shirt.size.clone());
        let by_color = AttributeIndex::build(&catalog.shirts, |shirt| shirt.color.clone());
        debug!(
            "indexed {} shirts: {} size bucket(s), {} color bucket(s)",
            catalog.shirts.len(),
            by_size.len(),
            by_color.len()
        );
        Self {
            by_size,
            by_color,
            sizes: &catalog.sizes,
            colors: &catalog.colors,
        }
    }

    /// Run a query against the frozen indexes.
    ///
    /// Candidate resolution for colors and sizes runs as one fork-join pair,
    /// facet aggregation for the two attributes as a second; each pair joins
    /// before its results are combined, and a failing branch surfaces as a
    /// single [`FacetError::Aggregate`] instead of partial results.
    ///
    /// A requested identity absent from the universes or the catalog is not
    /// an error: its index lookup is empty, so it contributes zero
    /// candidates. Duplicated identities in the request are processed once.
    ///
    /// Result order follows the color-candidate traversal (effective color
    /// order, catalog order within a color): stable and deterministic for
    /// identical input, but otherwise unspecified. `search` never mutates
    /// engine state.
    pub fn search(&self, query: &SearchQuery) -> Result<SearchResults<'c>> {
        let color_ids = effective_ids(&query.colors, self.colors);
        let size_ids = effective_ids(&query.sizes, self.sizes);

        let (color_matched, size_matched) = join2(
            || resolve(&self.by_color, &color_ids),
            || resolve(&self.by_size, &size_ids),
        )?;
        debug!(
            "candidates: {} by color, {} by size",
            color_matched.len(),
            size_matched.len()
        );

        let items = intersect(color_matched, &size_matched);

        let (color_counts, size_counts) = join2(
            || facet_counts(&items, self.colors, |shirt| shirt.color.clone()),
            || facet_counts(&items, self.sizes, |shirt| shirt.size.clone()),
        )?;

        Ok(SearchResults {
            items,
            color_counts,
            size_counts,
        })
    }
}

/// Run two independent sub-computations concurrently and join both before
/// returning. Failures are never swallowed or partially applied: if either
/// branch fails, the collected causes come back as one aggregate error. The
/// branches are pure and deterministic, so no retry path exists; a failure
/// here is a programming defect.
fn join2<A, B, FA, FB>(left: FA, right: FB) -> Result<(A, B)>
where
    A: Send,
    B: Send,
    FA: FnOnce() -> Result<A> + Send,
    FB: FnOnce() -> Result<B> + Send,
{
    let (left, right) = rayon::join(left, right);
    match (left, right) {
        (Ok(left), Ok(right)) => Ok((left, right)),
        (left, right) => Err(FacetError::aggregate(
            left.err().into_iter().chain(right.err()).collect(),
        )),
    }
}

/// The effective identity set for one attribute: the requested identities
/// with duplicates dropped (first occurrence wins), or the whole universe
/// when nothing was requested.
fn effective_ids(requested: &[ValueId], universe: &Universe) -> Vec<ValueId> {
    if requested.is_empty() {
        return universe.ids().cloned().collect();
    }
    let mut seen = HashSet::new();
    requested
        .iter()
        .filter(|id| seen.insert((*id).clone()))
        .cloned()
        .collect()
}

/// Concatenate the index buckets of each effective identity, preserving the
/// identity traversal order. Identities without a bucket contribute nothing.
fn resolve<'c>(index: &AttributeIndex<'c>, ids: &[ValueId]) -> Result<Vec<&'c Shirt>> {
    let mut candidates = Vec::new();
    for id in ids {
        candidates.extend_from_slice(index.lookup(id));
    }
    Ok(candidates)
}

/// Intersect the two candidate sets by item identity, keeping the primary
/// (color) traversal order.
fn intersect<'c>(primary: Vec<&'c Shirt>, other: &[&'c Shirt]) -> Vec<&'c Shirt> {
    let keep: HashSet<ShirtId> = other.iter().map(|shirt| shirt.id).collect();
    primary
        .into_iter()
        .filter(|shirt| keep.contains(&shirt.id))
        .collect()
}

/// Tally the result set by one attribute, then emit one entry per universe
/// member in universe order, zero-filled for values with no matches.
fn facet_counts<F>(items: &[&Shirt], universe: &Universe, key: F) -> Result<Vec<FacetCount>>
where
    F: Fn(&Shirt) -> ValueId,
{
    let mut tally: HashMap<ValueId, usize> = HashMap::new();
    for shirt in items {
        *tally.entry(key(shirt)).or_insert(0) += 1;
    }
    Ok(universe
        .values()
        .iter()
        .map(|value| FacetCount {
            value: value.clone(),
            count: tally.get(&value.id).copied().unwrap_or(0),
        })
        .collect())
}
