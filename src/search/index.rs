//! Per-attribute index: value identity -> bucket of catalog items
use std::collections::HashMap;

use crate::catalog::{Shirt, ValueId};

/// Mapping from an attribute value's identity to the items carrying it.
///
/// Built once over the full catalog and never mutated afterward; every item
/// lands in exactly one bucket per index. Only identities actually observed
/// in the catalog get a bucket; absent enumerated values are handled later
/// by facet aggregation, not here.
#[derive(Debug)]
pub struct AttributeIndex<'c> {
    buckets: HashMap<ValueId, Vec<&'c Shirt>>,
}

impl<'c> AttributeIndex<'c> {
    /// Group `shirts` by the identity the selector returns. Bucket contents
    /// preserve catalog order.
    pub fn build<F>(shirts: &'c [Shirt], selector: F) -> Self
    where
        F: Fn(&Shirt) -> ValueId,
    {
        let mut buckets: HashMap<ValueId, Vec<&'c Shirt>> = HashMap::new();
        for shirt in shirts {
            buckets.entry(selector(shirt)).or_default().push(shirt);
        }
        Self { buckets }
    }

    /// The bucket for `id`, or an empty slice when the identity was never
    /// observed in the catalog. Total: lookups cannot fail.
    pub fn lookup(&self, id: &ValueId) -> &[&'c Shirt] {
        self.buckets.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct identities observed in the catalog.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
