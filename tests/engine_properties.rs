//! Property tests over random catalogs and queries.
use proptest::prelude::*;

use facetfind::catalog::{Catalog, Shirt, DEFAULT_COLORS, DEFAULT_SIZES};
use facetfind::search::{SearchEngine, SearchQuery};
use facetfind::ValueId;

/// Random shirts drawn from the default universes, ids unique by position.
fn arb_shirts(max: usize) -> impl Strategy<Value = Vec<Shirt>> {
    prop::collection::vec(
        (0..DEFAULT_SIZES.len(), 0..DEFAULT_COLORS.len()),
        0..max,
    )
    .prop_map(|picks| {
        picks
            .into_iter()
            .enumerate()
            .map(|(i, (size_idx, color_idx))| {
                Shirt::new(
                    i as u64,
                    format!("shirt-{i}"),
                    DEFAULT_SIZES.values()[size_idx].id.clone(),
                    DEFAULT_COLORS.values()[color_idx].id.clone(),
                )
            })
            .collect()
    })
}

/// Random requested identity lists, duplicates allowed on purpose.
fn arb_query() -> impl Strategy<Value = SearchQuery> {
    (
        prop::collection::vec(0..DEFAULT_SIZES.len(), 0..5),
        prop::collection::vec(0..DEFAULT_COLORS.len(), 0..7),
    )
        .prop_map(|(size_picks, color_picks)| {
            let sizes: Vec<ValueId> = size_picks
                .into_iter()
                .map(|idx| DEFAULT_SIZES.values()[idx].id.clone())
                .collect();
            let colors: Vec<ValueId> = color_picks
                .into_iter()
                .map(|idx| DEFAULT_COLORS.values()[idx].id.clone())
                .collect();
            SearchQuery { sizes, colors }
        })
}

proptest! {
    #[test]
    fn facet_lists_are_exhaustive(shirts in arb_shirts(60), query in arb_query()) {
        let catalog = Catalog::new(DEFAULT_SIZES.clone(), DEFAULT_COLORS.clone(), shirts).unwrap();
        let engine = SearchEngine::new(&catalog);
        let results = engine.search(&query).unwrap();

        prop_assert_eq!(results.color_counts.len(), DEFAULT_COLORS.len());
        prop_assert_eq!(results.size_counts.len(), DEFAULT_SIZES.len());

        // Each universe member appears exactly once.
        for (facet, expected) in results.color_counts.iter().zip(DEFAULT_COLORS.values()) {
            prop_assert_eq!(&facet.value.id, &expected.id);
        }
        for (facet, expected) in results.size_counts.iter().zip(DEFAULT_SIZES.values()) {
            prop_assert_eq!(&facet.value.id, &expected.id);
        }
    }

    #[test]
    fn facet_counts_sum_to_result_count(shirts in arb_shirts(60), query in arb_query()) {
        let catalog = Catalog::new(DEFAULT_SIZES.clone(), DEFAULT_COLORS.clone(), shirts).unwrap();
        let engine = SearchEngine::new(&catalog);
        let results = engine.search(&query).unwrap();

        let color_sum: usize = results.color_counts.iter().map(|facet| facet.count).sum();
        let size_sum: usize = results.size_counts.iter().map(|facet| facet.count).sum();
        prop_assert_eq!(color_sum, results.len());
        prop_assert_eq!(size_sum, results.len());
    }

    #[test]
    fn every_result_matches_the_effective_sets(shirts in arb_shirts(60), query in arb_query()) {
        let catalog = Catalog::new(DEFAULT_SIZES.clone(), DEFAULT_COLORS.clone(), shirts).unwrap();
        let engine = SearchEngine::new(&catalog);
        let results = engine.search(&query).unwrap();

        for shirt in &results.items {
            prop_assert!(query.colors.is_empty() || query.colors.contains(&shirt.color));
            prop_assert!(query.sizes.is_empty() || query.sizes.contains(&shirt.size));
        }
    }

    #[test]
    fn results_are_a_subset_of_the_catalog(shirts in arb_shirts(60), query in arb_query()) {
        let catalog = Catalog::new(DEFAULT_SIZES.clone(), DEFAULT_COLORS.clone(), shirts).unwrap();
        let engine = SearchEngine::new(&catalog);
        let results = engine.search(&query).unwrap();

        for shirt in &results.items {
            prop_assert!(catalog.shirts.iter().any(|candidate| candidate.id == shirt.id));
        }
    }

    #[test]
    fn search_is_idempotent(shirts in arb_shirts(40), query in arb_query()) {
        let catalog = Catalog::new(DEFAULT_SIZES.clone(), DEFAULT_COLORS.clone(), shirts).unwrap();
        let engine = SearchEngine::new(&catalog);

        let first = engine.search(&query).unwrap();
        let second = engine.search(&query).unwrap();

        prop_assert_eq!(&first.items, &second.items);
        prop_assert_eq!(&first.color_counts, &second.color_counts);
        prop_assert_eq!(&first.size_counts, &second.size_counts);
    }

    #[test]
    fn empty_query_returns_the_whole_catalog(shirts in arb_shirts(60)) {
        let catalog = Catalog::new(DEFAULT_SIZES.clone(), DEFAULT_COLORS.clone(), shirts).unwrap();
        let engine = SearchEngine::new(&catalog);

        let results = engine.search(&SearchQuery::unfiltered()).unwrap();
        prop_assert_eq!(results.len(), catalog.len());
    }
}
