use prometheus::{Encoder, IntCounter, Opts, Registry, TextEncoder};
use std::sync::Arc;

#[derive(Clone)]
pub struct Metrics {
    pub searches_run: IntCounter,
    pub items_matched: IntCounter,
    pub queries_unfiltered: IntCounter,
    registry: Arc<Registry>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();
        let searches_run =
            IntCounter::with_opts(Opts::new("searches_run", "Number of queries executed")).unwrap();
        let items_matched = IntCounter::with_opts(Opts::new(
            "items_matched",
            "Total items returned across all queries",
        ))
        .unwrap();
        let queries_unfiltered = IntCounter::with_opts(Opts::new(
            "queries_unfiltered",
            "Number of queries with no size or color restriction",
        ))
        .unwrap();

        registry.register(Box::new(searches_run.clone())).ok();
        registry.register(Box::new(items_matched.clone())).ok();
        registry.register(Box::new(queries_unfiltered.clone())).ok();

        Metrics {
            searches_run,
            items_matched,
            queries_unfiltered,
            registry: Arc::new(registry),
        }
    }

    pub fn gather(&self) -> String {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        let encoder = TextEncoder::new();
        encoder.encode(&metric_families, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap_or_default()
    }
}
