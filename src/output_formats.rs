//! Rendering of search results as colored text or JSON
use colored::*;

use crate::catalog::{Catalog, Universe, ValueId};
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::search::{FacetCount, SearchResults};

/// Render results for the terminal or as machine-readable JSON.
pub fn render(
    results: &SearchResults,
    catalog: &Catalog,
    format: &OutputFormat,
    dim_zero_facets: bool,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(results, catalog, dim_zero_facets)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
    }
}

fn render_text(results: &SearchResults, catalog: &Catalog, dim_zero_facets: bool) -> String {
    let mut lines = Vec::new();

    if results.is_empty() {
        lines.push("No matching shirts".yellow().to_string());
    } else {
        lines.push(format!(
            "{} {} {}",
            "Found".green(),
            results.len(),
            "matching shirt(s):".green()
        ));
        for shirt in &results.items {
            lines.push(format!(
                "  {} [{}, {}]",
                shirt.name.bold(),
                display_name(&catalog.sizes, &shirt.size),
                display_name(&catalog.colors, &shirt.color),
            ));
        }
    }

    lines.push(String::new());
    lines.push("Colors:".cyan().bold().to_string());
    lines.extend(facet_lines(&results.color_counts, dim_zero_facets));
    lines.push("Sizes:".cyan().bold().to_string());
    lines.extend(facet_lines(&results.size_counts, dim_zero_facets));

    lines.join("\n")
}

fn facet_lines(counts: &[FacetCount], dim_zero: bool) -> Vec<String> {
    counts
        .iter()
        .map(|facet| {
            let line = format!("  {:<10} {:>5}", facet.value.name, facet.count);
            if facet.count == 0 && dim_zero {
                line.dimmed().to_string()
            } else {
                line
            }
        })
        .collect()
}

fn display_name<'a>(universe: &'a Universe, id: &'a ValueId) -> &'a str {
    universe.name_of(id).unwrap_or_else(|| id.as_str())
}
