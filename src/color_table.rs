//! Function color table generation.
//!
//! Resolves the rows of the function color legend: default category colors
//! for the selected [`CategoryType`], user overrides applied on top, optionally
//! restricted to categories that occur in the loaded dataset, and led by
//! per-gene highlight rows.
//!
//! # Row order
//!
//! Highlight rows always come first, in the order they were requested,
//! followed by category rows in default-table order.

use std::collections::{BTreeMap, HashSet};

use genome_view_ui::{Observers, SubscriptionId};
use serde::{Deserialize, Serialize};

use crate::constants::NONE_CATEGORY;
use crate::model::{CategoryType, GeneId, GenomeData, GenomeId, HexColor};

/// Category key -> color overrides applied on top of the default table.
pub type ColorOverrides = BTreeMap<String, HexColor>;

/// A request to give one gene its own color row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightEntry {
    /// Genome holding the gene
    pub genome_id: GenomeId,
    /// Gene to highlight
    pub gene_id: GeneId,
    /// Color for the gene
    pub color: HexColor,
}

impl HighlightEntry {
    /// Create a highlight entry.
    pub fn new(genome_id: impl Into<String>, gene_id: u32, color: HexColor) -> Self {
        Self {
            genome_id: GenomeId::new(genome_id),
            gene_id: GeneId(gene_id),
            color,
        }
    }

    /// Row key of this highlight (`<genome>-<gene>`).
    pub fn key(&self) -> String {
        highlight_key(&self.genome_id, self.gene_id)
    }
}

fn highlight_key(genome: &GenomeId, gene: GeneId) -> String {
    format!("{}-{}", genome, gene)
}

/// One row of the color legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTableRow {
    /// Display label
    pub label: String,
    /// Category key, or `<genome>-<gene>` for highlight rows
    pub key: String,
    /// Current row color
    pub color: HexColor,
    /// Highlight rows are placed ahead of category rows
    pub prepend: bool,
}

/// Resolves color table rows against a loaded dataset.
#[derive(Debug, Clone, Copy)]
pub struct ColorResolver<'a> {
    data: &'a GenomeData,
}

impl<'a> ColorResolver<'a> {
    /// Create a resolver over `data`.
    pub fn new(data: &'a GenomeData) -> Self {
        Self { data }
    }

    /// Resolve the rows for a category type given by name.
    ///
    /// `None` selects [`CategoryType::Source`]. An unknown name yields no rows.
    pub fn resolve_named(
        &self,
        selector: Option<&str>,
        overrides: Option<&ColorOverrides>,
        highlights: Option<&[HighlightEntry]>,
        filter_to_observed: bool,
    ) -> Vec<ColorTableRow> {
        let category_type = match selector {
            None => CategoryType::default(),
            Some(name) => match name.parse::<CategoryType>() {
                Ok(t) => t,
                Err(e) => {
                    log::warn!("{}; color table left empty", e);
                    return Vec::new();
                }
            },
        };
        self.resolve(category_type, overrides, highlights, filter_to_observed)
    }

    /// Resolve the rows for `category_type`.
    ///
    /// Overrides only recolor keys of the default table. When
    /// `filter_to_observed` is set, categories no gene carries are dropped;
    /// this never applies to [`CategoryType::Source`].
    pub fn resolve(
        &self,
        category_type: CategoryType,
        overrides: Option<&ColorOverrides>,
        highlights: Option<&[HighlightEntry]>,
        filter_to_observed: bool,
    ) -> Vec<ColorTableRow> {
        let observed = (filter_to_observed && category_type != CategoryType::Source)
            .then(|| self.observed_categories(category_type));

        let category_rows = category_type
            .defaults()
            .iter()
            .filter(|def| observed.as_ref().map_or(true, |keys| keys.contains(def.key)))
            .map(|def| {
                let color = overrides
                    .and_then(|o| o.get(def.key))
                    .cloned()
                    .unwrap_or_else(|| def.hex_color());
                ColorTableRow {
                    label: category_type.category_name(def.key).to_string(),
                    key: def.key.to_string(),
                    color,
                    prepend: false,
                }
            });

        let mut rows = self.highlight_rows(highlights.unwrap_or_default());
        rows.extend(category_rows);

        if let Some(overrides) = overrides {
            let ignored = overrides
                .keys()
                .filter(|k| category_type.defaults().iter().all(|def| def.key != k.as_str()))
                .count();
            if ignored > 0 {
                log::debug!("{} color overrides do not match a {} category", ignored, category_type);
            }
        }

        log::debug!(
            "Resolved {} color rows for {} (filtered: {})",
            rows.len(),
            category_type,
            observed.is_some()
        );
        rows
    }

    /// Distinct category keys carried by any gene of any genome. Genes
    /// without a category contribute nothing.
    pub fn observed_categories(&self, category_type: CategoryType) -> HashSet<String> {
        self.data
            .all_genes()
            .filter_map(|(_, _, gene)| category_type.category_for_gene(gene))
            .collect()
    }

    /// One row per highlighted gene. A repeated gene keeps only its last
    /// request, at that request's position.
    fn highlight_rows(&self, highlights: &[HighlightEntry]) -> Vec<ColorTableRow> {
        let mut seen = HashSet::new();
        let mut rows: Vec<ColorTableRow> = highlights
            .iter()
            .rev()
            .filter(|entry| seen.insert(entry.key()))
            .filter(|entry| {
                let Some(genome) = self.data.genome(&entry.genome_id) else {
                    log::debug!("Highlight skipped: no genome '{}'", entry.genome_id);
                    return false;
                };
                if genome.gene(entry.gene_id).is_none() {
                    log::debug!(
                        "Highlight skipped: genome '{}' has no gene {}",
                        entry.genome_id,
                        entry.gene_id
                    );
                    return false;
                }
                true
            })
            .map(|entry| ColorTableRow {
                label: format!("Genome: {}, Gene: {}", entry.genome_id, entry.gene_id),
                key: entry.key(),
                color: entry.color.clone(),
                prepend: true,
            })
            .collect();
        rows.reverse();
        rows
    }
}

/// Notification sent when a row's color is changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorChange {
    /// Row key
    pub key: String,
    /// New color
    pub color: HexColor,
}

/// The rendered color legend and its color-change observers.
///
/// Rebuilding the table with [`ColorTable::replace_rows`] drops every
/// registered observer, so callbacks bound to old rows never fire.
#[derive(Debug, Default)]
pub struct ColorTable {
    category_type: CategoryType,
    rows: Vec<ColorTableRow>,
    on_color_change: Observers<ColorChange>,
}

impl ColorTable {
    /// Create a table from resolved rows.
    pub fn new(category_type: CategoryType, rows: Vec<ColorTableRow>) -> Self {
        Self {
            category_type,
            rows,
            on_color_change: Observers::new(),
        }
    }

    /// Resolve and build a table in one step.
    pub fn resolve(
        data: &GenomeData,
        category_type: CategoryType,
        overrides: Option<&ColorOverrides>,
        highlights: Option<&[HighlightEntry]>,
        filter_to_observed: bool,
    ) -> Self {
        let rows =
            ColorResolver::new(data).resolve(category_type, overrides, highlights, filter_to_observed);
        Self::new(category_type, rows)
    }

    /// Category type the rows were resolved for.
    pub fn category_type(&self) -> CategoryType {
        self.category_type
    }

    /// Rows in display order.
    pub fn rows(&self) -> &[ColorTableRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Replace all rows, dropping every color-change observer.
    pub fn replace_rows(&mut self, category_type: CategoryType, rows: Vec<ColorTableRow>) {
        self.on_color_change.clear();
        self.category_type = category_type;
        self.rows = rows;
    }

    /// Register a color-change observer.
    pub fn on_color_change<F>(&mut self, f: F) -> SubscriptionId
    where
        F: Fn(&ColorChange) + 'static,
    {
        self.on_color_change.subscribe(f)
    }

    /// Remove a color-change observer.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.on_color_change.unsubscribe(id)
    }

    /// Number of registered color-change observers.
    pub fn observer_count(&self) -> usize {
        self.on_color_change.len()
    }

    /// Set the color of the row with `key` and notify observers.
    /// Returns `false` if no row has that key.
    pub fn set_color(&mut self, key: &str, color: HexColor) -> bool {
        let Some(row) = self.rows.iter_mut().find(|row| row.key == key) else {
            log::debug!("No color row '{}'", key);
            return false;
        };
        row.color = color.clone();
        self.on_color_change.notify(&ColorChange {
            key: key.to_string(),
            color,
        });
        true
    }

    /// Color of the row with `key`.
    pub fn color_for_key(&self, key: &str) -> Option<&HexColor> {
        self.rows.iter().find(|row| row.key == key).map(|row| &row.color)
    }

    /// Color a gene is drawn with: its highlight color if highlighted, else
    /// the color of its category row, or of the `None` row when the gene has
    /// no category.
    ///
    /// Returns `None` if the gene is not loaded or the legend has no row for
    /// it. A legend filtered to observed categories never has a `None` row
    /// for COG or KEGG, so unannotated genes get no color from it.
    pub fn color_for_gene(
        &self,
        data: &GenomeData,
        genome: &GenomeId,
        gene_id: GeneId,
    ) -> Option<&HexColor> {
        let gene = data.gene(genome, gene_id)?;
        if let Some(color) = self
            .rows
            .iter()
            .find(|row| row.prepend && row.key == highlight_key(genome, gene_id))
            .map(|row| &row.color)
        {
            return Some(color);
        }
        let category = self
            .category_type
            .category_for_gene(gene)
            .unwrap_or_else(|| NONE_CATEGORY.to_string());
        self.rows
            .iter()
            .find(|row| !row.prepend && row.key == category)
            .map(|row| &row.color)
    }

    /// Current category colors as overrides, for persisting user choices.
    pub fn overrides(&self) -> ColorOverrides {
        self.rows
            .iter()
            .filter(|row| !row.prepend)
            .map(|row| (row.key.clone(), row.color.clone()))
            .collect()
    }
}
