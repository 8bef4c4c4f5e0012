//! View state: what is shown, in which order, and where.

use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::color_utils::palette_color;
use crate::constants::{DEFAULT_LAYERS, DEFAULT_VIEW_WIDTH};
use crate::model::{Bookmark, CategoryType, DataLayer, GenomeData, GenomeId, HexColor};

/// Visible nucleotide window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawViewRange")]
pub struct ViewRange {
    /// Window start
    pub start: u64,
    /// Window stop
    pub stop: u64,
}

impl ViewRange {
    /// Create a range, swapping the ends if given in reverse.
    pub fn new(start: u64, stop: u64) -> Self {
        Self {
            start: start.min(stop),
            stop: start.max(stop),
        }
    }

    /// Width of the window.
    pub fn width(&self) -> u64 {
        self.stop.saturating_sub(self.start)
    }
}

#[derive(Deserialize)]
struct RawViewRange {
    start: u64,
    stop: u64,
}

impl From<RawViewRange> for ViewRange {
    fn from(raw: RawViewRange) -> Self {
        ViewRange::new(raw.start, raw.stop)
    }
}

/// Mutable state of one genome view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Display settings
    pub display: DisplayState,
}

impl ViewState {
    /// Initial state for a freshly loaded dataset: genomes in dataset order,
    /// all visible, default layers, window at the start of the longest genome.
    pub fn for_data(data: &GenomeData) -> Self {
        let longest = data
            .genomes
            .iter()
            .map(|(_, record)| {
                record
                    .total_length()
                    .max(record.genes.values().map(|g| g.stop).max().unwrap_or(0))
            })
            .max()
            .unwrap_or(0);
        let width = if longest == 0 {
            DEFAULT_VIEW_WIDTH
        } else {
            longest.min(DEFAULT_VIEW_WIDTH)
        };

        let layers = DEFAULT_LAYERS
            .iter()
            .enumerate()
            .map(|(i, name)| DataLayer::new(name, palette_color(i, DEFAULT_LAYERS.len())))
            .collect();

        Self {
            display: DisplayState {
                bookmarks: Vec::new(),
                additional_data_layers: layers,
                genome_order: data.genome_ids().cloned().collect(),
                hidden_genomes: BTreeSet::new(),
                settings_panel_open: false,
                view_range: ViewRange::new(0, width),
                category_type: CategoryType::default(),
            },
        }
    }
}

/// The `display` section of the view state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayState {
    /// Saved bookmarks
    #[serde(default)]
    pub bookmarks: Vec<Bookmark>,
    /// Data layers in display order
    #[serde(default)]
    pub additional_data_layers: Vec<DataLayer>,
    /// Genomes in display order
    #[serde(default)]
    pub genome_order: Vec<GenomeId>,
    /// Genomes whose checkbox is unticked
    #[serde(default)]
    pub hidden_genomes: BTreeSet<GenomeId>,
    /// Whether the settings panel is shown
    #[serde(default)]
    pub settings_panel_open: bool,
    /// Current nucleotide window
    pub view_range: ViewRange,
    /// Category type genes are colored by
    #[serde(default)]
    pub category_type: CategoryType,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            bookmarks: Vec::new(),
            additional_data_layers: Vec::new(),
            genome_order: Vec::new(),
            hidden_genomes: BTreeSet::new(),
            settings_panel_open: false,
            view_range: ViewRange::new(0, DEFAULT_VIEW_WIDTH),
            category_type: CategoryType::default(),
        }
    }
}

/// Check that `candidate` holds exactly the items of `current`, in any order.
fn is_permutation<T: Eq + Hash>(current: &[T], candidate: &[T]) -> bool {
    if current.len() != candidate.len() {
        return false;
    }
    let current: HashSet<&T> = current.iter().collect();
    let candidate_set: HashSet<&T> = candidate.iter().collect();
    candidate_set.len() == candidate.len() && current == candidate_set
}

impl DisplayState {
    // =========================================================================
    // Genomes
    // =========================================================================

    /// Apply a new genome order after a drag-and-drop.
    /// Rejected (returns `false`) unless `order` is a permutation of the current order.
    pub fn reorder_genomes(&mut self, order: &[GenomeId]) -> bool {
        if !is_permutation(&self.genome_order, order) {
            log::warn!("Ignoring genome order that does not match the loaded genomes");
            return false;
        }
        self.genome_order = order.to_vec();
        log::debug!("Genome order: {:?}", self.genome_order);
        true
    }

    /// Move the genome at `from` to position `to`.
    pub fn move_genome(&mut self, from: usize, to: usize) -> bool {
        if from >= self.genome_order.len() || to >= self.genome_order.len() {
            return false;
        }
        let genome = self.genome_order.remove(from);
        self.genome_order.insert(to, genome);
        true
    }

    /// Tick or untick a genome's checkbox. Returns `true` if visibility
    /// changed; unknown genomes are ignored.
    pub fn set_genome_visible(&mut self, genome: &GenomeId, visible: bool) -> bool {
        if !self.genome_order.contains(genome) {
            log::debug!("No genome '{}' in view", genome);
            return false;
        }
        if visible {
            self.hidden_genomes.remove(genome)
        } else {
            self.hidden_genomes.insert(genome.clone())
        }
    }

    /// Check whether a genome is shown.
    pub fn is_genome_visible(&self, genome: &GenomeId) -> bool {
        self.genome_order.contains(genome) && !self.hidden_genomes.contains(genome)
    }

    /// Shown genomes in display order.
    pub fn visible_genomes(&self) -> impl Iterator<Item = &GenomeId> {
        self.genome_order
            .iter()
            .filter(|g| !self.hidden_genomes.contains(*g))
    }

    // =========================================================================
    // Layers
    // =========================================================================

    /// Look up a layer by name.
    pub fn layer(&self, name: &str) -> Option<&DataLayer> {
        self.additional_data_layers.iter().find(|l| l.name == name)
    }

    fn layer_mut(&mut self, name: &str) -> Option<&mut DataLayer> {
        self.additional_data_layers
            .iter_mut()
            .find(|l| l.name == name)
    }

    /// Apply a new layer order after a drag-and-drop.
    /// Rejected unless `order` names every current layer exactly once.
    pub fn reorder_layers(&mut self, order: &[String]) -> bool {
        let current: Vec<String> = self
            .additional_data_layers
            .iter()
            .map(|l| l.name.clone())
            .collect();
        if !is_permutation(&current, order) {
            log::warn!("Ignoring layer order that does not match the current layers");
            return false;
        }
        let mut layers = std::mem::take(&mut self.additional_data_layers);
        for name in order {
            if let Some(pos) = layers.iter().position(|l| &l.name == name) {
                self.additional_data_layers.push(layers.swap_remove(pos));
            }
        }
        true
    }

    /// Show or hide a layer. Unknown layers are ignored.
    pub fn set_layer_visible(&mut self, name: &str, visible: bool) -> bool {
        match self.layer_mut(name) {
            Some(layer) => {
                layer.visible = visible;
                true
            }
            None => {
                log::debug!("No layer '{}'", name);
                false
            }
        }
    }

    /// Change a layer's color. Unknown layers are ignored.
    pub fn set_layer_color(&mut self, name: &str, color: HexColor) -> bool {
        match self.layer_mut(name) {
            Some(layer) => {
                layer.color = color;
                true
            }
            None => false,
        }
    }

    /// Add a layer at the end, unless one with that name exists.
    pub fn add_layer(&mut self, layer: DataLayer) -> bool {
        if self.layer(&layer.name).is_some() {
            return false;
        }
        self.additional_data_layers.push(layer);
        true
    }

    // =========================================================================
    // Panel and window
    // =========================================================================

    /// Open or close the settings panel. Returns the new state.
    pub fn toggle_settings_panel(&mut self) -> bool {
        self.settings_panel_open = !self.settings_panel_open;
        self.settings_panel_open
    }

    /// Move the visible window.
    pub fn set_view_range(&mut self, start: u64, stop: u64) {
        self.view_range = ViewRange::new(start, stop);
    }
}
