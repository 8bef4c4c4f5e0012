//! Genome view application: dataset, view state and message dispatch.

use genome_view_ui::{Observers, SubscriptionId};

use crate::color_table::{ColorChange, ColorResolver, ColorTable, HighlightEntry};
use crate::config::AppConfig;
#[cfg(not(target_arch = "wasm32"))]
use crate::config::ConfigError;
use crate::handlers;
use crate::message::{Message, Outcome};
use crate::model::{GeneId, GenomeData, GenomeId, HexColor};
use crate::state::{DisplayState, ViewState};
use crate::ui::{self, Tooltip};

/// One genome view.
///
/// The dataset is read-only after construction; all mutation goes through
/// [`GenomeViewApp::update`], which hands each handler only the state it needs
/// and then requests at most one redraw.
#[derive(Debug)]
pub struct GenomeViewApp {
    data: GenomeData,
    state: ViewState,
    config: AppConfig,
    color_table: ColorTable,
    on_redraw: Observers<DisplayState>,
}

impl GenomeViewApp {
    /// Open a dataset with the given configuration.
    pub fn new(data: GenomeData, config: AppConfig) -> Self {
        let mut state = ViewState::for_data(&data);
        let category_type = config.preferences.default_category_type;
        state.display.category_type = category_type;

        let color_table = ColorTable::resolve(
            &data,
            category_type,
            config.overrides_for(category_type),
            Some(&config.highlight_genes),
            config.preferences.filter_to_observed,
        );

        log::info!(
            "Opened view of {} genomes, {} color rows",
            data.genomes.len(),
            color_table.len()
        );

        Self {
            data,
            state,
            config,
            color_table,
            on_redraw: Observers::new(),
        }
    }

    /// Loaded dataset.
    pub fn data(&self) -> &GenomeData {
        &self.data
    }

    /// Current view state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Active configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Current color legend.
    pub fn color_table(&self) -> &ColorTable {
        &self.color_table
    }

    /// Register a redraw observer; it receives the display state to draw.
    pub fn on_redraw<F>(&mut self, f: F) -> SubscriptionId
    where
        F: Fn(&DisplayState) + 'static,
    {
        self.on_redraw.subscribe(f)
    }

    /// Remove a redraw observer.
    pub fn remove_redraw_observer(&mut self, id: SubscriptionId) -> bool {
        self.on_redraw.unsubscribe(id)
    }

    /// Register an observer for color changes on the current legend rows.
    /// It is dropped when the legend is rebuilt.
    pub fn on_color_change<F>(&mut self, f: F) -> SubscriptionId
    where
        F: Fn(&ColorChange) + 'static,
    {
        self.color_table.on_color_change(f)
    }

    /// Process a message.
    pub fn update(&mut self, message: Message) -> Outcome {
        let display = &mut self.state.display;
        let outcome = match message {
            Message::Genome(msg) => handlers::handle_genome(msg, display),
            Message::Layer(msg) => handlers::handle_layer(msg, display),
            Message::Bookmark(msg) => handlers::handle_bookmark(msg, display),
            Message::Color(msg) => handlers::handle_color(
                msg,
                &self.data,
                &self.config,
                display,
                &mut self.color_table,
            ),
            Message::View(msg) => handlers::handle_view(msg, display),
        };

        if outcome.redraw {
            self.on_redraw.notify(&self.state.display);
        }
        outcome
    }

    /// Highlight a gene with its own color and rebuild the legend.
    /// Colors picked on the current legend are kept. Returns `false` if the
    /// gene is not loaded.
    pub fn highlight_gene(&mut self, genome: GenomeId, gene: GeneId, color: HexColor) -> bool {
        if self.data.gene(&genome, gene).is_none() {
            log::debug!("Cannot highlight gene {} of '{}': not loaded", gene, genome);
            return false;
        }
        self.config.add_highlight(HighlightEntry {
            genome_id: genome,
            gene_id: gene,
            color,
        });

        let category_type = self.color_table.category_type();
        let mut overrides = self
            .config
            .overrides_for(category_type)
            .cloned()
            .unwrap_or_default();
        overrides.extend(self.color_table.overrides());

        let rows = ColorResolver::new(&self.data).resolve(
            category_type,
            Some(&overrides),
            Some(&self.config.highlight_genes),
            self.config.preferences.filter_to_observed,
        );
        self.color_table.replace_rows(category_type, rows);
        self.on_redraw.notify(&self.state.display);
        true
    }

    /// Store the current legend colors as overrides for its category type.
    pub fn remember_colors(&mut self) {
        let category_type = self.color_table.category_type();
        self.config
            .color_overrides
            .insert(category_type, self.color_table.overrides());
    }

    /// Write the configuration, including remembered colors and highlights,
    /// to `path` or to the default config location.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_config(&self, path: Option<&std::path::Path>) -> Result<(), ConfigError> {
        match path {
            Some(path) => self.config.save(path),
            None => self.config.save_to_default_path(),
        }
    }

    /// Genome table body.
    pub fn genome_table_html(&self) -> String {
        ui::genome_table(&self.data, &self.state.display)
    }

    /// Layer table body.
    pub fn layer_table_html(&self) -> String {
        ui::layer_table(&self.state.display)
    }

    /// Color legend body.
    pub fn color_table_html(&self) -> String {
        ui::color_table_rows(self.color_table.rows())
    }

    /// Bookmark selector options.
    pub fn bookmark_options_html(&self) -> String {
        ui::bookmark_options(&self.state.display.bookmarks)
    }

    /// Tooltip for a gene under the pointer.
    pub fn gene_tooltip(&self, genome: &GenomeId, gene: GeneId, pointer: (i32, i32)) -> Option<Tooltip> {
        ui::gene_tooltip(
            &self.data,
            genome,
            gene,
            pointer,
            self.config.preferences.tooltip_offset,
        )
    }
}
