//! Message handlers for the genome view.
//!
//! Each handler processes one category of messages and receives only the
//! parts of the application state it is allowed to touch.

use crate::color_table::{ColorResolver, ColorTable};
use crate::config::AppConfig;
use crate::message::{
    BookmarkMessage, ColorMessage, GenomeMessage, LayerMessage, Notice, Outcome, ViewMessage,
};
use crate::model::GenomeData;
use crate::state::DisplayState;

/// Handle genome table messages.
pub fn handle_genome(msg: GenomeMessage, display: &mut DisplayState) -> Outcome {
    match msg {
        GenomeMessage::Reordered(order) => Outcome::redraw_if(display.reorder_genomes(&order)),
        GenomeMessage::VisibilityChanged { genome, visible } => {
            log::debug!("Genome '{}' visible: {}", genome, visible);
            Outcome::redraw_if(display.set_genome_visible(&genome, visible))
        }
    }
}

/// Handle layer table messages.
pub fn handle_layer(msg: LayerMessage, display: &mut DisplayState) -> Outcome {
    match msg {
        LayerMessage::Reordered(order) => Outcome::redraw_if(display.reorder_layers(&order)),
        LayerMessage::VisibilityChanged { layer, visible } => {
            log::debug!("Layer '{}' visible: {}", layer, visible);
            Outcome::redraw_if(display.set_layer_visible(&layer, visible))
        }
        LayerMessage::ColorChanged { layer, color } => {
            Outcome::redraw_if(display.set_layer_color(&layer, color))
        }
    }
}

/// Handle bookmark messages. Failures come back as an error notice.
pub fn handle_bookmark(msg: BookmarkMessage, display: &mut DisplayState) -> Outcome {
    match msg {
        BookmarkMessage::Create { name, description } => {
            match display.create_bookmark(&name, &description) {
                Ok(bookmark) => Outcome::none().with_notice(Notice::Info(format!(
                    "Bookmark '{}' successfully created",
                    bookmark.name
                ))),
                Err(e) => {
                    log::warn!("Bookmark not created: {}", e);
                    Outcome::none().with_notice(Notice::Error(e.to_string()))
                }
            }
        }
        BookmarkMessage::Selected(index) => match display.select_bookmark(index) {
            Ok(_) => Outcome::redraw(),
            Err(e) => {
                log::warn!("{}", e);
                Outcome::none()
            }
        },
        BookmarkMessage::Remove(index) => match display.remove_bookmark(index) {
            Ok(_) => Outcome::none(),
            Err(e) => Outcome::none().with_notice(Notice::Error(e.to_string())),
        },
    }
}

/// Handle color legend messages.
///
/// Switching category type rebuilds the table, which drops the observers
/// bound to the previous rows.
pub fn handle_color(
    msg: ColorMessage,
    data: &GenomeData,
    config: &AppConfig,
    display: &mut DisplayState,
    table: &mut ColorTable,
) -> Outcome {
    match msg {
        ColorMessage::CategoryTypeChanged(category_type) => {
            log::info!("🎨 Coloring genes by {}", category_type);
            display.category_type = category_type;
            let rows = ColorResolver::new(data).resolve(
                category_type,
                config.overrides_for(category_type),
                Some(&config.highlight_genes),
                config.preferences.filter_to_observed,
            );
            table.replace_rows(category_type, rows);
            Outcome::redraw()
        }
        ColorMessage::RowColorChanged { key, color } => {
            Outcome::redraw_if(table.set_color(&key, color))
        }
    }
}

/// Handle navigation and panel messages.
pub fn handle_view(msg: ViewMessage, display: &mut DisplayState) -> Outcome {
    match msg {
        ViewMessage::ToggleSettingsPanel => {
            let open = display.toggle_settings_panel();
            log::debug!("Settings panel open: {}", open);
            Outcome::none()
        }
        ViewMessage::RangeChanged { start, stop } => {
            display.set_view_range(start, stop);
            Outcome::redraw()
        }
    }
}
