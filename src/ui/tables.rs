//! HTML rows for the genome, layer, color and bookmark lists.
//!
//! Rows carry their identifiers in `data-*` attributes so the page can send
//! typed messages back without parsing element IDs.

use genome_view_ui::{element, Element};

use crate::color_table::ColorTableRow;
use crate::model::{Bookmark, CategoryType, DataLayer, GenomeData, GenomeId};
use crate::state::DisplayState;

fn drag_handle() -> Element {
    element("td")
        .class("td-drag")
        .child(element("span").class("drag-icon").attr("title", "Drag to reorder").text("\u{2630}"))
}

fn checkbox(class: &str, checked: bool) -> Element {
    element("input")
        .attr("type", "checkbox")
        .class(class)
        .flag("checked", checked)
}

/// Row for one genome.
pub fn genome_row(id: &GenomeId, gene_count: usize, visible: bool) -> Element {
    element("tr")
        .attr("data-genome", id.as_str())
        .child(drag_handle())
        .child(element("td").class("genome-name").text(id.as_str()))
        .child(element("td").child(checkbox("genome-visible", visible)))
        .child(element("td").class("gene-count").text(gene_count.to_string()))
}

/// Genome table body in current display order.
pub fn genome_table(data: &GenomeData, display: &DisplayState) -> String {
    display
        .genome_order
        .iter()
        .filter_map(|id| {
            let Some(record) = data.genome(id) else {
                log::warn!("Genome '{}' is ordered but not loaded", id);
                return None;
            };
            Some(genome_row(id, record.genes.len(), display.is_genome_visible(id)).render())
        })
        .collect()
}

/// Row for one data layer.
pub fn layer_row(layer: &DataLayer) -> Element {
    element("tr")
        .attr("data-layer", layer.name.as_str())
        .child(drag_handle())
        .child(element("td").class("layer-name").text(layer.name.as_str()))
        .child(element("td").child(checkbox("layer-visible", layer.visible)))
        .child(
            element("td").child(
                element("div")
                    .class("colorpicker")
                    .attr("color", layer.color.as_str())
                    .style("background-color", layer.color.as_str()),
            ),
        )
}

/// Layer table body in current layer order.
pub fn layer_table(display: &DisplayState) -> String {
    display
        .additional_data_layers
        .iter()
        .map(|layer| layer_row(layer).render())
        .collect()
}

/// Row for one color legend entry. The swatch's background and its `color`
/// attribute both carry the row color.
pub fn color_row(row: &ColorTableRow) -> Element {
    let mut tr = element("tr").attr("data-key", row.key.as_str());
    if row.prepend {
        tr = tr.class("highlight-row");
    }
    tr.child(
        element("td").child(
            element("div")
                .class("colorpicker")
                .attr("color", row.color.as_str())
                .style("background-color", row.color.as_str()),
        ),
    )
    .child(element("td").class("category-label").text(row.label.as_str()))
}

/// Color legend body in row order.
pub fn color_table_rows(rows: &[ColorTableRow]) -> String {
    rows.iter().map(|row| color_row(row).render()).collect()
}

/// `<option>` list for the bookmark selector; values are bookmark indices.
pub fn bookmark_options(bookmarks: &[Bookmark]) -> String {
    let placeholder = element("option")
        .attr("value", "")
        .flag("selected", true)
        .text("Bookmarks");
    std::iter::once(placeholder)
        .chain(bookmarks.iter().enumerate().map(|(i, b)| {
            element("option")
                .attr("value", i.to_string())
                .attr("title", b.description.as_str())
                .text(format!("{} ({}..{})", b.name, b.start, b.stop))
        }))
        .map(|option| option.render())
        .collect()
}

/// `<option>` list for the category type selector.
pub fn category_type_options(selected: CategoryType) -> String {
    CategoryType::all()
        .iter()
        .map(|t| {
            element("option")
                .attr("value", t.name())
                .flag("selected", *t == selected)
                .text(t.name())
                .render()
        })
        .collect()
}
