use wasm_bindgen::prelude::*;

use crate::color_table::{ColorResolver, HighlightEntry};
use crate::config::AppConfig;
use crate::model::{CategoryType, GeneId, GenomeData, GenomeId, HexColor};
use crate::ui;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let level = AppConfig::load_from_local_storage()
        .map(|config| config.preferences.log_level)
        .unwrap_or_default();
    if let Some(level) = level.to_level_filter().to_level() {
        let _ = console_log::init_with_level(level);
    }
    web_sys::console::log_1(&"genome view WASM module loaded".into());
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_data(data_json: &str) -> Result<GenomeData, JsValue> {
    GenomeData::from_json(data_json).map_err(js_error)
}

/// Color legend rows for the page, using overrides and highlights saved in
/// localStorage. An unknown category type yields an empty legend.
#[wasm_bindgen]
pub fn color_table_html(
    data_json: &str,
    category_type: Option<String>,
    filter_to_observed: bool,
) -> Result<String, JsValue> {
    let data = parse_data(data_json)?;
    let config = AppConfig::load_from_local_storage().unwrap_or_default();
    let selected = category_type
        .as_deref()
        .and_then(|name| name.parse().ok())
        .unwrap_or_default();

    let rows = ColorResolver::new(&data).resolve_named(
        category_type.as_deref(),
        config.overrides_for(selected),
        Some(&config.highlight_genes),
        filter_to_observed,
    );
    Ok(ui::color_table_rows(&rows))
}

/// Tooltip body for a gene, or an empty string if the gene is not loaded.
#[wasm_bindgen]
pub fn gene_tooltip_html(data_json: &str, genome: &str, gene: u32) -> Result<String, JsValue> {
    let data = parse_data(data_json)?;
    let config = AppConfig::load_from_local_storage().unwrap_or_default();
    Ok(ui::gene_tooltip(
        &data,
        &GenomeId::new(genome),
        GeneId(gene),
        (0, 0),
        config.preferences.tooltip_offset,
    )
    .map(|tip| tip.html)
    .unwrap_or_default())
}

/// Remember a legend color picked on the page in localStorage.
#[wasm_bindgen]
pub fn save_category_color(category_type: &str, key: &str, color: &str) -> Result<(), JsValue> {
    let category_type: CategoryType = category_type.parse().map_err(js_error)?;
    let color = HexColor::parse(color).map_err(js_error)?;
    let mut config = AppConfig::load_from_local_storage().unwrap_or_default();
    if !config.set_override(category_type, key, color) {
        return Err(js_error(format!("'{}' is not a {} category", key, category_type)));
    }
    config.save_to_local_storage().map_err(js_error)
}

/// Remember a gene highlight in localStorage, replacing any earlier color
/// for the same gene.
#[wasm_bindgen]
pub fn save_gene_highlight(genome: &str, gene: u32, color: &str) -> Result<(), JsValue> {
    let color = HexColor::parse(color).map_err(js_error)?;
    let mut config = AppConfig::load_from_local_storage().unwrap_or_default();
    config.add_highlight(HighlightEntry::new(genome, gene, color));
    config.save_to_local_storage().map_err(js_error)
}
