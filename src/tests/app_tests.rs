//! Message flow through [`GenomeViewApp`].

use std::cell::RefCell;
use std::rc::Rc;

use super::two_genomes;
use crate::app::GenomeViewApp;
use crate::config::AppConfig;
use crate::message::{
    BookmarkMessage, ColorMessage, GenomeMessage, LayerMessage, Message, Notice, ViewMessage,
};
use crate::model::{CategoryType, GeneId, GenomeId, HexColor};

fn hex(s: &str) -> HexColor {
    HexColor::parse(s).unwrap()
}

fn app() -> GenomeViewApp {
    GenomeViewApp::new(two_genomes(), AppConfig::default())
}

#[test]
fn test_initial_state() {
    let app = app();
    let display = &app.state().display;

    assert_eq!(display.genome_order, vec![GenomeId::new("g1"), GenomeId::new("g2")]);
    assert_eq!((display.view_range.start, display.view_range.stop), (0, 12000));
    assert_eq!(display.category_type, CategoryType::Source);
    assert_eq!(app.color_table().len(), CategoryType::Source.defaults().len());
}

#[test]
fn test_redraw_observers_fire_once_per_change() {
    let mut app = app();
    let redraws = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&redraws);
    let id = app.on_redraw(move |display| {
        sink.borrow_mut().push(display.visible_genomes().count());
    });

    let outcome = app.update(Message::Genome(GenomeMessage::VisibilityChanged {
        genome: GenomeId::new("g2"),
        visible: false,
    }));
    assert!(outcome.redraw);
    assert_eq!(*redraws.borrow(), vec![1]);

    // unticking an already hidden genome changes nothing
    let outcome = app.update(Message::Genome(GenomeMessage::VisibilityChanged {
        genome: GenomeId::new("g2"),
        visible: false,
    }));
    assert!(!outcome.redraw);
    assert_eq!(redraws.borrow().len(), 1);

    // toggling the settings panel never redraws
    app.update(Message::View(ViewMessage::ToggleSettingsPanel));
    assert!(app.state().display.settings_panel_open);
    assert_eq!(redraws.borrow().len(), 1);

    assert!(app.remove_redraw_observer(id));
    app.update(Message::View(ViewMessage::RangeChanged { start: 10, stop: 20 }));
    assert_eq!(redraws.borrow().len(), 1);
}

#[test]
fn test_genome_reorder_changes_table_order() {
    let mut app = app();
    app.update(Message::Genome(GenomeMessage::Reordered(vec![
        GenomeId::new("g2"),
        GenomeId::new("g1"),
    ])));

    let html = app.genome_table_html();
    let g2 = html.find(r#"data-genome="g2""#).unwrap();
    let g1 = html.find(r#"data-genome="g1""#).unwrap();
    assert!(g2 < g1);
}

#[test]
fn test_layer_color_change() {
    let mut app = app();
    let outcome = app.update(Message::Layer(LayerMessage::ColorChanged {
        layer: "Coverage".to_string(),
        color: hex("#123456"),
    }));
    assert!(outcome.redraw);
    assert_eq!(
        app.state().display.layer("Coverage").map(|l| l.color.clone()),
        Some(hex("#123456"))
    );
    assert!(app.layer_table_html().contains("#123456"));
}

#[test]
fn test_category_switch_rebuilds_legend_and_drops_observers() {
    let mut app = app();
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    app.on_color_change(move |_| *counter.borrow_mut() += 1);

    let outcome = app.update(Message::Color(ColorMessage::CategoryTypeChanged(CategoryType::Cog)));
    assert!(outcome.redraw);
    assert_eq!(app.state().display.category_type, CategoryType::Cog);
    assert_eq!(app.color_table().category_type(), CategoryType::Cog);
    assert_eq!(app.color_table().len(), 2);
    assert_eq!(app.color_table().observer_count(), 0);

    let outcome = app.update(Message::Color(ColorMessage::RowColorChanged {
        key: "E".to_string(),
        color: hex("#000000"),
    }));
    assert!(outcome.redraw);
    assert_eq!(*calls.borrow(), 0);
    assert!(app.color_table_html().contains("#000000"));
}

#[test]
fn test_highlight_gene_adds_leading_row() {
    let mut app = app();
    app.update(Message::Color(ColorMessage::CategoryTypeChanged(CategoryType::Kegg)));

    assert!(app.highlight_gene(GenomeId::new("g2"), GeneId(7), hex("#ff0000")));
    assert!(!app.highlight_gene(GenomeId::new("g2"), GeneId(8), hex("#ff0000")));
    // highlighting again replaces the earlier request
    assert!(app.highlight_gene(GenomeId::new("g2"), GeneId(7), hex("#00ff00")));

    let rows = app.color_table().rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].key, "g2-7");
    assert_eq!(rows[0].color, hex("#00ff00"));
    assert_eq!(rows[1].key, "09105");
    assert_eq!(app.config().highlight_genes.len(), 1);
}

#[test]
fn test_remembered_colors_survive_category_switch() {
    let mut app = app();
    app.update(Message::Color(ColorMessage::CategoryTypeChanged(CategoryType::Cog)));
    app.update(Message::Color(ColorMessage::RowColorChanged {
        key: "B".to_string(),
        color: hex("#0000ff"),
    }));
    app.remember_colors();

    app.update(Message::Color(ColorMessage::CategoryTypeChanged(CategoryType::Source)));
    app.update(Message::Color(ColorMessage::CategoryTypeChanged(CategoryType::Cog)));
    assert_eq!(app.color_table().color_for_key("B"), Some(&hex("#0000ff")));
}

#[test]
fn test_bookmark_round_trip() {
    let mut app = app();
    app.update(Message::View(ViewMessage::RangeChanged { start: 2000, stop: 3200 }));

    let outcome = app.update(Message::Bookmark(BookmarkMessage::Create {
        name: "  gene 1  ".to_string(),
        description: "COG B".to_string(),
    }));
    assert_eq!(
        outcome.notice,
        Some(Notice::Info("Bookmark 'gene 1' successfully created".to_string()))
    );
    assert!(app.bookmark_options_html().contains("gene 1"));

    app.update(Message::View(ViewMessage::RangeChanged { start: 0, stop: 100 }));
    assert!(app.update(Message::Bookmark(BookmarkMessage::Selected(0))).redraw);
    let range = app.state().display.view_range;
    assert_eq!((range.start, range.stop), (2000, 3200));
}

#[test]
fn test_tooltip_uses_configured_offset() {
    let mut config = AppConfig::default();
    config.preferences.tooltip_offset = [4, -6];
    let app = GenomeViewApp::new(two_genomes(), config);

    let tip = app
        .gene_tooltip(&GenomeId::new("g1"), GeneId(1), (100, 50))
        .unwrap();
    assert_eq!((tip.x, tip.y), (104, 44));
    assert!(tip.html.contains("Chromatin structure and dynamics"));
    assert!(app.gene_tooltip(&GenomeId::new("g1"), GeneId(42), (0, 0)).is_none());
}

#[test]
fn test_highlight_keeps_picked_colors() {
    let mut app = app();
    app.update(Message::Color(ColorMessage::CategoryTypeChanged(CategoryType::Cog)));
    app.update(Message::Color(ColorMessage::RowColorChanged {
        key: "B".to_string(),
        color: hex("#0000ff"),
    }));

    let redraws = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&redraws);
    app.on_redraw(move |_| *counter.borrow_mut() += 1);

    assert!(app.highlight_gene(GenomeId::new("g1"), GeneId(1), hex("#ff0000")));
    assert_eq!(*redraws.borrow(), 1);
    assert_eq!(app.color_table().color_for_key("B"), Some(&hex("#0000ff")));
    assert_eq!(app.color_table().color_for_key("g1-1"), Some(&hex("#ff0000")));
    // picked colors stay out of the config until remembered
    assert!(app.config().overrides_for(CategoryType::Cog).is_none());
}

#[test]
fn test_saved_config_restores_colors_and_highlights() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(AppConfig::default_filename());

    let mut app = app();
    app.update(Message::Color(ColorMessage::CategoryTypeChanged(CategoryType::Cog)));
    app.update(Message::Color(ColorMessage::RowColorChanged {
        key: "E".to_string(),
        color: hex("#000000"),
    }));
    app.remember_colors();
    assert!(app.highlight_gene(GenomeId::new("g2"), GeneId(7), hex("#00ff00")));
    app.save_config(Some(path.as_path())).unwrap();

    let mut reopened = GenomeViewApp::new(two_genomes(), AppConfig::load(&path).unwrap());
    reopened.update(Message::Color(ColorMessage::CategoryTypeChanged(CategoryType::Cog)));
    let rows = reopened.color_table().rows();
    assert_eq!(rows[0].key, "g2-7");
    assert_eq!(rows[0].color, hex("#00ff00"));
    assert_eq!(reopened.color_table().color_for_key("E"), Some(&hex("#000000")));
}
