//! Tests for color legend resolution and color-change notifications.

use std::cell::RefCell;
use std::rc::Rc;

use super::two_genomes;
use crate::color_table::{ColorOverrides, ColorResolver, ColorTable, HighlightEntry};
use crate::model::{CategoryType, GeneId, GenomeId, HexColor};

fn hex(s: &str) -> HexColor {
    HexColor::parse(s).unwrap()
}

fn keys(rows: &[crate::color_table::ColorTableRow]) -> Vec<&str> {
    rows.iter().map(|r| r.key.as_str()).collect()
}

#[test]
fn test_source_is_never_filtered() {
    let data = two_genomes();
    let resolver = ColorResolver::new(&data);
    let filtered = resolver.resolve(CategoryType::Source, None, None, true);
    let unfiltered = resolver.resolve(CategoryType::Source, None, None, false);

    assert_eq!(filtered, unfiltered);
    assert_eq!(
        keys(&filtered),
        vec!["Ribosomal_RNAs", "Transfer_RNAs", "Functional", "None"]
    );
}

#[test]
fn test_filter_keeps_only_observed_categories() {
    let data = two_genomes();
    let resolver = ColorResolver::new(&data);

    // gene 2 is "E!!!B": only its first entry counts; genes without a COG
    // or KEGG category add nothing
    let cog = resolver.resolve(CategoryType::Cog, None, None, true);
    assert_eq!(keys(&cog), vec!["B", "E"]);

    let kegg = resolver.resolve(CategoryType::Kegg, None, None, true);
    assert_eq!(keys(&kegg), vec!["09105"]);
    assert_eq!(kegg[0].label, "Amino acid metabolism");

    let observed = resolver.observed_categories(CategoryType::Cog);
    for row in &cog {
        assert!(observed.contains(&row.key));
    }
}

#[test]
fn test_unfiltered_lists_whole_default_table_in_order() {
    let data = two_genomes();
    let rows = ColorResolver::new(&data).resolve(CategoryType::Cog, None, None, false);
    let expected: Vec<&str> = CategoryType::Cog.defaults().iter().map(|d| d.key).collect();
    assert_eq!(keys(&rows), expected);
    assert!(rows.iter().all(|r| !r.prepend));
}

#[test]
fn test_overrides_recolor_but_never_add() {
    let data = two_genomes();
    let mut overrides = ColorOverrides::new();
    overrides.insert("B".to_string(), hex("#333"));
    overrides.insert("Z".to_string(), hex("#999"));
    overrides.insert("not-a-cog".to_string(), hex("#999"));

    let rows = ColorResolver::new(&data).resolve(CategoryType::Cog, Some(&overrides), None, true);
    assert_eq!(keys(&rows), vec!["B", "E"]);
    assert_eq!(rows[0].color, hex("#333"));
    assert_eq!(rows[1].color.as_str(), "#339900");

    // unfiltered, Z exists in the defaults and takes its override
    let all = ColorResolver::new(&data).resolve(CategoryType::Cog, Some(&overrides), None, false);
    assert!(all.iter().all(|r| r.key != "not-a-cog"));
    let z = all.iter().find(|r| r.key == "Z").unwrap();
    assert_eq!(z.color, hex("#999"));
}

#[test]
fn test_highlights_lead_in_request_order() {
    let data = two_genomes();
    let highlights = vec![
        HighlightEntry::new("g2", 7, hex("#00F")),
        HighlightEntry::new("g1", 1, hex("#F00")),
    ];
    let rows = ColorResolver::new(&data).resolve(CategoryType::Kegg, None, Some(&highlights), true);

    assert_eq!(keys(&rows), vec!["g2-7", "g1-1", "09105"]);
    assert_eq!(rows[0].label, "Genome: g2, Gene: 7");
    assert!(rows[0].prepend && rows[1].prepend && !rows[2].prepend);
    assert_eq!(rows[1].color, hex("#F00"));
}

#[test]
fn test_highlights_for_missing_genes_are_skipped() {
    let data = two_genomes();
    let highlights = vec![
        HighlightEntry::new("g1", 5, hex("#F00")),
        HighlightEntry::new("nowhere", 1, hex("#F00")),
        HighlightEntry::new("g1", 2, hex("#0F0")),
    ];
    let rows = ColorResolver::new(&data).resolve(CategoryType::Source, None, Some(&highlights), true);

    let highlighted: Vec<_> = rows.iter().filter(|r| r.prepend).collect();
    assert_eq!(highlighted.len(), 1);
    assert_eq!(highlighted[0].key, "g1-2");
    assert_eq!(rows.len(), 1 + CategoryType::Source.defaults().len());
}

#[test]
fn test_repeated_highlight_keeps_last_request() {
    let data = two_genomes();
    let highlights = vec![
        HighlightEntry::new("g1", 1, hex("#F00")),
        HighlightEntry::new("g2", 7, hex("#00F")),
        HighlightEntry::new("g1", 1, hex("#0F0")),
    ];
    let rows = ColorResolver::new(&data).resolve(CategoryType::Kegg, None, Some(&highlights), true);

    assert_eq!(keys(&rows), vec!["g2-7", "g1-1", "09105"]);
    assert_eq!(rows[1].color, hex("#0F0"));
}

#[test]
fn test_resolve_named() {
    let data = two_genomes();
    let resolver = ColorResolver::new(&data);

    assert!(resolver.resolve_named(Some("Pfam"), None, None, true).is_empty());
    assert_eq!(
        resolver.resolve_named(None, None, None, true),
        resolver.resolve(CategoryType::Source, None, None, true)
    );
    assert_eq!(keys(&resolver.resolve_named(Some("kegg"), None, None, true)), vec!["09105"]);
}

#[test]
fn test_set_color_notifies_observers() {
    let data = two_genomes();
    let mut table = ColorTable::resolve(&data, CategoryType::Cog, None, None, true);
    let seen = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    table.on_color_change(move |change| sink.borrow_mut().push(change.clone()));

    assert!(table.set_color("E", hex("#abcdef")));
    assert_eq!(table.color_for_key("E"), Some(&hex("#abcdef")));
    assert!(!table.set_color("Q", hex("#000")));

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].key, "E");
    assert_eq!(seen[0].color, hex("#abcdef"));
}

#[test]
fn test_rebuild_drops_stale_observers() {
    let data = two_genomes();
    let mut table = ColorTable::resolve(&data, CategoryType::Cog, None, None, true);
    let calls = Rc::new(RefCell::new(0));

    let counter = Rc::clone(&calls);
    let kept = table.on_color_change(move |_| *counter.borrow_mut() += 1);
    let counter = Rc::clone(&calls);
    let removed = table.on_color_change(move |_| *counter.borrow_mut() += 10);
    assert!(table.unsubscribe(removed));

    table.set_color("B", hex("#111"));
    assert_eq!(*calls.borrow(), 1);

    let rows = ColorResolver::new(&data).resolve(CategoryType::Kegg, None, None, true);
    table.replace_rows(CategoryType::Kegg, rows);
    assert_eq!(table.observer_count(), 0);
    assert!(!table.unsubscribe(kept));

    table.set_color("09105", hex("#222"));
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn test_color_for_gene() {
    let data = two_genomes();
    let g1 = GenomeId::new("g1");
    let g2 = GenomeId::new("g2");
    let highlights = vec![HighlightEntry::new("g1", 2, hex("#F00"))];

    let table = ColorTable::resolve(&data, CategoryType::Cog, None, Some(&highlights), false);
    assert_eq!(table.color_for_gene(&data, &g1, GeneId(2)), Some(&hex("#F00")));
    assert_eq!(
        table.color_for_gene(&data, &g1, GeneId(1)).map(|c| c.as_str()),
        Some("#ff6600")
    );
    // unannotated genes fall back to the None row
    assert_eq!(
        table.color_for_gene(&data, &g2, GeneId(7)).map(|c| c.as_str()),
        Some("#808080")
    );
    assert_eq!(table.color_for_gene(&data, &g2, GeneId(99)), None);

    // a filtered legend keeps only observed categories, so there is no
    // None row to fall back to
    let filtered = ColorTable::resolve(&data, CategoryType::Kegg, None, None, true);
    assert!(filtered.color_for_key("None").is_none());
    assert_eq!(filtered.color_for_gene(&data, &g2, GeneId(7)), None);
    assert_eq!(
        filtered.color_for_gene(&data, &g1, GeneId(1)).map(|c| c.as_str()),
        Some("#f58231")
    );

    let source = ColorTable::resolve(&data, CategoryType::Source, None, None, true);
    assert_eq!(
        source.color_for_gene(&data, &g1, GeneId(0)).map(|c| c.as_str()),
        Some("#b22222")
    );
}

#[test]
fn test_overrides_export_skips_highlights() {
    let data = two_genomes();
    let highlights = vec![HighlightEntry::new("g1", 1, hex("#F00"))];
    let mut table = ColorTable::resolve(&data, CategoryType::Cog, None, Some(&highlights), true);
    table.set_color("B", hex("#010203"));

    let exported = table.overrides();
    assert_eq!(exported.len(), 2);
    assert_eq!(exported["B"], hex("#010203"));
    assert!(!exported.contains_key("g1-1"));
}
