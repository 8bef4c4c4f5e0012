//! Functional-annotation category types and their default color tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{COG_CATEGORY_SOURCES, KEGG_CLASS_SOURCE, NONE_CATEGORY};
use crate::error::CategoryTypeError;
use crate::model::{Gene, HexColor};

/// How genes are grouped for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum CategoryType {
    /// By gene call source (rRNA, tRNA, functional, none)
    #[default]
    Source,
    /// By COG functional category letter
    #[serde(rename = "COG")]
    Cog,
    /// By KEGG BRITE pathway class
    #[serde(rename = "KEGG")]
    Kegg,
}

impl CategoryType {
    /// Get the selector name for this category type.
    pub fn name(&self) -> &'static str {
        match self {
            CategoryType::Source => "Source",
            CategoryType::Cog => "COG",
            CategoryType::Kegg => "KEGG",
        }
    }

    /// Get all category types in selector order.
    pub fn all() -> &'static [CategoryType] {
        &[CategoryType::Source, CategoryType::Cog, CategoryType::Kegg]
    }

    /// Default category table for this type, in display order.
    pub fn defaults(&self) -> &'static [CategoryDef] {
        match self {
            CategoryType::Source => SOURCE_CATEGORIES,
            CategoryType::Cog => COG_CATEGORIES,
            CategoryType::Kegg => KEGG_CATEGORIES,
        }
    }

    /// Display label for a category key. Unknown keys are shown as-is.
    pub fn category_name<'a>(&self, key: &'a str) -> &'a str {
        self.defaults()
            .iter()
            .find(|def| def.key == key)
            .map(|def| def.name)
            .unwrap_or(key)
    }

    /// Category key of a gene under this type, if the gene carries one.
    pub fn category_for_gene(&self, gene: &Gene) -> Option<String> {
        match self {
            CategoryType::Source => Some(source_category(gene).to_string()),
            CategoryType::Cog => COG_CATEGORY_SOURCES
                .iter()
                .find_map(|source| gene.functions.get(*source))
                .and_then(|hit| hit.primary_accession().chars().next())
                .map(|letter| letter.to_string()),
            CategoryType::Kegg => gene
                .functions
                .get(KEGG_CLASS_SOURCE)
                .map(|hit| hit.primary_accession().to_string())
                .filter(|class| !class.is_empty()),
        }
    }
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CategoryType {
    type Err = CategoryTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryType::all()
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CategoryTypeError::Unknown(s.to_string()))
    }
}

fn source_category(gene: &Gene) -> &'static str {
    if gene.source.contains("Ribosomal_RNA") {
        "Ribosomal_RNAs"
    } else if gene.source.contains("Transfer_RNA") {
        "Transfer_RNAs"
    } else if !gene.functions.is_empty() {
        "Functional"
    } else {
        NONE_CATEGORY
    }
}

/// One entry of a default category table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDef {
    /// Category key as found in annotations
    pub key: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// Default color (`#rrggbb`)
    pub color: &'static str,
}

impl CategoryDef {
    const fn new(key: &'static str, name: &'static str, color: &'static str) -> Self {
        Self { key, name, color }
    }

    /// Default color as a [`HexColor`].
    pub fn hex_color(&self) -> HexColor {
        HexColor::parse(self.color).unwrap_or_else(|_| HexColor::from_rgb([128, 128, 128]))
    }
}

const SOURCE_CATEGORIES: &[CategoryDef] = &[
    CategoryDef::new("Ribosomal_RNAs", "Ribosomal RNAs", "#b22222"),
    CategoryDef::new("Transfer_RNAs", "Transfer RNAs", "#ff8c00"),
    CategoryDef::new("Functional", "Functional", "#1f77b4"),
    CategoryDef::new("None", "None", "#808080"),
];

const COG_CATEGORIES: &[CategoryDef] = &[
    CategoryDef::new("A", "RNA processing and modification", "#ff0000"),
    CategoryDef::new("B", "Chromatin structure and dynamics", "#ff6600"),
    CategoryDef::new("C", "Energy production and conversion", "#ffcc00"),
    CategoryDef::new("D", "Cell cycle control, cell division, chromosome partitioning", "#99cc00"),
    CategoryDef::new("E", "Amino acid transport and metabolism", "#339900"),
    CategoryDef::new("F", "Nucleotide transport and metabolism", "#006633"),
    CategoryDef::new("G", "Carbohydrate transport and metabolism", "#00cc99"),
    CategoryDef::new("H", "Coenzyme transport and metabolism", "#0099cc"),
    CategoryDef::new("I", "Lipid transport and metabolism", "#0066ff"),
    CategoryDef::new("J", "Translation, ribosomal structure and biogenesis", "#3300cc"),
    CategoryDef::new("K", "Transcription", "#6633ff"),
    CategoryDef::new("L", "Replication, recombination and repair", "#9900cc"),
    CategoryDef::new("M", "Cell wall/membrane/envelope biogenesis", "#cc00cc"),
    CategoryDef::new("N", "Cell motility", "#ff0099"),
    CategoryDef::new("O", "Post-translational modification, protein turnover, and chaperones", "#993366"),
    CategoryDef::new("P", "Inorganic ion transport and metabolism", "#cc6633"),
    CategoryDef::new("Q", "Secondary metabolites biosynthesis, transport, and catabolism", "#996600"),
    CategoryDef::new("R", "General function prediction only", "#999999"),
    CategoryDef::new("S", "Function unknown", "#666666"),
    CategoryDef::new("T", "Signal transduction mechanisms", "#cc3300"),
    CategoryDef::new("U", "Intracellular trafficking, secretion, and vesicular transport", "#66cccc"),
    CategoryDef::new("V", "Defense mechanisms", "#ff9999"),
    CategoryDef::new("W", "Extracellular structures", "#99ff99"),
    CategoryDef::new("X", "Mobilome: prophages, transposons", "#9999ff"),
    CategoryDef::new("Y", "Nuclear structure", "#ffcc99"),
    CategoryDef::new("Z", "Cytoskeleton", "#cccc66"),
    CategoryDef::new("None", "None", "#808080"),
];

const KEGG_CATEGORIES: &[CategoryDef] = &[
    CategoryDef::new("09101", "Carbohydrate metabolism", "#e6194b"),
    CategoryDef::new("09102", "Energy metabolism", "#3cb44b"),
    CategoryDef::new("09103", "Lipid metabolism", "#ffe119"),
    CategoryDef::new("09104", "Nucleotide metabolism", "#4363d8"),
    CategoryDef::new("09105", "Amino acid metabolism", "#f58231"),
    CategoryDef::new("09106", "Metabolism of other amino acids", "#911eb4"),
    CategoryDef::new("09107", "Glycan biosynthesis and metabolism", "#46f0f0"),
    CategoryDef::new("09108", "Metabolism of cofactors and vitamins", "#f032e6"),
    CategoryDef::new("09109", "Metabolism of terpenoids and polyketides", "#bcf60c"),
    CategoryDef::new("09110", "Biosynthesis of other secondary metabolites", "#fabebe"),
    CategoryDef::new("09111", "Xenobiotics biodegradation and metabolism", "#008080"),
    CategoryDef::new("09121", "Transcription", "#e6beff"),
    CategoryDef::new("09122", "Translation", "#9a6324"),
    CategoryDef::new("09123", "Folding, sorting and degradation", "#fffac8"),
    CategoryDef::new("09124", "Replication and repair", "#800000"),
    CategoryDef::new("09131", "Membrane transport", "#aaffc3"),
    CategoryDef::new("09132", "Signal transduction", "#808000"),
    CategoryDef::new("09141", "Transport and catabolism", "#ffd8b1"),
    CategoryDef::new("09142", "Cell motility", "#000075"),
    CategoryDef::new("09143", "Cell growth and death", "#a9a9a9"),
    CategoryDef::new("09145", "Cellular community - prokaryotes", "#469990"),
    CategoryDef::new("09181", "Protein families: metabolism", "#dcbeff"),
    CategoryDef::new("09182", "Protein families: genetic information processing", "#bfef45"),
    CategoryDef::new("09183", "Protein families: signaling and cellular processes", "#42d4f4"),
    CategoryDef::new("09191", "Unclassified: metabolism", "#c0c0c0"),
    CategoryDef::new("09192", "Unclassified: genetic information processing", "#b0b0b0"),
    CategoryDef::new("09193", "Unclassified: signaling and cellular processes", "#a0a0a0"),
    CategoryDef::new("09194", "Poorly characterized", "#909090"),
    CategoryDef::new("None", "None", "#808080"),
];
