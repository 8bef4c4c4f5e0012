//! Scenario tests over a small two-genome dataset.
//!
//! These exercise the color legend and the application message flow end to
//! end rather than one function at a time.

mod app_tests;
mod color_table_tests;

use serde_json::json;

use crate::model::GenomeData;

/// Two genomes: `g1` carries COG `B`/`E` and KEGG `09105` annotations plus a
/// 16S rRNA; `g2` has one unannotated gene.
pub(crate) fn two_genomes() -> GenomeData {
    let json = json!({
        "genomes": [
            ["g1", {
                "contigs": [{"name": "g1_c1", "length": 12000}],
                "genes": {
                    "0": {"contig": "g1_c1", "start": 100, "stop": 1600, "source": "Ribosomal_RNA_16S"},
                    "1": {"contig": "g1_c1", "start": 2000, "stop": 3200, "source": "prodigal",
                          "functions": {
                              "COG20_CATEGORY": {"accession": "B", "function": "Chromatin structure and dynamics"},
                              "KEGG_Class": {"accession": "09105", "function": "Amino acid metabolism"}
                          }},
                    "2": {"contig": "g1_c1", "start": 3500, "stop": 4100, "direction": "r", "source": "prodigal",
                          "functions": {"COG20_CATEGORY": {"accession": "E!!!B", "function": "Amino acids"}}}
                }
            }],
            ["g2", {
                "contigs": [{"name": "g2_c1", "length": 8000}],
                "genes": {
                    "7": {"contig": "g2_c1", "start": 0, "stop": 900, "source": "prodigal"}
                }
            }]
        ],
        "gene_associations": {}
    });
    GenomeData::from_json(&json.to_string()).expect("fixture dataset is valid")
}
