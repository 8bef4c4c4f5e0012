//! Loaded genome dataset: genomes, their genes and functional annotations.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// Identifier of a genome in the loaded dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenomeId(pub String);

impl GenomeId {
    /// Create a genome ID from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GenomeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GenomeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Gene caller ID, unique within one genome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneId(pub u32);

impl fmt::Display for GeneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strand of a gene call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Forward strand
    #[default]
    F,
    /// Reverse strand
    R,
}

impl Direction {
    /// Get the display name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Direction::F => "forward",
            Direction::R => "reverse",
        }
    }
}

/// One functional annotation hit for a gene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionHit {
    /// Accession (may hold several entries joined by `!!!`)
    pub accession: String,
    /// Human-readable function text
    #[serde(default)]
    pub function: String,
    /// E-value of the hit, if reported
    #[serde(default)]
    pub e_value: Option<f64>,
}

impl FunctionHit {
    /// Create a hit without an e-value.
    pub fn new(accession: &str, function: &str) -> Self {
        Self {
            accession: accession.to_string(),
            function: function.to_string(),
            e_value: None,
        }
    }

    /// First entry of a possibly multi-valued accession.
    pub fn primary_accession(&self) -> &str {
        self.accession
            .split(crate::constants::MULTI_VALUE_SEPARATOR)
            .next()
            .unwrap_or_default()
            .trim()
    }
}

/// A gene call with its functional annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gene {
    /// Contig the gene lies on
    pub contig: String,
    /// Start position (0-based, inclusive)
    pub start: u64,
    /// Stop position (exclusive)
    pub stop: u64,
    /// Strand
    #[serde(default)]
    pub direction: Direction,
    /// Whether the gene call is partial
    #[serde(default)]
    pub partial: bool,
    /// Gene caller or external source that produced this call
    #[serde(default)]
    pub source: String,
    /// Functional annotations keyed by annotation source (e.g. `COG20_CATEGORY`)
    #[serde(default)]
    pub functions: BTreeMap<String, FunctionHit>,
}

impl Gene {
    /// Create a gene on `contig` spanning `start..stop`.
    pub fn new(contig: &str, start: u64, stop: u64) -> Self {
        Self {
            contig: contig.to_string(),
            start,
            stop,
            direction: Direction::default(),
            partial: false,
            source: String::new(),
            functions: BTreeMap::new(),
        }
    }

    /// Builder: set the call source.
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = source.to_string();
        self
    }

    /// Builder: set the strand.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Builder: add a function hit under an annotation source.
    pub fn with_function(mut self, source: &str, hit: FunctionHit) -> Self {
        self.functions.insert(source.to_string(), hit);
        self
    }

    /// Length of the gene in nucleotides.
    pub fn length(&self) -> u64 {
        self.stop.saturating_sub(self.start)
    }
}

/// A contig of a genome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contig {
    /// Contig name
    pub name: String,
    /// Length in nucleotides
    pub length: u64,
}

/// Per-genome contig/gene data bundle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenomeRecord {
    /// Contigs in this genome
    #[serde(default)]
    pub contigs: Vec<Contig>,
    /// Gene calls keyed by gene ID
    #[serde(default)]
    pub genes: BTreeMap<GeneId, Gene>,
}

impl GenomeRecord {
    /// Look up a gene.
    pub fn gene(&self, id: GeneId) -> Option<&Gene> {
        self.genes.get(&id)
    }

    /// Total length of all contigs.
    pub fn total_length(&self) -> u64 {
        self.contigs.iter().map(|c| c.length).sum()
    }
}

/// The loaded dataset: an ordered genome collection plus gene associations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenomeData {
    /// Genomes in dataset order
    pub genomes: Vec<(GenomeId, GenomeRecord)>,
    /// Association group name -> member genes per genome
    #[serde(default)]
    pub gene_associations: BTreeMap<String, BTreeMap<GenomeId, Vec<GeneId>>>,
}

impl GenomeData {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: append a genome.
    pub fn with_genome(mut self, id: impl Into<String>, record: GenomeRecord) -> Self {
        self.genomes.push((GenomeId::new(id), record));
        self
    }

    /// Parse and validate a dataset from JSON.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let data: Self = serde_json::from_str(json)?;
        data.validate()?;
        log::debug!("Parsed dataset with {} genomes", data.genomes.len());
        Ok(data)
    }

    /// Read, parse and validate a dataset file.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let json = std::fs::read_to_string(path)?;
        let data = Self::from_json(&json)?;
        log::info!(
            "Loaded {} genomes ({} genes) from {:?}",
            data.genomes.len(),
            data.gene_count(),
            path
        );
        Ok(data)
    }

    /// Check structural invariants: unique genome IDs, genes with `start <= stop`.
    pub fn validate(&self) -> Result<(), DataError> {
        let mut seen = HashSet::new();
        for (id, record) in &self.genomes {
            if !seen.insert(id) {
                return Err(DataError::DuplicateGenome { id: id.to_string() });
            }
            for (gene_id, gene) in &record.genes {
                if gene.stop < gene.start {
                    return Err(DataError::InvalidGene {
                        genome: id.to_string(),
                        gene: gene_id.0,
                        message: format!("stop {} is before start {}", gene.stop, gene.start),
                    });
                }
            }
        }
        Ok(())
    }

    /// Look up a genome by ID.
    pub fn genome(&self, id: &GenomeId) -> Option<&GenomeRecord> {
        self.genomes
            .iter()
            .find(|(genome_id, _)| genome_id == id)
            .map(|(_, record)| record)
    }

    /// Look up a gene of a genome.
    pub fn gene(&self, genome: &GenomeId, gene: GeneId) -> Option<&Gene> {
        self.genome(genome)?.gene(gene)
    }

    /// Genome IDs in dataset order.
    pub fn genome_ids(&self) -> impl Iterator<Item = &GenomeId> {
        self.genomes.iter().map(|(id, _)| id)
    }

    /// Iterate over every gene of every genome.
    pub fn all_genes(&self) -> impl Iterator<Item = (&GenomeId, GeneId, &Gene)> {
        self.genomes.iter().flat_map(|(genome_id, record)| {
            record
                .genes
                .iter()
                .map(move |(gene_id, gene)| (genome_id, *gene_id, gene))
        })
    }

    /// Total number of genes across all genomes.
    pub fn gene_count(&self) -> usize {
        self.genomes.iter().map(|(_, r)| r.genes.len()).sum()
    }

    /// Names of the association groups a gene belongs to.
    pub fn associations_for(&self, genome: &GenomeId, gene: GeneId) -> Vec<&str> {
        self.gene_associations
            .iter()
            .filter(|(_, members)| {
                members
                    .get(genome)
                    .is_some_and(|genes| genes.contains(&gene))
            })
            .map(|(group, _)| group.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_json() -> String {
        json!({
            "genomes": [
                ["g1", {
                    "contigs": [{"name": "c1", "length": 5000}],
                    "genes": {
                        "0": {"contig": "c1", "start": 10, "stop": 400, "direction": "f", "source": "prodigal",
                              "functions": {"COG20_CATEGORY": {"accession": "E!!!G", "function": "Amino acids", "e_value": 1e-20}}},
                        "1": {"contig": "c1", "start": 500, "stop": 900, "direction": "r"}
                    }
                }],
                ["g2", {"genes": {}}]
            ],
            "gene_associations": {"GC_0001": {"g1": [0]}}
        })
        .to_string()
    }

    #[test]
    fn test_parse_dataset() {
        let data = GenomeData::from_json(&sample_json()).unwrap();
        assert_eq!(data.genomes.len(), 2);
        assert_eq!(data.gene_count(), 2);

        let g1 = GenomeId::new("g1");
        let gene = data.gene(&g1, GeneId(0)).unwrap();
        assert_eq!(gene.length(), 390);
        assert_eq!(gene.functions["COG20_CATEGORY"].primary_accession(), "E");
        assert_eq!(data.gene(&g1, GeneId(1)).unwrap().direction, Direction::R);
        assert_eq!(data.genome(&g1).unwrap().total_length(), 5000);
        assert!(data.gene(&GenomeId::new("g3"), GeneId(0)).is_none());
    }

    #[test]
    fn test_associations_for() {
        let data = GenomeData::from_json(&sample_json()).unwrap();
        let g1 = GenomeId::new("g1");
        assert_eq!(data.associations_for(&g1, GeneId(0)), vec!["GC_0001"]);
        assert!(data.associations_for(&g1, GeneId(1)).is_empty());
    }

    #[test]
    fn test_duplicate_genome_rejected() {
        let json = json!({"genomes": [["g1", {}], ["g1", {}]]}).to_string();
        let err = GenomeData::from_json(&json).unwrap_err();
        assert!(matches!(err, DataError::DuplicateGenome { ref id } if id == "g1"));
    }

    #[test]
    fn test_inverted_gene_rejected() {
        let json = json!({"genomes": [["g1", {"genes": {"3": {"contig": "c", "start": 50, "stop": 10}}}]]})
            .to_string();
        let err = GenomeData::from_json(&json).unwrap_err();
        assert!(matches!(err, DataError::InvalidGene { gene: 3, .. }));
    }

    #[test]
    fn test_all_genes_visits_every_genome() {
        let data = GenomeData::new()
            .with_genome("a", GenomeRecord::default())
            .with_genome("b", {
                let mut r = GenomeRecord::default();
                r.genes.insert(GeneId(7), Gene::new("c", 0, 10));
                r
            });
        let visited: Vec<_> = data
            .all_genes()
            .map(|(g, id, _)| (g.as_str().to_string(), id.0))
            .collect();
        assert_eq!(visited, vec![("b".to_string(), 7)]);
    }
}
