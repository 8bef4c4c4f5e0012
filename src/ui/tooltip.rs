//! Gene tooltip shown next to the pointer.

use genome_view_ui::{element, Element};

use crate::model::{GeneId, GenomeData, GenomeId};

/// Tooltip content and its position on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    /// Tooltip body
    pub html: String,
    /// Left edge, in page pixels
    pub x: i32,
    /// Top edge, in page pixels
    pub y: i32,
}

fn row(label: &str, value: impl Into<String>) -> Element {
    element("tr")
        .child(element("td").class("tooltip-key").text(label))
        .child(element("td").text(value))
}

/// Build the tooltip for a gene at `pointer`, shifted by `offset`.
/// Returns `None` when the genome or gene is not loaded.
pub fn gene_tooltip(
    data: &GenomeData,
    genome: &GenomeId,
    gene_id: GeneId,
    pointer: (i32, i32),
    offset: [i32; 2],
) -> Option<Tooltip> {
    let gene = data.gene(genome, gene_id)?;

    let call = element("table")
        .class("tooltip-gene-call")
        .child(row("Genome", genome.as_str()))
        .child(row("Gene call", gene_id.to_string()))
        .child(row("Source", gene.source.as_str()))
        .child(row("Contig", gene.contig.as_str()))
        .child(row("Start", gene.start.to_string()))
        .child(row("Stop", gene.stop.to_string()))
        .child(row("Length", gene.length().to_string()))
        .child(row("Direction", gene.direction.name()))
        .child(row("Partial", if gene.partial { "yes" } else { "no" }));

    let mut body = element("div").class("tooltip-body").child(call);

    if !gene.functions.is_empty() {
        let header = element("tr")
            .child(element("th").text("Source"))
            .child(element("th").text("Accession"))
            .child(element("th").text("Function"));
        let hits = gene.functions.iter().map(|(source, hit)| {
            element("tr")
                .child(element("td").text(source.as_str()))
                .child(element("td").text(hit.accession.as_str()))
                .child(element("td").text(hit.function.as_str()))
        });
        body = body.child(
            element("table")
                .class("tooltip-functions")
                .child(header)
                .children(hits),
        );
    }

    let groups = data.associations_for(genome, gene_id);
    if !groups.is_empty() {
        body = body.child(
            element("div")
                .class("tooltip-associations")
                .text(format!("Associated with: {}", groups.join(", "))),
        );
    }

    Some(Tooltip {
        html: body.render(),
        x: pointer.0 + offset[0],
        y: pointer.1 + offset[1],
    })
}
