//! Publication list
//!
//! Only featured publications are shown, oldest first. Ties keep their
//! relative order from the source file.

use crate::dom::{Document, El};
use crate::error::Result;
use crate::model::Publication;
use crate::skeleton::{classes, ids};

/// Featured publications sorted ascending by year (stable).
pub fn featured_in_display_order(publications: &[Publication]) -> Vec<&Publication> {
    let mut featured: Vec<&Publication> = publications.iter().filter(|p| p.featured).collect();
    featured.sort_by_key(|p| p.year);
    featured
}

fn link_row(publication: &Publication) -> Option<El> {
    let mut links = Vec::new();
    if let Some(pdf) = publication.pdf_url() {
        links.push(
            El::new("a")
                .class("publication-link")
                .external_link(pdf)
                .child(El::new("i").class("fas fa-file-pdf"))
                .text(" PDF"),
        );
    }
    if let Some(doi) = publication.doi_url() {
        links.push(
            El::new("a")
                .class("publication-link")
                .external_link(doi)
                .child(El::new("i").class("fas fa-external-link-alt"))
                .text(" DOI"),
        );
    }

    if links.is_empty() {
        None
    } else {
        Some(El::new("div").class("publication-links").children(links))
    }
}

fn publication_item(publication: &Publication) -> El {
    let authors = format!("{} ({}).", publication.authors.join(", "), publication.year);

    let title = match publication.doi_url() {
        Some(doi) => El::new("h3")
            .class("publication-title")
            .child(El::new("a").external_link(doi).text(&publication.title)),
        None => El::new("h3").class("publication-title").text(&publication.title),
    };

    El::new("div")
        .class(classes::PUBLICATION_ITEM)
        .attr("data-type", &publication.kind)
        .child(El::new("div").class("publication-authors").text(&authors))
        .child(title)
        .child(
            El::new("div")
                .class("publication-venue")
                .text(&format!("{}.", publication.venue)),
        )
        .child_if(link_row(publication))
}

pub fn render(doc: &mut Document, publications: &[Publication]) -> Result<()> {
    let list = doc.require(ids::PUBLICATIONS_LIST)?;
    let featured = featured_in_display_order(publications);
    for publication in &featured {
        doc.append(list, publication_item(publication));
    }
    tracing::debug!(
        "Rendered {} of {} publications (featured only)",
        featured.len(),
        publications.len()
    );
    Ok(())
}
