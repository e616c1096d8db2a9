//! Section renderers
//!
//! Each renderer reads one collection from the [`SiteData`] snapshot and
//! appends structured elements under its insertion point. Order is fixed:
//! profile, projects, experience, publications.

pub mod dates;
pub mod experience;
pub mod profile;
pub mod projects;
pub mod publications;

pub use dates::{format_date_range, format_month_year};
pub use publications::featured_in_display_order;

use crate::dom::Document;
use crate::error::Result;
use crate::loader::SiteData;
use crate::skeleton::REQUIRED_ANCHORS;

/// Render every section. All insertion points are checked up front so a
/// missing one leaves the document untouched.
pub fn render_all(doc: &mut Document, data: &SiteData) -> Result<()> {
    for id in REQUIRED_ANCHORS {
        doc.require(id)?;
    }

    profile::render(doc, &data.profile)?;
    projects::render(doc, &data.projects)?;
    experience::render(doc, &data.experience)?;
    publications::render(doc, &data.publications)?;

    tracing::info!("Rendered all sections");
    Ok(())
}
