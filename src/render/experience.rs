//! Experience timeline
//!
//! Jobs are appended in the order they appear in `experience.json`; no
//! sorting happens here. The data file is expected to list jobs newest-first.

use crate::dom::{Document, El};
use crate::error::Result;
use crate::model::Experience;
use crate::render::dates::format_date_range;
use crate::skeleton::{classes, ids};

fn timeline_item(job: &Experience) -> El {
    let date_range = format_date_range(&job.start_date, job.end_date.as_deref(), job.current);

    El::new("div")
        .class(classes::TIMELINE_ITEM)
        .child(
            El::new("div")
                .class("timeline-header")
                .child(
                    El::new("div")
                        .child(El::new("div").class("timeline-title").text(&job.title))
                        .child(El::new("div").class("timeline-company").text(&job.company)),
                )
                .child(El::new("div").class("timeline-date").text(&date_range)),
        )
        .child(
            El::new("div").class("timeline-description").child(
                El::new("ul").children(job.description.iter().map(|d| El::new("li").text(d))),
            ),
        )
}

pub fn render(doc: &mut Document, jobs: &[Experience]) -> Result<()> {
    let timeline = doc.require(ids::EXPERIENCE_TIMELINE)?;
    for job in jobs {
        doc.append(timeline, timeline_item(job));
    }
    tracing::debug!("Rendered {} timeline items", jobs.len());
    Ok(())
}
