//! Project cards, in source order.

use crate::dom::{Document, El};
use crate::error::Result;
use crate::model::Project;
use crate::skeleton::{classes, ids};

fn project_card(project: &Project) -> El {
    El::new("a")
        .class(classes::PROJECT_CARD)
        .external_link(&project.external_link)
        .child(
            El::new("img")
                .attr("src", &project.image)
                .attr("alt", &project.title)
                .class("project-image"),
        )
        .child(
            El::new("div")
                .class("project-content")
                .child(El::new("h3").class("project-title").text(&project.title))
                .child(El::new("p").class("project-description").text(&project.summary))
                .child(
                    El::new("div").class("project-tags").children(
                        project
                            .tags
                            .iter()
                            .map(|tag| El::new("span").class("project-tag").text(tag)),
                    ),
                ),
        )
}

pub fn render(doc: &mut Document, projects: &[Project]) -> Result<()> {
    let grid = doc.require(ids::PROJECTS_GRID)?;
    for project in projects {
        doc.append(grid, project_card(project));
    }
    tracing::debug!("Rendered {} project cards", projects.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::fixtures::site_data;
    use crate::skeleton::standard_skeleton;

    #[test]
    fn test_card_links_out_in_new_context() {
        let mut doc = standard_skeleton();
        render(&mut doc, &site_data().projects).unwrap();

        let cards = doc.elements_with_class(classes::PROJECT_CARD);
        assert_eq!(cards.len(), 1);
        assert_eq!(doc.tag(cards[0]), Some("a"));
        assert_eq!(doc.attr(cards[0], "href"), Some("https://example.com/bernoulli"));
        assert_eq!(doc.attr(cards[0], "target"), Some("_blank"));

        let image = doc.first_with_class("project-image").unwrap();
        assert_eq!(doc.attr(image, "alt"), Some("Bernoulli"));

        let tags: Vec<String> = doc
            .elements_with_class("project-tag")
            .into_iter()
            .map(|n| doc.text_content(n))
            .collect();
        assert_eq!(tags, vec!["math", "engine"]);
    }

    #[test]
    fn test_hostile_title_cannot_break_attribute() {
        let mut doc = standard_skeleton();
        let project = Project {
            title: r#"x" onerror="alert(1)"#.into(),
            summary: "s".into(),
            image: "i.png".into(),
            external_link: "https://example.com".into(),
            tags: vec![],
        };
        render(&mut doc, &[project]).unwrap();

        let image = doc.first_with_class("project-image").unwrap();
        assert!(doc.outer_html(image).contains(r#"alt="x&quot; onerror=&quot;alert(1)""#));
    }
}
