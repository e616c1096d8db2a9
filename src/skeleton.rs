//! Page skeleton
//!
//! Identifiers of the insertion points the renderers write into, plus a
//! builder for the standard skeleton page that carries all of them.

use crate::dom::{Document, El};

pub mod ids {
    pub const PROFILE_NAME: &str = "profile-name";
    pub const PROFILE_ROLE: &str = "profile-role";
    pub const PROFILE_ORG: &str = "profile-org";
    pub const PROFILE_AVATAR: &str = "profile-avatar";
    pub const PROFILE_LINKS: &str = "profile-links";
    pub const ABOUT_BIO: &str = "about-bio";
    pub const ABOUT_INTERESTS: &str = "about-interests";
    pub const ABOUT_EDUCATION: &str = "about-education";
    pub const EXPERIENCE_TIMELINE: &str = "experience-timeline";
    pub const PROJECTS_GRID: &str = "projects-grid";
    pub const PUBLICATIONS_LIST: &str = "publications-list";
    pub const NAVBAR: &str = "navbar";
}

pub mod classes {
    pub const NAV_TOGGLE: &str = "nav-toggle";
    pub const NAV_LINKS: &str = "nav-links";
    pub const NAV_LINK: &str = "nav-link";
    pub const SECTION: &str = "section";
    pub const ACTIVE: &str = "active";
    pub const VISIBLE: &str = "visible";
    pub const TIMELINE_ITEM: &str = "timeline-item";
    pub const PROJECT_CARD: &str = "project-card";
    pub const PUBLICATION_ITEM: &str = "publication-item";
}

/// Every id a full render writes into.
pub const REQUIRED_ANCHORS: &[&str] = &[
    ids::PROFILE_NAME,
    ids::PROFILE_ROLE,
    ids::PROFILE_ORG,
    ids::PROFILE_AVATAR,
    ids::PROFILE_LINKS,
    ids::ABOUT_BIO,
    ids::ABOUT_INTERESTS,
    ids::ABOUT_EDUCATION,
    ids::EXPERIENCE_TIMELINE,
    ids::PROJECTS_GRID,
    ids::PUBLICATIONS_LIST,
];

const NAV_SECTIONS: &[(&str, &str)] = &[
    ("about", "About"),
    ("experience", "Experience"),
    ("projects", "Projects"),
    ("publications", "Publications"),
];

fn section(id: &str, title: &str, body: El) -> El {
    El::new("section")
        .id(id)
        .class(classes::SECTION)
        .child(
            El::new("div")
                .class("container")
                .child(El::new("h2").class("section-title").text(title))
                .child(body),
        )
}

/// The standard page shell, before any data has been rendered.
pub fn standard_skeleton() -> Document {
    let mut doc = Document::new();
    let root = doc.root();

    doc.append(
        root,
        El::new("head")
            .child(El::new("meta").attr("charset", "UTF-8"))
            .child(El::new("title").text("Portfolio"))
            .child(El::new("link").attr("rel", "stylesheet").attr("href", "css/style.css")),
    );

    let nav_links = NAV_SECTIONS.iter().map(|(id, label)| {
        El::new("li").child(
            El::new("a")
                .class(classes::NAV_LINK)
                .attr("href", &format!("#{}", id))
                .text(label),
        )
    });

    let navbar = El::new("nav").id(ids::NAVBAR).class("navbar").child(
        El::new("div")
            .class("nav-container")
            .child(El::new("a").class("nav-logo").attr("href", "#home").text("Home"))
            .child(
                El::new("button")
                    .class(classes::NAV_TOGGLE)
                    .attr("aria-label", "Toggle navigation")
                    .child(El::new("i").class("fas fa-bars")),
            )
            .child(El::new("ul").class(classes::NAV_LINKS).children(nav_links)),
    );

    let hero = El::new("header").id("home").class("hero").child(
        El::new("div")
            .class("profile-card")
            .child(El::new("img").id(ids::PROFILE_AVATAR).class("profile-avatar"))
            .child(El::new("h1").id(ids::PROFILE_NAME))
            .child(El::new("p").id(ids::PROFILE_ROLE))
            .child(El::new("p").id(ids::PROFILE_ORG))
            .child(El::new("div").id(ids::PROFILE_LINKS).class("profile-links")),
    );

    let about = section(
        "about",
        "About",
        El::new("div")
            .class("about-content")
            .child(El::new("p").id(ids::ABOUT_BIO))
            .child(El::new("div").id(ids::ABOUT_INTERESTS))
            .child(El::new("div").id(ids::ABOUT_EDUCATION)),
    );
    let experience = section(
        "experience",
        "Experience",
        El::new("div").id(ids::EXPERIENCE_TIMELINE).class("timeline"),
    );
    let projects = section(
        "projects",
        "Projects",
        El::new("div").id(ids::PROJECTS_GRID).class("projects-grid"),
    );
    let publications = section(
        "publications",
        "Publications",
        El::new("div").id(ids::PUBLICATIONS_LIST).class("publications-list"),
    );

    doc.append(
        root,
        El::new("body")
            .child(navbar)
            .child(hero)
            .child(El::new("main").children([about, experience, projects, publications])),
    );

    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_skeleton_has_every_anchor() {
        let doc = standard_skeleton();
        for id in REQUIRED_ANCHORS {
            assert!(doc.get_element_by_id(id).is_some(), "missing {}", id);
        }
        assert!(doc.get_element_by_id(ids::NAVBAR).is_some());
        assert!(doc.first_with_class(classes::NAV_TOGGLE).is_some());
        assert_eq!(doc.elements_with_class(classes::NAV_LINK).len(), 4);
        assert_eq!(doc.elements_with_class(classes::SECTION).len(), 4);
    }

    #[test]
    fn test_skeleton_containers_start_empty() {
        let doc = standard_skeleton();
        for id in [ids::EXPERIENCE_TIMELINE, ids::PROJECTS_GRID, ids::PUBLICATIONS_LIST] {
            let node = doc.get_element_by_id(id).unwrap();
            assert!(doc.children(node).is_empty());
        }
    }
}
