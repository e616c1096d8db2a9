//! Profile: hero card identity fields, social links, bio, interests, education.

use crate::dom::{Document, El};
use crate::error::Result;
use crate::model::{Education, Profile, SocialLink};
use crate::skeleton::ids;

fn social_link(link: &SocialLink) -> El {
    El::new("a")
        .class("profile-link")
        .external_link(&link.url)
        .attr("title", &link.name)
        .child(El::new("i").class(&link.icon))
}

fn interests_block(interests: &[String]) -> El {
    El::new("div")
        .class("interests-list")
        .child(El::new("h3").text("Interests"))
        .child(
            El::new("div").class("interest-tags").children(
                interests
                    .iter()
                    .map(|interest| El::new("span").class("interest-tag").text(interest)),
            ),
        )
}

fn education_item(edu: &Education) -> El {
    El::new("div")
        .class("education-item")
        .child(El::new("div").class("education-degree").text(&edu.degree))
        .child(El::new("div").class("education-institution").text(&edu.institution))
        .child(El::new("div").class("education-year").text(&edu.year))
}

/// Populate the profile anchors. Appends children, so run once per document.
pub fn render(doc: &mut Document, profile: &Profile) -> Result<()> {
    let name = doc.require(ids::PROFILE_NAME)?;
    let role = doc.require(ids::PROFILE_ROLE)?;
    let org = doc.require(ids::PROFILE_ORG)?;
    let avatar = doc.require(ids::PROFILE_AVATAR)?;
    let links = doc.require(ids::PROFILE_LINKS)?;
    let bio = doc.require(ids::ABOUT_BIO)?;
    let interests = doc.require(ids::ABOUT_INTERESTS)?;
    let education = doc.require(ids::ABOUT_EDUCATION)?;

    doc.set_text_content(name, &profile.name);
    doc.set_text_content(role, &profile.role);
    doc.set_text_content(org, &profile.organization);

    doc.set_attr(avatar, "src", &profile.avatar);
    doc.set_attr(avatar, "alt", &profile.name);

    for link in &profile.social {
        doc.append(links, social_link(link));
    }

    doc.set_text_content(bio, &profile.bio);

    doc.append(interests, interests_block(&profile.interests));

    // Education container is reset to its heading before the entries go in
    doc.clear_children(education);
    doc.append(education, El::new("h3").text("Education"));
    for edu in &profile.education {
        doc.append(education, education_item(edu));
    }

    tracing::debug!(
        "Rendered profile: {} links, {} interests, {} education entries",
        profile.social.len(),
        profile.interests.len(),
        profile.education.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteError;
    use crate::loader::fixtures::site_data;
    use crate::skeleton::standard_skeleton;

    #[test]
    fn test_identity_fields() {
        let mut doc = standard_skeleton();
        let data = site_data();
        render(&mut doc, &data.profile).unwrap();

        let text = |doc: &Document, id| doc.text_content(doc.get_element_by_id(id).unwrap());
        assert_eq!(text(&doc, ids::PROFILE_NAME), "Ada Lovelace");
        assert_eq!(text(&doc, ids::PROFILE_ROLE), "Research Engineer");
        assert_eq!(text(&doc, ids::PROFILE_ORG), "Analytical Engines Ltd");
        assert_eq!(text(&doc, ids::ABOUT_BIO), "Writes programs for machines that do not exist yet.");

        let avatar = doc.get_element_by_id(ids::PROFILE_AVATAR).unwrap();
        assert_eq!(doc.attr(avatar, "src"), Some("img/ada.jpg"));
        assert_eq!(doc.attr(avatar, "alt"), Some("Ada Lovelace"));
    }

    #[test]
    fn test_social_links_in_source_order() {
        let mut doc = standard_skeleton();
        render(&mut doc, &site_data().profile).unwrap();

        let links = doc.get_element_by_id(ids::PROFILE_LINKS).unwrap();
        let anchors = doc.child_elements(links);
        assert_eq!(anchors.len(), 2);
        assert_eq!(doc.attr(anchors[0], "title"), Some("GitHub"));
        assert_eq!(doc.attr(anchors[1], "href"), Some("mailto:ada@example.com"));
        assert_eq!(doc.attr(anchors[0], "rel"), Some("noopener noreferrer"));

        let icon = doc.child_elements(anchors[0])[0];
        assert!(doc.has_class(icon, "fab") && doc.has_class(icon, "fa-github"));
    }

    #[test]
    fn test_interests_and_education() {
        let mut doc = standard_skeleton();
        render(&mut doc, &site_data().profile).unwrap();

        let tags: Vec<String> = doc
            .elements_with_class("interest-tag")
            .into_iter()
            .map(|n| doc.text_content(n))
            .collect();
        assert_eq!(tags, vec!["Compilers", "Mathematics"]);

        let education = doc.get_element_by_id(ids::ABOUT_EDUCATION).unwrap();
        let children = doc.child_elements(education);
        assert_eq!(doc.tag(children[0]), Some("h3"));
        assert_eq!(children.len(), 2);
        let year = doc.first_with_class("education-year").unwrap();
        assert_eq!(doc.text_content(year), "1833");
    }

    #[test]
    fn test_missing_anchor_fails_before_mutation() {
        let mut doc = standard_skeleton();
        let education = doc.get_element_by_id(ids::ABOUT_EDUCATION).unwrap();
        let parent = doc.parent(education).unwrap();
        doc.clear_children(parent);

        let err = render(&mut doc, &site_data().profile).unwrap_err();
        assert!(matches!(err, SiteError::MissingAnchor(ref id) if id == ids::ABOUT_BIO));
        let name = doc.get_element_by_id(ids::PROFILE_NAME).unwrap();
        assert_eq!(doc.text_content(name), "");
    }
}
