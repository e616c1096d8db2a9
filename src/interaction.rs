//! Interaction wiring
//!
//! Listeners are resolved once against the document by [`Interactions::wire`].
//! The host feeds events through [`Interactions::dispatch`] and carries out
//! the returned [`Effects`] (it owns scrolling). Clicks bubble from the
//! target through its ancestors, like DOM events do.

use crate::config::SiteConfig;
use crate::dom::{Document, NodeId};
use crate::skeleton::{classes, ids};

pub const NAV_SHADOW: &str = "0 2px 10px rgba(0,0,0,0.1)";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Click(NodeId),
    Scroll { offset_y: f64 },
}

/// What the host should do after dispatch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Effects {
    pub default_prevented: bool,
    /// Smooth-scroll this element into view.
    pub scroll_into_view: Option<NodeId>,
}

#[derive(Debug, Clone)]
struct InPageAnchor {
    node: NodeId,
    fragment: String,
}

#[derive(Debug, Clone)]
pub struct Interactions {
    nav_toggle: Option<NodeId>,
    nav_menu: Option<NodeId>,
    nav_links: Vec<NodeId>,
    anchors: Vec<InPageAnchor>,
    navbar: Option<NodeId>,
    shadow_threshold: f64,
}

impl Interactions {
    /// Resolve every listener target. Absent optional controls are skipped.
    pub fn wire(doc: &Document, config: &SiteConfig) -> Self {
        let nav_toggle = doc.first_with_class(classes::NAV_TOGGLE);
        if nav_toggle.is_none() {
            tracing::debug!("No nav toggle in document, mobile menu wiring skipped");
        }

        let anchors: Vec<InPageAnchor> = doc
            .select_all(|el| el.tag() == "a" && el.attr("href").is_some_and(|h| h.starts_with('#')))
            .into_iter()
            .filter_map(|node| {
                let href = doc.attr(node, "href")?;
                Some(InPageAnchor {
                    node,
                    fragment: decode_fragment(href),
                })
            })
            .collect();

        let wired = Self {
            nav_toggle,
            nav_menu: doc.first_with_class(classes::NAV_LINKS),
            nav_links: doc.elements_with_class(classes::NAV_LINK),
            anchors,
            navbar: doc.get_element_by_id(ids::NAVBAR),
            shadow_threshold: config.scroll_shadow_threshold_px,
        };
        tracing::debug!(
            "Wired {} nav links and {} in-page anchors",
            wired.nav_links.len(),
            wired.anchors.len()
        );
        wired
    }

    pub fn dispatch(&self, doc: &mut Document, event: Event) -> Effects {
        match event {
            Event::Click(target) => self.click(doc, target),
            Event::Scroll { offset_y } => {
                self.scroll(doc, offset_y);
                Effects::default()
            }
        }
    }

    fn click(&self, doc: &mut Document, target: NodeId) -> Effects {
        let mut effects = Effects::default();

        let mut path = vec![target];
        while let Some(parent) = path.last().and_then(|n| doc.parent(*n)) {
            path.push(parent);
        }

        for node in path {
            if Some(node) == self.nav_toggle {
                if let Some(menu) = self.nav_menu {
                    doc.toggle_class(menu, classes::ACTIVE);
                }
            }

            if self.nav_links.contains(&node) {
                if let Some(menu) = self.nav_menu {
                    doc.remove_class(menu, classes::ACTIVE);
                }
            }

            if let Some(anchor) = self.anchors.iter().find(|a| a.node == node) {
                effects.default_prevented = true;
                // A fragment with no matching element is swallowed
                effects.scroll_into_view = if anchor.fragment.is_empty() {
                    None
                } else {
                    doc.get_element_by_id(&anchor.fragment)
                };
            }
        }

        effects
    }

    fn scroll(&self, doc: &mut Document, offset_y: f64) {
        let Some(navbar) = self.navbar else {
            return;
        };
        let shadow = if offset_y > self.shadow_threshold {
            NAV_SHADOW
        } else {
            "none"
        };
        doc.set_style(navbar, "box-shadow", shadow);
    }
}

/// `#caf%C3%A9` -> `café`. Invalid escapes fall back to the raw text.
fn decode_fragment(href: &str) -> String {
    let raw = href.trim_start_matches('#');
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::El;
    use crate::skeleton::standard_skeleton;

    fn wired() -> (Document, Interactions) {
        let doc = standard_skeleton();
        let interactions = Interactions::wire(&doc, &SiteConfig::default());
        (doc, interactions)
    }

    #[test]
    fn test_toggle_opens_and_closes_menu() {
        let (mut doc, interactions) = wired();
        let toggle = doc.first_with_class(classes::NAV_TOGGLE).unwrap();
        let menu = doc.first_with_class(classes::NAV_LINKS).unwrap();

        interactions.dispatch(&mut doc, Event::Click(toggle));
        assert!(doc.has_class(menu, classes::ACTIVE));

        // Clicking the icon inside the button bubbles to the toggle
        let icon = doc.child_elements(toggle)[0];
        interactions.dispatch(&mut doc, Event::Click(icon));
        assert!(!doc.has_class(menu, classes::ACTIVE));
    }

    #[test]
    fn test_nav_link_closes_menu_and_scrolls() {
        let (mut doc, interactions) = wired();
        let toggle = doc.first_with_class(classes::NAV_TOGGLE).unwrap();
        let menu = doc.first_with_class(classes::NAV_LINKS).unwrap();
        interactions.dispatch(&mut doc, Event::Click(toggle));

        let link = doc.elements_with_class(classes::NAV_LINK)[2];
        let effects = interactions.dispatch(&mut doc, Event::Click(link));

        assert!(!doc.has_class(menu, classes::ACTIVE));
        assert!(effects.default_prevented);
        assert_eq!(effects.scroll_into_view, doc.get_element_by_id("projects"));
    }

    #[test]
    fn test_anchor_without_target_is_swallowed() {
        let mut doc = standard_skeleton();
        let body = doc.child_elements(doc.root())[1];
        let dangling = doc.append(body, El::new("a").attr("href", "#nowhere"));
        let bare = doc.append(body, El::new("a").attr("href", "#"));
        let interactions = Interactions::wire(&doc, &SiteConfig::default());

        for anchor in [dangling, bare] {
            let effects = interactions.dispatch(&mut doc, Event::Click(anchor));
            assert!(effects.default_prevented);
            assert_eq!(effects.scroll_into_view, None);
        }
    }

    #[test]
    fn test_missing_toggle_is_skipped() {
        let mut doc = standard_skeleton();
        let toggle = doc.first_with_class(classes::NAV_TOGGLE).unwrap();
        let container = doc.parent(toggle).unwrap();
        doc.clear_children(container);
        let interactions = Interactions::wire(&doc, &SiteConfig::default());

        let effects = interactions.dispatch(&mut doc, Event::Click(toggle));
        assert_eq!(effects, Effects::default());
    }

    #[test]
    fn test_navbar_shadow_threshold() {
        let (mut doc, interactions) = wired();
        let navbar = doc.get_element_by_id(ids::NAVBAR).unwrap();

        interactions.dispatch(&mut doc, Event::Scroll { offset_y: 50.0 });
        assert_eq!(doc.style(navbar, "box-shadow"), Some("none"));

        interactions.dispatch(&mut doc, Event::Scroll { offset_y: 51.0 });
        assert_eq!(doc.style(navbar, "box-shadow"), Some(NAV_SHADOW));

        interactions.dispatch(&mut doc, Event::Scroll { offset_y: 0.0 });
        assert_eq!(doc.style(navbar, "box-shadow"), Some("none"));
    }

    #[test]
    fn test_decode_fragment() {
        assert_eq!(decode_fragment("#about"), "about");
        assert_eq!(decode_fragment("#caf%C3%A9"), "café");
    }
}
