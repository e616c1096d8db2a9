//! Reveal animator
//!
//! Watches sections and list items and adds the `visible` class the first
//! time each one intersects the viewport. Items get a staggered
//! `transition-delay` proportional to their index.
//!
//! The host reports geometry in one of two ways: raw intersection entries
//! ([`RevealAnimator::handle_entries`]), or a viewport plus a [`Layout`]
//! from which entries are computed ([`RevealAnimator::update`]).

use rustc_hash::FxHashSet;

use crate::config::SiteConfig;
use crate::dom::{Document, NodeId};
use crate::skeleton::classes;

const STAGGERED_CLASSES: &[&str] = &[
    classes::TIMELINE_ITEM,
    classes::PROJECT_CARD,
    classes::PUBLICATION_ITEM,
];

/// Vertical extent of an element in document coordinates (px).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
}

/// Supplies element geometry. Elements without a box return `None`.
pub trait Layout {
    fn rect(&self, node: NodeId) -> Option<Rect>;
}

impl<F> Layout for F
where
    F: Fn(NodeId) -> Option<Rect>,
{
    fn rect(&self, node: NodeId) -> Option<Rect> {
        self(node)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub target: NodeId,
    pub is_intersecting: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    /// Added to the viewport bottom; negative values shrink it.
    pub bottom_margin: f64,
}

impl From<&SiteConfig> for RevealOptions {
    fn from(config: &SiteConfig) -> Self {
        Self {
            threshold: config.reveal_threshold,
            bottom_margin: config.reveal_bottom_margin_px,
        }
    }
}

/// Fraction of `rect` inside the viewport after applying the bottom margin.
pub fn intersection_ratio(rect: Rect, viewport: Viewport, options: RevealOptions) -> f64 {
    let root_top = viewport.scroll_y;
    let root_bottom = viewport.scroll_y + viewport.height + options.bottom_margin;
    if root_bottom <= root_top {
        return 0.0;
    }

    if rect.height <= 0.0 {
        return if rect.top >= root_top && rect.top <= root_bottom { 1.0 } else { 0.0 };
    }

    let visible = rect.bottom().min(root_bottom) - rect.top.max(root_top);
    (visible.max(0.0) / rect.height).min(1.0)
}

#[derive(Debug, Clone)]
pub struct RevealAnimator {
    targets: Vec<NodeId>,
    revealed: FxHashSet<NodeId>,
    options: RevealOptions,
}

impl RevealAnimator {
    /// Collect targets and apply stagger delays to the list items.
    pub fn start(doc: &mut Document, config: &SiteConfig) -> Self {
        let mut targets = doc.elements_with_class(classes::SECTION);

        let items = doc.select_all(|el| STAGGERED_CLASSES.iter().any(|c| el.has_class(c)));
        for (index, item) in items.iter().enumerate() {
            doc.set_style(
                *item,
                "transition-delay",
                &format!("{}s", stagger_delay(index, config.stagger_step_secs)),
            );
        }
        targets.extend(items);

        let mut seen = FxHashSet::default();
        targets.retain(|t| seen.insert(*t));

        tracing::debug!("Observing {} reveal targets", targets.len());
        Self {
            targets,
            revealed: FxHashSet::default(),
            options: RevealOptions::from(config),
        }
    }

    pub fn targets(&self) -> &[NodeId] {
        &self.targets
    }

    pub fn is_revealed(&self, node: NodeId) -> bool {
        self.revealed.contains(&node)
    }

    /// Apply intersection entries. Returns the targets revealed by this call.
    pub fn handle_entries(&mut self, doc: &mut Document, entries: &[IntersectionEntry]) -> Vec<NodeId> {
        let mut newly = Vec::new();
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            if !self.targets.contains(&entry.target) || self.revealed.contains(&entry.target) {
                continue;
            }
            doc.add_class(entry.target, classes::VISIBLE);
            self.revealed.insert(entry.target);
            newly.push(entry.target);
        }
        newly
    }

    /// Compute entries for every target from `layout` and apply them.
    pub fn update<L: Layout>(&mut self, doc: &mut Document, viewport: Viewport, layout: &L) -> Vec<NodeId> {
        let entries: Vec<IntersectionEntry> = self
            .targets
            .iter()
            .filter_map(|target| {
                let rect = layout.rect(*target)?;
                let ratio = intersection_ratio(rect, viewport, self.options);
                Some(IntersectionEntry {
                    target: *target,
                    is_intersecting: ratio > 0.0 && ratio >= self.options.threshold,
                })
            })
            .collect();
        self.handle_entries(doc, &entries)
    }
}

/// Delay in seconds for the item at `index`, rounded to the millisecond.
fn stagger_delay(index: usize, step: f64) -> f64 {
    (index as f64 * step * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::fixtures::site_data;
    use crate::render::render_all;
    use crate::skeleton::standard_skeleton;
    use approx::assert_relative_eq;

    fn rendered() -> Document {
        let mut doc = standard_skeleton();
        render_all(&mut doc, &site_data()).unwrap();
        doc
    }

    #[test]
    fn test_targets_sections_then_items() {
        let mut doc = rendered();
        let animator = RevealAnimator::start(&mut doc, &SiteConfig::default());
        // 4 sections + 1 project + 2 jobs + 2 featured publications
        assert_eq!(animator.targets().len(), 9);
        assert!(doc.has_class(animator.targets()[0], classes::SECTION));
    }

    #[test]
    fn test_stagger_delays_follow_document_order() {
        let mut doc = rendered();
        RevealAnimator::start(&mut doc, &SiteConfig::default());

        let items = doc.select_all(|el| STAGGERED_CLASSES.iter().any(|c| el.has_class(c)));
        let delays: Vec<&str> = items
            .iter()
            .map(|n| doc.style(*n, "transition-delay").unwrap())
            .collect();
        assert_eq!(delays, vec!["0s", "0.1s", "0.2s", "0.3s", "0.4s"]);
    }

    #[test]
    fn test_visible_added_exactly_once() {
        let mut doc = rendered();
        let mut animator = RevealAnimator::start(&mut doc, &SiteConfig::default());
        let target = animator.targets()[1];
        let entry = IntersectionEntry { target, is_intersecting: true };

        assert_eq!(animator.handle_entries(&mut doc, &[entry]), vec![target]);
        assert!(animator.handle_entries(&mut doc, &[entry, entry]).is_empty());

        let el = doc.element(target).unwrap();
        assert_eq!(el.classes().iter().filter(|c| *c == classes::VISIBLE).count(), 1);
        assert!(animator.is_revealed(target));
    }

    #[test]
    fn test_non_intersecting_and_unobserved_are_ignored() {
        let mut doc = rendered();
        let mut animator = RevealAnimator::start(&mut doc, &SiteConfig::default());
        let target = animator.targets()[0];
        let stranger = doc.root();

        let newly = animator.handle_entries(
            &mut doc,
            &[
                IntersectionEntry { target, is_intersecting: false },
                IntersectionEntry { target: stranger, is_intersecting: true },
            ],
        );
        assert!(newly.is_empty());
        assert!(!doc.has_class(target, classes::VISIBLE));
        assert!(!doc.has_class(stranger, classes::VISIBLE));
    }

    #[test]
    fn test_intersection_ratio_respects_bottom_margin() {
        let options = RevealOptions { threshold: 0.1, bottom_margin: -100.0 };
        let viewport = Viewport { scroll_y: 0.0, height: 800.0 };

        // Element starting inside the trimmed 100px band is not visible yet
        assert_relative_eq!(intersection_ratio(Rect::new(720.0, 200.0), viewport, options), 0.0);
        // 100 of 200px above the 700px line
        assert_relative_eq!(intersection_ratio(Rect::new(600.0, 200.0), viewport, options), 0.5);
        assert_relative_eq!(intersection_ratio(Rect::new(0.0, 100.0), viewport, options), 1.0);
    }

    #[test]
    fn test_update_reveals_as_viewport_moves() {
        let mut doc = rendered();
        let mut animator = RevealAnimator::start(&mut doc, &SiteConfig::default());
        let targets = animator.targets().to_vec();

        // Stack targets 500px apart
        let layout = |node: NodeId| {
            targets
                .iter()
                .position(|t| *t == node)
                .map(|i| Rect::new(i as f64 * 500.0, 400.0))
        };

        let first = animator.update(&mut doc, Viewport { scroll_y: 0.0, height: 800.0 }, &layout);
        assert_eq!(first, vec![targets[0], targets[1]]);

        let second = animator.update(&mut doc, Viewport { scroll_y: 400.0, height: 800.0 }, &layout);
        assert_eq!(second, vec![targets[2]]);

        let back = animator.update(&mut doc, Viewport { scroll_y: 0.0, height: 800.0 }, &layout);
        assert!(back.is_empty());
    }
}
