//! One-shot entrance animations for `.fade-in`, `.slide-left` and `.slide-right`.

use super::Component;
use crate::config::RevealConfig;
use crate::dom::{Dom, Event, ObserverOptions, Propagation};
use crate::markup::{classes, selectors};

/// Adds `visible` to tagged elements the first time they scroll into view.
///
/// Reveals are monotonic: an element is unobserved as soon as it becomes
/// visible, so it can never be hidden again by this component.
#[derive(Debug, Clone)]
pub struct VisibilityAnimator<N> {
    pending: Vec<N>,
}

impl<N: Clone + PartialEq> VisibilityAnimator<N> {
    /// Register every tagged element with the intersection watcher.
    ///
    /// Without intersection support every element is revealed immediately
    /// and there is nothing left to watch, so `None` is returned.
    pub fn init<D: Dom<Node = N>>(dom: &mut D, config: &RevealConfig) -> Option<Self> {
        let elements = dom.query_all(selectors::ANIMATED);
        if elements.is_empty() {
            return None;
        }

        if !dom.supports_intersection_observer() {
            log::debug!(
                "reveal: no intersection support, showing {} elements",
                elements.len()
            );
            for el in &elements {
                dom.add_class(el, classes::VISIBLE);
            }
            return None;
        }

        let options = ObserverOptions {
            threshold: config.threshold,
            root_margin: config.root_margin(),
        };
        for el in &elements {
            dom.observe(el, &options);
        }
        Some(Self { pending: elements })
    }

    /// Elements still waiting to be revealed.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    fn on_intersect<D: Dom<Node = N>>(&mut self, dom: &mut D, target: &N) {
        let Some(pos) = self.pending.iter().position(|n| n == target) else {
            return;
        };
        let el = self.pending.swap_remove(pos);
        dom.add_class(&el, classes::VISIBLE);
        dom.unobserve(&el);
    }
}

impl<D: Dom> Component<D> for VisibilityAnimator<D::Node> {
    fn handle(&mut self, dom: &mut D, event: &Event<D::Node>) -> Propagation {
        if let Event::Intersect {
            target,
            is_intersecting: true,
        } = event
        {
            self.on_intersect(dom, target);
        }
        Propagation::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::{El, MemoryDom, NodeId};
    use crate::test_helpers::*;

    fn init(page: &mut SamplePage) -> VisibilityAnimator<NodeId> {
        VisibilityAnimator::init(&mut page.dom, &RevealConfig::default()).unwrap()
    }

    fn intersect(target: NodeId, is_intersecting: bool) -> Event<NodeId> {
        Event::Intersect {
            target,
            is_intersecting,
        }
    }

    #[test]
    fn observes_every_tagged_element_with_configured_options() {
        let mut page = sample_page();
        let animator = init(&mut page);
        assert_eq!(animator.pending(), 3);
        assert_eq!(page.dom.observed(), page.cards.as_slice());

        let options = page.dom.observer_options().unwrap();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn first_intersection_reveals_and_unobserves() {
        let mut page = sample_page();
        let mut animator = init(&mut page);
        let card = page.cards[1];

        animator.handle(&mut page.dom, &intersect(card, true));
        assert!(page.dom.has_class(&card, "visible"));
        assert!(!page.dom.observed().contains(&card));
        assert_eq!(animator.pending(), 2);
    }

    #[test]
    fn non_intersecting_reports_are_ignored() {
        let mut page = sample_page();
        let mut animator = init(&mut page);
        animator.handle(&mut page.dom, &intersect(page.cards[0], false));
        assert!(!page.dom.has_class(&page.cards[0], "visible"));
        assert_eq!(animator.pending(), 3);
    }

    #[test]
    fn reveal_is_monotonic() {
        let mut page = sample_page();
        let mut animator = init(&mut page);
        let card = page.cards[0];

        animator.handle(&mut page.dom, &intersect(card, true));
        animator.handle(&mut page.dom, &intersect(card, false));
        animator.handle(&mut page.dom, &intersect(card, true));
        assert_eq!(
            page.dom.classes(card).iter().filter(|c| *c == "visible").count(),
            1
        );
        assert_eq!(animator.pending(), 2);
    }

    #[test]
    fn untagged_targets_are_ignored() {
        let mut page = sample_page();
        let mut animator = init(&mut page);
        animator.handle(&mut page.dom, &intersect(page.gallery_grid, true));
        assert!(!page.dom.has_class(&page.gallery_grid, "visible"));
    }

    #[test]
    fn without_intersection_support_everything_is_visible_at_once() {
        let mut page = sample_page_in(MemoryDom::without_intersection_observer());
        let animator = VisibilityAnimator::init(&mut page.dom, &RevealConfig::default());
        assert!(animator.is_none());
        for card in &page.cards {
            assert!(page.dom.has_class(card, "visible"));
        }
        assert!(page.dom.observed().is_empty());
    }

    #[test]
    fn page_without_tagged_elements_yields_none() {
        let mut dom = MemoryDom::new();
        let body = dom.body();
        dom.append(body, El::new("div").class("card"));
        assert!(VisibilityAnimator::init(&mut dom, &RevealConfig::default()).is_none());
    }
}
