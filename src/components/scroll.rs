//! Offset-adjusted smooth scrolling for in-page anchors.

use super::Component;
use crate::config::ScrollConfig;
use crate::dom::{Dom, Event, Propagation};
use crate::markup::selectors;

/// Replaces the browser's fragment jump with a smooth scroll that leaves
/// room for the fixed navbar.
#[derive(Debug, Clone)]
pub struct ScrollEffectsController<N> {
    anchors: Vec<N>,
    navbar: Option<N>,
    offset_padding: f64,
}

impl<N: Clone + PartialEq> ScrollEffectsController<N> {
    pub fn init<D: Dom<Node = N>>(dom: &mut D, config: &ScrollConfig) -> Option<Self> {
        let anchors = dom.query_all(selectors::FRAGMENT_ANCHOR);
        if anchors.is_empty() {
            log::debug!("scroll: no fragment anchors");
            return None;
        }
        Some(Self {
            anchors,
            navbar: dom.query(selectors::NAVBAR_CLASS),
            offset_padding: config.offset_padding,
        })
    }

    /// Scroll destination for `target`: below the navbar as it is right now.
    fn destination<D: Dom<Node = N>>(&self, dom: &D, target: &N) -> f64 {
        let navbar_height = self
            .navbar
            .as_ref()
            .map(|navbar| dom.offset_height(navbar))
            .unwrap_or(0.0);
        dom.offset_top(target) - navbar_height - self.offset_padding
    }

    fn on_click<D: Dom<Node = N>>(&self, dom: &mut D, clicked: &N) -> Propagation {
        let Some(anchor) = self.anchors.iter().find(|a| dom.contains(a, clicked)) else {
            return Propagation::default();
        };
        let Some(href) = dom.attribute(anchor, "href") else {
            return Propagation::default();
        };
        if href == "#" || !href.starts_with('#') {
            return Propagation::default();
        }
        let Some(target) = dom.query(&href) else {
            return Propagation::default();
        };

        let top = self.destination(dom, &target);
        dom.scroll_to(top);
        Propagation::prevent_default()
    }
}

impl<D: Dom> Component<D> for ScrollEffectsController<D::Node> {
    fn handle(&mut self, dom: &mut D, event: &Event<D::Node>) -> Propagation {
        match event {
            Event::Click { target } => self.on_click(dom, target),
            _ => Propagation::default(),
        }
    }
}
