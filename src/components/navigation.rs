//! Mobile menu and navbar scroll styling.

use super::{Component, toggle_class};
use crate::config::NavigationConfig;
use crate::dom::{Dom, Event, Propagation};
use crate::markup::{classes, ids, selectors};

/// Toggle button and the menu it opens.
#[derive(Debug, Clone)]
struct MobileMenu<N> {
    toggle: N,
    menu: N,
    links: Vec<N>,
}

/// Navbar that gains `scrolled` past a threshold.
#[derive(Debug, Clone)]
struct ScrollStyledNavbar<N> {
    navbar: N,
    threshold: f64,
}

/// Opens and closes the mobile menu and styles the navbar on scroll.
///
/// The two halves are independent: a page without toggle/menu still gets
/// navbar styling and vice versa.
#[derive(Debug, Clone)]
pub struct NavigationController<N> {
    menu: Option<MobileMenu<N>>,
    navbar: Option<ScrollStyledNavbar<N>>,
}

impl<N: Clone + PartialEq> NavigationController<N> {
    pub fn init<D: Dom<Node = N>>(dom: &mut D, config: &NavigationConfig) -> Option<Self> {
        let menu = match (
            dom.element_by_id(ids::NAV_TOGGLE),
            dom.element_by_id(ids::NAV_MENU),
        ) {
            (Some(toggle), Some(menu)) => {
                let links = dom.query_all_within(&menu, selectors::NAV_LINK);
                Some(MobileMenu {
                    toggle,
                    menu,
                    links,
                })
            }
            _ => {
                log::debug!("navigation: no #{} / #{}, menu disabled", ids::NAV_TOGGLE, ids::NAV_MENU);
                None
            }
        };

        // A navbar rendered with `scrolled` already (inner pages) stays that way.
        let navbar = dom
            .element_by_id(ids::NAVBAR)
            .filter(|navbar| !dom.has_class(navbar, classes::SCROLLED))
            .map(|navbar| ScrollStyledNavbar {
                navbar,
                threshold: config.scroll_threshold,
            });

        if menu.is_none() && navbar.is_none() {
            return None;
        }
        Some(Self { menu, navbar })
    }

    /// Whether the mobile menu is currently open.
    pub fn is_open<D: Dom<Node = N>>(&self, dom: &D) -> bool {
        self.menu
            .as_ref()
            .is_some_and(|m| dom.has_class(&m.menu, classes::ACTIVE))
    }

    fn on_click<D: Dom<Node = N>>(&self, dom: &mut D, target: &N) {
        let Some(m) = &self.menu else {
            return;
        };
        if dom.contains(&m.toggle, target) {
            toggle_class(dom, &m.menu, classes::ACTIVE);
            toggle_class(dom, &m.toggle, classes::ACTIVE);
        } else if m.links.iter().any(|link| dom.contains(link, target))
            || !dom.contains(&m.menu, target)
        {
            dom.remove_class(&m.menu, classes::ACTIVE);
            dom.remove_class(&m.toggle, classes::ACTIVE);
        }
    }

    fn on_scroll<D: Dom<Node = N>>(&self, dom: &mut D, scroll_y: f64) {
        let Some(n) = &self.navbar else {
            return;
        };
        if scroll_y > n.threshold {
            dom.add_class(&n.navbar, classes::SCROLLED);
        } else {
            dom.remove_class(&n.navbar, classes::SCROLLED);
        }
    }
}

impl<D: Dom> Component<D> for NavigationController<D::Node> {
    fn handle(&mut self, dom: &mut D, event: &Event<D::Node>) -> Propagation {
        match event {
            Event::Click { target } => self.on_click(dom, target),
            Event::Scroll { scroll_y } => self.on_scroll(dom, *scroll_y),
            _ => {}
        }
        Propagation::default()
    }
}
