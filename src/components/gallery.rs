//! Category filter for gallery items (or destination cards).

use super::Component;
use crate::config::GalleryConfig;
use crate::dom::{Dom, Event, Propagation};
use crate::markup::{self, attrs, classes, selectors};

/// Shows the items whose `data-category` matches the clicked filter button.
///
/// Matching is exact, case-sensitive string equality. The configured
/// `all_token` matches every item.
#[derive(Debug, Clone)]
pub struct GalleryFilter<N> {
    buttons: Vec<N>,
    items: Vec<N>,
    grid: Option<N>,
    all_token: String,
    animation: String,
}

impl<N: Clone + PartialEq> GalleryFilter<N> {
    pub fn init<D: Dom<Node = N>>(dom: &mut D, config: &GalleryConfig) -> Option<Self> {
        let buttons = dom.query_all(selectors::FILTER_BUTTON);
        if buttons.is_empty() {
            log::debug!("gallery: no filter buttons");
            return None;
        }

        // Dedicated gallery items win; destination pages filter their cards.
        let mut items = dom.query_all(selectors::GALLERY_ITEM);
        if items.is_empty() {
            items = dom.query_all(selectors::CATEGORY_CARD);
        }

        Some(Self {
            buttons,
            items,
            grid: dom.query(selectors::GALLERY_GRID),
            all_token: config.all_token.clone(),
            animation: markup::fade_in_animation(config),
        })
    }

    /// Activate the filter button whose token is `token`, exactly as if it
    /// had been clicked, then bring the gallery grid into view.
    ///
    /// Returns `false` (and changes nothing) when no button carries `token`.
    pub fn filter_by_token<D: Dom<Node = N>>(&self, dom: &mut D, token: &str) -> bool {
        let Some(index) = self
            .buttons
            .iter()
            .position(|b| dom.attribute(b, attrs::FILTER).as_deref() == Some(token))
        else {
            return false;
        };
        self.apply(dom, index);
        if let Some(grid) = &self.grid {
            dom.scroll_into_view(grid);
        }
        true
    }

    /// Token of the currently active button, if any.
    pub fn active_token<D: Dom<Node = N>>(&self, dom: &D) -> Option<String> {
        self.buttons
            .iter()
            .find(|b| dom.has_class(b, classes::ACTIVE))
            .and_then(|b| dom.attribute(b, attrs::FILTER))
    }

    fn apply<D: Dom<Node = N>>(&self, dom: &mut D, index: usize) {
        let clicked = &self.buttons[index];
        let token = dom.attribute(clicked, attrs::FILTER);

        for button in &self.buttons {
            dom.remove_class(button, classes::ACTIVE);
        }
        dom.add_class(clicked, classes::ACTIVE);

        let show_all = token.as_deref() == Some(self.all_token.as_str());
        for item in &self.items {
            // A button without a token shows the items without a category.
            if show_all || dom.attribute(item, attrs::CATEGORY) == token {
                dom.set_style(item, "display", "block");
                dom.set_style(item, "animation", &self.animation);
            } else {
                dom.set_style(item, "display", "none");
            }
        }
        log::debug!("gallery: filter {:?} applied", token);
    }
}

impl<D: Dom> Component<D> for GalleryFilter<D::Node> {
    fn handle(&mut self, dom: &mut D, event: &Event<D::Node>) -> Propagation {
        if let Event::Click { target } = event {
            if let Some(index) = self.buttons.iter().position(|b| dom.contains(b, target)) {
                self.apply(dom, index);
            }
        }
        Propagation::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::{El, MemoryDom, NodeId, ScrollRequest};
    use crate::test_helpers::*;

    fn init(page: &mut SamplePage) -> GalleryFilter<NodeId> {
        GalleryFilter::init(&mut page.dom, &GalleryConfig::default()).unwrap()
    }

    fn click(filter: &mut GalleryFilter<NodeId>, target: NodeId, page: &mut SamplePage) {
        filter.handle(&mut page.dom, &Event::Click { target });
    }

    fn shown(page: &SamplePage) -> Vec<bool> {
        page.item_display()
            .iter()
            .map(|d| d.as_deref() == Some("block"))
            .collect()
    }

    fn active_buttons(page: &SamplePage) -> Vec<NodeId> {
        page.filter_buttons
            .iter()
            .copied()
            .filter(|b| page.dom.has_class(b, "active"))
            .collect()
    }

    #[test]
    fn category_click_shows_exact_matches_only() {
        let mut page = sample_page();
        let mut filter = init(&mut page);

        click(&mut filter, page.filter_buttons[2], &mut page);
        assert_eq!(shown(&page), [false, true, false, true]);
        assert_eq!(
            page.item_display()[0].as_deref(),
            Some("none"),
            "non-matching items are hidden, not just left alone"
        );
        assert_eq!(active_buttons(&page), [page.filter_buttons[2]]);
        assert_eq!(filter.active_token(&page.dom).as_deref(), Some("culture"));
    }

    #[test]
    fn all_token_shows_everything_with_fade_in() {
        let mut page = sample_page();
        let mut filter = init(&mut page);

        click(&mut filter, page.filter_buttons[3], &mut page);
        click(&mut filter, page.filter_buttons[0], &mut page);
        assert_eq!(shown(&page), [true; 4]);
        for item in &page.gallery_items {
            assert_eq!(
                page.dom.style(item, "animation").as_deref(),
                Some("fadeIn 0.5s ease forwards")
            );
        }
        assert_eq!(active_buttons(&page), [page.filter_buttons[0]]);
    }

    #[test]
    fn exactly_one_button_active_after_any_sequence() {
        let mut page = sample_page();
        let mut filter = init(&mut page);
        for index in [1, 3, 3, 0, 2, 1] {
            click(&mut filter, page.filter_buttons[index], &mut page);
            assert_eq!(active_buttons(&page), [page.filter_buttons[index]]);
        }
    }

    #[test]
    fn matching_is_case_sensitive() {
        let mut dom = MemoryDom::new();
        let body = dom.body();
        let button = dom.append(body, El::new("button").class("filter-btn").attr("data-filter", "Beaches"));
        let item = dom.append(body, El::new("div").class("gallery-item").attr("data-category", "beaches"));
        let mut filter = GalleryFilter::init(&mut dom, &GalleryConfig::default()).unwrap();

        filter.handle(&mut dom, &Event::Click { target: button });
        assert_eq!(dom.style(&item, "display").as_deref(), Some("none"));
    }

    #[test]
    fn falls_back_to_category_cards() {
        let mut dom = MemoryDom::new();
        let body = dom.body();
        let button = dom.append(body, El::new("button").class("filter-btn").attr("data-filter", "north"));
        let north = dom.append(body, El::new("div").class("card").attr("data-category", "north"));
        let south = dom.append(body, El::new("div").class("card").attr("data-category", "south"));
        let plain = dom.append(body, El::new("div").class("card"));
        let mut filter = GalleryFilter::init(&mut dom, &GalleryConfig::default()).unwrap();

        filter.handle(&mut dom, &Event::Click { target: button });
        assert_eq!(dom.style(&north, "display").as_deref(), Some("block"));
        assert_eq!(dom.style(&south, "display").as_deref(), Some("none"));
        // Cards without a category are not part of the filter set
        assert_eq!(dom.style(&plain, "display"), None);
    }

    #[test]
    fn gallery_items_take_precedence_over_cards() {
        let mut page = sample_page();
        let mut filter = init(&mut page);
        click(&mut filter, page.filter_buttons[1], &mut page);
        for card in &page.cards {
            assert_eq!(page.dom.style(card, "display"), None);
        }
    }

    #[test]
    fn filter_by_token_clicks_and_scrolls_to_grid() {
        let mut page = sample_page();
        let filter = init(&mut page);

        assert!(filter.filter_by_token(&mut page.dom, "wildlife"));
        assert_eq!(shown(&page), [false, false, true, false]);
        assert_eq!(active_buttons(&page), [page.filter_buttons[3]]);
        assert_eq!(
            page.dom.scroll_requests(),
            [ScrollRequest::IntoView(page.gallery_grid)]
        );
    }

    #[test]
    fn filter_by_unknown_token_is_noop() {
        let mut page = sample_page();
        let filter = init(&mut page);

        assert!(!filter.filter_by_token(&mut page.dom, "mountains"));
        assert!(active_buttons(&page).is_empty());
        assert_eq!(page.item_display(), vec![None::<String>; 4]);
        assert!(page.dom.scroll_requests().is_empty());
    }

    #[test]
    fn configured_fade_duration_is_used() {
        let mut page = sample_page();
        let config = GalleryConfig {
            fade_duration_ms: 300,
            ..GalleryConfig::default()
        };
        let mut filter = GalleryFilter::init(&mut page.dom, &config).unwrap();
        click(&mut filter, page.filter_buttons[0], &mut page);
        assert_eq!(
            page.dom.style(&page.gallery_items[0], "animation").as_deref(),
            Some("fadeIn 0.3s ease forwards")
        );
    }

    #[test]
    fn no_buttons_disables_component() {
        let mut dom = MemoryDom::new();
        let body = dom.body();
        dom.append(body, El::new("div").class("gallery-item"));
        assert!(GalleryFilter::init(&mut dom, &GalleryConfig::default()).is_none());
    }
}
