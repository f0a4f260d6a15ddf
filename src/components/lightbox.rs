//! Full-size image overlay for gallery items.
//!
//! ```text
//!            click .gallery-item
//!   CLOSED ───────────────────────▶ OPEN
//!      ▲                             │
//!      └─────────────────────────────┘
//!   click #lightbox-close, click on the backdrop, Escape
//! ```

use super::Component;
use crate::dom::{Dom, Event, Propagation};
use crate::markup::{self, classes, ids, selectors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open,
}

/// What the lightbox shows for a gallery item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LightboxContent {
    pub src: String,
    pub alt: String,
    pub title: String,
    pub location: String,
}

impl LightboxContent {
    /// Read image and caption from a `.gallery-item`.
    ///
    /// Anything missing (no `img`, no overlay, overlay without a heading or
    /// span) reads as an empty string.
    pub fn from_item<D: Dom>(dom: &D, item: &D::Node) -> Self {
        let image = dom.query_within(item, "img");
        let attr = |name: &str| {
            image
                .as_ref()
                .and_then(|img| dom.attribute(img, name))
                .unwrap_or_default()
        };
        let overlay = dom.query_within(item, selectors::GALLERY_OVERLAY);
        let overlay_text = |selector: &str| {
            overlay
                .as_ref()
                .and_then(|o| dom.query_within(o, selector))
                .map(|el| dom.text_content(&el))
                .unwrap_or_default()
        };

        Self {
            src: attr("src"),
            alt: attr("alt"),
            title: overlay_text(selectors::HEADING),
            location: overlay_text("span"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Lightbox<N> {
    container: N,
    image: Option<N>,
    caption: Option<N>,
    close: Option<N>,
    items: Vec<N>,
    state: LightboxState,
}

impl<N: Clone + PartialEq> Lightbox<N> {
    /// Returns `None` when the page has no `#lightbox`.
    pub fn init<D: Dom<Node = N>>(dom: &mut D) -> Option<Self> {
        let Some(container) = dom.element_by_id(ids::LIGHTBOX) else {
            log::debug!("lightbox: no #{}", ids::LIGHTBOX);
            return None;
        };
        Some(Self {
            container,
            image: dom.element_by_id(ids::LIGHTBOX_IMG),
            caption: dom.element_by_id(ids::LIGHTBOX_CAPTION),
            close: dom.element_by_id(ids::LIGHTBOX_CLOSE),
            items: dom.query_all(selectors::GALLERY_ITEM),
            state: LightboxState::Closed,
        })
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    fn open<D: Dom<Node = N>>(&mut self, dom: &mut D, item: &N) {
        let content = LightboxContent::from_item(dom, item);
        if let Some(image) = &self.image {
            dom.set_attribute(image, "src", &content.src);
            dom.set_attribute(image, "alt", &content.alt);
        }
        if let Some(caption) = &self.caption {
            let html = markup::caption_markup(&content.title, &content.location);
            dom.set_inner_html(caption, &html.into_string());
        }
        dom.add_class(&self.container, classes::ACTIVE);
        dom.set_body_style("overflow", "hidden");
        self.state = LightboxState::Open;
    }

    fn close<D: Dom<Node = N>>(&mut self, dom: &mut D) {
        if self.state == LightboxState::Closed {
            return;
        }
        dom.remove_class(&self.container, classes::ACTIVE);
        dom.set_body_style("overflow", "");
        self.state = LightboxState::Closed;
    }

    fn on_click<D: Dom<Node = N>>(&mut self, dom: &mut D, target: &N) {
        if let Some(item) = self.items.iter().find(|i| dom.contains(i, target)).cloned() {
            self.open(dom, &item);
        } else if self.close.as_ref().is_some_and(|c| dom.contains(c, target))
            || *target == self.container
        {
            self.close(dom);
        }
    }
}

impl<D: Dom> Component<D> for Lightbox<D::Node> {
    fn handle(&mut self, dom: &mut D, event: &Event<D::Node>) -> Propagation {
        match event {
            Event::Click { target } => self.on_click(dom, target),
            Event::KeyDown { key } if key == "Escape" => self.close(dom),
            _ => {}
        }
        Propagation::default()
    }
}
