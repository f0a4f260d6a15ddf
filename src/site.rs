//! The assembled page: every component wired to one document.

use crate::components::{
    Component, FormHandler, GalleryFilter, Lightbox, LightboxState, NavigationController,
    ScrollEffectsController, VisibilityAnimator,
};
use crate::config::BehaviorConfig;
use crate::dom::{Dom, Event, Propagation, TimerHandle};
use crate::markup;

/// All page behaviors over one document.
///
/// Construction runs every initializer once. Components the page has no
/// elements for stay `None` and never see an event.
///
/// ```
/// use pagewire::Site;
/// use pagewire::config::BehaviorConfig;
/// use pagewire::dom::{Dom, Event};
/// use pagewire::dom::memory::{El, MemoryDom};
///
/// let mut dom = MemoryDom::new();
/// let body = dom.body();
/// let toggle = dom.append(body, El::new("button").id("nav-toggle"));
/// let menu = dom.append(body, El::new("ul").id("nav-menu"));
///
/// let mut site = Site::new(dom, BehaviorConfig::default());
/// site.dispatch(Event::Click { target: toggle });
/// assert!(site.menu_open());
/// assert!(site.dom().has_class(&menu, "active"));
/// ```
pub struct Site<D: Dom> {
    dom: D,
    config: BehaviorConfig,
    navigation: Option<NavigationController<D::Node>>,
    scroll: Option<ScrollEffectsController<D::Node>>,
    gallery: Option<GalleryFilter<D::Node>>,
    lightbox: Option<Lightbox<D::Node>>,
    reveal: Option<VisibilityAnimator<D::Node>>,
    form: Option<FormHandler<D::Node>>,
}

impl<D: Dom> Site<D> {
    pub fn new(mut dom: D, config: BehaviorConfig) -> Self {
        dom.inject_style(&markup::fade_in_keyframes_css());

        let navigation = NavigationController::init(&mut dom, &config.navigation);
        let scroll = ScrollEffectsController::init(&mut dom, &config.scroll);
        let gallery = GalleryFilter::init(&mut dom, &config.gallery);
        let lightbox = Lightbox::init(&mut dom);
        let reveal = VisibilityAnimator::init(&mut dom, &config.reveal);
        let form = FormHandler::init(&mut dom, &config.form);

        log::debug!(
            "site: navigation={} scroll={} gallery={} lightbox={} reveal={} form={}",
            navigation.is_some(),
            scroll.is_some(),
            gallery.is_some(),
            lightbox.is_some(),
            reveal.is_some(),
            form.is_some(),
        );

        Self {
            dom,
            config,
            navigation,
            scroll,
            gallery,
            lightbox,
            reveal,
            form,
        }
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    pub fn config(&self) -> &BehaviorConfig {
        &self.config
    }

    /// Deliver `event` to every enabled component.
    ///
    /// The browser default must be suppressed when the returned
    /// [`Propagation`] says so.
    pub fn dispatch(&mut self, event: Event<D::Node>) -> Propagation {
        let Self {
            dom,
            navigation,
            scroll,
            gallery,
            lightbox,
            reveal,
            form,
            ..
        } = self;
        [
            deliver(navigation, dom, &event),
            deliver(scroll, dom, &event),
            deliver(gallery, dom, &event),
            deliver(lightbox, dom, &event),
            deliver(reveal, dom, &event),
            deliver(form, dom, &event),
        ]
        .into_iter()
        .fold(Propagation::default(), Propagation::merge)
    }

    /// Apply the gallery filter for `token` as if its button were clicked and
    /// scroll the grid into view. `false` when there is no such button.
    pub fn filter_gallery(&mut self, token: &str) -> bool {
        match &self.gallery {
            Some(gallery) => gallery.filter_by_token(&mut self.dom, token),
            None => false,
        }
    }

    /// Lightbox state, `Closed` on pages without a lightbox.
    pub fn lightbox_state(&self) -> LightboxState {
        self.lightbox
            .as_ref()
            .map(Lightbox::state)
            .unwrap_or_default()
    }

    pub fn pending_form_reset(&self) -> Option<TimerHandle> {
        self.form.as_ref().and_then(FormHandler::pending_reset)
    }

    pub fn menu_open(&self) -> bool {
        self.navigation
            .as_ref()
            .is_some_and(|nav| nav.is_open(&self.dom))
    }

    /// Token of the active gallery filter button.
    pub fn active_filter(&self) -> Option<String> {
        self.gallery
            .as_ref()
            .and_then(|gallery| gallery.active_token(&self.dom))
    }

    /// Tagged elements not yet revealed.
    pub fn pending_reveals(&self) -> usize {
        self.reveal
            .as_ref()
            .map(VisibilityAnimator::pending)
            .unwrap_or(0)
    }
}

fn deliver<D: Dom, C: Component<D>>(
    component: &mut Option<C>,
    dom: &mut D,
    event: &Event<D::Node>,
) -> Propagation {
    component
        .as_mut()
        .map(|c| c.handle(dom, event))
        .unwrap_or_default()
}
