//! The six page behaviors.
//!
//! | Component | Triggering events | Elements owned |
//! |---|---|---|
//! | [`NavigationController`] | click, scroll | `#navbar`, `#nav-toggle`, `#nav-menu`, `.nav-link` |
//! | [`ScrollEffectsController`] | click | `a[href^="#"]`, `.navbar` |
//! | [`VisibilityAnimator`] | intersect | `.fade-in`, `.slide-left`, `.slide-right` |
//! | [`GalleryFilter`] | click, [`Site::filter_gallery`](crate::Site::filter_gallery) | `.filter-btn`, `.gallery-item` / `.card[data-category]`, `.gallery-grid` |
//! | [`Lightbox`] | click, keydown | `#lightbox` and its parts, `.gallery-item` |
//! | [`FormHandler`] | submit, timer | `#contact-form`, `#form-success` |
//!
//! Each component is built by an `init` function that looks up its elements
//! once and returns `None` when the page lacks what it needs. After that it
//! only sees events through [`Component::handle`] and never reaches into
//! another component.

pub mod form;
pub mod gallery;
pub mod lightbox;
pub mod navigation;
pub mod reveal;
pub mod scroll;

pub use form::{FormHandler, SubmitError, validate_submission};
pub use gallery::GalleryFilter;
pub use lightbox::{Lightbox, LightboxState};
pub use navigation::NavigationController;
pub use reveal::VisibilityAnimator;
pub use scroll::ScrollEffectsController;

use crate::dom::{Dom, Event, Propagation};

/// A behavior reacting to page events.
pub trait Component<D: Dom> {
    /// React to `event`. Events the component does not care about are
    /// ignored and yield the default [`Propagation`].
    fn handle(&mut self, dom: &mut D, event: &Event<D::Node>) -> Propagation;
}

/// Flip `class` on `node`, like `classList.toggle`.
fn toggle_class<D: Dom>(dom: &mut D, node: &D::Node, class: &str) {
    if dom.has_class(node, class) {
        dom.remove_class(node, class);
    } else {
        dom.add_class(node, class);
    }
}
