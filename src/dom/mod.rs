//! Document access trait and the events components react to.
//!
//! Components never talk to a browser directly. They hold node handles
//! acquired through [`Dom`] at initialization and mutate the document through
//! it when an [`Event`] arrives. Two implementations exist:
//!
//! | Backend | Target | Used by |
//! |---|---|---|
//! | [`memory::MemoryDom`] | any | unit/integration tests, downstream tests |
//! | `web::WebDom` | `wasm32` only | the browser entry point |
//!
//! Every query that can miss returns `Option`, and every mutation on a
//! backend that can fail (web-sys returns `Result<_, JsValue>` for most
//! of them) is best-effort: a missing element is a silent no-op, never an
//! error surfaced to the page.

pub mod memory;
pub(crate) mod selector;
#[cfg(target_arch = "wasm32")]
pub mod web;

use std::fmt;

/// Opaque identifier of a one-shot timer scheduled through [`Dom::set_timeout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub u32);

/// Intersection watcher configuration passed to [`Dom::observe`].
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the element that must be visible (0.0 to 1.0).
    pub threshold: f64,
    /// CSS `rootMargin` value, e.g. `"0px 0px -50px 0px"`.
    pub root_margin: String,
}

/// Something that happened on the page.
///
/// `N` is the backend's node handle type.
#[derive(Debug, Clone, PartialEq)]
pub enum Event<N> {
    /// A click anywhere in the document; `target` is the innermost element.
    Click { target: N },
    /// The window scrolled; `scroll_y` is the new vertical offset.
    Scroll { scroll_y: f64 },
    /// A key was pressed; `key` is the DOM `KeyboardEvent.key` value.
    KeyDown { key: String },
    /// The intersection watcher reported on an observed element.
    Intersect { target: N, is_intersecting: bool },
    /// A form is being submitted.
    Submit { form: N },
    /// A timer scheduled with [`Dom::set_timeout`] fired.
    Timer(TimerHandle),
}

/// What the caller must do with the native event after dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Propagation {
    pub prevent_default: bool,
}

impl Propagation {
    pub fn prevent_default() -> Self {
        Self {
            prevent_default: true,
        }
    }

    /// Combine two outcomes; any component asking to prevent the default wins.
    pub fn merge(self, other: Propagation) -> Propagation {
        Propagation {
            prevent_default: self.prevent_default || other.prevent_default,
        }
    }
}

/// Access to a live document.
///
/// Reads take `&self`, writes take `&mut self` so that an in-memory backend
/// can record what happened without interior mutability.
pub trait Dom {
    /// Handle to an element. Cheap to clone; equality is node identity.
    type Node: Clone + PartialEq + fmt::Debug;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// First element in document order matching `selector`.
    /// An invalid selector matches nothing.
    fn query(&self, selector: &str) -> Option<Self::Node>;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;

    /// First descendant of `scope` matching `selector`.
    fn query_within(&self, scope: &Self::Node, selector: &str) -> Option<Self::Node>;

    /// All descendants of `scope` matching `selector`, in document order.
    fn query_all_within(&self, scope: &Self::Node, selector: &str) -> Vec<Self::Node>;

    /// Inclusive containment, like `Node.contains`: a node contains itself.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn add_class(&mut self, node: &Self::Node, class: &str);
    fn remove_class(&mut self, node: &Self::Node, class: &str);

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);

    /// Inline style property value, `None` when unset.
    fn style(&self, node: &Self::Node, property: &str) -> Option<String>;
    /// Set an inline style property. An empty value removes the property.
    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str);
    /// Same as [`set_style`](Dom::set_style) on `document.body`.
    fn set_body_style(&mut self, property: &str, value: &str);

    fn text_content(&self, node: &Self::Node) -> String;
    fn set_inner_html(&mut self, node: &Self::Node, html: &str);

    /// Distance in pixels from the top of the offset parent.
    fn offset_top(&self, node: &Self::Node) -> f64;
    /// Rendered height in pixels.
    fn offset_height(&self, node: &Self::Node) -> f64;

    /// Smoothly scroll the window to a vertical offset.
    fn scroll_to(&mut self, top: f64);
    /// Smoothly scroll `node` into view.
    fn scroll_into_view(&mut self, node: &Self::Node);

    /// Submitted name/value pairs of a form, in field order.
    fn form_data(&self, form: &Self::Node) -> Vec<(String, String)>;
    /// Restore every field of `form` to its default value.
    fn reset_form(&mut self, form: &Self::Node);

    /// Blocking user-facing message.
    fn alert(&mut self, message: &str);

    /// Schedule a one-shot [`Event::Timer`] after `delay_ms`.
    fn set_timeout(&mut self, delay_ms: u32) -> TimerHandle;
    /// Cancel a pending timer. Unknown or already fired handles are ignored.
    fn clear_timeout(&mut self, handle: TimerHandle);

    /// Whether the runtime can watch viewport intersection at all.
    fn supports_intersection_observer(&self) -> bool;
    /// Start reporting [`Event::Intersect`] for `node`.
    fn observe(&mut self, node: &Self::Node, options: &ObserverOptions);
    fn unobserve(&mut self, node: &Self::Node);

    /// Append a `<style>` block with `css` to the document head.
    fn inject_style(&mut self, css: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prevents_if_either_side_does() {
        let none = Propagation::default();
        let prevent = Propagation::prevent_default();
        assert!(!none.merge(none).prevent_default);
        assert!(none.merge(prevent).prevent_default);
        assert!(prevent.merge(none).prevent_default);
    }
}
