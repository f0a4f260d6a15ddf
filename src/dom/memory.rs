//! In-memory document used for tests and native simulation.
//!
//! Pages are built with [`MemoryDom::append`] and [`El`]. Side effects that a
//! browser would perform (alerts, smooth scrolls, injected styles, timers)
//! are recorded so tests can assert on them. Time only moves when
//! [`MemoryDom::advance`] (or [`Site::advance_clock`]) is called.
//!
//! ```
//! use pagewire::dom::Dom;
//! use pagewire::dom::memory::{El, MemoryDom};
//!
//! let mut dom = MemoryDom::new();
//! let body = dom.body();
//! let nav = dom.append(body, El::new("nav").id("navbar").class("navbar").height(80.0));
//! assert_eq!(dom.element_by_id("navbar"), Some(nav));
//! assert_eq!(dom.offset_height(&nav), 80.0);
//! ```

use super::selector::{Matchable, Selector};
use super::{Dom, Event, ObserverOptions, TimerHandle};
use crate::site::Site;
use std::collections::BTreeMap;

/// Handle to an element in a [`MemoryDom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A scroll the page asked the browser to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollRequest {
    To { top: f64 },
    IntoView(NodeId),
}

/// Description of an element to append.
#[derive(Debug, Clone, Default)]
pub struct El {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    offset_top: f64,
    offset_height: f64,
}

impl El {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn top(mut self, offset_top: f64) -> Self {
        self.offset_top = offset_top;
        self
    }

    pub fn height(mut self, offset_height: f64) -> Self {
        self.offset_height = offset_height;
        self
    }
}

#[derive(Debug, Clone)]
struct Element {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    text: String,
    inner_html: Option<String>,
    /// Current value of a form field; `None` means "still the default".
    value: Option<String>,
    offset_top: f64,
    offset_height: f64,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    fn from_spec(spec: El, parent: Option<NodeId>) -> Self {
        Self {
            tag: spec.tag,
            classes: spec.classes,
            attributes: spec.attributes,
            style: BTreeMap::new(),
            text: spec.text,
            inner_html: None,
            value: None,
            offset_top: spec.offset_top,
            offset_height: spec.offset_height,
            parent,
            children: Vec::new(),
        }
    }

    fn is_field(&self) -> bool {
        matches!(self.tag.as_str(), "input" | "textarea" | "select")
    }

    fn default_value(&self) -> String {
        match self.tag.as_str() {
            "textarea" => self.text.clone(),
            _ => self.attributes.get("value").cloned().unwrap_or_default(),
        }
    }
}

impl Matchable for Element {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Strip HTML tags from a string (simple angle-bracket stripping).
fn strip_tags(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    result
}

/// An element tree plus recorded browser side effects.
#[derive(Debug, Clone)]
pub struct MemoryDom {
    nodes: Vec<Element>,
    body_style: BTreeMap<String, String>,
    alerts: Vec<String>,
    scrolls: Vec<ScrollRequest>,
    styles: Vec<String>,
    observed: Vec<NodeId>,
    observer_options: Option<ObserverOptions>,
    intersection_supported: bool,
    now_ms: u64,
    timers: BTreeMap<TimerHandle, u64>,
    next_timer: u32,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    /// An empty document: a lone `<body>` and intersection observation available.
    pub fn new() -> Self {
        Self {
            nodes: vec![Element::from_spec(El::new("body"), None)],
            body_style: BTreeMap::new(),
            alerts: Vec::new(),
            scrolls: Vec::new(),
            styles: Vec::new(),
            observed: Vec::new(),
            observer_options: None,
            intersection_supported: true,
            now_ms: 0,
            timers: BTreeMap::new(),
            next_timer: 1,
        }
    }

    /// An empty document in a runtime without `IntersectionObserver`.
    pub fn without_intersection_observer() -> Self {
        Self {
            intersection_supported: false,
            ..Self::new()
        }
    }

    pub fn body(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a new element as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, spec: El) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Element::from_spec(spec, Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Type into a form field.
    pub fn set_value(&mut self, field: NodeId, value: &str) {
        self.nodes[field.0].value = Some(value.to_string());
    }

    /// Current value of a form field.
    pub fn value(&self, field: NodeId) -> String {
        let el = &self.nodes[field.0];
        el.value.clone().unwrap_or_else(|| el.default_value())
    }

    pub fn classes(&self, node: NodeId) -> &[String] {
        &self.nodes[node.0].classes
    }

    /// Markup last written with [`Dom::set_inner_html`].
    pub fn inner_html(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.0].inner_html.as_deref()
    }

    pub fn set_offset_height(&mut self, node: NodeId, height: f64) {
        self.nodes[node.0].offset_height = height;
    }

    pub fn body_style(&self, property: &str) -> Option<&str> {
        self.body_style.get(property).map(String::as_str)
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn scroll_requests(&self) -> &[ScrollRequest] {
        &self.scrolls
    }

    pub fn injected_styles(&self) -> &[String] {
        &self.styles
    }

    /// Elements currently registered with the intersection watcher.
    pub fn observed(&self) -> &[NodeId] {
        &self.observed
    }

    /// Options of the most recent [`Dom::observe`] call.
    pub fn observer_options(&self) -> Option<&ObserverOptions> {
        self.observer_options.as_ref()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Move the clock forward and return the timers that became due, in
    /// firing order. Fired timers are forgotten.
    pub fn advance(&mut self, ms: u64) -> Vec<TimerHandle> {
        self.now_ms += ms;
        let now = self.now_ms;
        let mut due: Vec<(u64, TimerHandle)> = self
            .timers
            .iter()
            .filter(|(_, at)| **at <= now)
            .map(|(handle, at)| (*at, *handle))
            .collect();
        due.sort();
        for (_, handle) in &due {
            self.timers.remove(handle);
        }
        due.into_iter().map(|(_, handle)| handle).collect()
    }

    /// `root` followed by its descendants, in document order.
    fn preorder(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev());
        }
        out
    }

    fn select(&self, root: NodeId, include_root: bool, selector: &str) -> Vec<NodeId> {
        let Ok(selector) = Selector::parse(selector) else {
            return Vec::new();
        };
        self.preorder(root)
            .into_iter()
            .skip(usize::from(!include_root))
            .filter(|id| selector.matches(&self.nodes[id.0]))
            .collect()
    }
}

impl Dom for MemoryDom {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.preorder(self.body())
            .into_iter()
            .find(|n| self.nodes[n.0].attribute("id") == Some(id))
    }

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.select(self.body(), true, selector)
    }

    fn query_within(&self, scope: &NodeId, selector: &str) -> Option<NodeId> {
        self.query_all_within(scope, selector).into_iter().next()
    }

    fn query_all_within(&self, scope: &NodeId, selector: &str) -> Vec<NodeId> {
        self.select(*scope, false, selector)
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        let mut current = Some(*node);
        while let Some(id) = current {
            if id == *ancestor {
                return true;
            }
            current = self.nodes[id.0].parent;
        }
        false
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.nodes[node.0].has_class(class)
    }

    fn add_class(&mut self, node: &NodeId, class: &str) {
        let el = &mut self.nodes[node.0];
        if !el.has_class(class) {
            el.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, node: &NodeId, class: &str) {
        self.nodes[node.0].classes.retain(|c| c != class);
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.nodes[node.0].attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
        self.nodes[node.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn style(&self, node: &NodeId, property: &str) -> Option<String> {
        self.nodes[node.0].style.get(property).cloned()
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) {
        let style = &mut self.nodes[node.0].style;
        if value.is_empty() {
            style.remove(property);
        } else {
            style.insert(property.to_string(), value.to_string());
        }
    }

    fn set_body_style(&mut self, property: &str, value: &str) {
        if value.is_empty() {
            self.body_style.remove(property);
        } else {
            self.body_style
                .insert(property.to_string(), value.to_string());
        }
    }

    fn text_content(&self, node: &NodeId) -> String {
        self.preorder(*node)
            .into_iter()
            .map(|id| self.nodes[id.0].text.as_str())
            .collect()
    }

    fn set_inner_html(&mut self, node: &NodeId, html: &str) {
        let el = &mut self.nodes[node.0];
        // Detached children stay in the arena but are no longer reachable.
        el.children.clear();
        el.text = strip_tags(html);
        el.inner_html = Some(html.to_string());
    }

    fn offset_top(&self, node: &NodeId) -> f64 {
        self.nodes[node.0].offset_top
    }

    fn offset_height(&self, node: &NodeId) -> f64 {
        self.nodes[node.0].offset_height
    }

    fn scroll_to(&mut self, top: f64) {
        self.scrolls.push(ScrollRequest::To { top });
    }

    fn scroll_into_view(&mut self, node: &NodeId) {
        self.scrolls.push(ScrollRequest::IntoView(*node));
    }

    fn form_data(&self, form: &NodeId) -> Vec<(String, String)> {
        self.preorder(*form)
            .into_iter()
            .skip(1)
            .filter(|id| self.nodes[id.0].is_field())
            .filter_map(|id| {
                let name = self.nodes[id.0].attributes.get("name")?;
                Some((name.clone(), self.value(id)))
            })
            .collect()
    }

    fn reset_form(&mut self, form: &NodeId) {
        for id in self.preorder(*form) {
            self.nodes[id.0].value = None;
        }
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn set_timeout(&mut self, delay_ms: u32) -> TimerHandle {
        let handle = TimerHandle(self.next_timer);
        self.next_timer += 1;
        self.timers
            .insert(handle, self.now_ms + u64::from(delay_ms));
        handle
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        self.timers.remove(&handle);
    }

    fn supports_intersection_observer(&self) -> bool {
        self.intersection_supported
    }

    fn observe(&mut self, node: &NodeId, options: &ObserverOptions) {
        if !self.observed.contains(node) {
            self.observed.push(*node);
        }
        self.observer_options = Some(options.clone());
    }

    fn unobserve(&mut self, node: &NodeId) {
        self.observed.retain(|n| n != node);
    }

    fn inject_style(&mut self, css: &str) {
        self.styles.push(css.to_string());
    }
}

impl Site<MemoryDom> {
    /// Advance the document clock and deliver every timer that fired.
    pub fn advance_clock(&mut self, ms: u64) {
        let fired = self.dom_mut().advance(ms);
        for handle in fired {
            self.dispatch(Event::Timer(handle));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> (MemoryDom, NodeId, NodeId, NodeId) {
        let mut dom = MemoryDom::new();
        let body = dom.body();
        let menu = dom.append(body, El::new("ul").id("nav-menu"));
        let item = dom.append(menu, El::new("li"));
        let link = dom.append(item, El::new("a").class("nav-link").attr("href", "#about").text("About"));
        (dom, menu, item, link)
    }

    #[test]
    fn contains_is_inclusive_and_follows_ancestors() {
        let (dom, menu, item, link) = tree();
        assert!(dom.contains(&menu, &menu));
        assert!(dom.contains(&menu, &link));
        assert!(dom.contains(&item, &link));
        assert!(!dom.contains(&link, &menu));
    }

    #[test]
    fn query_within_excludes_scope() {
        let (mut dom, menu, _, link) = tree();
        let body = dom.body();
        let outer = dom.append(body, El::new("a").class("nav-link"));
        assert_eq!(dom.query_all(".nav-link"), vec![link, outer]);
        assert_eq!(dom.query_all_within(&menu, ".nav-link"), vec![link]);
        assert_eq!(dom.query_within(&link, ".nav-link"), None);
    }

    #[test]
    fn query_returns_first_in_document_order() {
        let mut dom = MemoryDom::new();
        let body = dom.body();
        let overlay = dom.append(body, El::new("div").class("gallery-overlay"));
        let span = dom.append(overlay, El::new("span").text("Accra"));
        let heading = dom.append(overlay, El::new("h4").text("Market"));
        assert_eq!(dom.query_within(&overlay, "h1, h2, h3, h4, h5, h6"), Some(heading));
        assert_eq!(dom.query_within(&overlay, "span"), Some(span));
    }

    #[test]
    fn invalid_selector_matches_nothing() {
        let (dom, _, _, _) = tree();
        assert_eq!(dom.query("a[href"), None);
        assert!(dom.query_all("").is_empty());
    }

    #[test]
    fn text_content_concatenates_descendants() {
        let (dom, menu, _, _) = tree();
        assert_eq!(dom.text_content(&menu), "About");
    }

    #[test]
    fn inner_html_replaces_children() {
        let (mut dom, menu, _, _) = tree();
        dom.set_inner_html(&menu, "<h4>Title</h4><span>Place</span>");
        assert_eq!(dom.text_content(&menu), "TitlePlace");
        assert_eq!(dom.query_all(".nav-link"), vec![]);
        assert_eq!(dom.inner_html(menu), Some("<h4>Title</h4><span>Place</span>"));
    }

    #[test]
    fn class_edits_do_not_duplicate() {
        let (mut dom, menu, _, _) = tree();
        dom.add_class(&menu, "active");
        dom.add_class(&menu, "active");
        assert_eq!(dom.classes(menu), ["active"]);
        dom.remove_class(&menu, "active");
        assert!(!dom.has_class(&menu, "active"));
    }

    #[test]
    fn empty_style_value_removes_property() {
        let (mut dom, menu, _, _) = tree();
        dom.set_style(&menu, "display", "none");
        assert_eq!(dom.style(&menu, "display").as_deref(), Some("none"));
        dom.set_style(&menu, "display", "");
        assert_eq!(dom.style(&menu, "display"), None);

        dom.set_body_style("overflow", "hidden");
        assert_eq!(dom.body_style("overflow"), Some("hidden"));
        dom.set_body_style("overflow", "");
        assert_eq!(dom.body_style("overflow"), None);
    }

    #[test]
    fn form_data_and_reset() {
        let mut dom = MemoryDom::new();
        let body = dom.body();
        let form = dom.append(body, El::new("form").id("contact-form"));
        let name = dom.append(form, El::new("input").attr("name", "firstName"));
        let topic = dom.append(form, El::new("input").attr("name", "subject").attr("value", "General"));
        let message = dom.append(form, El::new("textarea").attr("name", "message"));
        dom.append(form, El::new("button").attr("name", "send").text("Send"));
        dom.append(form, El::new("input").attr("type", "checkbox"));

        dom.set_value(name, "Ama");
        dom.set_value(message, "Hello");
        assert_eq!(
            dom.form_data(&form),
            vec![
                ("firstName".to_string(), "Ama".to_string()),
                ("subject".to_string(), "General".to_string()),
                ("message".to_string(), "Hello".to_string()),
            ]
        );

        dom.set_value(topic, "Tours");
        dom.reset_form(&form);
        assert_eq!(dom.value(name), "");
        assert_eq!(dom.value(topic), "General");
        assert_eq!(dom.value(message), "");
    }

    #[test]
    fn timers_fire_in_due_order_and_can_be_cleared() {
        let mut dom = MemoryDom::new();
        let late = dom.set_timeout(5000);
        let early = dom.set_timeout(1000);
        let cleared = dom.set_timeout(2000);
        dom.clear_timeout(cleared);

        assert_eq!(dom.advance(999), vec![]);
        assert_eq!(dom.advance(1), vec![early]);
        assert_eq!(dom.pending_timers(), 1);
        assert_eq!(dom.advance(10_000), vec![late]);
        assert_eq!(dom.now_ms(), 11_000);
        assert_eq!(dom.pending_timers(), 0);
    }

    #[test]
    fn observe_tracks_registrations() {
        let (mut dom, menu, item, _) = tree();
        let options = ObserverOptions {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        };
        dom.observe(&menu, &options);
        dom.observe(&item, &options);
        dom.observe(&item, &options);
        assert_eq!(dom.observed(), [menu, item]);
        dom.unobserve(&menu);
        assert_eq!(dom.observed(), [item]);
        assert_eq!(dom.observer_options(), Some(&options));
    }
}
