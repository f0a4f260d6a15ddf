//! Browser backend over `web-sys`, plus the wasm entry points.
//!
//! The site lives in a thread-local slot. Every listener, observer callback
//! and timer re-enters it through [`with_site`], which refuses to dispatch
//! while the site is already borrowed instead of panicking.

use super::{Dom, Event, ObserverOptions, TimerHandle};
use crate::config::BehaviorConfig;
use crate::markup::ids;
use crate::site::Site;
use std::cell::RefCell;
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CssStyleDeclaration, Document, Element, EventTarget, FormData, HtmlElement, HtmlFormElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent,
    NodeList, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window,
};

thread_local! {
    static SITE: RefCell<Option<Site<WebDom>>> = const { RefCell::new(None) };
}

/// Run `f` against the live site. `None` before boot, or when the site is
/// busy with another event.
fn with_site<R>(f: impl FnOnce(&mut Site<WebDom>) -> R) -> Option<R> {
    SITE.with(|slot| {
        let Ok(mut slot) = slot.try_borrow_mut() else {
            log::warn!("pagewire: site busy, event dropped");
            return None;
        };
        slot.as_mut().map(f)
    })
}

/// Entry point run when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    if document.ready_state() == "loading" {
        let callback = Closure::once_into_js(|| {
            if let Err(err) = boot() {
                log::error!("pagewire: boot failed: {err:?}");
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())?;
        Ok(())
    } else {
        boot()
    }
}

/// Apply a gallery filter from outside the page's own buttons, e.g. footer
/// links. Returns `false` when no button carries `category`.
#[wasm_bindgen(js_name = filterGallery)]
pub fn filter_gallery(category: &str) -> bool {
    with_site(|site| site.filter_gallery(category)).unwrap_or(false)
}

fn boot() -> Result<(), JsValue> {
    let dom = WebDom::new()?;
    let config = dom.embedded_config();
    let window = dom.window.clone();
    let document = dom.document.clone();

    let site = Site::new(dom, config);
    SITE.with(|slot| *slot.borrow_mut() = Some(site));

    listen::<web_sys::Event>(&document, "click", |event| {
        let target = event.target()?.dyn_into::<Element>().ok()?;
        Some(Event::Click { target })
    })?;
    listen::<KeyboardEvent>(&document, "keydown", |event| {
        Some(Event::KeyDown { key: event.key() })
    })?;
    listen::<web_sys::Event>(&document, "submit", |event| {
        let form = event.target()?.dyn_into::<Element>().ok()?;
        Some(Event::Submit { form })
    })?;
    let scrolled = window.clone();
    listen::<web_sys::Event>(&window, "scroll", move |_| {
        let scroll_y = scrolled.scroll_y().ok()?;
        Some(Event::Scroll { scroll_y })
    })?;

    log::info!("pagewire: ready");
    Ok(())
}

/// Forward native `kind` events on `target` to the site, translated by
/// `translate`. The listener lives as long as the page.
fn listen<E: JsCast + 'static>(
    target: &EventTarget,
    kind: &str,
    translate: impl Fn(&E) -> Option<Event<Element>> + 'static,
) -> Result<(), JsValue> {
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |raw: web_sys::Event| {
        let Some(event) = raw.dyn_ref::<E>().and_then(|e| translate(e)) else {
            return;
        };
        let outcome = with_site(|site| site.dispatch(event));
        if outcome.is_some_and(|o| o.prevent_default) {
            raw.prevent_default();
        }
    });
    target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

fn elements(list: Result<NodeList, JsValue>) -> Vec<Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn inline_style(node: &Element) -> Option<CssStyleDeclaration> {
    node.dyn_ref::<HtmlElement>().map(HtmlElement::style)
}

fn write_style(style: &CssStyleDeclaration, property: &str, value: &str) {
    let result = if value.is_empty() {
        style.remove_property(property).map(drop)
    } else {
        style.set_property(property, value)
    };
    if let Err(err) = result {
        log::warn!("pagewire: style {property}: {err:?}");
    }
}

/// The live document.
pub struct WebDom {
    window: Window,
    document: Document,
    observer: Option<IntersectionObserver>,
    /// Our handle id to the browser's timeout id.
    timers: HashMap<u32, i32>,
    next_timer: u32,
}

impl WebDom {
    pub fn new() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        Ok(Self {
            window,
            document,
            observer: None,
            timers: HashMap::new(),
            next_timer: 1,
        })
    }

    /// Config from the page's JSON block, defaults when absent or invalid.
    pub fn embedded_config(&self) -> BehaviorConfig {
        let Some(block) = self.document.get_element_by_id(ids::CONFIG_BLOCK) else {
            return BehaviorConfig::default();
        };
        let json = block.text_content().unwrap_or_default();
        BehaviorConfig::from_json(&json).unwrap_or_else(|err| {
            log::warn!("pagewire: ignoring #{}: {err}", ids::CONFIG_BLOCK);
            BehaviorConfig::default()
        })
    }

    fn observer(&mut self, options: &ObserverOptions) -> Option<&IntersectionObserver> {
        if self.observer.is_none() {
            let callback = Closure::<dyn FnMut(js_sys::Array)>::new(|entries: js_sys::Array| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let event = Event::Intersect {
                        target: entry.target(),
                        is_intersecting: entry.is_intersecting(),
                    };
                    with_site(|site| site.dispatch(event));
                }
            });
            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(options.threshold));
            init.set_root_margin(&options.root_margin);
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => {
                    callback.forget();
                    self.observer = Some(observer);
                }
                Err(err) => log::warn!("pagewire: intersection observer unavailable: {err:?}"),
            }
        }
        self.observer.as_ref()
    }
}

impl Dom for WebDom {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        elements(self.document.query_selector_all(selector))
    }

    fn query_within(&self, scope: &Element, selector: &str) -> Option<Element> {
        scope.query_selector(selector).ok().flatten()
    }

    fn query_all_within(&self, scope: &Element, selector: &str) -> Vec<Element> {
        elements(scope.query_selector_all(selector))
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        ancestor.contains(Some(node))
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&mut self, node: &Element, class: &str) {
        if let Err(err) = node.class_list().add_1(class) {
            log::warn!("pagewire: add class {class}: {err:?}");
        }
    }

    fn remove_class(&mut self, node: &Element, class: &str) {
        if let Err(err) = node.class_list().remove_1(class) {
            log::warn!("pagewire: remove class {class}: {err:?}");
        }
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) {
        if let Err(err) = node.set_attribute(name, value) {
            log::warn!("pagewire: set {name}: {err:?}");
        }
    }

    fn style(&self, node: &Element, property: &str) -> Option<String> {
        inline_style(node)?
            .get_property_value(property)
            .ok()
            .filter(|value| !value.is_empty())
    }

    fn set_style(&mut self, node: &Element, property: &str, value: &str) {
        if let Some(style) = inline_style(node) {
            write_style(&style, property, value);
        }
    }

    fn set_body_style(&mut self, property: &str, value: &str) {
        if let Some(body) = self.document.body() {
            write_style(&body.style(), property, value);
        }
    }

    fn text_content(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_inner_html(&mut self, node: &Element, html: &str) {
        node.set_inner_html(html);
    }

    fn offset_top(&self, node: &Element) -> f64 {
        node.dyn_ref::<HtmlElement>()
            .map(|el| f64::from(el.offset_top()))
            .unwrap_or(0.0)
    }

    fn offset_height(&self, node: &Element) -> f64 {
        node.dyn_ref::<HtmlElement>()
            .map(|el| f64::from(el.offset_height()))
            .unwrap_or(0.0)
    }

    fn scroll_to(&mut self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_with_scroll_to_options(&options);
    }

    fn scroll_into_view(&mut self, node: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        node.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn form_data(&self, form: &Element) -> Vec<(String, String)> {
        let Some(form) = form.dyn_ref::<HtmlFormElement>() else {
            return Vec::new();
        };
        let Ok(data) = FormData::new_with_form(form) else {
            return Vec::new();
        };
        let Ok(Some(entries)) = js_sys::try_iter(&data) else {
            return Vec::new();
        };
        entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let pair = js_sys::Array::from(&entry);
                // File inputs yield non-string values and are skipped.
                Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
            })
            .collect()
    }

    fn reset_form(&mut self, form: &Element) {
        if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }

    fn alert(&mut self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            log::warn!("pagewire: alert failed: {err:?}");
        }
    }

    fn set_timeout(&mut self, delay_ms: u32) -> TimerHandle {
        let handle = TimerHandle(self.next_timer);
        self.next_timer += 1;

        let callback = Closure::once_into_js(move || {
            with_site(|site| {
                site.dom_mut().timers.remove(&handle.0);
                site.dispatch(Event::Timer(handle));
            });
        });
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
        {
            Ok(id) => {
                self.timers.insert(handle.0, id);
            }
            Err(err) => log::warn!("pagewire: setTimeout failed: {err:?}"),
        }
        handle
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        if let Some(id) = self.timers.remove(&handle.0) {
            self.window.clear_timeout_with_handle(id);
        }
    }

    fn supports_intersection_observer(&self) -> bool {
        js_sys::Reflect::has(&self.window, &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false)
    }

    fn observe(&mut self, node: &Element, options: &ObserverOptions) {
        if let Some(observer) = self.observer(options) {
            observer.observe(node);
        }
    }

    fn unobserve(&mut self, node: &Element) {
        if let Some(observer) = &self.observer {
            observer.unobserve(node);
        }
    }

    fn inject_style(&mut self, css: &str) {
        let Ok(style) = self.document.create_element("style") else {
            return;
        };
        style.set_text_content(Some(css));
        if let Some(head) = self.document.head() {
            if let Err(err) = head.append_child(&style) {
                log::warn!("pagewire: style injection failed: {err:?}");
            }
        }
    }
}
