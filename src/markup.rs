//! The contract between the components and the page markup.
//!
//! Components look elements up by the ids and classes below and nothing
//! else. The demo page ([`crate::demo`]) renders every one of them, which
//! makes it the reference for how a real page should be structured.
//!
//! This module also owns the two pieces of markup the components produce
//! themselves: the lightbox caption and the injected `fadeIn` keyframes.

use crate::config::GalleryConfig;
use maud::{Markup, html};

/// Element ids.
pub mod ids {
    pub const NAVBAR: &str = "navbar";
    pub const NAV_TOGGLE: &str = "nav-toggle";
    pub const NAV_MENU: &str = "nav-menu";
    pub const LIGHTBOX: &str = "lightbox";
    pub const LIGHTBOX_IMG: &str = "lightbox-img";
    pub const LIGHTBOX_CAPTION: &str = "lightbox-caption";
    pub const LIGHTBOX_CLOSE: &str = "lightbox-close";
    pub const CONTACT_FORM: &str = "contact-form";
    pub const FORM_SUCCESS: &str = "form-success";
    /// `<script type="application/json">` carrying [`BehaviorConfig`](crate::config::BehaviorConfig).
    pub const CONFIG_BLOCK: &str = "pagewire-config";
}

/// State classes toggled by the components.
pub mod classes {
    pub const ACTIVE: &str = "active";
    pub const SCROLLED: &str = "scrolled";
    pub const VISIBLE: &str = "visible";
}

/// Selectors for element groups.
pub mod selectors {
    pub const NAV_LINK: &str = ".nav-link";
    pub const NAVBAR_CLASS: &str = ".navbar";
    pub const FRAGMENT_ANCHOR: &str = r##"a[href^="#"]"##;
    pub const ANIMATED: &str = ".fade-in, .slide-left, .slide-right";
    pub const FILTER_BUTTON: &str = ".filter-btn";
    pub const GALLERY_ITEM: &str = ".gallery-item";
    pub const CATEGORY_CARD: &str = ".card[data-category]";
    pub const GALLERY_GRID: &str = ".gallery-grid";
    pub const GALLERY_OVERLAY: &str = ".gallery-overlay";
    pub const HEADING: &str = "h1, h2, h3, h4, h5, h6";
}

/// Data attributes.
pub mod attrs {
    pub const FILTER: &str = "data-filter";
    pub const CATEGORY: &str = "data-category";
}

/// Name of the keyframes rule consumed by the gallery filter.
pub const FADE_IN_KEYFRAMES: &str = "fadeIn";

/// Stylesheet injected into the document head at start-up.
pub fn fade_in_keyframes_css() -> String {
    format!(
        r#"@keyframes {FADE_IN_KEYFRAMES} {{
    from {{
        opacity: 0;
        transform: translateY(20px);
    }}
    to {{
        opacity: 1;
        transform: translateY(0);
    }}
}}"#
    )
}

/// Inline `animation` value applied to gallery items that are shown.
///
/// ```
/// let gallery = pagewire::config::GalleryConfig::default();
/// assert_eq!(pagewire::markup::fade_in_animation(&gallery), "fadeIn 0.5s ease forwards");
/// ```
pub fn fade_in_animation(gallery: &GalleryConfig) -> String {
    let seconds = f64::from(gallery.fade_duration_ms) / 1000.0;
    format!("{FADE_IN_KEYFRAMES} {seconds}s ease forwards")
}

/// Caption shown under the enlarged lightbox image. Text is escaped.
pub fn caption_markup(title: &str, location: &str) -> Markup {
    html! {
        h4 { (title) }
        span { (location) }
    }
}
