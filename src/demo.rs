//! Demo page generation.
//!
//! Renders a single `index.html` that carries every element the components
//! look for, so the wasm build can be tried in a browser without writing any
//! markup:
//!
//! ```text
//! demo/
//! ├── index.html     # this page, config embedded as JSON
//! └── pkg/           # `wasm-pack build --target web` output (not generated here)
//! ```
//!
//! The page embeds the resolved [`BehaviorConfig`] in the
//! `#pagewire-config` block, which is where the browser entry point reads it
//! from.

use crate::config::BehaviorConfig;
use crate::markup::ids;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A gallery entry on the demo page.
struct Photo {
    category: &'static str,
    src: &'static str,
    alt: &'static str,
    title: &'static str,
    location: &'static str,
}

const PHOTOS: &[Photo] = &[
    Photo {
        category: "beaches",
        src: "https://picsum.photos/id/1011/800/600",
        alt: "Boat on a calm lake",
        title: "Labadi Beach",
        location: "Accra",
    },
    Photo {
        category: "culture",
        src: "https://picsum.photos/id/1040/800/600",
        alt: "Stone castle walls",
        title: "Cape Coast Castle",
        location: "Central Region",
    },
    Photo {
        category: "wildlife",
        src: "https://picsum.photos/id/1074/800/600",
        alt: "Lioness resting",
        title: "Mole National Park",
        location: "Savannah Region",
    },
    Photo {
        category: "culture",
        src: "https://picsum.photos/id/1059/800/600",
        alt: "Woven cloth",
        title: "Kente Weaving",
        location: "Bonwire",
    },
    Photo {
        category: "beaches",
        src: "https://picsum.photos/id/1015/800/600",
        alt: "River valley",
        title: "Busua Beach",
        location: "Western Region",
    },
];

/// Destination cards as `(category, reveal class, title, blurb)`.
const DESTINATIONS: &[(&str, &str, &str, &str)] = &[
    ("beaches", "fade-in", "Coast", "Palm-lined beaches and fishing villages."),
    ("culture", "slide-left", "Heritage", "Castles, markets and festivals."),
    ("wildlife", "slide-right", "Savannah", "Elephants, antelope and birdlife."),
];

/// Filter tokens shown as buttons after the configured "all" token.
const CATEGORIES: &[&str] = &["beaches", "culture", "wildlife"];

const DEMO_CSS: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; }
.navbar { position: fixed; top: 0; left: 0; right: 0; display: flex; justify-content: space-between; align-items: center; padding: 1rem 2rem; background: transparent; transition: background 0.3s; z-index: 10; }
.navbar.scrolled { background: #fff; box-shadow: 0 2px 8px rgba(0, 0, 0, 0.1); }
.nav-menu { display: flex; gap: 1rem; list-style: none; margin: 0; }
.nav-toggle { display: none; }
@media (max-width: 768px) {
  .nav-toggle { display: block; }
  .nav-menu { display: none; flex-direction: column; }
  .nav-menu.active { display: flex; }
}
section { padding: 6rem 2rem; }
.hero { min-height: 60vh; }
.cards, .gallery-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1rem; }
.fade-in, .slide-left, .slide-right { opacity: 0; transition: opacity 0.6s, transform 0.6s; }
.fade-in { transform: translateY(30px); }
.slide-left { transform: translateX(-50px); }
.slide-right { transform: translateX(50px); }
.visible { opacity: 1; transform: none; }
.filter-btn.active { font-weight: bold; }
.gallery-item { position: relative; cursor: pointer; }
.gallery-item img { width: 100%; display: block; }
.gallery-overlay { position: absolute; bottom: 0; padding: 0.5rem; color: #fff; }
.lightbox { display: none; position: fixed; inset: 0; background: rgba(0, 0, 0, 0.9); align-items: center; justify-content: center; z-index: 20; }
.lightbox.active { display: flex; }
.lightbox-content img { max-width: 90vw; max-height: 80vh; }
#lightbox-close { position: absolute; top: 1rem; right: 2rem; color: #fff; font-size: 2rem; cursor: pointer; }
#lightbox-caption { color: #fff; text-align: center; }
#form-success { display: none; }
"#;

const BOOT_JS: &str = r#"
import init, { filterGallery } from './pkg/pagewire.js';

await init();
for (const link of document.querySelectorAll('[data-gallery-link]')) {
  link.addEventListener('click', () => filterGallery(link.dataset.galleryLink));
}
"#;

/// Write `index.html` into `output_dir`, creating it if needed.
pub fn write_demo(output_dir: &Path, config: &BehaviorConfig) -> Result<PathBuf, DemoError> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join("index.html");
    fs::write(&path, render_demo(config)?.into_string())?;
    Ok(path)
}

/// Render the demo page.
pub fn render_demo(config: &BehaviorConfig) -> Result<Markup, DemoError> {
    let config_json = embedded_config_json(config)?;
    let content = html! {
        (render_navbar())
        (render_hero())
        (render_destinations())
        (render_gallery(&config.gallery.all_token))
        (render_lightbox())
        (render_contact())
        (render_footer())
    };
    Ok(base_document("Discover Ghana", &config_json, content))
}

/// Config as JSON that is safe inside a `<script>` element.
fn embedded_config_json(config: &BehaviorConfig) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(config).map(|json| json.replace("</", "<\\/"))
}

fn base_document(title: &str, config_json: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(DEMO_CSS)) }
                script type="application/json" id=(ids::CONFIG_BLOCK) {
                    (PreEscaped(config_json))
                }
            }
            body {
                (content)
                script type="module" { (PreEscaped(BOOT_JS)) }
            }
        }
    }
}

fn render_navbar() -> Markup {
    html! {
        nav.navbar id=(ids::NAVBAR) {
            a.logo href="#home" { "Discover Ghana" }
            button.nav-toggle id=(ids::NAV_TOGGLE) type="button" aria-label="Menu" {
                span.hamburger {}
                span.hamburger {}
                span.hamburger {}
            }
            ul.nav-menu id=(ids::NAV_MENU) {
                li { a.nav-link href="#home" { "Home" } }
                li { a.nav-link href="#destinations" { "Destinations" } }
                li { a.nav-link href="#gallery" { "Gallery" } }
                li { a.nav-link href="#contact" { "Contact" } }
            }
        }
    }
}

fn render_hero() -> Markup {
    html! {
        section.hero id="home" {
            h1.fade-in { "Akwaaba" }
            p.fade-in { "Beaches, forts and national parks along the Gold Coast." }
            a.btn href="#destinations" { span { "Explore destinations" } }
        }
    }
}

fn render_destinations() -> Markup {
    html! {
        section id="destinations" {
            h2 { "Destinations" }
            div.cards {
                @for (category, reveal, title, blurb) in DESTINATIONS {
                    div class={ "card " (reveal) } data-category=(category) {
                        h3 { (title) }
                        p { (blurb) }
                    }
                }
            }
        }
    }
}

fn render_gallery(all_token: &str) -> Markup {
    html! {
        section id="gallery" {
            h2 { "Gallery" }
            div.filters {
                button.filter-btn.active type="button" data-filter=(all_token) { "All" }
                @for category in CATEGORIES {
                    button.filter-btn type="button" data-filter=(category) { (category) }
                }
            }
            div.gallery-grid {
                @for photo in PHOTOS {
                    div.gallery-item data-category=(photo.category) {
                        img src=(photo.src) alt=(photo.alt) loading="lazy";
                        div.gallery-overlay {
                            h4 { (photo.title) }
                            span { (photo.location) }
                        }
                    }
                }
            }
        }
    }
}

fn render_lightbox() -> Markup {
    html! {
        div.lightbox id=(ids::LIGHTBOX) {
            span id=(ids::LIGHTBOX_CLOSE) { (PreEscaped("&times;")) }
            div.lightbox-content {
                img id=(ids::LIGHTBOX_IMG) src="" alt="";
                div id=(ids::LIGHTBOX_CAPTION) {}
            }
        }
    }
}

fn render_contact() -> Markup {
    html! {
        section id="contact" {
            h2.slide-left { "Plan your trip" }
            form id=(ids::CONTACT_FORM) novalidate {
                input type="text" name="firstName" placeholder="First name";
                input type="text" name="lastName" placeholder="Last name";
                input type="email" name="email" placeholder="Email";
                input type="text" name="subject" placeholder="Subject";
                textarea name="message" rows="5" placeholder="Message" {}
                button type="submit" { "Send" }
            }
            div id=(ids::FORM_SUCCESS) {
                h3 { "Thank you!" }
                p { "We will get back to you shortly." }
            }
        }
    }
}

fn render_footer() -> Markup {
    html! {
        footer {
            h4 { "Explore" }
            ul {
                @for category in CATEGORIES {
                    li {
                        button type="button" data-gallery-link=(category) { (category) }
                    }
                }
            }
        }
    }
}
