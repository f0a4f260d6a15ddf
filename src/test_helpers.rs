//! Shared test fixture: a complete sample page in a [`MemoryDom`].
//!
//! The page carries every element of the markup contract, laid out the way
//! the demo page renders it:
//!
//! ```text
//! body
//! ├── nav#navbar.navbar (80px tall)
//! │   ├── button#nav-toggle > span.hamburger
//! │   └── ul#nav-menu > li > a.nav-link[href=#destinations|#gallery|#contact]
//! ├── section.hero > a.btn[href=#gallery] > span, a[href=#], a[href=#missing]
//! ├── section#destinations (top 600) > div.card[data-category] × 3 (.fade-in/.slide-*)
//! ├── section#gallery (top 1400)
//! │   ├── div.filters > button.filter-btn[data-filter=all|beaches|culture|wildlife]
//! │   └── div.gallery-grid > div.gallery-item[data-category] × 4
//! │       ├── img[src, alt]
//! │       └── div.gallery-overlay > h4, span
//! ├── div#lightbox > div.lightbox-content > span#lightbox-close, img#lightbox-img, div#lightbox-caption
//! └── section#contact (top 2600)
//!     ├── form#contact-form > input[name] × 4, textarea[name=message], button
//!     └── div#form-success
//! ```

use crate::dom::memory::{El, MemoryDom, NodeId};

pub struct SamplePage {
    pub dom: MemoryDom,
    pub navbar: NodeId,
    pub nav_toggle: NodeId,
    pub nav_toggle_icon: NodeId,
    pub nav_menu: NodeId,
    pub nav_links: Vec<NodeId>,
    pub hero_cta_label: NodeId,
    pub bare_anchor: NodeId,
    pub dangling_anchor: NodeId,
    pub cards: Vec<NodeId>,
    pub filter_buttons: Vec<NodeId>,
    pub gallery_grid: NodeId,
    pub gallery_items: Vec<NodeId>,
    pub lightbox: NodeId,
    pub lightbox_content: NodeId,
    pub lightbox_img: NodeId,
    pub lightbox_caption: NodeId,
    pub lightbox_close: NodeId,
    pub form: NodeId,
    pub first_name: NodeId,
    pub last_name: NodeId,
    pub email: NodeId,
    pub subject: NodeId,
    pub message: NodeId,
    pub form_success: NodeId,
}

/// Gallery items as `(category, image src, alt, title, location)`.
pub const GALLERY: [(&str, &str, &str, &str, &str); 4] = [
    ("beaches", "img/labadi.jpg", "Labadi Beach", "Labadi Beach", "Accra"),
    ("culture", "img/kente.jpg", "Kente weaving", "Kente Weaving", "Bonwire"),
    ("wildlife", "img/mole.jpg", "Elephants at Mole", "Mole National Park", "Savannah Region"),
    ("culture", "img/castle.jpg", "Cape Coast Castle", "Cape Coast Castle", "Central Region"),
];

pub fn sample_page() -> SamplePage {
    sample_page_in(MemoryDom::new())
}

/// Build the sample page into `dom`, e.g. one without intersection support.
pub fn sample_page_in(mut dom: MemoryDom) -> SamplePage {
    let body = dom.body();

    let navbar = dom.append(body, El::new("nav").id("navbar").class("navbar").height(80.0));
    let nav_toggle = dom.append(navbar, El::new("button").id("nav-toggle").class("nav-toggle"));
    let nav_toggle_icon = dom.append(nav_toggle, El::new("span").class("hamburger"));
    let nav_menu = dom.append(navbar, El::new("ul").id("nav-menu").class("nav-menu"));
    let nav_links: Vec<NodeId> = ["destinations", "gallery", "contact"]
        .iter()
        .map(|target| {
            let li = dom.append(nav_menu, El::new("li"));
            dom.append(
                li,
                El::new("a")
                    .class("nav-link")
                    .attr("href", &format!("#{target}"))
                    .text(target),
            )
        })
        .collect();

    let hero = dom.append(body, El::new("section").class("hero").top(0.0).height(600.0));
    let hero_cta = dom.append(hero, El::new("a").class("btn").attr("href", "#gallery"));
    let hero_cta_label = dom.append(hero_cta, El::new("span").text("Explore"));
    let bare_anchor = dom.append(hero, El::new("a").attr("href", "#").text("Top"));
    let dangling_anchor = dom.append(hero, El::new("a").attr("href", "#missing").text("Nowhere"));

    let destinations = dom.append(body, El::new("section").id("destinations").top(600.0));
    let cards: Vec<NodeId> = [
        ("beaches", "fade-in"),
        ("culture", "slide-left"),
        ("wildlife", "slide-right"),
    ]
    .iter()
    .map(|(category, animation)| {
        dom.append(
            destinations,
            El::new("div")
                .class("card")
                .class(animation)
                .attr("data-category", category),
        )
    })
    .collect();

    let gallery_section = dom.append(body, El::new("section").id("gallery").top(1400.0));
    let filters = dom.append(gallery_section, El::new("div").class("filters"));
    let filter_buttons: Vec<NodeId> = ["all", "beaches", "culture", "wildlife"]
        .iter()
        .map(|token| {
            dom.append(
                filters,
                El::new("button")
                    .class("filter-btn")
                    .attr("data-filter", token)
                    .text(token),
            )
        })
        .collect();
    let gallery_grid = dom.append(gallery_section, El::new("div").class("gallery-grid"));
    let gallery_items: Vec<NodeId> = GALLERY
        .iter()
        .map(|(category, src, alt, title, location)| {
            let item = dom.append(
                gallery_grid,
                El::new("div")
                    .class("gallery-item")
                    .attr("data-category", category),
            );
            dom.append(item, El::new("img").attr("src", src).attr("alt", alt));
            let overlay = dom.append(item, El::new("div").class("gallery-overlay"));
            dom.append(overlay, El::new("h4").text(title));
            dom.append(overlay, El::new("span").text(location));
            item
        })
        .collect();

    let lightbox = dom.append(body, El::new("div").id("lightbox").class("lightbox"));
    let lightbox_content = dom.append(lightbox, El::new("div").class("lightbox-content"));
    let lightbox_close = dom.append(lightbox_content, El::new("span").id("lightbox-close").text("×"));
    let lightbox_img = dom.append(lightbox_content, El::new("img").id("lightbox-img"));
    let lightbox_caption = dom.append(lightbox_content, El::new("div").id("lightbox-caption"));

    let contact_section = dom.append(body, El::new("section").id("contact").top(2600.0));
    let form = dom.append(contact_section, El::new("form").id("contact-form"));
    let field = |dom: &mut MemoryDom, tag: &str, name: &str| {
        dom.append(form, El::new(tag).attr("name", name))
    };
    let first_name = field(&mut dom, "input", "firstName");
    let last_name = field(&mut dom, "input", "lastName");
    let email = field(&mut dom, "input", "email");
    let subject = field(&mut dom, "input", "subject");
    let message = field(&mut dom, "textarea", "message");
    dom.append(form, El::new("button").attr("type", "submit").text("Send"));
    let form_success = dom.append(contact_section, El::new("div").id("form-success"));

    SamplePage {
        dom,
        navbar,
        nav_toggle,
        nav_toggle_icon,
        nav_menu,
        nav_links,
        hero_cta_label,
        bare_anchor,
        dangling_anchor,
        cards,
        filter_buttons,
        gallery_grid,
        gallery_items,
        lightbox,
        lightbox_content,
        lightbox_img,
        lightbox_caption,
        lightbox_close,
        form,
        first_name,
        last_name,
        email,
        subject,
        message,
        form_success,
    }
}

impl SamplePage {
    /// Fill the contact form with a valid submission.
    pub fn fill_valid_form(&mut self) {
        self.dom.set_value(self.first_name, "Ama");
        self.dom.set_value(self.last_name, "Owusu");
        self.dom.set_value(self.email, "ama@example.com");
        self.dom.set_value(self.subject, "Hi");
        self.dom.set_value(self.message, "Hello");
    }

    /// Display value of every gallery item, in order.
    pub fn item_display(&self) -> Vec<Option<String>> {
        use crate::dom::Dom;
        self.gallery_items
            .iter()
            .map(|item| self.dom.style(item, "display"))
            .collect()
    }
}
