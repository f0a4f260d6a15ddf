//! # pagewire
//!
//! Client-side behavior for a static informational site, written once in Rust
//! and run in the browser as WebAssembly: a mobile navigation menu, smooth
//! in-page scrolling below a fixed navbar, one-shot entrance animations, a
//! category filter for a photo gallery, a lightbox, and a contact form that
//! validates and pretends to send.
//!
//! # Architecture: Components Over a Document Trait
//!
//! ```text
//!   browser events ──▶ dom::web ──▶ Site::dispatch ──▶ components ──▶ WebDom
//!   test events    ──────────────▶ Site::dispatch ──▶ components ──▶ MemoryDom
//! ```
//!
//! Every behavior is a component that looks up its elements once through the
//! [`dom::Dom`] trait and afterwards reacts to [`dom::Event`]s. Components
//! never hold browser types, so the exact same code runs natively against
//! [`dom::memory::MemoryDom`] in `cargo test` and against `web-sys` in the
//! browser.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`site`] | [`Site`]: runs every initializer, fans events out to the components |
//! | [`components`] | The six behaviors: navigation, scroll effects, reveal, gallery, lightbox, form |
//! | [`dom`] | The [`dom::Dom`] trait, events, the in-memory backend and (wasm32) the browser backend |
//! | [`markup`] | Ids, classes and selectors the page must use; caption and keyframes markup |
//! | [`config`] | `pagewire.toml` / embedded JSON config loading, merging and validation |
//! | [`demo`] | Demo page rendering that exercises the whole markup contract |
//!
//! # Design Decisions
//!
//! ## Handles Acquired Once
//!
//! Components resolve their elements at initialization and keep the handles.
//! A page missing an element simply disables the behavior that needs it,
//! without errors. Only attributes that can change at runtime (an anchor's
//! `href`, the navbar's height) are read again per event.
//!
//! ## Explicit Timers
//!
//! The only deferred work, the contact form reset, goes through
//! [`dom::Dom::set_timeout`] and comes back as [`dom::Event::Timer`]. The
//! form keeps the handle so a second submission can cancel the first reset,
//! and the in-memory backend advances time only when a test asks it to.
//!
//! ## Maud For Produced Markup
//!
//! The lightbox caption is the only HTML the components write. It is built
//! with [Maud](https://maud.lambda.xyz/), so gallery titles are escaped
//! rather than interpolated into a string.

pub mod components;
pub mod config;
pub mod demo;
pub mod dom;
pub mod markup;
pub mod site;

pub use site::Site;

#[cfg(test)]
pub(crate) mod test_helpers;
