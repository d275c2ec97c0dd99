//! OpenState Site Generator
//!
//! Turns the assembled pages into a deployable static site.
//!
//! # Modules
//!
//! - [`template`] - page shell templates with variable interpolation
//! - [`html`] - full HTML documents from assembled pages
//! - [`sitemap`] - XML sitemap generation
//! - [`assets`] - static asset copying with optional fingerprinting
//! - [`build`] - build orchestration

pub mod assets;
pub mod build;
pub mod html;
pub mod sitemap;
pub mod template;

pub use assets::{AssetManifest, AssetProcessor};
pub use build::{BrokenRef, BuildError, BuildStats, Builder, broken_references};
pub use html::HtmlGenerator;
pub use sitemap::SitemapGenerator;
pub use template::{Template, TemplateContext, TemplateRegistry};
