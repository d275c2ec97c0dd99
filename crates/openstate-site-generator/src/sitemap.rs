//! Sitemap generation.
//!
//! One `<url>` entry per exported route, using the change frequency,
//! priority and trailing-slash policy from [`SitemapConfig`].
//!
//! [`SitemapConfig`]: openstate_site_core::config::SitemapConfig

use std::io::Write;

use chrono::{DateTime, Utc};
use openstate_site_core::{Config, config::ChangeFreq};
use openstate_site_ui::Route;
use thiserror::Error;
use tracing::debug;

/// Sitemap generation errors.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sitemap operations.
pub type Result<T> = std::result::Result<T, SitemapError>;

/// A sitemap URL entry.
#[derive(Debug, Clone)]
pub struct SitemapUrl {
    /// Absolute location.
    pub loc: String,

    /// Last modification date.
    pub lastmod: Option<DateTime<Utc>>,

    pub changefreq: ChangeFreq,

    /// Priority (0.0 to 1.0).
    pub priority: f32,
}

/// Sitemap generator.
#[derive(Debug)]
pub struct SitemapGenerator {
    config: Config,
    lastmod: Option<DateTime<Utc>>,
}

impl SitemapGenerator {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            lastmod: None,
        }
    }

    /// Stamp every entry with a modification date.
    #[must_use]
    pub fn with_lastmod(mut self, lastmod: DateTime<Utc>) -> Self {
        self.lastmod = Some(lastmod);
        self
    }

    /// Generate sitemap XML for the given routes.
    pub fn generate(&self, routes: &[Route]) -> String {
        debug!(count = routes.len(), "generating sitemap");

        let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
        xml.push('\n');

        for route in routes {
            xml.push_str(&url_to_xml(&self.route_to_url(*route)));
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Build the entry for one route.
    #[must_use]
    pub fn route_to_url(&self, route: Route) -> SitemapUrl {
        let sitemap = &self.config.sitemap;
        let mut loc = self.config.url_for(route.path());
        if sitemap.trailing_slash {
            if !loc.ends_with('/') {
                loc.push('/');
            }
        } else if route != Route::Home {
            while loc.ends_with('/') {
                loc.pop();
            }
        }

        SitemapUrl {
            loc,
            lastmod: self.lastmod,
            changefreq: sitemap.changefreq,
            priority: sitemap.priority,
        }
    }

    /// Write sitemap to a writer.
    pub fn write_to<W: Write>(&self, routes: &[Route], writer: &mut W) -> Result<()> {
        writer.write_all(self.generate(routes).as_bytes())?;
        Ok(())
    }
}

fn url_to_xml(url: &SitemapUrl) -> String {
    let mut xml = String::from("  <url>\n");
    xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&url.loc)));

    if let Some(lastmod) = &url.lastmod {
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            lastmod.format("%Y-%m-%d")
        ));
    }

    xml.push_str(&format!(
        "    <changefreq>{}</changefreq>\n",
        url.changefreq.as_str()
    ));
    xml.push_str(&format!("    <priority>{:.1}</priority>\n", url.priority));
    xml.push_str("  </url>\n");
    xml
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
