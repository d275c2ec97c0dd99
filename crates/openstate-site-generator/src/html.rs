//! Page shell.
//!
//! Wraps an assembled [`Page`] into a complete HTML document: head metadata
//! from the page descriptor, the navbar from configuration and the body tree.

use std::path::{Path, PathBuf};

use openstate_site_core::{
    Config,
    config::{NavItem, NavPosition},
};
use openstate_site_ui::{
    Element, Node, Page, Resolved, Route, UrlResolver, primitives::placeholder,
};
use thiserror::Error;
use tracing::{debug, warn};

use crate::template::{Template, TemplateContext, TemplateError, TemplateRegistry};

/// HTML generation errors.
#[derive(Debug, Error)]
pub enum HtmlError {
    /// Template error.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
}

/// Result type for HTML generation.
pub type Result<T> = std::result::Result<T, HtmlError>;

/// HTML document generator.
#[derive(Debug)]
pub struct HtmlGenerator {
    templates: TemplateRegistry,
    config: Config,
}

impl HtmlGenerator {
    /// Create a generator with the built-in shell.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            templates: TemplateRegistry::new(),
            config,
        }
    }

    /// Register a custom template, e.g. a replacement `base` shell.
    pub fn register_template(&mut self, template: Template) {
        self.templates.register(template);
    }

    /// Generate the full document for an assembled page.
    pub fn generate_page(&self, page: &Page, resolver: &UrlResolver) -> Result<String> {
        debug!(route = page.route.path(), "generating HTML for page");

        let descriptor = &page.descriptor;
        let mut ctx = TemplateContext::new()
            .with_var("lang", &self.config.site.language)
            .with_var("title", self.document_title(&descriptor.title))
            .with_var("canonical_url", self.config.url_for(page.route.path()))
            .with_var("navbar", self.navbar(resolver).to_html())
            .with_var("content", page.body.to_html());

        if !descriptor.description.is_empty() {
            ctx.insert("description", &descriptor.description);
        }

        if !descriptor.keywords.is_empty() {
            ctx.insert("keywords", descriptor.keywords.join(", "));
        }

        if let Some(image) = &descriptor.meta_image {
            match resolver.asset(image) {
                Resolved::Url(path) => {
                    let url = self.config.absolute_url(&path);
                    let tags: Node = Node::Fragment(vec![
                        meta("property", "og:image", &url),
                        meta("name", "twitter:image", &url),
                        meta("name", "twitter:card", "summary_large_image"),
                    ]);
                    ctx.insert("meta_image_tags", tags.to_html());
                }
                Resolved::Broken(reference) => {
                    warn!(%reference, "social preview image not found, omitting meta tags");
                }
            }
        }

        if let Some(favicon) = &self.config.site.favicon {
            if let Resolved::Url(href) = resolver.asset(favicon) {
                let link: Node = Element::new("link")
                    .attr("rel", "icon")
                    .attr("href", href)
                    .into();
                ctx.insert("favicon_link", link.to_html());
            }
        }

        Ok(self.templates.render("base", &ctx)?)
    }

    /// References the document for `page` cannot resolve: navbar and body
    /// placeholders first, then the social preview image.
    #[must_use]
    pub fn unresolved_references(&self, page: &Page, resolver: &UrlResolver) -> Vec<String> {
        let navbar = self.navbar(resolver);
        let mut references: Vec<String> = [&navbar, &page.body]
            .into_iter()
            .flat_map(|node| node.find_by_class("broken-ref"))
            .filter_map(|el| el.get_attr("data-broken-ref").map(str::to_string))
            .collect();

        if let Some(Resolved::Broken(reference)) = page
            .descriptor
            .meta_image
            .as_deref()
            .map(|image| resolver.asset(image))
        {
            references.push(reference);
        }
        references
    }

    /// `"{title} | {site}"`, or the site title alone when they match.
    #[must_use]
    pub fn document_title(&self, title: &str) -> String {
        let site = &self.config.site.title;
        if title.is_empty() || title == site {
            site.clone()
        } else {
            format!("{title} | {site}")
        }
    }

    /// Navigation bar from configuration.
    pub fn navbar(&self, resolver: &UrlResolver) -> Node {
        let navbar = &self.config.navbar;
        let mut nav = Element::new("nav").class("navbar");

        let home = match resolver.link("/") {
            Resolved::Url(href) | Resolved::Broken(href) => href,
        };
        let mut brand = Element::new("a").class("navbar__brand").attr("href", home);
        if let Some(logo) = &navbar.logo {
            brand = brand.child(match resolver.asset(&logo.src) {
                Resolved::Url(src) => Element::new("img")
                    .class("navbar__logo")
                    .attr("src", src)
                    .attr("alt", logo.alt.as_str())
                    .into(),
                Resolved::Broken(reference) => placeholder("navbar", &reference),
            });
        } else {
            brand = brand.child(self.config.site.title.as_str());
        }
        nav = nav.child(brand);

        for position in [NavPosition::Left, NavPosition::Right] {
            let links: Vec<Node> = navbar
                .items
                .iter()
                .filter(|item| item.position == position)
                .map(|item| nav_link(item, resolver))
                .collect();
            if links.is_empty() {
                continue;
            }
            let side = match position {
                NavPosition::Left => "navbar__items--left",
                NavPosition::Right => "navbar__items--right",
            };
            nav = nav.child(
                Element::new("div")
                    .class("navbar__items")
                    .class(side)
                    .children(links),
            );
        }

        nav.into()
    }

    /// File a route is written to.
    #[must_use]
    pub fn output_path(&self, route: Route, output_dir: &Path) -> PathBuf {
        let path = route.path().trim_matches('/');
        if path.is_empty() {
            output_dir.join("index.html")
        } else {
            output_dir.join(path).join("index.html")
        }
    }
}

fn meta(key: &str, name: &str, content: &str) -> Node {
    Element::new("meta")
        .attr(key, name)
        .attr("content", content)
        .into()
}

fn nav_link(item: &NavItem, resolver: &UrlResolver) -> Node {
    match resolver.link(&item.to) {
        Resolved::Url(href) => {
            let mut link = Element::new("a").class("navbar__link").attr("href", href.as_str());
            if UrlResolver::is_external(&href) {
                link = link
                    .attr("target", "_blank")
                    .attr("rel", "noopener noreferrer");
            }
            link.child(item.label.as_str()).into()
        }
        Resolved::Broken(reference) => placeholder("navbar", &reference),
    }
}

#[cfg(test)]
mod tests {
    use openstate_site_ui::{RenderContext, assemble};

    use super::*;

    fn test_config() -> Config {
        Config::from_toml_str(
            r#"
[site]
title = "OpenState"
tagline = "A task runner for \"modern\" workflows."
url = "https://example.com"
favicon = "img/favicon.png"
keywords = ["task runner", "state machines"]
image = "img-why-boilerplate@2x.png"

[navbar]
logo = { alt = "OpenState Logo", src = "img/logo.svg" }

[[navbar.items]]
to = "/"
label = "Overview"

[[navbar.items]]
to = "https://github.com/walkergriggs/openstate"
label = "Github"
"#,
        )
        .unwrap()
    }

    fn render(route: Route) -> String {
        let config = test_config();
        let resolver = UrlResolver::new(&config);
        let page = assemble(route, &RenderContext::new(&config, &resolver));
        HtmlGenerator::new(config)
            .generate_page(&page, &resolver)
            .unwrap()
    }

    #[test]
    fn test_generate_home_page() {
        let html = render(Route::Home);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains("<title>OpenState</title>"));
        assert!(html.contains(
            r#"<meta name="description" content="A task runner for &quot;modern&quot; workflows.">"#
        ));
        assert!(html.contains(r#"content="task runner, state machines""#));
        assert!(html.contains(
            r#"<meta property="og:image" content="https://example.com/img/img-why-boilerplate@2x.png">"#
        ));
        assert!(html.contains(r#"<link rel="icon" href="/img/favicon.png">"#));
        assert!(html.contains(r#"<link rel="canonical" href="https://example.com/">"#));
        assert!(html.contains(r#"class="shift-intro""#));
        assert!(html.contains(r#"class="shift-foot""#));
    }

    #[test]
    fn test_generate_community_page_title() {
        let html = render(Route::Community);
        assert!(html.contains("<title>Get Started | OpenState</title>"));
        assert!(html.contains(r#"href="https://example.com/community""#));
        assert!(html.contains("Community Resources"));
    }

    #[test]
    fn test_navbar() {
        let config = test_config();
        let resolver = UrlResolver::new(&config);
        let navbar = HtmlGenerator::new(config).navbar(&resolver);

        let logo = navbar.find_by_class("navbar__logo");
        assert_eq!(logo[0].get_attr("src"), Some("/img/logo.svg"));

        let links = navbar.find_by_class("navbar__link");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].text_content(), "Overview");
        assert_eq!(links[1].get_attr("target"), Some("_blank"));
        assert_eq!(navbar.find_by_class("navbar__items--right").len(), 1);
        assert!(navbar.find_by_class("navbar__items--left").is_empty());
    }

    #[test]
    fn test_meta_image_uses_deployed_path() {
        let config = test_config();
        let resolver = UrlResolver::new(&config).with_manifest([
            ("img/img-why-boilerplate@2x.png", "img/img-why-boilerplate@2x.1a2b3c4d.png"),
            ("img/logo.svg", "img/logo.svg"),
        ]);
        let page = assemble(Route::Community, &RenderContext::new(&config, &resolver));
        let html = HtmlGenerator::new(config).generate_page(&page, &resolver).unwrap();

        assert!(html.contains(
            r#"<meta property="og:image" content="https://example.com/img/img-why-boilerplate@2x.1a2b3c4d.png">"#
        ));
        assert!(html.contains(
            r#"<meta name="twitter:image" content="https://example.com/img/img-why-boilerplate@2x.1a2b3c4d.png">"#
        ));
    }

    #[test]
    fn test_missing_meta_image_is_unresolved() {
        let config = test_config();
        let resolver = UrlResolver::new(&config).with_manifest([("img/logo.svg", "img/logo.svg")]);
        let page = assemble(Route::Community, &RenderContext::new(&config, &resolver));
        let generator = HtmlGenerator::new(config);

        let html = generator.generate_page(&page, &resolver).unwrap();
        assert!(!html.contains("og:image"));
        assert!(!html.contains("twitter:card"));

        let references = generator.unresolved_references(&page, &resolver);
        assert!(references.contains(&"img/img-why-boilerplate@2x.png".to_string()));
        assert!(!references.contains(&"img/logo.svg".to_string()));
    }

    #[test]
    fn test_unresolved_references_include_navbar() {
        let config = test_config();
        let resolver = UrlResolver::new(&config).with_manifest([(
            "img/img-why-boilerplate@2x.png",
            "img/img-why-boilerplate@2x.png",
        )]);
        let page = assemble(Route::Community, &RenderContext::new(&config, &resolver));

        let references = HtmlGenerator::new(config).unresolved_references(&page, &resolver);
        assert_eq!(references.first().map(String::as_str), Some("img/logo.svg"));
        assert!(!references.contains(&"img/img-why-boilerplate@2x.png".to_string()));
    }

    #[test]
    fn test_document_title() {
        let generator = HtmlGenerator::new(test_config());
        assert_eq!(generator.document_title("OpenState"), "OpenState");
        assert_eq!(generator.document_title(""), "OpenState");
        assert_eq!(generator.document_title("Docs"), "Docs | OpenState");
    }

    #[test]
    fn test_custom_base_template() {
        let config = test_config();
        let resolver = UrlResolver::new(&config);
        let page = assemble(Route::Community, &RenderContext::new(&config, &resolver));

        let mut generator = HtmlGenerator::new(config);
        generator.register_template(Template::new("base", "<title>{{ title }}</title>"));
        let html = generator.generate_page(&page, &resolver).unwrap();
        assert_eq!(html, "<title>Get Started | OpenState</title>");
    }

    #[test]
    fn test_output_path() {
        let generator = HtmlGenerator::new(test_config());
        let output_dir = Path::new("build");

        assert_eq!(
            generator.output_path(Route::Home, output_dir),
            PathBuf::from("build/index.html")
        );
        assert_eq!(
            generator.output_path(Route::Community, output_dir),
            PathBuf::from("build/community/index.html")
        );
    }
}
