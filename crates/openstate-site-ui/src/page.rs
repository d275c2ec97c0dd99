//! Page assembly.
//!
//! A route owns a fixed, ordered list of sections. Assembly renders them in
//! that order and pairs the result with the route's document metadata; the
//! generator's page shell turns the pair into a full HTML document.

use std::fmt;

use openstate_site_core::{PageDescriptor, Result};
use tracing::debug;

use crate::{
    node::{Element, Node},
    sections::{self, RenderContext, Section, SectionId},
};

/// Routes exported by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Community,
}

impl Route {
    /// Every route, in build order.
    pub const ALL: [Route; 2] = [Route::Home, Route::Community];

    /// Site path without base prefix.
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Community => "/community",
        }
    }

    /// The route's sections, in render order.
    #[must_use]
    pub fn sections(&self) -> Vec<Box<dyn Section>> {
        match self {
            Self::Home => vec![
                Box::new(sections::intro()) as Box<dyn Section>,
                Box::new(sections::why()),
                Box::new(sections::features()),
                Box::new(sections::footer()),
                Box::new(sections::foot()),
            ],
            Self::Community => vec![Box::new(sections::community()) as Box<dyn Section>],
        }
    }

    /// Section identities, in render order.
    #[must_use]
    pub fn section_ids(&self) -> Vec<SectionId> {
        self.sections().iter().map(|s| s.id()).collect()
    }

    /// Document title override; `None` keeps the site title.
    fn title(&self) -> Option<&'static str> {
        match self {
            Self::Home => None,
            Self::Community => Some("Get Started"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// An assembled route: metadata plus body tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub route: Route,
    pub descriptor: PageDescriptor,
    pub body: Node,
}

/// Validate the content of every section of a route.
pub fn validate_route(route: Route) -> Result<()> {
    for section in route.sections() {
        section.validate()?;
    }
    Ok(())
}

/// Render a route's sections in order.
pub fn assemble(route: Route, ctx: &RenderContext<'_>) -> Page {
    let sections = route.sections();
    debug!(route = route.path(), sections = sections.len(), "assembling page");

    let body = Element::new("div")
        .class("page")
        .children(sections.iter().map(|section| section.render(ctx)))
        .into();

    let mut descriptor = PageDescriptor::from_config(ctx.config);
    if let Some(title) = route.title() {
        descriptor = descriptor.with_title(title);
    }

    Page {
        route,
        descriptor,
        body,
    }
}
