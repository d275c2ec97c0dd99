//! Layout primitives shared by every section.
//!
//! - [`container`] - sized structural wrapper
//! - [`heading`] - title with optional rich-text subtitle
//! - [`button`] - single navigable action
//! - [`arrow`] - decorative direction indicator
//!
//! Every primitive is a pure function of its configuration (and children):
//! the same input always yields the same tree.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    error::{Result, UiError},
    node::{Element, Node},
    resolver::Resolved,
    rich_text::RichText,
};

/// Size variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
}

impl Size {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
        }
    }
}

impl FromStr for Size {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            _ => Err(UiError::InvalidValue {
                kind: "size",
                value: s.to_string(),
                expected: "small, medium",
            }),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
}

impl Align {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
        }
    }
}

impl FromStr for Align {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            _ => Err(UiError::InvalidValue {
                kind: "alignment",
                value: s.to_string(),
                expected: "left, center",
            }),
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for [`container`] and [`heading`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Namespace for generated class names (e.g., `shift-features`).
    pub component_class: String,
    pub size: Option<Size>,
    pub align: Option<Align>,
    pub title: Option<String>,
    pub subtitle: Option<RichText>,
}

impl LayoutConfig {
    /// Configuration with only a class namespace.
    pub fn new(component_class: impl Into<String>) -> Self {
        Self {
            component_class: component_class.into(),
            size: None,
            align: None,
            title: None,
            subtitle: None,
        }
    }

    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn subtitle(mut self, subtitle: RichText) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    /// `{component_class}__{element}`.
    #[must_use]
    pub fn element_class(&self, element: &str) -> String {
        format!("{}__{element}", self.component_class)
    }
}

/// Configuration for [`button`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonConfig {
    pub component_class: String,
    pub label: String,
    /// Resolved destination.
    pub href: Resolved,
}

impl ButtonConfig {
    pub fn new(component_class: impl Into<String>, label: impl Into<String>, href: Resolved) -> Self {
        Self {
            component_class: component_class.into(),
            label: label.into(),
            href,
        }
    }
}

/// Arrow direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Right,
    Left,
}

impl Direction {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Left => "left",
        }
    }
}

/// Configuration for [`arrow`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrowConfig {
    pub component_class: String,
    pub direction: Direction,
}

impl ArrowConfig {
    pub fn new(component_class: impl Into<String>) -> Self {
        Self {
            component_class: component_class.into(),
            direction: Direction::default(),
        }
    }

    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

/// Wrap children in a sized, optionally centered block.
pub fn container(config: &LayoutConfig, children: impl IntoIterator<Item = Node>) -> Node {
    let mut el = Element::new("div").class("container");
    if let Some(size) = config.size {
        el = el.class(format!("container--{size}"));
    }
    if config.align == Some(Align::Center) {
        el = el.class("container--centered");
    }
    el.class(config.element_class("container"))
        .children(children)
        .into()
}

/// Render a title and optional rich-text subtitle.
pub fn heading(config: &LayoutConfig) -> Node {
    let mut el = Element::new("div").class("heading");
    if let Some(align) = config.align {
        el = el.class(format!("heading--align-{align}"));
    }
    if let Some(size) = config.size {
        el = el.class(format!("heading--size-{size}"));
    }
    el = el.class(config.element_class("heading"));

    if let Some(title) = &config.title {
        el = el.child(
            Element::new("h2")
                .class("heading__title")
                .class(config.element_class("heading-title"))
                .child(title.as_str()),
        );
    }

    if let Some(subtitle) = config.subtitle.as_ref().filter(|s| !s.is_empty()) {
        el = el.child(
            Element::new("div")
                .class("heading__subtitle")
                .class(config.element_class("heading-subtitle"))
                .child(subtitle.clone()),
        );
    }

    el.into()
}

/// Render a navigable action.
pub fn button(config: &ButtonConfig) -> Node {
    match &config.href {
        Resolved::Url(href) => Element::new("a")
            .class("btn")
            .class(format!("{}__btn", config.component_class))
            .attr("href", href.as_str())
            .child(config.label.as_str())
            .into(),
        Resolved::Broken(reference) => placeholder(&config.component_class, reference),
    }
}

/// Render a decorative arrow.
pub fn arrow(config: &ArrowConfig) -> Node {
    Element::new("span")
        .class("arrow")
        .class(format!("arrow--{}", config.direction.as_str()))
        .class(format!("{}__arrow", config.component_class))
        .attr("aria-hidden", "true")
        .into()
}

/// Visible marker for a reference that could not be resolved.
pub fn placeholder(component_class: &str, reference: &str) -> Node {
    warn!(
        component = component_class,
        reference, "rendering placeholder for unresolved reference"
    );
    Element::new("span")
        .class("broken-ref")
        .class(format!("{component_class}__broken"))
        .attr("data-broken-ref", reference)
        .child(format!("[missing: {reference}]"))
        .into()
}

/// An image, or a placeholder when the source is unresolved.
pub fn image(component_class: &str, classes: &str, src: &Resolved, alt: &str) -> Node {
    match src {
        Resolved::Url(url) => Element::new("img")
            .class(classes)
            .attr("src", url.as_str())
            .attr("alt", alt)
            .into(),
        Resolved::Broken(reference) => placeholder(component_class, reference),
    }
}
