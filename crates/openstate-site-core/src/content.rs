//! Content model for page sections.
//!
//! A section is driven by an ordered [`ContentList`]. Each [`ContentItem`]
//! carries the same field set; which fields are mandatory depends on the
//! section template consuming the list.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Semantic icon tag attached to a content item.
///
/// Tags name a category, not an asset. The rendering layer decides how a tag
/// is drawn; unrecognized tags are kept as [`IconTag::Unknown`] so that
/// rendering can fall back to a default treatment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IconTag {
    Red,
    Purple,
    Yellow,
    Green,
    Blue,
    Boilerplate,
    BoilerplatePlugin,
    FrontendLibs,
    Libs,
    Unknown(String),
}

impl IconTag {
    /// The tag as written in content.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Red => "red",
            Self::Purple => "purple",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Boilerplate => "boilerplate",
            Self::BoilerplatePlugin => "boilerplate-plugin",
            Self::FrontendLibs => "frontend-libs",
            Self::Libs => "libs",
            Self::Unknown(tag) => tag,
        }
    }

    /// Whether this tag was recognized.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl FromStr for IconTag {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "red" => Self::Red,
            "purple" => Self::Purple,
            "yellow" => Self::Yellow,
            "green" => Self::Green,
            "blue" => Self::Blue,
            "boilerplate" => Self::Boilerplate,
            "boilerplate-plugin" => Self::BoilerplatePlugin,
            "frontend-libs" => Self::FrontendLibs,
            "libs" => Self::Libs,
            _ => Self::Unknown(s.to_string()),
        })
    }
}

impl From<String> for IconTag {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(tag) => tag,
            Err(never) => match never {},
        }
    }
}

impl From<IconTag> for String {
    fn from(tag: IconTag) -> Self {
        tag.as_str().to_string()
    }
}

impl fmt::Display for IconTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field of [`ContentItem`] that a section may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Icon,
    Title,
    Description,
    Link,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Icon => "icon",
            Self::Title => "title",
            Self::Description => "description",
            Self::Link => "link",
        })
    }
}

/// One renderable card or row of a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Icon category.
    pub icon: IconTag,

    /// Card title. Some sections interpret it as rich text.
    pub title: String,

    /// Body text.
    #[serde(default)]
    pub description: String,

    /// Optional destination.
    #[serde(default)]
    pub link: Option<String>,
}

impl ContentItem {
    /// Create an item without a link.
    pub fn new(icon: IconTag, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            description: description.into(),
            link: None,
        }
    }

    /// Attach a link.
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Whether the given field carries a value.
    #[must_use]
    pub fn has(&self, field: Field) -> bool {
        match field {
            Field::Icon => !self.icon.as_str().trim().is_empty(),
            Field::Title => !self.title.trim().is_empty(),
            Field::Description => !self.description.trim().is_empty(),
            Field::Link => self.link.as_deref().is_some_and(|l| !l.trim().is_empty()),
        }
    }
}

/// Ordered sequence of content items. Order is render order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentList {
    items: Vec<ContentItem>,
}

impl ContentList {
    /// Create a list from items, preserving order.
    #[must_use]
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self { items }
    }

    /// The items in render order.
    #[must_use]
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// Iterate over the items in render order.
    pub fn iter(&self) -> std::slice::Iter<'_, ContentItem> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check that every item supplies the fields a section requires.
    ///
    /// Reports the first missing field, scanning items in order.
    pub fn validate(&self, section: &str, required: &[Field]) -> Result<()> {
        for (index, item) in self.items.iter().enumerate() {
            if let Some(field) = required.iter().find(|f| !item.has(**f)) {
                return Err(CoreError::content(section, index, *field));
            }
        }
        Ok(())
    }
}

impl From<Vec<ContentItem>> for ContentList {
    fn from(items: Vec<ContentItem>) -> Self {
        Self::new(items)
    }
}

impl<'a> IntoIterator for &'a ContentList {
    type Item = &'a ContentItem;
    type IntoIter = std::slice::Iter<'a, ContentItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
