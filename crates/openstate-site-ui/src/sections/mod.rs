//! Page sections.
//!
//! Each section owns a fixed template and, where it lists things, an inlined
//! [`ContentList`]. The list sections share one algorithm, [`render_cards`]:
//! one uniform sub-block per item, in input order.

use std::fmt;

use openstate_site_core::{Config, ContentItem, ContentList, Field, IconTag, Result};
use tracing::{debug, warn};

use crate::{
    node::{Element, Node},
    primitives::{Align, LayoutConfig, Size, container, heading, placeholder},
    resolver::{Resolved, UrlResolver},
};

pub mod community;
pub mod features;
pub mod foot;
pub mod footer;
pub mod intro;
pub mod why;

pub use community::community;
pub use features::features;
pub use foot::foot;
pub use footer::footer;
pub use intro::intro;
pub use why::why;

/// Identifies a section and namespaces its class names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Intro,
    Why,
    Features,
    Community,
    Footer,
    Foot,
}

impl SectionId {
    /// Root class name; element classes are `{class}__{element}`.
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            Self::Intro => "shift-intro",
            Self::Why => "shift-why",
            Self::Features => "shift-features",
            Self::Community => "shift-community",
            Self::Footer => "shift-footer",
            Self::Foot => "shift-foot",
        }
    }

    /// `{class}__{element}`.
    #[must_use]
    pub fn element(&self, element: &str) -> String {
        format!("{}__{element}", self.class())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class())
    }
}

/// Read-only inputs shared by every renderer of a build.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a Config,
    pub resolver: &'a UrlResolver,
}

impl<'a> RenderContext<'a> {
    #[must_use]
    pub fn new(config: &'a Config, resolver: &'a UrlResolver) -> Self {
        Self { config, resolver }
    }
}

/// A renderable page section.
pub trait Section: Send + Sync {
    /// Section identity and class namespace.
    fn id(&self) -> SectionId;

    /// Check inlined content against the template's required fields.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Build the section tree. Never fails.
    fn render(&self, ctx: &RenderContext<'_>) -> Node;
}

/// How an icon tag is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconTreatment {
    /// Accent color, applied through a class modifier.
    Color(&'static str),
    /// Glyph image, by logical asset name.
    Glyph(&'static str),
    /// Unstyled fallback for unrecognized tags.
    Default,
}

impl IconTreatment {
    /// Resolve a tag to its treatment.
    #[must_use]
    pub fn for_tag(tag: &IconTag) -> Self {
        match tag {
            IconTag::Red => Self::Color("red"),
            IconTag::Purple => Self::Color("purple"),
            IconTag::Yellow => Self::Color("yellow"),
            IconTag::Green => Self::Color("green"),
            IconTag::Blue => Self::Color("blue"),
            IconTag::Boilerplate => Self::Glyph("img/ic-boilerplate.svg"),
            IconTag::BoilerplatePlugin => Self::Glyph("img/ic-boilerplate-plugin.svg"),
            IconTag::FrontendLibs => Self::Glyph("img/ic-frontend-libs.svg"),
            IconTag::Libs => Self::Glyph("img/ic-libs.svg"),
            IconTag::Unknown(_) => Self::Default,
        }
    }

    /// Class modifier for the tag's title treatment.
    #[must_use]
    pub fn modifier(tag: &IconTag) -> &str {
        match Self::for_tag(tag) {
            Self::Default => "default",
            Self::Color(_) | Self::Glyph(_) => tag.as_str(),
        }
    }
}

/// Map each item to a `{component}__item` block, preserving order.
///
/// Every block holds a `{component}__title` with an icon modifier and a
/// `{component}__desc`. An empty list yields no blocks.
pub fn render_cards(component: &str, items: &ContentList) -> Vec<Node> {
    items
        .iter()
        .map(|item| render_card(component, item))
        .collect()
}

fn render_card(component: &str, item: &ContentItem) -> Node {
    if !item.icon.is_known() {
        warn!(
            component,
            icon = item.icon.as_str(),
            title = %item.title,
            "unknown icon tag, using default treatment"
        );
    }

    Element::new("div")
        .class(format!("{component}__item"))
        .child(
            Element::new("div")
                .class(format!("{component}__title"))
                .class(format!(
                    "{component}__title--{}",
                    IconTreatment::modifier(&item.icon)
                ))
                .child(item.title.as_str()),
        )
        .child(
            Element::new("div")
                .class(format!("{component}__desc"))
                .child(item.description.as_str()),
        )
        .into()
}

/// A titled list of cards: heading plus one block per item.
#[derive(Debug, Clone)]
pub struct CardSection {
    id: SectionId,
    title: String,
    items: ContentList,
}

impl CardSection {
    /// Fields a card block needs.
    pub const REQUIRED: &'static [Field] = &[Field::Icon, Field::Title, Field::Description];

    pub fn new(id: SectionId, title: impl Into<String>, items: impl Into<ContentList>) -> Self {
        Self {
            id,
            title: title.into(),
            items: items.into(),
        }
    }

    #[must_use]
    pub fn items(&self) -> &ContentList {
        &self.items
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Section for CardSection {
    fn id(&self) -> SectionId {
        self.id
    }

    fn validate(&self) -> Result<()> {
        self.items.validate(self.id.class(), Self::REQUIRED)
    }

    fn render(&self, _ctx: &RenderContext<'_>) -> Node {
        let component = self.id.class();
        let layout = LayoutConfig::new(component)
            .size(Size::Medium)
            .title(self.title.as_str())
            .align(Align::Left);

        let cards = render_cards(component, &self.items);
        debug!(section = component, items = cards.len(), "rendered card section");

        Element::new("div")
            .class(component)
            .child(container(
                &layout,
                vec![
                    heading(&layout),
                    Element::new("div")
                        .class(self.id.element("content"))
                        .children(cards)
                        .into(),
                ],
            ))
            .into()
    }
}

/// An anchor with `class`, or a placeholder-marked block when the target
/// is unresolved. Off-site targets open in a new tab.
pub(crate) fn anchor(
    component: &str,
    class: &str,
    target: &Resolved,
    children: Vec<Node>,
) -> Node {
    match target {
        Resolved::Url(href) => {
            let mut el = Element::new("a").class(class).attr("href", href.as_str());
            if UrlResolver::is_external(href) {
                el = el
                    .attr("target", "_blank")
                    .attr("rel", "noopener noreferrer");
            }
            el.children(children).into()
        }
        Resolved::Broken(reference) => Element::new("div")
            .class(class)
            .class(format!("{class}--broken"))
            .children(children)
            .child(placeholder(component, reference))
            .into(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn sample(n: usize) -> ContentList {
        (0..n)
            .map(|i| ContentItem::new(IconTag::Green, format!("Title {i}"), format!("Desc {i}")))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_render_cards_count_and_order() {
        for n in [0, 1, 3, 7] {
            let cards = render_cards("shift-test", &sample(n));
            assert_eq!(cards.len(), n);

            let tree = Node::Fragment(cards);
            let titles: Vec<String> = tree
                .find_by_class("shift-test__title")
                .iter()
                .map(|el| el.text_content())
                .collect();
            let expected: Vec<String> = (0..n).map(|i| format!("Title {i}")).collect();
            assert_eq!(titles, expected);
        }
    }

    #[test]
    fn test_unknown_icon_falls_back() {
        let items = ContentList::new(vec![ContentItem::new(
            IconTag::Unknown("teal".to_string()),
            "Odd",
            "Still renders",
        )]);
        let tree = Node::Fragment(render_cards("c", &items));

        let titles = tree.find_by_class("c__title");
        assert_eq!(titles.len(), 1);
        assert!(titles[0].has_class("c__title--default"));
        assert_eq!(tree.find_by_class("c__desc")[0].text_content(), "Still renders");
    }

    #[test]
    fn test_icon_treatment() {
        assert_eq!(IconTreatment::for_tag(&IconTag::Red), IconTreatment::Color("red"));
        assert_eq!(
            IconTreatment::for_tag(&IconTag::Libs),
            IconTreatment::Glyph("img/ic-libs.svg")
        );
        assert_eq!(IconTreatment::modifier(&IconTag::Purple), "purple");
        assert_eq!(
            IconTreatment::modifier(&IconTag::Unknown("x".to_string())),
            "default"
        );
    }

    #[test]
    fn test_card_section_empty_list() {
        let config = test_support::config();
        let resolver = test_support::resolver(&config);
        let ctx = RenderContext::new(&config, &resolver);

        let section = CardSection::new(SectionId::Features, "Nothing here", Vec::new());
        assert!(section.validate().is_ok());

        let tree = section.render(&ctx);
        assert_eq!(tree.find_by_class("shift-features").len(), 1);
        assert_eq!(tree.find_by_class("shift-features__content").len(), 1);
        assert!(tree.find_by_class("shift-features__item").is_empty());
        assert!(tree.text_content().contains("Nothing here"));
    }

    #[test]
    fn test_card_section_validate_missing_description() {
        let section = CardSection::new(
            SectionId::Community,
            "Broken",
            vec![ContentItem::new(IconTag::Blue, "Slack", "")],
        );
        let err = section.validate().unwrap_err();
        assert!(err.to_string().contains("shift-community"));
        assert!(err.to_string().contains("description"));
    }

    #[test]
    fn test_text_is_not_modified() {
        let items = ContentList::new(vec![ContentItem::new(
            IconTag::Red,
            "Q&A <tips>",
            "Don't overthink it.",
        )]);
        let tree = Node::Fragment(render_cards("c", &items));
        assert_eq!(tree.find_by_class("c__title")[0].text_content(), "Q&A <tips>");
        assert!(tree.to_html().contains("Q&amp;A &lt;tips&gt;"));
    }
}
