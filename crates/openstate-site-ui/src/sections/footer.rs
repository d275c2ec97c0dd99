//! "Start exploring" link cards.

use openstate_site_core::{ContentItem, ContentList, Field, IconTag, Result};
use tracing::debug;

use crate::{
    node::{Element, Node},
    primitives::{ArrowConfig, LayoutConfig, Size, arrow, container, heading, image},
    rich_text::RichText,
};

use super::{IconTreatment, RenderContext, Section, SectionId, anchor};

/// Link cards: glyph icon, rich-text label and arrow, all inside one link.
#[derive(Debug, Clone)]
pub struct FooterSection {
    title: String,
    items: ContentList,
}

impl FooterSection {
    /// Fields a link card needs.
    pub const REQUIRED: &'static [Field] = &[Field::Icon, Field::Title, Field::Link];

    pub fn new(title: impl Into<String>, items: impl Into<ContentList>) -> Self {
        Self {
            title: title.into(),
            items: items.into(),
        }
    }

    #[must_use]
    pub fn items(&self) -> &ContentList {
        &self.items
    }

    fn render_item(&self, ctx: &RenderContext<'_>, item: &ContentItem) -> Node {
        let id = self.id();
        let component = id.class();

        let icon = match IconTreatment::for_tag(&item.icon) {
            IconTreatment::Glyph(asset) => Element::new("div")
                .class(id.element("icon"))
                .child(image(component, "", &ctx.resolver.asset(asset), "")),
            IconTreatment::Color(_) | IconTreatment::Default => Element::new("div")
                .class(id.element("icon"))
                .class(id.element(&format!(
                    "icon--{}",
                    IconTreatment::modifier(&item.icon)
                ))),
        };

        let target = ctx.resolver.link(item.link.as_deref().unwrap_or_default());
        let body = vec![
            icon.into(),
            Element::new("div")
                .class(id.element("label"))
                .child(RichText::parse(&item.title))
                .into(),
            arrow(&ArrowConfig::new(component)),
        ];

        Element::new("div")
            .class(id.element("item"))
            .child(anchor(component, &id.element("link"), &target, body))
            .into()
    }
}

/// The footer link grid.
pub fn footer() -> FooterSection {
    FooterSection::new(
        "Start exploring",
        vec![
            ContentItem::new(IconTag::Boilerplate, "OpenState<br />Documentation", "")
                .with_link("/docs/welcome"),
            ContentItem::new(IconTag::BoilerplatePlugin, "OpenState<br />Documentation", "")
                .with_link("/docs/welcome"),
            ContentItem::new(IconTag::FrontendLibs, "OpenState<br />Source Code", "")
                .with_link("https://github.com/walkergriggs/openstate"),
            ContentItem::new(IconTag::Libs, "OpenState<br />Community", "")
                .with_link("/community"),
        ],
    )
}

impl Section for FooterSection {
    fn id(&self) -> SectionId {
        SectionId::Footer
    }

    fn validate(&self) -> Result<()> {
        self.items.validate(self.id().class(), Self::REQUIRED)
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Node {
        let id = self.id();
        let component = id.class();
        let layout = LayoutConfig::new(component)
            .size(Size::Medium)
            .title(self.title.as_str());

        let items: Vec<Node> = self
            .items
            .iter()
            .map(|item| self.render_item(ctx, item))
            .collect();
        debug!(section = component, items = items.len(), "rendered link section");

        Element::new("div")
            .class(component)
            .child(container(
                &layout,
                vec![
                    heading(&layout),
                    Element::new("div")
                        .class(id.element("content"))
                        .children(items)
                        .into(),
                ],
            ))
            .into()
    }
}
