//! Pitch paragraph with a product illustration.

use crate::{
    node::{Element, Node},
    primitives::{Align, LayoutConfig, Size, container, heading, image},
    rich_text::RichText,
};

use super::{RenderContext, Section, SectionId};

const WHY_SUBTITLE: &str = "OpenState is adopted from and designed for production environments seeking flexible, low-code workflow management. Declarative task definitions mean you can spend more time elsewhere, while OpenState makes light work of your ETL jobs, automation, and closed loop control planes.";

#[derive(Debug, Clone)]
pub struct WhySection {
    title: String,
    subtitle: RichText,
    desktop_image: String,
    mobile_image: String,
}

/// "Why use OpenState?"
pub fn why() -> WhySection {
    WhySection {
        title: "Why use OpenState?".to_string(),
        subtitle: RichText::parse(WHY_SUBTITLE),
        desktop_image: "img/img-why-boilerplate@2x.png".to_string(),
        mobile_image: "img/img-why-boilerplate-mobile@2x.png".to_string(),
    }
}

impl Section for WhySection {
    fn id(&self) -> SectionId {
        SectionId::Why
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Node {
        let id = self.id();
        let component = id.class();

        let intro = LayoutConfig::new(component)
            .size(Size::Small)
            .title(self.title.as_str())
            .subtitle(self.subtitle.clone())
            .align(Align::Left);
        let title_block = LayoutConfig {
            size: Some(Size::Medium),
            ..intro.clone()
        };

        let images = Element::new("div")
            .class(id.element("content"))
            .child(image(
                component,
                &format!("{} {}", id.element("image"), id.element("image--desktop")),
                &ctx.resolver.asset(&self.desktop_image),
                "",
            ))
            .child(image(
                component,
                &format!("{} {}", id.element("image"), id.element("image--mobile")),
                &ctx.resolver.asset(&self.mobile_image),
                "",
            ));

        Element::new("div")
            .class(component)
            .child(container(&intro, vec![heading(&title_block)]))
            .child(container(
                &LayoutConfig::new(component).size(Size::Medium),
                vec![images.into()],
            ))
            .into()
    }
}
