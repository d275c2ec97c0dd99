//! Hero section: headline, artwork, tagline and call to action.

use crate::{
    node::{Element, Node},
    primitives::{ButtonConfig, LayoutConfig, Size, button, container, image},
    rich_text::RichText,
};

use super::{RenderContext, Section, SectionId};

/// The landing hero.
#[derive(Debug, Clone)]
pub struct IntroSection {
    headline: RichText,
    image: String,
    cta_label: String,
    cta_link: String,
}

/// Hero with the "Get Started" call to action.
pub fn intro() -> IntroSection {
    IntroSection {
        headline: RichText::parse("State<br/>Machines</br>Made Easy"),
        image: "img/023.png".to_string(),
        cta_label: "Get Started".to_string(),
        cta_link: "/docs/welcome".to_string(),
    }
}

impl Section for IntroSection {
    fn id(&self) -> SectionId {
        SectionId::Intro
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Node {
        let id = self.id();
        let component = id.class();
        let layout = LayoutConfig::new(component).size(Size::Medium);

        let children = vec![
            Element::new("div")
                .class(id.element("title"))
                .child(self.headline.clone())
                .into(),
            Element::new("div")
                .class(id.element("image"))
                .child(image(
                    component,
                    &id.element("image-img"),
                    &ctx.resolver.asset(&self.image),
                    "",
                ))
                .into(),
            Element::new("div")
                .class(id.element("content"))
                .child(ctx.config.site.tagline.as_str())
                .into(),
            button(&ButtonConfig::new(
                component,
                self.cta_label.as_str(),
                ctx.resolver.link(&self.cta_link),
            )),
        ];

        Element::new("div")
            .class(component)
            .child(container(&layout, children))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support;

    #[test]
    fn test_intro_render() {
        let config = test_support::config();
        let resolver = test_support::resolver(&config);
        let ctx = RenderContext::new(&config, &resolver);

        let tree = intro().render(&ctx);
        let html = tree.to_html();

        assert!(html.contains("State<br>Machines<br>Made Easy"));
        assert!(html.contains(r#"src="/img/023.png""#));
        assert_eq!(
            tree.find_by_class("shift-intro__content")[0].text_content(),
            "A language agnostic task runner."
        );

        let buttons = tree.find_by_class("shift-intro__btn");
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].get_attr("href"), Some("/docs/welcome"));
        assert_eq!(buttons[0].text_content(), "Get Started");
    }

    #[test]
    fn test_intro_missing_image_renders_placeholder() {
        let config = test_support::config();
        let resolver = test_support::resolver(&config).with_manifest([("img/other.png", "img/other.png")]);
        let ctx = RenderContext::new(&config, &resolver);

        let tree = intro().render(&ctx);
        assert!(tree.find_by_tag("img").is_empty());
        let broken = tree.find_by_class("shift-intro__broken");
        assert_eq!(broken.len(), 1);
        assert_eq!(broken[0].get_attr("data-broken-ref"), Some("img/023.png"));
    }
}
