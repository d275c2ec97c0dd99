//! Credit strip at the very bottom of the page.

use crate::{
    node::{Element, Node},
    primitives::{LayoutConfig, container},
};

use super::{RenderContext, Section, SectionId, anchor};

#[derive(Debug, Clone)]
pub struct FootSection {
    credit: String,
    author: String,
    author_link: String,
    contact: String,
    contact_link: String,
}

/// Author credit on the left, contact link on the right.
pub fn foot() -> FootSection {
    FootSection {
        credit: "Made with 🧡 by ".to_string(),
        author: "Walker Griggs".to_string(),
        author_link: "https://walkergriggs.com".to_string(),
        contact: "Contact Me".to_string(),
        contact_link: "https://github.com/walkergriggs".to_string(),
    }
}

impl Section for FootSection {
    fn id(&self) -> SectionId {
        SectionId::Foot
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Node {
        let id = self.id();
        let component = id.class();
        let link_class = id.element("link");

        let left = Element::new("div")
            .class(id.element("column"))
            .class(id.element("column--left"))
            .child(self.credit.as_str())
            .child(anchor(
                component,
                &link_class,
                &ctx.resolver.link(&self.author_link),
                vec![self.author.as_str().into()],
            ));

        let right = Element::new("div")
            .class(id.element("column"))
            .class(id.element("column--right"))
            .child(anchor(
                component,
                &link_class,
                &ctx.resolver.link(&self.contact_link),
                vec![self.contact.as_str().into()],
            ));

        let columns = Element::new("div")
            .class(id.element("columns"))
            .child(left)
            .child(right);

        Element::new("div")
            .class(component)
            .child(container(&LayoutConfig::new(component), vec![columns.into()]))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support;

    #[test]
    fn test_foot_render() {
        let config = test_support::config();
        let resolver = test_support::resolver(&config);
        let ctx = RenderContext::new(&config, &resolver);

        let tree = foot().render(&ctx);

        let columns = tree.find_by_class("shift-foot__column");
        assert_eq!(columns.len(), 2);
        assert!(columns[0].text_content().starts_with("Made with"));

        let links = tree.find_by_class("shift-foot__link");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].get_attr("href"), Some("https://walkergriggs.com"));
        assert_eq!(links[0].get_attr("rel"), Some("noopener noreferrer"));
        assert_eq!(links[1].text_content(), "Contact Me");

        let container = tree.find_by_class("shift-foot__container");
        assert!(!container[0].has_class("container--medium"));
    }
}
