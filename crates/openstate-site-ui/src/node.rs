//! Structural output tree.
//!
//! Renderers build a [`Node`] tree rather than strings so that the structure
//! can be inspected (and tested) before it is serialized to HTML.

use crate::rich_text::RichText;

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// A node of the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with attributes and children.
    Element(Element),
    /// Plain text, escaped on output.
    Text(String),
    /// Restricted rich text.
    Rich(RichText),
    /// A sequence of sibling nodes without a wrapper.
    Fragment(Vec<Node>),
}

/// An element node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an empty element.
    #[must_use]
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append one or more space separated class names.
    #[must_use]
    pub fn class(mut self, class: impl AsRef<str>) -> Self {
        let class = class.as_ref().trim();
        if class.is_empty() {
            return self;
        }
        match self.attrs.iter_mut().find(|(k, _)| k == "class") {
            Some((_, value)) => {
                value.push(' ');
                value.push_str(class);
            }
            None => self.attrs.push(("class".to_string(), class.to_string())),
        }
        self
    }

    /// Set an attribute, replacing an existing value.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == name) {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Append a child.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append children in order.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    #[must_use]
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Value of an attribute.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the element carries the class name.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    #[must_use]
    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Concatenated text of all descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

impl Node {
    /// An empty fragment.
    #[must_use]
    pub fn empty() -> Self {
        Self::Fragment(Vec::new())
    }

    /// Serialize to HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Append the HTML form to `out`.
    pub fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(&escape_text(text)),
            Self::Rich(rich) => rich.write_html(out),
            Self::Fragment(nodes) => {
                for node in nodes {
                    node.write_html(out);
                }
            }
            Self::Element(el) => {
                out.push('<');
                out.push_str(el.tag);
                for (name, value) in &el.attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape_attr(value));
                    out.push('"');
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&el.tag) {
                    return;
                }
                for child in &el.children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(el.tag);
                out.push('>');
            }
        }
    }

    /// Concatenated text of this node and its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Rich(rich) => out.push_str(&rich.plain_text()),
            Self::Fragment(nodes) => nodes.iter().for_each(|n| n.collect_text(out)),
            Self::Element(el) => el.children.iter().for_each(|n| n.collect_text(out)),
        }
    }

    /// All elements carrying `class`, in document order.
    #[must_use]
    pub fn find_by_class<'a>(&'a self, class: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.walk(&mut |el: &'a Element| {
            if el.has_class(class) {
                found.push(el);
            }
        });
        found
    }

    /// All elements with the given tag, in document order.
    #[must_use]
    pub fn find_by_tag<'a>(&'a self, tag: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.walk(&mut |el: &'a Element| {
            if el.tag == tag {
                found.push(el);
            }
        });
        found
    }

    fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Element)) {
        match self {
            Self::Element(el) => {
                visit(el);
                for child in &el.children {
                    child.walk(visit);
                }
            }
            Self::Fragment(nodes) => {
                for node in nodes {
                    node.walk(visit);
                }
            }
            Self::Text(_) | Self::Rich(_) => {}
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<RichText> for Node {
    fn from(rich: RichText) -> Self {
        Self::Rich(rich)
    }
}

impl From<Vec<Node>> for Node {
    fn from(nodes: Vec<Node>) -> Self {
        Self::Fragment(nodes)
    }
}

/// Escape text content.
#[must_use]
pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape an attribute value.
#[must_use]
pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
