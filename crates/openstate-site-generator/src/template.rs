//! String templates for the page shell.
//!
//! Placeholders are written `{{ name }}`. Values are HTML-escaped unless the
//! placeholder carries the `raw` filter (`{{ name | raw }}`); a trailing `?`
//! (`{{ name? }}`) makes the variable optional.

use std::collections::HashMap;

use openstate_site_ui::node::escape_attr;
use thiserror::Error;

/// Template rendering errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Missing required variable.
    #[error("missing required variable: {0}")]
    MissingVariable(String),

    /// Template not found.
    #[error("template not found: {0}")]
    NotFound(String),

    /// Invalid template syntax.
    #[error("invalid template syntax: {0}")]
    InvalidSyntax(String),
}

/// Result type for template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Variables available to a template.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    variables: HashMap<String, String>,
}

impl TemplateContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Builder form of [`Self::insert`].
    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }
}

/// A parsed placeholder.
#[derive(Debug, PartialEq, Eq)]
struct Placeholder<'a> {
    name: &'a str,
    optional: bool,
    raw: bool,
}

impl<'a> Placeholder<'a> {
    fn parse(inner: &'a str) -> Result<Self> {
        let mut parts = inner.split('|').map(str::trim);
        let name = parts.next().unwrap_or_default();
        let raw = match parts.next() {
            None => false,
            Some("raw") => true,
            Some(filter) => {
                return Err(TemplateError::InvalidSyntax(format!(
                    "unknown filter '{filter}'"
                )));
            }
        };
        if parts.next().is_some() {
            return Err(TemplateError::InvalidSyntax(format!(
                "too many filters in '{inner}'"
            )));
        }

        let (name, optional) = match name.strip_suffix('?') {
            Some(stripped) => (stripped.trim_end(), true),
            None => (name, false),
        };
        if name.is_empty() {
            return Err(TemplateError::InvalidSyntax("empty placeholder".to_string()));
        }

        Ok(Self {
            name,
            optional,
            raw,
        })
    }
}

/// A named template.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    content: String,
}

impl Template {
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render with the given context.
    ///
    /// Substituted values are never rescanned for placeholders.
    pub fn render(&self, context: &TemplateContext) -> Result<String> {
        let mut out = String::with_capacity(self.content.len());
        let mut rest = self.content.as_str();

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let end = after
                .find("}}")
                .ok_or_else(|| TemplateError::InvalidSyntax("unclosed {{ delimiter".to_string()))?;

            let placeholder = Placeholder::parse(&after[..end])?;
            match context.get(placeholder.name) {
                Some(value) if placeholder.raw => out.push_str(value),
                Some(value) => out.push_str(&escape_attr(value)),
                None if placeholder.optional => {}
                None => {
                    return Err(TemplateError::MissingVariable(
                        placeholder.name.to_string(),
                    ));
                }
            }

            rest = &after[end + 2..];
        }

        out.push_str(rest);
        Ok(out)
    }
}

/// Registry of named templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, Template>,
}

impl TemplateRegistry {
    /// A registry holding the built-in `base` shell.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register(Template::new("base", DEFAULT_BASE_TEMPLATE));
        registry
    }

    /// Register a template, replacing one with the same name.
    pub fn register(&mut self, template: Template) {
        self.templates.insert(template.name.clone(), template);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Render a named template.
    pub fn render(&self, name: &str, context: &TemplateContext) -> Result<String> {
        let template = self
            .get(name)
            .ok_or_else(|| TemplateError::NotFound(name.to_string()))?;
        template.render(context)
    }
}

/// Default document shell.
pub const DEFAULT_BASE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="{{ lang }}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    <meta name="description" content="{{ description? }}">
    <meta name="keywords" content="{{ keywords? }}">
    <meta property="og:title" content="{{ title }}">
    <meta property="og:description" content="{{ description? }}">
    <meta property="og:url" content="{{ canonical_url }}">
    {{ meta_image_tags? | raw }}
    {{ favicon_link? | raw }}
    <link rel="canonical" href="{{ canonical_url }}">
</head>
<body>
    {{ navbar? | raw }}
    <main>
{{ content | raw }}
    </main>
</body>
</html>
"#;
