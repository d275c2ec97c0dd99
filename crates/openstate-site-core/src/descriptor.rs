//! Document-level page metadata.

use serde::Serialize;

use crate::config::Config;

/// Metadata the page shell needs for a rendered route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageDescriptor {
    /// Document title.
    pub title: String,

    /// Meta description.
    pub description: String,

    /// Meta keywords, in first-seen order without duplicates.
    pub keywords: Vec<String>,

    /// Logical asset name of the social preview image (`img/...`).
    ///
    /// Resolved against the deployed assets when the page shell is written.
    pub meta_image: Option<String>,
}

impl PageDescriptor {
    /// Build the site-wide descriptor from configuration.
    ///
    /// The title is the site title; routes override it with [`Self::with_title`].
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut keywords: Vec<String> = Vec::with_capacity(config.site.keywords.len());
        for keyword in &config.site.keywords {
            let keyword = keyword.trim();
            if !keyword.is_empty() && !keywords.iter().any(|k| k == keyword) {
                keywords.push(keyword.to_string());
            }
        }

        Self {
            title: config.site.title.clone(),
            description: config.site.tagline.clone(),
            keywords,
            meta_image: config
                .site
                .image
                .as_deref()
                .map(str::trim)
                .filter(|image| !image.is_empty())
                .map(|image| format!("img/{}", image.trim_start_matches('/'))),
        }
    }

    /// Replace the document title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let config = Config::from_toml_str(
            r#"
[site]
title = "OpenState"
tagline = "A task runner"
url = "https://example.com"
keywords = ["task runner", "orchestration", "task runner", "  "]
image = "preview@2x.png"
"#,
        )
        .unwrap();

        let descriptor = PageDescriptor::from_config(&config);
        assert_eq!(descriptor.title, "OpenState");
        assert_eq!(descriptor.description, "A task runner");
        assert_eq!(descriptor.keywords, vec!["task runner", "orchestration"]);
        assert_eq!(
            descriptor.meta_image.as_deref(),
            Some("img/preview@2x.png")
        );
    }

    #[test]
    fn test_with_title() {
        let config = Config::from_toml_str(
            r#"
[site]
title = "OpenState"
url = "https://example.com"
"#,
        )
        .unwrap();

        let descriptor = PageDescriptor::from_config(&config).with_title("Get Started");
        assert_eq!(descriptor.title, "Get Started");
        assert!(descriptor.meta_image.is_none());
    }
}
