//! Site configuration management.
//!
//! The configuration is loaded once before any rendering starts and is
//! read-only afterwards. Renderers receive it by reference.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Navigation bar shown by the page shell.
    #[serde(default)]
    pub navbar: NavbarConfig,

    /// Build settings.
    #[serde(default)]
    pub build: BuildConfig,

    /// Sitemap settings.
    #[serde(default)]
    pub sitemap: SitemapConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// One-line description used for meta tags and the intro section.
    #[serde(default)]
    pub tagline: String,

    /// Deployment origin (e.g., "https://example.com").
    pub url: String,

    /// Document language code.
    #[serde(default = "default_language")]
    pub language: String,

    /// Path prefix the site is served under.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Favicon asset path, relative to the base URL.
    #[serde(default)]
    pub favicon: Option<String>,

    /// Keywords for the meta keywords tag.
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Social preview image file name under `img/`.
    #[serde(default)]
    pub image: Option<String>,
}

/// Navigation bar configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavbarConfig {
    /// Logo shown at the start of the bar.
    #[serde(default)]
    pub logo: Option<NavbarLogo>,

    /// Links in display order.
    #[serde(default)]
    pub items: Vec<NavItem>,
}

/// Navbar logo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavbarLogo {
    /// Alternative text.
    pub alt: String,

    /// Asset path relative to the base URL.
    pub src: String,
}

/// A navbar link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    /// Destination, either a site path or an absolute URL.
    pub to: String,

    /// Display label.
    pub label: String,

    /// Side of the bar the link is placed on.
    #[serde(default)]
    pub position: NavPosition,
}

/// Navbar side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavPosition {
    Left,
    #[default]
    Right,
}

/// Build configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Output directory for the generated site.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Directory of static assets copied into the output.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Whether to fingerprint copied assets.
    #[serde(default)]
    pub fingerprint: bool,
}

/// Sitemap configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitemapConfig {
    /// Whether to write `sitemap.xml`.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Change frequency advertised for every URL.
    #[serde(default)]
    pub changefreq: ChangeFreq,

    /// Priority advertised for every URL (0.0 to 1.0).
    #[serde(default = "default_priority")]
    pub priority: f32,

    /// Whether URLs end with a slash.
    #[serde(default)]
    pub trailing_slash: bool,
}

/// Change frequency for sitemap entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    #[default]
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    /// Sitemap protocol spelling.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

// Default value functions
fn default_language() -> String {
    "en".to_string()
}

fn default_base_url() -> String {
    "/".to_string()
}

fn default_output_dir() -> String {
    "build".to_string()
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_true() -> bool {
    true
}

fn default_priority() -> f32 {
    0.5
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            static_dir: default_static_dir(),
            fingerprint: false,
        }
    }
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            changefreq: ChangeFreq::default(),
            priority: default_priority(),
            trailing_slash: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `OPENSTATE_SITE__*` environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("OPENSTATE_SITE").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.site.title.trim().is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.site.url.trim().is_empty() {
            return Err(CoreError::config("site.url cannot be empty"));
        }

        if !self.site.base_url.starts_with('/') {
            return Err(CoreError::config("site.base_url must start with '/'"));
        }

        if !(0.0..=1.0).contains(&self.sitemap.priority) {
            return Err(CoreError::config(
                "sitemap.priority must be between 0.0 and 1.0",
            ));
        }

        if self.site.url.ends_with('/') {
            tracing::warn!("site.url should not have a trailing slash");
        }

        Ok(())
    }

    /// Base path with exactly one leading and one trailing slash.
    #[must_use]
    pub fn base_path(&self) -> String {
        let trimmed = self.site.base_url.trim_matches('/');
        if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{trimmed}/")
        }
    }

    /// Site-relative path for a logical asset or page path.
    #[must_use]
    pub fn asset_path(&self, path: &str) -> String {
        format!("{}{}", self.base_path(), path.trim_start_matches('/'))
    }

    /// Absolute URL for a path that already carries the base path.
    #[must_use]
    pub fn absolute_url(&self, site_path: &str) -> String {
        let origin = self.site.url.trim_end_matches('/');
        format!("{origin}/{}", site_path.trim_start_matches('/'))
    }

    /// Get the full URL for a path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        let origin = self.site.url.trim_end_matches('/');
        format!("{origin}{}", self.asset_path(path))
    }
}
