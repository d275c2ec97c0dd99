//! Asset and link resolution.
//!
//! Maps logical asset names (`img/023.png`) and link targets to the paths
//! they are deployed under. A reference that cannot be resolved is reported
//! as [`Resolved::Broken`] so the renderer can emit a visible placeholder.

use std::collections::HashMap;

use openstate_site_core::Config;

/// Outcome of resolving a reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// Deployed URL or site path.
    Url(String),
    /// The reference as written, which could not be resolved.
    Broken(String),
}

impl Resolved {
    #[must_use]
    pub fn is_broken(&self) -> bool {
        matches!(self, Self::Broken(_))
    }
}

/// Resolves asset names and link targets against the site base path.
#[derive(Debug, Clone)]
pub struct UrlResolver {
    base_path: String,
    /// Logical name to deployed path. `None` trusts every asset name.
    assets: Option<HashMap<String, String>>,
}

const EXTERNAL_SCHEMES: &[&str] = &["http://", "https://", "mailto:"];

impl UrlResolver {
    /// A resolver that trusts every asset name.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::with_base_path(config.base_path())
    }

    /// A resolver for an explicit base path such as `/` or `/site/`.
    #[must_use]
    pub fn with_base_path(base_path: impl Into<String>) -> Self {
        let base = base_path.into();
        let trimmed = base.trim_matches('/');
        let base_path = if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{trimmed}/")
        };
        Self {
            base_path,
            assets: None,
        }
    }

    /// Restrict assets to a manifest of logical name to deployed path.
    ///
    /// Both sides are site-relative; leading slashes are ignored.
    #[must_use]
    pub fn with_manifest<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let assets = entries
            .into_iter()
            .map(|(logical, deployed)| {
                (
                    logical.as_ref().trim_start_matches('/').to_string(),
                    deployed.as_ref().trim_start_matches('/').to_string(),
                )
            })
            .collect();
        self.assets = Some(assets);
        self
    }

    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Resolve a logical asset name.
    #[must_use]
    pub fn asset(&self, name: &str) -> Resolved {
        let logical = name.trim().trim_start_matches('/');
        if logical.is_empty() {
            return Resolved::Broken(name.to_string());
        }

        match &self.assets {
            None => Resolved::Url(format!("{}{logical}", self.base_path)),
            Some(assets) => match assets.get(logical) {
                Some(deployed) => Resolved::Url(format!("{}{deployed}", self.base_path)),
                None => Resolved::Broken(name.to_string()),
            },
        }
    }

    /// Resolve a link target.
    ///
    /// Absolute URLs and fragments pass through, site paths get the base
    /// path, anything else is broken.
    #[must_use]
    pub fn link(&self, target: &str) -> Resolved {
        let target_trimmed = target.trim();
        if target_trimmed.is_empty() || target_trimmed.contains(char::is_whitespace) {
            return Resolved::Broken(target.to_string());
        }

        if EXTERNAL_SCHEMES
            .iter()
            .any(|scheme| target_trimmed.starts_with(scheme))
            || target_trimmed.starts_with('#')
        {
            return Resolved::Url(target_trimmed.to_string());
        }

        match target_trimmed.strip_prefix('/') {
            Some(path) => Resolved::Url(format!("{}{path}", self.base_path)),
            None => Resolved::Broken(target.to_string()),
        }
    }

    /// Whether a link target points off-site.
    #[must_use]
    pub fn is_external(target: &str) -> bool {
        EXTERNAL_SCHEMES
            .iter()
            .any(|scheme| target.trim().starts_with(scheme))
    }
}
