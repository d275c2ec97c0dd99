//! Build orchestration.
//!
//! Coordinates the full site build: content validation, then assets so the
//! resolver knows what was deployed, then every route rendered in parallel.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use chrono::Utc;
use openstate_site_core::{Config, CoreError};
use openstate_site_ui::{RenderContext, Route, UrlResolver, assemble, validate_route};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    assets::{AssetError, AssetManifest, AssetProcessor},
    html::{HtmlError, HtmlGenerator},
    sitemap::{SitemapError, SitemapGenerator},
};

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration, or inlined content missing a required field.
    #[error("content error: {0}")]
    Content(#[from] CoreError),

    /// HTML generation error.
    #[error("HTML error: {0}")]
    Html(#[from] HtmlError),

    /// Sitemap generation error.
    #[error("sitemap error: {0}")]
    Sitemap(#[from] SitemapError),

    /// Asset error.
    #[error("asset error: {0}")]
    Asset(#[from] AssetError),
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Build statistics.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// Number of pages generated.
    pub pages: usize,

    /// Number of assets processed.
    pub assets: usize,

    /// References that could not be resolved, including the navbar and the
    /// social preview image.
    pub broken_refs: usize,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// A reference a rendered page could not resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenRef {
    pub route: Route,
    /// The reference as written.
    pub reference: String,
}

/// Site builder that orchestrates the build process.
#[derive(Debug)]
pub struct Builder {
    config: Config,
    output_dir: PathBuf,
    static_dir: Option<PathBuf>,
}

impl Builder {
    #[must_use]
    pub fn new(config: Config, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            output_dir: output_dir.into(),
            static_dir: None,
        }
    }

    /// Set the static assets directory.
    ///
    /// Without one every asset name is trusted as-is.
    #[must_use]
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Execute the full build process.
    pub fn build(&self) -> Result<BuildStats> {
        let start = Instant::now();
        let mut stats = BuildStats::default();

        info!(output = %self.output_dir.display(), "starting build");

        // 1. Defects abort before the previous output is touched
        self.validate()?;

        // 2. Clean output directory
        self.clean_output()?;

        // 3. Copy assets and build the resolver from what was deployed
        let resolver = match &self.static_dir {
            Some(static_dir) => {
                let manifest = self.process_assets(static_dir)?;
                stats.assets = manifest.len();
                manifest.resolver(UrlResolver::new(&self.config))
            }
            None => UrlResolver::new(&self.config),
        };

        // 4. Render and write every route
        stats.broken_refs = self.generate_pages(&resolver)?;
        stats.pages = Route::ALL.len();

        // 5. Sitemap
        if self.config.sitemap.enabled {
            self.generate_sitemap()?;
        }

        stats.duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        info!(
            pages = stats.pages,
            assets = stats.assets,
            broken_refs = stats.broken_refs,
            duration_ms = stats.duration_ms,
            "build complete"
        );

        Ok(stats)
    }

    /// Check configuration and inlined content without writing anything.
    pub fn validate(&self) -> Result<()> {
        self.config.validate()?;
        for route in Route::ALL {
            validate_route(route)?;
        }
        Ok(())
    }

    fn clean_output(&self) -> Result<()> {
        if self.output_dir.exists() {
            debug!(dir = %self.output_dir.display(), "cleaning output directory");
            fs::remove_dir_all(&self.output_dir)?;
        }
        fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }

    fn process_assets(&self, static_dir: &Path) -> Result<AssetManifest> {
        let processor = AssetProcessor::new(self.config.build.fingerprint);
        let manifest = processor.process(static_dir, &self.output_dir)?;

        fs::write(
            self.output_dir.join("asset-manifest.json"),
            manifest.to_json(),
        )?;
        Ok(manifest)
    }

    /// Render every route in parallel; returns the unresolved reference count.
    fn generate_pages(&self, resolver: &UrlResolver) -> Result<usize> {
        let generator = HtmlGenerator::new(self.config.clone());
        let ctx = RenderContext::new(&self.config, resolver);

        info!(count = Route::ALL.len(), "generating HTML pages");

        let broken = Route::ALL
            .par_iter()
            .map(|route| {
                let page = assemble(*route, &ctx);
                let html = generator.generate_page(&page, resolver)?;
                let output_path = generator.output_path(*route, &self.output_dir);

                if let Some(parent) = output_path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&output_path, &html)?;

                debug!(path = %output_path.display(), "wrote page");
                Ok::<_, BuildError>(generator.unresolved_references(&page, resolver).len())
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(broken.into_iter().sum())
    }

    fn generate_sitemap(&self) -> Result<()> {
        let generator = SitemapGenerator::new(self.config.clone()).with_lastmod(Utc::now());
        let path = self.output_dir.join("sitemap.xml");
        let mut file = fs::File::create(&path)?;
        generator.write_to(&Route::ALL, &mut file)?;

        debug!(path = %path.display(), "wrote sitemap");
        Ok(())
    }
}

/// Render every route and list the references that could not be resolved.
#[must_use]
pub fn broken_references(config: &Config, resolver: &UrlResolver) -> Vec<BrokenRef> {
    let ctx = RenderContext::new(config, resolver);
    let generator = HtmlGenerator::new(config.clone());

    Route::ALL
        .iter()
        .flat_map(|route| {
            let page = assemble(*route, &ctx);
            generator
                .unresolved_references(&page, resolver)
                .into_iter()
                .map(|reference| BrokenRef {
                    route: *route,
                    reference,
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn test_config(extra: &str) -> Config {
        Config::from_toml_str(&format!(
            "[site]\ntitle = \"OpenState\"\ntagline = \"Task runner\"\nurl = \"https://example.com\"\nimage = \"img-why-boilerplate@2x.png\"\n{extra}"
        ))
        .unwrap()
    }

    fn write(dir: &Path, relative: &str) {
        let path = dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"asset").unwrap();
    }

    const SITE_ASSETS: &[&str] = &[
        "img/023.png",
        "img/img-why-boilerplate@2x.png",
        "img/img-why-boilerplate-mobile@2x.png",
        "img/ic-boilerplate.svg",
        "img/ic-boilerplate-plugin.svg",
        "img/ic-frontend-libs.svg",
        "img/ic-libs.svg",
    ];

    #[test]
    fn test_build_without_static_dir() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("build");

        let stats = Builder::new(test_config(""), &output).build().unwrap();

        assert_eq!(stats.pages, 2);
        assert_eq!(stats.assets, 0);
        assert_eq!(stats.broken_refs, 0);
        assert!(output.join("index.html").exists());
        assert!(output.join("community/index.html").exists());
        assert!(output.join("sitemap.xml").exists());
        assert!(!output.join("asset-manifest.json").exists());
    }

    #[test]
    fn test_build_with_assets() {
        let dir = TempDir::new().unwrap();
        let static_dir = dir.path().join("static");
        for asset in SITE_ASSETS {
            write(&static_dir, asset);
        }
        let output = dir.path().join("build");

        let stats = Builder::new(test_config(""), &output)
            .with_static_dir(&static_dir)
            .build()
            .unwrap();

        assert_eq!(stats.assets, SITE_ASSETS.len());
        assert_eq!(stats.broken_refs, 0);
        assert!(output.join("img/023.png").exists());

        let manifest = fs::read_to_string(output.join("asset-manifest.json")).unwrap();
        assert!(manifest.contains(r#""img/ic-libs.svg": "img/ic-libs.svg""#));
    }

    #[test]
    fn test_missing_assets_render_placeholders() {
        let dir = TempDir::new().unwrap();
        let static_dir = dir.path().join("static");
        write(&static_dir, "img/023.png");
        let output = dir.path().join("build");

        let stats = Builder::new(test_config(""), &output)
            .with_static_dir(&static_dir)
            .build()
            .unwrap();
        assert!(stats.broken_refs > 0);

        let html = fs::read_to_string(output.join("index.html")).unwrap();
        assert!(html.contains(r#"data-broken-ref="img/ic-libs.svg""#));
        assert!(html.contains(r#"src="/img/023.png""#));
    }

    #[test]
    fn test_build_cleans_output() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("build");
        fs::create_dir_all(&output).unwrap();
        fs::write(output.join("stale.html"), "old").unwrap();

        Builder::new(test_config(""), &output).build().unwrap();
        assert!(!output.join("stale.html").exists());
    }

    #[test]
    fn test_sitemap_disabled() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("build");

        Builder::new(test_config("[sitemap]\nenabled = false\n"), &output)
            .build()
            .unwrap();
        assert!(!output.join("sitemap.xml").exists());
    }

    #[test]
    fn test_fingerprinted_assets_are_referenced() {
        let dir = TempDir::new().unwrap();
        let static_dir = dir.path().join("static");
        for asset in SITE_ASSETS {
            write(&static_dir, asset);
        }
        let output = dir.path().join("build");

        Builder::new(test_config("[build]\nfingerprint = true\n"), &output)
            .with_static_dir(&static_dir)
            .build()
            .unwrap();

        let html = fs::read_to_string(output.join("index.html")).unwrap();
        assert!(!html.contains(r#"src="/img/023.png""#));
        assert!(html.contains(r#"src="/img/023."#));
        assert!(!html.contains("broken-ref"));
    }

    #[test]
    fn test_fingerprinted_meta_image() {
        let dir = TempDir::new().unwrap();
        let static_dir = dir.path().join("static");
        for asset in SITE_ASSETS {
            write(&static_dir, asset);
        }
        let output = dir.path().join("build");

        let stats = Builder::new(test_config("[build]\nfingerprint = true\n"), &output)
            .with_static_dir(&static_dir)
            .build()
            .unwrap();
        assert_eq!(stats.broken_refs, 0);

        let deployed = fs::read_dir(output.join("img"))
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .find(|name| name.starts_with("img-why-boilerplate@2x.") && name.ends_with(".png"))
            .unwrap();
        assert_ne!(deployed, "img-why-boilerplate@2x.png");

        for file in ["index.html", "community/index.html"] {
            let html = fs::read_to_string(output.join(file)).unwrap();
            assert!(html.contains(&format!(
                r#"<meta property="og:image" content="https://example.com/img/{deployed}">"#
            )));
            assert!(!html.contains("https://example.com/img/img-why-boilerplate@2x.png"));
        }
    }

    #[test]
    fn test_missing_meta_image_is_reported() {
        let dir = TempDir::new().unwrap();
        let static_dir = dir.path().join("static");
        for asset in SITE_ASSETS {
            write(&static_dir, asset);
        }
        let output = dir.path().join("build");
        let config = Config::from_toml_str(
            "[site]\ntitle = \"OpenState\"\nurl = \"https://example.com\"\nimage = \"preview.png\"\n",
        )
        .unwrap();

        let resolver = AssetProcessor::scan(&static_dir)
            .unwrap()
            .resolver(UrlResolver::new(&config));
        let broken = broken_references(&config, &resolver);
        assert_eq!(
            broken,
            vec![
                BrokenRef {
                    route: Route::Home,
                    reference: "img/preview.png".to_string(),
                },
                BrokenRef {
                    route: Route::Community,
                    reference: "img/preview.png".to_string(),
                },
            ]
        );

        let stats = Builder::new(config, &output)
            .with_static_dir(&static_dir)
            .build()
            .unwrap();
        assert_eq!(stats.broken_refs, 2);

        let html = fs::read_to_string(output.join("index.html")).unwrap();
        assert!(!html.contains("og:image"));
    }

    #[test]
    fn test_build_counts_navbar_references() {
        let dir = TempDir::new().unwrap();
        let static_dir = dir.path().join("static");
        for asset in SITE_ASSETS {
            write(&static_dir, asset);
        }
        let output = dir.path().join("build");
        let config = test_config("[navbar]\nlogo = { alt = \"Logo\", src = \"img/logo.svg\" }\n");

        let resolver = AssetProcessor::scan(&static_dir)
            .unwrap()
            .resolver(UrlResolver::new(&config));
        let broken = broken_references(&config, &resolver);
        assert_eq!(broken.len(), Route::ALL.len());
        assert!(broken.iter().all(|b| b.reference == "img/logo.svg"));

        let stats = Builder::new(config, &output)
            .with_static_dir(&static_dir)
            .build()
            .unwrap();
        assert_eq!(stats.broken_refs, broken.len());
    }

    #[test]
    fn test_invalid_config_keeps_previous_output() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("build");
        fs::create_dir_all(&output).unwrap();
        fs::write(output.join("index.html"), "previous").unwrap();

        let mut config = test_config("");
        config.site.title = String::new();

        let result = Builder::new(config, &output).build();
        assert!(matches!(result, Err(BuildError::Content(_))));
        assert_eq!(
            fs::read_to_string(output.join("index.html")).unwrap(),
            "previous"
        );
    }

    #[test]
    fn test_broken_references() {
        let config = test_config("[navbar]\nlogo = { alt = \"Logo\", src = \"img/logo.svg\" }\n");
        let resolver = UrlResolver::new(&config).with_manifest([("img/023.png", "img/023.png")]);

        let broken = broken_references(&config, &resolver);
        assert!(broken.contains(&BrokenRef {
            route: Route::Home,
            reference: "img/ic-libs.svg".to_string(),
        }));
        assert!(broken.contains(&BrokenRef {
            route: Route::Community,
            reference: "img/logo.svg".to_string(),
        }));
        assert!(
            !broken
                .iter()
                .any(|b| b.reference == "img/023.png")
        );

        let trusting = UrlResolver::new(&config);
        assert!(broken_references(&config, &trusting).is_empty());
    }
}
