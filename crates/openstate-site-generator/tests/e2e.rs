//! End-to-end tests for the OpenState site.
//!
//! These tests build the shipped site configuration and inspect the output.

use std::{fs, path::Path};

use openstate_site_core::Config;
use openstate_site_generator::{Builder, broken_references};
use openstate_site_ui::{Route, UrlResolver};
use tempfile::TempDir;

const SITE_CONFIG: &str = "../../site.toml";

fn site_config() -> Option<Config> {
    let path = Path::new(SITE_CONFIG);
    if !path.exists() {
        // Skip if running from different working directory
        return None;
    }
    Some(Config::load(path).expect("Config should load"))
}

#[test]
fn test_site_config_loads() {
    let Some(config) = site_config() else {
        return;
    };

    assert_eq!(config.site.title, "OpenState");
    assert_eq!(config.site.base_url, "/");
    assert_eq!(config.site.keywords.len(), 6);
    assert_eq!(config.navbar.items.len(), 5);
    assert_eq!(config.sitemap.priority, 0.5);
    assert!(!config.sitemap.trailing_slash);
}

#[test]
fn test_site_builds() {
    let Some(config) = site_config() else {
        return;
    };
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("build");

    let stats = Builder::new(config, &output).build().unwrap();
    assert_eq!(stats.pages, Route::ALL.len());
    assert_eq!(stats.broken_refs, 0);

    let home = fs::read_to_string(output.join("index.html")).unwrap();
    assert!(home.contains("<title>OpenState</title>"));
    assert!(home.contains(r#"content="workflow manager, task runner, language agnostic"#));
    assert!(home.contains("What you need, and nothing more"));
    assert!(home.contains("Language Agnostic"));
    assert!(home.contains("Start exploring"));
    assert!(home.contains(r#"href="https://walkergriggs.com""#));

    let positions: Vec<usize> = [
        "shift-intro",
        "shift-why",
        "shift-features",
        "shift-footer",
        "shift-foot",
    ]
    .iter()
    .map(|class| home.find(&format!(r#"class="{class}""#)).unwrap())
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    let community = fs::read_to_string(output.join("community/index.html")).unwrap();
    assert!(community.contains("<title>Get Started | OpenState</title>"));
    assert!(community.contains("Community Resources"));
    assert!(!community.contains("shift-features"));

    let sitemap = fs::read_to_string(output.join("sitemap.xml")).unwrap();
    assert!(sitemap.contains("<loc>https://github.com/walkergriggs/openstate/community</loc>"));
    assert!(sitemap.contains("<changefreq>weekly</changefreq>"));
}

#[test]
fn test_site_build_is_deterministic() {
    let Some(config) = site_config() else {
        return;
    };
    let dir = TempDir::new().unwrap();

    let first = dir.path().join("first");
    let second = dir.path().join("second");
    Builder::new(config.clone(), &first).build().unwrap();
    Builder::new(config, &second).build().unwrap();

    for file in ["index.html", "community/index.html"] {
        assert_eq!(
            fs::read_to_string(first.join(file)).unwrap(),
            fs::read_to_string(second.join(file)).unwrap(),
            "{file} differs between builds"
        );
    }
}

#[test]
fn test_site_references_against_empty_static_dir() {
    let Some(config) = site_config() else {
        return;
    };

    let resolver = UrlResolver::new(&config).with_manifest(Vec::<(String, String)>::new());
    let broken = broken_references(&config, &resolver);

    let references: Vec<&str> = broken.iter().map(|b| b.reference.as_str()).collect();
    assert!(references.contains(&"img/023.png"));
    assert!(references.contains(&"img/eightshift-dev-kit-logo.svg"));
    assert!(broken.iter().any(|b| b.route == Route::Community));
}
