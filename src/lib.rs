//! mdxstore: a localized MDX content store for content sites
//!
//! This crate reads a tree of front-matter-annotated MDX files laid out by
//! content type and locale, parses them into typed content items, and serves
//! query operations (list, lookup, featured, category, search) to in-process
//! consumers such as page renderers and sitemap generators.

pub mod commands;
pub mod config;
pub mod content;
pub mod locale;

use anyhow::Result;
use std::path::Path;

use content::ContentStore;

/// Config file looked up in the site base directory
const CONFIG_FILE: &str = "site.yml";

/// A content site: configuration plus the location of its content tree
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content root directory
    pub content_dir: std::path::PathBuf,
}

impl Site {
    /// Create a site from a base directory, loading `site.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
        })
    }

    /// A store over this site's content tree
    pub fn store(&self) -> ContentStore {
        ContentStore::open(&self.content_dir)
    }
}
