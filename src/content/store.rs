//! Content store - discovers, parses, and serves content items
//!
//! Every query re-reads the underlying tree; there is no cache and no state
//! shared across calls. Missing directories, missing files, and unsupported
//! locales are all normal, silent absences. A file that fails to parse is
//! logged and excluded from results; the scan operations additionally retain
//! the failure reasons for operators.

use std::path::PathBuf;

use serde::Serialize;

use super::excerpt;
use super::frontmatter;
use super::model::{ContentItem, ContentMetadata, ContentType, Course, CourseMeta, Post, PostMeta};
use super::source::{ContentSource, FsSource};
use super::ContentError;
use crate::locale::Locale;

/// File-name suffix recognized for content files
const CONTENT_SUFFIX: &str = ".mdx";

/// Read-only store over a content tree laid out as
/// `<root>/<type>/<locale>/<slug>.mdx`
pub struct ContentStore<S = FsSource> {
    source: S,
    root: PathBuf,
}

/// Posts and courses matching a cross-type query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentSelection {
    pub posts: Vec<Post>,
    pub courses: Vec<Course>,
}

/// A file the scan could not turn into a content item
#[derive(Debug)]
pub struct SkippedFile {
    pub slug: String,
    pub path: PathBuf,
    pub reason: ContentError,
}

/// Outcome of a diagnostics scan: what loaded, and what was dropped
#[derive(Debug)]
pub struct ScanReport<M> {
    pub items: Vec<ContentItem<M>>,
    pub skipped: Vec<SkippedFile>,
}

impl<M> ScanReport<M> {
    /// True when every listed file parsed
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

impl ContentStore<FsSource> {
    /// Store over `root` on the local file system
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self::with_source(FsSource, root)
    }
}

impl<S: ContentSource> ContentStore<S> {
    pub fn with_source(source: S, root: impl Into<PathBuf>) -> Self {
        Self {
            source,
            root: root.into(),
        }
    }

    /// Slugs available for a content type and locale, ascending.
    ///
    /// A missing directory and an unsupported locale both yield an empty
    /// list.
    pub fn list_slugs(&self, kind: ContentType, locale: &str) -> Vec<String> {
        match Locale::parse(locale) {
            Some(locale) => self.slugs_in(kind, locale),
            None => Vec::new(),
        }
    }

    /// All posts for a locale, newest first
    pub fn all_posts(&self, locale: &str) -> Vec<Post> {
        self.all::<PostMeta>(locale)
    }

    /// All courses for a locale, newest first
    pub fn all_courses(&self, locale: &str) -> Vec<Course> {
        self.all::<CourseMeta>(locale)
    }

    /// Look up a single post. Unknown locales and slugs are both `None`, as
    /// is a file that fails to parse.
    pub fn post_by_slug(&self, slug: &str, locale: &str) -> Option<Post> {
        self.by_slug::<PostMeta>(slug, locale)
    }

    /// Look up a single course
    pub fn course_by_slug(&self, slug: &str, locale: &str) -> Option<Course> {
        self.by_slug::<CourseMeta>(slug, locale)
    }

    /// Posts and courses flagged as featured, order inherited from the full
    /// listings
    pub fn featured(&self, locale: &str) -> ContentSelection {
        ContentSelection {
            posts: self
                .all_posts(locale)
                .into_iter()
                .filter(|post| post.is_featured())
                .collect(),
            courses: self
                .all_courses(locale)
                .into_iter()
                .filter(|course| course.is_featured())
                .collect(),
        }
    }

    /// Posts and courses whose category matches, case-insensitively
    pub fn by_category(&self, category: &str, locale: &str) -> ContentSelection {
        ContentSelection {
            posts: self
                .all_posts(locale)
                .into_iter()
                .filter(|post| post.in_category(category))
                .collect(),
            courses: self
                .all_courses(locale)
                .into_iter()
                .filter(|course| course.in_category(category))
                .collect(),
        }
    }

    /// Posts and courses where `query` appears, case-insensitively, in the
    /// title, the description, or any tag. Substring containment only; no
    /// ranking.
    pub fn search(&self, query: &str, locale: &str) -> ContentSelection {
        ContentSelection {
            posts: self
                .all_posts(locale)
                .into_iter()
                .filter(|post| post.matches(query))
                .collect(),
            courses: self
                .all_courses(locale)
                .into_iter()
                .filter(|course| course.matches(query))
                .collect(),
        }
    }

    /// Diagnostics scan over posts: what loaded and what was dropped
    pub fn scan_posts(&self, locale: Locale) -> ScanReport<PostMeta> {
        self.scan::<PostMeta>(locale)
    }

    /// Diagnostics scan over courses
    pub fn scan_courses(&self, locale: Locale) -> ScanReport<CourseMeta> {
        self.scan::<CourseMeta>(locale)
    }

    fn all<M: ContentMetadata>(&self, locale: &str) -> Vec<ContentItem<M>> {
        match Locale::parse(locale) {
            Some(locale) => self.scan::<M>(locale).items,
            None => Vec::new(),
        }
    }

    fn by_slug<M: ContentMetadata>(&self, slug: &str, locale: &str) -> Option<ContentItem<M>> {
        let locale = Locale::parse(locale)?;
        match self.read_item::<M>(locale, slug) {
            Ok(item) => item,
            Err(reason) => {
                let path = self.path_for(M::CONTENT_TYPE, locale, slug);
                tracing::warn!("skipping {}: {}", path.display(), reason);
                None
            }
        }
    }

    fn scan<M: ContentMetadata>(&self, locale: Locale) -> ScanReport<M> {
        let mut items = Vec::new();
        let mut skipped = Vec::new();

        for slug in self.slugs_in(M::CONTENT_TYPE, locale) {
            match self.read_item::<M>(locale, &slug) {
                Ok(Some(item)) => items.push(item),
                // Listed but gone by read time; treat as absent
                Ok(None) => {}
                Err(reason) => {
                    let path = self.path_for(M::CONTENT_TYPE, locale, &slug);
                    tracing::warn!("skipping {}: {}", path.display(), reason);
                    skipped.push(SkippedFile { slug, path, reason });
                }
            }
        }

        sort_newest_first(&mut items);
        ScanReport { items, skipped }
    }

    fn read_item<M: ContentMetadata>(
        &self,
        locale: Locale,
        slug: &str,
    ) -> Result<Option<ContentItem<M>>, ContentError> {
        let path = self.path_for(M::CONTENT_TYPE, locale, slug);
        let raw = self.source.read_file(&path).map_err(|source| ContentError::Io {
            path: path.clone(),
            source,
        })?;
        let Some(raw) = raw else {
            return Ok(None);
        };

        let (meta, body) = frontmatter::parse::<M>(&raw)?;
        tracing::debug!("loaded {}", path.display());
        let excerpt = excerpt::derive(body);

        Ok(Some(ContentItem {
            slug: slug.to_string(),
            locale,
            meta,
            content: body.to_string(),
            excerpt: Some(excerpt),
        }))
    }

    fn slugs_in(&self, kind: ContentType, locale: Locale) -> Vec<String> {
        let dir = self.root.join(kind.dir()).join(locale.as_str());
        let entries = match self.source.list_entries(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("failed to list {}: {}", dir.display(), e);
                return Vec::new();
            }
        };

        let mut slugs: Vec<String> = entries
            .iter()
            .filter_map(|name| name.strip_suffix(CONTENT_SUFFIX))
            .map(str::to_string)
            .collect();
        slugs.sort();
        slugs.dedup();
        slugs
    }

    fn path_for(&self, kind: ContentType, locale: Locale, slug: &str) -> PathBuf {
        self.root
            .join(kind.dir())
            .join(locale.as_str())
            .join(format!("{}{}", slug, CONTENT_SUFFIX))
    }
}

/// Newest first; ties break on slug so the order never depends on directory
/// enumeration. Items whose date string does not parse order last.
fn sort_newest_first<M: ContentMetadata>(items: &mut [ContentItem<M>]) {
    items.sort_by(|a, b| {
        b.published()
            .cmp(&a.published())
            .then_with(|| a.slug.cmp(&b.slug))
    });
}
