//! Content module - typed content items and the store that serves them

mod date;
mod excerpt;
mod frontmatter;
mod model;
mod source;
mod store;

pub use model::{
    ContentItem, ContentMeta, ContentMetadata, ContentType, Course, CourseMeta, Difficulty, Post,
    PostMeta,
};
pub use source::{ContentSource, FsSource, MemorySource};
pub use store::{ContentSelection, ContentStore, ScanReport, SkippedFile};

use std::path::PathBuf;
use thiserror::Error;

/// Why a content file could not be turned into a content item
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing front-matter block")]
    MissingFrontMatter,

    #[error("unterminated front-matter block")]
    UnterminatedFrontMatter,

    #[error("invalid front matter: {0}")]
    FrontMatter(#[from] serde_yaml::Error),
}
