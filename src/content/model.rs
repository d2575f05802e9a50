//! Content item models
//!
//! Front-matter keys are camelCase (`publishedAt`, `readingTime`) as written
//! by content authors; unknown keys are retained in `extra` in file order.

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::date::parse_date_string;
use super::frontmatter::string_or_seq;
use crate::locale::Locale;

/// Content types served by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Posts,
    Courses,
}

impl ContentType {
    /// Directory name under the content root
    pub fn dir(&self) -> &'static str {
        match self {
            ContentType::Posts => "posts",
            ContentType::Courses => "courses",
        }
    }
}

/// Author-declared difficulty of a post or course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Metadata shared by every content type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMeta {
    pub title: String,
    pub description: String,
    /// Publication date as the author wrote it; compared as a parsed
    /// instant, never lexicographically
    pub published_at: String,
    pub updated_at: Option<String>,
    pub author: String,
    /// Insertion order preserved; a scalar string is accepted as a
    /// one-element list
    #[serde(default, deserialize_with = "string_or_seq")]
    pub tags: Vec<String>,
    pub category: String,
    pub featured: Option<bool>,
    pub difficulty: Option<Difficulty>,
    /// Custom front-matter fields
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl ContentMeta {
    /// Parsed publication instant, if the date string parses
    pub fn published(&self) -> Option<NaiveDateTime> {
        parse_date_string(&self.published_at)
    }

    /// Parsed update instant, if present and parsable
    pub fn updated(&self) -> Option<NaiveDateTime> {
        self.updated_at.as_deref().and_then(parse_date_string)
    }

    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }
}

/// Post metadata: the shared fields plus an optional reading time in minutes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMeta {
    #[serde(flatten)]
    pub common: ContentMeta,
    pub reading_time: Option<u32>,
}

/// Course metadata: the shared fields plus commercial details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseMeta {
    #[serde(flatten)]
    pub common: ContentMeta,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub duration: Option<String>,
    pub lessons: Option<u32>,
    pub level: Option<Difficulty>,
}

/// Metadata the store can load generically
pub trait ContentMetadata: DeserializeOwned {
    /// The directory this metadata type is read from
    const CONTENT_TYPE: ContentType;

    /// The fields shared by every content type
    fn common(&self) -> &ContentMeta;
}

impl ContentMetadata for PostMeta {
    const CONTENT_TYPE: ContentType = ContentType::Posts;

    fn common(&self) -> &ContentMeta {
        &self.common
    }
}

impl ContentMetadata for CourseMeta {
    const CONTENT_TYPE: ContentType = ContentType::Courses;

    fn common(&self) -> &ContentMeta {
        &self.common
    }
}

/// A single content item: metadata plus the raw MDX body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem<M> {
    /// Stable identifier derived from the file name
    pub slug: String,
    pub locale: Locale,
    pub meta: M,
    /// Raw MDX body, front matter stripped
    pub content: String,
    /// Markup-stripped preview of the body
    pub excerpt: Option<String>,
}

/// A blog post
pub type Post = ContentItem<PostMeta>;

/// A course
pub type Course = ContentItem<CourseMeta>;

impl<M: ContentMetadata> ContentItem<M> {
    /// Parsed publication instant, if the author's date string parses
    pub fn published(&self) -> Option<NaiveDateTime> {
        self.meta.common().published()
    }

    pub fn is_featured(&self) -> bool {
        self.meta.common().is_featured()
    }

    /// Case-insensitive exact category match
    pub fn in_category(&self, category: &str) -> bool {
        self.meta.common().category.to_lowercase() == category.to_lowercase()
    }

    /// Case-insensitive substring match over title, description, and tags
    pub fn matches(&self, query: &str) -> bool {
        let term = query.to_lowercase();
        let meta = self.meta.common();
        meta.title.to_lowercase().contains(&term)
            || meta.description.to_lowercase().contains(&term)
            || meta.tags.iter().any(|tag| tag.to_lowercase().contains(&term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(title: &str, category: &str, tags: &[&str]) -> PostMeta {
        PostMeta {
            common: ContentMeta {
                title: title.to_string(),
                description: "A description".to_string(),
                published_at: "2024-01-01".to_string(),
                updated_at: None,
                author: "Jane Chen".to_string(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                category: category.to_string(),
                featured: None,
                difficulty: None,
                extra: IndexMap::new(),
            },
            reading_time: None,
        }
    }

    fn item(title: &str, category: &str, tags: &[&str]) -> Post {
        ContentItem {
            slug: "a-post".to_string(),
            locale: Locale::En,
            meta: meta(title, category, tags),
            content: String::new(),
            excerpt: None,
        }
    }

    #[test]
    fn test_course_meta_parses_camel_case_keys() {
        let yaml = r#"
title: System Design Fundamentals
description: Scale from one box to many
publishedAt: 2024-02-01
updatedAt: 2024-03-01
author: Jane Chen
tags: [system-design]
category: Engineering
featured: true
price: 99.0
currency: USD
duration: 6 weeks
lessons: 24
level: advanced
"#;
        let meta: CourseMeta = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(meta.common.title, "System Design Fundamentals");
        assert_eq!(meta.common.updated_at.as_deref(), Some("2024-03-01"));
        assert!(meta.common.is_featured());
        assert_eq!(meta.price, Some(99.0));
        assert_eq!(meta.lessons, Some(24));
        assert_eq!(meta.level, Some(Difficulty::Advanced));
    }

    #[test]
    fn test_reading_time_is_not_misfiled_as_extra() {
        let yaml = r#"
title: t
description: d
publishedAt: 2024-01-01
author: a
category: c
readingTime: 8
"#;
        let meta: PostMeta = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(meta.reading_time, Some(8));
        assert!(meta.common.extra.get("readingTime").is_none());
    }

    #[test]
    fn test_in_category_ignores_case() {
        let post = item("Two Pointers", "Algorithms", &[]);
        assert!(post.in_category("algorithms"));
        assert!(post.in_category("ALGORITHMS"));
        assert!(!post.in_category("algo"));
    }

    #[test]
    fn test_matches_title_description_and_tags() {
        let post = item("Binary Search Algorithm", "Algorithms", &["divide-and-conquer"]);
        assert!(post.matches("binary"));
        assert!(post.matches("DESCRIPTION"));
        assert!(post.matches("conquer"));
        assert!(!post.matches("graphs"));
    }

    #[test]
    fn test_published_parses_the_date_string() {
        let post = item("t", "c", &[]);
        assert!(post.published().is_some());
    }
}
