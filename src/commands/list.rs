//! List content items

use anyhow::Result;

use super::parse_type;
use crate::content::{ContentItem, ContentMetadata, ContentType};
use crate::Site;

/// List items of one content type for a locale
pub fn run(
    site: &Site,
    content_type: &str,
    locale: &str,
    category: Option<&str>,
    featured_only: bool,
    json: bool,
) -> Result<()> {
    let store = site.store();

    match parse_type(content_type)? {
        ContentType::Posts => {
            let posts = filter(store.all_posts(locale), category, featured_only);
            print_items("Posts", &posts, json)
        }
        ContentType::Courses => {
            let courses = filter(store.all_courses(locale), category, featured_only);
            print_items("Courses", &courses, json)
        }
    }
}

fn filter<M: ContentMetadata>(
    mut items: Vec<ContentItem<M>>,
    category: Option<&str>,
    featured_only: bool,
) -> Vec<ContentItem<M>> {
    if let Some(category) = category {
        items.retain(|item| item.in_category(category));
    }
    if featured_only {
        items.retain(|item| item.is_featured());
    }
    items
}

fn print_items<M: ContentMetadata + serde::Serialize>(
    label: &str,
    items: &[ContentItem<M>],
    json: bool,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
        return Ok(());
    }

    println!("{} ({}):", label, items.len());
    for item in items {
        let meta = item.meta.common();
        println!("  {} - {} [{}]", meta.published_at, meta.title, item.slug);
    }
    Ok(())
}
