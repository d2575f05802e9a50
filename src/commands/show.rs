//! Show a single content item

use anyhow::Result;

use super::parse_type;
use crate::content::{ContentItem, ContentMetadata, ContentType};
use crate::Site;

/// Print one item by slug. Returns false when it does not exist.
pub fn run(site: &Site, content_type: &str, slug: &str, locale: &str, json: bool) -> Result<bool> {
    let store = site.store();

    match parse_type(content_type)? {
        ContentType::Posts => match store.post_by_slug(slug, locale) {
            Some(post) => {
                print_item(&post, json)?;
                Ok(true)
            }
            None => {
                println!("Not found: {} ({})", slug, locale);
                Ok(false)
            }
        },
        ContentType::Courses => match store.course_by_slug(slug, locale) {
            Some(course) => {
                print_item(&course, json)?;
                Ok(true)
            }
            None => {
                println!("Not found: {} ({})", slug, locale);
                Ok(false)
            }
        },
    }
}

fn print_item<M: ContentMetadata + serde::Serialize>(
    item: &ContentItem<M>,
    json: bool,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
        return Ok(());
    }

    let meta = item.meta.common();
    println!("{}", meta.title);
    println!("  slug:      {}", item.slug);
    println!("  locale:    {}", item.locale);
    println!("  author:    {}", meta.author);
    println!("  published: {}", meta.published_at);
    if let Some(updated) = &meta.updated_at {
        println!("  updated:   {}", updated);
    }
    println!("  category:  {}", meta.category);
    if !meta.tags.is_empty() {
        println!("  tags:      {}", meta.tags.join(", "));
    }
    if let Some(excerpt) = &item.excerpt {
        println!("\n{}", excerpt);
    }
    Ok(())
}
