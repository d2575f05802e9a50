//! Search content by title, description, or tags

use anyhow::Result;

use crate::Site;

pub fn run(site: &Site, query: &str, locale: &str) -> Result<()> {
    let store = site.store();
    let results = store.search(query, locale);

    println!("Posts ({}):", results.posts.len());
    for post in &results.posts {
        println!(
            "  {} - {} [{}]",
            post.meta.common.published_at, post.meta.common.title, post.slug
        );
    }

    println!("Courses ({}):", results.courses.len());
    for course in &results.courses {
        println!(
            "  {} - {} [{}]",
            course.meta.common.published_at, course.meta.common.title, course.slug
        );
    }

    Ok(())
}
