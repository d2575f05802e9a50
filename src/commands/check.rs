//! Scan the content tree for files that fail to parse
//!
//! The query operations drop unparsable files silently; this command is the
//! operator-facing view of what was dropped and why.

use anyhow::Result;

use crate::locale::Locale;
use crate::Site;

/// Scan posts and courses. Returns true when every file parsed cleanly.
pub fn run(site: &Site, locale: Option<&str>) -> Result<bool> {
    let store = site.store();

    let locales: Vec<Locale> = match locale {
        Some(s) => match Locale::parse(s) {
            Some(locale) => vec![locale],
            None => anyhow::bail!("Unsupported locale: {}. Supported: en, zh-Hans, zh-Hant", s),
        },
        None => Locale::ALL.to_vec(),
    };

    let mut clean = true;
    for locale in locales {
        let posts = store.scan_posts(locale);
        let courses = store.scan_courses(locale);

        println!(
            "{}: {} posts, {} courses",
            locale,
            posts.items.len(),
            courses.items.len()
        );

        for skipped in posts.skipped.iter().chain(courses.skipped.iter()) {
            clean = false;
            println!("  skipped {}: {}", skipped.path.display(), skipped.reason);
        }
    }

    if clean {
        println!("No problems found.");
    }

    Ok(clean)
}
