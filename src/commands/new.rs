//! Scaffold a new content file
//!
//! Editor tooling; the store itself never writes at query time.

use anyhow::Result;
use std::fs;

use super::parse_type;
use crate::locale::Locale;
use crate::Site;

/// Create `<root>/<type>/<locale>/<slug>.mdx` with a front-matter template
pub fn run(site: &Site, content_type: &str, title: &str, locale: &str) -> Result<()> {
    let kind = parse_type(content_type)?;
    let Some(locale) = Locale::parse(locale) else {
        anyhow::bail!("Unsupported locale: {}. Supported: en, zh-Hans, zh-Hant", locale);
    };

    let slug = slug::slugify(title);
    let target_dir = site.content_dir.join(kind.dir()).join(locale.as_str());
    fs::create_dir_all(&target_dir)?;

    let file_path = target_dir.join(format!("{}.mdx", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let today = chrono::Local::now().format("%Y-%m-%d");
    let content = format!(
        r#"---
title: "{title}"
description: ""
publishedAt: {today}
author: "{author}"
tags: []
category: ""
---
"#,
        title = title,
        today = today,
        author = site.config.author,
    );

    fs::write(&file_path, content)?;
    println!("Created: {:?}", file_path);

    Ok(())
}
