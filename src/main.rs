//! CLI entry point for mdxstore

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mdxstore")]
#[command(version)]
#[command(about = "A localized MDX content store for content sites", long_about = None)]
struct Cli {
    /// Set the site base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List content items
    #[command(alias = "ls")]
    List {
        /// Type of content to list (posts, courses)
        #[arg(default_value = "posts")]
        r#type: String,

        /// Locale to list
        #[arg(short, long, default_value = "en")]
        locale: String,

        /// Only items in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Only featured items
        #[arg(long)]
        featured: bool,

        /// Emit the items as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single content item
    Show {
        /// Type of content (posts, courses)
        r#type: String,

        /// Slug of the item
        slug: String,

        #[arg(short, long, default_value = "en")]
        locale: String,

        /// Emit the item as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search content by title, description, or tags
    Search {
        query: String,

        #[arg(short, long, default_value = "en")]
        locale: String,
    },

    /// Scan the content tree and report files that fail to parse
    Check {
        /// Limit the scan to one locale
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Scaffold a new content file
    New {
        /// Type of content to create (posts, courses)
        r#type: String,

        /// Title of the new item
        title: String,

        #[arg(short, long, default_value = "en")]
        locale: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "mdxstore=debug,info"
    } else {
        "mdxstore=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());
    let site = mdxstore::Site::new(&base_dir)?;

    match cli.command {
        Commands::List {
            r#type,
            locale,
            category,
            featured,
            json,
        } => {
            mdxstore::commands::list::run(&site, &r#type, &locale, category.as_deref(), featured, json)?;
        }

        Commands::Show {
            r#type,
            slug,
            locale,
            json,
        } => {
            let found = mdxstore::commands::show::run(&site, &r#type, &slug, &locale, json)?;
            if !found {
                std::process::exit(1);
            }
        }

        Commands::Search { query, locale } => {
            mdxstore::commands::search::run(&site, &query, &locale)?;
        }

        Commands::Check { locale } => {
            let clean = mdxstore::commands::check::run(&site, locale.as_deref())?;
            if !clean {
                std::process::exit(1);
            }
        }

        Commands::New {
            r#type,
            title,
            locale,
        } => {
            tracing::info!("Creating new {} with title: {}", r#type, title);
            mdxstore::commands::new::run(&site, &r#type, &title, &locale)?;
        }
    }

    Ok(())
}
