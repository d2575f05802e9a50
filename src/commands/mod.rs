//! CLI commands

pub mod check;
pub mod list;
pub mod new;
pub mod search;
pub mod show;

use anyhow::Result;

use crate::content::ContentType;

/// Resolve a user-supplied content type name
pub fn parse_type(s: &str) -> Result<ContentType> {
    match s {
        "post" | "posts" => Ok(ContentType::Posts),
        "course" | "courses" => Ok(ContentType::Courses),
        _ => anyhow::bail!("Unknown type: {}. Available: posts, courses", s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_type() {
        assert_eq!(parse_type("posts").unwrap(), ContentType::Posts);
        assert_eq!(parse_type("course").unwrap(), ContentType::Courses);
        assert!(parse_type("pages").is_err());
    }
}
