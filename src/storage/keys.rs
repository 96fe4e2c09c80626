//! Object key naming for generated posts.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::BlogError;

const MAX_SLUG_LEN: usize = 64;
const FALLBACK_SLUG: &str = "untitled";

/// Decides whether repeated topics share an object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyPolicy {
    /// `{prefix}{yyyy}/{mm}/{dd}/{slug}-{uuid}.md`; concurrent invocations never collide.
    #[default]
    Unique,
    /// `{prefix}{slug}.md`; the latest post for a topic overwrites the previous one.
    Topic,
}

impl FromStr for KeyPolicy {
    type Err = BlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unique" => Ok(KeyPolicy::Unique),
            "topic" => Ok(KeyPolicy::Topic),
            other => Err(BlogError::Config(format!(
                "BLOG_KEY_POLICY: expected 'unique' or 'topic', got '{other}'"
            ))),
        }
    }
}

pub fn slugify(topic: &str) -> String {
    static NON_ALNUM: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("static regex compile"));

    let lowered = topic.to_lowercase();
    let joined = NON_ALNUM.replace_all(&lowered, "-");
    let mut slug: String = joined.trim_matches('-').chars().take(MAX_SLUG_LEN).collect();
    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_start_matches('/');
    if trimmed.is_empty() || trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    }
}

pub fn object_key(
    policy: KeyPolicy,
    prefix: &str,
    topic: &str,
    now: DateTime<Utc>,
    id: Uuid,
) -> String {
    let prefix = normalize_prefix(prefix);
    let slug = slugify(topic);
    match policy {
        KeyPolicy::Unique => format!("{prefix}{}/{slug}-{id}.md", now.format("%Y/%m/%d")),
        KeyPolicy::Topic => format!("{prefix}{slug}.md"),
    }
}
