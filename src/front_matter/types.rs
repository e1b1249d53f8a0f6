use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Front matter for a page source document
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Frontmatter {
    /// Page title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Page language override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    /// Page description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Layout component to use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,

    /// Custom permalink
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,

    /// Date as a string (YYYY-MM-DD or YYYY-MM-DD HH:MM:SS)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Custom slug for permalink generation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Custom front matter fields
    #[serde(flatten)]
    pub custom: HashMap<String, serde_yaml::Value>,
}

impl Frontmatter {
    /// Create a new empty front matter
    pub fn new() -> Self {
        Frontmatter::default()
    }

    /// Check whether no field is set at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.lang.is_none()
            && self.description.is_none()
            && self.layout.is_none()
            && self.permalink.is_none()
            && self.date.is_none()
            && self.slug.is_none()
            && self.custom.is_empty()
    }

    /// Merge with another front matter, keeping existing values if present
    pub fn merge(&mut self, other: &Frontmatter) {
        if self.title.is_none() && other.title.is_some() {
            self.title = other.title.clone();
        }

        if self.lang.is_none() && other.lang.is_some() {
            self.lang = other.lang.clone();
        }

        if self.description.is_none() && other.description.is_some() {
            self.description = other.description.clone();
        }

        if self.layout.is_none() && other.layout.is_some() {
            self.layout = other.layout.clone();
        }

        if self.permalink.is_none() && other.permalink.is_some() {
            self.permalink = other.permalink.clone();
        }

        if self.date.is_none() && other.date.is_some() {
            self.date = other.date.clone();
        }

        if self.slug.is_none() && other.slug.is_some() {
            self.slug = other.slug.clone();
        }

        // Merge custom fields, keeping existing values
        for (key, value) in &other.custom {
            if !self.custom.contains_key(key) {
                self.custom.insert(key.clone(), value.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_front_matter() {
        let fm = Frontmatter::new();
        assert!(fm.is_empty());
    }

    #[test]
    fn test_merge_keeps_existing() {
        let mut fm = Frontmatter {
            title: Some("Existing".to_string()),
            ..Frontmatter::default()
        };
        let other = Frontmatter {
            title: Some("Other".to_string()),
            lang: Some("zh-CN".to_string()),
            ..Frontmatter::default()
        };

        fm.merge(&other);
        assert_eq!(fm.title.as_deref(), Some("Existing"));
        assert_eq!(fm.lang.as_deref(), Some("zh-CN"));
    }
}
