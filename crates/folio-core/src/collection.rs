//! Content collections.
//!
//! A collection is a named set of markdown documents of one type. Slugs are
//! unique within a collection only: `blog/hello` and `project/hello` are two
//! different items.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The content collections known to the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    /// Blog posts, stored under `blogs/`.
    Blog,
    /// Portfolio projects, stored under `projects/`.
    Project,
}

impl Collection {
    /// Every collection, in discovery order.
    pub const ALL: [Collection; 2] = [Collection::Blog, Collection::Project];

    /// Directory name under the content root.
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Blog => "blogs",
            Self::Project => "projects",
        }
    }

    /// Public route prefix for items of this collection.
    pub fn route_prefix(self) -> &'static str {
        match self {
            Self::Blog => "/blog",
            Self::Project => "/projects",
        }
    }

    /// Name of the label field (`tags` for posts, `technologies` for projects).
    pub fn label_field(self) -> &'static str {
        match self {
            Self::Blog => "tags",
            Self::Project => "technologies",
        }
    }

    /// Singular kind name, as used in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Project => "project",
        }
    }

    /// Public path of an item in this collection.
    pub fn item_path(self, slug: &str) -> String {
        format!("{}/{}", self.route_prefix(), slug)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "blog" | "blogs" | "post" | "posts" => Ok(Self::Blog),
            "project" | "projects" => Ok(Self::Project),
            other => Err(Error::invalid_data(format!("Unknown collection: {other}"))),
        }
    }
}
