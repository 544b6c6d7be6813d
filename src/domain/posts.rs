//! Post value objects and the cursor that tracks the post being rendered.

use std::{borrow::Cow, fmt};

use serde::{Deserialize, Serialize};
use slug::slugify;
use time::{OffsetDateTime, format_description::FormatItem, macros::format_description};

/// Display format used when a widget does not configure its own.
pub const HUMAN_DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[month repr:long] [day padding:none], [year]");

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PostId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub slug: Option<String>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: None,
        }
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Explicit slug when one was stored, otherwise one derived from the name.
    pub fn slug(&self) -> Cow<'_, str> {
        match self.slug.as_deref() {
            Some(slug) if !slug.trim().is_empty() => Cow::Borrowed(slug),
            _ => Cow::Owned(slugify(&self.name)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub src: String,
    pub alt: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: PostId,
    pub slug: String,
    pub title: String,
    pub published: OffsetDateTime,
    pub categories: Vec<Category>,
    pub thumbnail: Option<Thumbnail>,
}

impl Post {
    pub fn new(
        id: impl Into<PostId>,
        slug: impl Into<String>,
        title: impl Into<String>,
        published: OffsetDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            title: title.into(),
            published,
            categories: Vec::new(),
            thumbnail: None,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: Thumbnail) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    pub fn in_category(&self, slug: &str) -> bool {
        self.categories.iter().any(|category| category.slug() == slug)
    }
}

/// Names the post an operation renders. `Current` defers to the cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PostRef {
    #[default]
    Current,
    Id(PostId),
}

impl From<PostId> for PostRef {
    fn from(id: PostId) -> Self {
        Self::Id(id)
    }
}

/// Position of the host's iteration over a result set.
///
/// The host advances the cursor between list items; renderers only read it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostCursor {
    current: Option<PostId>,
}

impl PostCursor {
    pub fn at(id: impl Into<PostId>) -> Self {
        Self {
            current: Some(id.into()),
        }
    }

    pub fn current(&self) -> Option<PostId> {
        self.current
    }

    /// Resolve a reference against this cursor. `None` when the reference is
    /// `Current` and the cursor is not positioned on a post.
    pub fn target(&self, reference: PostRef) -> Option<PostId> {
        match reference {
            PostRef::Current => self.current,
            PostRef::Id(id) => Some(id),
        }
    }
}
