//! Traits describing the services a renderer consults for post data.

use std::sync::Arc;

use crate::application::{
    attributes::DefaultPostAttributes, dates::TimeDateFormatter, sanitize::HtmlClassSanitizer,
    thumbnails::DefaultThumbnails,
};
use crate::domain::{Post, PostCursor, PostRef, WidgetConfig};

/// Looks up the post a render operation targets.
pub trait PostResolver: Send + Sync {
    fn resolve(&self, reference: PostRef, cursor: &PostCursor) -> Option<Post>;
}

/// Supplies the `id` and `class` attribute values of a list item.
pub trait PostAttributes: Send + Sync {
    fn id_for(&self, post: &Post, config: &WidgetConfig) -> String;
    fn class_for(&self, post: &Post, config: &WidgetConfig) -> String;
}

/// Produces the inner thumbnail markup for a post. An empty string means the
/// post has no thumbnail to show.
pub trait ThumbnailResolver: Send + Sync {
    fn thumbnail_markup_for(&self, post: &Post, config: &WidgetConfig) -> String;
}

/// Human-readable publish date.
pub trait DateFormatter: Send + Sync {
    fn display_date_for(&self, post: &Post, config: &WidgetConfig) -> String;
}

/// Machine-readable publish timestamp for `datetime` attributes.
pub trait DateTimeProvider: Send + Sync {
    fn machine_timestamp_for(&self, post: &Post) -> String;
}

pub trait PermalinkProvider: Send + Sync {
    fn permalink_for(&self, post: &Post) -> String;
}

/// Reduces an arbitrary string to a token that is safe inside `class="…"`.
pub trait ClassSanitizer: Send + Sync {
    fn sanitize_class(&self, class: &str) -> String;
}

/// The set of collaborators a renderer is built with.
#[derive(Clone)]
pub struct Collaborators {
    pub posts: Arc<dyn PostResolver>,
    pub attributes: Arc<dyn PostAttributes>,
    pub thumbnails: Arc<dyn ThumbnailResolver>,
    pub dates: Arc<dyn DateFormatter>,
    pub timestamps: Arc<dyn DateTimeProvider>,
    pub permalinks: Arc<dyn PermalinkProvider>,
    pub sanitizer: Arc<dyn ClassSanitizer>,
}

impl Collaborators {
    /// Build with the given post source and permalinks; every other
    /// collaborator starts as the crate default.
    pub fn new(posts: Arc<dyn PostResolver>, permalinks: Arc<dyn PermalinkProvider>) -> Self {
        let dates = Arc::new(TimeDateFormatter);
        Self {
            posts,
            attributes: Arc::new(DefaultPostAttributes::default()),
            thumbnails: Arc::new(DefaultThumbnails),
            dates: dates.clone(),
            timestamps: dates,
            permalinks,
            sanitizer: Arc::new(HtmlClassSanitizer),
        }
    }

    pub fn with_attributes(mut self, attributes: Arc<dyn PostAttributes>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_thumbnails(mut self, thumbnails: Arc<dyn ThumbnailResolver>) -> Self {
        self.thumbnails = thumbnails;
        self
    }

    pub fn with_dates(mut self, dates: Arc<dyn DateFormatter>) -> Self {
        self.dates = dates;
        self
    }

    pub fn with_timestamps(mut self, timestamps: Arc<dyn DateTimeProvider>) -> Self {
        self.timestamps = timestamps;
        self
    }

    pub fn with_sanitizer(mut self, sanitizer: Arc<dyn ClassSanitizer>) -> Self {
        self.sanitizer = sanitizer;
        self
    }
}
