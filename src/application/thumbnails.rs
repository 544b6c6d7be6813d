use crate::application::collaborators::ThumbnailResolver;
use crate::domain::{Post, ThumbSize, WidgetConfig};
use crate::presentation::{
    escape_url,
    views::{ThumbnailImageTemplate, render_fragment},
};

/// Renders the post's stored thumbnail as an `<img>`, sized by the widget
/// when it sets `thumb_size` and by the image itself otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultThumbnails;

impl ThumbnailResolver for DefaultThumbnails {
    fn thumbnail_markup_for(&self, post: &Post, config: &WidgetConfig) -> String {
        let Some(thumbnail) = post.thumbnail.as_ref() else {
            return String::new();
        };
        let src = escape_url(&thumbnail.src);
        if src.is_empty() {
            return String::new();
        }

        let size = config.thumb_size.or(match (thumbnail.width, thumbnail.height) {
            (Some(width), Some(height)) => Some(ThumbSize { width, height }),
            _ => None,
        });

        render_fragment(
            "application::thumbnails::DefaultThumbnails",
            &ThumbnailImageTemplate {
                src: &src,
                alt: &thumbnail.alt,
                size,
            },
        )
    }
}
