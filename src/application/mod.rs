//! Application layer: the renderer, its extension points, and the
//! collaborators it consults for post data.

pub mod attributes;
pub mod collaborators;
pub mod dates;
pub mod error;
pub mod hooks;
pub mod permalinks;
pub mod renderer;
pub mod sanitize;
pub mod thumbnails;

pub use attributes::DefaultPostAttributes;
pub use collaborators::{
    ClassSanitizer, Collaborators, DateFormatter, DateTimeProvider, PermalinkProvider,
    PostAttributes, PostResolver, ThumbnailResolver,
};
pub use dates::TimeDateFormatter;
pub use hooks::{HookPoint, Hooks};
pub use permalinks::SitePermalinks;
pub use renderer::{
    COLOPHON, DEFAULT_POSTED_ON_LABEL, LIST_ITEM_CLASS, POSTS_LIST_CLASS, Renderer,
    RendererOptions, THUMBNAIL_CLASS,
};
pub use sanitize::{HtmlClassSanitizer, sanitize_html_class};
pub use thumbnails::DefaultThumbnails;
