use askama::{Error as AskamaError, Template};
use thiserror::Error;
use tracing::error;

use crate::domain::ThumbSize;

#[derive(Debug, Error)]
#[error("{origin}: fragment template failed to render")]
pub struct TemplateRenderError {
    pub(crate) origin: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(origin: &'static str, error: AskamaError) -> Self {
        Self { origin, error }
    }
}

/// Render a fragment template. A failed render is logged and yields an empty
/// fragment; render operations never surface errors to the host.
pub fn render_fragment<T: Template>(origin: &'static str, template: &T) -> String {
    template.render().unwrap_or_else(|err| {
        let err = TemplateRenderError::new(origin, err);
        error!(origin = err.origin, error = %err.error, "{err}");
        String::new()
    })
}

#[derive(Template)]
#[template(
    source = r#"<span class="{{ class_attr }}"><a href="{{ permalink }}">{{ thumbnail|safe }}</a></span>"#,
    ext = "html"
)]
pub struct ThumbnailTemplate<'a> {
    pub class_attr: &'a str,
    pub permalink: &'a str,
    pub thumbnail: &'a str,
}

#[derive(Template)]
#[template(
    source = r#"<span class="posted-on acatsw-posted-on post-date"><span class="screen-reader-text">{{ label }} </span><a href="{{ permalink }}" rel="bookmark"><time pubdate class="entry-date acatsw-entry-date published updated" datetime="{{ timestamp }}">{{ display_date }}</time></a></span>"#,
    ext = "html"
)]
pub struct PostedOnTemplate<'a> {
    pub label: &'a str,
    pub permalink: &'a str,
    pub timestamp: &'a str,
    pub display_date: &'a str,
}

#[derive(Template)]
#[template(
    source = r#"<img src="{{ src }}" alt="{{ alt }}"{% if let Some(size) = size %} width="{{ size.width }}" height="{{ size.height }}"{% endif %} class="acatsw-thumbnail">"#,
    ext = "html"
)]
pub struct ThumbnailImageTemplate<'a> {
    pub src: &'a str,
    pub alt: &'a str,
    pub size: Option<ThumbSize>,
}

#[derive(Template)]
#[template(
    source = r#"<span class="entry-title acatsw-post-title"><a href="{{ permalink }}" rel="bookmark">{{ title }}</a></span>"#,
    ext = "html"
)]
pub struct PostTitleTemplate<'a> {
    pub permalink: &'a str,
    pub title: &'a str,
}
