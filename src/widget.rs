//! Host-side driver that walks a result set through the renderer.
//!
//! Order per widget: list start, then for each post the item start,
//! thumbnail (when `show_thumb`), title, date (when `show_date`) and item
//! end, then list end and the attribution comment.

use std::{io, sync::Arc};

use tracing::{debug, info, instrument, warn};

use crate::application::{
    Collaborators, Renderer, RendererOptions, SitePermalinks, error::AppError,
};
use crate::config::{RenderArgs, Settings};
use crate::domain::{Category, Post, PostRef, QueryContext, WidgetConfig};
use crate::infra::fixtures;
use crate::presentation::{
    OutputMode, OutputSink, WriterSink, escape_url,
    views::{PostTitleTemplate, render_fragment},
};

/// Render the whole widget into `sink`, moving the query's cursor across
/// `posts`. The cursor is cleared again before returning.
#[instrument(level = "debug", skip_all, fields(posts = posts.len()))]
pub fn render_widget(
    renderer: &Renderer,
    config: &WidgetConfig,
    query: &mut QueryContext,
    posts: &[&Post],
    sink: &mut dyn OutputSink,
) {
    renderer.start_list(config, query, OutputMode::Echo(&mut *sink));

    for post in posts {
        query.set_current(post.id);
        debug!(post_id = %post.id, "rendering list item");

        renderer.start_list_item(config, query, OutputMode::Echo(&mut *sink));
        if config.show_thumb {
            renderer.post_thumbnail(
                PostRef::Current,
                query.cursor(),
                config,
                OutputMode::Echo(&mut *sink),
            );
        }
        sink.emit(&post_title(renderer, post));
        if config.show_date {
            renderer.posted_on(
                PostRef::Current,
                query.cursor(),
                config,
                OutputMode::Echo(&mut *sink),
            );
        }
        renderer.end_list_item(config, query, OutputMode::Echo(&mut *sink));
    }

    query.clear_current();
    renderer.end_list(config, query, OutputMode::Echo(&mut *sink));
    Renderer::colophon(OutputMode::Echo(sink));
}

/// Convenience wrapper that collects the widget into a string.
pub fn render_widget_to_string(
    renderer: &Renderer,
    config: &WidgetConfig,
    query: &mut QueryContext,
    posts: &[&Post],
) -> String {
    let mut html = String::new();
    render_widget(renderer, config, query, posts, &mut html);
    html
}

/// Load the fixture named by `args`, optionally narrow it to one category,
/// and write the widget followed by a newline to `out`.
///
/// Returns the number of posts rendered.
#[instrument(level = "debug", skip_all, fields(posts_file = %args.posts_file.display()))]
pub fn render_fixture<W: io::Write>(
    settings: &Settings,
    args: &RenderArgs,
    out: W,
) -> Result<usize, AppError> {
    let store = fixtures::load_posts(&args.posts_file)?;

    let mut query = QueryContext::new(0);
    let selected = match args.category.as_deref() {
        Some(slug) => {
            let posts = store.in_category(slug);
            let category = posts
                .iter()
                .flat_map(|post| post.categories.iter())
                .find(|category| category.slug() == slug)
                .cloned()
                .unwrap_or_else(|| Category::new(slug).with_slug(slug));
            query = query.with_category(category);
            posts
        }
        None => store.newest_first(),
    };
    if selected.is_empty() {
        warn!(category = ?args.category, "no posts to render");
    }
    query.found_posts = selected.len();

    // Owned copies; the store itself moves into the renderer below.
    let posts: Vec<_> = selected.into_iter().cloned().collect();
    let post_refs: Vec<_> = posts.iter().collect();

    let collaborators = Collaborators::new(
        Arc::new(store),
        Arc::new(SitePermalinks::new(settings.site.url.clone())),
    );
    let renderer = Renderer::new(collaborators).with_options(RendererOptions {
        posted_on_label: settings.labels.posted_on.clone(),
    });

    let mut sink = WriterSink::new(out);
    render_widget(&renderer, &settings.widget, &mut query, &post_refs, &mut sink);
    sink.emit("\n");
    sink.flush();

    info!(posts = post_refs.len(), "widget rendered");
    Ok(post_refs.len())
}

fn post_title(renderer: &Renderer, post: &Post) -> String {
    let permalink = escape_url(&renderer.collaborators().permalinks.permalink_for(post));
    render_fragment(
        "widget::post_title",
        &PostTitleTemplate {
            permalink: &permalink,
            title: &post.title,
        },
    )
}
