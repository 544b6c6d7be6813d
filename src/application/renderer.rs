//! Markup for the category posts widget.
//!
//! Every operation builds one fragment from the widget settings and the
//! host's query context, passes it through its extension point, and delivers
//! it according to the [`OutputMode`]. Nothing is kept between calls; the
//! only iteration state is the cursor the host owns.

use metrics::counter;
use tracing::{debug, trace};

use crate::application::{
    collaborators::Collaborators,
    hooks::{HookPoint, Hooks},
    sanitize::join_class_tokens,
};
use crate::domain::{Post, PostCursor, PostRef, QueryContext, WidgetConfig};
use crate::presentation::{
    OutputMode, escape_url,
    views::{PostedOnTemplate, ThumbnailTemplate, render_fragment},
};

pub const POSTS_LIST_CLASS: &str = "acatsw-posts-list";
pub const LIST_ITEM_CLASS: &str = "acatsw-list-item";
pub const THUMBNAIL_CLASS: &str = "acatsw-post-thumbnail";
pub const DEFAULT_POSTED_ON_LABEL: &str = "Posted on";

/// Attribution comment emitted once per widget.
pub const COLOPHON: &str =
    "<!-- Advanced Categories Widget generated by http://darrinb.com/plugins/advanced-posts-widget -->";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererOptions {
    /// Screen-reader text placed before the publish date.
    pub posted_on_label: String,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            posted_on_label: DEFAULT_POSTED_ON_LABEL.to_string(),
        }
    }
}

pub struct Renderer {
    hooks: Hooks,
    collaborators: Collaborators,
    options: RendererOptions,
}

impl Renderer {
    pub fn new(collaborators: Collaborators) -> Self {
        Self {
            hooks: Hooks::default(),
            collaborators,
            options: RendererOptions::default(),
        }
    }

    pub fn with_hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn with_options(mut self, options: RendererOptions) -> Self {
        self.options = options;
        self
    }

    pub fn hooks(&self) -> &Hooks {
        &self.hooks
    }

    pub fn collaborators(&self) -> &Collaborators {
        &self.collaborators
    }

    /// Opening tag of the post list, e.g. `<ol class="acatsw-posts-list html5">`.
    pub fn start_list(
        &self,
        config: &WidgetConfig,
        query: &QueryContext,
        mode: OutputMode<'_>,
    ) -> Option<String> {
        let tag = config.list_style().container_tag();

        let defaults = vec![
            POSTS_LIST_CLASS.to_string(),
            config.item_format().class_token().to_string(),
        ];
        let classes = self.hooks.post_list_class(defaults, config, query);
        let class_attr = join_class_tokens(self.collaborators.sanitizer.as_ref(), &classes);

        let html = format!(r#"<{tag} class="{class_attr}">"#);
        let html = self.apply_list_hook(HookPoint::StartList, html, config, query);

        record_rendered(HookPoint::StartList);
        mode.deliver(html)
    }

    /// Closing tag of the post list, followed by a newline.
    pub fn end_list(
        &self,
        config: &WidgetConfig,
        query: &QueryContext,
        mode: OutputMode<'_>,
    ) -> Option<String> {
        let tag = config.list_style().container_tag();
        let html = format!("</{tag}>\n");
        let html = self.apply_list_hook(HookPoint::EndList, html, config, query);

        record_rendered(HookPoint::EndList);
        mode.deliver(html)
    }

    /// Opening tag of the item for the post under the query's cursor.
    ///
    /// A cursor that resolves to no post still produces the tag, with an
    /// empty id and only the base class.
    pub fn start_list_item(
        &self,
        config: &WidgetConfig,
        query: &QueryContext,
        mode: OutputMode<'_>,
    ) -> Option<String> {
        let post = self
            .collaborators
            .posts
            .resolve(PostRef::Current, query.cursor());

        let (post_id, post_class) = match post.as_ref() {
            Some(post) => (
                self.collaborators.attributes.id_for(post, config),
                self.collaborators.attributes.class_for(post, config),
            ),
            None => {
                debug!(
                    cursor = ?query.cursor().current(),
                    "list item opened without a resolvable post"
                );
                (String::new(), String::new())
            }
        };

        let tag = config.list_style().item_tag();
        let html = format!(r#"<{tag} id="{post_id}" class="{LIST_ITEM_CLASS} {post_class}">"#);
        let html = self.apply_list_hook(HookPoint::StartListItem, html, config, query);

        record_rendered(HookPoint::StartListItem);
        mode.deliver(html)
    }

    pub fn end_list_item(
        &self,
        config: &WidgetConfig,
        query: &QueryContext,
        mode: OutputMode<'_>,
    ) -> Option<String> {
        let tag = config.list_style().item_tag();
        let html = format!("</{tag}>");
        let html = self.apply_list_hook(HookPoint::EndListItem, html, config, query);

        record_rendered(HookPoint::EndListItem);
        mode.deliver(html)
    }

    /// The attribution comment. Takes no settings and has no extension point.
    pub fn colophon(mode: OutputMode<'_>) -> Option<String> {
        mode.deliver(COLOPHON.to_string())
    }

    /// Thumbnail linked to the post, wrapped in a classed `<span>`.
    ///
    /// Empty when the post has no thumbnail. When the post cannot be resolved
    /// the fragment is empty and no extension point runs.
    pub fn post_thumbnail(
        &self,
        reference: PostRef,
        cursor: &PostCursor,
        config: &WidgetConfig,
        mode: OutputMode<'_>,
    ) -> Option<String> {
        let Some(post) = self.resolve(HookPoint::PostThumbnail, reference, cursor) else {
            return mode.deliver(String::new());
        };

        let thumbnail = self
            .collaborators
            .thumbnails
            .thumbnail_markup_for(&post, config);

        let classes =
            self.hooks
                .thumbnail_div_class(vec![THUMBNAIL_CLASS.to_string()], config, &post);
        let class_attr = join_class_tokens(self.collaborators.sanitizer.as_ref(), &classes);

        let html = if thumbnail.is_empty() {
            String::new()
        } else {
            let permalink = escape_url(&self.collaborators.permalinks.permalink_for(&post));
            render_fragment(
                "application::renderer::post_thumbnail",
                &ThumbnailTemplate {
                    class_attr: &class_attr,
                    permalink: &permalink,
                    thumbnail: &thumbnail,
                },
            )
        };
        let html = self.apply_post_hook(HookPoint::PostThumbnail, html, &post, config);

        record_rendered(HookPoint::PostThumbnail);
        mode.deliver(html)
    }

    /// Publish date linked to the post, with a screen-reader label and a
    /// `<time>` element carrying the machine-readable timestamp.
    ///
    /// When the post cannot be resolved the fragment is empty and no
    /// extension point runs.
    pub fn posted_on(
        &self,
        reference: PostRef,
        cursor: &PostCursor,
        config: &WidgetConfig,
        mode: OutputMode<'_>,
    ) -> Option<String> {
        let Some(post) = self.resolve(HookPoint::PostedOn, reference, cursor) else {
            return mode.deliver(String::new());
        };

        let display_date = self.collaborators.dates.display_date_for(&post, config);
        let timestamp = self.collaborators.timestamps.machine_timestamp_for(&post);
        let permalink = escape_url(&self.collaborators.permalinks.permalink_for(&post));

        let html = render_fragment(
            "application::renderer::posted_on",
            &PostedOnTemplate {
                label: &self.options.posted_on_label,
                permalink: &permalink,
                timestamp: &timestamp,
                display_date: &display_date,
            },
        );
        let html = self.apply_post_hook(HookPoint::PostedOn, html, &post, config);

        record_rendered(HookPoint::PostedOn);
        mode.deliver(html)
    }

    fn resolve(&self, point: HookPoint, reference: PostRef, cursor: &PostCursor) -> Option<Post> {
        let post = self.collaborators.posts.resolve(reference, cursor);
        if post.is_none() {
            debug!(
                operation = point.as_str(),
                reference = ?reference,
                cursor = ?cursor.current(),
                "post not resolved; emitting empty fragment"
            );
            counter!("acatsw_fragments_short_circuited_total", "operation" => point.as_str())
                .increment(1);
        }
        post
    }

    fn apply_list_hook(
        &self,
        point: HookPoint,
        html: String,
        config: &WidgetConfig,
        query: &QueryContext,
    ) -> String {
        if self.hooks.registered(point) == 0 {
            return html;
        }
        let rewritten = self.hooks.list_fragment(point, html.clone(), config, query);
        trace_override(point, &html, &rewritten);
        rewritten
    }

    fn apply_post_hook(
        &self,
        point: HookPoint,
        html: String,
        post: &Post,
        config: &WidgetConfig,
    ) -> String {
        if self.hooks.registered(point) == 0 {
            return html;
        }
        let rewritten = self.hooks.post_fragment(point, html.clone(), post, config);
        trace_override(point, &html, &rewritten);
        rewritten
    }
}

fn trace_override(point: HookPoint, before: &str, after: &str) {
    if before != after {
        trace!(hook = point.as_str(), before, after, "fragment rewritten by hook");
    }
}

fn record_rendered(point: HookPoint) {
    counter!("acatsw_fragments_rendered_total", "operation" => point.as_str()).increment(1);
}
