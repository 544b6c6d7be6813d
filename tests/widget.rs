mod common;

use std::io::Write;

use acatsw::{
    application::{Hooks, Renderer},
    domain::{Category, QueryContext, ThumbSize, WidgetConfig},
    infra::fixtures::{FixtureError, load_posts},
    widget::render_widget_to_string,
};

use common::{collaborators, hello_post, plain_post, renderer};

#[test]
fn renders_plain_ordered_widget() {
    let renderer = renderer();
    let config = WidgetConfig::default()
        .with_list_style("ol")
        .with_item_format("html5");
    let posts = [hello_post(), plain_post()];
    let refs: Vec<_> = posts.iter().collect();
    let mut query = QueryContext::new(refs.len());

    let html = render_widget_to_string(&renderer, &config, &mut query, &refs);

    let mut lines = html.lines();
    let list = lines.next().expect("list line");
    insta::assert_snapshot!(list, @r#"<ol class="acatsw-posts-list html5"><li id="post-7" class="acatsw-list-item category-foo"><span class="entry-title acatsw-post-title"><a href="https://example.com/hello-world/" rel="bookmark">Hello world</a></span></li><li id="post-9" class="acatsw-list-item category-bar"><span class="entry-title acatsw-post-title"><a href="https://example.com/plain/" rel="bookmark">Plain, simple</a></span></li></ol>"#);
    assert_eq!(lines.next(), Some(acatsw::application::COLOPHON));
    assert_eq!(lines.next(), None);
    assert!(query.cursor().current().is_none());
}

#[test]
fn renders_thumbnails_and_dates_when_enabled() {
    let renderer = renderer();
    let config = WidgetConfig {
        list_style: Some("div".to_string()),
        show_thumb: true,
        show_date: true,
        thumb_size: Some(ThumbSize {
            width: 64,
            height: 64,
        }),
        ..WidgetConfig::default()
    };
    let posts = [hello_post()];
    let refs: Vec<_> = posts.iter().collect();
    let mut query = QueryContext::new(1).with_category(Category::new("Foo"));

    let html = render_widget_to_string(&renderer, &config, &mut query, &refs);

    assert!(html.starts_with(r#"<div class="acatsw-posts-list xhtml"><div id="post-7" class="acatsw-list-item category-foo">"#));
    assert!(html.contains(r#"<span class="acatsw-post-thumbnail"><a href="https://example.com/hello-world/"><img src="https://cdn.example.com/hello.png" alt="Hello" width="64" height="64" class="acatsw-thumbnail"></a></span>"#));
    assert!(html.contains(r#"datetime="2024-03-05T10:00:00Z">March 5, 2024</time>"#));
    assert!(html.contains("</div></div>\n<!--"));

    let thumb = html.find("acatsw-post-thumbnail").expect("thumbnail");
    let title = html.find("acatsw-post-title").expect("title");
    let date = html.find("acatsw-posted-on").expect("date");
    assert!(thumb < title && title < date);
}

#[test]
fn widget_output_passes_through_hooks() {
    let hooks = Hooks::new()
        .on_start_list_item(|html, _, query| {
            let id = query.cursor().current().map(|id| id.to_string()).unwrap_or_default();
            html.replace('>', &format!(r#" data-post="{id}">"#))
        })
        .on_end_list(|html, _, _| format!("{html}<!-- end -->"));
    let renderer = Renderer::new(collaborators()).with_hooks(hooks);
    let posts = [plain_post()];
    let refs: Vec<_> = posts.iter().collect();

    let html = render_widget_to_string(
        &renderer,
        &WidgetConfig::default(),
        &mut QueryContext::new(1),
        &refs,
    );

    assert!(html.contains(r#"<li id="post-9" class="acatsw-list-item category-bar" data-post="9">"#));
    assert!(html.contains("</ul>\n<!-- end --><!-- Advanced Categories Widget"));
}

#[test]
fn empty_result_set_renders_empty_list() {
    let html = render_widget_to_string(
        &renderer(),
        &WidgetConfig::default(),
        &mut QueryContext::new(0),
        &[],
    );
    assert_eq!(
        html,
        format!(
            "<ul class=\"acatsw-posts-list xhtml\"></ul>\n{}",
            acatsw::application::COLOPHON
        )
    );
}

#[test]
fn fixture_files_load_by_extension() {
    let mut toml = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(
        toml,
        r#"
[[posts]]
id = 1
slug = "first"
title = "First"
published = "2024-01-01T00:00:00Z"
categories = [{{ name = "News" }}]
"#
    )
    .expect("write fixture");
    let store = load_posts(toml.path()).expect("toml fixture");
    assert_eq!(store.in_category("news").len(), 1);

    let mut json = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("temp file");
    write!(
        json,
        r#"{{"posts":[{{"id":2,"slug":"second","title":"Second","published":"2024-01-02T00:00:00Z"}}]}}"#
    )
    .expect("write fixture");
    let store = load_posts(json.path()).expect("json fixture");
    assert_eq!(store.len(), 1);

    let yaml = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("temp file");
    let err = load_posts(yaml.path()).expect_err("unsupported format");
    assert!(matches!(err, FixtureError::UnsupportedFormat(_)));
}
