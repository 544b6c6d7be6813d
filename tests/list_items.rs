mod common;

use std::sync::Arc;

use acatsw::{
    application::{Hooks, PostAttributes, Renderer},
    domain::{Post, PostCursor, PostId, QueryContext, WidgetConfig},
    presentation::OutputMode,
};

use common::{collaborators, renderer};

fn at(id: u64) -> QueryContext {
    QueryContext::new(2).with_cursor(PostCursor::at(id))
}

#[test]
fn div_style_item_uses_post_id_and_category_class() {
    let renderer = renderer();
    let config = WidgetConfig::default().with_list_style("div");
    let query = at(7);

    assert_eq!(
        renderer
            .start_list_item(&config, &query, OutputMode::Capture)
            .expect("captured"),
        r#"<div id="post-7" class="acatsw-list-item category-foo">"#
    );
    assert_eq!(
        renderer
            .end_list_item(&config, &query, OutputMode::Capture)
            .expect("captured"),
        "</div>"
    );
}

#[test]
fn list_styles_other_than_div_use_li() {
    let renderer = renderer();
    for style in [Some("ol"), Some("ul"), None, Some("grid")] {
        let config = WidgetConfig {
            list_style: style.map(str::to_string),
            ..WidgetConfig::default()
        };
        let query = at(9);
        assert_eq!(
            renderer
                .start_list_item(&config, &query, OutputMode::Capture)
                .expect("captured"),
            r#"<li id="post-9" class="acatsw-list-item category-bar">"#
        );
        assert_eq!(
            renderer
                .end_list_item(&config, &query, OutputMode::Capture)
                .expect("captured"),
            "</li>"
        );
    }
}

#[test]
fn unresolved_cursor_still_opens_the_item() {
    let renderer = renderer();
    let config = WidgetConfig::default();

    for query in [QueryContext::default(), at(404)] {
        assert_eq!(
            renderer
                .start_list_item(&config, &query, OutputMode::Capture)
                .expect("captured"),
            r#"<li id="" class="acatsw-list-item ">"#
        );
    }
}

struct FixedAttributes;

impl PostAttributes for FixedAttributes {
    fn id_for(&self, post: &Post, _config: &WidgetConfig) -> String {
        format!("acatsw-post-{}", post.id)
    }

    fn class_for(&self, _post: &Post, _config: &WidgetConfig) -> String {
        "featured".to_string()
    }
}

#[test]
fn attributes_come_from_the_collaborator() {
    let renderer =
        Renderer::new(collaborators().with_attributes(Arc::new(FixedAttributes)));
    let html = renderer
        .start_list_item(&WidgetConfig::default(), &at(7), OutputMode::Capture)
        .expect("captured");
    assert_eq!(html, r#"<li id="acatsw-post-7" class="acatsw-list-item featured">"#);
}

#[test]
fn item_hooks_override_with_sentinels() {
    let hooks = Hooks::new()
        .on_start_list_item(|_, _, query| {
            format!("OPEN-{}", query.cursor().current().map_or(0, |PostId(id)| id))
        })
        .on_end_list_item(|_, _, _| "CLOSE".to_string());
    let renderer = Renderer::new(collaborators()).with_hooks(hooks);
    let config = WidgetConfig::default();

    assert_eq!(
        renderer
            .start_list_item(&config, &at(7), OutputMode::Capture)
            .expect("captured"),
        "OPEN-7"
    );
    assert_eq!(
        renderer
            .end_list_item(&config, &at(7), OutputMode::Capture)
            .expect("captured"),
        "CLOSE"
    );
}

#[test]
fn echo_mode_writes_item_tags() {
    let renderer = renderer();
    let config = WidgetConfig::default().with_list_style("ol");
    let query = at(9);
    let mut sink = String::new();

    assert!(renderer
        .start_list_item(&config, &query, OutputMode::echo(&mut sink))
        .is_none());
    assert!(renderer
        .end_list_item(&config, &query, OutputMode::echo(&mut sink))
        .is_none());
    assert_eq!(
        sink,
        r#"<li id="post-9" class="acatsw-list-item category-bar"></li>"#
    );
}
