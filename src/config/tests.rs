use std::io::Write;

use super::*;
use crate::domain::ListStyle;

fn render_cli(args: &[&str]) -> CliArgs {
    let mut argv = vec!["acatsw", "render", "posts.toml"];
    argv.extend_from_slice(args);
    CliArgs::parse_from(argv)
}

#[test]
fn defaults_are_valid() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");
    assert_eq!(settings.logging.level, LevelFilter::WARN);
    assert!(matches!(settings.logging.format, LogFormat::Compact));
    assert_eq!(settings.site.url.as_str(), DEFAULT_SITE_URL);
    assert_eq!(settings.labels.posted_on, DEFAULT_POSTED_ON_LABEL);
    assert_eq!(settings.widget, WidgetConfig::default());
}

#[test]
fn cli_overrides_take_highest_precedence() {
    let mut raw = RawSettings::default();
    raw.widget.list_style = Some("div".to_string());
    raw.logging.level = Some("info".to_string());

    let overrides = RenderOverrides {
        list_style: Some("ol".to_string()),
        log_level: Some("debug".to_string()),
        ..Default::default()
    };

    raw.apply_render_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.widget.list_style(), ListStyle::Ordered);
    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
}

#[test]
fn cli_json_logging_enforces_format() {
    let mut raw = RawSettings::default();
    let overrides = RenderOverrides {
        log_json: Some(true),
        ..Default::default()
    };

    raw.apply_render_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert!(matches!(settings.logging.format, LogFormat::Json));
}

#[test]
fn invalid_log_level_is_rejected() {
    let raw = RawSettings {
        logging: RawLoggingSettings {
            level: Some("chatty".to_string()),
            json: None,
        },
        ..Default::default()
    };
    let err = Settings::from_raw(raw).expect_err("invalid level");
    assert!(matches!(err, LoadError::Invalid { key: "logging.level", .. }));
}

#[test]
fn non_http_site_url_is_rejected() {
    let raw = RawSettings {
        site: RawSiteSettings {
            url: Some("ftp://example.com/".to_string()),
        },
        ..Default::default()
    };
    let err = Settings::from_raw(raw).expect_err("invalid url");
    assert!(matches!(err, LoadError::Invalid { key: "site.url", .. }));
}

#[test]
fn parse_render_arguments() {
    let args = render_cli(&[
        "--category",
        "news",
        "--list-style",
        "div",
        "--show-thumb",
        "yes",
        "--posted-on-label",
        "Published",
    ]);

    let Command::Render(render) = args.command;
    assert_eq!(render.posts_file, PathBuf::from("posts.toml"));
    assert_eq!(render.category.as_deref(), Some("news"));
    assert_eq!(render.overrides.list_style.as_deref(), Some("div"));
    assert_eq!(render.overrides.show_thumb, Some(true));
    assert_eq!(render.overrides.posted_on_label.as_deref(), Some("Published"));
}

#[test]
fn config_file_supplies_widget_settings() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(
        file,
        r#"
[site]
url = "https://example.com/blog/"

[widget]
list_style = "ol"
item_format = "html5"
show_date = true

[labels]
posted_on = "Published on"
"#
    )
    .expect("write config");

    let mut args = render_cli(&["--item-format", "xhtml"]);
    args.config_file = Some(file.path().to_path_buf());

    let settings = load(&args).expect("settings");
    assert_eq!(settings.site.url.as_str(), "https://example.com/blog/");
    assert_eq!(settings.widget.list_style.as_deref(), Some("ol"));
    assert_eq!(settings.widget.item_format.as_deref(), Some("xhtml"));
    assert!(settings.widget.show_date);
    assert_eq!(settings.labels.posted_on, "Published on");
}
