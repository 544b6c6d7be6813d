//! Configuration layer: typed settings with layered precedence (file → env → CLI).

use std::{path::PathBuf, str::FromStr};

use clap::{Args, Parser, Subcommand, ValueHint, builder::BoolishValueParser};
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use url::Url;

use crate::application::renderer::DEFAULT_POSTED_ON_LABEL;
use crate::domain::WidgetConfig;

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "acatsw";
const DEFAULT_SITE_URL: &str = "http://localhost/";

/// Command-line arguments for the acatsw binary.
#[derive(Debug, Parser)]
#[command(name = "acatsw", version, about = "Category posts widget renderer")]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "ACATSW_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Render the widget for the posts in a fixture file and print it.
    Render(RenderArgs),
}

#[derive(Debug, Args, Clone)]
pub struct RenderArgs {
    /// Post fixture to render (.toml or .json).
    #[arg(value_name = "POSTS_FILE", value_hint = ValueHint::FilePath)]
    pub posts_file: PathBuf,

    /// Only render posts in the category with this slug.
    #[arg(long, value_name = "SLUG")]
    pub category: Option<String>,

    #[command(flatten)]
    pub overrides: RenderOverrides,
}

#[derive(Debug, Args, Default, Clone)]
pub struct RenderOverrides {
    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,

    /// Override the site URL permalinks are built under.
    #[arg(long = "site-url", value_name = "URL")]
    pub site_url: Option<String>,

    /// Override the list style (ul|ol|div).
    #[arg(long = "list-style", value_name = "STYLE")]
    pub list_style: Option<String>,

    /// Override the item format (html5|xhtml).
    #[arg(long = "item-format", value_name = "FORMAT")]
    pub item_format: Option<String>,

    /// Toggle post thumbnails.
    #[arg(
        long = "show-thumb",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub show_thumb: Option<bool>,

    /// Toggle post dates.
    #[arg(
        long = "show-date",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub show_date: Option<bool>,

    /// Override the date format description, e.g. "[year]-[month]-[day]".
    #[arg(long = "date-format", value_name = "FORMAT")]
    pub date_format: Option<String>,

    /// Override the screen-reader label placed before post dates.
    #[arg(long = "posted-on-label", value_name = "TEXT")]
    pub posted_on_label: Option<String>,
}

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub site: SiteSettings,
    pub widget: WidgetConfig,
    pub labels: LabelSettings,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub url: Url,
}

#[derive(Debug, Clone)]
pub struct LabelSettings {
    pub posted_on: String,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(Environment::with_prefix("ACATSW").separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;

    match &cli.command {
        Command::Render(args) => raw.apply_render_overrides(&args.overrides),
    }

    Settings::from_raw(raw)
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    logging: RawLoggingSettings,
    site: RawSiteSettings,
    widget: WidgetConfig,
    labels: RawLabelSettings,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSiteSettings {
    url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLabelSettings {
    posted_on: Option<String>,
}

impl RawSettings {
    fn apply_render_overrides(&mut self, overrides: &RenderOverrides) {
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
        if let Some(url) = overrides.site_url.as_ref() {
            self.site.url = Some(url.clone());
        }
        if let Some(style) = overrides.list_style.as_ref() {
            self.widget.list_style = Some(style.clone());
        }
        if let Some(format) = overrides.item_format.as_ref() {
            self.widget.item_format = Some(format.clone());
        }
        if let Some(show) = overrides.show_thumb {
            self.widget.show_thumb = show;
        }
        if let Some(show) = overrides.show_date {
            self.widget.show_date = show;
        }
        if let Some(format) = overrides.date_format.as_ref() {
            self.widget.date_format = Some(format.clone());
        }
        if let Some(label) = overrides.posted_on_label.as_ref() {
            self.labels.posted_on = Some(label.clone());
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings {
            logging,
            site,
            widget,
            labels,
        } = raw;

        Ok(Self {
            logging: build_logging_settings(logging)?,
            site: build_site_settings(site)?,
            widget,
            labels: build_label_settings(labels),
        })
    }
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::WARN,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

fn build_site_settings(site: RawSiteSettings) -> Result<SiteSettings, LoadError> {
    let raw = site
        .url
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_SITE_URL.to_string());

    let url = Url::parse(&raw)
        .map_err(|err| LoadError::invalid("site.url", format!("failed to parse `{raw}`: {err}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(LoadError::invalid(
            "site.url",
            format!("scheme `{}` is not http or https", url.scheme()),
        ));
    }

    Ok(SiteSettings { url })
}

fn build_label_settings(labels: RawLabelSettings) -> LabelSettings {
    LabelSettings {
        posted_on: labels
            .posted_on
            .unwrap_or_else(|| DEFAULT_POSTED_ON_LABEL.to_string()),
    }
}

#[cfg(test)]
mod tests;
