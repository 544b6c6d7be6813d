//! Widget instance settings and the markup choices derived from them.

use serde::{Deserialize, Serialize};

/// Settings for one widget instance, as stored by the host.
///
/// `list_style` and `item_format` stay raw: unknown values are accepted and
/// fall back to the defaults when markup is chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub list_style: Option<String>,
    pub item_format: Option<String>,
    pub show_thumb: bool,
    pub thumb_size: Option<ThumbSize>,
    pub show_date: bool,
    pub date_format: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbSize {
    pub width: u32,
    pub height: u32,
}

impl WidgetConfig {
    pub fn with_list_style(mut self, style: impl Into<String>) -> Self {
        self.list_style = Some(style.into());
        self
    }

    pub fn with_item_format(mut self, format: impl Into<String>) -> Self {
        self.item_format = Some(format.into());
        self
    }

    pub fn list_style(&self) -> ListStyle {
        ListStyle::from_setting(self.list_style.as_deref())
    }

    pub fn item_format(&self) -> ItemFormat {
        ItemFormat::from_setting(self.item_format.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    Unordered,
    Ordered,
    Div,
}

impl ListStyle {
    /// Anything other than `div` or `ol`, including no value, is unordered.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value {
            Some("div") => Self::Div,
            Some("ol") => Self::Ordered,
            _ => Self::Unordered,
        }
    }

    pub fn container_tag(self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
            Self::Div => "div",
        }
    }

    /// Items are `li` for both list kinds; only the div style changes them.
    pub fn item_tag(self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Unordered | Self::Ordered => "li",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemFormat {
    Html5,
    Xhtml,
}

impl ItemFormat {
    pub fn from_setting(value: Option<&str>) -> Self {
        match value {
            Some("html5") => Self::Html5,
            _ => Self::Xhtml,
        }
    }

    pub fn class_token(self) -> &'static str {
        match self {
            Self::Html5 => "html5",
            Self::Xhtml => "xhtml",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_list_styles_fall_back_to_unordered() {
        for value in [None, Some("ul"), Some(""), Some("DIV"), Some("table")] {
            assert_eq!(ListStyle::from_setting(value), ListStyle::Unordered);
        }
    }

    #[test]
    fn item_tag_follows_div_style_only() {
        assert_eq!(ListStyle::Div.item_tag(), "div");
        assert_eq!(ListStyle::Ordered.item_tag(), "li");
        assert_eq!(ListStyle::Unordered.item_tag(), "li");
    }

    #[test]
    fn item_format_is_html5_only_on_exact_match() {
        assert_eq!(ItemFormat::from_setting(Some("html5")), ItemFormat::Html5);
        assert_eq!(ItemFormat::from_setting(Some("HTML5")), ItemFormat::Xhtml);
        assert_eq!(ItemFormat::from_setting(None), ItemFormat::Xhtml);
    }

    #[test]
    fn config_deserializes_with_missing_fields() {
        let config: WidgetConfig =
            serde_json::from_str(r#"{"list_style":"ol","thumb_size":{"width":64,"height":48}}"#)
                .expect("config");
        assert_eq!(config.list_style(), ListStyle::Ordered);
        assert_eq!(config.item_format(), ItemFormat::Xhtml);
        assert_eq!(
            config.thumb_size,
            Some(ThumbSize {
                width: 64,
                height: 48
            })
        );
        assert!(!config.show_thumb);
    }
}
