use crate::application::{collaborators::PostAttributes, sanitize::sanitize_html_class};
use crate::domain::{Post, WidgetConfig};

const DEFAULT_ID_PREFIX: &str = "post-";
const CATEGORY_CLASS_PREFIX: &str = "category-";

/// `post-{id}` ids and one `category-{slug}` class per category.
#[derive(Debug, Clone)]
pub struct DefaultPostAttributes {
    id_prefix: String,
}

impl Default for DefaultPostAttributes {
    fn default() -> Self {
        Self::with_id_prefix(DEFAULT_ID_PREFIX)
    }
}

impl DefaultPostAttributes {
    pub fn with_id_prefix(prefix: impl Into<String>) -> Self {
        Self {
            id_prefix: prefix.into(),
        }
    }
}

impl PostAttributes for DefaultPostAttributes {
    fn id_for(&self, post: &Post, _config: &WidgetConfig) -> String {
        format!("{}{}", self.id_prefix, post.id)
    }

    fn class_for(&self, post: &Post, _config: &WidgetConfig) -> String {
        post.categories
            .iter()
            .map(|category| {
                sanitize_html_class(&format!("{CATEGORY_CLASS_PREFIX}{}", category.slug()))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
