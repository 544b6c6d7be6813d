use time::format_description::{self, well_known::Rfc3339};
use tracing::warn;

use crate::application::collaborators::{DateFormatter, DateTimeProvider};
use crate::domain::{HUMAN_DATE_FORMAT, Post, WidgetConfig};

/// Formats publish dates with the `time` crate.
///
/// The display form follows the widget's `date_format` description and
/// falls back to "March 5, 2024" style when none is set or it cannot be
/// parsed. Timestamps are RFC 3339.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeDateFormatter;

impl DateFormatter for TimeDateFormatter {
    fn display_date_for(&self, post: &Post, config: &WidgetConfig) -> String {
        let custom = config
            .date_format
            .as_deref()
            .filter(|format| !format.trim().is_empty());

        let formatted = match custom {
            Some(description) => match format_description::parse(description) {
                Ok(items) => post.published.format(items.as_slice()),
                Err(err) => {
                    warn!(
                        post_id = %post.id,
                        date_format = description,
                        error = %err,
                        "invalid date format; using default"
                    );
                    post.published.format(HUMAN_DATE_FORMAT)
                }
            },
            None => post.published.format(HUMAN_DATE_FORMAT),
        };

        formatted.unwrap_or_else(|err| {
            warn!(post_id = %post.id, error = %err, "failed to format display date");
            String::new()
        })
    }
}

impl DateTimeProvider for TimeDateFormatter {
    fn machine_timestamp_for(&self, post: &Post) -> String {
        post.published.format(&Rfc3339).unwrap_or_else(|err| {
            warn!(post_id = %post.id, error = %err, "failed to format timestamp");
            String::new()
        })
    }
}
