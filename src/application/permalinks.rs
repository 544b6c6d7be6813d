use tracing::warn;
use url::Url;

use crate::application::collaborators::PermalinkProvider;
use crate::domain::Post;

/// Pretty permalinks: `{base_url}{slug}/`.
#[derive(Debug, Clone)]
pub struct SitePermalinks {
    base: Url,
}

impl SitePermalinks {
    pub fn new(base: Url) -> Self {
        let base = if base.path().ends_with('/') {
            base
        } else {
            let mut base = base;
            let path = format!("{}/", base.path());
            base.set_path(&path);
            base
        };
        Self { base }
    }
}

impl PermalinkProvider for SitePermalinks {
    /// The slug is appended as one percent-encoded path segment, so `/`,
    /// `..` and `?` inside it cannot leave the base path.
    fn permalink_for(&self, post: &Post) -> String {
        let mut url = self.base.clone();
        match url.path_segments_mut() {
            Ok(mut segments) => {
                segments
                    .pop_if_empty()
                    .push(post.slug.trim_matches('/'))
                    .push("");
            }
            Err(()) => {
                warn!(post_id = %post.id, base = %self.base, "site url cannot carry a path");
                return String::new();
            }
        }
        url.into()
    }
}
