//! Result-set context handed to renderers alongside the widget settings.

use crate::domain::posts::{Category, PostCursor, PostId};

/// Read-only view of the host's active query.
///
/// Renderers pass it through to hooks and read the cursor from it; only the
/// host moves the cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryContext {
    pub category: Option<Category>,
    pub found_posts: usize,
    cursor: PostCursor,
}

impl QueryContext {
    pub fn new(found_posts: usize) -> Self {
        Self {
            found_posts,
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_cursor(mut self, cursor: PostCursor) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn cursor(&self) -> &PostCursor {
        &self.cursor
    }

    pub fn set_current(&mut self, id: PostId) {
        self.cursor = PostCursor::at(id);
    }

    pub fn clear_current(&mut self) {
        self.cursor = PostCursor::default();
    }
}
