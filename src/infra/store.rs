use std::collections::BTreeMap;

use tracing::debug;

use crate::application::collaborators::PostResolver;
use crate::domain::{Post, PostCursor, PostId, PostRef};

/// Posts held in memory, ordered by id.
#[derive(Debug, Clone, Default)]
pub struct PostStore {
    posts: BTreeMap<PostId, Post>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a post, returning the one it replaced.
    pub fn insert(&mut self, post: Post) -> Option<Post> {
        self.posts.insert(post.id, post)
    }

    pub fn get(&self, id: PostId) -> Option<&Post> {
        self.posts.get(&id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Post> {
        self.posts.values()
    }

    /// Posts in the category with the given slug, newest first.
    pub fn in_category(&self, slug: &str) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.iter().filter(|post| post.in_category(slug)).collect();
        posts.sort_by(|a, b| b.published.cmp(&a.published));
        posts
    }

    /// All posts, newest first.
    pub fn newest_first(&self) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.iter().collect();
        posts.sort_by(|a, b| b.published.cmp(&a.published));
        posts
    }
}

impl FromIterator<Post> for PostStore {
    fn from_iter<I: IntoIterator<Item = Post>>(iter: I) -> Self {
        let mut store = Self::new();
        for post in iter {
            store.insert(post);
        }
        store
    }
}

impl PostResolver for PostStore {
    fn resolve(&self, reference: PostRef, cursor: &PostCursor) -> Option<Post> {
        let id = cursor.target(reference)?;
        let post = self.get(id).cloned();
        if post.is_none() {
            debug!(post_id = %id, "post not found in store");
        }
        post
    }
}
