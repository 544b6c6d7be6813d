#![allow(dead_code)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use acatsw::{
    application::{Collaborators, Renderer, SitePermalinks},
    domain::{Category, Post, Thumbnail},
    infra::store::PostStore,
};
use time::macros::datetime;
use url::Url;

pub const SITE_URL: &str = "https://example.com/";

pub fn hello_post() -> Post {
    Post::new(7, "hello-world", "Hello world", datetime!(2024-03-05 10:00 UTC))
        .with_category(Category::new("Foo"))
        .with_thumbnail(Thumbnail {
            src: "https://cdn.example.com/hello.png".into(),
            alt: "Hello".into(),
            width: Some(300),
            height: Some(200),
        })
}

pub fn plain_post() -> Post {
    Post::new(9, "plain", "Plain, simple", datetime!(2024-02-01 8:15 UTC))
        .with_category(Category::new("Bar"))
}

pub fn store() -> PostStore {
    [hello_post(), plain_post()].into_iter().collect()
}

pub fn collaborators() -> Collaborators {
    let base = Url::parse(SITE_URL).expect("site url");
    Collaborators::new(Arc::new(store()), Arc::new(SitePermalinks::new(base)))
}

pub fn renderer() -> Renderer {
    Renderer::new(collaborators())
}

/// Shared counter handed to hooks to observe how often they run.
#[derive(Clone, Default)]
pub struct Calls(Arc<AtomicUsize>);

impl Calls {
    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}
