//! Loading posts from TOML or JSON fixture files.
//!
//! ```toml
//! [[posts]]
//! id = 7
//! slug = "hello-world"
//! title = "Hello world"
//! published = "2024-03-05T10:00:00Z"
//! categories = [{ name = "Foo" }]
//! thumbnail = { src = "https://cdn.example.com/hello.png", alt = "Hello", width = 300, height = 200 }
//! ```

use std::{fs, path::{Path, PathBuf}};

use serde::Deserialize;
use thiserror::Error;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing::info;

use crate::domain::{Category, Post, PostId, Thumbnail};
use crate::infra::store::PostStore;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported fixture format for `{0}`; expected .toml or .json")]
    UnsupportedFormat(PathBuf),
    #[error("invalid TOML fixture: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid JSON fixture: {0}")]
    Json(#[from] serde_json::Error),
    #[error("post {id} has an invalid `published` timestamp `{value}`: {reason}")]
    InvalidTimestamp { id: u64, value: String, reason: String },
    #[error("post id {0} appears more than once")]
    DuplicateId(u64),
}

#[derive(Debug, Deserialize)]
struct RawFixture {
    #[serde(default)]
    posts: Vec<RawPost>,
}

#[derive(Debug, Deserialize)]
struct RawPost {
    id: u64,
    slug: String,
    title: String,
    published: String,
    #[serde(default)]
    categories: Vec<RawCategory>,
    thumbnail: Option<RawThumbnail>,
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    name: String,
    slug: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawThumbnail {
    src: String,
    #[serde(default)]
    alt: String,
    width: Option<u32>,
    height: Option<u32>,
}

/// Read a fixture file, choosing the parser by extension.
pub fn load_posts(path: &Path) -> Result<PostStore, FixtureError> {
    let contents = fs::read_to_string(path).map_err(|source| FixtureError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let store = match extension.as_deref() {
        Some("toml") => parse_toml(&contents)?,
        Some("json") => parse_json(&contents)?,
        _ => return Err(FixtureError::UnsupportedFormat(path.to_path_buf())),
    };

    info!(path = %path.display(), posts = store.len(), "loaded post fixture");
    Ok(store)
}

pub fn parse_toml(contents: &str) -> Result<PostStore, FixtureError> {
    let raw: RawFixture = toml::from_str(contents)?;
    build_store(raw)
}

pub fn parse_json(contents: &str) -> Result<PostStore, FixtureError> {
    let raw: RawFixture = serde_json::from_str(contents)?;
    build_store(raw)
}

fn build_store(raw: RawFixture) -> Result<PostStore, FixtureError> {
    let mut store = PostStore::new();
    for post in raw.posts {
        let id = post.id;
        if store.insert(build_post(post)?).is_some() {
            return Err(FixtureError::DuplicateId(id));
        }
    }
    Ok(store)
}

fn build_post(raw: RawPost) -> Result<Post, FixtureError> {
    let published = OffsetDateTime::parse(raw.published.trim(), &Rfc3339).map_err(|err| {
        FixtureError::InvalidTimestamp {
            id: raw.id,
            value: raw.published.clone(),
            reason: err.to_string(),
        }
    })?;

    Ok(Post {
        id: PostId(raw.id),
        slug: raw.slug,
        title: raw.title,
        published,
        categories: raw
            .categories
            .into_iter()
            .map(|category| Category {
                name: category.name,
                slug: category.slug,
            })
            .collect(),
        thumbnail: raw.thumbnail.map(|thumbnail| Thumbnail {
            src: thumbnail.src,
            alt: thumbnail.alt,
            width: thumbnail.width,
            height: thumbnail.height,
        }),
    })
}
