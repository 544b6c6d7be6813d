//! Markup renderer for a widget that lists posts grouped by category.
//!
//! [`application::Renderer`] turns widget settings and the host's query
//! context into HTML fragments: the list envelope, list items, post
//! thumbnails, post dates and an attribution comment. Each fragment passes
//! through a named extension point in [`application::Hooks`] before it is
//! returned or written to an [`presentation::OutputSink`].

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
pub mod widget;
