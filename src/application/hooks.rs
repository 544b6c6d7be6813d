//! Named extension points that rewrite fragments before they are delivered.
//!
//! Each point holds an ordered list of transforms. A transform receives the
//! output of the one registered before it; a point with nothing registered
//! passes its value through untouched.

use std::fmt;

use crate::domain::{ClassList, Post, QueryContext, WidgetConfig};

/// Identifies an extension point, mainly for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookPoint {
    PostListClass,
    StartList,
    EndList,
    StartListItem,
    EndListItem,
    ThumbnailDivClass,
    PostThumbnail,
    PostedOn,
}

impl HookPoint {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PostListClass => "post_list_class",
            Self::StartList => "start_list",
            Self::EndList => "end_list",
            Self::StartListItem => "start_list_item",
            Self::EndListItem => "end_list_item",
            Self::ThumbnailDivClass => "thumbnail_div_class",
            Self::PostThumbnail => "post_thumbnail",
            Self::PostedOn => "posted_on",
        }
    }
}

type ListClassHook =
    Box<dyn Fn(Vec<String>, &WidgetConfig, &QueryContext) -> ClassList + Send + Sync>;
type ListFragmentHook = Box<dyn Fn(String, &WidgetConfig, &QueryContext) -> String + Send + Sync>;
type ThumbnailClassHook =
    Box<dyn Fn(Vec<String>, &WidgetConfig, &Post) -> ClassList + Send + Sync>;
type PostFragmentHook = Box<dyn Fn(String, &Post, &WidgetConfig) -> String + Send + Sync>;

/// Registry of transforms, fixed once the renderer is built.
#[derive(Default)]
pub struct Hooks {
    post_list_class: Vec<ListClassHook>,
    start_list: Vec<ListFragmentHook>,
    end_list: Vec<ListFragmentHook>,
    start_list_item: Vec<ListFragmentHook>,
    end_list_item: Vec<ListFragmentHook>,
    thumbnail_div_class: Vec<ThumbnailClassHook>,
    post_thumbnail: Vec<PostFragmentHook>,
    posted_on: Vec<PostFragmentHook>,
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("post_list_class", &self.post_list_class.len())
            .field("start_list", &self.start_list.len())
            .field("end_list", &self.end_list.len())
            .field("start_list_item", &self.start_list_item.len())
            .field("end_list_item", &self.end_list_item.len())
            .field("thumbnail_div_class", &self.thumbnail_div_class.len())
            .field("post_thumbnail", &self.post_thumbnail.len())
            .field("posted_on", &self.posted_on.len())
            .finish()
    }
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrite the class list of the list container.
    pub fn on_post_list_class<F>(mut self, hook: F) -> Self
    where
        F: Fn(Vec<String>, &WidgetConfig, &QueryContext) -> ClassList + Send + Sync + 'static,
    {
        self.post_list_class.push(Box::new(hook));
        self
    }

    pub fn on_start_list<F>(mut self, hook: F) -> Self
    where
        F: Fn(String, &WidgetConfig, &QueryContext) -> String + Send + Sync + 'static,
    {
        self.start_list.push(Box::new(hook));
        self
    }

    pub fn on_end_list<F>(mut self, hook: F) -> Self
    where
        F: Fn(String, &WidgetConfig, &QueryContext) -> String + Send + Sync + 'static,
    {
        self.end_list.push(Box::new(hook));
        self
    }

    pub fn on_start_list_item<F>(mut self, hook: F) -> Self
    where
        F: Fn(String, &WidgetConfig, &QueryContext) -> String + Send + Sync + 'static,
    {
        self.start_list_item.push(Box::new(hook));
        self
    }

    pub fn on_end_list_item<F>(mut self, hook: F) -> Self
    where
        F: Fn(String, &WidgetConfig, &QueryContext) -> String + Send + Sync + 'static,
    {
        self.end_list_item.push(Box::new(hook));
        self
    }

    /// Rewrite the class list of the `<span>` wrapping a thumbnail.
    pub fn on_thumbnail_div_class<F>(mut self, hook: F) -> Self
    where
        F: Fn(Vec<String>, &WidgetConfig, &Post) -> ClassList + Send + Sync + 'static,
    {
        self.thumbnail_div_class.push(Box::new(hook));
        self
    }

    pub fn on_post_thumbnail<F>(mut self, hook: F) -> Self
    where
        F: Fn(String, &Post, &WidgetConfig) -> String + Send + Sync + 'static,
    {
        self.post_thumbnail.push(Box::new(hook));
        self
    }

    pub fn on_posted_on<F>(mut self, hook: F) -> Self
    where
        F: Fn(String, &Post, &WidgetConfig) -> String + Send + Sync + 'static,
    {
        self.posted_on.push(Box::new(hook));
        self
    }

    pub fn registered(&self, point: HookPoint) -> usize {
        match point {
            HookPoint::PostListClass => self.post_list_class.len(),
            HookPoint::StartList => self.start_list.len(),
            HookPoint::EndList => self.end_list.len(),
            HookPoint::StartListItem => self.start_list_item.len(),
            HookPoint::EndListItem => self.end_list_item.len(),
            HookPoint::ThumbnailDivClass => self.thumbnail_div_class.len(),
            HookPoint::PostThumbnail => self.post_thumbnail.len(),
            HookPoint::PostedOn => self.posted_on.len(),
        }
    }

    pub(crate) fn post_list_class(
        &self,
        classes: Vec<String>,
        config: &WidgetConfig,
        query: &QueryContext,
    ) -> Vec<String> {
        self.post_list_class
            .iter()
            .fold(classes, |classes, hook| hook(classes, config, query).into_vec())
    }

    pub(crate) fn list_fragment(
        &self,
        point: HookPoint,
        html: String,
        config: &WidgetConfig,
        query: &QueryContext,
    ) -> String {
        let hooks = match point {
            HookPoint::StartList => &self.start_list,
            HookPoint::EndList => &self.end_list,
            HookPoint::StartListItem => &self.start_list_item,
            HookPoint::EndListItem => &self.end_list_item,
            _ => return html,
        };
        hooks.iter().fold(html, |html, hook| hook(html, config, query))
    }

    pub(crate) fn thumbnail_div_class(
        &self,
        classes: Vec<String>,
        config: &WidgetConfig,
        post: &Post,
    ) -> Vec<String> {
        self.thumbnail_div_class
            .iter()
            .fold(classes, |classes, hook| hook(classes, config, post).into_vec())
    }

    pub(crate) fn post_fragment(
        &self,
        point: HookPoint,
        html: String,
        post: &Post,
        config: &WidgetConfig,
    ) -> String {
        let hooks = match point {
            HookPoint::PostThumbnail => &self.post_thumbnail,
            HookPoint::PostedOn => &self.posted_on,
            _ => return html,
        };
        hooks.iter().fold(html, |html, hook| hook(html, post, config))
    }
}
