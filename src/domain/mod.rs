//! Domain layer: posts, the iteration cursor, and widget settings.

pub mod classes;
pub mod posts;
pub mod query;
pub mod widget;

pub use classes::ClassList;
pub use posts::{Category, HUMAN_DATE_FORMAT, Post, PostCursor, PostId, PostRef, Thumbnail};
pub use query::QueryContext;
pub use widget::{ItemFormat, ListStyle, ThumbSize, WidgetConfig};
