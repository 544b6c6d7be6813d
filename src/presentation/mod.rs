//! Fragment templates, escaping, and output delivery.

pub mod escape;
pub mod output;
pub mod views;

pub use escape::escape_url;
pub use output::{OutputMode, OutputSink, WriterSink};
