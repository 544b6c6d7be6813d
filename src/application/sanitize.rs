//! HTML class token sanitising.

use crate::application::collaborators::ClassSanitizer;

/// Default sanitizer: drops percent-encoded octets, then every character
/// outside `A-Z a-z 0-9 _ -`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlClassSanitizer;

impl ClassSanitizer for HtmlClassSanitizer {
    fn sanitize_class(&self, class: &str) -> String {
        sanitize_html_class(class)
    }
}

pub fn sanitize_html_class(class: &str) -> String {
    strip_percent_octets(class)
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-'))
        .collect()
}

fn strip_percent_octets(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut kept = String::with_capacity(input.len());
    let mut index = 0;
    for (offset, ch) in input.char_indices() {
        if offset < index {
            continue;
        }
        let is_octet = ch == '%'
            && bytes.get(offset + 1).is_some_and(u8::is_ascii_hexdigit)
            && bytes.get(offset + 2).is_some_and(u8::is_ascii_hexdigit);
        if is_octet {
            index = offset + 3;
        } else {
            kept.push(ch);
        }
    }
    kept
}

/// Sanitize each token and join with single spaces, keeping the order given.
pub fn join_class_tokens(sanitizer: &dyn ClassSanitizer, classes: &[String]) -> String {
    classes
        .iter()
        .map(|class| sanitizer.sanitize_class(class))
        .collect::<Vec<_>>()
        .join(" ")
}
