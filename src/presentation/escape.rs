use tracing::debug;
use url::Url;

const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp", "ftps", "mailto", "news", "irc"];

/// Normalise a URL for use in an `href`. Absolute URLs must use an allowed
/// scheme; root-relative, query and fragment references pass through with
/// whitespace, control and markup characters removed. Anything else yields
/// an empty string.
///
/// The result still needs attribute escaping, which the templates apply.
pub fn escape_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    match Url::parse(trimmed) {
        Ok(url) if ALLOWED_SCHEMES.contains(&url.scheme()) => url.as_str().to_owned(),
        Ok(url) => {
            debug!(scheme = url.scheme(), "dropping url with disallowed scheme");
            String::new()
        }
        Err(_) if trimmed.starts_with(['/', '?', '#']) => trimmed
            .chars()
            .filter(|ch| !ch.is_whitespace() && !ch.is_control() && !matches!(ch, '"' | '<' | '>'))
            .collect(),
        Err(err) => {
            debug!(error = %err, "dropping unparsable url");
            String::new()
        }
    }
}
