//! URL extraction from content files.
//!
//! A URL token starts with `http://` or `https://` and runs until ASCII
//! whitespace (space, `\t`, `\n`, `\f`, `\r`), a quote, `)` or `>`. Other
//! characters, including `\v` and non-breaking space, stay in the token.
//! Tokens are taken verbatim; trailing punctuation such as `.` or `,` is kept.

use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use std::sync::LazyLock;

static URL_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https?://[^\t\n\x0C\r "')>]+"#).expect("URL_TOKEN: hardcoded regex is valid")
});

/// All URL tokens in `text`, in order of appearance (duplicates included).
pub fn extract_from_text(text: &str) -> impl Iterator<Item = &str> {
    URL_TOKEN.find_iter(text).map(|m| m.as_str())
}

/// Reads each file and returns the set of URLs found across all of them.
///
/// Unreadable files are logged and skipped. Output is deduplicated; its order
/// carries no meaning beyond being stable for the same input.
pub fn extract_urls(paths: &[PathBuf]) -> Vec<String> {
    let mut urls = BTreeSet::new();
    for path in paths {
        let data = match fs::read(path) {
            Ok(d) => d,
            Err(e) => {
                tracing::warn!("read error {}: {}", path.display(), e);
                continue;
            }
        };
        let text = String::from_utf8_lossy(&data);
        let before = urls.len();
        urls.extend(extract_from_text(&text).map(str::to_string));
        tracing::debug!(
            path = %path.display(),
            new_urls = urls.len() - before,
            "scanned file"
        );
    }
    urls.into_iter().collect()
}
