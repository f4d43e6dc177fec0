//! ==============================================================================
//! claim_urls.rs - bulk claim url list parsing
//! ==============================================================================
//!
//! purpose:
//!     a website is created with its claim urls pasted into a textarea, one per
//!     line. this turns that text into the array sent to the api.
//!
//! rules:
//!     - lines split on \n, a trailing \r is tolerated
//!     - surrounding whitespace is trimmed, blank lines are skipped
//!     - each url must start with http:// or https://
//!     - a url may appear only once (claim urls are unique per website)
//!
//! ==============================================================================

use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClaimUrlError {
    #[error("line {line}: `{url}` must start with http:// or https://")]
    Scheme { line: usize, url: String },
    #[error("line {line}: `{url}` is listed more than once")]
    Duplicate { line: usize, url: String },
}

/// parse the textarea contents, line numbers in errors are 1-based
pub fn parse_claim_urls(text: &str) -> Result<Vec<String>, ClaimUrlError> {
    let mut urls = Vec::new();
    let mut seen = HashSet::new();
    let mut blank = 0usize;

    for (idx, raw) in text.lines().enumerate() {
        let url = raw.trim();
        if url.is_empty() {
            blank += 1;
            continue;
        }

        let line = idx + 1;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ClaimUrlError::Scheme { line, url: url.to_string() });
        }
        if !seen.insert(url) {
            return Err(ClaimUrlError::Duplicate { line, url: url.to_string() });
        }
        urls.push(url.to_string());
    }

    if blank > 0 {
        log::debug!("skipped {blank} blank claim url line(s)");
    }
    Ok(urls)
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_entry_per_line() {
        let urls = parse_claim_urls("https://a.com\nhttps://b.com").unwrap();
        assert_eq!(urls, vec!["https://a.com", "https://b.com"]);
    }

    #[test]
    fn test_blank_lines_dropped() {
        let urls = parse_claim_urls("\nhttps://a.com\n\n   \nhttps://b.com\n").unwrap();
        assert_eq!(urls, vec!["https://a.com", "https://b.com"]);
    }

    #[test]
    fn test_crlf_and_whitespace() {
        let urls = parse_claim_urls("  https://a.com  \r\nhttp://b.com\r\n").unwrap();
        assert_eq!(urls, vec!["https://a.com", "http://b.com"]);
    }

    #[test]
    fn test_empty_text_is_empty_list() {
        assert!(parse_claim_urls("").unwrap().is_empty());
        assert!(parse_claim_urls("\n \n").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_non_http() {
        let err = parse_claim_urls("https://a.com\nftp://b.com").unwrap_err();
        assert_eq!(err, ClaimUrlError::Scheme { line: 2, url: "ftp://b.com".into() });
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = parse_claim_urls("https://a.com\n\nhttps://a.com").unwrap_err();
        assert_eq!(err, ClaimUrlError::Duplicate { line: 3, url: "https://a.com".into() });
        assert_eq!(err.to_string(), "line 3: `https://a.com` is listed more than once");
    }
}
